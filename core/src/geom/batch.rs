//! Vertex batches.

use alloc::vec::Vec;
use core::marker::PhantomData;

#[cfg(feature = "fp")]
use crate::math::Mat4x4;
use crate::math::Vec3;
use crate::render::{Model, World};

use super::{Material, Materials, Normal3, TexCoord};

/// A triangle soup with per-vertex attributes stored as parallel arrays.
///
/// Every three consecutive vertices form one triangle. The arrays are kept
/// in lock-step by index: `normals` always has one entry per position, and
/// `texcoords` and `materials` either have one entry per position or none
/// at all.
///
/// `Basis` tracks which space the positions and normals are in. A batch
/// is built in [`Model`] space, then [pre-transformed][Self::pre_transform]
/// into [`World`] space, which consumes the model-space batch. Only
/// world-space batches can be concatenated, as model-space batches made
/// by different generators have no common frame of reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch<Basis = World> {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Vertex normals, of unit length.
    pub normals: Vec<Normal3>,
    /// Texture coordinates, if any.
    pub texcoords: Vec<TexCoord>,
    /// Material attributes, if any.
    pub materials: Materials,
    _basis: PhantomData<Basis>,
}

/// A convenience type for building model-space batches vertex by vertex.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    b: Batch<Model>,
}

impl<B> Batch<B> {
    /// Creates a new batch from the given attribute arrays.
    ///
    /// # Panics
    /// If `normals` is not the same length as `positions`, or if
    /// `texcoords` or `materials` is neither empty nor the same length
    /// as `positions`.
    pub fn new(
        positions: Vec<Vec3>,
        normals: Vec<Normal3>,
        texcoords: Vec<TexCoord>,
        materials: Materials,
    ) -> Self {
        let n = positions.len();
        assert_eq!(normals.len(), n, "normal count must match position count");
        assert!(
            texcoords.is_empty() || texcoords.len() == n,
            "texcoord count {} must be zero or {n}",
            texcoords.len()
        );
        assert!(
            materials.is_consistent()
                && (materials.is_empty() || materials.len() == n),
            "material count {} must be zero or {n}",
            materials.len()
        );
        Self {
            positions,
            normals,
            texcoords,
            materials,
            _basis: PhantomData,
        }
    }

    /// Returns the number of vertices in `self`.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether `self` has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the number of triangles in `self`.
    pub fn tri_count(&self) -> usize {
        self.len() / 3
    }
}

impl Batch<Model> {
    /// Returns a new batch builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Moves `self` into world space by the pre-transform `tf`.
    ///
    /// Positions and normals are transformed as by the free function
    /// [`pre_transform`][super::pre_transform]. Texture coordinates and
    /// materials are left untouched, as are the length and order of every
    /// array.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::{geom::*, math::*};
    /// let mut b = Batch::builder();
    /// b.push(vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
    /// b.push(vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
    /// b.push(vec3(0.0, 0.0, 1.0), vec3(0.0, 1.0, 0.0));
    ///
    /// let world = b.build(&Material::DEFAULT)
    ///     .pre_transform(&translate3(0.0, 5.0, 0.0));
    ///
    /// assert_eq!(world.positions[1], vec3(1.0, 5.0, 0.0));
    /// assert_eq!(world.normals[1], vec3(0.0, 1.0, 0.0));
    /// ```
    #[cfg(feature = "fp")]
    pub fn pre_transform(self, tf: &Mat4x4) -> Batch<World> {
        let Self {
            mut positions,
            mut normals,
            texcoords,
            materials,
            ..
        } = self;
        super::pre_transform(&mut positions, &mut normals, tf);
        Batch::new(positions, normals, texcoords, materials)
    }
}

impl Batch<World> {
    /// Returns a batch containing the vertices of every batch in
    /// `batches`, in order.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::geom::Batch;
    /// let empty = || Batch::new(vec![], vec![], vec![], Default::default());
    /// assert!(Batch::concat([empty(), empty()]).is_empty());
    /// ```
    pub fn concat(batches: impl IntoIterator<Item = Self>) -> Self {
        let mut res = Self::default();
        for b in batches {
            res.append(b);
        }
        res
    }

    /// Appends the vertices of `other` to the end of `self`.
    ///
    /// Each attribute array of `other` is appended to the matching array
    /// of `self`, keeping every array the same length:
    /// * if only one of the batches has materials, the vertices of the
    ///   other one get [`Material::DEFAULT`];
    /// * if only one of the batches has texture coordinates, they are
    ///   dropped from the result.
    ///
    /// An empty batch counts as having both.
    pub fn append(&mut self, mut other: Self) {
        let (n, m) = (self.len(), other.len());
        if self.materials.len() != n {
            self.materials.push_n(&Material::DEFAULT, n);
        }
        if other.materials.len() != m {
            other.materials.push_n(&Material::DEFAULT, m);
        }
        if self.texcoords.len() != n || other.texcoords.len() != m {
            self.texcoords.clear();
            other.texcoords.clear();
        }
        self.positions.append(&mut other.positions);
        self.normals.append(&mut other.normals);
        self.texcoords.append(&mut other.texcoords);
        self.materials.append(&mut other.materials);
    }
}

impl<B> Default for Batch<B> {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            texcoords: Vec::new(),
            materials: Materials::default(),
            _basis: PhantomData,
        }
    }
}

impl Builder {
    /// Appends a vertex with the given position and normal, and no texture
    /// coordinates.
    pub fn push(&mut self, pos: Vec3, normal: Normal3) {
        self.b.positions.push(pos);
        self.b.normals.push(normal);
    }

    /// Appends a vertex with the given position, normal, and texture
    /// coordinates.
    pub fn push_tex(&mut self, pos: Vec3, normal: Normal3, tc: TexCoord) {
        self.push(pos, normal);
        self.b.texcoords.push(tc);
    }

    /// Appends a triangle whose vertices share the normal `normal`.
    pub fn push_tri(&mut self, [a, b, c]: [Vec3; 3], normal: Normal3) {
        for pos in [a, b, c] {
            self.push(pos, normal);
        }
    }

    /// Returns the number of vertices added so far.
    pub fn len(&self) -> usize {
        self.b.len()
    }

    /// Returns whether no vertices have been added.
    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    /// Returns the finished batch, with `mat` as the material of every
    /// vertex.
    ///
    /// # Panics
    /// If some but not all vertices were pushed with texture coordinates.
    pub fn build(self, mat: &Material) -> Batch<Model> {
        let Batch {
            positions,
            normals,
            texcoords,
            mut materials,
            ..
        } = self.b;
        materials.push_n(mat, positions.len());
        // Sanity checks done by new()
        Batch::new(positions, normals, texcoords, materials)
    }
}
