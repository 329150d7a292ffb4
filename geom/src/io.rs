//! Loading meshes from Wavefront OBJ files.
//!
//! Parsing is done by the [`tobj`] crate. Faces are triangulated and every
//! face corner becomes a vertex of its own, so the result can be drawn as
//! a plain triangle list without an index buffer. Each vertex gets the
//! material of the face it belongs to, and the whole mesh is then
//! [pre-transformed][lp::geom::pre_transform] into world space.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display, Formatter};
use std::{fmt::Debug, io::BufRead, path::Path};

use log::{debug, warn};
use tobj::{LoadError, LoadOptions, MTLLoadResult};

use lp::geom::{Batch, Color3, Material, Materials, rgb, uv};
use lp::math::{Mat4x4, vec3};
use lp::render::{Model, World};

/// Error loading an OBJ file.
#[derive(Debug)]
pub enum Error {
    /// The file could not be read or parsed.
    Load(LoadError),
    /// The named object has no vertex normals.
    MissingNormals(String),
    /// The named object refers to a material not in its material library.
    NoSuchMaterial(String, usize),
}

/// Result of loading an OBJ file.
pub type Result<T> = core::result::Result<T, Error>;

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load(e) => write!(f, "error loading obj file: {e}"),
            Error::MissingNormals(name) => {
                write!(f, "object '{name}' has no vertex normals")
            }
            Error::NoSuchMaterial(name, i) => {
                write!(f, "object '{name}' refers to missing material #{i}")
            }
        }
    }
}

impl From<LoadError> for Error {
    fn from(e: LoadError) -> Self {
        Error::Load(e)
    }
}

fn options() -> LoadOptions {
    LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..LoadOptions::default()
    }
}

/// Loads the OBJ file at `path` and pre-transforms it by `tf`.
///
/// Material libraries referenced by the file are looked up relative to
/// its directory. A missing or malformed library is not an error: the
/// affected objects get [`Material::DEFAULT`] instead.
///
/// # Errors
/// If the file cannot be read or parsed, or if any object in it lacks
/// normals.
pub fn read_obj(
    path: impl AsRef<Path> + Debug,
    tf: &Mat4x4,
) -> Result<Batch<World>> {
    let (models, mats) = tobj::load_obj(&path, &options())?;
    let mats = mats.unwrap_or_else(|e| {
        warn!("could not load materials for {path:?}: {e}");
        Vec::new()
    });
    let b = flatten(&models, &mats)?;
    debug!(
        "loaded {path:?}: {} objects, {} triangles",
        models.len(),
        b.tri_count()
    );
    Ok(b.pre_transform(tf))
}

/// Parses an OBJ file from `input` and pre-transforms it by `tf`.
///
/// `mtl_loader` is called with the name of each material library the
/// file references, and should return the parsed library, for example
/// by calling [`tobj::load_mtl_buf`].
///
/// # Errors
/// If `input` cannot be read or parsed, or if any object in it lacks
/// normals.
pub fn parse_obj<R, L>(
    mut input: R,
    mtl_loader: L,
    tf: &Mat4x4,
) -> Result<Batch<World>>
where
    R: BufRead,
    L: Fn(&Path) -> MTLLoadResult,
{
    let (models, mats) =
        tobj::load_obj_buf(&mut input, &options(), mtl_loader)?;
    let mats = mats.unwrap_or_else(|e| {
        warn!("could not load materials: {e}");
        Vec::new()
    });
    let b = flatten(&models, &mats)?;
    debug!("parsed {} objects, {} triangles", models.len(), b.tri_count());
    Ok(b.pre_transform(tf))
}

/// Converts a tobj material, filling in missing fields from the default.
fn to_material(m: &tobj::Material) -> Material {
    let d = Material::DEFAULT;
    let color = |c: Option<[f32; 3]>, def: Color3| {
        c.map_or(def, |[r, g, b]| rgb(r, g, b))
    };
    Material {
        ambient: color(m.ambient, d.ambient),
        diffuse: color(m.diffuse, d.diffuse),
        specular: color(m.specular, d.specular),
        shininess: m.shininess.unwrap_or(d.shininess),
        alpha: m.dissolve.unwrap_or(d.alpha),
    }
}

/// Expands indexed models into a single model-space batch.
fn flatten(
    models: &[tobj::Model],
    mats: &[tobj::Material],
) -> Result<Batch<Model>> {
    let n: usize = models.iter().map(|m| m.mesh.indices.len()).sum();
    let mut positions = Vec::with_capacity(n);
    let mut normals = Vec::with_capacity(n);
    let mut texcoords = Vec::with_capacity(n);
    let mut materials = Materials::default();

    // Texcoords are kept only if every object has them
    let textured = models.iter().all(|m| !m.mesh.texcoords.is_empty());
    if !textured && models.iter().any(|m| !m.mesh.texcoords.is_empty()) {
        debug!("some objects have no texture coordinates, dropping all");
    }

    for model in models {
        let (mesh, name) = (&model.mesh, &model.name);
        if mesh.normals.is_empty() {
            return Err(Error::MissingNormals(name.clone()));
        }
        let mat = match mesh.material_id {
            Some(i) if i < mats.len() => to_material(&mats[i]),
            Some(i) if !mats.is_empty() => {
                return Err(Error::NoSuchMaterial(name.clone(), i));
            }
            _ => {
                warn!("object '{name}' has no material, using default");
                Material::DEFAULT
            }
        };

        for &i in &mesh.indices {
            let i = i as usize;
            let p = &mesh.positions[3 * i..3 * i + 3];
            let nm = &mesh.normals[3 * i..3 * i + 3];
            positions.push(vec3(p[0], p[1], p[2]));
            normals.push(vec3(nm[0], nm[1], nm[2]));
            if textured {
                let t = &mesh.texcoords[2 * i..2 * i + 2];
                texcoords.push(uv(t[0], t[1]));
            }
        }
        materials.push_n(&mat, mesh.indices.len());
    }
    Ok(Batch::new(positions, normals, texcoords, materials))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use std::io::Cursor;

    use lp::assert_approx_eq;
    use lp::math::{scale3, translate3};

    use super::*;

    const QUAD_OBJ: &str = "\
mtllib quad.mtl
o quad
v -1 -1 0
v 1 -1 0
v 1 1 0
v -1 1 0
vn 0 0 1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
usemtl glass
f 1/1/1 2/2/1 3/3/1 4/4/1
";

    const QUAD_MTL: &str = "\
newmtl glass
Ka 0.5 0.87 1.0
Kd 0.5 0.87 1.0
Ks 0.5 0.5 0.5
Ns 32
d 0.1
";

    fn mtl(_: &Path) -> MTLLoadResult {
        tobj::load_mtl_buf(&mut QUAD_MTL.as_bytes())
    }

    fn no_mtl(_: &Path) -> MTLLoadResult {
        Err(LoadError::OpenFileFailed)
    }

    #[test]
    fn parse_triangulates_and_flattens() {
        let b = parse_obj(Cursor::new(QUAD_OBJ), mtl, &Mat4x4::IDENTITY)
            .expect("valid obj");

        assert_eq!(b.len(), 6);
        assert_eq!(b.normals.len(), 6);
        assert_eq!(b.texcoords.len(), 6);
        assert_eq!(b.materials.len(), 6);
        assert!(b.normals.iter().all(|&n| n == vec3(0.0, 0.0, 1.0)));
        // Each corner keeps its own texcoord
        for (p, t) in b.positions.iter().zip(&b.texcoords) {
            assert_eq!(uv((p.x() + 1.0) / 2.0, (p.y() + 1.0) / 2.0), *t);
        }
    }

    #[test]
    fn parse_reads_materials() {
        let b = parse_obj(Cursor::new(QUAD_OBJ), mtl, &Mat4x4::IDENTITY)
            .expect("valid obj");
        let m = b.materials.get(0).expect("has materials");
        assert_eq!(m.ambient, rgb(0.5, 0.87, 1.0));
        assert_eq!(m.specular, rgb(0.5, 0.5, 0.5));
        assert_eq!(m.shininess, 32.0);
        assert_eq!(m.alpha, 0.1);
        assert_eq!(b.materials.get(5), Some(m));
    }

    #[test]
    fn missing_material_library_uses_default() {
        let b = parse_obj(Cursor::new(QUAD_OBJ), no_mtl, &Mat4x4::IDENTITY)
            .expect("valid obj");
        assert_eq!(b.materials.get(3), Some(Material::DEFAULT));
    }

    #[test]
    fn parse_pre_transforms() {
        let tf = scale3(2.0, 1.0, 1.0).then(&translate3(0.0, 5.0, 0.0));
        let b = parse_obj(Cursor::new(QUAD_OBJ), mtl, &tf).expect("valid obj");

        for p in &b.positions {
            assert_eq!(p.x().abs(), 2.0);
            assert_eq!(p.z(), 0.0);
            assert!(p.y() == 4.0 || p.y() == 6.0);
        }
        for n in &b.normals {
            assert_approx_eq!(*n, vec3(0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn missing_normals_is_an_error() {
        let obj = "o tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let res = parse_obj(Cursor::new(obj), no_mtl, &Mat4x4::IDENTITY);
        assert!(
            matches!(&res, Err(Error::MissingNormals(name)) if name == "tri"),
            "{res:?}"
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let res = read_obj("no/such/file.obj", &Mat4x4::IDENTITY);
        assert!(matches!(res, Err(Error::Load(_))));
        if let Err(e) = res {
            assert!(e.to_string().starts_with("error loading obj file"));
        }
    }
}
