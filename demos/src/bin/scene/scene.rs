//! The fixed contents of the launch pad scene.

use std::path::Path;

use log::{info, warn};

use lp::geom::{Batch, Material, rgb};
use lp::math::{Mat4x4, degs, rotate_x, rotate_y, rotate_z, scale3, translate3};
use lp_geom::io::read_obj;
use lp_geom::solids::{Build, Cone, Cube, Cylinder, Quad};

use crate::state::Anim;

/// Segments around the circumference of every round solid.
const SUBDIVS: u32 = 16;

/// All the meshes of the scene, pre-transformed into world space.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Monitor stand and screens, as one batch.
    pub monitors: Batch,
    /// Textured quads laid on the two screens.
    pub screens: [Batch; 2],
    /// Red and blue floodlight housings.
    pub floodlights: [Batch; 2],
    /// The transparent observation window.
    pub window: Batch,
    /// Emissive boxes marking the interior lights.
    pub light_boxes: [Batch; 2],
    /// Meshes loaded from files, if found.
    pub models: Models,
}

/// Meshes loaded from OBJ files.
#[derive(Clone, Debug, Default)]
pub struct Models {
    pub rocket: Option<Batch>,
    pub launch_site: Option<Batch>,
    pub fan_base: Option<Batch>,
    pub fan_motor: Option<Batch>,
    pub fan_blade: Option<Batch>,
}

/// One draw call: a batch and its model-to-world matrix for this frame.
#[derive(Copy, Clone, Debug)]
pub struct Draw<'a> {
    pub name: &'static str,
    pub batch: &'a Batch,
    pub model: Mat4x4,
    /// Whether the batch is drawn with blending, after everything else.
    pub blend: bool,
}

impl Scene {
    /// Builds the procedural parts of the scene and loads the models
    /// found under `assets`.
    pub fn new(assets: &Path) -> Self {
        let s = Self {
            monitors: monitors(),
            screens: screens(),
            floodlights: floodlights(),
            window: window(),
            light_boxes: light_boxes(),
            models: Models::load(assets),
        };
        info!(
            "scene ready: {} batches, {} triangles",
            s.draws(&Anim::default()).len(),
            s.tri_count()
        );
        s
    }

    /// Returns the total number of triangles in the scene.
    pub fn tri_count(&self) -> usize {
        self.draws(&Anim::default())
            .iter()
            .map(|d| d.batch.tri_count())
            .sum()
    }

    /// Returns the draw calls needed to render the scene in the animation
    /// state `anim`, in drawing order.
    pub fn draws<'a>(&'a self, anim: &Anim) -> Vec<Draw<'a>> {
        let draw = |name: &'static str, batch: &'a Batch, model: Mat4x4| Draw {
            name,
            batch,
            model,
            blend: false,
        };
        let id = Mat4x4::IDENTITY;
        let m = &self.models;

        let motor = translate3(5.1, 0.785 + anim.angle.sin() / 16.0, 21.6);
        let blade = motor
            * translate3(0.0, 0.105, 0.0)
            * rotate_x(anim.angle * 20.0);

        let mut res = Vec::new();
        if let Some(b) = &m.launch_site {
            res.push(draw("launch site", b, id));
        }
        let [red, blue] = &self.floodlights;
        res.push(draw("red floodlight", red, id));
        res.push(draw("blue floodlight", blue, id));

        if let Some(b) = &m.fan_base {
            res.push(draw("fan base", b, translate3(5.1, 0.715, 21.6)));
        }
        if let Some(b) = &m.fan_motor {
            res.push(draw("fan motor", b, motor));
        }
        if let Some(b) = &m.fan_blade {
            res.push(draw("fan blade", b, blade));
        }
        if let Some(b) = &m.rocket {
            res.push(draw("rocket", b, translate3(0.0, anim.height, 0.0)));
        }

        let desk = translate3(4.4, 0.86, 21.45);
        let [s1, s2] = &self.screens;
        res.push(draw("monitors", &self.monitors, desk));
        res.push(draw("screen 1", s1, desk));
        res.push(draw("screen 2", s2, desk));

        let [l1, l2] = &self.light_boxes;
        res.push(draw("light box 1", l1, id));
        res.push(draw("light box 2", l2, id));

        res.push(Draw { blend: true, ..draw("window", &self.window, id) });
        res
    }
}

impl Models {
    /// Loads every model whose file exists under `dir`.
    ///
    /// A model that is missing or fails to load is skipped with a warning.
    pub fn load(dir: &Path) -> Self {
        let load = |file: &str, tf: Mat4x4| {
            let path = dir.join(file);
            if !path.exists() {
                warn!("{} not found, skipping", path.display());
                return None;
            }
            let name = path.display();
            read_obj(&path, &tf)
                .inspect(|b| info!("loaded {name}: {} vertices", b.len()))
                .inspect_err(|e| warn!("{name}: {e}"))
                .ok()
        };
        let fan = scale3(0.1, 0.1, 0.1);
        Self {
            rocket: load(
                "Rocket/rocket.obj",
                scale3(0.005, 0.005, 0.005)
                    * rotate_x(degs(-90.0))
                    * translate3(750.0, -400.0, 600.0),
            ),
            launch_site: load(
                "Scene/scene.obj",
                scale3(0.49, 0.49, 0.49) * translate3(4.09, 0.0, 4.08),
            ),
            fan_base: load("Fan/fan_base.obj", fan),
            fan_motor: load("Fan/fan_motor.obj", fan),
            fan_blade: load(
                "Fan/fan_blade.obj",
                fan * translate3(0.0, -1.0, 0.0),
            ),
        }
    }
}

/// The monitor stand: a base, four arms, and two screen housings,
/// concatenated into one batch in desk-local coordinates.
fn monitors() -> Batch {
    let cyl = Cylinder { subdivs: SUBDIVS, capped: true };
    let base = Material::gray(0.05, 0.1, 0.2, 12.8);
    let arm = Material::gray(0.2, 0.2, 0.4, 12.8);
    let screen = Material::gray(0.0, 0.01, 0.5, 50.0);

    let arm_tf = |rot: Mat4x4, len: f32, x: f32, y: f32, z: f32| {
        rot * scale3(len, 0.02, 0.02) * translate3(x, y, z)
    };
    let screen_tf = |x: f32| scale3(0.1, 0.07, 0.02) * translate3(x, 1.7, 4.0);
    let cube = Cube { half_size: 1.0 };

    Batch::concat([
        cyl.build(&base, &arm_tf(rotate_z(degs(90.0)), 0.1, 0.0, 0.0, 0.0)),
        cyl.build(&arm, &arm_tf(rotate_z(degs(45.0)), 0.115, 0.3, 1.7, 0.0)),
        cyl.build(&arm, &arm_tf(rotate_z(degs(135.0)), 0.115, 0.3, -1.7, 0.0)),
        cyl.build(&arm, &arm_tf(rotate_y(degs(270.0)), 0.06, 0.0, 5.7, 3.3)),
        cyl.build(&arm, &arm_tf(rotate_y(degs(270.0)), 0.06, 0.0, 5.7, -3.3)),
        cube.build(&screen, &screen_tf(-1.2)),
        cube.build(&screen, &screen_tf(1.2)),
    ])
}

/// The textured quads on the front faces of the two screens.
fn screens() -> [Batch; 2] {
    let quad = Quad { half_size: 1.0 };
    let diffuse = rgb(1.0, 0.5, 0.31);
    let specular = rgb(0.5, 0.5, 0.5);
    [(rgb(0.0, 1.0, 0.0), -1.2), (rgb(1.0, 0.0, 0.0), 1.2)].map(
        |(ambient, x)| {
            let mat = Material::new(ambient, diffuse, specular, 32.0);
            let tf = scale3(0.1, 0.07, 0.02) * translate3(x, 1.7, 5.01);
            quad.build(&mat, &tf)
        },
    )
}

/// The cones housing the two launch pad floodlights.
fn floodlights() -> [Batch; 2] {
    let cone = Cone { subdivs: SUBDIVS, capped: true };
    let (r, b) = (rgb(1.0, 0.0, 0.0), rgb(0.0, 0.0, 1.0));
    let red = Material::new(r, r, 0.5 * r, 32.0);
    let blue = Material::new(b, b, 0.5 * b, 32.0);
    [(red, 15.1), (blue, 24.7)].map(|(mat, z)| {
        let tf = scale3(0.2, 0.1, 0.1)
            * translate3(13.1, 98.6, z)
            * rotate_z(degs(144.0));
        cone.build(&mat, &tf)
    })
}

fn window() -> Batch {
    let glass = rgb(0.5, 0.87, 1.0);
    let mat = Material::new(glass, glass, rgb(0.5, 0.5, 0.5), 32.0)
        .with_alpha(0.1);
    let tf = scale3(2.45, 0.6, 0.1) * translate3(-0.19, 0.58, -2.56);
    Cube { half_size: 1.0 }.build(&mat, &tf)
}

fn light_boxes() -> [Batch; 2] {
    let mat = Material::gray(1.0, 1.0, 1.0, 2.0);
    [18.8, -28.17].map(|x| {
        let tf = scale3(0.1, 0.1, 0.1) * translate3(x, 8.42, 9.2);
        Cube { half_size: 1.0 }.build(&mat, &tf)
    })
}

#[cfg(test)]
mod tests {
    use lp::assert_approx_eq;
    use lp::math::{Vec3, vec3};

    use super::*;

    fn scene() -> Scene {
        Scene::new(Path::new("no/such/dir"))
    }

    #[test]
    fn monitors_concatenate_arms_and_screens() {
        let m = monitors();
        assert_eq!(m.len(), 5 * 16 * 12 + 2 * 36);
        assert_eq!(m.texcoords.len(), m.len());
        assert_eq!(m.materials.len(), m.len());
        let mat = |i| m.materials.get(i).expect("in bounds");
        assert_eq!(mat(0), Material::gray(0.05, 0.1, 0.2, 12.8));
        assert_eq!(mat(200).specular, rgb(0.4, 0.4, 0.4));
        assert_eq!(mat(m.len() - 1).shininess, 50.0);
        for n in &m.normals {
            assert_approx_eq!(n.len(), 1.0, eps = 1e-5);
        }
    }

    #[test]
    fn screens_sit_in_front_of_housings() {
        let [s1, s2] = screens();
        assert_eq!(s1.len(), 6);
        for p in &s1.positions {
            assert_approx_eq!(p.z(), 0.1002, eps = 1e-5);
            assert!(p.x() < 0.0);
        }
        assert!(s2.positions.iter().all(|p| p.x() > 0.0));
        let ambient = s2.materials.get(0).map(|m| m.ambient);
        assert_eq!(ambient, Some(rgb(1.0, 0.0, 0.0)));
    }

    #[test]
    fn window_is_translucent() {
        let w = window();
        assert_eq!(w.len(), 36);
        assert!(w.materials.alpha.iter().all(|&a| a == 0.1));
    }

    #[test]
    fn light_boxes_are_placed() {
        let [a, _] = light_boxes();
        let init = (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN));
        let (min, max) = a.positions.iter().fold(init, |(lo, hi), p| {
            (lo.zip_map(*p, f32::min), hi.zip_map(*p, f32::max))
        });
        assert_approx_eq!(min, vec3(1.78, 0.742, 0.82), eps = 1e-5);
        assert_approx_eq!(max, vec3(1.98, 0.942, 1.02), eps = 1e-5);
    }

    #[test]
    fn missing_models_are_skipped() {
        let s = scene();
        assert!(s.models.rocket.is_none());
        assert!(s.models.fan_blade.is_none());

        let draws = s.draws(&Anim::default());
        let names: Vec<_> = draws.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            [
                "red floodlight",
                "blue floodlight",
                "monitors",
                "screen 1",
                "screen 2",
                "light box 1",
                "light box 2",
                "window",
            ]
        );
    }

    #[test]
    fn transparent_batch_is_drawn_last() {
        let s = scene();
        let draws = s.draws(&Anim::default());
        let (last, rest) = draws.split_last().expect("non-empty");
        assert!(last.blend);
        assert!(rest.iter().all(|d| !d.blend));
    }

    #[test]
    fn monitors_move_with_desk() {
        let s = scene();
        let draws = s.draws(&Anim::default());
        let d = draws.iter().find(|d| d.name == "monitors").expect("monitors");
        assert_eq!(d.model, translate3(4.4, 0.86, 21.45));
    }

    #[test]
    fn rocket_rises_with_animation() {
        let mut s = scene();
        let [a, _] = light_boxes();
        s.models.rocket = Some(a);

        let mut anim = Anim::default();
        anim.height = 3.0;
        let draws = s.draws(&anim);
        let d = draws.iter().find(|d| d.name == "rocket").expect("rocket");
        assert_eq!(d.model, translate3(0.0, 3.0, 0.0));
    }
}
