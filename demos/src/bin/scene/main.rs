//! Headless launch pad scene.
//!
//! Builds the scene, then runs a scripted sequence of frames, computing
//! every matrix and light a renderer would need to draw each frame.
//! Pass the asset directory and the number of frames as arguments; set
//! `RUST_LOG=trace` to see the per-frame camera state.

use std::{env, path::PathBuf, time::Instant};

use log::{debug, info, trace, warn};

use lp::math::{Mat3x3, Mat4x4};
use lp::render::{Motion, Transform};

use scene::Scene;
use state::{Control, Input, State};

mod scene;
mod state;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 720;
const DT: f32 = 1.0 / 60.0;

/// What a renderer receives for a single draw call.
struct Uniforms {
    mvp: Mat4x4,
    normal: Mat3x3,
}

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let assets = PathBuf::from(args.next().unwrap_or("external".into()));
    let frames: u32 = args.next().and_then(|n| n.parse().ok()).unwrap_or(600);

    let start = Instant::now();
    let scene = Scene::new(&assets);
    info!("built scene in {:?}", start.elapsed());

    let mut state = State::new(WIDTH, HEIGHT);
    for (i, l) in state.panel.lights().iter().enumerate() {
        debug!("light {i}: {l:?}");
    }

    let start = Instant::now();
    let mut draw_calls = 0;
    for frame in 0..frames {
        state.update(DT, &script(frame));

        let view_proj = state.camera.world_to_project();
        for d in scene.draws(&state.anim) {
            let u = Uniforms {
                mvp: view_proj * d.model,
                normal: d.model.normal_matrix(),
            };
            if !u.mvp.is_finite() || !u.normal.is_finite() {
                warn!("frame {frame}: degenerate transform for {}", d.name);
            }
            draw_calls += 1;
        }
        let cam = &state.camera.transform;
        trace!(
            "frame {frame}: cam x={:.2} y={:.2} r={:.2} pitch={} yaw={}, \
             rocket at {:.3}",
            cam.x,
            cam.y,
            cam.radius,
            cam.pitch,
            cam.yaw,
            state.anim.height
        );
    }
    let elapsed = start.elapsed();

    info!(
        "{frames} frames, {draw_calls} draw calls in {elapsed:?} \
         ({:.1} µs/frame)",
        elapsed.as_secs_f64() * 1e6 / frames.max(1) as f64
    );
    info!(
        "final view matrix: {:?}",
        state.camera.transform.world_to_view()
    );
    info!("rocket height: {:.3}", state.anim.height);
}

/// Returns the input for frame number `frame` of the scripted fly-through.
///
/// Starts the launch, flies forward while turning, speeds the launch
/// up, then backs off at double speed.
fn script(frame: u32) -> Input {
    let held = |forward, back, left| Motion {
        forward,
        back,
        left,
        ..Motion::default()
    };
    match frame {
        0 => Input {
            control: Some(Control::PlayPause),
            ..Input::default()
        },
        1..120 => Input {
            motion: held(true, false, false),
            look: Some((2.0, -0.5)),
            ..Input::default()
        },
        120 => Input {
            control: Some(Control::Faster),
            ..Input::default()
        },
        121..240 => Input {
            motion: held(false, false, true),
            slow: true,
            ..Input::default()
        },
        240..360 => Input {
            motion: held(false, true, false),
            fast: true,
            ..Input::default()
        },
        _ => Input::default(),
    }
}
