//! Headless demo: runs the solar system for a few hundred scripted
//! frames against the recording backends and prints a summary.

use orrery_engine::{InputEvent, KeyCode, MouseButton};
use orrery_shell::{run, RecordingRenderer, RecordingTextLayer, Runner, ScriptedPlatform, StubImageLoader};
use solar_system::SolarSystemSim;

fn script() -> Vec<Vec<InputEvent>> {
    let mut frames = vec![Vec::new(); 300];
    // Drag-rotate over a few frames.
    frames[10].push(InputEvent::Button {
        button: MouseButton::Primary,
        pressed: true,
    });
    for (i, frame) in frames[10..30].iter_mut().enumerate() {
        frame.push(InputEvent::PointerMove {
            x: 400.0 + i as f32 * 8.0,
            y: 300.0,
        });
    }
    frames[30].push(InputEvent::Button {
        button: MouseButton::Primary,
        pressed: false,
    });
    // Zoom in, speed the simulation up, toggle labels, change font.
    frames[40].push(InputEvent::Scroll { dy: 3.0 });
    frames[60].push(InputEvent::Key {
        key: KeyCode::Up,
        pressed: true,
    });
    frames[80].push(InputEvent::Key {
        key: KeyCode::Right,
        pressed: true,
    });
    frames[100].push(InputEvent::Key {
        key: KeyCode::Control,
        pressed: true,
    });
    frames[120].push(InputEvent::Key {
        key: KeyCode::F,
        pressed: true,
    });
    frames[140].push(InputEvent::Key {
        key: KeyCode::R,
        pressed: true,
    });
    frames
}

fn main() {
    env_logger::init();

    let sim = match SolarSystemSim::new() {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("scene manifest is invalid: {err}");
            std::process::exit(1);
        }
    };

    let mut runner = Runner::new(sim);
    let mut platform = ScriptedPlatform::new(script());
    let mut renderer = RecordingRenderer::new();
    let mut images = StubImageLoader::default();
    let mut text = RecordingTextLayer::new();

    if let Err(err) = run(&mut runner, &mut platform, &mut renderer, &mut images, &mut text) {
        log::error!("startup failed: {err}");
        std::process::exit(1);
    }

    let ctx = runner.context();
    println!("frames presented: {}", platform.presented);
    println!("draw calls recorded: {}", renderer.take_calls().len());
    println!(
        "rotation x{:.2}, orbit x{:.2}, zoom {:.1}",
        ctx.clock.rotation_multiplier, ctx.clock.orbit_multiplier, ctx.camera.zoom
    );
    for body in ctx.scene.iter() {
        println!(
            "{:<8} anchor ({:7.2}, {:5.2}, {:7.2})  trail {:3}",
            body.name,
            body.anchor.x,
            body.anchor.y,
            body.anchor.z,
            body.trail.len()
        );
    }
}
