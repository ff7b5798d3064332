use orrery_engine::{
    AssetError, ImageLoader, InputEvent, InputQueue, Renderer, Sim, TextLayer, Viewport,
};

use crate::runner::Runner;

/// The windowing side of the loop: collects input, presents frames,
/// decides when the window is gone.
pub trait Platform {
    /// Push the input events that arrived since the last frame.
    fn poll(&mut self, queue: &mut InputQueue);
    /// Current drawable size; labels and projection follow it on resize.
    fn viewport(&self) -> Viewport;
    fn present(&mut self);
    fn should_close(&self) -> bool;
}

/// Init then tick until the platform closes or the simulation quits.
pub fn run<S: Sim>(
    runner: &mut Runner<S>,
    platform: &mut dyn Platform,
    renderer: &mut dyn Renderer,
    images: &mut dyn ImageLoader,
    text: &mut dyn TextLayer,
) -> Result<(), AssetError> {
    runner.init(renderer, images, text)?;
    loop {
        if platform.should_close() || runner.should_quit() {
            return Ok(());
        }
        platform.poll(runner.input_mut());
        runner.context_mut().viewport = platform.viewport();
        runner.tick(renderer, text);
        platform.present();
    }
}

/// Replays a pre-scripted list of per-frame input batches, then reports
/// closed. Drives the demo binary and the loop tests.
pub struct ScriptedPlatform {
    frames: Vec<Vec<InputEvent>>,
    cursor: usize,
    pub viewport: Viewport,
    pub presented: usize,
}

impl ScriptedPlatform {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames,
            cursor: 0,
            viewport: Viewport::new(1280.0, 720.0),
            presented: 0,
        }
    }

    /// An empty script that still runs the given number of frames.
    pub fn idle(frames: usize) -> Self {
        Self::new(vec![Vec::new(); frames])
    }
}

impl Platform for ScriptedPlatform {
    fn poll(&mut self, queue: &mut InputQueue) {
        if let Some(batch) = self.frames.get(self.cursor) {
            for event in batch {
                queue.push(*event);
            }
        }
        self.cursor += 1;
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn present(&mut self) {
        self.presented += 1;
    }

    fn should_close(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCall, RecordingRenderer, RecordingTextLayer, StubImageLoader};
    use orrery_engine::{
        CelestialBody, KeyCode, SceneContext, TextureHandle, TRAIL_CAPACITY,
    };

    /// Root plus one orbiter, one font.
    struct TwoBodySim;

    impl Sim for TwoBodySim {
        fn init(
            &mut self,
            ctx: &mut SceneContext,
            _renderer: &mut dyn Renderer,
            _images: &mut dyn ImageLoader,
            text: &mut dyn TextLayer,
        ) -> Result<(), AssetError> {
            ctx.fonts = vec!["fonts/Helvetica.ttc".into(), "fonts/MarkerFelt.ttc".into()];
            text.load_font("fonts/Helvetica.ttc", 24.0)?;
            let sun = ctx.next_id();
            ctx.scene
                .spawn(CelestialBody::new(sun, "Sun").with_radius(4.0).with_rotation_speed(0.1));
            let earth = ctx.next_id();
            ctx.scene.spawn(
                CelestialBody::new(earth, "Earth")
                    .with_distance(9.0)
                    .with_orbit_speed(3.0)
                    .with_rotation_speed(1.0)
                    .with_parent(sun),
            );
            Ok(())
        }
    }

    fn key(key: KeyCode) -> InputEvent {
        InputEvent::Key { key, pressed: true }
    }

    #[test]
    fn runs_script_to_completion() {
        let mut runner = Runner::new(TwoBodySim);
        let mut platform = ScriptedPlatform::idle(10);
        let mut renderer = RecordingRenderer::new();
        let mut text = RecordingTextLayer::new();
        run(
            &mut runner,
            &mut platform,
            &mut renderer,
            &mut StubImageLoader::default(),
            &mut text,
        )
        .unwrap();
        assert_eq!(platform.presented, 10);
        assert_eq!(runner.context().scene.len(), 2);
        assert_eq!(
            runner.context().scene.find_by_name("Earth").unwrap().trail.len(),
            10
        );
    }

    #[test]
    fn escape_stops_the_loop_early() {
        let mut runner = Runner::new(TwoBodySim);
        let mut frames = vec![Vec::new(); 10];
        frames[2] = vec![key(KeyCode::Escape)];
        let mut platform = ScriptedPlatform::new(frames);
        let mut renderer = RecordingRenderer::new();
        let mut text = RecordingTextLayer::new();
        run(
            &mut runner,
            &mut platform,
            &mut renderer,
            &mut StubImageLoader::default(),
            &mut text,
        )
        .unwrap();
        // The escape frame still completes; nothing runs after it.
        assert!(runner.should_quit());
        assert_eq!(platform.presented, 3);
    }

    #[test]
    fn frame_calls_are_ordered_spheres_then_trails() {
        let mut runner = Runner::new(TwoBodySim);
        let mut renderer = RecordingRenderer::new();
        let mut text = RecordingTextLayer::new();
        runner
            .init(&mut renderer, &mut StubImageLoader::default(), &mut text)
            .unwrap();
        runner.tick(&mut renderer, &mut text);
        renderer.take_calls();
        runner.tick(&mut renderer, &mut text);

        let calls = renderer.take_calls();
        assert!(matches!(calls[0], DrawCall::BeginFrame));
        assert!(matches!(calls[1], DrawCall::Mesh { .. }));
        assert!(matches!(calls[2], DrawCall::Mesh { .. }));
        assert!(matches!(
            calls[3],
            DrawCall::LineStrip { vertex_count: 2, .. }
        ));
        assert_eq!(calls.len(), 4);
    }

    #[test]
    fn trail_growth_is_capped() {
        let mut runner = Runner::new(TwoBodySim);
        let mut renderer = RecordingRenderer::new();
        let mut text = RecordingTextLayer::new();
        runner
            .init(&mut renderer, &mut StubImageLoader::default(), &mut text)
            .unwrap();
        for _ in 0..TRAIL_CAPACITY + 50 {
            runner.tick(&mut renderer, &mut text);
            renderer.take_calls();
        }
        let earth = runner.context().scene.find_by_name("Earth").unwrap();
        assert_eq!(earth.trail.len(), TRAIL_CAPACITY);
    }

    #[test]
    fn font_cycle_reloads_once() {
        let mut runner = Runner::new(TwoBodySim);
        let mut renderer = RecordingRenderer::new();
        let mut text = RecordingTextLayer::new();
        runner
            .init(&mut renderer, &mut StubImageLoader::default(), &mut text)
            .unwrap();
        runner.push_input(key(KeyCode::F));
        runner.tick(&mut renderer, &mut text);
        runner.tick(&mut renderer, &mut text);
        assert_eq!(
            text.loaded_fonts,
            ["fonts/Helvetica.ttc", "fonts/MarkerFelt.ttc"]
        );
        assert!(!runner.context().font_dirty);
    }

    #[test]
    fn failed_font_reload_is_not_fatal() {
        let mut runner = Runner::new(TwoBodySim);
        let mut renderer = RecordingRenderer::new();
        let mut text = RecordingTextLayer::new();
        runner
            .init(&mut renderer, &mut StubImageLoader::default(), &mut text)
            .unwrap();
        text.fail_loads = true;
        runner.push_input(key(KeyCode::F));
        runner.tick(&mut renderer, &mut text);
        assert!(!runner.context().font_dirty);
        assert!(!runner.should_quit());
        // HUD still reports the requested font by name.
        assert!(text.texts.iter().any(|t| t.text.contains("MarkerFelt")));
    }

    #[test]
    fn placeholder_texture_survives_failed_image_loads() {
        struct TexturedSim;
        impl Sim for TexturedSim {
            fn init(
                &mut self,
                ctx: &mut SceneContext,
                renderer: &mut dyn Renderer,
                images: &mut dyn ImageLoader,
                _text: &mut dyn TextLayer,
            ) -> Result<(), AssetError> {
                let id = ctx.next_id();
                let texture = match images.load("texture/sun.jpg") {
                    Ok(image) => renderer.upload_texture(&image),
                    Err(_) => TextureHandle::PLACEHOLDER,
                };
                ctx.scene
                    .spawn(CelestialBody::new(id, "Sun").with_texture(texture));
                Ok(())
            }
        }

        let mut runner = Runner::new(TexturedSim);
        let mut renderer = RecordingRenderer::new();
        let mut text = RecordingTextLayer::new();
        let mut images = StubImageLoader {
            fail: true,
            requested: Vec::new(),
        };
        runner.init(&mut renderer, &mut images, &mut text).unwrap();
        assert_eq!(
            runner.context().scene.root().unwrap().texture,
            TextureHandle::PLACEHOLDER
        );
    }
}
