use orrery_engine::{
    apply_input, compose_frame, AssetError, ImageLoader, InputEvent, InputQueue, MeshHandle,
    Renderer, SceneContext, Sim, SimConfig, SphereMesh, TextLayer, Viewport,
};

/// Owns a simulation and the state the frame loop needs around it: the
/// scene context, the pending input, and the shared sphere mesh.
pub struct Runner<S: Sim> {
    sim: S,
    config: SimConfig,
    ctx: SceneContext,
    input: InputQueue,
    mesh: MeshHandle,
    initialized: bool,
}

impl<S: Sim> Runner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        let ctx = SceneContext::new(Viewport::new(config.viewport_width, config.viewport_height));
        Self {
            sim,
            config,
            ctx,
            input: InputQueue::new(),
            mesh: MeshHandle(0),
            initialized: false,
        }
    }

    /// Upload the shared unit sphere and let the simulation populate the
    /// scene. Must run once before the first tick.
    pub fn init(
        &mut self,
        renderer: &mut dyn Renderer,
        images: &mut dyn ImageLoader,
        text: &mut dyn TextLayer,
    ) -> Result<(), AssetError> {
        let sphere = SphereMesh::generate(1.0, self.config.sphere_sectors, self.config.sphere_stacks);
        self.mesh = renderer.upload_mesh(&sphere);
        self.sim.init(&mut self.ctx, renderer, images, text)?;
        self.initialized = true;
        Ok(())
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    /// One frame: apply pending input, reload the font if it changed,
    /// run the simulation hook, then compose the frame.
    pub fn tick(&mut self, renderer: &mut dyn Renderer, text: &mut dyn TextLayer) {
        debug_assert!(self.initialized, "tick before init");
        apply_input(&mut self.ctx, &mut self.input);

        if self.ctx.font_dirty {
            if let Some(path) = self.ctx.active_font_path() {
                // A failed reload keeps whatever font the text layer had.
                if let Err(err) = text.load_font(path, self.config.font_pixel_size) {
                    log::warn!("font {path} failed to load, keeping previous: {err}");
                }
            }
            self.ctx.font_dirty = false;
        }

        self.sim.update(&mut self.ctx);
        compose_frame(&mut self.ctx, self.mesh, renderer, text);
    }

    pub fn should_quit(&self) -> bool {
        self.ctx.quit
    }

    pub fn context(&self) -> &SceneContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SceneContext {
        &mut self.ctx
    }
}
