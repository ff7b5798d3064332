use crate::context::SceneContext;
use crate::error::AssetError;
use crate::render::traits::{ImageLoader, Renderer, TextLayer};

/// Startup parameters a simulation hands to the runner.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub sphere_sectors: u32,
    pub sphere_stacks: u32,
    pub font_pixel_size: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            sphere_sectors: 36,
            sphere_stacks: 18,
            font_pixel_size: 24.0,
        }
    }
}

/// A simulation the runner can drive. Implementors populate the scene in
/// `init` and may add per-tick logic in `update`; the runner handles
/// input, kinematics, and frame composition around it.
pub trait Sim {
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Populate the scene: spawn bodies, upload textures, load fonts.
    fn init(
        &mut self,
        ctx: &mut SceneContext,
        renderer: &mut dyn Renderer,
        images: &mut dyn ImageLoader,
        text: &mut dyn TextLayer,
    ) -> Result<(), AssetError>;

    /// Per-tick hook, called after input but before kinematics.
    fn update(&mut self, _ctx: &mut SceneContext) {}
}
