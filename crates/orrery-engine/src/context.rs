use std::path::Path;

use crate::api::types::{BodyId, Viewport};
use crate::camera::orbit::OrbitCamera;
use crate::core::clock::SimulationClock;
use crate::core::scene::Scene;

/// Everything a frame needs: the scene graph, the clock, the camera, and
/// the handful of UI toggles. Owned by the runner, handed to the
/// simulation as `&mut` during init and update.
pub struct SceneContext {
    pub scene: Scene,
    pub clock: SimulationClock,
    pub camera: OrbitCamera,
    pub viewport: Viewport,
    /// Whether body name labels are drawn this frame.
    pub show_labels: bool,
    /// Font file paths, in cycling order. May be empty; text drawing is
    /// then skipped.
    pub fonts: Vec<String>,
    pub active_font: usize,
    /// Set when the active font changed and the text layer needs a
    /// reload before the next frame.
    pub font_dirty: bool,
    /// Set by the Escape binding; the outer loop exits on it.
    pub quit: bool,
    next_id: u32,
}

impl SceneContext {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scene: Scene::new(),
            clock: SimulationClock::new(),
            camera: OrbitCamera::new(),
            viewport,
            show_labels: true,
            fonts: Vec::new(),
            active_font: 0,
            font_dirty: false,
            quit: false,
            next_id: 0,
        }
    }

    /// Fresh unique body id.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Advance to the next font in the list and mark it for reload.
    /// No-op with fewer than two fonts.
    pub fn cycle_font(&mut self) {
        if self.fonts.len() > 1 {
            self.active_font = (self.active_font + 1) % self.fonts.len();
            self.font_dirty = true;
        }
    }

    pub fn active_font_path(&self) -> Option<&str> {
        self.fonts.get(self.active_font).map(String::as_str)
    }

    /// Display name of the active font: the file stem, for the HUD.
    pub fn active_font_name(&self) -> &str {
        self.active_font_path()
            .and_then(|p| Path::new(p).file_stem())
            .and_then(|s| s.to_str())
            .unwrap_or("none")
    }
}
