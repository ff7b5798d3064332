//! The sun, eight planets, and the moon, loaded from a JSON manifest.

use orrery_engine::{
    AssetError, ImageLoader, Renderer, SceneContext, SceneManifest, Sim, SimConfig, TextLayer,
};

const SCENE_JSON: &str = include_str!("../assets/scene.json");

pub struct SolarSystemSim {
    manifest: SceneManifest,
}

impl SolarSystemSim {
    pub fn new() -> Result<Self, AssetError> {
        Ok(Self {
            manifest: SceneManifest::from_json(SCENE_JSON)?,
        })
    }
}

impl Sim for SolarSystemSim {
    fn config(&self) -> SimConfig {
        SimConfig {
            font_pixel_size: self.manifest.font_pixel_size,
            ..SimConfig::default()
        }
    }

    fn init(
        &mut self,
        ctx: &mut SceneContext,
        renderer: &mut dyn Renderer,
        images: &mut dyn ImageLoader,
        text: &mut dyn TextLayer,
    ) -> Result<(), AssetError> {
        ctx.fonts = self.manifest.fonts.clone();

        // Try the fonts in manifest order and settle on the first one
        // that loads. Running without any font is allowed; the overlay
        // just stays blank.
        let mut loaded = false;
        for (i, path) in self.manifest.fonts.iter().enumerate() {
            match text.load_font(path, self.manifest.font_pixel_size) {
                Ok(()) => {
                    ctx.active_font = i;
                    loaded = true;
                    break;
                }
                Err(err) => log::warn!("font {path} failed to load: {err}"),
            }
        }
        if !loaded && !self.manifest.fonts.is_empty() {
            log::error!("no font could be loaded, text overlay disabled");
        }

        self.manifest.build_scene(ctx, renderer, images)
    }
}
