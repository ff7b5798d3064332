//! Data-driven scene description, loaded from JSON at startup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::types::{BodyId, TextureHandle};
use crate::context::SceneContext;
use crate::core::body::CelestialBody;
use crate::error::AssetError;
use crate::render::traits::{ImageLoader, Renderer};

fn default_font_pixel_size() -> f32 {
    24.0
}

/// One body entry in the manifest. Bodies must be listed parents-first;
/// `parent` refers to an earlier entry by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    pub radius: f32,
    #[serde(default)]
    pub distance: f32,
    #[serde(default)]
    pub tilt: f32,
    #[serde(default)]
    pub orbit_speed: f32,
    #[serde(default)]
    pub rotation_speed: f32,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
}

/// Root manifest document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    #[serde(default)]
    pub fonts: Vec<String>,
    #[serde(default = "default_font_pixel_size")]
    pub font_pixel_size: f32,
    pub bodies: Vec<BodyDescriptor>,
}

impl SceneManifest {
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Spawn every described body into the context's scene, resolving
    /// parent names to ids and uploading textures.
    ///
    /// An unknown parent name is fatal. A texture that fails to load is
    /// not: the body falls back to the placeholder texture with a
    /// warning, so one missing file cannot take down the whole scene.
    pub fn build_scene(
        &self,
        ctx: &mut SceneContext,
        renderer: &mut dyn Renderer,
        images: &mut dyn ImageLoader,
    ) -> Result<(), AssetError> {
        let mut ids: HashMap<&str, BodyId> = HashMap::with_capacity(self.bodies.len());
        for desc in &self.bodies {
            let parent = match &desc.parent {
                Some(name) => Some(*ids.get(name.as_str()).ok_or_else(|| {
                    AssetError::UnknownParent {
                        body: desc.name.clone(),
                        parent: name.clone(),
                    }
                })?),
                None => None,
            };

            let texture = match &desc.texture {
                Some(path) => match images.load(path) {
                    Ok(image) => renderer.upload_texture(&image),
                    Err(err) => {
                        log::warn!("texture {path} failed to load, using placeholder: {err}");
                        TextureHandle::PLACEHOLDER
                    }
                },
                None => TextureHandle::PLACEHOLDER,
            };

            let id = ctx.next_id();
            let mut body = CelestialBody::new(id, &desc.name)
                .with_radius(desc.radius)
                .with_distance(desc.distance)
                .with_tilt(desc.tilt)
                .with_orbit_speed(desc.orbit_speed)
                .with_rotation_speed(desc.rotation_speed)
                .with_texture(texture);
            if let Some(parent) = parent {
                body = body.with_parent(parent);
            }
            ctx.scene.spawn(body);
            ids.insert(&desc.name, id);
        }
        Ok(())
    }
}
