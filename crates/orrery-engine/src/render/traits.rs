//! Backend seams. The simulation core never talks to a graphics or
//! windowing API directly; it emits draw calls through these traits and
//! backends (GPU, recording, headless) implement them.

use glam::{Mat4, Vec3};

use crate::api::types::{MeshHandle, Rgb, TextureHandle};
use crate::camera::orbit::CameraUniform;
use crate::error::AssetError;
use crate::geometry::sphere::SphereMesh;

/// Decoded pixel data handed to a renderer for texture upload.
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8, row-major.
    pub pixels: Vec<u8>,
}

/// Decodes image files into pixel data. Separate from [`Renderer`] so a
/// headless backend can skip decoding entirely.
pub trait ImageLoader {
    fn load(&mut self, path: &str) -> Result<ImageData, AssetError>;
}

/// Draw-call sink for one frame. Calls arrive in draw order and the
/// backend is expected to honor it.
pub trait Renderer {
    fn upload_mesh(&mut self, mesh: &SphereMesh) -> MeshHandle;
    fn upload_texture(&mut self, image: &ImageData) -> TextureHandle;
    fn begin_frame(&mut self, camera: &CameraUniform);
    fn draw_mesh(&mut self, mesh: MeshHandle, model: Mat4, texture: TextureHandle);
    /// A polyline with a per-vertex RGBA color, used for orbit trails.
    fn draw_line_strip(&mut self, vertices: &[(Vec3, [f32; 4])]);
}

/// 2D text overlay, drawn after all 3D geometry.
pub trait TextLayer {
    /// Load a font file, replacing any previously active font.
    fn load_font(&mut self, path: &str, pixel_size: f32) -> Result<(), AssetError>;
    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Rgb);
}
