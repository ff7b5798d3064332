//! Headless backends: a renderer that records its draw calls, a text
//! layer that records its strings, and a stub image loader. Used by the
//! demo binary and by tests that assert on frame structure.

use glam::{Mat4, Vec3};
use orrery_engine::{
    AssetError, CameraUniform, ImageData, ImageLoader, MeshHandle, Renderer, Rgb, SphereMesh,
    TextLayer, TextureHandle,
};

/// One recorded renderer call, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    BeginFrame,
    Mesh {
        mesh: MeshHandle,
        model: Mat4,
        texture: TextureHandle,
    },
    LineStrip {
        vertex_count: usize,
        first_alpha: f32,
        last_alpha: f32,
    },
}

#[derive(Default)]
pub struct RecordingRenderer {
    meshes: u32,
    textures: u32,
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drain the recorded calls, leaving the recorder ready for the next
    /// frame.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Renderer for RecordingRenderer {
    fn upload_mesh(&mut self, _mesh: &SphereMesh) -> MeshHandle {
        let handle = MeshHandle(self.meshes);
        self.meshes += 1;
        handle
    }

    // Handle 0 stays reserved for the placeholder.
    fn upload_texture(&mut self, _image: &ImageData) -> TextureHandle {
        self.textures += 1;
        TextureHandle(self.textures)
    }

    fn begin_frame(&mut self, _camera: &CameraUniform) {
        self.calls.push(DrawCall::BeginFrame);
    }

    fn draw_mesh(&mut self, mesh: MeshHandle, model: Mat4, texture: TextureHandle) {
        self.calls.push(DrawCall::Mesh {
            mesh,
            model,
            texture,
        });
    }

    fn draw_line_strip(&mut self, vertices: &[(Vec3, [f32; 4])]) {
        self.calls.push(DrawCall::LineStrip {
            vertex_count: vertices.len(),
            first_alpha: vertices.first().map_or(0.0, |(_, c)| c[3]),
            last_alpha: vertices.last().map_or(0.0, |(_, c)| c[3]),
        });
    }
}

/// A drawn text string with its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub color: Rgb,
}

#[derive(Default)]
pub struct RecordingTextLayer {
    pub texts: Vec<TextDraw>,
    pub loaded_fonts: Vec<String>,
    /// When set, every font load fails. Exercises the fallback paths.
    pub fail_loads: bool,
}

impl RecordingTextLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_texts(&mut self) -> Vec<TextDraw> {
        std::mem::take(&mut self.texts)
    }
}

impl TextLayer for RecordingTextLayer {
    fn load_font(&mut self, path: &str, _pixel_size: f32) -> Result<(), AssetError> {
        if self.fail_loads {
            return Err(AssetError::Font(path.to_string()));
        }
        self.loaded_fonts.push(path.to_string());
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Rgb) {
        self.texts.push(TextDraw {
            text: text.to_string(),
            x,
            y,
            scale,
            color,
        });
    }
}

/// Returns a synthetic one-pixel image for every path, or fails every
/// load when `fail` is set.
#[derive(Default)]
pub struct StubImageLoader {
    pub fail: bool,
    pub requested: Vec<String>,
}

impl ImageLoader for StubImageLoader {
    fn load(&mut self, path: &str) -> Result<ImageData, AssetError> {
        self.requested.push(path.to_string());
        if self.fail {
            return Err(AssetError::Image(path.to_string()));
        }
        Ok(ImageData {
            width: 1,
            height: 1,
            pixels: vec![255, 255, 255, 255],
        })
    }
}
