pub mod api;
pub mod assets;
pub mod camera;
pub mod compose;
pub mod context;
pub mod core;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;

// Re-export key types at crate root for convenience
pub use api::sim::{Sim, SimConfig};
pub use api::types::{BodyId, MeshHandle, Rgb, TextureHandle, Viewport};
pub use assets::manifest::{BodyDescriptor, SceneManifest};
pub use camera::orbit::{CameraUniform, DragMode, OrbitCamera};
pub use camera::project::world_to_screen;
pub use compose::compose_frame;
pub use context::SceneContext;
pub use core::body::CelestialBody;
pub use core::clock::{SimulationClock, SpeedAdjust, TIME_STEP};
pub use core::scene::Scene;
pub use core::trail::{TrailBuffer, TRAIL_CAPACITY};
pub use error::AssetError;
pub use geometry::sphere::{MeshVertex, SphereMesh};
pub use input::controls::apply_input;
pub use input::queue::{InputEvent, InputQueue, KeyCode, MouseButton};
pub use render::traits::{ImageData, ImageLoader, Renderer, TextLayer};
