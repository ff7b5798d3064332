pub mod platform;
pub mod recording;
pub mod runner;

pub use platform::{run, Platform, ScriptedPlatform};
pub use recording::{DrawCall, RecordingRenderer, RecordingTextLayer, StubImageLoader};
pub use runner::Runner;
