use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading scene assets: manifests, textures, fonts.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to parse scene manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("body {body:?} names unknown parent {parent:?}")]
    UnknownParent { body: String, parent: String },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode image: {0}")]
    Image(String),

    #[error("failed to load font: {0}")]
    Font(String),
}
