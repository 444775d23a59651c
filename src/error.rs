use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("A slider needs at least one slide")]
    EmptySlideSet,

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No image files found in directory: {0:?}")]
    NoImages(PathBuf),

    #[error("Failed to decode image {path:?}: {reason}")]
    ImageDecode { path: PathBuf, reason: String },

    #[error("Failed to create texture: {0}")]
    Texture(String),
}

pub type Result<T> = std::result::Result<T, Error>;
