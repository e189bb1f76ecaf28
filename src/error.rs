use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A model file line failed its field-count or number check.
    #[error("malformed entry: '{line}'")]
    Malformed { line: String },

    /// A mesh face refers to a vertex that doesn't exist.
    #[error("face {face} refers to vertex {index}, but the mesh has {vertices} vertices")]
    FaceIndex { face: usize, index: usize, vertices: usize },

    #[error("invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    /// A pixel buffer whose length doesn't match its dimensions.
    #[error("expected {expected} pixels for the frame, got {actual}")]
    FrameSize { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed<S: Into<String>>(line: S) -> Self {
        Error::Malformed { line: line.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
