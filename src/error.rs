// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::graph::VertexId;

#[derive(Debug, Error)]
pub enum ArborError {
    #[error("partial tree list is empty")]
    EmptyCollection,

    /// A parent chain never reached a root. The forest is corrupt.
    #[error("parent chain starting at vertex {vertex} does not terminate at a root")]
    CyclicChain { vertex: VertexId },

    #[error("vertex {vertex} is outside the forest")]
    UnknownVertex { vertex: VertexId },

    #[error("graph parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ArborError>;

impl ArborError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        ArborError::Parse {
            line,
            message: message.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to ArborError::Io with unknown path.
impl From<std::io::Error> for ArborError {
    fn from(source: std::io::Error) -> Self {
        ArborError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
