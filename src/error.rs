use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A convenient type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised by the catalog store or the documentation driver.
///
/// Rendering a template never fails, so there are no rendering variants
/// here. Everything in this enum is surfaced at the boundary where files
/// are read, written, or looked up.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalog file does not exist.
    #[error("catalog not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    /// The catalog file exists but does not parse.
    #[error("invalid JSON in {}: {source}", .path.display())]
    InvalidCatalog {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A template source file does not exist.
    #[error("template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// A plugin with this name is already in the catalog.
    #[error("plugin '{0}' already exists in catalog")]
    PluginExists(String),

    /// No plugin with this name is in the catalog.
    #[error("plugin '{0}' not found in catalog")]
    PluginNotFound(String),

    /// An unrecognized documentation file name was requested.
    #[error("unknown documentation file: {0}")]
    UnknownDoc(String),

    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// Converting context data to a renderable value failed.
    #[error("{0}")]
    Serialize(String),
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn invalid_catalog(path: &Path, source: serde_json::Error) -> Self {
        Self::InvalidCatalog {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::Serialize(msg.to_string())
    }
}
