use std::path::PathBuf;

use thiserror::Error as ThisError;

use crate::catalog::CatalogError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The emitted tokens did not parse back as a Rust file.
    #[error("Generated code is not valid Rust: {0}")]
    Syntax(#[from] syn::Error),

    #[error("Invalid runtime path {path:?}: {source}")]
    InvalidRuntimePath { path: String, source: syn::Error },

    #[error("I/O Error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
