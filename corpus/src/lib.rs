pub mod documents;
pub mod markup;

pub use documents::{highlighted_name, load_document, write_document};
pub use markup::strip_markup;

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing source documents.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
