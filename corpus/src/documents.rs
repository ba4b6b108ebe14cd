use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::CorpusError;

/// Read a whole document into memory; the path `-` reads from stdin.
pub fn load_document(path: &Path) -> Result<String, CorpusError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CorpusError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Persist a document copy, highlighted or otherwise.
pub fn write_document(path: &Path, contents: &[u8]) -> Result<(), CorpusError> {
    fs::write(path, contents).map_err(|source| CorpusError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// File name for the highlighted copy of `source`.
pub fn highlighted_name(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    PathBuf::from(format!("highlighted_{}", name))
}
