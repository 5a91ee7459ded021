// Loads a report input document from a JSON file on disk.
//
// Boundaries
// - Only reading and decoding happen here. A template whose pattern payload is
//   unusable still loads; the engine degrades it to zero later.

use crate::application::report::model::ReportInput;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_report_input(path: &Path) -> Result<ReportInput, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
