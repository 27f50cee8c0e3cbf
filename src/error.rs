//
//  error.rs
//  Routemap
//

use std::path::PathBuf;

/// Errors raised outside the pure resolution path: loading models and
/// constructing mapping annotations from host elements.
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported model file: {0} (expected .json, .yaml or .yml)")]
    UnsupportedModel(PathBuf),

    #[error("Mapping annotation is not placed on a method (found on {0})")]
    NotAMethod(&'static str),
}

pub type Result<T> = std::result::Result<T, MapperError>;
