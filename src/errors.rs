use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum IndexwiseError {
    #[error("No checkable files found in {path}")]
    #[diagnostic(code(indexwise::no_files))]
    NoFiles { path: PathBuf },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(indexwise::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(indexwise::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(indexwise::json))]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(indexwise::toml))]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    #[diagnostic(code(indexwise::glob))]
    Glob(#[from] globset::Error),

    #[error(transparent)]
    #[diagnostic(code(indexwise::regex))]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, IndexwiseError>;
