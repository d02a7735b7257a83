//! Error types for covergen
//!
//! Library code returns `CovergenError`; the binary layer wraps with
//! `anyhow` at command boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for covergen operations
pub type CovergenResult<T> = Result<T, CovergenError>;

/// Main error type for covergen operations
#[derive(Error, Debug)]
pub enum CovergenError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Docx zip archive error
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Invalid TOML configuration
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Terminal prompt error
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Templates directory does not exist
    #[error("templates directory not found: {path}")]
    TemplatesDirNotFound { path: PathBuf },

    /// Docx archive has no document body
    #[error("no word/document.xml entry in {file}")]
    MissingDocumentBody { file: PathBuf },

    /// Converter executable could not be launched
    #[error("failed to launch converter '{program}': {source}")]
    ConverterSpawn {
        program: String,
        source: std::io::Error,
    },

    /// Converter ran but reported failure
    #[error("converter '{program}' exited with {status}: {stderr}")]
    ConverterFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// Converter exited zero but the expected PDF never appeared
    #[error("converter produced no output at {path}")]
    ConverterOutputMissing { path: PathBuf },
}
