use miette::Diagnostic;
use thiserror::Error;

/// Main error type for retint operations
#[derive(Error, Diagnostic, Debug)]
pub enum RetintError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(retint::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Format error: {message}")]
    #[diagnostic(code(retint::format))]
    Format {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Dimension error: {message}")]
    #[diagnostic(code(retint::dimension))]
    Dimension { message: String },

    #[error("Resource error with {path}: {message}")]
    #[diagnostic(code(retint::resource))]
    Resource {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, RetintError>;
