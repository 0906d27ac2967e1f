use std::{io, path::PathBuf};
use thiserror::Error;

/// An error produced while building a stylesheet.
#[derive(Debug, Error)]
pub enum SubsetError {
    /// The style has no known source font, or the source font is missing from disk.
    #[error("{}", missing_asset(.style, .path))]
    AssetNotFound { style: String, path: Option<PathBuf> },

    /// The external subsetting tool could not be run or did not produce a font.
    #[error("subsetting tool failed: {reason} (exit status: {})", exit_status(.status))]
    SubsetTool { status: Option<i32>, stdout: String, stderr: String, reason: String },

    /// Reading or writing a file failed.
    #[error("could not access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("at least one icon name is required")]
    EmptyIconSet,
}
impl SubsetError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> SubsetError {
        let path = path.into();
        move |source| SubsetError::Io { path, source }
    }
}

pub type Result<T, E = SubsetError> = std::result::Result<T, E>;

fn missing_asset(style: &str, path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("source font for style '{style}' not found at {}", path.display()),
        None => format!("no source font is known for style '{style}'"),
    }
}

fn exit_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}
