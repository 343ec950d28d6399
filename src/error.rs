//! Application error type.
//!
//! The simulation itself cannot fail; everything here comes from the log
//! file or theme loading at startup. Terminal I/O errors go straight to
//! `anyhow` in the binary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read theme file {}: {source}", path.display())]
    ThemeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme {name}: {source}")]
    ThemeParse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown built-in theme '{0}'")]
    UnknownTheme(String),

    #[error("no usable theme: primary {primary} failed ({primary_error}); fallback {fallback} failed ({fallback_error})")]
    ThemeUnavailable {
        primary: String,
        primary_error: Box<AppError>,
        fallback: String,
        fallback_error: Box<AppError>,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
