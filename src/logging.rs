//! File-backed logging.
//!
//! The terminal belongs to the game while it runs, so records go to a file
//! instead of stderr.

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use env_logger::{Builder, Target};
use std::fs::{self, OpenOptions};

/// Install the global logger. `RUST_LOG` overrides the CLI verbosity.
pub fn init(config: &AppConfig) -> Result<()> {
    let path = &config.log_file;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;

    Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;
    use std::path::PathBuf;

    fn config_with_log(log_file: PathBuf) -> AppConfig {
        AppConfig {
            seed: None,
            theme_path: None,
            log_file,
            log_level: LevelFilter::Warn,
        }
    }

    #[test]
    fn test_unwritable_log_path_is_reported() {
        let blocker = std::env::temp_dir().join(format!("skyflap-log-blocker-{}", std::process::id()));
        fs::write(&blocker, b"not a directory").unwrap();

        let err = init(&config_with_log(blocker.join("nested").join("skyflap.log"))).unwrap_err();
        assert!(matches!(err, AppError::LogFile { .. }));

        fs::remove_file(&blocker).unwrap();
    }

    #[test]
    fn test_creates_missing_log_directory() {
        let dir = std::env::temp_dir().join(format!("skyflap-log-dir-{}", std::process::id()));
        let path = dir.join("skyflap.log");

        init(&config_with_log(path.clone())).unwrap();
        assert!(path.is_file());

        fs::remove_dir_all(&dir).unwrap();
    }
}
