//! Command-line options and resolved runtime configuration.
//!
//! Gameplay tuning lives in [`crate::constants`] and is deliberately not
//! configurable; this only covers seeding, theming and logging.

use clap::Parser;
use directories::ProjectDirs;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "skyflap.log";
const THEME_FILE_NAME: &str = "theme.json";

/// Flap through the pipes. Space to flap, Esc to quit.
#[derive(Debug, Parser)]
#[command(name = "skyflap", version = crate::build_info::BUILD_VERSION, about)]
pub struct Cli {
    /// Seed for obstacle, cloud and particle randomness
    #[arg(long)]
    pub seed: Option<u64>,

    /// Theme file (JSON); falls back to the built-in theme if unusable
    #[arg(long, value_name = "PATH")]
    pub theme: Option<PathBuf>,

    /// Where to write the log (defaults to the user data directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub seed: Option<u64>,
    /// User theme to try before the built-in one.
    pub theme_path: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        let dirs = project_dirs();
        let theme_path = cli.theme.or_else(|| {
            dirs.as_ref()
                .map(|d| d.config_dir().join(THEME_FILE_NAME))
                .filter(|p| p.is_file())
        });
        let log_file = cli.log_file.unwrap_or_else(|| {
            dirs.as_ref()
                .map(|d| d.data_dir().to_path_buf())
                .unwrap_or_else(std::env::temp_dir)
                .join(LOG_FILE_NAME)
        });

        Self {
            seed: cli.seed,
            theme_path,
            log_file,
            log_level: level_for_verbosity(cli.verbose),
        }
    }

    /// The session's random source: seeded when asked, otherwise from entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "skyflap")
}

pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "skyflap",
            "--seed",
            "42",
            "--log-file",
            "/tmp/x.log",
            "-vv",
        ]);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.verbose, 2);

        let config = AppConfig::from_cli(cli);
        assert_eq!(config.log_file, PathBuf::from("/tmp/x.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_explicit_theme_kept_even_if_missing() {
        let cli = Cli::parse_from(["skyflap", "--theme", "/nonexistent/theme.json"]);
        let config = AppConfig::from_cli(cli);
        assert_eq!(
            config.theme_path,
            Some(PathBuf::from("/nonexistent/theme.json"))
        );
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = AppConfig::from_cli(Cli::parse_from(["skyflap", "--seed", "7"]));
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
