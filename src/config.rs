//! Command-line and environment configuration.
//!
//! Every option can come from a flag or an environment variable. A `.env` file
//! in the working directory is read first.

use crate::analyzer::DEFAULT_ANALYSIS_DELAY;
use crate::store::STORAGE_KEY;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

const APP_DIR: &str = "jielewe";
pub const LOG_FILE: &str = "jielewe.log";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine a data directory; pass --data-file and --log-dir")]
    NoDataDir,
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[derive(Parser, Debug)]
#[command(author, version, about = "A friendly feelings journal for kids", long_about = None)]
pub struct Args {
    /// Where journal entries are stored
    #[arg(long, env = "JIELEWE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Directory for the log file
    #[arg(long, env = "JIELEWE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Pause before an entry's feelings are shown, in milliseconds
    #[arg(long, env = "JIELEWE_ANALYSIS_DELAY_MS", default_value_t = DEFAULT_ANALYSIS_DELAY.as_millis() as u64)]
    pub analysis_delay_ms: u64,

    /// Log filter, e.g. `info` or `jielewe=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_dir: PathBuf,
    pub analysis_delay: Duration,
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_args(Args::parse(), dirs::data_dir())
    }

    /// Resolves defaults against `data_root`, the platform data directory.
    pub fn from_args(args: Args, data_root: Option<PathBuf>) -> Result<Self, ConfigError> {
        if args.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "log level",
                "must not be empty".to_string(),
            ));
        }

        let app_dir = data_root.map(|root| root.join(APP_DIR));
        let data_file = match args.data_file {
            Some(path) => path,
            None => app_dir
                .as_ref()
                .map(|dir| dir.join(STORAGE_KEY))
                .ok_or(ConfigError::NoDataDir)?,
        };
        let log_dir = match args.log_dir {
            Some(dir) => dir,
            None => app_dir.ok_or(ConfigError::NoDataDir)?,
        };

        Ok(Config {
            data_file,
            log_dir,
            analysis_delay: Duration::from_millis(args.analysis_delay_ms),
            log_level: args.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            data_file: None,
            log_dir: None,
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY.as_millis() as u64,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn defaults_live_under_the_data_directory() {
        let config = Config::from_args(args(), Some(PathBuf::from("/data"))).unwrap();

        assert_eq!(
            config.data_file,
            PathBuf::from("/data/jielewe/jielewe-journal-entries.json")
        );
        assert_eq!(config.log_dir, PathBuf::from("/data/jielewe"));
        assert_eq!(config.analysis_delay, Duration::from_millis(1500));
    }

    #[test]
    fn flags_parse_into_args() {
        let parsed = Args::try_parse_from([
            "jielewe",
            "--data-file",
            "/tmp/mine.json",
            "--log-dir",
            "/tmp/logs",
            "--analysis-delay-ms",
            "10",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = Config::from_args(parsed, None).unwrap();

        assert_eq!(config.data_file, PathBuf::from("/tmp/mine.json"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
        assert_eq!(config.analysis_delay, Duration::from_millis(10));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_data_directory_is_an_error() {
        let result = Config::from_args(args(), None);
        assert!(matches!(result, Err(ConfigError::NoDataDir)));

        let only_data_file = Args {
            data_file: Some(PathBuf::from("/tmp/mine.json")),
            ..args()
        };
        let result = Config::from_args(only_data_file, None);
        assert!(matches!(result, Err(ConfigError::NoDataDir)));
    }

    #[test]
    fn blank_log_level_is_rejected() {
        let blank = Args {
            log_level: "  ".to_string(),
            ..args()
        };
        assert!(matches!(
            Config::from_args(blank, Some(PathBuf::from("/data"))),
            Err(ConfigError::InvalidValue("log level", _))
        ));
    }
}
