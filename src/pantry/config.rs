use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the data directory (the add-on mounts it at `/data`).
pub const DATA_PATH_ENV: &str = "DATA_PATH";
/// Environment variable holding a `tracing` filter directive, e.g. `pantry=debug`.
pub const LOG_ENV: &str = "PANTRY_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "pantry=debug";
const FALLBACK_DATA_DIR: &str = "data";

/// Runtime configuration for the pantry binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryConfig {
    /// Directory holding the collection files
    pub data_path: PathBuf,

    /// Filter passed to the log subscriber
    pub log_filter: String,
}

impl PantryConfig {
    /// Resolve from explicit inputs.
    ///
    /// Data directory: `cli_data_dir`, then `env_data_path`, then the platform data
    /// directory, then `./data`. Log filter: `env_log`, then `pantry=debug` when
    /// verbose, then `warn`.
    pub fn resolve(
        cli_data_dir: Option<PathBuf>,
        env_data_path: Option<OsString>,
        env_log: Option<String>,
        verbose: bool,
    ) -> Self {
        let data_path = cli_data_dir
            .or_else(|| env_data_path.filter(|p| !p.is_empty()).map(PathBuf::from))
            .unwrap_or_else(default_data_path);

        let log_filter = env_log
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| {
                if verbose {
                    VERBOSE_LOG_FILTER.to_string()
                } else {
                    DEFAULT_LOG_FILTER.to_string()
                }
            });

        Self {
            data_path,
            log_filter,
        }
    }

    /// Resolve using the process environment.
    pub fn from_env(cli_data_dir: Option<PathBuf>, verbose: bool) -> Self {
        Self::resolve(
            cli_data_dir,
            std::env::var_os(DATA_PATH_ENV),
            std::env::var(LOG_ENV).ok(),
            verbose,
        )
    }
}

fn default_data_path() -> PathBuf {
    ProjectDirs::from("com", "pantry", "pantry")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_dir_wins_over_env() {
        let config = PantryConfig::resolve(
            Some(PathBuf::from("/tmp/cli")),
            Some(OsString::from("/data")),
            None,
            false,
        );
        assert_eq!(config.data_path, PathBuf::from("/tmp/cli"));
    }

    #[test]
    fn env_dir_used_without_cli() {
        let config = PantryConfig::resolve(None, Some(OsString::from("/data")), None, false);
        assert_eq!(config.data_path, PathBuf::from("/data"));
    }

    #[test]
    fn empty_env_dir_is_ignored() {
        let config = PantryConfig::resolve(None, Some(OsString::new()), None, false);
        assert_eq!(config.data_path, default_data_path());
    }

    #[test]
    fn log_filter_precedence() {
        let quiet = PantryConfig::resolve(None, None, None, false);
        assert_eq!(quiet.log_filter, "warn");

        let verbose = PantryConfig::resolve(None, None, None, true);
        assert_eq!(verbose.log_filter, "pantry=debug");

        let explicit = PantryConfig::resolve(None, None, Some("trace".into()), true);
        assert_eq!(explicit.log_filter, "trace");
    }
}
