//! Config file for the pairsort CLI.
//!
//! Lives at ~/.config/pairsort/config.toml. Every field is optional, and
//! `PairsortConfig::resolve` folds the flags of one invocation over it with
//! the order "flag, then config, then built-in default".
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOME environment variable not set")]
    NoHome,
    #[error("Failed to read config at {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("Failed to parse config at {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("Config file already exists at {0}")]
    AlreadyExists(PathBuf),
    #[error("Failed to write config to {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PairsortConfig {
    pub top: Option<usize>,
    pub state_file: Option<PathBuf>,
    pub show_progress: Option<bool>,
}

/// What a command actually runs with, once flags and config are merged.
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub top: Option<usize>,
    pub state_file: Option<PathBuf>,
    pub show_progress: bool,
}

impl PairsortConfig {
    /// `--no-progress` can only switch the estimate off; a config that
    /// disables it stays disabled.
    pub fn resolve(self, top: Option<usize>, state_file: Option<PathBuf>, no_progress: bool) -> Settings {
        Settings {
            top: top.or(self.top),
            state_file: state_file.or(self.state_file),
            show_progress: !no_progress && self.show_progress.unwrap_or(true),
        }
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# pairsort configuration
# Flags given on the command line win over these values.

# Only resolve the top N items (ties count every member). Unset = rank everything.
# top = 10

# Session snapshot to resume from and save to after every answer.
# state_file = \"/home/me/.local/share/pairsort/session.json\"

# Print the progress estimate above each question.
# show_progress = true
";

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let home = std::env::var_os("HOME").ok_or(ConfigError::NoHome)?;
    Ok(config_path_in(Path::new(&home)))
}

fn config_path_in(home: &Path) -> PathBuf {
    home.join(".config").join("pairsort").join("config.toml")
}

/// A missing file is an empty config; anything else unreadable is an error.
pub fn load_config(path: &Path) -> Result<PairsortConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(PairsortConfig::default()),
        Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
    };
    toml::from_str(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// Write the commented template to `path`, refusing to overwrite.
pub fn create_config_at(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    let write_err = |source| ConfigError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses_to_empty_config() {
        let cfg: PairsortConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(cfg, PairsortConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cfg = PairsortConfig {
            top: Some(5),
            state_file: Some(PathBuf::from("config.json")),
            show_progress: Some(true),
        };
        let settings = cfg.resolve(Some(3), Some(PathBuf::from("flag.json")), true);
        assert_eq!(
            settings,
            Settings { top: Some(3), state_file: Some(PathBuf::from("flag.json")), show_progress: false }
        );
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let cfg = PairsortConfig { top: Some(5), state_file: None, show_progress: Some(false) };
        let settings = cfg.resolve(None, None, false);
        assert_eq!(settings, Settings { top: Some(5), state_file: None, show_progress: false });

        let defaults = PairsortConfig::default().resolve(None, None, false);
        assert_eq!(defaults, Settings { top: None, state_file: None, show_progress: true });
    }

    #[test]
    fn test_missing_file_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, PairsortConfig::default());
    }

    #[test]
    fn test_bad_values_report_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "top = \"ten\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));

        std::fs::write(&path, "limit = 3\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_create_then_load_round_trip_and_no_overwrite() {
        let home = tempfile::tempdir().unwrap();
        let path = config_path_in(home.path());

        create_config_at(&path).unwrap();
        assert_eq!(load_config(&path).unwrap(), PairsortConfig::default());

        let err = create_config_at(&path).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(ref p) if p == &path));
    }
}
