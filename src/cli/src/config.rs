use color_eyre::eyre::{WrapErr, eyre};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// User preferences, read from `<config dir>/cube/config.toml` unless a file is
/// given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Moves in a scramble when `--length` is not given.
    pub scramble_length: usize,
    /// List pieces that stay in place alongside the cycles.
    pub show_fixed_points: bool,
    /// Print positions as `URF`, `UB`, ... instead of indices.
    pub names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scramble_length: 25,
            show_fixed_points: false,
            names: true,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("cube");
        path.push("config.toml");
        Some(path)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// An explicit path must exist; the default one may be absent.
    pub fn load(explicit: Option<&Path>) -> color_eyre::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_owned(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No configuration file found, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read configuration file {path:?}"))?;
        let config = Self::from_toml(&text)
            .map_err(|e| eyre!("Failed to parse configuration file {path:?}: {e}"))?;
        info!("Loaded configuration from {path:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml("show_fixed_points = true\nscramble_length = 10\n").unwrap();
        assert_eq!(
            config,
            Config {
                scramble_length: 10,
                show_fixed_points: true,
                names: true,
            }
        );
    }

    #[test]
    fn test_malformed_file() {
        assert!(Config::from_toml("scramble_length = \"long\"").is_err());
        assert!(Config::from_toml("colour = true").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("cube-config-that-does-not-exist.toml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_file() {
        let path = std::env::temp_dir().join(format!("cube-config-{}.toml", std::process::id()));
        fs::write(&path, "names = false\n").unwrap();
        let config = Config::load(Some(&path));
        fs::remove_file(&path).unwrap();
        assert!(!config.unwrap().names);
    }
}
