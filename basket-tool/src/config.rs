use std::path::{Path, PathBuf};
use std::time::Duration;

use basket_core::DEFAULT_ALERT_WINDOW;
use serde::Deserialize;

use crate::error::BskError;

const DEFAULT_CURRENCY: &str = "$";

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub alert_secs: Option<u64>,
    pub currency: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub alert_secs: Option<u64>,
    pub currency: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub alert_window: Duration,
    pub currency: String,
    pub log_file: Option<PathBuf>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("basket").join("config.toml"))
}

/// Load the config file.
///
/// An explicit path must exist. The default location is optional and a
/// missing file there yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, BskError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(BskError::ConfigNotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    let content = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}

pub fn resolve_settings(config: Config, overrides: Overrides) -> Settings {
    let alert_window = overrides
        .alert_secs
        .or(config.alert_secs)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_ALERT_WINDOW);

    let currency = overrides
        .currency
        .or(config.currency)
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    Settings {
        alert_window,
        currency,
        log_file: overrides.log_file.or(config.log_file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alert_secs = 5").unwrap();
        writeln!(file, "currency = \"€\"").unwrap();
        writeln!(file, "log_file = \"/tmp/bsk.log\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(
            config,
            Config {
                alert_secs: Some(5),
                currency: Some("€".to_string()),
                log_file: Some(PathBuf::from("/tmp/bsk.log")),
            }
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(BskError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alert_secs = \"soon\"").unwrap();
        assert!(matches!(
            load_config(Some(file.path())),
            Err(BskError::Config(_))
        ));
    }

    #[test]
    fn defaults_without_config() {
        let settings = resolve_settings(Config::default(), Overrides::default());
        assert_eq!(settings.alert_window, Duration::from_secs(3));
        assert_eq!(settings.currency, "$");
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn overrides_win_over_file() {
        let config = Config {
            alert_secs: Some(10),
            currency: Some("£".to_string()),
            log_file: None,
        };
        let overrides = Overrides {
            alert_secs: Some(1),
            currency: None,
            log_file: Some(PathBuf::from("bsk.log")),
        };
        let settings = resolve_settings(config, overrides);
        assert_eq!(settings.alert_window, Duration::from_secs(1));
        assert_eq!(settings.currency, "£");
        assert_eq!(settings.log_file, Some(PathBuf::from("bsk.log")));
    }
}
