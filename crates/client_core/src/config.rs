use std::{fs, io, path::Path};

use serde::Deserialize;
use shared::protocol::DEFAULT_API_BASE_URL;
use thiserror::Error;

pub const SETTINGS_FILE: &str = "dashboard.toml";

/// Environment overrides, lowest precedence first.
const API_BASE_URL_ENV_VARS: [&str; 2] = ["LAUNCH_API_BASE_URL", "APP__API_BASE_URL"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
}

impl Settings {
    /// Applies a command-line override; blank values are ignored.
    pub fn with_override(mut self, api_base_url: Option<String>) -> Self {
        if let Some(value) = api_base_url {
            self.set_api_base_url(&value);
        }
        self
    }

    fn set_api_base_url(&mut self, value: &str) {
        let value = value.trim().trim_end_matches('/');
        if !value.is_empty() {
            self.api_base_url = value.to_string();
        }
    }
}

/// Loads settings from `dashboard.toml` in the working directory and the process environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

/// Layers defaults, then the settings file (if present), then environment variables.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings =
                toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.display().to_string(),
                    source,
                })?;
            if let Some(v) = file_cfg.api_base_url {
                settings.set_api_base_url(&v);
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    }

    for name in API_BASE_URL_ENV_VARS {
        if let Some(v) = env(name) {
            settings.set_api_base_url(&v);
        }
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_settings_path(tag: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        env::temp_dir().join(format!("launch_dashboard_{tag}_{suffix}.toml"))
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_to_localhost_without_file_or_env() {
        let settings = load_settings_from(&temp_settings_path("missing"), no_env).expect("load");
        assert_eq!(settings.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn file_value_is_overridden_by_env_then_cli() {
        let path = temp_settings_path("layered");
        fs::write(&path, "api_base_url = \"http://api.internal:9000/\"\n").expect("write");

        let from_file = load_settings_from(&path, no_env).expect("load");
        assert_eq!(from_file.api_base_url, "http://api.internal:9000");

        let vars = HashMap::from([
            ("LAUNCH_API_BASE_URL", "http://env-one:8000"),
            ("APP__API_BASE_URL", "http://env-two:8000"),
        ]);
        let from_env = load_settings_from(&path, |name| vars.get(name).map(|v| v.to_string()))
            .expect("load");
        assert_eq!(from_env.api_base_url, "http://env-two:8000");

        let from_cli = from_env.with_override(Some("http://cli:1234".to_string()));
        assert_eq!(from_cli.api_base_url, "http://cli:1234");

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn blank_values_are_ignored() {
        let settings = load_settings_from(&temp_settings_path("blank"), |_| Some("  ".to_string()))
            .expect("load")
            .with_override(Some(String::new()));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_is_reported() {
        let path = temp_settings_path("malformed");
        fs::write(&path, "api_base_url = [").expect("write");
        let err = load_settings_from(&path, no_env).expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
        fs::remove_file(path).expect("cleanup");
    }
}
