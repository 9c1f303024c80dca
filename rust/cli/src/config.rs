use serde::{Deserialize, Serialize};
use std::fs;

/// Resolved CLI configuration: defaults, then the TOML file named by
/// `HIGHCARD_CONFIG`, then individual environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default session name for `play`
    pub session: String,
    /// Force ASCII suit letters instead of Unicode symbols
    pub ascii: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: "table".into(),
            ascii: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file unreadable: {e}"),
            ConfigError::Parse(e) => write!(f, "config file invalid: {e}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    session: Option<String>,
    ascii: Option<bool>,
}

pub fn load() -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    if let Ok(path) = std::env::var("HIGHCARD_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.session {
            cfg.session = v;
        }
        if let Some(v) = f.ascii {
            cfg.ascii = v;
        }
    }

    if let Ok(v) = std::env::var("HIGHCARD_SESSION") {
        if !v.is_empty() {
            cfg.session = v;
        }
    }
    if let Ok(v) = std::env::var("HIGHCARD_ASCII") {
        cfg.ascii = v == "1" || v.eq_ignore_ascii_case("true");
    }

    Ok(cfg)
}
