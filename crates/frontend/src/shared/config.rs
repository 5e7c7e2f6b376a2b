//! Runtime configuration read from the page query string.
//!
//! `?log=info` sets the console log level, `?sample=false` starts with an
//! empty editor instead of the sample schema. Anything unparsable falls back
//! to the defaults.

use contracts::domain::a001_form_schema::SAMPLE_SCHEMA;
use serde::Deserialize;
use std::str::FromStr;
use web_sys::window;

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: Option<String>,
    pub sample: Option<bool>,
}

impl AppConfig {
    /// Parse a query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn log_level(&self) -> log::Level {
        self.log
            .as_deref()
            .and_then(|s| log::Level::from_str(s).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Text placed in the editor on startup.
    pub fn initial_schema(&self) -> &'static str {
        if self.sample.unwrap_or(true) {
            SAMPLE_SCHEMA
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_query("");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.initial_schema(), SAMPLE_SCHEMA);
    }

    #[test]
    fn test_query_values() {
        let config = AppConfig::from_query("?log=warn&sample=false");
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.initial_schema(), "");
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = AppConfig::from_query("log=loud");
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
