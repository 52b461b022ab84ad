use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str =
    "https://customer-rest-service-frontend-personaltrainer.2.rahtiapp.fi/api";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Terminal,
    Light,
    Dark,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemePreference>,
}

/// Flag > config file > built-in default.
pub fn resolve_base_url(flag: Option<&str>) -> String {
    flag.map(|value| value.to_string())
        .or_else(|| read_config().and_then(|config| config.base_url))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

pub fn read_theme() -> ThemePreference {
    read_config()
        .and_then(|config| config.theme)
        .unwrap_or_default()
}

pub fn write_theme(theme: ThemePreference) -> Result<(), io::Error> {
    let mut config = read_config().unwrap_or_default();
    config.theme = Some(theme);
    write_config(&config)
}

fn config_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(".trainerdesk.json");
    Some(path)
}

fn read_config() -> Option<Config> {
    let path = config_path()?;
    let contents = fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

fn write_config(config: &Config) -> Result<(), io::Error> {
    let path = config_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Home directory not found"))?;
    let json = serde_json::to_string_pretty(config)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_default() {
        let url = resolve_base_url(Some("http://localhost:8080/api"));
        assert_eq!(url, "http://localhost:8080/api");
    }

    #[test]
    fn theme_round_trips_through_json() {
        let config = Config {
            base_url: None,
            theme: Some(ThemePreference::Dark),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"dark\""));
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme, Some(ThemePreference::Dark));
    }

    #[test]
    fn malformed_config_degrades_to_none() {
        let parsed: Result<Config, _> = serde_json::from_str("not json");
        assert!(parsed.is_err());
    }
}
