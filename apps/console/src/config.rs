use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

const DEFAULT_PLANT_TITLE: &str = "Steel Plant Logistics Optimization";
const DEFAULT_SCHEDULE_HORIZON: u32 = 10;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn from_env(value: Option<String>, profile: AppProfile) -> Self {
        let parsed = value.as_deref().map(str::trim).map(str::to_ascii_lowercase);
        match parsed.as_deref() {
            Some("trace") => Self::Trace,
            Some("debug") => Self::Debug,
            Some("info") => Self::Info,
            Some("warn") | Some("warning") => Self::Warn,
            Some("error") => Self::Error,
            _ if profile == AppProfile::Prod => Self::Warn,
            _ => Self::Info,
        }
    }

    pub fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub plant_title: String,
    pub profile: AppProfile,
    pub log_level: LogLevel,
    /// Length of the vessel schedule track, in schedule units.
    pub schedule_horizon: u32,
    pub build_label: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plant_title: DEFAULT_PLANT_TITLE.to_string(),
            profile: AppProfile::Dev,
            log_level: LogLevel::Info,
            schedule_horizon: DEFAULT_SCHEDULE_HORIZON,
            build_label: None,
        }
    }
}

const KEY_PLANT_TITLE: &str = "LOGISTICS_PLANT_TITLE";
const KEY_PROFILE: &str = "LOGISTICS_PROFILE";
const KEY_LOG_LEVEL: &str = "LOGISTICS_LOG_LEVEL";
const KEY_SCHEDULE_HORIZON: &str = "LOGISTICS_SCHEDULE_HORIZON";
const KEY_BUILD_LABEL: &str = "LOGISTICS_BUILD_LABEL";

/// Values baked in by the build, consulted when the process env lacks a key.
const BUILD_TIME_ENV: [(&str, Option<&str>); 5] = [
    (KEY_PLANT_TITLE, option_env!("LOGISTICS_PLANT_TITLE")),
    (KEY_PROFILE, option_env!("LOGISTICS_PROFILE")),
    (KEY_LOG_LEVEL, option_env!("LOGISTICS_LOG_LEVEL")),
    (KEY_SCHEDULE_HORIZON, option_env!("LOGISTICS_SCHEDULE_HORIZON")),
    (KEY_BUILD_LABEL, option_env!("LOGISTICS_BUILD_LABEL")),
];

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        load_dotenv();

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| build_time_value(key)))
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(title) = lookup(KEY_PLANT_TITLE) {
            let trimmed = title.trim();
            if !trimmed.is_empty() {
                config.plant_title = trimmed.to_string();
            }
        }

        config.profile = AppProfile::from_env(lookup(KEY_PROFILE));
        config.log_level = LogLevel::from_env(lookup(KEY_LOG_LEVEL), config.profile);

        if let Some(units) =
            lookup(KEY_SCHEDULE_HORIZON).and_then(|value| value.trim().parse::<u32>().ok())
        {
            config.schedule_horizon = units.max(1);
        }

        config.build_label = lookup(KEY_BUILD_LABEL)
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty());

        config
    }

    pub fn is_production(&self) -> bool {
        self.profile == AppProfile::Prod
    }
}

fn build_time_value(key: &str) -> Option<String> {
    BUILD_TIME_ENV
        .iter()
        .find(|(name, _)| *name == key)
        .and_then(|(_, value)| value.map(str::to_owned))
}

/// A missing `.env` is normal; anything else is worth a warning.
#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(%err, ".env could not be read"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.plant_title, DEFAULT_PLANT_TITLE);
        assert_eq!(config.profile, AppProfile::Dev);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.schedule_horizon, 10);
        assert!(config.build_label.is_none());
    }

    #[test]
    fn production_profile_lowers_default_verbosity() {
        let config = AppConfig::from_lookup(lookup_from(&[("LOGISTICS_PROFILE", "production")]));
        assert!(config.is_production());
        assert_eq!(config.log_level, LogLevel::Warn);

        let explicit = AppConfig::from_lookup(lookup_from(&[
            ("LOGISTICS_PROFILE", "prod"),
            ("LOGISTICS_LOG_LEVEL", " DEBUG "),
        ]));
        assert_eq!(explicit.log_level, LogLevel::Debug);
        assert_eq!(explicit.log_level.as_tracing(), tracing::Level::DEBUG);
    }

    #[test]
    fn schedule_horizon_is_at_least_one_unit() {
        let zero = AppConfig::from_lookup(lookup_from(&[("LOGISTICS_SCHEDULE_HORIZON", "0")]));
        assert_eq!(zero.schedule_horizon, 1);

        let garbage = AppConfig::from_lookup(lookup_from(&[("LOGISTICS_SCHEDULE_HORIZON", "ten")]));
        assert_eq!(garbage.schedule_horizon, 10);

        let custom = AppConfig::from_lookup(lookup_from(&[("LOGISTICS_SCHEDULE_HORIZON", "14")]));
        assert_eq!(custom.schedule_horizon, 14);
    }

    #[test]
    fn blank_title_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("LOGISTICS_PLANT_TITLE", "   ")]));
        assert_eq!(config.plant_title, DEFAULT_PLANT_TITLE);

        let named = AppConfig::from_lookup(lookup_from(&[("LOGISTICS_PLANT_TITLE", "Vizag Works")]));
        assert_eq!(named.plant_title, "Vizag Works");
    }

    #[test]
    fn serialization_skips_missing_build_label() {
        let config = AppConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("build_label").is_none());
        assert_eq!(json["log_level"], "info");
    }

    #[test]
    fn build_label_is_optional_and_trimmed() {
        let labelled = AppConfig::from_lookup(lookup_from(&[("LOGISTICS_BUILD_LABEL", " v1.4.2 ")]));
        assert_eq!(labelled.build_label.as_deref(), Some("v1.4.2"));

        let blank = AppConfig::from_lookup(lookup_from(&[("LOGISTICS_BUILD_LABEL", "  ")]));
        assert!(blank.build_label.is_none());
    }

    #[test]
    fn build_time_table_only_answers_known_keys() {
        assert!(build_time_value("HOME").is_none());
        assert_eq!(BUILD_TIME_ENV.len(), 5);
        assert!(BUILD_TIME_ENV.iter().all(|(key, _)| key.starts_with("LOGISTICS_")));
    }
}
