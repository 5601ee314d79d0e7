use std::sync::OnceLock;

use log::Level;
use serde::Deserialize;

use crate::error::ConfigError;

/// How long the stats counters take to reach their targets
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Cards start revealing slightly before they are fully on screen
pub const REVEAL_MARGIN: &str = "-100px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const SITE_JSON: &str = include_str!("../site.json");

/// Brand strings and outbound links
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub brand: String,
    pub platform: String,
    pub tagline: String,
    pub logo_url: String,
    pub group_url: String,
    pub discord_url: String,
    pub games_url: String,
    pub owner: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Wyatt Hotels".to_string(),
            platform: "Roblox".to_string(),
            tagline: "The Wyatt Way".to_string(),
            logo_url: String::new(),
            group_url: "https://www.roblox.com/groups/".to_string(),
            discord_url: "https://discord.gg/".to_string(),
            games_url: "https://www.roblox.com/groups/".to_string(),
            owner: "DoubleNotSus".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::parse(SITE_JSON)
    }

    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        if config.brand.trim().is_empty() {
            return Err(ConfigError::MissingField("brand"));
        }
        if config.group_url.trim().is_empty() {
            return Err(ConfigError::MissingField("group_url"));
        }
        Ok(config)
    }

    /// Loaded once; a broken embedded file falls back to the defaults.
    pub fn get() -> &'static SiteConfig {
        static CONFIG: OnceLock<SiteConfig> = OnceLock::new();
        CONFIG.get_or_init(|| match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}, using defaults", e);
                SiteConfig::default()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.brand, "Wyatt Hotels");
        assert_eq!(config.owner, "DoubleNotSus");
        assert!(config.logo_url.starts_with("https://"));
    }

    #[test]
    fn empty_brand_is_rejected() {
        let json = serde_json::json!({
            "brand": "  ",
            "platform": "Roblox",
            "tagline": "The Wyatt Way",
            "logo_url": "",
            "group_url": "https://example.com/group",
            "discord_url": "https://example.com/discord",
            "games_url": "https://example.com/games",
            "owner": "someone"
        });
        let err = SiteConfig::parse(&json.to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("brand")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::parse("{ \"brand\": ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn get_returns_embedded_values() {
        assert_eq!(SiteConfig::get().tagline, "The Wyatt Way");
    }
}
