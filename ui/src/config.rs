//! Site configuration, embedded at compile time from `site.toml`.

use std::collections::HashSet;

use api::Lang;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::counter::{default_targets, CounterPlan, StatTarget};

const SITE_TOML: &str = include_str!("../site.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site.toml is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid site configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_language: Lang,
    pub follow_system_language: bool,
    pub stats: StatsConfig,
    pub contact: ContactConfig,
    pub content: ContentConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Lang::Arabic,
            follow_system_language: false,
            stats: StatsConfig::default(),
            contact: ContactConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub duration_ms: u64,
    pub steps: u32,
    pub targets: Vec<StatTarget>,
}

impl StatsConfig {
    pub fn plan(&self) -> CounterPlan {
        CounterPlan {
            duration_ms: self.duration_ms,
            steps: self.steps,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        let plan = CounterPlan::default();
        Self {
            duration_ms: plan.duration_ms,
            steps: plan.steps,
            targets: default_targets(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub phone: String,
    pub whatsapp_url: String,
    pub booking_whatsapp_url: String,
    pub map_embed_url: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
    pub tiktok_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "00201007996750".into(),
            whatsapp_url: "https://wa.me/201007996750".into(),
            booking_whatsapp_url: "https://wa.me/201234567890".into(),
            map_embed_url: String::new(),
            facebook_url: String::new(),
            instagram_url: String::new(),
            youtube_url: String::new(),
            tiktok_url: String::new(),
        }
    }
}

impl ContactConfig {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub base_url: Option<String>,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stats.steps == 0 {
            return Err(ConfigError::Invalid("stats.steps must be at least 1".into()));
        }
        if self.stats.duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "stats.duration_ms must be positive".into(),
            ));
        }
        let mut seen = HashSet::new();
        for target in &self.stats.targets {
            if !seen.insert(target.key) {
                return Err(ConfigError::Invalid(format!(
                    "stats target {:?} listed twice",
                    target.key
                )));
            }
        }
        Ok(())
    }
}

pub fn parse(raw: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

/// Embedded configuration, or defaults when it does not parse.
pub fn load() -> SiteConfig {
    parse(SITE_TOML).unwrap_or_else(|err| {
        tracing::warn!("{err}; using built-in site configuration");
        SiteConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counter::StatKey;

    #[test]
    fn embedded_config_is_valid() {
        let config = parse(SITE_TOML).expect("site.toml parses");
        assert_eq!(config.default_language, Lang::Arabic);
        assert_eq!(config.stats.plan(), CounterPlan::default());
        assert_eq!(config.stats.targets, default_targets());
        assert!(config.contact.whatsapp_url.starts_with("https://wa.me/"));
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config = parse("default_language = \"en\"").unwrap();
        assert_eq!(config.default_language, Lang::English);
        assert_eq!(config.stats, StatsConfig::default());
        assert!(config.content.base_url.is_none());
    }

    #[test]
    fn targets_are_configurable() {
        let raw = r#"
            [stats]
            steps = 30
            [[stats.targets]]
            key = "years"
            target = 12
        "#;
        let config = parse(raw).unwrap();
        assert_eq!(config.stats.steps, 30);
        assert_eq!(config.stats.duration_ms, 2000);
        assert_eq!(config.stats.targets, vec![StatTarget::new(StatKey::Years, 12)]);
    }

    #[test]
    fn rejects_zero_steps_and_duplicate_keys() {
        assert!(matches!(
            parse("[stats]\nsteps = 0"),
            Err(ConfigError::Invalid(_))
        ));
        let dup = r#"
            [[stats.targets]]
            key = "years"
            target = 1
            [[stats.targets]]
            key = "years"
            target = 2
        "#;
        assert!(matches!(parse(dup), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(parse("stats = ["), Err(ConfigError::Parse(_))));
    }
}
