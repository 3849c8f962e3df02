//! Site-wide settings loaded from `site.json`.
use crate::product_form::CATEGORY_SUGGESTIONS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("contact delay must be at most {max} ms (got {value})")]
    DelayTooLong { value: u32, max: u32 },
}

/// Brand and contact settings. Every field has a default, so a partial file
/// is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "SiteConfig::default_brand_name")]
    pub brand_name: String,
    #[serde(default = "SiteConfig::default_sales_email")]
    pub sales_email: String,
    #[serde(default = "SiteConfig::default_wechat_id")]
    pub wechat_id: String,
    /// Simulated round-trip for the contact form
    #[serde(default = "SiteConfig::default_contact_delay_ms")]
    pub contact_delay_ms: u32,
    #[serde(default = "SiteConfig::default_category_suggestions")]
    pub category_suggestions: Vec<String>,
}

impl SiteConfig {
    pub const MAX_CONTACT_DELAY_MS: u32 = 10_000;

    fn default_brand_name() -> String {
        "TentCharged".to_string()
    }

    fn default_sales_email() -> String {
        "sales@tentcharged.com".to_string()
    }

    fn default_wechat_id() -> String {
        "TentChargedSales".to_string()
    }

    const fn default_contact_delay_ms() -> u32 {
        1_000
    }

    fn default_category_suggestions() -> Vec<String> {
        CATEGORY_SUGGESTIONS.iter().map(ToString::to_string).collect()
    }

    /// # Errors
    ///
    /// Returns an error for malformed JSON or an out-of-range delay.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::DelayTooLong`] if the contact delay exceeds the cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contact_delay_ms > Self::MAX_CONTACT_DELAY_MS {
            return Err(ConfigError::DelayTooLong {
                value: self.contact_delay_ms,
                max: Self::MAX_CONTACT_DELAY_MS,
            });
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: Self::default_brand_name(),
            sales_email: Self::default_sales_email(),
            wechat_id: Self::default_wechat_id(),
            contact_delay_ms: Self::default_contact_delay_ms(),
            category_suggestions: Self::default_category_suggestions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.category_suggestions.len(), 6);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = SiteConfig::from_json(r#"{"wechat_id":"TCShop","contact_delay_ms":250}"#).unwrap();
        assert_eq!(config.wechat_id, "TCShop");
        assert_eq!(config.contact_delay_ms, 250);
        assert_eq!(config.brand_name, "TentCharged");
    }

    #[test]
    fn rejects_excessive_delay() {
        let err = SiteConfig::from_json(r#"{"contact_delay_ms":60000}"#).unwrap_err();
        assert!(matches!(err, ConfigError::DelayTooLong { value: 60_000, .. }));
    }
}
