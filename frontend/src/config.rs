use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

use crate::engine::visibility::DEFAULT_THRESHOLD;

/// Id of the `<script type="application/json">` block the host page may use
/// to override deck settings.
pub const CONFIG_ELEMENT_ID: &str = "deck-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("deck config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Settings injected by the host page, read once at startup.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub podcast_src: String,
    pub podcast_title: String,
    pub usd_to_aed_rate: f64,
    pub consent_delay_ms: u32,
    pub counter_duration_ms: f64,
    pub skip_seconds: f64,
    pub visibility_threshold: f64,
    /// Whether the visitor already accepted the investor/cookie notice.
    pub investor_consent: bool,
    pub contact_email: String,
    pub meeting_url: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            podcast_src: "/assets/part2car-podcast.mp3".to_string(),
            podcast_title: "Part2Car.ae: AI-Powered Disruption".to_string(),
            usd_to_aed_rate: 3.67,
            consent_delay_ms: 1500,
            counter_duration_ms: 2000.0,
            skip_seconds: 10.0,
            visibility_threshold: DEFAULT_THRESHOLD,
            investor_consent: false,
            contact_email: "invest@part2car.ae".to_string(),
            meeting_url: "https://calendly.com/njoober/30min".to_string(),
        }
    }
}

impl DeckConfig {
    /// On-screen threshold for components, falling back to the built-in
    /// default outside a config provider.
    pub fn visibility_threshold_or_default(config: Option<&Self>) -> f64 {
        config.map_or(DEFAULT_THRESHOLD, |config| config.visibility_threshold)
    }

    /// Reads the config block from the current document. A page without the
    /// block gets the defaults.
    pub fn from_document() -> Result<Self, ConfigError> {
        let text = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(text) if !text.trim().is_empty() => Self::from_json(&text),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: DeckConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.usd_to_aed_rate.is_finite() && self.usd_to_aed_rate > 0.0) {
            return Err(ConfigError::Invalid {
                field: "usd_to_aed_rate",
                reason: "must be a positive number",
            });
        }
        if !(self.counter_duration_ms.is_finite() && self.counter_duration_ms >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "counter_duration_ms",
                reason: "must be zero or positive",
            });
        }
        if !(self.skip_seconds.is_finite() && self.skip_seconds > 0.0) {
            return Err(ConfigError::Invalid {
                field: "skip_seconds",
                reason: "must be a positive number",
            });
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(ConfigError::Invalid {
                field: "visibility_threshold",
                reason: "must be between 0 and 1",
            });
        }
        Ok(())
    }

    /// `mailto:` link with a pre-filled subject line.
    pub fn contact_href(&self, subject: &str) -> String {
        format!(
            "mailto:{}?subject={}",
            self.contact_email,
            urlencoding::encode(subject)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = DeckConfig::from_json("{}").unwrap();
        assert_eq!(config, DeckConfig::default());
        assert_eq!(config.consent_delay_ms, 1500);
        assert_eq!(config.usd_to_aed_rate, 3.67);
    }

    #[test]
    fn partial_override() {
        let config = DeckConfig::from_json(
            r#"{ "investor_consent": true, "podcast_src": "/media/ep1.mp3" }"#,
        )
        .unwrap();
        assert!(config.investor_consent);
        assert_eq!(config.podcast_src, "/media/ep1.mp3");
        assert_eq!(config.skip_seconds, 10.0);
    }

    #[test]
    fn injected_threshold_reaches_components() {
        let config = DeckConfig::from_json(r#"{ "visibility_threshold": 0.5 }"#).unwrap();
        assert_eq!(DeckConfig::visibility_threshold_or_default(Some(&config)), 0.5);
        assert_eq!(DeckConfig::visibility_threshold_or_default(None), DEFAULT_THRESHOLD);
        assert_eq!(DeckConfig::default().visibility_threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DeckConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_bad_values() {
        let err = DeckConfig::from_json(r#"{ "usd_to_aed_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "usd_to_aed_rate", .. }));

        let err = DeckConfig::from_json(r#"{ "visibility_threshold": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "visibility_threshold", .. }));
    }

    #[test]
    fn contact_href_encodes_subject() {
        let config = DeckConfig::default();
        assert_eq!(
            config.contact_href("Series A & briefing"),
            "mailto:invest@part2car.ae?subject=Series%20A%20%26%20briefing"
        );
    }
}
