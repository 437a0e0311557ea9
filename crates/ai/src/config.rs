//! AI backend configuration.

use serde::Deserialize;
use std::time::Duration;

use crate::error::AiError;

/// AI backend configuration.
///
/// `enabled = false` selects the deterministic demo backend; no network I/O
/// happens in that mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Live vs. demo mode.
    pub enabled: bool,

    /// Cloud region endpoint (e.g. "af-south-1" for South Africa).
    pub region: String,

    /// Cloud project id used to scope model deployments.
    pub project_id: String,

    /// Deployed text-generation model.
    pub text_model_id: String,

    /// Per-call timeout for live requests, in seconds.
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Offline configuration for local runs and tests.
    pub fn demo() -> Self {
        Self {
            enabled: false,
            project_id: "demo-project".to_string(),
            ..Self::default()
        }
    }

    /// Load from `PROPTECH_AI_*` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_var("PROPTECH_AI_ENABLED")
                .map(|v| parse_bool(&v))
                .unwrap_or(defaults.enabled),
            region: env_var("PROPTECH_AI_REGION").unwrap_or(defaults.region),
            project_id: env_var("PROPTECH_AI_PROJECT_ID").unwrap_or(defaults.project_id),
            text_model_id: env_var("PROPTECH_AI_TEXT_MODEL").unwrap_or(defaults.text_model_id),
            timeout_secs: env_var("PROPTECH_AI_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Identity endpoint used to obtain auth tokens.
    pub fn iam_endpoint(&self) -> String {
        format!("https://iam.{}.myhuaweicloud.com", self.region)
    }

    /// Model inference endpoint.
    pub fn model_endpoint(&self) -> String {
        format!("https://modelarts.{}.myhuaweicloud.com", self.region)
    }

    pub fn validate(&self) -> Result<(), AiError> {
        if self.enabled && self.project_id.trim().is_empty() {
            return Err(AiError::invalid_input(
                "PROPTECH_AI_PROJECT_ID is required when the live AI backend is enabled",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AiError::invalid_input("AI timeout must be at least one second"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            region: "af-south-1".to_string(),
            project_id: String::new(),
            text_model_id: "pangu-alpha".to_string(),
            timeout_secs: 30,
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_config_is_offline() {
        let config = AiConfig::demo();
        assert!(!config.enabled);
        assert_eq!(config.region, "af-south-1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn endpoints_follow_region() {
        let config = AiConfig {
            region: "eu-west-101".to_string(),
            ..AiConfig::default()
        };
        assert_eq!(config.iam_endpoint(), "https://iam.eu-west-101.myhuaweicloud.com");
        assert_eq!(config.model_endpoint(), "https://modelarts.eu-west-101.myhuaweicloud.com");
    }

    #[test]
    fn live_mode_requires_project() {
        let config = AiConfig {
            enabled: true,
            ..AiConfig::default()
        };
        assert!(matches!(config.validate(), Err(AiError::InvalidInput(_))));
    }

    #[test]
    fn timeout_duration() {
        let config = AiConfig {
            timeout_secs: 5,
            ..AiConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn bool_parsing() {
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("1"));
        assert!(!parse_bool("no"));
    }

    #[test]
    fn deserializes_partial_config() {
        let config: AiConfig = serde_json::from_str(r#"{"enabled":true,"project_id":"p-1"}"#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.text_model_id, "pangu-alpha");
        assert_eq!(config.timeout_secs, 30);
    }
}
