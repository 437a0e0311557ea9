//! Application configuration.

use serde::Deserialize;

use proptech_ai::{AiConfig, AiError};
use proptech_invoicing::FeeSchedule;

/// Everything the wiring layer needs to assemble the services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub fees: FeeSchedule,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            ai: AiConfig::from_env(),
            fees: FeeSchedule::from_env(),
        }
    }

    pub fn validate(&self) -> Result<(), AiError> {
        self.ai.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_are_offline_with_standard_fees() {
        let config = AppConfig::default();
        assert!(!config.ai.enabled);
        assert_eq!(config.fees.water_electricity_levy, dec!(350));
        assert_eq!(config.fees.administration_fee, dec!(150));
    }

    #[test]
    fn nested_sections_deserialize() {
        let config: AppConfig =
            serde_json::from_str(r#"{"ai":{"region":"af-south-1"},"fees":{"administration_fee":"175"}}"#).unwrap();
        assert_eq!(config.fees.administration_fee, dec!(175));
        assert_eq!(config.fees.water_electricity_levy, dec!(350));
        assert!(config.validate().is_ok());
    }
}
