//! Deterministic offline backend.
//!
//! Used when no live model is configured. Outputs are canned and selected by
//! keyword, so the whole workflow can be exercised without network access.

use async_trait::async_trait;

use crate::backend::{AiBackend, Features, Prediction};
use crate::error::AiError;

const MAINTENANCE_TEXT: &str = "Predictive analysis indicates the property may require plumbing \
inspection within the next 90 days and electrical certification renewal within 6 months. \
Estimated combined maintenance cost: R4,200.";

const LEASE_CLAUSE_TEXT: &str = "The Lessee shall occupy the premises solely for residential \
purposes. The property shall be maintained in good condition, and the Lessee agrees to comply \
with all applicable municipal by-laws and regulations. Any alterations to the premises require \
prior written consent from the Lessor.";

const SCREENING_TEXT: &str = "Based on the provided tenant profile, the applicant demonstrates \
stable employment history and satisfactory references. Recommended for approval with standard \
deposit terms.";

const PRICING_TEXT: &str = "Current market analysis suggests rental pricing between R3,500 and \
R5,500 per month for this property type and area. Factors include proximity to transport, \
property condition, and local demand trends.";

const TENANT_TEXT: &str = SCREENING_TEXT;

const FALLBACK_TEXT: &str = "AI analysis completed. The property management platform has \
processed your request. Please provide more specific details for targeted recommendations.";

/// Canned text for `prompt`.
///
/// Case-insensitive keyword match, first hit wins:
/// maintenance/repair, lease/clause, screen, price/rent/pricing, tenant.
pub fn demo_text(prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if has(&["maintenance", "repair"]) {
        MAINTENANCE_TEXT
    } else if has(&["lease", "clause"]) {
        LEASE_CLAUSE_TEXT
    } else if has(&["screen"]) {
        SCREENING_TEXT
    } else if has(&["price", "rent", "pricing"]) {
        PRICING_TEXT
    } else if has(&["tenant"]) {
        TENANT_TEXT
    } else {
        FALLBACK_TEXT
    }
}

/// Canned prediction for `model_id` (case-insensitive substring match on the model id).
pub fn demo_prediction(model_id: &str) -> Prediction {
    let id = model_id.to_lowercase();

    if id.contains("pricing") || id.contains("rent") {
        Prediction::new()
            .with("predicted_rent", 4500.0)
            .with("confidence", 0.82)
            .with("market_trend", 0.03)
    } else if id.contains("risk") || id.contains("tenant") {
        Prediction::new()
            .with("risk_score", 0.25)
            .with("payment_reliability", 0.85)
            .with("tenure_prediction_months", 18.0)
    } else if id.contains("maintenance") {
        Prediction::new()
            .with("failure_probability", 0.15)
            .with("estimated_cost", 4200.0)
            .with("days_until_needed", 90.0)
    } else {
        Prediction::new()
            .with("prediction", 0.75)
            .with("confidence", 0.80)
    }
}

/// Offline backend. Never fails except on a blank prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAiBackend;

impl DemoAiBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AiBackend for DemoAiBackend {
    async fn generate_text(&self, prompt: &str) -> Result<String, AiError> {
        if prompt.trim().is_empty() {
            return Err(AiError::invalid_input("prompt cannot be empty"));
        }
        Ok(demo_text(prompt).to_string())
    }

    async fn predict(&self, model_id: &str, _features: &Features) -> Result<Prediction, AiError> {
        Ok(demo_prediction(model_id))
    }
}
