use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use proptech_core::InsightId;

/// Clamp a confidence into `[0, 1]`. NaN maps to 0.
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightCategory {
    TenantScreening,
    RentalPricing,
    MaintenancePrediction,
    LeaseRecommendation,
    OccupancyForecast,
    RiskAssessment,
    VirtualTourInspection,
}

impl core::fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::TenantScreening => "Tenant Screening",
            Self::RentalPricing => "Rental Pricing",
            Self::MaintenancePrediction => "Maintenance Prediction",
            Self::LeaseRecommendation => "Lease Recommendation",
            Self::OccupancyForecast => "Occupancy Forecast",
            Self::RiskAssessment => "Risk Assessment",
            Self::VirtualTourInspection => "Virtual Tour Inspection",
        };
        f.write_str(label)
    }
}

/// One AI-informed decision, as retained in the insight log.
///
/// Insights are immutable once built; the log only ever appends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    id: InsightId,
    category: InsightCategory,
    title: String,
    description: String,
    confidence_score: f64,
    generated_at: DateTime<Utc>,
}

impl AiInsight {
    pub fn new(
        category: InsightCategory,
        title: impl Into<String>,
        description: impl Into<String>,
        confidence_score: f64,
    ) -> Self {
        Self {
            id: InsightId::generate(),
            category,
            title: title.into(),
            description: description.into(),
            confidence_score: clamp_confidence(confidence_score),
            generated_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &InsightId {
        &self.id
    }

    pub fn category(&self) -> InsightCategory {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}
