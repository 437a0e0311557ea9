//! Decision objects returned to callers, and the pure rules that build them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use proptech_core::{PropertyId, TenantId};

use crate::insight::clamp_confidence;

/// Tenant risk bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// `< 0.3` Low, `< 0.7` Medium, otherwise High.
    pub fn from_score(score: f64) -> Self {
        if score < 0.3 {
            Self::Low
        } else if score < 0.7 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl core::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        })
    }
}

/// Maintenance urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// `> 0.7` High, `> 0.3` Medium, otherwise Low.
    pub fn from_failure_probability(p: f64) -> Self {
        if p > 0.7 {
            Self::High
        } else if p > 0.3 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl core::fmt::Display for Urgency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        })
    }
}

/// Symmetric ±15% band around `rent`, as `(min, max)`.
pub fn price_band(rent: Decimal) -> (Decimal, Decimal) {
    let variance = rent * Decimal::new(15, 2);
    (rent - variance, rent + variance)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantScreeningResult {
    pub tenant_id: TenantId,
    pub risk: RiskLevel,
    pub risk_score: f64,
    pub summary: String,
    pub factors: Vec<String>,
    pub assessed_at: DateTime<Utc>,
}

impl TenantScreeningResult {
    /// Bucket `risk_score` (clamped into `[0, 1]` first).
    pub fn new(tenant_id: TenantId, risk_score: f64, summary: impl Into<String>, factors: Vec<String>) -> Self {
        let risk_score = clamp_confidence(risk_score);
        Self {
            tenant_id,
            risk: RiskLevel::from_score(risk_score),
            risk_score,
            summary: summary.into(),
            factors,
            assessed_at: Utc::now(),
        }
    }

    /// Confidence that the tenant is reliable: `1 - risk_score`.
    pub fn confidence(&self) -> f64 {
        1.0 - self.risk_score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalPricingRecommendation {
    pub property_id: PropertyId,
    pub recommended_rent: Decimal,
    pub min_rent: Decimal,
    pub max_rent: Decimal,
    pub confidence_score: f64,
    pub market_factors: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl RentalPricingRecommendation {
    pub fn new(
        property_id: PropertyId,
        recommended_rent: Decimal,
        confidence_score: f64,
        market_factors: Vec<String>,
    ) -> Self {
        let (min_rent, max_rent) = price_band(recommended_rent);
        Self {
            property_id,
            recommended_rent,
            min_rent,
            max_rent,
            confidence_score: clamp_confidence(confidence_score),
            market_factors,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePrediction {
    pub property_id: PropertyId,
    pub issue: String,
    pub urgency: Urgency,
    pub estimated_cost: Decimal,
    /// Negative when the model reports the work as already overdue.
    pub estimated_days_until_needed: i64,
    pub confidence_score: f64,
    pub predicted_at: DateTime<Utc>,
}

impl MaintenancePrediction {
    /// Urgency comes from `failure_probability`; confidence is its complement.
    pub fn new(
        property_id: PropertyId,
        issue: impl Into<String>,
        failure_probability: f64,
        estimated_cost: Decimal,
        days_until_needed: f64,
    ) -> Self {
        // `as` saturates out-of-range values and maps NaN to 0.
        let days = days_until_needed.trunc() as i64;
        Self {
            property_id,
            issue: issue.into(),
            urgency: Urgency::from_failure_probability(failure_probability),
            estimated_cost,
            estimated_days_until_needed: days,
            confidence_score: clamp_confidence(1.0 - failure_probability),
            predicted_at: Utc::now(),
        }
    }
}
