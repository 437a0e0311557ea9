//! Portfolio report summaries.
//!
//! Pure builders: they turn a decision into the insight shown in a portfolio
//! report and never touch the insight log.

use proptech_ai::{
    AiInsight, InsightCategory, MaintenancePrediction, RentalPricingRecommendation, TenantScreeningResult,
};
use proptech_core::money::{format_percent, format_rand};

/// Confidence attached to every occupancy forecast.
pub const OCCUPANCY_FORECAST_CONFIDENCE: f64 = 0.75;

pub fn summarize_pricing(address: &str, pricing: &RentalPricingRecommendation) -> AiInsight {
    AiInsight::new(
        InsightCategory::RentalPricing,
        format!("Pricing insight: {address}"),
        format!(
            "Recommended {}/month (range: {} - {})",
            format_rand(pricing.recommended_rent),
            format_rand(pricing.min_rent),
            format_rand(pricing.max_rent),
        ),
        pricing.confidence_score,
    )
}

pub fn summarize_maintenance(address: &str, maintenance: &MaintenancePrediction) -> AiInsight {
    AiInsight::new(
        InsightCategory::MaintenancePrediction,
        format!("Maintenance alert: {address}"),
        format!("{} urgency: {}", maintenance.urgency, maintenance.issue),
        maintenance.confidence_score,
    )
}

pub fn summarize_screening(tenant_name: &str, screening: &TenantScreeningResult) -> AiInsight {
    AiInsight::new(
        InsightCategory::TenantScreening,
        format!("Tenant profile: {tenant_name}"),
        screening.summary.clone(),
        screening.confidence(),
    )
}

/// Leased share of the portfolio; 0 when there are no properties.
pub fn occupancy_rate(lease_count: usize, property_count: usize) -> f64 {
    if property_count == 0 {
        0.0
    } else {
        lease_count as f64 / property_count as f64
    }
}

pub fn occupancy_forecast(lease_count: usize, property_count: usize) -> AiInsight {
    let rate = occupancy_rate(lease_count, property_count);
    AiInsight::new(
        InsightCategory::OccupancyForecast,
        "Portfolio occupancy forecast",
        format!(
            "Current occupancy: {}. AI projects stable demand in the short term with seasonal variation expected.",
            format_percent(rate, 0)
        ),
        OCCUPANCY_FORECAST_CONFIDENCE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptech_core::{PropertyId, TenantId};
    use rust_decimal_macros::dec;

    #[test]
    fn pricing_summary_shows_band() {
        let rec = RentalPricingRecommendation::new(PropertyId::new("P001"), dec!(4500), 0.82, vec![]);
        let insight = summarize_pricing("12 Mandela Ave, Soweto", &rec);

        assert_eq!(insight.title(), "Pricing insight: 12 Mandela Ave, Soweto");
        assert_eq!(insight.description(), "Recommended R4,500/month (range: R3,825 - R5,175)");
        assert_eq!(insight.confidence_score(), 0.82);
    }

    #[test]
    fn maintenance_summary_leads_with_urgency() {
        let p = MaintenancePrediction::new(PropertyId::new("P002"), "Geyser service", 0.8, dec!(4200), 30.0);
        let insight = summarize_maintenance("45 Long St, Cape Town", &p);
        assert_eq!(insight.description(), "High urgency: Geyser service");
        assert_eq!(insight.category(), InsightCategory::MaintenancePrediction);
    }

    #[test]
    fn screening_summary_uses_inverse_risk() {
        let r = TenantScreeningResult::new(TenantId::new("t-1"), 0.25, "Recommended for approval", vec![]);
        let insight = summarize_screening("Thabo Mokoena", &r);
        assert_eq!(insight.title(), "Tenant profile: Thabo Mokoena");
        assert_eq!(insight.confidence_score(), 0.75);
    }

    #[test]
    fn occupancy_of_empty_portfolio_is_zero() {
        assert_eq!(occupancy_rate(0, 0), 0.0);
        assert_eq!(occupancy_rate(3, 0), 0.0);
        assert_eq!(occupancy_rate(1, 4), 0.25);

        let insight = occupancy_forecast(0, 0);
        assert!(insight.description().starts_with("Current occupancy: 0%."));
        assert_eq!(insight.confidence_score(), 0.75);
    }
}
