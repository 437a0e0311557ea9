//! Insight agent: sequences AI backend calls into decisions and logs them.
//!
//! Every per-entity analysis makes its backend calls, derives a decision with
//! the pure rules from `proptech-ai`, and records exactly one insight.
//! Backend failures propagate immediately; nothing is recorded for a failed
//! analysis.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{info, warn};

use proptech_ai::{
    AiBackend, AiInsight, Features, InsightCategory, InsightLog, InsightSink, MaintenancePrediction,
    RentalPricingRecommendation, TenantScreeningResult,
};
use proptech_core::Entity;
use proptech_core::money::{decimal_from_f64, decimal_to_f64, format_percent, format_rand, format_signed_percent};
use proptech_leasing::{InspectionReport, OverallCondition, Property, Tenant, VirtualTour};

use super::findings::room_findings;
use super::report;
use crate::error::ServiceResult;
use crate::store::DomainStore;

pub const TENANT_RISK_MODEL: &str = "tenant-risk-model";
pub const RENTAL_PRICING_MODEL: &str = "rental-pricing-model";
pub const MAINTENANCE_MODEL: &str = "maintenance-model";
pub const INSPECTION_MODEL: &str = "inspection-model";

const LEASE_CLAUSE_CONFIDENCE: f64 = 0.90;

fn features<const N: usize>(pairs: [(&str, JsonValue); N]) -> Features {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

pub struct InsightAgent {
    backend: Arc<dyn AiBackend>,
    store: Arc<DomainStore>,
    log: Arc<InsightLog>,
}

impl InsightAgent {
    pub fn new(backend: Arc<dyn AiBackend>, store: Arc<DomainStore>) -> Self {
        Self::with_log(backend, store, Arc::new(InsightLog::new()))
    }

    pub fn with_log(backend: Arc<dyn AiBackend>, store: Arc<DomainStore>, log: Arc<InsightLog>) -> Self {
        Self { backend, store, log }
    }

    /// Append one insight to the log.
    pub fn record(&self, insight: AiInsight) {
        self.log.record(insight);
    }

    /// Snapshot of the insight log in generation order.
    pub fn insight_history(&self) -> Vec<AiInsight> {
        self.log.history()
    }

    pub async fn screen_tenant(&self, tenant: &Tenant) -> ServiceResult<TenantScreeningResult> {
        let prompt = format!(
            "Screen this tenant application for a South African rental property:\n\
             Name: {}\n\
             ID: {}\n\
             Provide a risk assessment with factors to consider for approval.",
            tenant.full_name(),
            tenant.id()
        );
        let summary = self
            .backend
            .generate_text(&prompt)
            .await
            .inspect_err(|err| warn!(tenant_id = %tenant.id(), %err, "screening text generation failed"))?;

        let inputs = features([
            ("tenant_id", tenant.id().as_str().into()),
            ("tenant_name", tenant.full_name().into()),
        ]);
        let prediction = self
            .backend
            .predict(TENANT_RISK_MODEL, &inputs)
            .await
            .inspect_err(|err| warn!(tenant_id = %tenant.id(), %err, "tenant risk prediction failed"))?;

        let factors = vec![
            format!(
                "Payment reliability: {}",
                format_percent(prediction.get_or("payment_reliability", 0.85), 0)
            ),
            format!(
                "Predicted tenure: {:.0} months",
                prediction.get_or("tenure_prediction_months", 12.0)
            ),
        ];
        let result = TenantScreeningResult::new(
            tenant.id().clone(),
            prediction.get_or("risk_score", 0.25),
            summary,
            factors,
        );

        self.record(AiInsight::new(
            InsightCategory::TenantScreening,
            format!("Screening: {}", tenant.full_name()),
            result.summary.clone(),
            result.confidence(),
        ));
        info!(tenant_id = %tenant.id(), risk = %result.risk, risk_score = result.risk_score, "tenant screened");
        Ok(result)
    }

    pub async fn recommend_rental_price(&self, property: &Property) -> ServiceResult<RentalPricingRecommendation> {
        let prompt = format!(
            "Recommend optimal monthly rental pricing for this South African property:\n\
             Address: {}\n\
             Current rent: {}\n\
             Analyse local market conditions, demand trends, and comparable properties.",
            property.address(),
            format_rand(property.monthly_rent())
        );
        let analysis = self
            .backend
            .generate_text(&prompt)
            .await
            .inspect_err(|err| warn!(property_id = %property.id(), %err, "pricing text generation failed"))?;

        let inputs = features([
            ("property_id", property.id().as_str().into()),
            ("address", property.address().into()),
            ("current_rent", decimal_to_f64(property.monthly_rent()).into()),
        ]);
        let prediction = self
            .backend
            .predict(RENTAL_PRICING_MODEL, &inputs)
            .await
            .inspect_err(|err| warn!(property_id = %property.id(), %err, "rental pricing prediction failed"))?;

        let recommended = prediction
            .get("predicted_rent")
            .map(decimal_from_f64)
            .unwrap_or_else(|| property.monthly_rent());
        let trend = prediction.get_or("market_trend", 0.0);
        let market_factors = vec![format!("Market trend: {}", format_signed_percent(trend, 1)), analysis];
        let recommendation = RentalPricingRecommendation::new(
            property.id().clone(),
            recommended,
            prediction.get_or("confidence", 0.80),
            market_factors,
        );

        self.record(AiInsight::new(
            InsightCategory::RentalPricing,
            format!("Pricing: {}", property.address()),
            format!(
                "Recommended {}/month (confidence: {})",
                format_rand(recommendation.recommended_rent),
                format_percent(recommendation.confidence_score, 0)
            ),
            recommendation.confidence_score,
        ));
        info!(
            property_id = %property.id(),
            recommended_rent = %recommendation.recommended_rent,
            "rental price recommended"
        );
        Ok(recommendation)
    }

    pub async fn predict_maintenance(&self, property: &Property) -> ServiceResult<MaintenancePrediction> {
        let prompt = format!(
            "Predict maintenance needs for this South African rental property:\n\
             Address: {}\n\
             Identify likely upcoming repairs, estimated costs in Rand, and urgency levels.",
            property.address()
        );
        let issue = self
            .backend
            .generate_text(&prompt)
            .await
            .inspect_err(|err| warn!(property_id = %property.id(), %err, "maintenance text generation failed"))?;

        let inputs = features([
            ("property_id", property.id().as_str().into()),
            ("address", property.address().into()),
        ]);
        let prediction = self
            .backend
            .predict(MAINTENANCE_MODEL, &inputs)
            .await
            .inspect_err(|err| warn!(property_id = %property.id(), %err, "maintenance prediction failed"))?;

        let maintenance = MaintenancePrediction::new(
            property.id().clone(),
            issue,
            prediction.get_or("failure_probability", 0.15),
            decimal_from_f64(prediction.get_or("estimated_cost", 4200.0)),
            prediction.get_or("days_until_needed", 90.0),
        );

        self.record(AiInsight::new(
            InsightCategory::MaintenancePrediction,
            format!("Maintenance: {}", property.address()),
            format!(
                "Urgency: {}, Est. {} in {} days",
                maintenance.urgency,
                format_rand(maintenance.estimated_cost),
                maintenance.estimated_days_until_needed
            ),
            maintenance.confidence_score,
        ));
        info!(property_id = %property.id(), urgency = %maintenance.urgency, "maintenance predicted");
        Ok(maintenance)
    }

    pub async fn generate_lease_clause(
        &self,
        property: &Property,
        tenant: &Tenant,
        clause_type: &str,
    ) -> ServiceResult<String> {
        let prompt = format!(
            "Generate a '{clause_type}' lease clause for a South African residential rental agreement.\n\
             Property: {}\n\
             Tenant: {}\n\
             Monthly Rent: {}\n\
             The clause must comply with the South African Rental Housing Act.",
            property.address(),
            tenant.full_name(),
            format_rand(property.monthly_rent())
        );
        let clause = self
            .backend
            .generate_text(&prompt)
            .await
            .inspect_err(|err| warn!(property_id = %property.id(), %err, "lease clause generation failed"))?;

        self.record(AiInsight::new(
            InsightCategory::LeaseRecommendation,
            format!("Clause '{clause_type}' generated"),
            clause.clone(),
            LEASE_CLAUSE_CONFIDENCE,
        ));
        info!(property_id = %property.id(), tenant_id = %tenant.id(), clause_type, "lease clause generated");
        Ok(clause)
    }

    /// Inspect `tour` and store the report on it, replacing any earlier report.
    ///
    /// The tour must be registered in the store.
    pub async fn analyse_virtual_tour(&self, tour: &VirtualTour, property: &Property) -> ServiceResult<InspectionReport> {
        let room_list = tour
            .rooms()
            .iter()
            .map(|r| r.room_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let prompt = format!(
            "Analyse this 360° virtual tour inspection for a South African rental property:\n\
             Address: {}\n\
             Rooms in tour: {room_list}\n\
             Perform a virtual inspection: identify defects, assess condition of walls, floors, fixtures, \
             plumbing, and electrical. Rate overall condition and estimate repair costs in Rand.",
            property.address()
        );
        self.backend
            .generate_text(&prompt)
            .await
            .inspect_err(|err| warn!(tour_id = %tour.id(), %err, "inspection text generation failed"))?;

        let inputs = features([
            ("property_id", property.id().as_str().into()),
            ("room_count", tour.rooms().len().into()),
            ("address", property.address().into()),
        ]);
        let prediction = self
            .backend
            .predict(INSPECTION_MODEL, &inputs)
            .await
            .inspect_err(|err| warn!(tour_id = %tour.id(), %err, "inspection prediction failed"))?;

        let score = prediction.get_or("condition_score", 0.72);
        let findings = room_findings(tour.rooms(), score);
        let finding_count = findings.len();
        let report = InspectionReport::new(
            property.id().clone(),
            OverallCondition::from_score(score),
            score,
            findings,
            decimal_from_f64(prediction.get_or("estimated_repair_cost", 8500.0)),
            prediction.get_or("confidence", 0.88),
        );

        self.store
            .set_tour_inspection(tour.id().as_str(), tour.property_id().as_str(), report.clone())?;

        self.record(AiInsight::new(
            InsightCategory::VirtualTourInspection,
            format!("360° inspection: {}", property.address()),
            format!(
                "Condition: {} ({}). {finding_count} findings. Est. repairs: {}",
                report.overall_condition(),
                format_percent(report.condition_score(), 0),
                format_rand(report.estimated_repair_cost())
            ),
            report.confidence_score(),
        ));
        info!(
            tour_id = %tour.id(),
            property_id = %property.id(),
            condition = %report.overall_condition(),
            findings = finding_count,
            "virtual tour inspected"
        );
        Ok(report)
    }

    /// Pricing and maintenance for every property, screening for every
    /// tenant, then one occupancy forecast.
    ///
    /// Returns the report summaries. Each sub-analysis records its own
    /// decision; only the occupancy forecast is recorded here.
    pub async fn run_portfolio_analysis(&self) -> ServiceResult<Vec<AiInsight>> {
        let properties = self.store.properties();
        let tenants = self.store.tenants();
        let mut insights = Vec::with_capacity(properties.len() * 2 + tenants.len() + 1);

        for property in &properties {
            let pricing = self.recommend_rental_price(property).await?;
            insights.push(report::summarize_pricing(property.address(), &pricing));

            let maintenance = self.predict_maintenance(property).await?;
            insights.push(report::summarize_maintenance(property.address(), &maintenance));
        }

        for tenant in &tenants {
            let screening = self.screen_tenant(tenant).await?;
            insights.push(report::summarize_screening(tenant.full_name(), &screening));
        }

        let forecast = report::occupancy_forecast(self.store.lease_count(), self.store.property_count());
        self.record(forecast.clone());
        insights.push(forecast);

        info!(
            properties = properties.len(),
            tenants = tenants.len(),
            insights = insights.len(),
            "portfolio analysis complete"
        );
        Ok(insights)
    }
}
