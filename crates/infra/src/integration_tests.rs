//! End-to-end scenarios across the store, agent and manager.
//!
//! Verifies:
//! - The register → lease → invoice → statement workflow in demo mode
//! - Portfolio analysis on empty and populated stores
//! - Partial commits when the AI backend fails mid-workflow

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use proptech_ai::{
    AiBackend, DemoAiBackend, InsightCategory, ModeSwitchedBackend, Prediction, RiskLevel,
};
use proptech_core::{Entity, PropertyId, TourId};
use proptech_invoicing::PaymentStatus;
use proptech_leasing::{OverallCondition, Property, RoomPanorama, VirtualTour};

use crate::ai::InsightAgent;
use crate::ai::insight_agent::tests::StubBackend;
use crate::error::ServiceError;
use crate::manager::PropertyManager;
use crate::store::DomainStore;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_store() -> Arc<DomainStore> {
    let store = Arc::new(DomainStore::new());
    for (id, address, rent) in [
        ("P001", "12 Mandela Ave, Soweto", dec!(3800)),
        ("P002", "45 Long St, Cape Town", dec!(5200)),
        ("P003", "8 Berea Rd, Durban", dec!(4100)),
    ] {
        store.add_property(Property::new(PropertyId::new(id), address, rent).unwrap()).unwrap();
    }
    store
}

fn setup_with(backend: Arc<dyn AiBackend>, store: Arc<DomainStore>) -> PropertyManager {
    let agent = Arc::new(InsightAgent::new(backend, store.clone()));
    PropertyManager::new(store, agent)
}

fn setup() -> PropertyManager {
    setup_with(Arc::new(ModeSwitchedBackend::demo()), seeded_store())
}

fn add_tour(store: &DomainStore, rooms: &[&str]) {
    let rooms = rooms
        .iter()
        .map(|name| RoomPanorama::new(*name, format!("https://tours.example/p001/{name}.jpg"), ""))
        .collect();
    store
        .add_virtual_tour(VirtualTour::new(TourId::new("VT-P001"), PropertyId::new("P001"), rooms).unwrap())
        .unwrap();
}

#[tokio::test]
async fn register_and_lease_thabo_on_p001() {
    let manager = setup();

    let (tenant, screening) = manager.register_new_tenant("Thabo Mokoena").await.unwrap();
    assert!(!tenant.id().is_blank());
    assert!(matches!(screening.risk, RiskLevel::Low | RiskLevel::Medium | RiskLevel::High));
    assert!((0.0..=1.0).contains(&screening.risk_score));

    let (lease, clause) = manager.create_lease(tenant.id().as_str(), "P001").await.unwrap();
    assert_eq!(lease.monthly_rent(), dec!(3800));
    assert!(!clause.trim().is_empty());

    let history = manager.agent().insight_history();
    let categories: Vec<_> = history.iter().map(|i| i.category()).collect();
    assert_eq!(
        categories,
        vec![InsightCategory::TenantScreening, InsightCategory::LeaseRecommendation]
    );
}

#[tokio::test]
async fn invoice_then_statement_balances() {
    let manager = setup();
    let (tenant, _) = manager.register_new_tenant("Thabo Mokoena").await.unwrap();
    let (lease, _) = manager.create_lease(tenant.id().as_str(), "P001").await.unwrap();

    let paid = manager.issue_invoice_on(lease.id().as_str(), day(2026, 9, 3)).unwrap();
    let pending = manager.issue_invoice_on(lease.id().as_str(), day(2026, 10, 3)).unwrap();
    assert_eq!(paid.calculate_total(), dec!(4300));
    manager.mark_invoice_paid(paid.id().as_str()).unwrap();

    let statement = manager.generate_statement_on(tenant.id().as_str(), day(2026, 10, 14)).unwrap();
    assert_eq!(statement.total_billed(), dec!(8600));
    assert_eq!(statement.total_paid(), dec!(4300));
    assert_eq!(statement.closing_balance(), dec!(4300));
    assert_eq!(statement.invoices()[1].status(), PaymentStatus::Pending);
    assert_eq!(statement.invoices()[1].id(), pending.id());

    let latest = manager
        .store()
        .get_latest_statement_by_tenant_id(tenant.id().as_str())
        .unwrap();
    assert_eq!(latest.id(), statement.id());
}

#[tokio::test]
async fn stored_statement_reflects_later_payment() {
    let manager = setup();
    let (tenant, _) = manager.register_new_tenant("Thabo Mokoena").await.unwrap();
    let (lease, _) = manager.create_lease(tenant.id().as_str(), "P001").await.unwrap();
    let invoice = manager.issue_invoice_on(lease.id().as_str(), day(2026, 10, 3)).unwrap();

    let generated = manager.generate_statement_on(tenant.id().as_str(), day(2026, 10, 14)).unwrap();
    assert_eq!(generated.total_paid(), dec!(0));

    manager.mark_invoice_paid(invoice.id().as_str()).unwrap();

    let latest = manager
        .store()
        .get_latest_statement_by_tenant_id(tenant.id().as_str())
        .unwrap();
    assert_eq!(latest.id(), generated.id());
    assert_eq!(latest.invoices()[0].status(), PaymentStatus::Paid);
    assert_eq!(latest.total_paid(), dec!(4300));
    assert_eq!(latest.closing_balance(), dec!(0));

    manager.cancel_invoice(invoice.id().as_str()).unwrap();
    let latest = manager
        .store()
        .get_latest_statement_by_tenant_id(tenant.id().as_str())
        .unwrap();
    assert_eq!(latest.total_paid(), dec!(0));
    assert_eq!(latest.closing_balance(), dec!(4300));
}

#[tokio::test]
async fn statement_includes_invoices_outside_its_period() {
    let manager = setup();
    let (tenant, _) = manager.register_new_tenant("Thabo Mokoena").await.unwrap();
    let (lease, _) = manager.create_lease(tenant.id().as_str(), "P001").await.unwrap();
    manager.issue_invoice_on(lease.id().as_str(), day(2025, 1, 10)).unwrap();
    manager.issue_invoice_on(lease.id().as_str(), day(2026, 10, 10)).unwrap();

    let statement = manager.generate_statement_on(tenant.id().as_str(), day(2026, 10, 14)).unwrap();
    assert_eq!(statement.period_start(), day(2026, 10, 1));
    assert_eq!(statement.period_end(), day(2026, 10, 31));
    assert_eq!(statement.invoices().len(), 2);
    assert_eq!(statement.total_billed(), dec!(8600));
}

#[tokio::test]
async fn empty_portfolio_yields_only_the_occupancy_forecast() {
    let store = Arc::new(DomainStore::new());
    let manager = setup_with(Arc::new(DemoAiBackend::new()), store);

    let insights = manager.agent().run_portfolio_analysis().await.unwrap();
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].category(), InsightCategory::OccupancyForecast);
    assert!(insights[0].description().starts_with("Current occupancy: 0%."));
    assert_eq!(insights[0].confidence_score(), 0.75);
    assert_eq!(manager.agent().insight_history().len(), 1);
}

#[tokio::test]
async fn portfolio_log_grows_once_per_decision() {
    let manager = setup();
    let (tenant, _) = manager.register_new_tenant("Thabo Mokoena").await.unwrap();
    manager.create_lease(tenant.id().as_str(), "P001").await.unwrap();
    let before = manager.agent().insight_history().len();

    let insights = manager.agent().run_portfolio_analysis().await.unwrap();
    // 3 properties x (pricing + maintenance) + 1 tenant + forecast
    assert_eq!(insights.len(), 3 * 2 + 1 + 1);
    assert_eq!(manager.agent().insight_history().len() - before, insights.len());

    let forecast = insights.last().unwrap();
    assert!(forecast.description().starts_with("Current occupancy: 33%."));
}

#[tokio::test]
async fn reinspection_replaces_the_previous_report() {
    let store = seeded_store();
    add_tour(&store, &["Living Room", "Kitchen", "Main Bedroom", "Bathroom"]);

    let poor = setup_with(
        Arc::new(StubBackend::new(Prediction::new().with("condition_score", 0.5))),
        store.clone(),
    );
    let first = poor.run_virtual_tour_inspection("P001").await.unwrap();
    assert_eq!(first.overall_condition(), OverallCondition::Poor);
    assert_eq!(first.findings().len(), 4);

    let good = setup_with(
        Arc::new(StubBackend::new(Prediction::new().with("condition_score", 0.9))),
        store.clone(),
    );
    let second = good.run_virtual_tour_inspection("p001").await.unwrap();
    assert_eq!(second.overall_condition(), OverallCondition::Good);
    // bedroom is only flagged below 0.75
    assert_eq!(second.findings().len(), 3);

    let stored = store.get_virtual_tour_by_property_id("P001").unwrap();
    let report = stored.inspection().unwrap();
    assert_eq!(report, &second);
    assert!(report.findings().iter().all(|f| f.room != "Main Bedroom"));
}

#[tokio::test]
async fn demo_inspection_uses_default_condition() {
    let store = seeded_store();
    add_tour(&store, &["Kitchen", "Garage"]);
    let manager = setup_with(Arc::new(DemoAiBackend::new()), store);

    let report = manager.run_virtual_tour_inspection("P001").await.unwrap();
    assert_eq!(report.condition_score(), 0.72);
    assert_eq!(report.overall_condition(), OverallCondition::Fair);
    assert_eq!(report.confidence_score(), 0.80);
    assert_eq!(report.findings().len(), 1);
}

#[tokio::test]
async fn inspection_without_tour_is_not_found() {
    let manager = setup();
    let err = manager.run_virtual_tour_inspection("P002").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn tenant_is_kept_when_screening_fails() {
    let manager = setup_with(Arc::new(StubBackend::failing()), seeded_store());

    let err = manager.register_new_tenant("Sipho Dlamini").await.unwrap_err();
    assert!(matches!(err, ServiceError::Backend(_)));

    let tenants = manager.store().tenants();
    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].full_name(), "Sipho Dlamini");
    assert!(manager.agent().insight_history().is_empty());
}

#[tokio::test]
async fn enabled_backend_without_client_surfaces_backend_error() {
    let config = proptech_ai::AiConfig {
        enabled: true,
        project_id: "proptech-za".to_string(),
        ..proptech_ai::AiConfig::default()
    };
    let manager = setup_with(Arc::new(ModeSwitchedBackend::new(config)), seeded_store());

    let err = manager.get_pricing_recommendation("P001").await.unwrap_err();
    assert!(matches!(err, ServiceError::Backend(_)));
}

#[tokio::test]
async fn pricing_and_maintenance_lookups() {
    let manager = setup();

    let pricing = manager.get_pricing_recommendation("p001").await.unwrap();
    assert_eq!(pricing.recommended_rent, dec!(4500));
    assert!(pricing.min_rent <= pricing.recommended_rent && pricing.recommended_rent <= pricing.max_rent);

    let maintenance = manager.get_maintenance_prediction("P002").await.unwrap();
    assert_eq!(maintenance.estimated_cost, dec!(4200));
    assert_eq!(maintenance.estimated_days_until_needed, 90);

    assert!(matches!(
        manager.get_pricing_recommendation("P999").await,
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn property_lookup_is_idempotent() {
    let store = seeded_store();
    let first = store.get_property_by_id("P001");
    let second = store.get_property_by_id("P001");
    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(store.get_property_by_id("P404"), None);
    assert_eq!(store.get_property_by_id("P404"), None);
}
