use std::sync::Arc;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use proptech_ai::{AiBackend, ModeSwitchedBackend};
use proptech_core::money::{format_percent, format_rand};
use proptech_core::{Entity, PropertyId, TourId};
use proptech_infra::{AppConfig, DomainStore, InsightAgent, PropertyManager};
use proptech_leasing::{Landlord, Property, RoomPanorama, VirtualTour};

fn seed(store: &DomainStore) -> Result<()> {
    store.update_landlord(Landlord::new("Lerato Nkosi", "8001015009087", "FNB 62-1234-5678")?);

    for (id, address, rent) in [
        ("P001", "12 Mandela Ave, Soweto", 3800),
        ("P002", "45 Long St, Cape Town", 5200),
        ("P003", "8 Berea Rd, Durban", 4100),
    ] {
        store.add_property(Property::new(PropertyId::new(id), address, Decimal::from(rent))?)?;
    }

    let rooms = vec![
        RoomPanorama::new("Living Room", "https://tours.proptech.example/p001/living.jpg", "Open-plan lounge with north-facing windows"),
        RoomPanorama::new("Kitchen", "https://tours.proptech.example/p001/kitchen.jpg", "Galley kitchen with gas hob"),
        RoomPanorama::new("Main Bedroom", "https://tours.proptech.example/p001/bedroom.jpg", "Built-in cupboards"),
        RoomPanorama::new("Bathroom", "https://tours.proptech.example/p001/bathroom.jpg", "Shower over bath"),
    ];
    store.add_virtual_tour(VirtualTour::new(TourId::new("VT-P001"), PropertyId::new("P001"), rooms)?)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    proptech_observability::init();

    let config = AppConfig::from_env();
    config.validate().context("invalid AI configuration")?;
    if config.ai.enabled {
        tracing::warn!(
            iam = %config.ai.iam_endpoint(),
            endpoint = %config.ai.model_endpoint(),
            "live AI mode requested but no live client is bundled; backend calls will fail"
        );
    }

    let store = Arc::new(DomainStore::new());
    seed(&store).context("seeding sample data")?;

    let backend: Arc<dyn AiBackend> = Arc::new(ModeSwitchedBackend::new(config.ai.clone()));
    let agent = Arc::new(InsightAgent::new(backend, store.clone()));
    let manager = PropertyManager::with_fees(store.clone(), agent.clone(), config.fees.clone());
    tracing::info!(properties = store.property_count(), live = config.ai.enabled, "proptech demo starting");

    println!("== Tenant screening ==");
    let (tenant, screening) = manager.register_new_tenant("Thabo Mokoena").await?;
    println!("  {} ({})", tenant.full_name(), tenant.id());
    println!("  Risk: {} (score {:.2})", screening.risk, screening.risk_score);
    for factor in &screening.factors {
        println!("  - {factor}");
    }

    println!("\n== Rental pricing: P001 ==");
    let pricing = manager.get_pricing_recommendation("P001").await?;
    println!(
        "  Recommended {}/month (range {} - {}), confidence {}",
        format_rand(pricing.recommended_rent),
        format_rand(pricing.min_rent),
        format_rand(pricing.max_rent),
        format_percent(pricing.confidence_score, 0)
    );

    println!("\n== Lease ==");
    let (lease, clause) = manager.create_lease(tenant.id().as_str(), "P001").await?;
    println!("  Lease {} at {}/month", lease.id(), format_rand(lease.monthly_rent()));
    println!("  Clause: {clause}");

    println!("\n== Maintenance: P002 ==");
    let maintenance = manager.get_maintenance_prediction("P002").await?;
    println!(
        "  {} urgency, est. {} in {} days",
        maintenance.urgency,
        format_rand(maintenance.estimated_cost),
        maintenance.estimated_days_until_needed
    );
    println!("  {}", maintenance.issue);

    println!("\n== Virtual tour inspection: P001 ==");
    let report = manager.run_virtual_tour_inspection("P001").await?;
    println!(
        "  Condition: {} ({}), est. repairs {}",
        report.overall_condition(),
        format_percent(report.condition_score(), 0),
        format_rand(report.estimated_repair_cost())
    );
    for finding in report.findings() {
        println!(
            "  - [{}] {}: {} ({})",
            finding.severity,
            finding.room,
            finding.issue,
            format_rand(finding.estimated_cost)
        );
    }

    println!("\n== Billing ==");
    let invoice = manager.issue_invoice(lease.id().as_str())?;
    for item in invoice.items() {
        println!("  {:<28} {:>10}", item.description(), format_rand(item.total()));
    }
    println!("  {:<28} {:>10}", "Total", format_rand(invoice.calculate_total()));
    println!("  Due {} ({})", invoice.due_date(), invoice.status());

    let statement = manager.generate_statement(tenant.id().as_str())?;
    println!(
        "  Statement {} to {}: billed {}, paid {}, balance {}",
        statement.period_start(),
        statement.period_end(),
        format_rand(statement.total_billed()),
        format_rand(statement.total_paid()),
        format_rand(statement.closing_balance())
    );

    manager.mark_invoice_paid(invoice.id().as_str())?;
    if let Some(latest) = store.get_latest_statement_by_tenant_id(tenant.id().as_str()) {
        println!(
            "  After payment: paid {}, balance {}",
            format_rand(latest.total_paid()),
            format_rand(latest.closing_balance())
        );
    }
    let landlord = store.landlord();
    println!("  Pay to {} ({})", landlord.full_name(), landlord.bank_account());

    println!("\n== Portfolio analysis ==");
    for insight in agent.run_portfolio_analysis().await? {
        println!("  [{}] {}", insight.category(), insight.title());
        println!("    {}", insight.description());
        println!("    Confidence: {}", format_percent(insight.confidence_score(), 0));
    }

    tracing::info!(insights = agent.insight_history().len(), "proptech demo finished");
    Ok(())
}
