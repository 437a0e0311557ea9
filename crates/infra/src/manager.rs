//! Property manager: the consumer-facing orchestration layer.
//!
//! Resolves ids against the store, delegates AI work to the agent, and owns
//! the billing derivations (invoice line items, due dates, statements).
//! Multi-step workflows commit each step as it completes; there is no
//! rollback if a later step fails.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use proptech_ai::{MaintenancePrediction, RentalPricingRecommendation, TenantScreeningResult};
use proptech_core::{Entity, InvoiceId, StatementId};
use proptech_invoicing::{
    BillingPeriod, FeeSchedule, Invoice, IssueInvoice, LineItem, Statement, next_month_start,
};
use proptech_leasing::{InspectionReport, LeaseAgreement, Property, Tenant};

use crate::ai::InsightAgent;
use crate::error::{ServiceError, ServiceResult};
use crate::store::DomainStore;

/// Clause type used for every new lease.
pub const DEFAULT_CLAUSE_TYPE: &str = "General Terms";

fn require(raw: &str, what: &str) -> ServiceResult<()> {
    if raw.trim().is_empty() {
        return Err(ServiceError::validation(format!("{what} is required")));
    }
    Ok(())
}

pub struct PropertyManager {
    store: Arc<DomainStore>,
    agent: Arc<InsightAgent>,
    fees: FeeSchedule,
}

impl PropertyManager {
    pub fn new(store: Arc<DomainStore>, agent: Arc<InsightAgent>) -> Self {
        Self::with_fees(store, agent, FeeSchedule::default())
    }

    pub fn with_fees(store: Arc<DomainStore>, agent: Arc<InsightAgent>, fees: FeeSchedule) -> Self {
        Self { store, agent, fees }
    }

    pub fn store(&self) -> &Arc<DomainStore> {
        &self.store
    }

    pub fn agent(&self) -> &Arc<InsightAgent> {
        &self.agent
    }

    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    fn property(&self, property_id: &str) -> ServiceResult<Property> {
        self.store
            .get_property_by_id(property_id)
            .ok_or_else(|| ServiceError::not_found(format!("property '{property_id}'")))
    }

    fn tenant(&self, tenant_id: &str) -> ServiceResult<Tenant> {
        self.store
            .get_tenant_by_id(tenant_id)
            .ok_or_else(|| ServiceError::not_found(format!("tenant '{tenant_id}'")))
    }

    /// Create, store, then screen a tenant.
    ///
    /// The tenant stays registered even if screening fails.
    pub async fn register_new_tenant(&self, full_name: &str) -> ServiceResult<(Tenant, TenantScreeningResult)> {
        require(full_name, "tenant name")?;

        let tenant = Tenant::register(full_name)?;
        self.store.add_tenant(tenant.clone())?;
        info!(tenant_id = %tenant.id(), "tenant registered");

        let screening = self.agent.screen_tenant(&tenant).await?;
        Ok((tenant, screening))
    }

    /// Sign a lease at the property's current rent and generate its clause.
    pub async fn create_lease(&self, tenant_id: &str, property_id: &str) -> ServiceResult<(LeaseAgreement, String)> {
        require(tenant_id, "tenant id")?;
        require(property_id, "property id")?;

        let property = self.property(property_id)?;
        let tenant = self.tenant(tenant_id)?;

        let lease = LeaseAgreement::sign(tenant.clone(), property.clone());
        self.store.add_lease(lease.clone())?;
        info!(
            lease_id = %lease.id(),
            tenant_id = %tenant.id(),
            property_id = %property.id(),
            monthly_rent = %lease.monthly_rent(),
            "lease created"
        );

        let clause = self
            .agent
            .generate_lease_clause(&property, &tenant, DEFAULT_CLAUSE_TYPE)
            .await?;
        Ok((lease, clause))
    }

    pub async fn get_pricing_recommendation(&self, property_id: &str) -> ServiceResult<RentalPricingRecommendation> {
        let property = self.property(property_id)?;
        self.agent.recommend_rental_price(&property).await
    }

    pub async fn get_maintenance_prediction(&self, property_id: &str) -> ServiceResult<MaintenancePrediction> {
        let property = self.property(property_id)?;
        self.agent.predict_maintenance(&property).await
    }

    pub async fn run_virtual_tour_inspection(&self, property_id: &str) -> ServiceResult<InspectionReport> {
        let property = self.property(property_id)?;
        let tour = self
            .store
            .get_virtual_tour_by_property_id(property_id)
            .ok_or_else(|| ServiceError::not_found(format!("no virtual tour for property '{property_id}'")))?;

        self.agent.analyse_virtual_tour(&tour, &property).await
    }

    /// Issue this month's invoice for a lease, dated today (UTC).
    pub fn issue_invoice(&self, lease_id: &str) -> ServiceResult<Invoice> {
        self.issue_invoice_on(lease_id, Utc::now().date_naive())
    }

    /// Issue an invoice dated `date`, due on the first of the following month.
    pub fn issue_invoice_on(&self, lease_id: &str, date: NaiveDate) -> ServiceResult<Invoice> {
        require(lease_id, "lease id")?;
        let lease = self
            .store
            .get_lease_by_id(lease_id)
            .ok_or_else(|| ServiceError::not_found(format!("lease '{lease_id}'")))?;

        let invoice = Invoice::issue(IssueInvoice {
            invoice_id: InvoiceId::generate(),
            lease_id: lease.id().clone(),
            tenant_id: lease.lessee().id().clone(),
            tenant_name: lease.lessee().full_name().to_string(),
            property_address: lease.property().address().to_string(),
            items: vec![
                LineItem::new("Monthly Rent", lease.monthly_rent()),
                LineItem::new("Water & Electricity Levy", self.fees.water_electricity_levy),
                LineItem::new("Administration Fee", self.fees.administration_fee),
            ],
            date,
            due_date: next_month_start(date),
        })?;

        self.store.add_invoice(invoice.clone())?;
        info!(
            invoice_id = %invoice.id(),
            lease_id = %lease.id(),
            amount = %invoice.amount(),
            due_date = %invoice.due_date(),
            "invoice issued"
        );
        Ok(invoice)
    }

    /// Statement for the current calendar month (UTC).
    pub fn generate_statement(&self, tenant_id: &str) -> ServiceResult<Statement> {
        self.generate_statement_on(tenant_id, Utc::now().date_naive())
    }

    /// Statement for the calendar month containing `date`.
    ///
    /// Carries every invoice ever issued to the tenant; the period is
    /// descriptive and does not filter them.
    pub fn generate_statement_on(&self, tenant_id: &str, date: NaiveDate) -> ServiceResult<Statement> {
        require(tenant_id, "tenant id")?;
        let tenant = self.tenant(tenant_id)?;

        let invoices = self.store.get_invoices_by_tenant_id(tenant_id);
        let statement = Statement::new(
            StatementId::generate(),
            tenant.id().clone(),
            tenant.full_name(),
            BillingPeriod::month_of(date),
            invoices,
        )?;

        self.store.add_statement(statement.clone())?;
        info!(
            statement_id = %statement.id(),
            tenant_id = %tenant.id(),
            invoices = statement.invoices().len(),
            closing_balance = %statement.closing_balance(),
            "statement generated"
        );
        Ok(statement)
    }

    /// Mark an invoice paid today (UTC).
    pub fn mark_invoice_paid(&self, invoice_id: &str) -> ServiceResult<Invoice> {
        let today = Utc::now().date_naive();
        let invoice = self.store.update_invoice(invoice_id, |i| i.mark_as_paid(today))?;
        info!(invoice_id, "invoice paid");
        Ok(invoice)
    }

    /// Only a pending invoice becomes overdue; other statuses are left as-is.
    pub fn mark_invoice_overdue(&self, invoice_id: &str) -> ServiceResult<Invoice> {
        let invoice = self.store.update_invoice(invoice_id, Invoice::mark_as_overdue)?;
        info!(invoice_id, status = %invoice.status(), "invoice overdue check");
        Ok(invoice)
    }

    pub fn cancel_invoice(&self, invoice_id: &str) -> ServiceResult<Invoice> {
        let invoice = self.store.update_invoice(invoice_id, Invoice::cancel)?;
        info!(invoice_id, "invoice cancelled");
        Ok(invoice)
    }
}
