//! In-memory domain store.
//!
//! Owns the canonical collections. Lists are insertion-ordered and
//! uniqueness-free; lookups are linear and case-insensitive on the id.
//! Reads hand out cloned snapshots, so callers can never mutate stored
//! entities except through the store's own methods.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use proptech_core::{DomainError, DomainResult, Entity};
use proptech_invoicing::{Invoice, Statement};
use proptech_leasing::{InspectionReport, Landlord, LeaseAgreement, Property, Tenant, VirtualTour};

#[derive(Debug, Default)]
struct Collections {
    landlord: Landlord,
    properties: Vec<Property>,
    tenants: Vec<Tenant>,
    leases: Vec<LeaseAgreement>,
    virtual_tours: Vec<VirtualTour>,
    invoices: Vec<Invoice>,
    statements: Vec<Statement>,
}

/// Blank ids short-circuit to "not found" without scanning.
fn find_by<'a, T>(items: &'a [T], raw_id: &str, matches: impl Fn(&T, &str) -> bool) -> Option<&'a T> {
    if raw_id.trim().is_empty() {
        return None;
    }
    items.iter().find(|item| matches(item, raw_id))
}

#[derive(Debug, Default)]
pub struct DomainStore {
    inner: RwLock<Collections>,
}

impl DomainStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Collections are only ever appended to or updated in a single step, so a
    // poisoned guard still sees consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ---- landlord ----

    /// The current landlord; a placeholder profile until one is set.
    pub fn landlord(&self) -> Landlord {
        self.read().landlord.clone()
    }

    pub fn update_landlord(&self, landlord: Landlord) {
        debug!(landlord = landlord.full_name(), "store: landlord replaced");
        self.write().landlord = landlord;
    }

    pub fn update_landlord_bank_account(&self, account: &str) -> Landlord {
        let mut guard = self.write();
        guard.landlord.update_bank_account(account);
        debug!("store: landlord bank account updated");
        guard.landlord.clone()
    }

    // ---- inserts ----

    pub fn add_property(&self, property: Property) -> DomainResult<()> {
        if property.id().is_blank() {
            return Err(DomainError::validation("property id is required"));
        }
        debug!(property_id = %property.id(), "store: add property");
        self.write().properties.push(property);
        Ok(())
    }

    pub fn add_tenant(&self, tenant: Tenant) -> DomainResult<()> {
        if tenant.id().is_blank() {
            return Err(DomainError::validation("tenant id is required"));
        }
        debug!(tenant_id = %tenant.id(), "store: add tenant");
        self.write().tenants.push(tenant);
        Ok(())
    }

    /// Both the lessee and the property must already exist.
    pub fn add_lease(&self, lease: LeaseAgreement) -> DomainResult<()> {
        if lease.id().is_blank() {
            return Err(DomainError::validation("lease id is required"));
        }

        let mut guard = self.write();
        let tenant_id = lease.lessee().id().as_str();
        let property_id = lease.property().id().as_str();
        if find_by(&guard.tenants, tenant_id, |t, raw| t.id().matches(raw)).is_none() {
            return Err(DomainError::invariant(format!(
                "lease {} references unknown tenant {tenant_id}",
                lease.id()
            )));
        }
        if find_by(&guard.properties, property_id, |p, raw| p.id().matches(raw)).is_none() {
            return Err(DomainError::invariant(format!(
                "lease {} references unknown property {property_id}",
                lease.id()
            )));
        }

        debug!(lease_id = %lease.id(), tenant_id, property_id, "store: add lease");
        guard.leases.push(lease);
        Ok(())
    }

    /// The tour's property must already exist.
    pub fn add_virtual_tour(&self, tour: VirtualTour) -> DomainResult<()> {
        if tour.id().is_blank() {
            return Err(DomainError::validation("tour id is required"));
        }

        let mut guard = self.write();
        let property_id = tour.property_id().as_str();
        if find_by(&guard.properties, property_id, |p, raw| p.id().matches(raw)).is_none() {
            return Err(DomainError::invariant(format!(
                "virtual tour {} references unknown property {property_id}",
                tour.id()
            )));
        }

        debug!(tour_id = %tour.id(), property_id, rooms = tour.rooms().len(), "store: add virtual tour");
        guard.virtual_tours.push(tour);
        Ok(())
    }

    pub fn add_invoice(&self, invoice: Invoice) -> DomainResult<()> {
        if invoice.id().is_blank() {
            return Err(DomainError::validation("invoice id is required"));
        }
        debug!(invoice_id = %invoice.id(), tenant_id = %invoice.tenant_id(), "store: add invoice");
        self.write().invoices.push(invoice);
        Ok(())
    }

    pub fn add_statement(&self, statement: Statement) -> DomainResult<()> {
        if statement.id().is_blank() {
            return Err(DomainError::validation("statement id is required"));
        }
        debug!(statement_id = %statement.id(), tenant_id = %statement.tenant_id(), "store: add statement");
        self.write().statements.push(statement);
        Ok(())
    }

    // ---- lookups ----

    pub fn get_property_by_id(&self, id: &str) -> Option<Property> {
        find_by(&self.read().properties, id, |p, raw| p.id().matches(raw)).cloned()
    }

    pub fn get_tenant_by_id(&self, id: &str) -> Option<Tenant> {
        find_by(&self.read().tenants, id, |t, raw| t.id().matches(raw)).cloned()
    }

    pub fn get_lease_by_id(&self, id: &str) -> Option<LeaseAgreement> {
        find_by(&self.read().leases, id, |l, raw| l.id().matches(raw)).cloned()
    }

    pub fn get_invoice_by_id(&self, id: &str) -> Option<Invoice> {
        find_by(&self.read().invoices, id, |i, raw| i.id().matches(raw)).cloned()
    }

    /// First tour registered for the property.
    pub fn get_virtual_tour_by_property_id(&self, property_id: &str) -> Option<VirtualTour> {
        find_by(&self.read().virtual_tours, property_id, |t, raw| t.property_id().matches(raw)).cloned()
    }

    /// All invoices issued to the tenant, in issue order. Never "not found".
    pub fn get_invoices_by_tenant_id(&self, tenant_id: &str) -> Vec<Invoice> {
        if tenant_id.trim().is_empty() {
            return Vec::new();
        }
        self.read()
            .invoices
            .iter()
            .filter(|i| i.tenant_id().matches(tenant_id))
            .cloned()
            .collect()
    }

    /// Statement with the latest `date`; on equal dates the first one stored wins.
    pub fn get_latest_statement_by_tenant_id(&self, tenant_id: &str) -> Option<Statement> {
        if tenant_id.trim().is_empty() {
            return None;
        }
        let guard = self.read();
        let mut latest: Option<&Statement> = None;
        for statement in guard.statements.iter().filter(|s| s.tenant_id().matches(tenant_id)) {
            match latest {
                Some(current) if statement.date() <= current.date() => {}
                _ => latest = Some(statement),
            }
        }
        latest.cloned()
    }

    // ---- in-place updates ----

    /// Apply `transition` to the stored invoice and return the updated copy.
    ///
    /// Stored statements that carry the invoice see the new status too.
    pub fn update_invoice<F>(&self, invoice_id: &str, transition: F) -> DomainResult<Invoice>
    where
        F: FnOnce(&mut Invoice),
    {
        let mut guard = self.write();
        if invoice_id.trim().is_empty() {
            return Err(DomainError::not_found("invoice id is blank"));
        }
        let invoice = guard
            .invoices
            .iter_mut()
            .find(|i| i.id().matches(invoice_id))
            .ok_or_else(|| DomainError::not_found(format!("invoice {invoice_id}")))?;

        transition(invoice);
        let updated = invoice.clone();

        let refreshed = guard
            .statements
            .iter_mut()
            .filter(|s| s.tenant_id() == updated.tenant_id())
            .map(|s| s.refresh_invoice(&updated))
            .filter(|hit| *hit)
            .count();
        debug!(invoice_id, status = %updated.status(), statements = refreshed, "store: invoice updated");
        Ok(updated)
    }

    /// Attach `report` to the stored tour, replacing any earlier report.
    ///
    /// Tour ids are not unique, so the tour is matched on both its id and
    /// its property.
    pub fn set_tour_inspection(
        &self,
        tour_id: &str,
        property_id: &str,
        report: InspectionReport,
    ) -> DomainResult<VirtualTour> {
        let mut guard = self.write();
        if tour_id.trim().is_empty() || property_id.trim().is_empty() {
            return Err(DomainError::not_found("tour id is blank"));
        }
        let tour = guard
            .virtual_tours
            .iter_mut()
            .find(|t| t.id().matches(tour_id) && t.property_id().matches(property_id))
            .ok_or_else(|| DomainError::not_found(format!("virtual tour {tour_id} for property {property_id}")))?;

        tour.set_inspection(report);
        debug!(tour_id, property_id = %tour.property_id(), "store: tour inspection replaced");
        Ok(tour.clone())
    }

    // ---- snapshot views ----

    pub fn properties(&self) -> Vec<Property> {
        self.read().properties.clone()
    }

    pub fn tenants(&self) -> Vec<Tenant> {
        self.read().tenants.clone()
    }

    pub fn leases(&self) -> Vec<LeaseAgreement> {
        self.read().leases.clone()
    }

    pub fn virtual_tours(&self) -> Vec<VirtualTour> {
        self.read().virtual_tours.clone()
    }

    pub fn invoices(&self) -> Vec<Invoice> {
        self.read().invoices.clone()
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.read().statements.clone()
    }

    pub fn property_count(&self) -> usize {
        self.read().properties.len()
    }

    pub fn lease_count(&self) -> usize {
        self.read().leases.len()
    }
}
