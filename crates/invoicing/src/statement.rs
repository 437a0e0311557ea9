use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use proptech_core::{DomainError, DomainResult, Entity, StatementId, TenantId};

use crate::billing::BillingPeriod;
use crate::invoice::Invoice;

/// A tenant account statement summarising billed vs. paid amounts.
///
/// Holds copies of the tenant's invoices; whoever owns the canonical invoices
/// pushes status changes in through [`Statement::refresh_invoice`]. The period
/// is descriptive: it does not restrict which invoices are included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    id: StatementId,
    tenant_id: TenantId,
    tenant_name: String,
    period: BillingPeriod,
    invoices: Vec<Invoice>,
    opening_balance: Decimal,
}

impl Statement {
    pub fn new(
        id: StatementId,
        tenant_id: TenantId,
        tenant_name: impl Into<String>,
        period: BillingPeriod,
        invoices: Vec<Invoice>,
    ) -> DomainResult<Self> {
        if id.is_blank() {
            return Err(DomainError::validation("statement id is required"));
        }
        if tenant_id.is_blank() {
            return Err(DomainError::validation("statement tenant id is required"));
        }
        Ok(Self {
            id,
            tenant_id,
            tenant_name: tenant_name.into(),
            period,
            invoices,
            opening_balance: Decimal::ZERO,
        })
    }

    pub fn with_opening_balance(mut self, opening_balance: Decimal) -> Self {
        self.opening_balance = opening_balance;
        self
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn tenant_name(&self) -> &str {
        &self.tenant_name
    }

    /// Statement date (the period start).
    pub fn date(&self) -> NaiveDate {
        self.period.start
    }

    pub fn period_start(&self) -> NaiveDate {
        self.period.start
    }

    pub fn period_end(&self) -> NaiveDate {
        self.period.end
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Replace the carried copy of `invoice`, if this statement has one.
    pub fn refresh_invoice(&mut self, invoice: &Invoice) -> bool {
        match self.invoices.iter_mut().find(|i| i.id() == invoice.id()) {
            Some(carried) => {
                *carried = invoice.clone();
                true
            }
            None => false,
        }
    }

    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }

    pub fn total_billed(&self) -> Decimal {
        self.invoices.iter().map(Invoice::calculate_total).sum()
    }

    pub fn total_paid(&self) -> Decimal {
        self.invoices
            .iter()
            .filter(|i| i.is_paid())
            .map(Invoice::calculate_total)
            .sum()
    }

    /// `opening_balance + total_billed - total_paid`.
    pub fn closing_balance(&self) -> Decimal {
        self.opening_balance + self.total_billed() - self.total_paid()
    }

    /// Balance due (alias for [`Self::closing_balance`]).
    pub fn calculate_balance(&self) -> Decimal {
        self.closing_balance()
    }

    pub fn calculate_total(&self) -> Decimal {
        self.closing_balance()
    }
}

impl Entity for Statement {
    type Id = StatementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
