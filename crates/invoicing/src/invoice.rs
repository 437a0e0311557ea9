use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use proptech_core::{
    DomainError, DomainResult, Entity, InvoiceId, LeaseId, TenantId, ValueObject,
};

/// Invoice payment status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
    PartiallyPaid,
    Cancelled,
}

impl core::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
            Self::PartiallyPaid => "PartiallyPaid",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// A single billable line (rent, levy, fee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    description: String,
    unit_price: Decimal,
    quantity: u32,
}

impl LineItem {
    pub fn new(description: impl Into<String>, unit_price: Decimal) -> Self {
        Self::with_quantity(description, unit_price, 1)
    }

    /// A zero quantity is raised to 1.
    pub fn with_quantity(description: impl Into<String>, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            description: description.into(),
            unit_price,
            quantity: quantity.max(1),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

impl ValueObject for LineItem {}

/// Command: issue an invoice against a lease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueInvoice {
    pub invoice_id: InvoiceId,
    pub lease_id: LeaseId,
    pub tenant_id: TenantId,
    /// Snapshot of the tenant's name at issue time.
    pub tenant_name: String,
    /// Snapshot of the leased property's address at issue time.
    pub property_address: String,
    pub items: Vec<LineItem>,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
}

/// A rental invoice issued to a tenant against a lease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    lease_id: LeaseId,
    tenant_id: TenantId,
    tenant_name: String,
    property_address: String,
    items: Vec<LineItem>,
    status: PaymentStatus,
    date: NaiveDate,
    due_date: NaiveDate,
    paid_date: Option<NaiveDate>,
    amount: Decimal,
}

impl Invoice {
    /// Issue a new invoice in `Pending` status.
    ///
    /// `amount` is fixed here as the sum of line totals.
    pub fn issue(cmd: IssueInvoice) -> DomainResult<Self> {
        if cmd.invoice_id.is_blank() {
            return Err(DomainError::validation("invoice id is required"));
        }
        if cmd.lease_id.is_blank() {
            return Err(DomainError::validation("invoice lease id is required"));
        }
        if cmd.tenant_id.is_blank() {
            return Err(DomainError::validation("invoice tenant id is required"));
        }
        if cmd.items.is_empty() {
            return Err(DomainError::validation("cannot issue invoice without line items"));
        }
        if cmd.items.iter().any(|i| i.unit_price().is_sign_negative()) {
            return Err(DomainError::validation(
                "invoice line unit_price must not be negative",
            ));
        }

        let amount = cmd.items.iter().map(LineItem::total).sum();

        Ok(Self {
            id: cmd.invoice_id,
            lease_id: cmd.lease_id,
            tenant_id: cmd.tenant_id,
            tenant_name: cmd.tenant_name,
            property_address: cmd.property_address,
            items: cmd.items,
            status: PaymentStatus::Pending,
            date: cmd.date,
            due_date: cmd.due_date,
            paid_date: None,
            amount,
        })
    }

    pub fn lease_id(&self) -> &LeaseId {
        &self.lease_id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn tenant_name(&self) -> &str {
        &self.tenant_name
    }

    pub fn property_address(&self) -> &str {
        &self.property_address
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn paid_date(&self) -> Option<NaiveDate> {
        self.paid_date
    }

    /// Amount captured at issue time.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Sum of all line item totals.
    pub fn calculate_total(&self) -> Decimal {
        self.items.iter().map(LineItem::total).sum()
    }

    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }

    pub fn mark_as_paid(&mut self, paid_date: NaiveDate) {
        self.status = PaymentStatus::Paid;
        self.paid_date = Some(paid_date);
    }

    /// Only a pending invoice can become overdue.
    pub fn mark_as_overdue(&mut self) {
        if self.status == PaymentStatus::Pending {
            self.status = PaymentStatus::Overdue;
        }
    }

    pub fn cancel(&mut self) {
        self.status = PaymentStatus::Cancelled;
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn issue_cmd(items: Vec<LineItem>) -> IssueInvoice {
        IssueInvoice {
            invoice_id: InvoiceId::new("INV-1"),
            lease_id: LeaseId::new("L-1"),
            tenant_id: TenantId::new("T-1"),
            tenant_name: "Thabo Mokoena".to_string(),
            property_address: "12 Mandela Ave, Soweto".to_string(),
            items,
            date: day(2026, 10, 14),
            due_date: day(2026, 11, 1),
        }
    }

    fn rent_items() -> Vec<LineItem> {
        vec![
            LineItem::new("Monthly Rent", dec!(3800)),
            LineItem::new("Water & Electricity Levy", dec!(350)),
            LineItem::new("Administration Fee", dec!(150)),
        ]
    }

    #[test]
    fn issued_invoice_totals_line_items() {
        let invoice = Invoice::issue(issue_cmd(rent_items())).unwrap();
        assert_eq!(invoice.calculate_total(), dec!(4300));
        assert_eq!(invoice.amount(), dec!(4300));
        assert_eq!(invoice.status(), PaymentStatus::Pending);
        assert_eq!(invoice.paid_date(), None);
    }

    #[test]
    fn line_total_multiplies_quantity() {
        let item = LineItem::with_quantity("Parking", dec!(125.50), 2);
        assert_eq!(item.total(), dec!(251.00));
        assert_eq!(LineItem::with_quantity("x", dec!(10), 0).quantity(), 1);
    }

    #[test]
    fn cannot_issue_without_lines() {
        let err = Invoice::issue(issue_cmd(vec![])).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("line items")));
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = Invoice::issue(issue_cmd(vec![LineItem::new("Credit", dec!(-10))])).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn status_transitions_keep_amount() {
        let mut invoice = Invoice::issue(issue_cmd(rent_items())).unwrap();

        invoice.mark_as_overdue();
        assert_eq!(invoice.status(), PaymentStatus::Overdue);

        invoice.mark_as_paid(day(2026, 11, 3));
        assert_eq!(invoice.status(), PaymentStatus::Paid);
        assert_eq!(invoice.paid_date(), Some(day(2026, 11, 3)));

        // Overdue only applies to pending invoices.
        invoice.mark_as_overdue();
        assert_eq!(invoice.status(), PaymentStatus::Paid);

        invoice.cancel();
        assert_eq!(invoice.status(), PaymentStatus::Cancelled);
        assert_eq!(invoice.amount(), dec!(4300));
    }
}
