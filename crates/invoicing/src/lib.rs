//! Invoicing domain module: rent invoices and tenant account statements.
//!
//! This crate contains the financial derivations (line totals, billed vs. paid,
//! closing balance) implemented purely as deterministic domain logic
//! (no IO, no storage).

pub mod billing;
pub mod invoice;
pub mod statement;

pub use billing::{next_month_start, BillingPeriod, FeeSchedule};
pub use invoice::{Invoice, IssueInvoice, LineItem, PaymentStatus};
pub use statement::Statement;
