//! `proptech-ai`
//!
//! **Responsibility:** AI capability boundary for the property platform.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on leasing/invoicing aggregates (it sees ids and plain values).
//! - It must not mutate domain state.
//! - It emits **AI insights and decision objects**, nothing else.

pub mod backend;
pub mod config;
pub mod decision;
pub mod demo;
pub mod error;
pub mod insight;
pub mod sink;
pub mod switch;

pub use backend::{AiBackend, Features, Prediction};
pub use config::AiConfig;
pub use decision::{
    MaintenancePrediction, RentalPricingRecommendation, RiskLevel, TenantScreeningResult, Urgency, price_band,
};
pub use demo::DemoAiBackend;
pub use error::AiError;
pub use insight::{AiInsight, InsightCategory, clamp_confidence};
pub use sink::{InsightLog, InsightSink};
pub use switch::ModeSwitchedBackend;
