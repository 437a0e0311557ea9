//! Infrastructure layer: in-memory store, AI orchestration, property manager, config.

pub mod ai;
pub mod config;
pub mod error;
pub mod manager;
pub mod store;

#[cfg(test)]
mod integration_tests;

pub use ai::InsightAgent;
pub use config::AppConfig;
pub use error::{ServiceError, ServiceResult};
pub use manager::PropertyManager;
pub use store::DomainStore;
