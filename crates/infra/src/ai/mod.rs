//! AI orchestration: the insight agent and its pure helpers.

pub mod findings;
pub mod insight_agent;
pub mod report;

pub use insight_agent::InsightAgent;
