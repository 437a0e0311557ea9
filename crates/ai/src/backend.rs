//! The AI capability consumed by the insight agent.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AiError;

/// Model input features (free-form JSON values keyed by name).
pub type Features = serde_json::Map<String, JsonValue>;

/// Numeric model output keyed by output name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prediction(BTreeMap<String, f64>);

impl Prediction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Value for `key`, or `default` when the model did not return it.
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for Prediction {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Text generation + numeric prediction.
///
/// Implementations may be slow (network bound) and may fail with
/// [`AiError::Backend`]. The agent depends only on this contract.
#[async_trait]
pub trait AiBackend: Send + Sync {
    /// Generate natural-language text for `prompt`.
    async fn generate_text(&self, prompt: &str) -> Result<String, AiError>;

    /// Run the numeric model `model_id` over `features`.
    async fn predict(&self, model_id: &str, features: &Features) -> Result<Prediction, AiError>;
}

#[async_trait]
impl<B> AiBackend for Arc<B>
where
    B: AiBackend + ?Sized,
{
    async fn generate_text(&self, prompt: &str) -> Result<String, AiError> {
        (**self).generate_text(prompt).await
    }

    async fn predict(&self, model_id: &str, features: &Features) -> Result<Prediction, AiError> {
        (**self).predict(model_id, features).await
    }
}
