//! Live/demo mode selection.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::backend::{AiBackend, Features, Prediction};
use crate::config::AiConfig;
use crate::demo::DemoAiBackend;
use crate::error::AiError;

/// Backend that honours [`AiConfig::enabled`].
///
/// - disabled: every call is answered by [`DemoAiBackend`]
/// - enabled: calls go to the injected live client, bounded by
///   [`AiConfig::timeout`]; a missing client is a backend failure
pub struct ModeSwitchedBackend {
    config: AiConfig,
    demo: DemoAiBackend,
    live: Option<Arc<dyn AiBackend>>,
}

impl ModeSwitchedBackend {
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            demo: DemoAiBackend::new(),
            live: None,
        }
    }

    pub fn demo() -> Self {
        Self::new(AiConfig::demo())
    }

    pub fn with_live(mut self, live: Arc<dyn AiBackend>) -> Self {
        self.live = Some(live);
        self
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn is_live(&self) -> bool {
        self.config.enabled
    }

    fn live(&self) -> Result<&Arc<dyn AiBackend>, AiError> {
        self.live
            .as_ref()
            .ok_or_else(|| AiError::backend("live AI backend is enabled but no client is configured"))
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, AiError>
    where
        F: Future<Output = Result<T, AiError>> + Send,
    {
        match tokio::time::timeout(self.config.timeout(), call).await {
            Ok(result) => result,
            Err(_) => Err(AiError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }),
        }
    }
}

impl core::fmt::Debug for ModeSwitchedBackend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModeSwitchedBackend")
            .field("config", &self.config)
            .field("has_live_client", &self.live.is_some())
            .finish()
    }
}

#[async_trait]
impl AiBackend for ModeSwitchedBackend {
    async fn generate_text(&self, prompt: &str) -> Result<String, AiError> {
        if prompt.trim().is_empty() {
            return Err(AiError::invalid_input("prompt cannot be empty"));
        }
        if !self.config.enabled {
            return self.demo.generate_text(prompt).await;
        }

        let live = self.live()?;
        debug!(model_id = %self.config.text_model_id, "generate_text via live backend");
        self.bounded(live.generate_text(prompt)).await
    }

    async fn predict(&self, model_id: &str, features: &Features) -> Result<Prediction, AiError> {
        if !self.config.enabled {
            return self.demo.predict(model_id, features).await;
        }

        let live = self.live()?;
        debug!(model_id, "predict via live backend");
        self.bounded(live.predict(model_id, features)).await
    }
}
