//! The access layer: one async function per (resource, verb).
//!
//! Every operation sends its request through the [`Transport`], unwraps the
//! response envelope and, when anything recoverable goes wrong, answers from
//! the session [`MockStore`] instead.

pub mod books;
pub mod reading_lists;
pub mod recommendations;
pub mod reviews;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use shelf_http::{acknowledge, decode, ApiError, ApiRequest, Transport, TransportBuilder};
use shelf_kernel::ApiSettings;

use crate::mock::MockStore;
use crate::utils;

/// Handle to the backend plus its fallback store. Cheap to clone.
#[derive(Clone)]
pub struct Api {
    transport: Arc<dyn Transport>,
    store: Arc<MockStore>,
    settings: ApiSettings,
}

impl Api {
    pub fn new(transport: Arc<dyn Transport>, store: Arc<MockStore>, settings: ApiSettings) -> Self {
        Self {
            transport,
            store,
            settings,
        }
    }

    /// Build a reqwest transport from settings with a freshly seeded store.
    pub fn from_settings(settings: &ApiSettings) -> anyhow::Result<Self> {
        let transport = TransportBuilder::from_settings(settings).build()?;
        Ok(Self::new(
            Arc::new(transport),
            Arc::new(MockStore::seeded()),
            settings.clone(),
        ))
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    pub fn store(&self) -> &MockStore {
        &self.store
    }

    /// Send, require 2xx, unwrap the envelope and deserialize.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        keys: &[&str],
    ) -> Result<T, ApiError> {
        let response = self.transport.send(request).await?.error_for_status()?;
        decode(&response.body, keys)
    }

    /// Send, require 2xx and a body that does not report failure.
    async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        let response = self.transport.send(request).await?.error_for_status()?;
        acknowledge(&response.body)
    }

    /// Decide whether `err` may be answered from mock data. Returns the error
    /// back when it may not.
    async fn recover(&self, module: &str, operation: &str, err: ApiError) -> Result<(), ApiError> {
        if !err.is_recoverable() || !self.settings.fallback_enabled {
            return Err(err);
        }

        let prefix = utils::log_prefix(module);
        tracing::warn!(
            %prefix,
            operation,
            error_code = err.code(),
            error = %err,
            "backend request failed, serving mock data"
        );

        self.mock_delay().await;
        Ok(())
    }

    async fn mock_delay(&self) {
        let delay = self.settings.mock_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use shelf_http::{ApiError, ApiRequest, ApiResponse, Transport};

    use super::*;

    /// Transport that replays scripted outcomes and records every request.
    /// An exhausted script behaves like an unreachable backend.
    #[derive(Default)]
    pub struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn respond(self: &Arc<Self>, status: u16, body: impl Into<String>) -> Arc<Self> {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(ApiResponse::new(status, body)));
            self.clone()
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::transport("connection refused")))
        }
    }

    pub fn settings() -> ApiSettings {
        ApiSettings {
            mock_delay_ms: 0,
            ..ApiSettings::default()
        }
    }

    pub fn api(transport: &Arc<ScriptedTransport>) -> Api {
        Api::new(
            transport.clone(),
            Arc::new(MockStore::seeded()),
            settings(),
        )
    }
}
