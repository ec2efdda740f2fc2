//! External data synchronization for the data-integration panel.
//!
//! A sync never fails hard. When the endpoint is missing, unreachable, or
//! returns something unparseable, [`SyncService::fetch`] waits out the
//! fallback delay and hands back the fixed fallback dataset instead, tagged so
//! the caller can tell the user which one they got.

use crate::config::SyncConfig;
use crate::demo;
use crate::error::{DashboardError, DashboardResult};
use crate::store::SyncItem;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Anything that can produce sync rows
#[async_trait]
pub trait SyncSource: Send + Sync {
    async fn fetch(&self) -> DashboardResult<Vec<SyncItem>>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// HTTP endpoint returning a JSON array of sync items
pub struct HttpSyncSource {
    client: Client,
    endpoint: String,
}

impl HttpSyncSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| DashboardError::SyncUnavailable(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SyncSource for HttpSyncSource {
    async fn fetch(&self) -> DashboardResult<Vec<SyncItem>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| DashboardError::SyncUnavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::SyncUnavailable(format!("endpoint returned {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::SyncUnavailable(format!("failed to read body: {}", e)))?;

        parse_sync_items(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Parse the endpoint's JSON payload
pub fn parse_sync_items(body: &str) -> DashboardResult<Vec<SyncItem>> {
    serde_json::from_str(body).map_err(|e| DashboardError::SyncUnavailable(format!("invalid payload: {}", e)))
}

/// What a sync produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Live(Vec<SyncItem>),
    Fallback { items: Vec<SyncItem>, reason: String },
}

impl SyncOutcome {
    pub fn items(&self) -> &[SyncItem] {
        match self {
            SyncOutcome::Live(items) => items,
            SyncOutcome::Fallback { items, .. } => items,
        }
    }

    pub fn into_items(self) -> Vec<SyncItem> {
        match self {
            SyncOutcome::Live(items) => items,
            SyncOutcome::Fallback { items, .. } => items,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SyncOutcome::Fallback { .. })
    }
}

#[derive(Clone)]
pub struct SyncService {
    source: Option<Arc<dyn SyncSource>>,
    fallback_delay: Duration,
}

impl SyncService {
    pub fn new(source: Option<Arc<dyn SyncSource>>, fallback_delay: Duration) -> Self {
        Self { source, fallback_delay }
    }

    /// Build from configuration; no endpoint means every sync falls back
    pub fn from_config(config: &SyncConfig, fallback_delay: Duration) -> Self {
        let source = config.endpoint.as_ref().and_then(|endpoint| {
            match HttpSyncSource::new(endpoint.clone(), Duration::from_secs(config.timeout_seconds)) {
                Ok(source) => Some(Arc::new(source) as Arc<dyn SyncSource>),
                Err(e) => {
                    warn!("Sync: {}; continuing without an endpoint", e);
                    None
                }
            }
        });
        Self::new(source, fallback_delay)
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub async fn fetch(&self) -> SyncOutcome {
        let result = match &self.source {
            Some(source) => {
                info!("Sync: fetching from {}", source.describe());
                source.fetch().await
            }
            None => Err(DashboardError::SyncUnavailable("no endpoint configured".to_string())),
        };

        match result {
            Ok(items) => {
                info!("Sync: received {} items", items.len());
                SyncOutcome::Live(items)
            }
            Err(e) => {
                warn!("Sync: {}; using fallback dataset", e);
                tokio::time::sleep(self.fallback_delay).await;
                SyncOutcome::Fallback {
                    items: demo::sync_fallback(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
