//! Global market metrics endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoints::global_metrics;
use crate::error::CmcError;
use crate::http::Transport;
use crate::types::GenericResponse;

/// Global market metrics endpoints.
#[derive(Debug, Clone)]
pub struct GlobalMetrics {
    transport: Arc<Transport>,
}

impl GlobalMetrics {
    /// Create the group on top of a shared transport.
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get the latest aggregate market metrics.
    pub async fn quotes_latest<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(global_metrics::QUOTES_LATEST, params).await
    }

    /// Get historical aggregate market metrics.
    pub async fn quotes_historical<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(global_metrics::QUOTES_HISTORICAL, params).await
    }
}
