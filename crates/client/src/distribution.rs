//! Advisory stock-distribution check.
//!
//! Ran whenever the product selection changes on a non-transfer draft.
//! The result only informs the operator; submission is never blocked on
//! it and a failed check degrades to "no distribution data". Every check
//! is a fresh round trip: stock moves under us, so caching would only
//! manufacture staler advice.

use wareflow_auth::Session;
use wareflow_core::ProductId;
use wareflow_movements::{MovementKind, StockDistribution};

use crate::error::ClientResult;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct DistributionChecker<'a> {
    api: &'a ApiClient,
}

impl<'a> DistributionChecker<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Whether a draft of this kind warrants a check at all.
    pub fn should_check(kind: MovementKind) -> bool {
        StockDistribution::applies_to(kind)
    }

    /// Fetch the product's current per-warehouse stock.
    pub async fn check(
        &self,
        session: &Session,
        product_id: ProductId,
    ) -> ClientResult<StockDistribution> {
        self.api.stock_distribution(session, product_id).await
    }

    /// Like [`check`](Self::check), but a failure degrades to an empty
    /// distribution instead of surfacing an error.
    pub async fn check_advisory(
        &self,
        session: &Session,
        product_id: ProductId,
    ) -> StockDistribution {
        match self.check(session, product_id).await {
            Ok(distribution) => distribution,
            Err(err) => {
                tracing::warn!(
                    product_id = %product_id,
                    error = %err,
                    "stock distribution check failed; continuing without distribution data"
                );
                StockDistribution::default()
            }
        }
    }
}
