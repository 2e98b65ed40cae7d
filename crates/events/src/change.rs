use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of data changed.
///
/// Coarse on purpose: the receiving view re-fetches everything it shows,
/// so there is no per-entity payload to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeScope {
    /// A movement or transfer was recorded, or a request changed state.
    StockMovements,
    /// Aggregate dashboard stats are stale.
    DashboardStats,
}

/// Broadcast notification that remote data changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataChanged {
    pub scope: ChangeScope,
    pub occurred_at: DateTime<Utc>,
}

impl DataChanged {
    pub fn now(scope: ChangeScope) -> Self {
        Self {
            scope,
            occurred_at: Utc::now(),
        }
    }
}
