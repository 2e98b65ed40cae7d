//! View-owned request list.
//!
//! Each view mounts its own store and fetches its own copy; there is no
//! shared cache between views. Consistency across views comes from full
//! reloads (triggered by change notifications or the polling fallback),
//! never from fine-grained sync.

use wareflow_auth::Session;
use wareflow_core::RequestId;
use wareflow_movements::StockMovementRequest;

use crate::error::ClientResult;
use crate::http::ApiClient;

/// Which slice of the request population this store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestScope {
    /// The session user's own requests (requester view).
    Mine,
    /// All pending requests across requesters (approver view).
    PendingApproval,
}

/// In-memory copy of the requests relevant to one view.
#[derive(Debug)]
pub struct RequestStore {
    scope: RequestScope,
    requests: Vec<StockMovementRequest>,
    loaded: bool,
}

impl RequestStore {
    /// Create an empty store; the list stays empty until the first
    /// successful [`refresh`](Self::refresh).
    pub fn new(scope: RequestScope) -> Self {
        Self {
            scope,
            requests: Vec::new(),
            loaded: false,
        }
    }

    pub fn scope(&self) -> RequestScope {
        self.scope
    }

    /// Whether at least one refresh has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Re-fetch this store's slice from the backend.
    ///
    /// On success the local copy is replaced wholesale. On failure the
    /// last-known list is preserved untouched and the error is returned
    /// for the view to render; there is no retry.
    ///
    /// Decoded records are held to the warehouse-shape invariant; a
    /// record that violates it is dropped from the local copy rather
    /// than handed to views that assume the shape matches the kind.
    pub async fn refresh(&mut self, api: &ApiClient, session: &Session) -> ClientResult<()> {
        let fetched = match self.scope {
            RequestScope::Mine => api.list_my_requests(session).await?,
            RequestScope::PendingApproval => api.list_pending_requests(session).await?,
        };

        let mut requests = Vec::with_capacity(fetched.len());
        for request in fetched {
            if let Err(err) = request.warehouses_consistent() {
                tracing::warn!(
                    request_id = %request.id,
                    error = %err,
                    "dropping request with inconsistent warehouse references"
                );
                continue;
            }
            requests.push(request);
        }

        self.requests = requests;
        self.loaded = true;
        Ok(())
    }

    /// The full local copy, in server order.
    pub fn requests(&self) -> &[StockMovementRequest] {
        &self.requests
    }

    /// Requests the view can still act on.
    ///
    /// The requester view hides approved requests (they are done); the
    /// approver view is already pending-only.
    pub fn actionable(&self) -> Vec<&StockMovementRequest> {
        match self.scope {
            RequestScope::Mine => self.requests.iter().filter(|r| r.is_actionable()).collect(),
            RequestScope::PendingApproval => self.requests.iter().collect(),
        }
    }

    pub fn get(&self, id: RequestId) -> Option<&StockMovementRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Drop a request from the local copy, returning it if present.
    ///
    /// Called only after the server acknowledged the corresponding
    /// mutation; the store never removes speculatively.
    pub fn remove(&mut self, id: RequestId) -> Option<StockMovementRequest> {
        let index = self.requests.iter().position(|r| r.id == id)?;
        Some(self.requests.remove(index))
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wareflow_core::{ProductId, UserId};
    use wareflow_movements::{MovementKind, RequestStatus};

    fn request(id: i64, status: RequestStatus) -> StockMovementRequest {
        StockMovementRequest {
            id: RequestId::new(id),
            product_id: ProductId::new(7),
            product_name: None,
            movement_type: MovementKind::In,
            quantity: 5,
            status,
            warehouse_id: Some(wareflow_core::WarehouseId::new(3)),
            warehouse_name: None,
            from_warehouse_id: None,
            from_warehouse_name: None,
            to_warehouse_id: None,
            to_warehouse_name: None,
            rejection_reason: None,
            notes: None,
            created_at: None,
            user_id: Some(UserId::new(42)),
            requester_username: None,
        }
    }

    fn store_with(scope: RequestScope, requests: Vec<StockMovementRequest>) -> RequestStore {
        let mut store = RequestStore::new(scope);
        store.requests = requests;
        store.loaded = true;
        store
    }

    #[test]
    fn starts_empty_and_unloaded() {
        let store = RequestStore::new(RequestScope::Mine);
        assert!(store.is_empty());
        assert!(!store.is_loaded());
    }

    #[test]
    fn mine_scope_hides_approved_from_actionable() {
        let store = store_with(
            RequestScope::Mine,
            vec![
                request(1, RequestStatus::Pending),
                request(2, RequestStatus::Approved),
                request(3, RequestStatus::Rejected),
            ],
        );

        let actionable: Vec<i64> = store.actionable().iter().map(|r| r.id.as_i64()).collect();
        assert_eq!(actionable, vec![1, 3]);
        // The full copy still holds everything the server sent.
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_returns_the_dropped_request() {
        let mut store = store_with(
            RequestScope::Mine,
            vec![request(1, RequestStatus::Pending), request(2, RequestStatus::Pending)],
        );

        let removed = store.remove(RequestId::new(1)).unwrap();
        assert_eq!(removed.id, RequestId::new(1));
        assert!(store.get(RequestId::new(1)).is_none());
        assert!(store.remove(RequestId::new(99)).is_none());
        assert_eq!(store.len(), 1);
    }
}
