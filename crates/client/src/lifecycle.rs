//! Lifecycle controller: the client-initiated request transitions.
//!
//! ```text
//! pending --cancel--> [removed]
//! pending --approve--> approved            (terminal, leaves pending views)
//! pending --reject(reason)--> rejected --dismiss--> [removed]
//! ```
//!
//! Every transition checks its client-side preconditions first; a
//! violated precondition never issues a network call. None of the
//! transitions are optimistic: the local store changes only after the
//! server ack, uniformly across all five operations.

use std::sync::Arc;

use wareflow_auth::Session;
use wareflow_core::{DomainError, MovementId, ReferenceId, RequestId};
use wareflow_events::{ChangeBus, ChangeScope, DataChanged};
use wareflow_movements::MovementDraft;

use crate::error::ClientResult;
use crate::http::{ApiClient, RequestAction};
use crate::store::RequestStore;

/// What a successful create produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Movement {
        movement_id: MovementId,
    },
    Transfer {
        reference_id: ReferenceId,
        from_id: MovementId,
        to_id: MovementId,
    },
}

/// Drives create / cancel / approve / reject / dismiss against the backend.
pub struct LifecycleController<B: ChangeBus> {
    api: Arc<ApiClient>,
    bus: B,
}

impl<B: ChangeBus> LifecycleController<B> {
    pub fn new(api: Arc<ApiClient>, bus: B) -> Self {
        Self { api, bus }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Submit a new movement request.
    ///
    /// The draft is validated locally (positive quantity, warehouse shape
    /// for the kind) before anything is sent. On success the change bus
    /// carries a notification so aggregate views re-pull.
    pub async fn create(
        &self,
        session: &Session,
        draft: &MovementDraft,
    ) -> ClientResult<CreateOutcome> {
        draft.validate()?;

        let outcome = match draft {
            MovementDraft::Movement(m) => {
                let created = self.api.create_movement(session, m).await?;
                CreateOutcome::Movement {
                    movement_id: created.movement_id,
                }
            }
            MovementDraft::Transfer(t) => {
                let created = self.api.create_transfer(session, t).await?;
                CreateOutcome::Transfer {
                    reference_id: created.reference_id,
                    from_id: created.from_id,
                    to_id: created.to_id,
                }
            }
        };

        self.notify_changed();
        Ok(outcome)
    }

    /// Withdraw a pending request owned by the session user.
    ///
    /// The store entry is removed only after the server confirms; a
    /// failed call leaves the item in place for the view to keep showing.
    pub async fn cancel(
        &self,
        session: &Session,
        store: &mut RequestStore,
        id: RequestId,
    ) -> ClientResult<()> {
        let request = store.get(id).ok_or_else(DomainError::not_found)?;
        if !request.can_cancel_by(session.user_id()) {
            return Err(DomainError::forbidden(
                "only the requester may cancel, and only while the request is pending",
            )
            .into());
        }

        self.api.delete_request(session, id).await?;
        store.remove(id);
        self.notify_changed();
        Ok(())
    }

    /// Dismiss a rejected request from the requester's view.
    ///
    /// Semantically distinct from cancellation, but deliberately shares
    /// its DELETE transport; the backend overloads one endpoint for both.
    pub async fn dismiss(
        &self,
        session: &Session,
        store: &mut RequestStore,
        id: RequestId,
    ) -> ClientResult<()> {
        let request = store.get(id).ok_or_else(DomainError::not_found)?;
        if !request.can_dismiss_by(session.user_id()) {
            return Err(DomainError::forbidden(
                "only the requester may dismiss, and only once the request is rejected",
            )
            .into());
        }

        self.api.delete_request(session, id).await?;
        store.remove(id);
        self.notify_changed();
        Ok(())
    }

    /// Approve a pending request (approver roles only).
    pub async fn approve(
        &self,
        session: &Session,
        store: &mut RequestStore,
        id: RequestId,
    ) -> ClientResult<()> {
        self.check_decidable(session, store, id)?;

        self.api
            .decide_request(session, id, RequestAction::Approve, None)
            .await?;
        store.remove(id);
        self.notify_changed();
        Ok(())
    }

    /// Reject a pending request with a mandatory reason.
    ///
    /// An empty reason fails validation before any call is issued.
    pub async fn reject(
        &self,
        session: &Session,
        store: &mut RequestStore,
        id: RequestId,
        reason: &str,
    ) -> ClientResult<()> {
        if reason.trim().is_empty() {
            return Err(DomainError::validation("rejection requires a non-empty reason").into());
        }
        self.check_decidable(session, store, id)?;

        self.api
            .decide_request(session, id, RequestAction::Reject, Some(reason))
            .await?;
        store.remove(id);
        self.notify_changed();
        Ok(())
    }

    fn check_decidable(
        &self,
        session: &Session,
        store: &RequestStore,
        id: RequestId,
    ) -> ClientResult<()> {
        if !session.can_approve() {
            return Err(DomainError::forbidden(
                "approving or rejecting requests requires an approver role",
            )
            .into());
        }
        let request = store.get(id).ok_or_else(DomainError::not_found)?;
        if !request.is_decidable() {
            return Err(
                DomainError::validation("only pending requests can be approved or rejected").into(),
            );
        }
        Ok(())
    }

    /// Best-effort broadcast; the mutation already succeeded remotely, so
    /// a publish failure only costs other views one stale render.
    fn notify_changed(&self) {
        if let Err(err) = self.bus.publish(DataChanged::now(ChangeScope::StockMovements)) {
            tracing::warn!(?err, "failed to publish change notification");
        }
    }
}
