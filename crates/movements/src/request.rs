use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wareflow_core::{DomainError, ProductId, RequestId, UserId, WarehouseId};

/// Kind of movement a request proposes.
///
/// `In`/`Out` act on a single warehouse; `Transfer` spans a source and a
/// destination. Committed transfers appear in the movement log as two legs
/// (`transfer_out`/`transfer_in`), but a *request* is always one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    In,
    Out,
    Transfer,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::In => "in",
            MovementKind::Out => "out",
            MovementKind::Transfer => "transfer",
        }
    }
}

/// Lifecycle status of a movement request.
///
/// A request is created `Pending`. Only an approver moves it to `Approved`
/// or `Rejected`; both are terminal from the requester's point of view.
/// An approved request disappears from actionable views, a rejected one
/// lingers until the requester dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// No client-initiated transition exists out of this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Approved)
    }
}

/// A proposed stock movement awaiting approval.
///
/// Mirrors the backend's request record. Display names (`product_name`,
/// warehouse names, `requester_username`) are denormalized by the server
/// and optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovementRequest {
    pub id: RequestId,
    pub product_id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub movement_type: MovementKind,
    pub quantity: i64,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<WarehouseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_warehouse_id: Option<WarehouseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_warehouse_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_warehouse_id: Option<WarehouseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_warehouse_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_username: Option<String>,
}

impl StockMovementRequest {
    /// Check the warehouse-reference invariant for this request's kind.
    ///
    /// Transfers carry both `from_warehouse_id` and `to_warehouse_id`;
    /// in/out requests carry exactly `warehouse_id`.
    pub fn warehouses_consistent(&self) -> Result<(), DomainError> {
        match self.movement_type {
            MovementKind::Transfer => {
                if self.from_warehouse_id.is_none() || self.to_warehouse_id.is_none() {
                    return Err(DomainError::invariant(
                        "transfer request must reference both source and destination warehouses",
                    ));
                }
                if self.warehouse_id.is_some() {
                    return Err(DomainError::invariant(
                        "transfer request must not carry a single warehouse reference",
                    ));
                }
            }
            MovementKind::In | MovementKind::Out => {
                if self.warehouse_id.is_none() {
                    return Err(DomainError::invariant(
                        "in/out request must reference a warehouse",
                    ));
                }
                if self.from_warehouse_id.is_some() || self.to_warehouse_id.is_some() {
                    return Err(DomainError::invariant(
                        "in/out request must not carry transfer warehouse references",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Whether `user` may withdraw this request (pending and owned).
    pub fn can_cancel_by(&self, user: UserId) -> bool {
        self.status == RequestStatus::Pending && self.user_id == Some(user)
    }

    /// Whether `user` may dismiss this request (rejected and owned).
    pub fn can_dismiss_by(&self, user: UserId) -> bool {
        self.status == RequestStatus::Rejected && self.user_id == Some(user)
    }

    /// Approve/reject only ever applies to a pending request.
    pub fn is_decidable(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Requester-facing views surface pending and rejected requests only.
    pub fn is_actionable(&self) -> bool {
        !self.status.is_terminal()
    }
}
