//! Stock-movement domain module.
//!
//! This crate contains the business rules for movement requests, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage): the
//! request lifecycle, draft validation, and the advisory stock distribution.

pub mod distribution;
pub mod draft;
pub mod request;

pub use distribution::{DistributionEntry, StockDistribution};
pub use draft::{MovementDraft, NewStockMovement, NewStockTransfer};
pub use request::{MovementKind, RequestStatus, StockMovementRequest};
