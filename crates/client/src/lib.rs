//! Async client for the stock-movement API.
//!
//! The backend owns all enforcement (stock arithmetic, approval state,
//! authorization). This crate is the typed client side of that contract:
//! it validates drafts before spending a round trip, holds each view's
//! independent copy of the request list, drives the lifecycle transitions
//! (create / cancel / approve / reject / dismiss), and broadcasts a
//! change notification after every successful mutation so unrelated views
//! can re-fetch.
//!
//! Remote calls are plain request/response: no retries, no client-side
//! reconciliation. When two approvers race on one request, the server is
//! the arbiter and the loser sees the error from their stale action.

pub mod config;
pub mod distribution;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod refresh;
pub mod store;

pub use config::ClientConfig;
pub use distribution::DistributionChecker;
pub use error::{ClientError, ClientResult};
pub use http::{ApiClient, MovementCreated, MovementRecord, RequestAction, TransferCreated};
pub use lifecycle::{CreateOutcome, LifecycleController};
pub use refresh::{RefreshHandle, spawn_periodic_refresh};
pub use store::{RequestScope, RequestStore};
