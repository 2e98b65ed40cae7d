//! `wareflow-auth` — session identity and capability checks.
//!
//! Authentication itself (credential acquisition, token refresh) is the
//! backend's concern. This crate models what the client needs: a bearer
//! credential bound to a resolved user, and capability predicates derived
//! from the backend's role strings so call sites never compare roles
//! directly.

pub mod role;
pub mod session;

pub use role::Role;
pub use session::{CurrentUser, Session};
