//! Cross-view change notification for `wareflow`.
//!
//! Views own their data independently (each fetches and holds its own
//! list), so the only inter-view signal is a broadcast "data changed"
//! notification published after a successful lifecycle mutation. Dashboards
//! and other aggregate views subscribe and re-pull on receipt.

pub mod bus;
pub mod change;
pub mod in_memory;

pub use bus::{ChangeBus, Subscription};
pub use change::{ChangeScope, DataChanged};
pub use in_memory::{InMemoryChangeBus, InMemoryChangeBusError};
