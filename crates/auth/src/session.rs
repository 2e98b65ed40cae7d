use serde::{Deserialize, Serialize};

use wareflow_core::UserId;

use crate::role::Role;

/// The authenticated user as resolved by the backend (`/auth/me`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

/// An established session: bearer credential plus resolved identity.
///
/// Passed explicitly to every client call; there is no ambient global
/// auth state. Lifecycle is tied to login/logout by the caller: drop the
/// session, the credential goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: CurrentUser,
}

impl Session {
    pub fn new(token: impl Into<String>, user: CurrentUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Bearer credential attached to every remote call.
    pub fn bearer(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    pub fn user_id(&self) -> UserId {
        self.user.id
    }

    pub fn can_approve(&self) -> bool {
        self.user.role.can_approve()
    }

    pub fn can_manage_warehouses(&self) -> bool {
        self.user.role.can_manage_warehouses()
    }
}
