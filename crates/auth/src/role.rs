use serde::{Deserialize, Serialize};

/// Role assigned to a user by the backend.
///
/// The wire values are the backend's role strings. Capability questions
/// (`can_approve`, `can_manage_warehouses`) are answered here so that the
/// rest of the client never branches on role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    WarehouseOwner,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::WarehouseOwner => "warehouse_owner",
            Role::User => "user",
        }
    }

    /// May approve or reject pending movement requests.
    pub fn can_approve(&self) -> bool {
        matches!(self, Role::Admin | Role::WarehouseOwner)
    }

    /// May administer warehouses (availability, ownership).
    pub fn can_manage_warehouses(&self) -> bool {
        matches!(self, Role::Admin | Role::WarehouseOwner)
    }

    /// Any authenticated user may record or request movements.
    pub fn can_request_movements(&self) -> bool {
        true
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
