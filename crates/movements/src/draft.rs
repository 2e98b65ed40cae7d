//! Drafts for new movements, validated before any network call is made.

use serde::Serialize;

use wareflow_core::{DomainError, DomainResult, ProductId, WarehouseId};

use crate::request::MovementKind;

/// Draft of a single-warehouse movement (`in` or `out`).
///
/// Serializes to the create-movement payload. `quantity` is sent unsigned;
/// the server applies the sign from `movement_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStockMovement {
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub movement_type: MovementKind,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewStockMovement {
    pub fn validate(&self) -> DomainResult<()> {
        if self.movement_type == MovementKind::Transfer {
            return Err(DomainError::validation(
                "transfers are drafted as NewStockTransfer, not as a single-warehouse movement",
            ));
        }
        if self.quantity <= 0 {
            return Err(DomainError::validation("quantity must be a positive integer"));
        }
        Ok(())
    }
}

/// Draft of a transfer between two warehouses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStockTransfer {
    pub product_id: ProductId,
    pub from_warehouse_id: WarehouseId,
    pub to_warehouse_id: WarehouseId,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewStockTransfer {
    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity <= 0 {
            return Err(DomainError::validation("quantity must be a positive integer"));
        }
        if self.from_warehouse_id == self.to_warehouse_id {
            return Err(DomainError::validation(
                "source and destination warehouses cannot be the same",
            ));
        }
        Ok(())
    }
}

/// A draft routed to the matching create endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovementDraft {
    Movement(NewStockMovement),
    Transfer(NewStockTransfer),
}

impl MovementDraft {
    pub fn validate(&self) -> DomainResult<()> {
        match self {
            MovementDraft::Movement(m) => m.validate(),
            MovementDraft::Transfer(t) => t.validate(),
        }
    }

    pub fn kind(&self) -> MovementKind {
        match self {
            MovementDraft::Movement(m) => m.movement_type,
            MovementDraft::Transfer(_) => MovementKind::Transfer,
        }
    }

    pub fn product_id(&self) -> ProductId {
        match self {
            MovementDraft::Movement(m) => m.product_id,
            MovementDraft::Transfer(t) => t.product_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn movement(kind: MovementKind, quantity: i64) -> NewStockMovement {
        NewStockMovement {
            product_id: ProductId::new(7),
            warehouse_id: WarehouseId::new(3),
            movement_type: kind,
            quantity,
            notes: None,
        }
    }

    #[test]
    fn movement_rejects_non_positive_quantity() {
        assert!(movement(MovementKind::In, 0).validate().is_err());
        assert!(movement(MovementKind::Out, -5).validate().is_err());
        assert!(movement(MovementKind::In, 1).validate().is_ok());
    }

    #[test]
    fn movement_rejects_transfer_kind() {
        let err = movement(MovementKind::Transfer, 5).validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn transfer_rejects_same_warehouse() {
        let draft = NewStockTransfer {
            product_id: ProductId::new(7),
            from_warehouse_id: WarehouseId::new(3),
            to_warehouse_id: WarehouseId::new(3),
            quantity: 5,
            notes: None,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn transfer_with_distinct_warehouses_is_valid() {
        let draft = NewStockTransfer {
            product_id: ProductId::new(7),
            from_warehouse_id: WarehouseId::new(3),
            to_warehouse_id: WarehouseId::new(4),
            quantity: 5,
            notes: Some("rebalance".to_string()),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn movement_serializes_to_create_payload() {
        let draft = movement(MovementKind::In, 5);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "product_id": 7,
                "warehouse_id": 3,
                "movement_type": "in",
                "quantity": 5
            })
        );
    }

    proptest! {
        #[test]
        fn valid_movement_quantities_are_exactly_positive(quantity in -1000i64..1000) {
            let draft = movement(MovementKind::Out, quantity);
            prop_assert_eq!(draft.validate().is_ok(), quantity > 0);
        }

        #[test]
        fn transfer_validity_requires_positive_quantity_and_distinct_warehouses(
            quantity in -1000i64..1000,
            from in 1i64..20,
            to in 1i64..20,
        ) {
            let draft = NewStockTransfer {
                product_id: ProductId::new(7),
                from_warehouse_id: WarehouseId::new(from),
                to_warehouse_id: WarehouseId::new(to),
                quantity,
                notes: None,
            };
            prop_assert_eq!(draft.validate().is_ok(), quantity > 0 && from != to);
        }
    }
}
