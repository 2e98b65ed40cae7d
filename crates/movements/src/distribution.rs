//! Per-warehouse stock breakdown for one product.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use wareflow_core::{ProductId, WarehouseId};

use crate::request::MovementKind;

/// One warehouse's share of a product's stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub name: String,
    pub stock: i64,
}

/// Advisory per-warehouse stock for a product.
///
/// Matches the backend response: only warehouses holding positive stock
/// appear, keyed by warehouse id. The distribution informs the operator
/// before submitting a request; it never blocks submission, since insufficient
/// stock is the server's call at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StockDistribution {
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub stock_distribution: BTreeMap<WarehouseId, DistributionEntry>,
    #[serde(default)]
    pub total_stock: i64,
}

impl StockDistribution {
    /// Stock held at `warehouse`, 0 if the warehouse holds none.
    pub fn quantity_at(&self, warehouse: WarehouseId) -> i64 {
        self.stock_distribution
            .get(&warehouse)
            .map(|e| e.stock)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.stock_distribution.is_empty()
    }

    /// Distribution checks apply to single-warehouse drafts only; the
    /// transfer form resolves stock through its own source-warehouse flow.
    pub fn applies_to(kind: MovementKind) -> bool {
        kind != MovementKind::Transfer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_distribution_response() {
        let json = r#"{
            "product_id": 7,
            "stock_distribution": {
                "1": {"name": "Warehouse A", "stock": 12},
                "3": {"name": "Warehouse B", "stock": 4}
            },
            "total_stock": 16
        }"#;

        let dist: StockDistribution = serde_json::from_str(json).unwrap();
        assert_eq!(dist.product_id, Some(ProductId::new(7)));
        assert_eq!(dist.quantity_at(WarehouseId::new(1)), 12);
        assert_eq!(dist.quantity_at(WarehouseId::new(3)), 4);
        assert_eq!(dist.total_stock, 16);
    }

    #[test]
    fn unknown_warehouse_reads_as_zero() {
        let dist = StockDistribution::default();
        assert!(dist.is_empty());
        assert_eq!(dist.quantity_at(WarehouseId::new(9)), 0);
    }

    #[test]
    fn checks_are_skipped_for_transfers() {
        assert!(StockDistribution::applies_to(MovementKind::In));
        assert!(StockDistribution::applies_to(MovementKind::Out));
        assert!(!StockDistribution::applies_to(MovementKind::Transfer));
    }
}
