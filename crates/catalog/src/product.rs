use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tallybook_core::{Money, ProductId, ValueObject};

/// Tax category of a product.
///
/// Drives which tax rate a policy applies to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Standard,
    Food,
    Drug,
}

/// Snapshot of a product as it was sold.
///
/// Orders and invoices must not change retroactively when the catalog does,
/// so they reference a dated snapshot rather than the live product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    product_id: ProductId,
    price: Money,
    name: String,
    product_type: ProductType,
    snapshot_date: DateTime<Utc>,
}

impl ProductData {
    pub fn new(
        product_id: ProductId,
        price: Money,
        name: impl Into<String>,
        product_type: ProductType,
        snapshot_date: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            price,
            name: name.into(),
            product_type,
            snapshot_date,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn snapshot_date(&self) -> DateTime<Utc> {
        self.snapshot_date
    }
}

impl ValueObject for ProductData {}
