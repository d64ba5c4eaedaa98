//! Collection entity - Ownership record for one product

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub product_id: ProductId,
    pub owned: bool,
}

impl CollectionItem {
    pub fn owned(product_id: ProductId) -> Self {
        Self {
            product_id,
            owned: true,
        }
    }
}
