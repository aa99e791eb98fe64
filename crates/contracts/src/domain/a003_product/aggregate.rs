use crate::domain::a002_category::aggregate::CategoryId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i32);

crate::impl_entity_id!(ProductId);

// ============================================================================
// Record
// ============================================================================

/// Товар в том виде, в каком он лежит в исходных данных
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,

    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, category_id: i32) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category_id: CategoryId::new(category_id),
        }
    }
}
