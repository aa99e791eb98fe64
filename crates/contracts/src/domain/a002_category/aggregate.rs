use crate::domain::a001_user::aggregate::UserId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i32);

crate::impl_entity_id!(CategoryId);

// ============================================================================
// Record
// ============================================================================

/// Категория товаров. Каждая категория принадлежит одному пользователю.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    /// Эмодзи, которое выводится перед названием
    pub icon: String,

    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
}

impl Category {
    pub fn new(
        id: i32,
        title: impl Into<String>,
        icon: impl Into<String>,
        owner_id: i32,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId::new(owner_id),
        }
    }

    /// Подпись для таблицы: "🍎 - Fruits"
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_fixture_json() {
        let category: Category =
            serde_json::from_str(r#"{"id":10,"title":"Fruits","icon":"🍎","ownerId":1}"#)
                .unwrap();
        assert_eq!(category, Category::new(10, "Fruits", "🍎", 1));
        assert_eq!(category.owner_id, UserId::new(1));
    }

    #[test]
    fn test_category_label() {
        assert_eq!(Category::new(10, "Fruits", "🍎", 1).label(), "🍎 - Fruits");
    }
}
