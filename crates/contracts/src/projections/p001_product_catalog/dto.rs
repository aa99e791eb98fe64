use super::join::EnrichedProduct;
use crate::domain::a003_product::aggregate::ProductId;

/// Заголовки колонок таблицы товаров
pub const COLUMNS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// Сообщение вместо таблицы, когда отбор ничего не вернул
pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

/// Оформление имени владельца: мужчины - одно, все остальные - другое
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTone {
    Male,
    Other,
}

impl UserTone {
    /// CSS-класс ячейки пользователя
    pub fn css_class(&self) -> &'static str {
        match self {
            UserTone::Male => "has-text-link",
            UserTone::Other => "has-text-danger",
        }
    }
}

/// Строка таблицы каталога
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    /// "`icon` - `title`"
    pub category_label: String,
    pub user_name: String,
    pub user_tone: UserTone,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(p: &EnrichedProduct) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            category_label: p.category.label(),
            user_name: p.user.name.clone(),
            user_tone: if p.user.is_male() {
                UserTone::Male
            } else {
                UserTone::Other
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::aggregate::{Sex, User};
    use crate::domain::a002_category::aggregate::Category;
    use std::sync::Arc;

    fn enriched(sex: Sex) -> EnrichedProduct {
        EnrichedProduct {
            id: ProductId::new(100),
            name: "Apple".to_string(),
            category: Arc::new(Category::new(10, "Fruits", "🍎", 1)),
            user: Arc::new(User::new(1, "Max", sex)),
        }
    }

    #[test]
    fn test_row_projection() {
        let row = ProductRow::from(&enriched(Sex::Male));
        assert_eq!(row.id, ProductId::new(100));
        assert_eq!(row.name, "Apple");
        assert_eq!(row.category_label, "🍎 - Fruits");
        assert_eq!(row.user_name, "Max");
        assert_eq!(row.user_tone, UserTone::Male);
        assert_eq!(row.user_tone.css_class(), "has-text-link");
    }

    #[test]
    fn test_female_owner_gets_other_tone() {
        let row = ProductRow::from(&enriched(Sex::Female));
        assert_eq!(row.user_tone, UserTone::Other);
        assert_eq!(row.user_tone.css_class(), "has-text-danger");

        let row = ProductRow::from(&enriched(Sex::Other));
        assert_eq!(row.user_tone, UserTone::Other);
    }
}
