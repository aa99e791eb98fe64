use super::error::CatalogError;
use crate::domain::a001_user::aggregate::{User, UserId};
use crate::domain::a002_category::aggregate::{Category, CategoryId};
use crate::domain::a003_product::aggregate::{Product, ProductId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Товар вместе с его категорией и владельцем категории.
///
/// `category` и `user` указывают на общие записи исходного набора.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category: Arc<Category>,
    pub user: Arc<User>,
}

/// Соединить товары с категориями и владельцами.
///
/// Порядок результата совпадает с порядком `products`. Проверка ссылок
/// выполняется сразу для всего набора: повторяющиеся id, товар с неизвестной
/// категорией или категория с неизвестным владельцем дают ошибку.
pub fn join_products(
    users: &[Arc<User>],
    categories: &[Arc<Category>],
    products: &[Product],
) -> Result<Vec<EnrichedProduct>, CatalogError> {
    ensure_unique("users", users.iter().map(|u| u.id.value()))?;
    ensure_unique("categories", categories.iter().map(|c| c.id.value()))?;
    ensure_unique("products", products.iter().map(|p| p.id.value()))?;

    let users_by_id: HashMap<UserId, &Arc<User>> = users.iter().map(|u| (u.id, u)).collect();

    // Владельцы проверяются для всех категорий, а не только для используемых
    let mut owners: HashMap<CategoryId, (&Arc<Category>, &Arc<User>)> = HashMap::new();
    for category in categories {
        let user = users_by_id
            .get(&category.owner_id)
            .copied()
            .ok_or_else(|| CatalogError::UnknownOwner {
                category_id: category.id,
                owner_id: category.owner_id,
            })?;
        owners.insert(category.id, (category, user));
    }

    products
        .iter()
        .map(|product| {
            let (category, user) = owners.get(&product.category_id).copied().ok_or_else(|| {
                CatalogError::UnknownCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                }
            })?;

            Ok(EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category: Arc::clone(category),
                user: Arc::clone(user),
            })
        })
        .collect()
}

fn ensure_unique(
    dataset: &'static str,
    ids: impl IntoIterator<Item = i32>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                dataset,
                id,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::aggregate::Sex;

    fn users() -> Vec<Arc<User>> {
        vec![
            Arc::new(User::new(1, "Max", Sex::Male)),
            Arc::new(User::new(2, "Anna", Sex::Female)),
        ]
    }

    fn categories() -> Vec<Arc<Category>> {
        vec![
            Arc::new(Category::new(10, "Fruits", "🍎", 1)),
            Arc::new(Category::new(20, "Drinks", "🍺", 2)),
        ]
    }

    #[test]
    fn test_join_resolves_category_and_owner() {
        let products = vec![
            Product::new(100, "Apple", 10),
            Product::new(101, "Milk", 20),
        ];
        let joined = join_products(&users(), &categories(), &products).unwrap();

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].id, ProductId::new(100));
        assert_eq!(joined[0].category.title, "Fruits");
        assert_eq!(joined[0].user.name, "Max");
        assert_eq!(joined[1].category.title, "Drinks");
        assert_eq!(joined[1].user.name, "Anna");
    }

    #[test]
    fn test_join_preserves_product_order() {
        let products = vec![
            Product::new(3, "C", 20),
            Product::new(1, "A", 10),
            Product::new(2, "B", 20),
        ];
        let joined = join_products(&users(), &categories(), &products).unwrap();
        let ids: Vec<i32> = joined.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_join_shares_fixture_records() {
        let users = users();
        let categories = categories();
        let products = vec![Product::new(1, "A", 10), Product::new(2, "B", 10)];
        let joined = join_products(&users, &categories, &products).unwrap();

        assert!(Arc::ptr_eq(&joined[0].category, &categories[0]));
        assert!(Arc::ptr_eq(&joined[1].category, &categories[0]));
        assert!(Arc::ptr_eq(&joined[0].user, &users[0]));
    }

    #[test]
    fn test_dangling_category_fails() {
        let products = vec![Product::new(1, "A", 10), Product::new(2, "Ghost", 99)];
        let err = join_products(&users(), &categories(), &products).unwrap_err();
        match err {
            CatalogError::UnknownCategory {
                product_id,
                category_id,
            } => {
                assert_eq!(product_id, ProductId::new(2));
                assert_eq!(category_id, CategoryId::new(99));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_dangling_owner_fails_even_without_products() {
        let categories = vec![Arc::new(Category::new(30, "Orphan", "?", 7))];
        let err = join_products(&users(), &categories, &[]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownOwner { owner_id, .. } if owner_id == UserId::new(7)
        ));
        assert_eq!(err.to_string(), "category 30 refers to unknown owner 7");
    }

    #[test]
    fn test_duplicate_ids_fail() {
        let products = vec![Product::new(1, "A", 10), Product::new(1, "B", 20)];
        let err = join_products(&users(), &categories(), &products).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId {
                dataset: "products",
                id: 1
            }
        ));
    }
}
