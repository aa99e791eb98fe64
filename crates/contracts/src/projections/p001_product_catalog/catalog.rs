use super::dto::ProductRow;
use super::error::CatalogError;
use super::filter_state::FilterState;
use super::join::{join_products, EnrichedProduct};
use super::pipeline::render;
use crate::domain::a001_user::aggregate::User;
use crate::domain::a002_category::aggregate::Category;
use crate::shared::fixtures::Fixtures;
use std::sync::Arc;

/// Соединенный каталог. Строится один раз и дальше не меняется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    users: Vec<Arc<User>>,
    categories: Vec<Arc<Category>>,
    products: Vec<EnrichedProduct>,
}

impl Catalog {
    pub fn build(fixtures: Fixtures) -> Result<Self, CatalogError> {
        let Fixtures {
            users,
            categories,
            products,
        } = fixtures;

        let users: Vec<Arc<User>> = users.into_iter().map(Arc::new).collect();
        let categories: Vec<Arc<Category>> = categories.into_iter().map(Arc::new).collect();
        let products = join_products(&users, &categories, &products)?;

        Ok(Self {
            users,
            categories,
            products,
        })
    }

    /// Каталог из встроенных JSON-наборов
    pub fn from_fixtures() -> Result<Self, CatalogError> {
        Self::build(Fixtures::embedded()?)
    }

    pub fn users(&self) -> &[Arc<User>] {
        &self.users
    }

    pub fn categories(&self) -> &[Arc<Category>] {
        &self.categories
    }

    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    /// Строки таблицы для текущего состояния фильтров
    pub fn view(&self, state: &FilterState) -> Vec<ProductRow> {
        render(&self.products, state)
            .into_iter()
            .map(ProductRow::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::aggregate::{Sex, UserId};
    use crate::domain::a003_product::aggregate::Product;
    use crate::projections::p001_product_catalog::dto::{UserTone, NO_MATCHING_MESSAGE};

    #[test]
    fn test_embedded_catalog_join_is_total() {
        let catalog = Catalog::from_fixtures().unwrap();
        assert_eq!(catalog.products().len(), 10);
        for product in catalog.products() {
            assert!(catalog
                .categories()
                .iter()
                .any(|c| Arc::ptr_eq(c, &product.category)));
            assert!(catalog.users().iter().any(|u| Arc::ptr_eq(u, &product.user)));
            assert_eq!(product.category.owner_id, product.user.id);
        }
    }

    #[test]
    fn test_view_scenario() {
        let catalog = Catalog::build(Fixtures::new(
            vec![User::new(1, "Max", Sex::Male)],
            vec![Category::new(10, "Fruits", "🍎", 1)],
            vec![Product::new(100, "Apple", 10)],
        ))
        .unwrap();

        let rows = catalog.view(&FilterState::new());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.value(), 100);
        assert_eq!(rows[0].name, "Apple");
        assert_eq!(rows[0].category_label, "🍎 - Fruits");
        assert_eq!(rows[0].user_name, "Max");
        assert_eq!(rows[0].user_tone, UserTone::Male);

        let rows = catalog.view(&FilterState::new().select_user(Some(UserId::new(2))));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_embedded_catalog_filters() {
        let catalog = Catalog::from_fixtures().unwrap();

        let anna = FilterState::new().select_user(Some(UserId::new(2)));
        let names: Vec<String> = catalog.view(&anna).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Bread", "Eggs", "Sugar", "Sweets", "Apples"]);

        let apples = FilterState::new().set_search_query("apple");
        let names: Vec<String> = catalog.view(&apples).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Apples", "Apple juice"]);
    }

    #[test]
    fn test_build_rejects_dangling_reference() {
        let result = Catalog::build(Fixtures::new(
            vec![User::new(1, "Max", Sex::Male)],
            vec![Category::new(10, "Fruits", "🍎", 1)],
            vec![Product::new(100, "Apple", 11)],
        ));
        assert!(matches!(result, Err(CatalogError::UnknownCategory { .. })));
    }

    #[test]
    fn test_unmatched_search_yields_empty_view() {
        let catalog = Catalog::from_fixtures().unwrap();

        let state = FilterState::new().set_search_query("zzz");
        assert!(catalog.view(&state).is_empty());

        // Пустой результат - обычный исход; после сброса строки возвращаются
        let state = state.clear_search_query();
        assert_eq!(catalog.view(&state).len(), 10);
        assert_eq!(NO_MATCHING_MESSAGE, "No products matching selected criteria");
    }

    #[test]
    fn test_unknown_sex_code_does_not_block_catalog() {
        let fixtures = Fixtures::from_json(
            r#"[{"id":1,"name":"Sam","sex":"x"}]"#,
            r#"[{"id":10,"title":"Fruits","icon":"🍏","ownerId":1}]"#,
            r#"[{"id":100,"name":"Apples","categoryId":10}]"#,
        )
        .unwrap();
        let catalog = Catalog::build(fixtures).unwrap();

        let rows = catalog.view(&FilterState::new());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_name, "Sam");
        assert_eq!(rows[0].user_tone, UserTone::Other);
    }
}
