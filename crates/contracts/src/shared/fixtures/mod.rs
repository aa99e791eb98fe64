//! Встроенные исходные данные каталога: пользователи, категории, товары.
//!
//! JSON-файлы вкомпилированы в бинарник и разбираются один раз при старте.

use crate::domain::a001_user::aggregate::User;
use crate::domain::a002_category::aggregate::Category;
use crate::domain::a003_product::aggregate::Product;
use crate::projections::p001_product_catalog::error::CatalogError;
use serde::de::DeserializeOwned;

const USERS_JSON: &str = include_str!("users.json");
const CATEGORIES_JSON: &str = include_str!("categories.json");
const PRODUCTS_JSON: &str = include_str!("products.json");

/// Три исходных набора в порядке, в котором они записаны
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Fixtures {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// Разобрать наборы из JSON-текста
    pub fn from_json(
        users_json: &str,
        categories_json: &str,
        products_json: &str,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            users: parse_dataset("users", users_json)?,
            categories: parse_dataset("categories", categories_json)?,
            products: parse_dataset("products", products_json)?,
        })
    }

    /// Наборы, поставляемые вместе с приложением
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(USERS_JSON, CATEGORIES_JSON, PRODUCTS_JSON)
    }
}

fn parse_dataset<T: DeserializeOwned>(
    dataset: &'static str,
    json: &str,
) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Fixture { dataset, source })
}
