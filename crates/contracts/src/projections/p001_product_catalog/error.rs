use crate::domain::a001_user::aggregate::UserId;
use crate::domain::a002_category::aggregate::CategoryId;
use crate::domain::a003_product::aggregate::ProductId;

/// Ошибки загрузки и соединения исходных данных.
///
/// Любая из них фатальна: каталог не строится частично.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse {dataset} fixture: {source}")]
    Fixture {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate id {id} in {dataset}")]
    DuplicateId { dataset: &'static str, id: i32 },

    #[error("product {product_id} refers to unknown category {category_id}")]
    UnknownCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    #[error("category {category_id} refers to unknown owner {owner_id}")]
    UnknownOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}
