//! P001: каталог товаров с фильтрами по владельцу, категориям и строке поиска.
//!
//! Исходные наборы соединяются один раз (`join`), после чего видимые строки
//! пересчитываются из `FilterState` чистой функцией (`pipeline::render`).

pub mod catalog;
pub mod dto;
pub mod error;
pub mod filter_state;
pub mod join;
pub mod pipeline;

pub use catalog::Catalog;
pub use dto::{ProductRow, UserTone, COLUMNS, NO_MATCHING_MESSAGE};
pub use error::CatalogError;
pub use filter_state::FilterState;
pub use join::{join_products, EnrichedProduct};
pub use pipeline::{render, render_with_stages, FilterStage};
