//! Common types and traits for all catalog records

pub mod entity_id;

// Re-exports
pub use entity_id::EntityId;
