use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов справочников
pub trait EntityId:
    Clone + Copy + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку (ключи списков, data-атрибуты)
    fn as_string(&self) -> String;
}

/// Целочисленный идентификатор-обертка: конструктор, `value()`, `Display`, `EntityId`
#[macro_export]
macro_rules! impl_entity_id {
    ($name:ident) => {
        impl $name {
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i32 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $crate::domain::common::EntityId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::EntityId;
    use crate::domain::a001_user::aggregate::UserId;

    #[test]
    fn test_id_string_conversion() {
        let id = UserId::new(42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.value(), 42);
    }
}
