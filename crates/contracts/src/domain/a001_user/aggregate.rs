use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор пользователя (владельца категорий)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i32);

crate::impl_entity_id!(UserId);

// ============================================================================
// Enums
// ============================================================================

/// Пол пользователя, как он записан в исходных данных.
///
/// Различается только "m"; любой другой код (включая "f") не мешает загрузке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
    #[serde(other)]
    Other,
}

// ============================================================================
// Record
// ============================================================================

/// Пользователь - владелец категорий товаров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            sex,
        }
    }

    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_fixture_json() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"Max","sex":"m"}"#).unwrap();
        assert_eq!(user, User::new(1, "Max", Sex::Male));
        assert!(user.is_male());
    }

    #[test]
    fn test_unknown_sex_code_loads_as_other() {
        let user: User = serde_json::from_str(r#"{"id":5,"name":"Sam","sex":"x"}"#).unwrap();
        assert_eq!(user.sex, Sex::Other);
        assert!(!user.is_male());

        let user: User = serde_json::from_str(r#"{"id":2,"name":"Anna","sex":"f"}"#).unwrap();
        assert_eq!(user.sex, Sex::Female);
    }
}
