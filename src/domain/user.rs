//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Store-generated user identifier
pub type UserId = i64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: UserId,
    /// Full name
    #[schema(example = "Ana Pérez")]
    pub full_name: String,
    /// Email address, unique across all users
    #[schema(example = "ana@x.com")]
    pub email: String,
    /// Phone number
    #[schema(example = "555-0100")]
    pub phone: String,
}

impl User {
    /// Overwrite every mutable field; the id is kept.
    pub fn apply(&mut self, fields: UserFields) {
        self.full_name = fields.full_name;
        self.email = fields.email;
        self.phone = fields.phone;
    }
}

/// Payload accepted by create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    /// Full name
    #[validate(length(min = 1, message = "fullName is required"))]
    #[schema(example = "Ana Pérez")]
    pub full_name: String,
    /// Email address
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "ana@x.com")]
    pub email: String,
    /// Phone number
    #[validate(length(min = 1, message = "phone is required"))]
    #[schema(example = "555-0100")]
    pub phone: String,
}

/// A user record that may not have been stored yet.
///
/// `save` inserts a draft without an id and updates one that has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub id: Option<UserId>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl UserDraft {
    /// Draft for a record that does not exist yet
    pub fn new(fields: UserFields) -> Self {
        Self {
            id: None,
            full_name: fields.full_name,
            email: fields.email,
            phone: fields.phone,
        }
    }
}

impl From<User> for UserDraft {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, phone: &str) -> UserFields {
        UserFields {
            full_name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            id: 1,
            full_name: "Ana Pérez".to_string(),
            email: "ana@x.com".to_string(),
            phone: "555-0100".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "fullName": "Ana Pérez",
                "email": "ana@x.com",
                "phone": "555-0100"
            })
        );
    }

    #[test]
    fn test_fields_reject_empty_values() {
        assert!(fields("Ana", "ana@x.com", "555").validate().is_ok());
        assert!(fields("", "ana@x.com", "555").validate().is_err());
        assert!(fields("Ana", "", "555").validate().is_err());
        assert!(fields("Ana", "ana@x.com", "").validate().is_err());
    }

    #[test]
    fn test_fields_require_every_key() {
        let result: Result<UserFields, _> =
            serde_json::from_str(r#"{"fullName":"Ana","email":"ana@x.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut user = User {
            id: 9,
            full_name: "Old".to_string(),
            email: "old@x.com".to_string(),
            phone: "1".to_string(),
        };
        user.apply(fields("New", "new@x.com", "2"));

        assert_eq!(user.id, 9);
        assert_eq!(user.full_name, "New");
        assert_eq!(user.email, "new@x.com");
        assert_eq!(user.phone, "2");
    }

    #[test]
    fn test_draft_conversions() {
        let draft = UserDraft::new(fields("Ana", "ana@x.com", "555"));
        assert_eq!(draft.id, None);

        let user = User {
            id: 4,
            full_name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "555".to_string(),
        };
        assert_eq!(UserDraft::from(user).id, Some(4));
    }
}
