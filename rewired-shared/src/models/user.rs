use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{Timestamp, UnknownVariant};

/// Role attached to an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Customer,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Whether the role grants access to the back-office area.
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CUSTOMER" => Ok(Self::Customer),
            "ADMIN" => Ok(Self::Admin),
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            _ => Err(UnknownVariant::new("user role", value)),
        }
    }
}

/// Account record returned by the profile and sign-in endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque account identifier.
    pub id: String,

    /// Primary email address.
    pub email: String,

    /// Display name, when the account has one.
    #[serde(default)]
    pub name: Option<String>,

    /// Phone number on file, when the customer provided one.
    #[serde(default)]
    pub phone: Option<String>,

    /// Role used for back-office gating.
    pub role: UserRole,

    /// Set once the email address has been confirmed.
    #[serde(default)]
    pub email_verified_at: Option<String>,

    /// Set once the phone number has been confirmed.
    #[serde(default)]
    pub phone_verified_at: Option<String>,

    /// When the account was created.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl User {
    /// Whether the account may enter the back-office area.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether the email address has been confirmed. Only the presence of the
    /// stamp matters; its text is never parsed.
    #[must_use]
    pub fn email_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }

    /// Whether the phone number has been confirmed.
    #[must_use]
    pub fn phone_verified(&self) -> bool {
        self.phone_verified_at.is_some()
    }

    /// Name to greet the customer with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [
            ("CUSTOMER", UserRole::Customer),
            ("ADMIN", UserRole::Admin),
            ("SUPER_ADMIN", UserRole::SuperAdmin),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn user_role_invalid() {
        assert!(UserRole::from_str("STAFF").is_err());
        assert!(UserRole::from_str("admin").is_err());
    }

    #[test]
    fn only_elevated_roles_reach_the_back_office() {
        assert!(!UserRole::Customer.is_admin());
        assert!(UserRole::Admin.is_admin());
        assert!(UserRole::SuperAdmin.is_admin());
    }

    #[test]
    fn profile_payload_decodes_with_sparse_fields() {
        let json = r#"{
            "id": "u1",
            "email": "u1@rewired.shop",
            "role": "ADMIN",
            "emailVerifiedAt": null,
            "phoneVerifiedAt": "2024-01-01"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, UserRole::Admin);
        assert!(user.is_admin());
        assert!(!user.email_verified());
        assert!(user.phone_verified());
        assert!(user.name.is_none());
        assert!(user.created_at.is_none());
    }

    #[test]
    fn verification_stamps_are_presence_checked_only() {
        let json = r#"{
            "id": "u2",
            "email": "u2@rewired.shop",
            "role": "CUSTOMER",
            "emailVerifiedAt": "2024-01-01",
            "phoneVerifiedAt": "2024-06-02T09:15:00Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.email_verified());
        assert!(user.phone_verified());
    }

    #[test]
    fn user_serializes_in_camel_case() {
        let user = User {
            id: "u3".to_string(),
            email: "u3@rewired.shop".to_string(),
            name: Some("Ada".to_string()),
            phone: None,
            role: UserRole::Customer,
            email_verified_at: None,
            phone_verified_at: None,
            created_at: None,
        };

        let serialized = serde_json::to_string(&user).unwrap();
        assert!(serialized.contains("\"emailVerifiedAt\""));
        assert!(serialized.contains("\"phoneVerifiedAt\""));
        assert!(serialized.contains("\"CUSTOMER\""));

        let deserialized: User = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, user);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = User {
            id: "u4".to_string(),
            email: "u4@rewired.shop".to_string(),
            name: None,
            phone: None,
            role: UserRole::Customer,
            email_verified_at: None,
            phone_verified_at: None,
            created_at: None,
        };

        assert_eq!(user.display_name(), "u4@rewired.shop");
        user.name = Some("Grace".to_string());
        assert_eq!(user.display_name(), "Grace");
    }
}
