use serde::{Deserialize, Serialize};

use super::User;

/// Credentials for the email and password sign-in form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The account's email address.
    pub email: String,

    /// The account's password.
    pub password: String,
}

/// Payload for creating a new customer account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub name: String,

    /// Email address for the new account.
    pub email: String,

    /// Password for the new account.
    pub password: String,
}

/// Payload for sign-in with a Google identity credential.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleAuthRequest {
    /// The opaque ID token minted by Google Identity Services.
    pub credential: String,
}

/// Payload for requesting a password reset email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetRequest {
    /// Email address the reset link should be sent to.
    pub email: String,
}

/// Response returned by every endpoint that establishes a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// The signed-in account.
    pub user: User,

    /// Bearer token attached to subsequent API calls.
    pub access_token: String,

    /// Long-lived token held for a future refresh flow.
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use serde_json;

    #[test]
    fn auth_response_uses_camel_case_token_fields() {
        let response = AuthResponse {
            user: User {
                id: "u1".to_string(),
                email: "u1@rewired.shop".to_string(),
                name: None,
                phone: None,
                role: UserRole::Customer,
                email_verified_at: None,
                phone_verified_at: None,
                created_at: None,
            },
            access_token: "access-123".to_string(),
            refresh_token: "refresh-456".to_string(),
        };

        let serialized = serde_json::to_string(&response).unwrap();
        assert!(serialized.contains("\"accessToken\":\"access-123\""));
        assert!(serialized.contains("\"refreshToken\":\"refresh-456\""));

        let deserialized: AuthResponse = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, response);
    }

    #[test]
    fn login_request_carries_plain_fields() {
        let request = LoginRequest {
            email: "shopper@example.com".to_string(),
            password: "hunter2!".to_string(),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert_eq!(
            serialized,
            "{\"email\":\"shopper@example.com\",\"password\":\"hunter2!\"}"
        );
    }

    #[test]
    fn google_request_wraps_the_credential() {
        let request = GoogleAuthRequest {
            credential: "eyJhbGciOi".to_string(),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert_eq!(serialized, "{\"credential\":\"eyJhbGciOi\"}");
    }
}
