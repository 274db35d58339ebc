//! Validation logic for the account and review forms.
//!
//! Kept free of browser types so every rule can be tested on the host.

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// Name is too short (less than 2 characters)
    NameTooShort,
    /// Email address is invalid (missing @ symbol)
    InvalidEmail,
    /// Password is too short (less than 8 characters)
    PasswordTooShort,
    /// Password confirmation doesn't match password
    PasswordsDoNotMatch,
    /// Review rating is outside the 1..=5 star range
    RatingOutOfRange,
    /// Review body is too short to be useful (less than 10 characters)
    ReviewTooShort,
}

impl ValidationError {
    /// The message shown next to the offending field.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::NameTooShort => "Name must be at least 2 characters",
            Self::InvalidEmail => "Enter a valid email address",
            Self::PasswordTooShort => "Password must be at least 8 characters",
            Self::PasswordsDoNotMatch => "Passwords do not match",
            Self::RatingOutOfRange => "Pick a rating between 1 and 5 stars",
            Self::ReviewTooShort => "Tell us a little more (at least 10 characters)",
        }
    }
}

/// Validates a display name.
///
/// # Validation rules
/// - Name must not be empty
/// - Name must be at least 2 characters long after trimming
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if trimmed.chars().count() < 2 {
        return Err(ValidationError::NameTooShort);
    }

    Ok(())
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must contain an '@' symbol
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates a password.
///
/// # Validation rules
/// - Password must not be empty
/// - Password must be at least 8 characters long
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    if password.len() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Validates that the password confirmation matches the password.
///
/// # Validation rules
/// - Confirmation must not be empty
/// - Confirmation must match the password exactly
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }

    Ok(())
}

/// Validates a review star rating.
///
/// # Validation rules
/// - Rating must be between 1 and 5 inclusive
pub fn validate_rating(rating: u8) -> Result<(), ValidationError> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange);
    }

    Ok(())
}

/// Validates a review body.
///
/// # Validation rules
/// - Body must not be empty
/// - Body must be at least 10 characters long after trimming
pub fn validate_review_body(body: &str) -> Result<(), ValidationError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if trimmed.chars().count() < 10 {
        return Err(ValidationError::ReviewTooShort);
    }

    Ok(())
}

/// Normalize a coupon code before it goes to the API: surrounding whitespace
/// dropped, letters upper-cased. Returns `None` when nothing is left, which
/// means there is nothing worth submitting.
#[must_use]
pub fn normalize_coupon(code: &str) -> Option<String> {
    let normalized = code.trim().to_uppercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Jo").is_ok()); // Exactly 2 characters
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_name("  Ada  ").is_ok()); // Trimmed before checking
    }

    #[test]
    fn test_validate_name_invalid() {
        assert_eq!(validate_name(""), Err(ValidationError::Required));
        assert_eq!(validate_name("   "), Err(ValidationError::Required));
        assert_eq!(validate_name("J"), Err(ValidationError::NameTooShort));
        assert_eq!(validate_name(" J "), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user.name+tag@example.com").is_ok());
        assert!(validate_email("a@b").is_ok()); // Minimal valid case
    }

    #[test]
    fn test_validate_email_invalid() {
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(validate_email("   "), Err(ValidationError::Required));
        assert_eq!(
            validate_email("userexample.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_validate_password_valid() {
        assert!(validate_password("12345678").is_ok()); // Exactly 8 characters
        assert!(validate_password("a_very_secure_password").is_ok());
        assert!(validate_password("pässwörd123").is_ok());
    }

    #[test]
    fn test_validate_password_invalid() {
        assert_eq!(validate_password(""), Err(ValidationError::Required));
        assert_eq!(validate_password("   "), Err(ValidationError::Required));
        assert_eq!(
            validate_password("1234567"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_validate_confirm_password() {
        assert!(validate_confirm_password("password123", "password123").is_ok());
        assert_eq!(
            validate_confirm_password("", "password123"),
            Err(ValidationError::Required)
        );
        // Case sensitive comparison
        assert_eq!(
            validate_confirm_password("Password123", "password123"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
        // Spaces matter in comparison
        assert_eq!(
            validate_confirm_password("password ", "password"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn test_validate_rating() {
        for rating in 1..=5 {
            assert!(validate_rating(rating).is_ok());
        }
        assert_eq!(validate_rating(0), Err(ValidationError::RatingOutOfRange));
        assert_eq!(validate_rating(6), Err(ValidationError::RatingOutOfRange));
    }

    #[test]
    fn test_validate_review_body() {
        assert!(validate_review_body("Great phone, battery holds up.").is_ok());
        assert!(validate_review_body("exactly 10").is_ok()); // 10 characters
        assert_eq!(validate_review_body(""), Err(ValidationError::Required));
        assert_eq!(validate_review_body("  \n "), Err(ValidationError::Required));
        assert_eq!(
            validate_review_body("too short"),
            Err(ValidationError::ReviewTooShort)
        );
        assert_eq!(
            validate_review_body("   padded    "),
            Err(ValidationError::ReviewTooShort)
        );
    }

    #[test]
    fn test_normalize_coupon() {
        assert_eq!(normalize_coupon("  summer10 "), Some("SUMMER10".to_string()));
        assert_eq!(normalize_coupon("SAVE5"), Some("SAVE5".to_string()));
        assert_eq!(normalize_coupon(""), None);
        assert_eq!(normalize_coupon("   "), None);
    }

    #[test]
    fn test_error_messages_are_field_sized() {
        // Messages render inline under the field, so keep them one line.
        let errors = [
            ValidationError::Required,
            ValidationError::NameTooShort,
            ValidationError::InvalidEmail,
            ValidationError::PasswordTooShort,
            ValidationError::PasswordsDoNotMatch,
            ValidationError::RatingOutOfRange,
            ValidationError::ReviewTooShort,
        ];
        for error in errors {
            assert!(!error.message().is_empty());
            assert!(!error.message().contains('\n'));
        }
    }
}
