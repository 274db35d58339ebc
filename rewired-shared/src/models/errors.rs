use thiserror::Error;

/// A wire string that names no known value of the target enum.
///
/// Produced by the `FromStr` impls, which parse values arriving outside JSON
/// bodies: query strings, route params, stored preferences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} \"{value}\"")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::models::{Grade, ReviewStatus, UserRole};

    #[test]
    fn unknown_variant_names_the_kind_and_input() {
        assert_eq!(
            Grade::from_str("D").unwrap_err().to_string(),
            "unknown grade \"D\""
        );
        assert_eq!(
            ReviewStatus::from_str("FLAGGED").unwrap_err().to_string(),
            "unknown review status \"FLAGGED\""
        );
        assert_eq!(
            UserRole::from_str("STAFF").unwrap_err().to_string(),
            "unknown user role \"STAFF\""
        );
    }
}
