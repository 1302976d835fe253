//! Semantic argument validation shared by the mutation handlers.

use crate::error::{ResolveError, ResolveResult};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Rejects blank (empty or whitespace-only) required text fields.
pub fn non_blank(field: &str, value: &str) -> ResolveResult<()> {
    if value.trim().is_empty() {
        return Err(ResolveError::InvalidArgument {
            field: field.to_string(),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

/// Rejects malformed email addresses.
pub fn email(field: &str, value: &str) -> ResolveResult<()> {
    if !EMAIL_RE.is_match(value) {
        return Err(ResolveError::InvalidArgument {
            field: field.to_string(),
            reason: format!("'{}' is not a valid email address", value),
        });
    }
    Ok(())
}

/// Rejects NaN and infinite grade values.
pub fn finite(field: &str, value: f64) -> ResolveResult<()> {
    if !value.is_finite() {
        return Err(ResolveError::InvalidArgument {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(email("email_address", "alice@school.org").is_ok());
        assert!(email("email_address", "a.b+c@mail.example.co").is_ok());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in ["", "alice", "alice@", "@school.org", "a b@school.org", "alice@school"] {
            assert!(
                matches!(
                    email("email_address", bad),
                    Err(ResolveError::InvalidArgument { .. })
                ),
                "accepted: {:?}",
                bad
            );
        }
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        assert!(non_blank("first_name", "Alice").is_ok());
        assert!(non_blank("first_name", "  ").is_err());
    }

    #[test]
    fn finite_rejects_nan() {
        assert!(finite("value", 15.5).is_ok());
        assert!(finite("value", f64::NAN).is_err());
        assert!(finite("value", f64::INFINITY).is_err());
    }
}
