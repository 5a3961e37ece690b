//! Request validation
//!
//! Every request value is checked before any network call is made. Violations
//! are collected rather than short-circuited, so a request missing three
//! mandatory fields reports all three at once.

use thiserror::Error;

/// A request value that declares mandatory fields.
///
/// `validate` is pure: it never mutates the request, performs no I/O, and
/// returns the same violations in the same order on every call. Violations
/// are listed in field-declaration order.
pub trait Validate {
    /// Return one human-readable violation per missing mandatory field.
    fn validate(&self) -> Vec<String>;
}

/// Error raised when a request fails validation.
///
/// Carries every violation found, in field-declaration order. Non-empty by
/// construction: a clean request never produces one of these.
#[derive(Debug, Clone, Error)]
#[error("invalid request:\n{}", .violations.join("\n"))]
pub struct ValidationError {
    violations: Vec<String>,
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<String>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// The individual violations, in the order they were found.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

/// Gate a request before issuing its network call.
///
/// Resource wrappers call this first, synchronously, so an invalid request
/// fails before any connection is opened.
pub fn ensure_valid<R: Validate>(request: &R) -> Result<(), ValidationError> {
    let violations = request.validate();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}

/// Record a violation if a mandatory string field is blank.
///
/// Blank means empty or whitespace-only. The field is identified by its
/// public API name, e.g. "id".
pub(crate) fn require(violations: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(format!("{field} must be specified"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeRequest {
        id: String,
        name: String,
    }

    impl Validate for FakeRequest {
        fn validate(&self) -> Vec<String> {
            let mut violations = Vec::new();
            require(&mut violations, "id", &self.id);
            require(&mut violations, "name", &self.name);
            violations
        }
    }

    #[test]
    fn valid_request_yields_no_violations() {
        let request = FakeRequest {
            id: "test-id".into(),
            name: "test-name".into(),
        };
        assert!(request.validate().is_empty());
        assert!(ensure_valid(&request).is_ok());
    }

    #[test]
    fn violations_follow_declaration_order() {
        let request = FakeRequest {
            id: String::new(),
            name: "   ".into(),
        };
        let violations = request.validate();
        assert_eq!(violations, vec!["id must be specified", "name must be specified"]);
    }

    #[test]
    fn validation_is_idempotent() {
        let request = FakeRequest {
            id: String::new(),
            name: String::new(),
        };
        assert_eq!(request.validate(), request.validate());
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let request = FakeRequest {
            id: " \t ".into(),
            name: "ok".into(),
        };
        assert_eq!(request.validate(), vec!["id must be specified"]);
    }

    #[test]
    fn error_message_lists_every_violation() {
        let request = FakeRequest {
            id: String::new(),
            name: String::new(),
        };
        let error = ensure_valid(&request).unwrap_err();
        assert_eq!(error.violations().len(), 2);
        let message = error.to_string();
        assert!(message.contains("id must be specified"));
        assert!(message.contains("name must be specified"));
    }
}
