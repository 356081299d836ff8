//! Input validation for parallel machine scheduling.
//!
//! Checks the raw problem before any scheduler state is created. Detects:
//! - A machine count of zero
//! - Negative task durations
//! - Total work that does not fit in an `i64`
//!
//! All issues are collected so the caller sees every problem at once.

use std::fmt;

use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), ValidationErrors>;

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    /// The machine configuration is unusable (no machines).
    #[error("invalid configuration")]
    InvalidConfiguration,
    /// A task duration is out of range.
    #[error("invalid input")]
    InvalidInput,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Every issue found in one validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// The collected errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Whether any error has the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.0.iter().any(|e| e.kind == kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates the input of a scheduling problem.
///
/// Checks:
/// 1. At least one machine
/// 2. No negative task durations
/// 3. The sum of all durations fits in an `i64`, so every machine load
///    and total derived from it is representable
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(durations: &[i64], machine_count: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if machine_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfiguration,
            "machine count must be at least 1",
        ));
    }

    let mut total: Option<i64> = Some(0);
    for (id, &duration) in durations.iter().enumerate() {
        if duration < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInput,
                format!("task {id} has negative duration {duration}"),
            ));
        } else {
            total = total.and_then(|t| t.checked_add(duration));
        }
    }
    if total.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidInput,
            "total work exceeds i64",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&[10, 5, 0], 3).is_ok());
    }

    #[test]
    fn test_empty_tasks_valid() {
        assert!(validate_input(&[], 1).is_ok());
    }

    #[test]
    fn test_zero_machines() {
        let errs = validate_input(&[1, 2], 0).unwrap_err();
        assert_eq!(errs.errors().len(), 1);
        assert!(errs.has_kind(ValidationErrorKind::InvalidConfiguration));
    }

    #[test]
    fn test_negative_durations() {
        let errs = validate_input(&[3, -1, 4, -5], 2).unwrap_err();
        assert_eq!(errs.errors().len(), 2);
        assert!(errs.has_kind(ValidationErrorKind::InvalidInput));
        assert!(errs.errors()[0].message.contains("task 1"));
        assert!(errs.errors()[1].message.contains("task 3"));
    }

    #[test]
    fn test_total_work_overflow() {
        let errs = validate_input(&[i64::MAX, 1], 1).unwrap_err();
        assert_eq!(errs.errors().len(), 1);
        assert!(errs.has_kind(ValidationErrorKind::InvalidInput));
        assert!(errs.errors()[0].message.contains("total work"));

        assert!(validate_input(&[i64::MAX, 0], 2).is_ok());
        assert!(validate_input(&[i64::MAX, i64::MAX], 2).is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let errs = validate_input(&[-1], 0).unwrap_err();
        assert!(errs.has_kind(ValidationErrorKind::InvalidConfiguration));
        assert!(errs.has_kind(ValidationErrorKind::InvalidInput));
    }

    #[test]
    fn test_display() {
        let errs = validate_input(&[-2], 0).unwrap_err();
        assert_eq!(
            errs.to_string(),
            "invalid configuration: machine count must be at least 1; \
             invalid input: task 0 has negative duration -2"
        );
    }
}
