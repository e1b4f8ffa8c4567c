//! Learn form violations.

use std::fmt;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Free-text fields of the learn form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    CorrectAnswer,
    DistinguishingQuestion,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::CorrectAnswer => "correct answer",
            Self::DistinguishingQuestion => "distinguishing question",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single problem with the learn form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldViolation {
    #[error("the {field} must not be empty")]
    Empty { field: FormField },
}

impl FieldViolation {
    pub fn field(&self) -> FormField {
        match self {
            Self::Empty { field } => *field,
        }
    }
}

/// Every violation found in one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: NonEmptyVec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: NonEmptyVec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter()
    }

    pub fn involves(&self, field: FormField) -> bool {
        self.violations().any(|v| v.field() == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_all_violations() {
        let err = ValidationError::new(NonEmptyVec::new(
            FieldViolation::Empty {
                field: FormField::CorrectAnswer,
            },
            vec![FieldViolation::Empty {
                field: FormField::DistinguishingQuestion,
            }],
        ));

        assert_eq!(err.violations().count(), 2);
        assert_eq!(
            err.to_string(),
            "the correct answer must not be empty; the distinguishing question must not be empty"
        );
        assert!(err.involves(FormField::CorrectAnswer));
        assert!(err.involves(FormField::DistinguishingQuestion));
    }
}
