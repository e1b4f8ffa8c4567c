//! Validation rules for learning submissions.

use crate::core::LearnForm;
use crate::validation::violations::{FieldViolation, FormField};
use crate::wire::{Answer, LearnRequest};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of checking one or more learn form fields.
pub type FormValidation<T> = Validation<T, NonEmptyVec<FieldViolation>>;

/// A learn form that passed validation, ready to send.
///
/// Text fields are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningSubmission {
    pub correct_answer: String,
    pub distinguishing_question: String,
    pub answer_for_correct: Answer,
}

impl LearningSubmission {
    pub fn into_request(self) -> LearnRequest {
        LearnRequest {
            correct_answer: self.correct_answer,
            distinguishing_question: self.distinguishing_question,
            answer_for_correct: self.answer_for_correct,
        }
    }
}

/// Require `value` to be non-empty after trimming whitespace.
pub fn required(field: FormField, value: &str) -> FormValidation<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Validation::fail(FieldViolation::Empty { field })
    } else {
        Validation::success(trimmed.to_string())
    }
}

/// Validate the whole learn form, accumulating every violation.
pub fn validate_submission(
    form: &LearnForm,
    answer_for_correct: Answer,
) -> FormValidation<LearningSubmission> {
    required(FormField::CorrectAnswer, &form.correct_answer)
        .and(required(
            FormField::DistinguishingQuestion,
            &form.distinguishing_question,
        ))
        .map(
            |(correct_answer, distinguishing_question)| LearningSubmission {
                correct_answer,
                distinguishing_question,
                answer_for_correct,
            },
        )
}
