//! Validation of learning submissions.
//!
//! Uses Stillwater's `Validation` type so that every problem with the learn
//! form is reported at once instead of stopping at the first empty field.
//!
//! # Example
//!
//! ```rust
//! use guesswork::core::LearnForm;
//! use guesswork::validation::{validate_submission, FormField};
//! use guesswork::wire::Answer;
//! use stillwater::Validation;
//!
//! let form = LearnForm {
//!     correct_answer: "  ".to_string(),
//!     distinguishing_question: String::new(),
//! };
//!
//! match validate_submission(&form, Answer::Yes) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! # let _ = FormField::CorrectAnswer;
//! ```

pub mod rules;
pub mod violations;

pub use rules::{required, validate_submission, FormValidation, LearningSubmission};
pub use violations::{FieldViolation, FormField, ValidationError};
