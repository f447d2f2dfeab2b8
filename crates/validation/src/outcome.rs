//! Validation outcomes and rule violations.
//!
//! Every rule returns a [`ValidationOutcome`]. A failed rule carries exactly
//! one [`RuleViolation`] whose `Display` text is the human-readable reason.

use serde::Serialize;
use thiserror::Error;

/// Broad category of a rule failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    /// A required field is empty
    MissingField,
    /// The field is present but has the wrong shape
    FormatViolation,
    /// The field is well-formed but collides with an accepted record
    UniquenessViolation,
}

/// The single rule that rejected a record
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RuleViolation {
    #[error("title is missing")]
    TitleMissing,

    #[error("title word not capitalized")]
    TitleWordNotCapitalized { word: String },

    /// Wrong prefix or a suffix that is not three digits
    #[error("id letters wrong")]
    MovieIdLettersWrong { expected_prefix: String },

    #[error("id numbers not unique")]
    MovieIdNumbersNotUnique { suffix: String },

    #[error("name is missing")]
    NameMissing,

    #[error("name starts with space")]
    NameStartsWithSpace,

    #[error("name has invalid characters")]
    NameInvalidCharacters,

    #[error("id is missing")]
    UserIdMissing,

    #[error("id format wrong")]
    UserIdFormatWrong,

    #[error("id not unique")]
    UserIdNotUnique,
}

impl RuleViolation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            RuleViolation::TitleMissing
            | RuleViolation::NameMissing
            | RuleViolation::UserIdMissing => ViolationKind::MissingField,
            RuleViolation::TitleWordNotCapitalized { .. }
            | RuleViolation::MovieIdLettersWrong { .. }
            | RuleViolation::NameStartsWithSpace
            | RuleViolation::NameInvalidCharacters
            | RuleViolation::UserIdFormatWrong => ViolationKind::FormatViolation,
            RuleViolation::MovieIdNumbersNotUnique { .. } | RuleViolation::UserIdNotUnique => {
                ViolationKind::UniquenessViolation
            }
        }
    }
}

/// Result of applying one rule to one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "violation")]
pub enum ValidationOutcome {
    Valid,
    Invalid(RuleViolation),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The failure reason, or `None` when valid
    pub fn reason(&self) -> Option<String> {
        self.violation().map(ToString::to_string)
    }

    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(violation) => Some(violation),
        }
    }

    /// Convert into a `Result` so rules can be chained with `?`
    pub fn into_result(self) -> Result<(), RuleViolation> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(violation) => Err(violation),
        }
    }
}

impl From<Result<(), RuleViolation>> for ValidationOutcome {
    fn from(result: Result<(), RuleViolation>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::Valid,
            Err(violation) => ValidationOutcome::Invalid(violation),
        }
    }
}
