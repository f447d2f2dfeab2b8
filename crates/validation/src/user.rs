//! Rules for user records.

use crate::outcome::{RuleViolation, ValidationOutcome};
use crate::registry::IdRegistry;
use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("name pattern is valid"));

/// 9 digits, or 8 digits and one trailing letter
static USER_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{9}|[0-9]{8}[A-Za-z])$").expect("user id pattern is valid")
});

/// A name is ASCII letters and spaces, and must not start with a space.
///
/// Trailing spaces and internal runs of spaces are fine.
pub fn validate_user_name(name: &str) -> ValidationOutcome {
    check_name(name).into()
}

fn check_name(name: &str) -> Result<(), RuleViolation> {
    if name.is_empty() {
        return Err(RuleViolation::NameMissing);
    }
    if name.starts_with(' ') {
        return Err(RuleViolation::NameStartsWithSpace);
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(RuleViolation::NameInvalidCharacters);
    }
    Ok(())
}

/// The id must be well-formed and not already accepted.
///
/// Format is checked first; a malformed id never reaches the registry.
pub fn validate_user_id(id: &str, existing_user_ids: &IdRegistry) -> ValidationOutcome {
    check_user_id(id, existing_user_ids).into()
}

fn check_user_id(id: &str, existing_user_ids: &IdRegistry) -> Result<(), RuleViolation> {
    if id.is_empty() {
        return Err(RuleViolation::UserIdMissing);
    }
    if !USER_ID_PATTERN.is_match(id) {
        return Err(RuleViolation::UserIdFormatWrong);
    }
    if existing_user_ids.contains(id) {
        return Err(RuleViolation::UserIdNotUnique);
    }
    Ok(())
}
