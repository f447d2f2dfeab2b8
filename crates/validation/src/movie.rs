//! Rules for movie records.

use crate::outcome::{RuleViolation, ValidationOutcome};
use crate::registry::IdRegistry;
use regex::Regex;
use std::sync::LazyLock;

/// Word separators inside a title: runs of whitespace and/or hyphens
static TITLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s-]+").expect("title separator pattern is valid")
});

/// Every word of the title must start with an uppercase letter.
///
/// Empty tokens produced by splitting (e.g. a leading hyphen) are skipped.
pub fn validate_movie_title(title: &str) -> ValidationOutcome {
    check_title(title).into()
}

fn check_title(title: &str) -> Result<(), RuleViolation> {
    if title.is_empty() {
        return Err(RuleViolation::TitleMissing);
    }

    for word in TITLE_SEPARATOR.split(title.trim()) {
        let Some(first) = word.chars().next() else {
            continue;
        };
        if !first.is_uppercase() {
            return Err(RuleViolation::TitleWordNotCapitalized {
                word: word.to_string(),
            });
        }
    }
    Ok(())
}

/// Uppercase letters of `title`, in order
pub fn expected_id_prefix(title: &str) -> String {
    title.chars().filter(|c| c.is_uppercase()).collect()
}

/// The id must be the title's capitals followed by exactly three digits.
///
/// With a registry, the three digits must also differ from the last three
/// characters of every accepted id. Uniqueness is only checked once the
/// format is right.
pub fn validate_movie_id(
    title: &str,
    id: &str,
    existing_movie_ids: Option<&IdRegistry>,
) -> ValidationOutcome {
    check_movie_id(title, id, existing_movie_ids).into()
}

fn check_movie_id(
    title: &str,
    id: &str,
    existing_movie_ids: Option<&IdRegistry>,
) -> Result<(), RuleViolation> {
    let expected_prefix = expected_id_prefix(title);
    let letters_wrong = || RuleViolation::MovieIdLettersWrong {
        expected_prefix: expected_prefix.clone(),
    };

    if id.is_empty() {
        return Err(letters_wrong());
    }
    let suffix = id.strip_prefix(expected_prefix.as_str()).ok_or_else(letters_wrong)?;
    if suffix.len() != 3 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(letters_wrong());
    }

    if let Some(registry) = existing_movie_ids {
        if registry.has_numeric_suffix(suffix) {
            return Err(RuleViolation::MovieIdNumbersNotUnique {
                suffix: suffix.to_string(),
            });
        }
    }
    Ok(())
}
