//! # Validation Crate
//!
//! Structural rules for catalog records.
//!
//! Four independent rule families, each a pure function returning a
//! [`ValidationOutcome`]:
//! - movie title: every word starts with an uppercase letter
//! - movie id: title capitals + three digits, optionally unique by digits
//! - user name: letters and spaces, no leading space
//! - user id: 9 digits or 8 digits + a letter, unique
//!
//! Uniqueness checks read an [`IdRegistry`] owned by the caller. Rules never
//! write to it, so the same registry can be threaded through a whole file and
//! a fresh one built per test.
//!
//! ## Example Usage
//! ```ignore
//! use validation::{IdRegistry, validate_user_id, validate_user_name};
//!
//! let mut accepted = IdRegistry::new();
//! for user in users {
//!     let name = validate_user_name(&user.name);
//!     let id = validate_user_id(&user.id, &accepted);
//!     if name.is_valid() && id.is_valid() {
//!         accepted.insert(user.id.clone());
//!     }
//! }
//! ```

pub mod movie;
pub mod outcome;
pub mod registry;
pub mod user;

use data_loader::{Movie, User};
use serde::Serialize;

// Re-export main types
pub use movie::{expected_id_prefix, validate_movie_id, validate_movie_title};
pub use outcome::{RuleViolation, ValidationOutcome, ViolationKind};
pub use registry::IdRegistry;
pub use user::{validate_user_id, validate_user_name};

/// Outcomes of both movie rules for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieValidation {
    pub title: ValidationOutcome,
    pub id: ValidationOutcome,
}

impl MovieValidation {
    pub fn is_valid(&self) -> bool {
        self.title.is_valid() && self.id.is_valid()
    }

    /// Failures in rule order (title, then id)
    pub fn violations(&self) -> impl Iterator<Item = &RuleViolation> {
        [&self.title, &self.id].into_iter().filter_map(|o| o.violation())
    }
}

/// Outcomes of both user rules for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserValidation {
    pub name: ValidationOutcome,
    pub id: ValidationOutcome,
}

impl UserValidation {
    pub fn is_valid(&self) -> bool {
        self.name.is_valid() && self.id.is_valid()
    }

    /// Failures in rule order (name, then id)
    pub fn violations(&self) -> impl Iterator<Item = &RuleViolation> {
        [&self.name, &self.id].into_iter().filter_map(|o| o.violation())
    }
}

/// Run both movie rules against `movie`
pub fn validate_movie(movie: &Movie, existing_movie_ids: Option<&IdRegistry>) -> MovieValidation {
    let validation = MovieValidation {
        title: validate_movie_title(&movie.title),
        id: validate_movie_id(&movie.title, &movie.id, existing_movie_ids),
    };
    tracing::debug!("Validated movie {:?} ({}): {:?}", movie.title, movie.id, validation);
    validation
}

/// Run both user rules against `user`
pub fn validate_user(user: &User, existing_user_ids: &IdRegistry) -> UserValidation {
    let validation = UserValidation {
        name: validate_user_name(&user.name),
        id: validate_user_id(&user.id, existing_user_ids),
    };
    tracing::debug!("Validated user {:?} ({}): {:?}", user.name, user.id, validation);
    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_movie_collects_both_rules() {
        let movie = Movie::new("spider man", "SM112", ["Action"]);
        let validation = validate_movie(&movie, None);

        assert!(!validation.is_valid());
        assert!(!validation.title.is_valid());
        // no capitals in the title, so the expected prefix is empty
        assert!(!validation.id.is_valid());
        assert_eq!(validation.violations().count(), 2);
    }

    #[test]
    fn test_validate_user_does_not_touch_registry() {
        let registry = IdRegistry::new();
        let user = User::new("Jane Doe", "123456789", ["SM112"]);

        assert!(validate_user(&user, &registry).is_valid());
        assert!(validate_user(&user, &registry).is_valid());
        assert!(registry.is_empty());
    }
}
