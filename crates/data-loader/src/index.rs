//! DataIndex loading logic.
//!
//! The two catalog files are independent, so they are parsed in parallel
//! and only then assembled into one index.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{info, warn};

impl DataIndex {
    /// Load both catalogs from disk
    ///
    /// Steps:
    /// 1. Parse movies and users in parallel
    /// 2. Insert movies (building the id lookup) and users
    /// 3. Warn about watched IDs that point at no catalog movie
    pub fn load_from_files(movies_path: &Path, users_path: &Path) -> Result<Self> {
        info!(
            "Loading catalogs from {} and {}",
            movies_path.display(),
            users_path.display()
        );

        // Rayon's `join` runs both closures in parallel
        let (movies, users) = rayon::join(
            || parser::parse_movies(movies_path),
            || parser::parse_users(users_path),
        );
        let movies = movies?;
        let users = users?;

        let index = Self::from_records(movies, users);
        let (movie_count, user_count) = index.counts();
        info!("Loaded {} movies and {} users", movie_count, user_count);

        for user in index.users() {
            let dangling = index.dangling_watched_ids(user);
            if !dangling.is_empty() {
                warn!(
                    "User {} watched unknown movie ids: {}",
                    user.id,
                    dangling.join(",")
                );
            }
        }

        Ok(index)
    }

    /// Build an index from already-parsed records
    pub fn from_records(movies: Vec<Movie>, users: Vec<User>) -> Self {
        let mut index = DataIndex::new();
        for movie in movies {
            index.insert_movie(movie);
        }
        for user in users {
            index.insert_user(user);
        }
        index
    }
}
