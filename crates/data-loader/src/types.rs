//! Core domain types for the movie and user catalogs.
//!
//! Records are plain owned structs. They are produced once by the parser and
//! only read afterwards, so every consumer works with borrows (`&Movie`,
//! `&[Movie]`) rather than clones.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Type Aliases
// =============================================================================

/// Movie identifier, e.g. `"SM112"` for "Spider Man"
pub type MovieId = String;

/// User identifier, 9 digits or 8 digits plus a letter
pub type UserId = String;

/// Free-form genre label as written in the movies file
pub type Genre = String;

// =============================================================================
// Records
// =============================================================================

/// A movie entry from the movies catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub id: MovieId,
    /// Genres in file order. May be empty.
    pub genres: Vec<Genre>,
}

impl Movie {
    /// Convenience constructor, mostly for fixtures
    pub fn new<T, I, G>(title: T, id: I, genres: G) -> Self
    where
        T: Into<String>,
        I: Into<MovieId>,
        G: IntoIterator,
        G::Item: Into<Genre>,
    {
        Self {
            title: title.into(),
            id: id.into(),
            genres: genres.into_iter().map(Into::into).collect(),
        }
    }
}

/// A user entry from the users catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Kept exactly as written, leading spaces included
    pub name: String,
    pub id: UserId,
    /// Watched movie IDs. Unordered, no duplicates.
    pub watched: HashSet<MovieId>,
}

impl User {
    pub fn new<N, I, W>(name: N, id: I, watched: W) -> Self
    where
        N: Into<String>,
        I: Into<UserId>,
        W: IntoIterator,
        W::Item: Into<MovieId>,
    {
        Self {
            name: name.into(),
            id: id.into(),
            watched: watched.into_iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// DataIndex - both catalogs in memory
// =============================================================================

/// Holds both catalogs plus an id lookup over movies.
///
/// Movies and users keep their file order, which is also the order in which
/// they are validated. Duplicate movie IDs are allowed at this level; the
/// lookup points at the first occurrence.
#[derive(Debug, Default)]
pub struct DataIndex {
    pub(crate) movies: Vec<Movie>,
    pub(crate) users: Vec<User>,
    pub(crate) movie_positions: HashMap<MovieId, usize>,
}

impl DataIndex {
    /// Creates a new, empty DataIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// All movies in file order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All users in file order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: &str) -> Option<&Movie> {
        self.movie_positions.get(id).map(|&pos| &self.movies[pos])
    }

    /// Insert a movie, keeping the first position for a repeated ID
    pub fn insert_movie(&mut self, movie: Movie) {
        let position = self.movies.len();
        self.movie_positions
            .entry(movie.id.clone())
            .or_insert(position);
        self.movies.push(movie);
    }

    /// Insert a user
    pub fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Watched IDs of `user` that name no movie in the catalog
    pub fn dangling_watched_ids<'a>(&self, user: &'a User) -> Vec<&'a str> {
        let mut dangling: Vec<&str> = user
            .watched
            .iter()
            .filter(|id| !self.movie_positions.contains_key(id.as_str()))
            .map(String::as_str)
            .collect();
        dangling.sort_unstable();
        dangling
    }

    /// Get (movies, users) counts for logging
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.users.len())
    }
}
