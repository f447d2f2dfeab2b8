//! Watch context: what a user has seen and which genres that implies.
//!
//! The context is gathered once per user so the filters only do set lookups.

use data_loader::{Movie, MovieId};
use std::collections::HashSet;

/// Per-user input to the filters
#[derive(Debug, Clone)]
pub struct WatchContext<'a> {
    /// IDs the user has watched, compared case-sensitively
    pub watched: &'a HashSet<MovieId>,
    /// Union of the genres of every watched catalog movie
    pub liked_genres: HashSet<&'a str>,
}

impl<'a> WatchContext<'a> {
    /// Build the context for `watched` against `catalog`
    pub fn build(watched: &'a HashSet<MovieId>, catalog: &'a [Movie]) -> Self {
        Self {
            watched,
            liked_genres: liked_genres(watched, catalog),
        }
    }

    pub fn has_watched(&self, movie: &Movie) -> bool {
        self.watched.contains(&movie.id)
    }
}

/// Genres of every catalog movie whose id is in `watched`.
///
/// Watched IDs with no catalog entry contribute nothing.
pub fn liked_genres<'a>(watched: &HashSet<MovieId>, catalog: &'a [Movie]) -> HashSet<&'a str> {
    catalog
        .iter()
        .filter(|movie| watched.contains(&movie.id))
        .flat_map(|movie| movie.genres.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new("Action Movie", "AM001", ["Action", "Adventure"]),
            Movie::new("Drama Movie", "DM002", ["Drama"]),
            Movie::new("No Genre", "NG003", Vec::<String>::new()),
        ]
    }

    fn watched(ids: &[&str]) -> HashSet<MovieId> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_liked_genres_union() {
        let catalog = catalog();
        let genres = liked_genres(&watched(&["AM001", "DM002"]), &catalog);
        assert_eq!(genres, HashSet::from(["Action", "Adventure", "Drama"]));
    }

    #[test]
    fn test_liked_genres_unknown_ids() {
        let catalog = catalog();
        assert!(liked_genres(&watched(&["XX999"]), &catalog).is_empty());
    }

    #[test]
    fn test_liked_genres_case_sensitive_ids() {
        let catalog = catalog();
        assert!(liked_genres(&watched(&["am001"]), &catalog).is_empty());
    }

    #[test]
    fn test_movie_without_genres_adds_nothing() {
        let catalog = catalog();
        let ids = watched(&["NG003"]);
        let context = WatchContext::build(&ids, &catalog);
        assert!(context.liked_genres.is_empty());
        assert!(context.has_watched(&catalog[2]));
        assert!(!context.has_watched(&catalog[0]));
    }
}
