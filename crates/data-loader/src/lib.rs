//! # Data Loader Crate
//!
//! Loads the movie and user catalogs from their two-line text format.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, User, DataIndex)
//! - **parser**: Parse catalog files into Rust structs
//! - **index**: Load both files and build the DataIndex
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DataIndex;
//! use std::path::Path;
//!
//! let index = DataIndex::load_from_files(
//!     Path::new("data/movies.txt"),
//!     Path::new("data/users.txt"),
//! )?;
//!
//! let movie = index.get_movie("SM112").unwrap();
//! println!("{} has {} genres", movie.title, movie.genres.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    Genre,
    MovieId,
    UserId,
    // Core types
    DataIndex,
    Movie,
    User,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_index_creation() {
        let index = DataIndex::new();
        assert_eq!(index.counts(), (0, 0));
        assert!(index.movies().is_empty());
        assert!(index.users().is_empty());
    }

    #[test]
    fn test_insert_movie() {
        let mut index = DataIndex::new();
        index.insert_movie(Movie::new("Toy Story", "TS001", ["Animation", "Comedy"]));

        let retrieved = index.get_movie("TS001").unwrap();
        assert_eq!(retrieved.title, "Toy Story");
        assert_eq!(retrieved.genres.len(), 2);
    }

    #[test]
    fn test_insert_user() {
        let mut index = DataIndex::new();
        index.insert_user(User::new("Jane", "123456789", ["TS001", "TS001"]));

        assert_eq!(index.users().len(), 1);
        assert_eq!(index.users()[0].watched.len(), 1);
    }

    #[test]
    fn test_empty_queries() {
        let index = DataIndex::new();
        assert!(index.get_movie("NOPE999").is_none());

        let user = User::new("Jane", "123456789", ["NOPE999"]);
        assert_eq!(index.dangling_watched_ids(&user), vec!["NOPE999"]);
    }
}
