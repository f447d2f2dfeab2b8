//! Parser for the movie and user catalog files.
//!
//! Both files use two-line record groups separated by any number of blank
//! lines:
//! - movies.txt: `title,id` then `genre,genre,...`
//! - users.txt: `name,id` then `movieId,movieId,...`
//!
//! The second line of a group is read as-is, so a blank second line is an
//! empty list rather than a separator. A header with no following line at
//! all is a parse error.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole catalog file as UTF-8
fn read_catalog(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One `header` + `list` pair pulled out of a catalog
struct RecordGroup<'a> {
    header_line: usize,
    header: &'a str,
    list: Option<&'a str>,
}

/// Walk `content` and yield record groups, skipping blank lines between them
fn record_groups(content: &str) -> Vec<RecordGroup<'_>> {
    let mut groups = Vec::new();
    let mut lines = content.lines().enumerate();

    while let Some((idx, line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }
        let list = lines.next().map(|(_, list)| list);
        groups.push(RecordGroup {
            header_line: idx + 1,
            header: line,
            list,
        });
    }
    groups
}

/// Split a header line into exactly two comma-separated fields
fn split_header(header: &str) -> Option<(&str, &str)> {
    let mut parts = header.split(',');
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}

/// Split a list line on commas, trimming entries and dropping empty ones
fn split_list(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Parse the movies file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let content = read_catalog(path)?;
    parse_movies_str(&content, &file_label(path))
}

/// Parse movies from already-read file content
///
/// `file` is only used for error messages.
pub fn parse_movies_str(content: &str, file: &str) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for group in record_groups(content) {
        let (title, movie_id) =
            split_header(group.header).ok_or_else(|| DataLoadError::ParseError {
                file: file.to_string(),
                line: group.header_line,
                reason: format!("Wrong movie line format: {}", group.header),
            })?;
        let title = title.trim();

        let genres_line = group.list.ok_or_else(|| DataLoadError::ParseError {
            file: file.to_string(),
            line: group.header_line + 1,
            reason: format!("Genres missing for movie {}", title),
        })?;

        movies.push(Movie {
            title: title.to_string(),
            id: movie_id.trim().to_string(),
            genres: split_list(genres_line).map(str::to_string).collect(),
        });
    }

    Ok(movies)
}

/// Parse the users file
pub fn parse_users(path: &Path) -> Result<Vec<User>> {
    let content = read_catalog(path)?;
    parse_users_str(&content, &file_label(path))
}

/// Parse users from already-read file content
///
/// The name is kept verbatim; only the id and the watched entries are trimmed.
pub fn parse_users_str(content: &str, file: &str) -> Result<Vec<User>> {
    let mut users = Vec::new();

    for group in record_groups(content) {
        let (name, user_id) =
            split_header(group.header).ok_or_else(|| DataLoadError::ParseError {
                file: file.to_string(),
                line: group.header_line,
                reason: format!("Wrong user line format: {}", group.header),
            })?;

        let watched_line = group.list.ok_or_else(|| DataLoadError::ParseError {
            file: file.to_string(),
            line: group.header_line + 1,
            reason: format!("Watched movies missing for user {}", name),
        })?;

        let watched: HashSet<MovieId> = split_list(watched_line).map(str::to_string).collect();

        users.push(User {
            name: name.to_string(),
            id: user_id.trim().to_string(),
            watched,
        });
    }

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movies_basic() {
        let content = "Inception,I001\nAction,Sci-Fi\nThe Matrix,TM002\nAction\n";
        let movies = parse_movies_str(content, "movies.txt").unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Inception");
        assert_eq!(movies[0].id, "I001");
        assert_eq!(movies[0].genres, vec!["Action", "Sci-Fi"]);
        assert_eq!(movies[1].genres, vec!["Action"]);
    }

    #[test]
    fn test_parse_movies_trims_fields_and_skips_blank_lines() {
        let content = "\n\n  Inception , I001  \n Action , Sci-Fi \n\n\n";
        let movies = parse_movies_str(content, "movies.txt").unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Inception");
        assert_eq!(movies[0].id, "I001");
        assert_eq!(movies[0].genres, vec!["Action", "Sci-Fi"]);
    }

    #[test]
    fn test_parse_movies_keeps_genres_with_spaces() {
        let content = "Movie,M001\nScience Fiction,Action Adventure";
        let movies = parse_movies_str(content, "movies.txt").unwrap();
        assert_eq!(movies[0].genres, vec!["Science Fiction", "Action Adventure"]);
    }

    #[test]
    fn test_parse_movies_empty_genres() {
        let content = "Movie,M001\n,,,";
        let movies = parse_movies_str(content, "movies.txt").unwrap();
        assert!(movies[0].genres.is_empty());
    }

    #[test]
    fn test_parse_movies_wrong_header() {
        for content in ["Inception I001\nAction", "Inception,I001,extra\nAction"] {
            let err = parse_movies_str(content, "movies.txt").unwrap_err();
            match err {
                DataLoadError::ParseError { line, reason, .. } => {
                    assert_eq!(line, 1);
                    assert!(reason.contains("Wrong movie line format"));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_parse_movies_missing_genres_line() {
        let err = parse_movies_str("Inception,I001", "movies.txt").unwrap_err();
        assert!(err.to_string().contains("Genres missing for movie Inception"));
    }

    #[test]
    fn test_parse_users_preserves_name() {
        let content = " John Doe,111111111\nTC379\n";
        let users = parse_users_str(content, "users.txt").unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, " John Doe");
        assert_eq!(users[0].id, "111111111");
        assert!(users[0].watched.contains("TC379"));
    }

    #[test]
    fn test_parse_users_deduplicates_watched() {
        let content = "Jane,222222222\nA001, B002 ,A001,,\n";
        let users = parse_users_str(content, "users.txt").unwrap();
        assert_eq!(users[0].watched.len(), 2);
    }

    #[test]
    fn test_parse_users_blank_watched_line_is_empty_history() {
        let content = "John Doe,111111111\n\n";
        let users = parse_users_str(content, "users.txt").unwrap();
        assert_eq!(users.len(), 1);
        assert!(users[0].watched.is_empty());
    }

    #[test]
    fn test_parse_users_last_user_missing_watched_line() {
        let content = "John Doe,111111111\nTC379\n\nJane Smith,222222222\n";
        let err = parse_users_str(content, "users.txt").unwrap_err();
        match err {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 5);
                assert!(reason.contains("Jane Smith"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_users_too_many_commas() {
        let err = parse_users_str("John,Doe,111111111\nTC379\n", "users.txt").unwrap_err();
        assert!(err.to_string().contains("Wrong user line format"));
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_movies_str("", "movies.txt").unwrap().is_empty());
        assert!(parse_users_str("  \n\n \n", "users.txt").unwrap().is_empty());
    }
}
