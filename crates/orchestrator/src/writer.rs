//! Output serialization for the recommendations file.
//!
//! Accepted users produce a two-line block:
//! ```text
//! name,id
//! Title One,Title Two
//! ```
//! Failures produce one CSV line `name,id,message` with ANSI color codes
//! removed.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;
use std::io::Write;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[;\d]*m").expect("ansi pattern is valid"));

/// Remove terminal color sequences such as `\x1b[31m`
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Writes recommendation blocks and error lines to any `Write` sink
pub struct RecommendationWriter<W: Write> {
    sink: W,
    lines_written: usize,
}

impl<W: Write> RecommendationWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            lines_written: 0,
        }
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.sink, "{}", line).context("Failed to write output line")?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write `name,id` and the titles, sorted and comma-joined
    pub fn write_recommendation(
        &mut self,
        name: &str,
        id: &str,
        recommendations: &HashSet<String>,
    ) -> Result<()> {
        let mut titles: Vec<&str> = recommendations.iter().map(String::as_str).collect();
        titles.sort_unstable();

        self.write_line(&format!("{},{}", name, id))?;
        self.write_line(&titles.join(","))
    }

    /// Write a single `name,id,message` line
    pub fn write_error(&mut self, name: &str, id: &str, message: &str) -> Result<()> {
        self.write_line(&format!("{},{},{}", name, id, strip_ansi(message)))
    }

    /// Write only the first present error, in the given priority order.
    ///
    /// Returns false when every entry is `None` and nothing was written.
    pub fn write_first_error(
        &mut self,
        name: &str,
        id: &str,
        errors_by_priority: &[Option<&str>],
    ) -> Result<bool> {
        match errors_by_priority.iter().flatten().next() {
            Some(message) => {
                self.write_error(name, id, message)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush and hand back the sink
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush().context("Failed to flush output")?;
        Ok(self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(writer: RecommendationWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_write_recommendation() {
        let mut writer = RecommendationWriter::new(Vec::new());
        let recs: HashSet<String> = ["Zodiac", "Alien"].iter().map(|s| s.to_string()).collect();
        writer.write_recommendation("Ali", "123456789", &recs).unwrap();

        assert_eq!(writer.lines_written(), 2);
        assert_eq!(output(writer), "Ali,123456789\nAlien,Zodiac\n");
    }

    #[test]
    fn test_write_empty_recommendation() {
        let mut writer = RecommendationWriter::new(Vec::new());
        writer
            .write_recommendation("Ali", "123456789", &HashSet::new())
            .unwrap();
        assert_eq!(output(writer), "Ali,123456789\n\n");
    }

    #[test]
    fn test_write_error_strips_ansi() {
        let mut writer = RecommendationWriter::new(Vec::new());
        writer
            .write_error("John", "123", "\u{1b}[31m\u{1b}[1mERROR:\u{1b}[0m \u{1b}[33mbad id\u{1b}[0m")
            .unwrap();
        assert_eq!(output(writer), "John,123,ERROR: bad id\n");
    }

    #[test]
    fn test_first_error_priority() {
        let cases: [([Option<&str>; 3], &str); 4] = [
            ([Some("E1"), Some("E2"), Some("E3")], "U,1,E1\n"),
            ([None, Some("E2"), Some("E3")], "U,1,E2\n"),
            ([None, None, Some("E3")], "U,1,E3\n"),
            ([None, None, None], ""),
        ];
        for (errors, expected) in cases {
            let mut writer = RecommendationWriter::new(Vec::new());
            let wrote = writer.write_first_error("U", "1", &errors).unwrap();
            assert_eq!(wrote, !expected.is_empty());
            assert_eq!(output(writer), expected);
        }
    }

    #[test]
    fn test_strip_ansi_plain_text() {
        assert_eq!(strip_ansi("no colors here"), "no colors here");
    }
}
