//! Word list loading utilities
//!
//! Reads word lists from files; the embedded list is in `embedded`.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw words from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped.
/// Words are returned as written; normalization happens when they are added
/// to a [`Dictionary`](super::Dictionary).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use motus::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Extract words from word-list text
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lines_skips_comments_and_blanks() {
        let content = "# header\nlutins\n\n  pastis  \n# trailing\njungle\n";
        assert_eq!(parse_lines(content), vec!["lutins", "pastis", "jungle"]);
    }

    #[test]
    fn parse_lines_empty() {
        assert!(parse_lines("").is_empty());
        assert!(parse_lines("\n\n# nothing\n").is_empty());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
