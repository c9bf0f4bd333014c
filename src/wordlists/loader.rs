//! Word list loading utilities
//!
//! Lists are whitespace-separated. Entries are uppercased, entries that are
//! not valid five-letter words are skipped, and repeats keep their first
//! occurrence.

use super::embedded::WORDS;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Name that selects the built-in list instead of a file
pub const EMBEDDED: &str = "embedded";

/// Reasons a word list cannot be used
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Word list {} contains no valid five-letter words", path.display())]
    Empty { path: PathBuf },
}

/// Parse whitespace-separated text into distinct words
///
/// # Examples
/// ```
/// use wordle_minimax::wordlists::loader::parse_words;
///
/// let words = parse_words("crane slate\nCRANE toolong trace");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CRANE", "SLATE", "TRACE"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    words_from_iter(content.split_whitespace())
}

/// Convert an embedded string slice to words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_iter(slice.iter().copied())
}

fn words_from_iter<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;

    let words: Vec<Word> = entries
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!(entry, error = %e, "skipping word list entry");
                skipped += 1;
                None
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect();

    if skipped > 0 {
        debug!(skipped, "ignored invalid entries");
    }
    words
}

/// The built-in word list
#[must_use]
pub fn embedded_words() -> Vec<Word> {
    words_from_slice(WORDS)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_minimax::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle_list.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Resolve a `--wordlist` argument: `embedded` or a file path
///
/// # Errors
///
/// Propagates `load_from_file` errors for file paths.
pub fn load(source: &str) -> Result<Vec<Word>, WordListError> {
    if source.eq_ignore_ascii_case(EMBEDDED) {
        Ok(embedded_words())
    } else {
        load_from_file(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let words = parse_words("TRACE crane Trace CRANE slate");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["TRACE", "CRANE", "SLATE"]);
    }

    #[test]
    fn parse_handles_any_whitespace() {
        let words = parse_words("  crane\t\tslate\r\n\n trace  ");
        assert_eq!(words.len(), 3);
        assert!(parse_words("   \n").is_empty());
    }

    #[test]
    fn embedded_list_is_clean() {
        assert_eq!(WORDS.len(), crate::wordlists::WORDS_COUNT);

        let words = embedded_words();
        assert_eq!(words.len(), WORDS.len());
        assert!(words.iter().any(|w| w.text() == "CRANE"));
    }

    #[test]
    fn load_from_file_reads_and_rejects_empty() {
        let dir = std::env::temp_dir();
        let full = dir.join(format!("wordle_minimax_words_{}.txt", std::process::id()));
        let empty = dir.join(format!("wordle_minimax_empty_{}.txt", std::process::id()));

        let mut file = fs::File::create(&full).unwrap();
        writeln!(file, "crane slate\ntrace").unwrap();
        fs::write(&empty, "abc toolong\n").unwrap();

        assert_eq!(load_from_file(&full).unwrap().len(), 3);
        assert!(matches!(
            load_from_file(&empty),
            Err(WordListError::Empty { .. })
        ));

        fs::remove_file(full).unwrap();
        fs::remove_file(empty).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load("/definitely/not/a/word/list.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn embedded_source_name_is_case_insensitive() {
        assert_eq!(load("Embedded").unwrap(), embedded_words());
    }
}
