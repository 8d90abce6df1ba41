//! Word-list sources for the sensitive trie.
//!
//! A [`WordSource`] supplies the words a trie is built or refreshed from.
//! [`FileWordSource`] reads a delimiter-separated file; any other provider
//! (a database, a remote service) only has to implement the trait.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{KapuError, KapuResult};

/// Delimiter used by word-list files unless configured otherwise.
pub const DEFAULT_DELIMITER: &str = "，";

/// A provider of sensitive words.
pub trait WordSource: Send + Sync {
    /// Loads the complete word list.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The words, in source order
    /// * `Err(KapuError)` - If the underlying provider failed
    fn load_words(&self) -> KapuResult<Vec<String>>;
}

/// Splits a delimiter-separated word list.
///
/// Line breaks around each entry are dropped, as are entries left empty.
/// Other whitespace is preserved; trimming is a trie setting.
pub fn split_words(contents: &str, delimiter: &str) -> Vec<String> {
    contents
        .split(delimiter)
        .map(|entry| entry.trim_matches(['\r', '\n']))
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A word list stored in a delimiter-separated UTF-8 file.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
    delimiter: String,
}

impl FileWordSource {
    /// Creates a source reading `path` with the default delimiter.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_delimiter(path, DEFAULT_DELIMITER)
    }

    /// Creates a source reading `path` split on `delimiter`.
    pub fn with_delimiter<P: AsRef<Path>>(path: P, delimiter: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: delimiter.into(),
        }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn load_words(&self) -> KapuResult<Vec<String>> {
        let contents = read_utf8(&self.path)?;
        let words = split_words(&contents, &self.delimiter);
        debug!(path = %self.path.display(), count = words.len(), "Loaded word list");
        Ok(words)
    }
}

/// An in-memory word list.
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl StaticWordSource {
    /// Creates a source that always returns `words`.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for StaticWordSource {
    fn load_words(&self) -> KapuResult<Vec<String>> {
        Ok(self.words.clone())
    }
}

/// Reads a file that must hold valid UTF-8.
pub fn read_utf8(path: &Path) -> KapuResult<String> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| KapuError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}
