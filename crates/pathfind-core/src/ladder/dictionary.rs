//! Dictionary of lowercase words and its length index

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{PathfindError, Result};

/// A set of words, stored lowercase.
///
/// Every insertion path lowercases, so the set never holds two case variants
/// of one word. Iteration is in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated words
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Read a dictionary file of whitespace-separated words
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let text = fs::read_to_string(path)
            .map_err(|e| PathfindError::io_operation("read dictionary", path.display(), e))?;

        let dictionary = Self::from_text(&text);
        crate::trace_time!(start, "load_dictionary", words = dictionary.len());
        Ok(dictionary)
    }

    /// Insert a word, lowercased. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Group words by character count
    pub fn length_buckets(&self) -> LengthBuckets<'_> {
        let mut buckets: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for word in self.iter() {
            buckets.entry(word.chars().count()).or_default().push(word);
        }
        LengthBuckets { buckets }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

/// Dictionary words grouped by length, sorted within each bucket.
///
/// Borrowed from a [`Dictionary`], so it cannot outlive or drift from it.
#[derive(Debug, Clone)]
pub struct LengthBuckets<'a> {
    buckets: BTreeMap<usize, Vec<&'a str>>,
}

impl<'a> LengthBuckets<'a> {
    /// Words of exactly `len` characters
    pub fn get(&self, len: usize) -> &[&'a str] {
        self.buckets.get(&len).map(Vec::as_slice).unwrap_or(&[])
    }
}
