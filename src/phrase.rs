use std::fmt;

use crate::error::{Error, Result};
use crate::histogram::Histogram;

/// The scrambled input whose original word arrangement is unknown.
///
/// Spaces count as characters, and the number of words is always
/// `spaces + 1`, so consecutive spaces imply empty words.
#[derive(Clone, Debug)]
pub struct AnagramPhrase {
    text: String,
    char_count: usize,
    word_count: usize,
    histogram: Histogram,
}

impl AnagramPhrase {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyPhrase);
        }

        let histogram = Histogram::new(&text);
        Ok(AnagramPhrase {
            char_count: histogram.len(),
            word_count: histogram.count(' ') + 1,
            histogram,
            text,
        })
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }
}

impl AsRef<str> for AnagramPhrase {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for AnagramPhrase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Joins words with single spaces, the way a phrase is rebuilt for hashing.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut joined = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(word.as_ref());
    }
    joined
}

/// Comma separated form used in log lines, `''` when there is nothing to show.
pub fn phrase_to_string<S: AsRef<str>>(words: &[S]) -> String {
    if words.is_empty() {
        return "''".to_string();
    }
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// A combination whose joined length and histogram match the anagram phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    words: Vec<String>,
}

impl Candidate {
    pub(crate) fn new(words: Vec<String>) -> Self {
        Candidate { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// An ordering of a candidate's words whose hash matches the target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution {
    words: Vec<String>,
}

impl Solution {
    pub(crate) fn new(words: Vec<String>) -> Self {
        Solution { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn joined(&self) -> String {
        join_words(&self.words)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.joined())
    }
}
