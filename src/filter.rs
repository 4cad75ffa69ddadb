use std::collections::BTreeSet;

use fxhash::FxHashSet;

use crate::dictionary::Dictionary;
use crate::histogram::Histogram;
use crate::phrase::AnagramPhrase;

/// The working vocabulary: distinct dictionary words whose letters all fit in
/// the anagram phrase, in first-seen dictionary order.
///
/// An index into this list is the unit of search state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsableWords {
    words: Vec<String>,
    alphabet: BTreeSet<char>,
}

impl UsableWords {
    pub fn filter(dictionary: &Dictionary, phrase: &AnagramPhrase) -> Self {
        let mut seen = FxHashSet::default();
        let mut usable = UsableWords::default();

        for word in dictionary.words() {
            if seen.contains(word.as_str()) {
                continue;
            }
            if accept_word(phrase.histogram(), word) {
                seen.insert(word.as_str());
                usable.alphabet.extend(word.chars());
                usable.words.push(word.clone());
            }
        }

        usable
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(|w| w.as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every character used by at least one usable word.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }
}

fn accept_word(budget: &Histogram, word: &str) -> bool {
    budget.contains(&Histogram::new(word))
}
