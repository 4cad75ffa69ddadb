//! Recovers a phrase from a scrambled copy of its letters, a hash of the
//! original, and a word list.
//!
//! Dictionary words whose letters fit in the scrambled phrase are combined
//! k at a time (k being the phrase's word count); combinations that are exact
//! anagrams of the phrase are then permuted, and each ordering is hashed and
//! compared with the target.

pub mod config;
pub mod dictionary;
pub mod disposition;
pub mod error;
pub mod filter;
pub mod hash;
pub mod histogram;
pub mod phrase;
pub mod report;
pub mod solver;
pub mod walk;

pub use crate::config::SolverConfig;
pub use crate::dictionary::{Dictionary, DictionarySource};
pub use crate::error::{Error, Result};
pub use crate::filter::UsableWords;
pub use crate::hash::{HashAlgorithm, HashComparison, PhraseHasher, TargetHash};
pub use crate::histogram::Histogram;
pub use crate::phrase::{AnagramPhrase, Candidate, Solution};
pub use crate::report::print_result;
pub use crate::solver::{SearchStats, Solver, SolverState};
