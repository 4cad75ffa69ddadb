use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a solve. None of these are retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid dictionary path: {}", .0.display())]
    DictionaryNotFound(PathBuf),

    #[error("could not open dictionary {}", .path.display())]
    DictionaryOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading dictionary")]
    DictionaryRead(#[from] io::Error),

    #[error("no words available, cannot proceed processing words")]
    EmptyDictionary,

    /// The phrase and the dictionary share no usable word, so no candidate is possible.
    #[error("no dictionary word fits the anagram phrase, no candidates possible")]
    NoUsableWords,

    #[error("anagram phrase is empty")]
    EmptyPhrase,

    #[error("target hash is empty")]
    EmptyTargetHash,

    #[error("unknown hash algorithm `{0}` (expected md5 or sha256)")]
    UnknownAlgorithm(String),

    #[error("search stopped after visiting {nodes} nodes")]
    BudgetExhausted { nodes: u64 },
}
