use std::fmt;
use std::str::FromStr;

use md5::Md5;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// A one-way digest over phrases, rendered as a string.
pub trait PhraseHasher {
    fn digest(&self, phrase: &str) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha256,
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        HashAlgorithm::Md5
    }
}

impl PhraseHasher for HashAlgorithm {
    /// Lowercase hex.
    fn digest(&self, phrase: &str) -> String {
        match self {
            HashAlgorithm::Md5 => format!("{:x}", Md5::digest(phrase.as_bytes())),
            HashAlgorithm::Sha256 => format!("{:x}", Sha256::digest(phrase.as_bytes())),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HashAlgorithm::Md5 => f.write_str("md5"),
            HashAlgorithm::Sha256 => f.write_str("sha256"),
        }
    }
}

/// How two digest strings are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashComparison {
    /// Hex digests typed by hand are often uppercase.
    CaseInsensitive,
    Exact,
}

impl Default for HashComparison {
    fn default() -> Self {
        HashComparison::CaseInsensitive
    }
}

impl HashComparison {
    pub fn equal(&self, a: &str, b: &str) -> bool {
        match self {
            HashComparison::CaseInsensitive => a.eq_ignore_ascii_case(b),
            HashComparison::Exact => a == b,
        }
    }
}

/// The digest of the unknown phrase, with the policy used to compare against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetHash {
    digest: String,
    comparison: HashComparison,
}

impl TargetHash {
    /// Surrounding whitespace is dropped; the digest itself is opaque.
    pub fn new(digest: &str) -> Result<Self> {
        let digest = digest.trim();
        if digest.is_empty() {
            return Err(Error::EmptyTargetHash);
        }
        Ok(TargetHash {
            digest: digest.to_string(),
            comparison: HashComparison::default(),
        })
    }

    pub fn with_comparison(mut self, comparison: HashComparison) -> Self {
        self.comparison = comparison;
        self
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn comparison(&self) -> HashComparison {
        self.comparison
    }

    pub fn matches(&self, digest: &str) -> bool {
        self.comparison.equal(&self.digest, digest)
    }
}

impl fmt::Display for TargetHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.digest)
    }
}
