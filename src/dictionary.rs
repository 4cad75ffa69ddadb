use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Where the raw word list comes from.
#[derive(Clone, Debug)]
pub enum DictionarySource {
    Path(PathBuf),
    Words(Vec<String>),
}

impl DictionarySource {
    pub fn load(&self) -> Result<Dictionary> {
        match self {
            DictionarySource::Path(path) => Dictionary::from_path(path),
            DictionarySource::Words(words) => Ok(Dictionary::from_lines(words)),
        }
    }
}

impl From<PathBuf> for DictionarySource {
    fn from(path: PathBuf) -> Self {
        DictionarySource::Path(path)
    }
}

impl<'a> From<&'a Path> for DictionarySource {
    fn from(path: &'a Path) -> Self {
        DictionarySource::Path(path.to_path_buf())
    }
}

impl From<Vec<String>> for DictionarySource {
    fn from(words: Vec<String>) -> Self {
        DictionarySource::Words(words)
    }
}

/// Raw dictionary words in file order, blank lines dropped.
///
/// Words are kept byte-for-byte: no case folding, no trimming beyond the line
/// terminator. Duplicates survive here and are collapsed by the word filter.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::DictionaryNotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| Error::DictionaryOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut words = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            words.push(line);
        }

        debug!("read {} words from {}", words.len(), path.display());
        Ok(Dictionary { words })
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .filter(|line| !line.as_ref().is_empty())
            .map(|line| line.as_ref().to_string())
            .collect();
        Dictionary { words }
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
