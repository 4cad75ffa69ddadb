use std::fmt;

/// An ordered selection of indices into the usable words.
///
/// Position is the order of selection. The search grows and shrinks it with
/// strictly matched `push`/`pop` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Disposition {
    indices: Vec<usize>,
}

impl Disposition {
    pub fn with_capacity(capacity: usize) -> Self {
        Disposition {
            indices: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.indices.pop()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn last(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Whether every index strictly exceeds its predecessor, i.e. this is the
    /// canonical representative of a combination.
    pub fn is_ascending(&self) -> bool {
        self.indices.windows(2).all(|pair| pair[0] < pair[1])
    }

    /// Maps the indices through `words`, keeping selection order.
    pub fn resolve<'w, S: AsRef<str>>(&self, words: &'w [S]) -> Vec<&'w str> {
        self.indices.iter().map(|&i| words[i].as_ref()).collect()
    }
}

impl From<Vec<usize>> for Disposition {
    fn from(indices: Vec<usize>) -> Self {
        Disposition { indices }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.indices.is_empty() {
            return f.write_str("''");
        }
        for (i, index) in self.indices.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}
