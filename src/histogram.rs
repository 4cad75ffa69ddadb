use fxhash::FxHashMap;

/// Character frequency profile of a string.
///
/// Built once from a string; the counts always sum to the number of characters
/// in that string and the keys are exactly the distinct characters present.
#[derive(Clone, Debug, Default)]
pub struct Histogram {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl Histogram {
    pub fn new(s: &str) -> Self {
        let mut histogram = Histogram::default();
        for c in s.chars() {
            *histogram.counts.entry(c).or_insert(0) += 1;
            histogram.total += 1;
        }
        histogram
    }

    /// Number of characters the histogram was built from.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct characters.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }

    /// True iff `self` has at least the letters `other` needs.
    ///
    /// Characters of `self` that `other` never uses are irrelevant.
    pub fn contains(&self, other: &Histogram) -> bool {
        if other.total > self.total {
            return false;
        }
        other
            .counts
            .iter()
            .all(|(c, &needed)| self.count(*c) >= needed)
    }

    /// Exact multiset equality: containment both ways.
    pub fn equals(&self, other: &Histogram) -> bool {
        self.total == other.total
            && self.counts.len() == other.counts.len()
            && self.contains(other)
            && other.contains(self)
    }
}

impl PartialEq for Histogram {
    fn eq(&self, other: &Histogram) -> bool {
        self.equals(other)
    }
}

impl Eq for Histogram {}

impl<'a> From<&'a str> for Histogram {
    fn from(s: &'a str) -> Self {
        Histogram::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_length() {
        let h = Histogram::new("hello world");
        assert_eq!(h.len(), 11);
        assert_eq!(h.count('l'), 3);
        assert_eq!(h.count(' '), 1);
        assert_eq!(h.count('z'), 0);
        assert_eq!(h.distinct(), 8);
        assert_eq!(h.chars().map(|c| h.count(c)).sum::<usize>(), h.len());
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(Histogram::new("abc"), Histogram::new("cab"));
        assert_ne!(Histogram::new("abc"), Histogram::new("abbc"));
        assert_ne!(Histogram::new("abc"), Histogram::new("abd"));
        assert!(Histogram::new("dog cat").equals(&Histogram::new("cat dog")));
    }

    #[test]
    fn equality_is_reflexive() {
        for s in &["", "a", "aab", "white rabbit"] {
            let h = Histogram::new(s);
            assert!(h.equals(&h));
        }
    }

    #[test]
    fn containment_is_one_way() {
        let big = Histogram::new("aabbc");
        let small = Histogram::new("ab");
        assert!(big.contains(&small));
        assert!(!small.contains(&big));
    }

    #[test]
    fn containment_needs_multiplicity_and_alphabet() {
        let h = Histogram::new("abc");
        assert!(!h.contains(&Histogram::new("aa")));
        assert!(!h.contains(&Histogram::new("x")));
        assert!(h.contains(&Histogram::new("")));
        assert!(Histogram::new("").contains(&Histogram::new("")));
    }

    #[test]
    fn case_is_significant() {
        assert!(!Histogram::new("abc").contains(&Histogram::new("A")));
    }
}
