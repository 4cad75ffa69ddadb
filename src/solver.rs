use log::{debug, info, trace};

use crate::config::SolverConfig;
use crate::dictionary::{Dictionary, DictionarySource};
use crate::error::{Error, Result};
use crate::filter::UsableWords;
use crate::hash::{PhraseHasher, TargetHash};
use crate::histogram::Histogram;
use crate::phrase::{join_words, phrase_to_string, AnagramPhrase, Candidate, Solution};
use crate::walk::{Node, Step, Walk, WalkStats};

macro_rules! time {
    ($e:expr) => {{
        let mut time = stopwatch::Stopwatch::start_new();
        let result = $e;
        time.stop();
        (time.elapsed(), result)
    }};
}

/// Where a solver is in its lifecycle. Each step is done at most once and
/// reused by later calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SolverState {
    Uninitialized,
    WordsLoaded,
    UsableWordsComputed,
    CombinationsSearched,
    Solved,
}

/// Counters from the last solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes built by both phases.
    pub nodes: u64,
    /// Combinations checked for candidacy.
    pub combinations: u64,
    /// Partial combinations not descended.
    pub pruned: u64,
    pub candidates: u64,
    /// Orderings rebuilt and hashed.
    pub orderings: u64,
    pub solutions: u64,
}

/// Recovers a phrase from its anagram and hash.
///
/// Solving runs in two phases: a pruned walk over combinations of usable words
/// finds the ones that are anagrams of the phrase, then every ordering of each
/// such candidate is hashed and compared against the target.
pub struct Solver {
    phrase: AnagramPhrase,
    source: DictionarySource,
    target: TargetHash,
    config: SolverConfig,
    hasher: Option<Box<dyn PhraseHasher>>,

    words: Option<Dictionary>,
    usable: Option<UsableWords>,
    candidates: Option<Vec<Candidate>>,
    result: Option<Vec<Solution>>,
    stats: SearchStats,
}

impl Solver {
    pub fn new<S: Into<DictionarySource>>(phrase: AnagramPhrase, source: S, target: TargetHash) -> Self {
        Solver {
            phrase,
            source: source.into(),
            target,
            config: SolverConfig::default(),
            hasher: None,
            words: None,
            usable: None,
            candidates: None,
            result: None,
            stats: SearchStats::default(),
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the configured hash algorithm.
    pub fn with_hasher(mut self, hasher: Box<dyn PhraseHasher>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    pub fn state(&self) -> SolverState {
        if self.result.is_some() {
            SolverState::Solved
        } else if self.candidates.is_some() {
            SolverState::CombinationsSearched
        } else if self.usable.is_some() {
            SolverState::UsableWordsComputed
        } else if self.words.is_some() {
            SolverState::WordsLoaded
        } else {
            SolverState::Uninitialized
        }
    }

    pub fn phrase(&self) -> &AnagramPhrase {
        &self.phrase
    }

    pub fn target(&self) -> &TargetHash {
        &self.target
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.words.as_ref()
    }

    pub fn usable_words(&self) -> Option<&UsableWords> {
        self.usable.as_ref()
    }

    pub fn candidates(&self) -> Option<&[Candidate]> {
        self.candidates.as_deref()
    }

    pub fn result(&self) -> Option<&[Solution]> {
        self.result.as_deref()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Loads the dictionary and computes the usable words, logging what was found.
    pub fn load_all_res(&mut self) -> Result<()> {
        self.ensure_words()?;
        self.ensure_usable()?;

        if let (Some(words), Some(usable)) = (&self.words, &self.usable) {
            let alphabet: String = usable.alphabet().iter().collect();
            info!("dictionary words: {}", words.len());
            info!("usable words: {}", usable.len());
            info!("alphabet: '{}'", alphabet);
            info!(
                "phrase '{}': {} chars, {} words",
                self.phrase,
                self.phrase.char_count(),
                self.phrase.word_count()
            );
            info!("target hash: {} ({:?})", self.target, self.target.comparison());
        }
        Ok(())
    }

    /// Runs whatever phases have not run yet and returns the solutions.
    ///
    /// An empty slice means the search completed without a match.
    pub fn solve(&mut self) -> Result<&[Solution]> {
        if self.result.is_none() {
            self.ensure_words()?;
            self.ensure_usable()?;
            self.run_search()?;
        }
        Ok(self.result.as_deref().unwrap_or(&[]))
    }

    /// Drops candidates and result, keeping the loaded words.
    pub fn reset(&mut self) {
        self.candidates = None;
        self.result = None;
        self.stats = SearchStats::default();
    }

    fn ensure_words(&mut self) -> Result<()> {
        if self.words.is_none() {
            let (elapsed, words) = time!(self.source.load());
            let words = words?;
            debug!("loaded {} words in {:?}", words.len(), elapsed);
            self.words = Some(words);
        }
        Ok(())
    }

    fn ensure_usable(&mut self) -> Result<()> {
        if self.usable.is_some() {
            return Ok(());
        }
        let words = match &self.words {
            Some(words) if !words.is_empty() => words,
            _ => return Err(Error::EmptyDictionary),
        };

        let usable = UsableWords::filter(words, &self.phrase);
        if usable.is_empty() {
            return Err(Error::NoUsableWords);
        }
        debug!("kept {} of {} words", usable.len(), words.len());
        self.usable = Some(usable);
        Ok(())
    }

    fn run_search(&mut self) -> Result<()> {
        let usable = match &self.usable {
            Some(usable) => usable,
            None => return Err(Error::NoUsableWords),
        };
        let mut budget = NodeBudget::new(self.config.node_budget);

        if self.candidates.is_none() {
            self.stats = SearchStats::default();
            let (elapsed, found) = time!(find_candidates(
                &self.phrase,
                usable,
                self.config.prune_partial,
                &mut budget
            ));
            let (candidates, walk) = found?;

            self.stats.nodes += walk.nodes;
            self.stats.combinations = walk.leaves;
            self.stats.pruned = walk.pruned;
            self.stats.candidates = candidates.len() as u64;
            info!(
                "{} candidates out of {} combinations ({} pruned) in {:?}",
                candidates.len(),
                walk.leaves,
                walk.pruned,
                elapsed
            );
            self.candidates = Some(candidates);
        }

        let candidates = self.candidates.as_deref().unwrap_or(&[]);
        let hasher: &dyn PhraseHasher = match &self.hasher {
            Some(hasher) => &**hasher,
            None => &self.config.algorithm,
        };

        let mut solutions = Vec::new();
        let (elapsed, verified) = time!(verify_candidates(
            candidates,
            &self.target,
            hasher,
            &mut budget,
            &mut solutions
        ));
        let walk = verified?;

        self.stats.nodes += walk.nodes;
        self.stats.orderings = walk.leaves;
        self.stats.solutions = solutions.len() as u64;
        info!(
            "{} solutions out of {} orderings in {:?}",
            solutions.len(),
            walk.leaves,
            elapsed
        );
        self.result = Some(solutions);
        Ok(())
    }
}

/// Counts visitor calls against an optional limit.
struct NodeBudget {
    limit: Option<u64>,
    used: u64,
}

impl NodeBudget {
    fn new(limit: Option<u64>) -> Self {
        NodeBudget { limit, used: 0 }
    }

    /// Charges one node; false once the limit is passed.
    fn charge(&mut self) -> bool {
        self.used += 1;
        self.limit.map_or(true, |limit| self.used <= limit)
    }

    fn exhausted(&self) -> bool {
        self.limit.map_or(false, |limit| self.used > limit)
    }
}

/// Phase one: every ascending k-subset of the usable words whose joined form
/// has the phrase's length and histogram.
fn find_candidates(
    phrase: &AnagramPhrase,
    usable: &UsableWords,
    prune_partial: bool,
    budget: &mut NodeBudget,
) -> Result<(Vec<Candidate>, WalkStats)> {
    let words = usable.words();
    let mut candidates = Vec::new();

    let walk = Walk::combinations(words.len(), phrase.word_count()).run(|node| {
        if !budget.charge() {
            return Step::Stop;
        }
        match node {
            Node::Partial(disposition) => {
                if prune_partial && !fits_within(phrase, &disposition.resolve(words)) {
                    Step::Prune
                } else {
                    Step::Continue
                }
            }
            Node::Complete(disposition) => {
                let chosen = disposition.resolve(words);
                trace!("disposition {} ({})", disposition, phrase_to_string(&chosen));
                if is_candidate(phrase, &chosen) {
                    debug!("candidate {}", phrase_to_string(&chosen));
                    candidates.push(Candidate::new(chosen.iter().map(|w| w.to_string()).collect()));
                }
                Step::Continue
            }
        }
    });

    if walk.stopped && budget.exhausted() {
        return Err(Error::BudgetExhausted { nodes: budget.used });
    }
    Ok((candidates, walk))
}

/// Phase two: every ordering of every candidate, hashed and compared.
fn verify_candidates(
    candidates: &[Candidate],
    target: &TargetHash,
    hasher: &dyn PhraseHasher,
    budget: &mut NodeBudget,
    solutions: &mut Vec<Solution>,
) -> Result<WalkStats> {
    let mut total = WalkStats::default();

    for candidate in candidates {
        let words = candidate.words();
        let walk = Walk::permutations(words.len()).run(|node| {
            if !budget.charge() {
                return Step::Stop;
            }
            if let Node::Complete(disposition) = node {
                let ordering = disposition.resolve(words);
                let joined = join_words(&ordering);
                if target.matches(&hasher.digest(&joined)) {
                    info!("solution found: {}", joined);
                    solutions.push(Solution::new(ordering.iter().map(|w| w.to_string()).collect()));
                }
            }
            Step::Continue
        });

        total.nodes += walk.nodes;
        total.leaves += walk.leaves;
        if walk.stopped && budget.exhausted() {
            return Err(Error::BudgetExhausted { nodes: budget.used });
        }
    }

    Ok(total)
}

/// Whether a partial choice of words can still grow into the phrase.
fn fits_within(phrase: &AnagramPhrase, chosen: &[&str]) -> bool {
    if joined_len(chosen) > phrase.char_count() {
        return false;
    }
    phrase.histogram().contains(&Histogram::new(&join_words(chosen)))
}

fn is_candidate(phrase: &AnagramPhrase, chosen: &[&str]) -> bool {
    if joined_len(chosen) != phrase.char_count() {
        return false;
    }
    Histogram::new(&join_words(chosen)) == *phrase.histogram()
}

/// Length of the words once joined by single spaces.
fn joined_len(words: &[&str]) -> usize {
    let letters: usize = words.iter().map(|w| w.chars().count()).sum();
    letters + words.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{HashAlgorithm, HashComparison};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn solver(phrase: &str, dictionary: &[&str], answer: &str) -> Solver {
        let target = TargetHash::new(&HashAlgorithm::Md5.digest(answer)).unwrap();
        Solver::new(AnagramPhrase::new(phrase).unwrap(), words(dictionary), target)
    }

    /// Records every phrase it is asked to hash.
    struct RecordingHasher {
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl PhraseHasher for RecordingHasher {
        fn digest(&self, phrase: &str) -> String {
            self.seen.borrow_mut().push(phrase.to_string());
            HashAlgorithm::Md5.digest(phrase)
        }
    }

    #[test]
    fn dog_cat() {
        let mut solver = solver("dog cat", &["cat", "dog", "god", "act"], "dog cat");
        let solutions = solver.solve().unwrap().to_vec();

        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].words(), &["dog", "cat"]);
        assert_eq!(solver.usable_words().unwrap().words(), &["cat", "dog", "god", "act"]);

        let candidates: Vec<Vec<String>> = solver
            .candidates()
            .unwrap()
            .iter()
            .map(|c| c.words().to_vec())
            .collect();
        assert_eq!(
            candidates,
            vec![
                words(&["cat", "dog"]),
                words(&["cat", "god"]),
                words(&["dog", "act"]),
                words(&["god", "act"]),
            ]
        );
        assert_eq!(solver.stats().orderings, 8);
        assert_eq!(solver.state(), SolverState::Solved);
    }

    #[test]
    fn candidates_match_length_and_histogram() {
        let mut solver = solver(
            "listen here",
            &["silent", "tinsel", "here", "enlist", "hee", "listener", "h", "r", "ether"],
            "silent here",
        );
        solver.solve().unwrap();

        let phrase = solver.phrase().clone();
        let candidates = solver.candidates().unwrap();
        assert!(!candidates.is_empty());
        for candidate in candidates {
            let joined = join_words(candidate.words());
            assert_eq!(joined.chars().count(), phrase.char_count());
            assert_eq!(Histogram::new(&joined), *phrase.histogram());
        }
    }

    #[test]
    fn every_ordering_is_hashed_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let hasher = RecordingHasher { seen: Rc::clone(&seen) };
        let mut solver = solver("c b a", &["a", "b", "c"], "b a c").with_hasher(Box::new(hasher));

        let solutions = solver.solve().unwrap().to_vec();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].joined(), "b a c");

        let mut hashed = seen.borrow().clone();
        assert_eq!(hashed.len(), 6);
        hashed.sort();
        hashed.dedup();
        assert_eq!(hashed.len(), 6);
    }

    #[test]
    fn colliding_hasher_accepts_every_ordering() {
        struct Constant;
        impl PhraseHasher for Constant {
            fn digest(&self, _: &str) -> String {
                "same".to_string()
            }
        }

        let target = TargetHash::new("SAME").unwrap();
        let mut solver = Solver::new(AnagramPhrase::new("ab c").unwrap(), words(&["ab", "c"]), target)
            .with_hasher(Box::new(Constant));
        assert_eq!(solver.solve().unwrap().len(), 2);
    }

    #[test]
    fn exact_comparison_rejects_uppercase_target() {
        let digest = HashAlgorithm::Md5.digest("dog cat").to_uppercase();
        let target = TargetHash::new(&digest).unwrap().with_comparison(HashComparison::Exact);
        let mut solver = Solver::new(AnagramPhrase::new("dog cat").unwrap(), words(&["dog", "cat"]), target);
        assert!(solver.solve().unwrap().is_empty());
    }

    #[test]
    fn sha256_targets() {
        let target = TargetHash::new(&HashAlgorithm::Sha256.digest("dog cat")).unwrap();
        let config = SolverConfig {
            algorithm: HashAlgorithm::Sha256,
            ..SolverConfig::default()
        };
        let mut solver =
            Solver::new(AnagramPhrase::new("dog cat").unwrap(), words(&["cat", "dog"]), target).with_config(config);
        assert_eq!(solver.solve().unwrap()[0].joined(), "dog cat");
    }

    #[test]
    fn single_word_phrase() {
        let mut solver = solver("tinsel", &["silent", "listen", "tinsel", "lint"], "listen");
        let solutions = solver.solve().unwrap().to_vec();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].words(), &["listen"]);
        assert_eq!(solver.candidates().unwrap().len(), 3);
        assert_eq!(solver.stats().orderings, 3);
    }

    #[test]
    fn more_words_than_vocabulary() {
        let mut solver = solver("a b c", &["a", "b"], "a b c");
        assert!(solver.solve().unwrap().is_empty());
        assert_eq!(solver.stats().combinations, 0);
    }

    #[test]
    fn no_usable_words_is_an_error() {
        let mut solver = solver("dog cat", &["zebra", "xylophone"], "dog cat");
        assert!(matches!(solver.solve(), Err(Error::NoUsableWords)));
        assert_eq!(solver.state(), SolverState::WordsLoaded);
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let mut solver = solver("dog cat", &["", ""], "dog cat");
        assert!(matches!(solver.solve(), Err(Error::EmptyDictionary)));
    }

    #[test]
    fn pruning_does_not_change_the_answer() {
        let dictionary = ["a", "rabbit", "white", "hole", "the", "bait", "whit", "rabbi", "tew", "eh"];
        let mut pruned = solver("white rabbit", &dictionary, "white rabbit");
        let mut exhaustive = solver("white rabbit", &dictionary, "white rabbit").with_config(SolverConfig {
            prune_partial: false,
            ..SolverConfig::default()
        });

        let expected = exhaustive.solve().unwrap().to_vec();
        assert_eq!(pruned.solve().unwrap(), &expected[..]);
        assert_eq!(pruned.candidates(), exhaustive.candidates());
        assert!(pruned.stats().nodes <= exhaustive.stats().nodes);
        assert_eq!(exhaustive.stats().pruned, 0);
    }

    #[test]
    fn node_budget_stops_the_search() {
        let config = SolverConfig {
            node_budget: Some(3),
            prune_partial: false,
            ..SolverConfig::default()
        };
        let mut solver = solver("a b c", &["a", "b", "c", "ab", "bc"], "a b c").with_config(config);
        match solver.solve() {
            Err(Error::BudgetExhausted { nodes }) => assert_eq!(nodes, 4),
            other => panic!("unexpected {:?}", other.map(|s| s.len())),
        }
        assert_eq!(solver.state(), SolverState::UsableWordsComputed);
    }

    #[test]
    fn lifecycle_is_memoized() {
        let mut solver = solver("dog cat", &["cat", "dog"], "dog cat");
        assert_eq!(solver.state(), SolverState::Uninitialized);

        solver.load_all_res().unwrap();
        assert_eq!(solver.state(), SolverState::UsableWordsComputed);

        solver.solve().unwrap();
        let stats = solver.stats();
        assert_eq!(solver.solve().unwrap().len(), 1);
        assert_eq!(solver.stats(), stats);

        solver.reset();
        assert_eq!(solver.state(), SolverState::UsableWordsComputed);
        assert!(solver.result().is_none());
        assert_eq!(solver.solve().unwrap().len(), 1);
    }
}
