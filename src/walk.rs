//! Depth-first backtracking over index dispositions.
//!
//! The same walk drives both search phases. In combination mode only ascending
//! dispositions reach the leaves, so each k-subset of `0..size` is visited
//! exactly once, in lexicographic order. In permutation mode every ordering of
//! `depth` distinct indices is visited.

use crate::disposition::Disposition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkMode {
    Combinations,
    Permutations,
}

/// What the walk is showing the visitor.
#[derive(Debug)]
pub enum Node<'a> {
    /// A non-empty disposition shorter than the target depth.
    Partial(&'a Disposition),
    /// A disposition of exactly the target depth.
    Complete(&'a Disposition),
}

/// The visitor's answer for a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// Do not descend below this partial node. Ignored on complete nodes.
    Prune,
    /// Abandon the whole walk.
    Stop,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Every disposition the walk built, the empty root included.
    pub nodes: u64,
    /// Complete dispositions handed to the visitor.
    pub leaves: u64,
    pub pruned: u64,
    pub stopped: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Walk {
    size: usize,
    depth: usize,
    mode: WalkMode,
}

impl Walk {
    pub fn combinations(size: usize, depth: usize) -> Self {
        Walk {
            size,
            depth,
            mode: WalkMode::Combinations,
        }
    }

    pub fn permutations(size: usize) -> Self {
        Walk {
            size,
            depth: size,
            mode: WalkMode::Permutations,
        }
    }

    pub fn mode(&self) -> WalkMode {
        self.mode
    }

    pub fn run<F>(&self, mut visit: F) -> WalkStats
    where
        F: FnMut(Node) -> Step,
    {
        let mut stats = WalkStats::default();
        let mut disposition = Disposition::with_capacity(self.depth);
        if self.descend(&mut disposition, &mut visit, &mut stats) == Step::Stop {
            stats.stopped = true;
        }
        debug_assert!(disposition.is_empty());
        stats
    }

    fn descend<F>(&self, disposition: &mut Disposition, visit: &mut F, stats: &mut WalkStats) -> Step
    where
        F: FnMut(Node) -> Step,
    {
        stats.nodes += 1;

        if disposition.len() == self.depth {
            if self.mode == WalkMode::Combinations && !disposition.is_ascending() {
                return Step::Continue;
            }
            stats.leaves += 1;
            return match visit(Node::Complete(disposition)) {
                Step::Stop => Step::Stop,
                _ => Step::Continue,
            };
        }

        if !disposition.is_empty() {
            match visit(Node::Partial(disposition)) {
                Step::Continue => {}
                Step::Prune => {
                    stats.pruned += 1;
                    return Step::Continue;
                }
                Step::Stop => return Step::Stop,
            }
        }

        for index in self.residual(disposition) {
            disposition.push(index);
            let step = self.descend(disposition, visit, stats);
            disposition.pop();
            if step == Step::Stop {
                return Step::Stop;
            }
        }

        Step::Continue
    }

    /// Indices still available below `disposition`, ascending.
    ///
    /// In combination mode an index at or below the last one chosen can never
    /// complete an ascending disposition, and neither can one that leaves too
    /// few larger indices to reach the target depth, so both are skipped.
    fn residual(&self, disposition: &Disposition) -> Vec<usize> {
        match self.mode {
            WalkMode::Combinations => {
                let start = disposition.last().map_or(0, |last| last + 1);
                let still_needed = self.depth - disposition.len();
                let end = (self.size + 1).saturating_sub(still_needed);
                (start..end).collect()
            }
            WalkMode::Permutations => (0..self.size)
                .filter(|&i| !disposition.contains(i))
                .collect(),
        }
    }
}
