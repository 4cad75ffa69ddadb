use crate::hash::HashAlgorithm;

/// Knobs for a single solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub algorithm: HashAlgorithm,
    /// Stop descending a partial combination whose words already overflow the
    /// phrase's length or letters.
    pub prune_partial: bool,
    /// Upper bound on nodes visited across both phases. `None` is unbounded.
    pub node_budget: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            algorithm: HashAlgorithm::Md5,
            prune_partial: true,
            node_budget: None,
        }
    }
}
