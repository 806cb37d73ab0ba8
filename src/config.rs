use getset::CopyGetters;

/// The probability that a node present on level `n` is also present on level
/// `n + 1`.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Height of the head sentinel in a freshly built or cleared list.
pub const INITIAL_HEIGHT: usize = 1;

/// How many empty top levels a removal trims from the head sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrimPolicy {
    /// Trim at most one level per removal. Bulk deletions can leave empty
    /// levels at the top of the head until later removals shave them off.
    #[default]
    Single,
    /// Keep trimming until the topmost level has a successor or the head is
    /// back to [`INITIAL_HEIGHT`].
    Exhaustive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Config {
    /// Seed for the height generator. `None` pulls from OS entropy, so the
    /// shape of the list won't be reproducible between runs.
    seed: Option<u64>,
    trim_policy: TrimPolicy,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trim_policy(mut self, trim_policy: TrimPolicy) -> Self {
        self.trim_policy = trim_policy;
        self
    }
}
