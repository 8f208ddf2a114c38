//! Search bounds for factorization.

/// Default cap on Kronecker interpolation candidates per factorization.
pub const DEFAULT_MAX_COMBINATIONS: usize = 50_000;

/// Tunable limits for [`factor`](crate::factor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactorConfig {
    /// Maximum number of divisor combinations Kronecker's method may try
    /// before giving up and keeping the cofactor whole.
    pub max_combinations: usize,
}

impl FactorConfig {
    /// Sets the Kronecker combination cap.
    #[must_use]
    pub fn with_max_combinations(mut self, max_combinations: usize) -> Self {
        self.max_combinations = max_combinations;
        self
    }
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
        }
    }
}
