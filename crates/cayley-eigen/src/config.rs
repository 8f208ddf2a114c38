//! Engine limits.

use cayley_factor::FactorConfig;

/// Default cap on minimal polynomial candidates.
pub const DEFAULT_MAX_MINPOLY_CANDIDATES: usize = 4096;

/// Limits applied by engine operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of exponent tuples the minimal polynomial search
    /// may enumerate.
    pub max_minpoly_candidates: usize,
    /// Limits for characteristic polynomial factorization.
    pub factor: FactorConfig,
}

impl EngineConfig {
    /// Creates a configuration with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_minpoly_candidates: DEFAULT_MAX_MINPOLY_CANDIDATES,
            factor: FactorConfig::default(),
        }
    }

    /// Sets the minimal polynomial candidate cap.
    #[must_use]
    pub fn with_max_minpoly_candidates(mut self, limit: usize) -> Self {
        self.max_minpoly_candidates = limit;
        self
    }

    /// Sets the Kronecker combination cap used during factorization.
    #[must_use]
    pub fn with_max_factor_combinations(mut self, limit: usize) -> Self {
        self.factor = self.factor.with_max_combinations(limit);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
