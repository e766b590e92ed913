//! Evaluator configuration.

/// Configuration for [`LoadoutEvaluator`](super::LoadoutEvaluator).
///
/// # Examples
///
/// ```
/// use u_loadout::loadout::EvaluatorConfig;
///
/// let config = EvaluatorConfig::default()
///     .with_parallel(false)
///     .with_max_combinations(1_000_000);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Whether to score combinations in parallel using rayon.
    ///
    /// Has no effect when the crate is built without the `parallel`
    /// feature. Output order is identical either way.
    pub parallel: bool,

    /// Maximum number of combinations to evaluate. 0 = no limit.
    pub max_combinations: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            max_combinations: 0,
        }
    }
}

impl EvaluatorConfig {
    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_combinations(mut self, limit: usize) -> Self {
        self.max_combinations = limit;
        self
    }

    /// Whether `count` combinations fit within the configured limit.
    pub fn allows(&self, count: u128) -> bool {
        self.max_combinations == 0 || count <= self.max_combinations as u128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvaluatorConfig::default();
        assert!(config.parallel);
        assert_eq!(config.max_combinations, 0);
        assert!(config.allows(u128::MAX));
    }

    #[test]
    fn test_builder() {
        let config = EvaluatorConfig::default()
            .with_parallel(false)
            .with_max_combinations(10);
        assert!(!config.parallel);
        assert!(config.allows(10));
        assert!(!config.allows(11));
    }
}
