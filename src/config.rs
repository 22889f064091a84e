use serde::{Deserialize, Serialize};

/// Seed used when none is given, so that runs are reproducible out of the box
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for the k-means engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Number of refinement iterations. The budget is always fully spent;
    /// there is no convergence-based early stop.
    pub max_iters: usize,

    /// Seed for the generator returned by [`crate::KMeans::rng`]
    pub seed: u64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 3,
            max_iters: 25,
            seed: DEFAULT_SEED,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the number of refinement iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = KMeansConfig::new(4).with_max_iters(7).with_seed(9);
        assert_eq!(config.k, 4);
        assert_eq!(config.max_iters, 7);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: KMeansConfig = serde_json::from_str(r#"{"k": 5}"#).unwrap();
        assert_eq!(config.k, 5);
        assert_eq!(config.max_iters, 25);
        assert_eq!(config.seed, DEFAULT_SEED);
    }
}
