use crate::algorithm::kmeans_plusplus_lloyd;
use crate::clustering::Clustering;
use crate::config::KMeansConfig;
use crate::dataset::Dataset;
use crate::error::KMeansError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// k-means++ clustering engine over tabular data.
///
/// The engine holds only its configuration. Each call to [`KMeans::fit`] or
/// [`KMeans::fit_with_rng`] works on its own normalized copy of the dataset
/// and returns a fresh [`Clustering`].
///
/// # Example
///
/// ```
/// use kmeanspp_rs::{Column, Dataset, KMeans};
///
/// let dataset = Dataset::new(vec![
///     Column::int("GDP_per_capita", [30000, 25000, 40000, 35000]),
///     Column::int("life_expectancy", [78, 75, 82, 79]),
///     Column::int("literacy_rate", [95, 90, 98, 94]),
/// ])
/// .unwrap();
///
/// let kmeans = KMeans::new(2, 10);
/// let clustering = kmeans.fit(&dataset).unwrap();
///
/// assert_eq!(clustering.centroid_list().len(), 2);
/// assert_eq!(clustering.labels().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    config: KMeansConfig,
}

impl KMeans {
    /// Create an engine with `k` clusters and `max_iters` refinement
    /// iterations, using the default seed.
    pub fn new(k: usize, max_iters: usize) -> Self {
        Self {
            config: KMeansConfig::new(k).with_max_iters(max_iters),
        }
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: KMeansConfig) -> Self {
        Self { config }
    }

    /// A generator seeded from the configuration.
    ///
    /// Reuse it across [`KMeans::fit_with_rng`] calls to get a sequence of
    /// runs that is reproducible as a whole.
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.config.seed)
    }

    /// Cluster `dataset` with a generator freshly seeded from the
    /// configuration. Repeated calls give identical results.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The dataset has no rows
    /// - `k` is 0
    /// - A column is not integer or floating point
    /// - `k` exceeds the rows left after dropping missing values
    pub fn fit(&self, dataset: &Dataset) -> Result<Clustering, KMeansError> {
        self.fit_with_rng(dataset, &mut self.rng())
    }

    /// Cluster `dataset`, drawing every random choice from `rng`.
    pub fn fit_with_rng<R: Rng>(
        &self,
        dataset: &Dataset,
        rng: &mut R,
    ) -> Result<Clustering, KMeansError> {
        kmeans_plusplus_lloyd(dataset, &self.config, rng)
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of refinement iterations.
    pub fn max_iters(&self) -> usize {
        self.config.max_iters
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}

impl Default for KMeans {
    fn default() -> Self {
        Self::with_config(KMeansConfig::default())
    }
}
