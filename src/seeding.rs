//! k-means++ seeding.
//!
//! The first centroid is a row picked uniformly at random. Every further
//! centroid is a row sampled with probability proportional to its squared
//! distance to the nearest centroid chosen so far, so rows already used as
//! centroids (and their duplicates) are never picked again while any other
//! row is available.

use crate::distance::assign_nearest;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Outcome of seeding
#[derive(Debug, Clone)]
pub struct Seeding {
    /// Initial centroids, shape (k, n_features)
    pub centroids: Array2<f64>,
    /// Row index each centroid was copied from, in pick order
    pub indices: Vec<usize>,
    /// Nearest-centroid assignment against the full seeded set
    pub labels: Array1<usize>,
    /// Selection probability of each row against the full seeded set
    pub probabilities: Array1<f64>,
}

/// Turn squared nearest-centroid distances into a sampling distribution.
///
/// Sums run in row order. When every distance is zero the distribution is
/// uniform.
pub fn selection_probabilities(min_dists: &ArrayView1<f64>) -> Array1<f64> {
    let n_rows = min_dists.len();
    let total: f64 = min_dists.iter().sum();

    if total > 0.0 {
        min_dists.mapv(|d| d / total)
    } else {
        Array1::from_elem(n_rows, 1.0 / n_rows as f64)
    }
}

/// Draw one row index from `probabilities`
fn sample_index<R: Rng>(probabilities: &ArrayView1<f64>, rng: &mut R) -> usize {
    match WeightedIndex::<f64>::new(probabilities.iter()) {
        Ok(dist) => dist.sample(rng),
        Err(e) => {
            log::warn!("Falling back to uniform sampling: {}", e);
            rng.gen_range(0..probabilities.len())
        }
    }
}

/// Pick `k` initial centroids from the rows of `data`.
///
/// Callers must ensure `1 <= k <= data.nrows()`.
pub fn kmeans_plusplus<R: Rng>(data: &ArrayView2<f64>, k: usize, rng: &mut R) -> Seeding {
    let n_rows = data.nrows();
    debug_assert!(k >= 1 && k <= n_rows);

    let mut indices = Vec::with_capacity(k);
    indices.push(rng.gen_range(0..n_rows));

    let mut centroids = data.select(Axis(0), &indices);
    let (mut labels, mut min_dists) = assign_nearest(data, &centroids.view());
    let mut probabilities = selection_probabilities(&min_dists.view());

    while indices.len() < k {
        let total: f64 = min_dists.iter().sum();
        if total == 0.0 {
            log::warn!(
                "All rows coincide with the {} centroids chosen so far; picking uniformly",
                indices.len()
            );
        }

        let idx = sample_index(&probabilities.view(), rng);
        log::debug!(
            "Seeded centroid {} from row {} (p = {:.6})",
            indices.len(),
            idx,
            probabilities[idx]
        );
        indices.push(idx);

        centroids = data.select(Axis(0), &indices);
        (labels, min_dists) = assign_nearest(data, &centroids.view());
        probabilities = selection_probabilities(&min_dists.view());
    }

    Seeding {
        centroids,
        indices,
        labels,
        probabilities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_probabilities_proportional_to_squared_distance() {
        let min_dists = array![0.0, 1.0, 4.0, 5.0];
        let p = selection_probabilities(&min_dists.view());

        assert_relative_eq!(p[0], 0.0);
        assert_relative_eq!(p[1], 0.1);
        assert_relative_eq!(p[2], 0.4);
        assert_relative_eq!(p[3], 0.5);
        assert_relative_eq!(p.sum(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_probabilities_uniform_when_all_zero() {
        let p = selection_probabilities(&array![0.0, 0.0, 0.0, 0.0].view());
        for v in p.iter() {
            assert_relative_eq!(*v, 0.25);
        }
    }

    #[test]
    fn test_seeding_shape() {
        let data = Array2::random((100, 3), Uniform::new(0.0, 1.0));
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let seeding = kmeans_plusplus(&data.view(), 5, &mut rng);

        assert_eq!(seeding.centroids.dim(), (5, 3));
        assert_eq!(seeding.indices.len(), 5);
        assert_eq!(seeding.labels.len(), 100);
        assert_eq!(seeding.probabilities.len(), 100);
        for (c, &idx) in seeding.centroids.outer_iter().zip(seeding.indices.iter()) {
            assert_eq!(c, data.row(idx));
        }
    }

    #[test]
    fn test_k_equals_rows_picks_every_row() {
        let data = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let seeding = kmeans_plusplus(&data.view(), 4, &mut rng);

        let unique: HashSet<usize> = seeding.indices.iter().copied().collect();
        assert_eq!(unique.len(), 4);
        // Every row sits on its own centroid
        for p in seeding.probabilities.iter() {
            assert_relative_eq!(*p, 0.25);
        }
    }

    #[test]
    fn test_duplicates_never_reseeded() {
        let data = array![[0.0], [0.0], [1.0], [1.0]];

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let seeding = kmeans_plusplus(&data.view(), 2, &mut rng);
            let values: HashSet<u64> = seeding
                .centroids
                .iter()
                .map(|v| v.to_bits())
                .collect();
            assert_eq!(values.len(), 2, "seed {} picked the same point twice", seed);
        }
    }

    #[test]
    fn test_same_seed_same_picks() {
        let data = Array2::random((50, 4), Uniform::new(0.0, 1.0));

        let a = kmeans_plusplus(&data.view(), 6, &mut ChaCha8Rng::seed_from_u64(3));
        let b = kmeans_plusplus(&data.view(), 6, &mut ChaCha8Rng::seed_from_u64(3));

        assert_eq!(a.indices, b.indices);
        assert_eq!(a.centroids, b.centroids);
    }

    #[test]
    fn test_more_centroids_than_distinct_points() {
        let data = array![[0.5, 0.5], [0.5, 0.5], [0.5, 0.5]];
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let seeding = kmeans_plusplus(&data.view(), 3, &mut rng);
        assert_eq!(seeding.centroids.nrows(), 3);
        assert!(seeding.labels.iter().all(|&l| l == 0));
    }
}
