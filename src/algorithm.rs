use crate::clustering::Clustering;
use crate::config::KMeansConfig;
use crate::dataset::Dataset;
use crate::distance::{assign_nearest, compute_centroid_shift, inertia};
use crate::error::KMeansError;
use crate::normalize::normalize;
use crate::seeding::kmeans_plusplus;
use crate::validate::{check_capacity, check_request};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::Rng;
use std::time::Instant;

/// Run the full pipeline: validate, normalize, seed with k-means++, then
/// refine for exactly `config.max_iters` Lloyd iterations.
///
/// Every error is raised before seeding starts.
pub fn kmeans_plusplus_lloyd<R: Rng>(
    dataset: &Dataset,
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<Clustering, KMeansError> {
    let k = config.k;

    check_request(dataset, k)?;
    let normalized = normalize(dataset)?;
    check_capacity(k, normalized.features.nrows())?;

    let data = normalized.features.view();
    log::info!(
        "Training k-means: {} rows ({} dropped), {} features, {} clusters, {} iterations",
        data.nrows(),
        dataset.n_rows() - data.nrows(),
        data.ncols(),
        k,
        config.max_iters
    );

    let seeding = kmeans_plusplus(&data, k, rng);
    log::debug!("Seeded centroids from rows {:?}", seeding.indices);

    let (centroids, labels) = refine(&data, seeding.centroids, seeding.labels, config.max_iters);

    log::info!(
        "Finished k-means with an inertia of {:.6}",
        inertia(&data, &centroids.view(), &labels.view())
    );

    Ok(Clustering {
        centroids,
        features: normalized.features,
        columns: normalized.columns,
        labels,
        probabilities: seeding.probabilities,
        source_rows: normalized.source_rows,
        scales: normalized.scales,
        n_iterations: config.max_iters,
    })
}

/// Fixed-budget Lloyd refinement. There is no convergence check: a zero shift
/// still consumes an iteration.
pub fn refine(
    data: &ArrayView2<f64>,
    mut centroids: Array2<f64>,
    mut labels: Array1<usize>,
    max_iters: usize,
) -> (Array2<f64>, Array1<usize>) {
    for iteration in 0..max_iters {
        let iter_start = Instant::now();

        let (new_centroids, empty_clusters) =
            recompute_centroids(data, &labels.view(), &centroids.view());
        let shift = compute_centroid_shift(&centroids.view(), &new_centroids.view());
        centroids = new_centroids;

        labels = assign_nearest(data, &centroids.view()).0;

        if empty_clusters > 0 {
            log::debug!("  Kept {} empty clusters at their previous centroid", empty_clusters);
        }
        log::debug!(
            "  Iteration {}/{}: shift = {:.6}, time = {:.4}s",
            iteration + 1,
            max_iters,
            shift,
            iter_start.elapsed().as_secs_f64()
        );
    }

    (centroids, labels)
}

/// Mean of the rows assigned to each cluster. A cluster without rows keeps
/// its previous centroid. Returns the new centroids and the number of empty
/// clusters.
pub fn recompute_centroids(
    data: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
    previous: &ArrayView2<f64>,
) -> (Array2<f64>, usize) {
    let (k, n_features) = previous.dim();

    let mut sums: Array2<f64> = Array2::zeros((k, n_features));
    let mut counts = vec![0usize; k];

    for (point, &label) in data.outer_iter().zip(labels.iter()) {
        counts[label] += 1;
        let mut sum = sums.row_mut(label);
        sum += &point;
    }

    let mut empty_clusters = 0;
    for (cluster_idx, mut centroid) in sums.outer_iter_mut().enumerate() {
        let count = counts[cluster_idx];
        if count > 0 {
            centroid.mapv_inplace(|v| v / count as f64);
        } else {
            centroid.assign(&previous.row(cluster_idx));
            empty_clusters += 1;
        }
    }

    (sums, empty_clusters)
}
