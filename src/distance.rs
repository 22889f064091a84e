use ndarray::{Array1, ArrayView1, ArrayView2};

/// Squared Euclidean distance between two points.
///
/// Differences are accumulated directly (not through the `||x||^2 + ||c||^2 - 2*x.c`
/// expansion) so that identical points are exactly 0 apart.
#[inline]
pub fn squared_euclidean(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Index of the nearest centroid and the squared distance to it.
///
/// Equidistant centroids resolve to the lowest index.
#[inline]
pub fn nearest_centroid(point: &ArrayView1<f64>, centroids: &ArrayView2<f64>) -> (usize, f64) {
    let mut best_label = 0;
    let mut best_dist = f64::INFINITY;

    for (j, centroid) in centroids.outer_iter().enumerate() {
        let dist = squared_euclidean(point, &centroid);
        if dist < best_dist {
            best_dist = dist;
            best_label = j;
        }
    }

    (best_label, best_dist)
}

/// Assign every row of `data` to its nearest centroid, in row order.
///
/// # Returns
/// * `labels` - Nearest centroid index for each row (n_rows,)
/// * `min_dists` - Squared distance to that centroid (n_rows,)
pub fn assign_nearest(
    data: &ArrayView2<f64>,
    centroids: &ArrayView2<f64>,
) -> (Array1<usize>, Array1<f64>) {
    let n_rows = data.nrows();
    let mut labels = Array1::zeros(n_rows);
    let mut min_dists = Array1::zeros(n_rows);

    for (i, point) in data.outer_iter().enumerate() {
        let (label, dist) = nearest_centroid(&point, centroids);
        labels[i] = label;
        min_dists[i] = dist;
    }

    (labels, min_dists)
}

/// Within-cluster sum of squared distances
pub fn inertia(data: &ArrayView2<f64>, centroids: &ArrayView2<f64>, labels: &ArrayView1<usize>) -> f64 {
    data.outer_iter()
        .zip(labels.iter())
        .map(|(point, &label)| squared_euclidean(&point, &centroids.row(label)))
        .sum()
}

/// Compute centroid shift (sum of L2 norms of centroid movements)
pub fn compute_centroid_shift(
    old_centroids: &ArrayView2<f64>,
    new_centroids: &ArrayView2<f64>,
) -> f64 {
    old_centroids
        .outer_iter()
        .zip(new_centroids.outer_iter())
        .map(|(old_c, new_c)| squared_euclidean(&old_c, &new_c).sqrt())
        .sum()
}
