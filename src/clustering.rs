use crate::dataset::Dataset;
use crate::distance::{inertia, nearest_centroid};
use crate::error::KMeansError;
use crate::normalize::ColumnScale;
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// Result of a clustering run: final centroids plus the normalized working
/// copy of the dataset with its cluster assignments.
#[derive(Debug, Clone)]
pub struct Clustering {
    pub(crate) centroids: Array2<f64>,
    pub(crate) features: Array2<f64>,
    pub(crate) columns: Vec<String>,
    pub(crate) labels: Array1<usize>,
    pub(crate) probabilities: Array1<f64>,
    pub(crate) source_rows: Vec<usize>,
    pub(crate) scales: Vec<ColumnScale>,
    pub(crate) n_iterations: usize,
}

/// One flattened output row: either a data point or a centroid.
///
/// This is the shape external layers persist or render; it implies no schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub title: String,
    pub n_clusters: usize,
    pub used_iterations: usize,
    pub coordinates: Vec<f64>,
    pub assigned_cluster: usize,
    pub is_centroid: bool,
    pub centroid_label: Option<String>,
}

impl Clustering {
    /// Final centroids, shape (k, n_features)
    pub fn centroids(&self) -> &Array2<f64> {
        &self.centroids
    }

    /// Final centroids as plain coordinate tuples
    pub fn centroid_list(&self) -> Vec<Vec<f64>> {
        self.centroids.outer_iter().map(|c| c.to_vec()).collect()
    }

    /// Cluster index of every retained row
    pub fn labels(&self) -> &Array1<usize> {
        &self.labels
    }

    /// Selection probability of every retained row from the last seeding round
    pub fn probabilities(&self) -> &Array1<f64> {
        &self.probabilities
    }

    /// Normalized feature values of the retained rows
    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index in the input dataset of every retained row
    pub fn source_rows(&self) -> &[usize] {
        &self.source_rows
    }

    pub fn scales(&self) -> &[ColumnScale] {
        &self.scales
    }

    pub fn n_rows(&self) -> usize {
        self.features.nrows()
    }

    pub fn k(&self) -> usize {
        self.centroids.nrows()
    }

    /// Number of refinement iterations that were run
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Number of rows assigned to each cluster index
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.k()];
        for &label in self.labels.iter() {
            sizes[label] += 1;
        }
        sizes
    }

    /// Within-cluster sum of squared distances in normalized space
    pub fn inertia(&self) -> f64 {
        inertia(
            &self.features.view(),
            &self.centroids.view(),
            &self.labels.view(),
        )
    }

    /// Assign rows of another dataset to the final centroids.
    ///
    /// The dataset must have the same columns in the same order. Values are
    /// scaled with the statistics of the clustered data, so they may fall
    /// outside [0, 1]. Rows with a missing value get `None`.
    pub fn predict(&self, dataset: &Dataset) -> Result<Vec<Option<usize>>, KMeansError> {
        let names = dataset.column_names();
        if names != self.columns {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected columns {:?}, got {:?}",
                self.columns, names
            )));
        }

        let columns = dataset.non_numeric_columns();
        if !columns.is_empty() {
            return Err(KMeansError::NoNumericColumns { columns });
        }

        let centroids = self.centroids.view();
        let labels = (0..dataset.n_rows())
            .map(|row| {
                let point: Option<Vec<f64>> = dataset
                    .columns()
                    .iter()
                    .zip(self.scales.iter())
                    .map(|(c, scale)| c.data.value(row).map(|v| scale.apply(v)))
                    .collect();

                point.map(|p| nearest_centroid(&ArrayView1::from(&p), &centroids).0)
            })
            .collect();

        Ok(labels)
    }

    /// Flatten into records: every data row in retained order, then every
    /// centroid labelled `C{index}`.
    pub fn records(&self, title: &str) -> Vec<PointRecord> {
        let record = |coordinates: Vec<f64>, assigned_cluster: usize, is_centroid: bool| {
            PointRecord {
                title: title.to_string(),
                n_clusters: self.k(),
                used_iterations: self.n_iterations,
                coordinates,
                assigned_cluster,
                is_centroid,
                centroid_label: is_centroid.then(|| format!("C{}", assigned_cluster)),
            }
        };

        let points = self
            .features
            .outer_iter()
            .zip(self.labels.iter())
            .map(|(row, &label)| record(row.to_vec(), label, false));

        let centroids = self
            .centroids
            .outer_iter()
            .enumerate()
            .map(|(i, c)| record(c.to_vec(), i, true));

        points.chain(centroids).collect()
    }
}
