//! # kmeanspp-rs
//!
//! k-means clustering over tabular data, with k-means++ seeding and a
//! fixed-budget Lloyd refinement.
//!
//! ## Pipeline
//!
//! 1. **Validation**: empty dataset, zero clusters and non-numeric columns are
//!    rejected before any computation
//! 2. **Normalization**: rows with missing values are dropped and every column
//!    is min-max scaled to [0, 1] (constant columns become 0)
//! 3. **Seeding**: the first centroid is a uniformly random row; the rest are
//!    sampled with probability proportional to the squared distance to the
//!    nearest centroid
//! 4. **Refinement**: exactly `max_iters` rounds of mean update and
//!    nearest-centroid reassignment; an empty cluster keeps its centroid
//!
//! All randomness comes from a generator owned by the caller, so runs are
//! reproducible from a seed.
//!
//! ## Example
//!
//! ```rust
//! use kmeanspp_rs::{Column, Dataset, KMeans, KMeansConfig};
//!
//! let dataset = Dataset::new(vec![
//!     Column::int("GDP_per_capita", [30000, 25000, 40000, 32000, 28000]),
//!     Column::int("life_expectancy", [78, 75, 82, 80, 76]),
//!     Column::int("literacy_rate", [95, 90, 98, 96, 92]),
//! ])
//! .unwrap();
//!
//! let config = KMeansConfig::new(3).with_max_iters(10).with_seed(42);
//! let kmeans = KMeans::with_config(config);
//!
//! let clustering = kmeans.fit(&dataset).unwrap();
//! assert_eq!(clustering.centroids().nrows(), 3);
//! assert_eq!(clustering.labels().len(), 5);
//! ```
//!
//! ## Sharing a generator
//!
//! ```rust
//! use kmeanspp_rs::{Column, Dataset, KMeans};
//!
//! let dataset = Dataset::new(vec![Column::float("x", [0.0, 0.1, 0.9, 1.0])]).unwrap();
//! let kmeans = KMeans::new(2, 5);
//!
//! let mut rng = kmeans.rng();
//! let first = kmeans.fit_with_rng(&dataset, &mut rng).unwrap();
//! let second = kmeans.fit_with_rng(&dataset, &mut rng).unwrap();
//! assert_eq!(first.k(), second.k());
//! ```

mod algorithm;
mod clustering;
mod config;
mod dataset;
mod distance;
mod error;
mod kmeans;
mod normalize;
mod seeding;
mod validate;

pub use clustering::{Clustering, PointRecord};
pub use config::{KMeansConfig, DEFAULT_SEED};
pub use dataset::{Column, ColumnData, Dataset};
pub use error::KMeansError;
pub use kmeans::KMeans;
pub use normalize::ColumnScale;
