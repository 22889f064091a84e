use crate::dataset::Dataset;
use crate::error::KMeansError;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Min-max statistics of one column, computed over the retained rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnScale {
    pub min: f64,
    pub max: f64,
}

impl ColumnScale {
    pub fn fit(values: impl IntoIterator<Item = f64>) -> Self {
        values.into_iter().fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, v| Self {
                min: acc.min.min(v),
                max: acc.max.max(v),
            },
        )
    }

    /// Rescale `value` to [0, 1]. A constant column maps every value to 0.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range > 0.0 {
            (value - self.min) / range
        } else {
            0.0
        }
    }
}

/// Working copy of a dataset after dropping incomplete rows and rescaling
#[derive(Debug, Clone)]
pub struct Normalized {
    /// Normalized values, shape (n_rows_retained, n_columns)
    pub features: Array2<f64>,
    /// Original index of every retained row, ascending
    pub source_rows: Vec<usize>,
    pub scales: Vec<ColumnScale>,
    pub columns: Vec<String>,
}

/// Drop every row with a missing value, then min-max scale each column.
///
/// Expects every column to be numeric; a non-numeric column makes every row
/// incomplete.
pub fn normalize(dataset: &Dataset) -> Result<Normalized, KMeansError> {
    let n_features = dataset.n_columns();
    let mut source_rows = Vec::with_capacity(dataset.n_rows());
    let mut flat = Vec::with_capacity(dataset.n_rows() * n_features);

    for row in 0..dataset.n_rows() {
        let values: Option<Vec<f64>> = dataset
            .columns()
            .iter()
            .map(|c| c.data.value(row))
            .collect();

        if let Some(values) = values {
            source_rows.push(row);
            flat.extend(values);
        }
    }

    let mut features = Array2::from_shape_vec((source_rows.len(), n_features), flat)
        .map_err(|e| KMeansError::InvalidDimensions(e.to_string()))?;

    let mut scales = Vec::with_capacity(n_features);
    for mut column in features.columns_mut() {
        let scale = ColumnScale::fit(column.iter().copied());
        column.mapv_inplace(|v| scale.apply(v));
        scales.push(scale);
    }

    let dropped = dataset.n_rows() - source_rows.len();
    if dropped > 0 {
        log::debug!("Dropped {} rows with missing values", dropped);
    }

    Ok(Normalized {
        features,
        source_rows,
        scales,
        columns: dataset.column_names(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Column, ColumnData};
    use approx::assert_relative_eq;

    #[test]
    fn test_min_max_scaling() {
        let dataset = Dataset::new(vec![
            Column::int("GDP_per_capita", [30000, 25000, 40000]),
            Column::float("life_expectancy", [78.0, 75.0, 82.0]),
        ])
        .unwrap();

        let normalized = normalize(&dataset).unwrap();
        let f = &normalized.features;

        assert_eq!(f.dim(), (3, 2));
        assert_relative_eq!(f[[0, 0]], 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(f[[1, 0]], 0.0);
        assert_relative_eq!(f[[2, 0]], 1.0);
        assert_relative_eq!(f[[0, 1]], 3.0 / 7.0, epsilon = 1e-12);
        assert_eq!(
            normalized.scales[0],
            ColumnScale {
                min: 25000.0,
                max: 40000.0
            }
        );
    }

    #[test]
    fn test_missing_rows_dropped_before_statistics() {
        let dataset = Dataset::new(vec![
            Column::float("a", [30000.0, f64::NAN, 40000.0]),
            Column::new("b", ColumnData::Int(vec![Some(78), Some(75), Some(82)])),
        ])
        .unwrap();

        let normalized = normalize(&dataset).unwrap();

        assert_eq!(normalized.source_rows, vec![0, 2]);
        // 75 belonged to the dropped row, so the minimum of b is 78
        assert_eq!(normalized.scales[1], ColumnScale { min: 78.0, max: 82.0 });
        assert_relative_eq!(normalized.features[[0, 1]], 0.0);
        assert_relative_eq!(normalized.features[[1, 1]], 1.0);
    }

    #[test]
    fn test_constant_column_is_zero() {
        let dataset = Dataset::new(vec![
            Column::float("a", [1.0, 2.0, 3.0]),
            Column::float("b", [7.0, 7.0, 7.0]),
        ])
        .unwrap();

        let normalized = normalize(&dataset).unwrap();
        for v in normalized.features.column(1) {
            assert_eq!(*v, 0.0);
        }
    }

    #[test]
    fn test_normalizing_unit_range_is_noop() {
        let values = [0.0, 0.25, 1.0, 0.6180339887];
        let dataset = Dataset::new(vec![Column::float("a", values)]).unwrap();

        let once = normalize(&dataset).unwrap();
        for (got, want) in once.features.column(0).iter().zip(values.iter()) {
            assert_eq!(got, want);
        }
    }

    #[test]
    fn test_caller_dataset_untouched() {
        let dataset = Dataset::new(vec![Column::float("a", [10.0, 20.0])]).unwrap();
        let before = dataset.clone();
        let _ = normalize(&dataset).unwrap();
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_all_rows_missing() {
        let dataset = Dataset::new(vec![Column::float("a", [f64::NAN, f64::NAN])]).unwrap();
        let normalized = normalize(&dataset).unwrap();
        assert_eq!(normalized.features.nrows(), 0);
        assert!(normalized.source_rows.is_empty());
    }
}
