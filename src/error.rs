use thiserror::Error;

/// Error types for the k-means engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KMeansError {
    /// The dataset has no rows to cluster
    #[error("Empty dataset: clustering was requested on a dataset with no rows")]
    EmptyDataset,

    /// Zero centroids were requested
    #[error("Invalid number of centroids: k must be greater than 0")]
    ZeroCentroids,

    /// More centroids were requested than rows remain after cleaning
    #[error(
        "Invalid number of centroids: {requested} centroids requested for {available} rows; \
         k must be less than or equal to the number of rows"
    )]
    MoreCentroids { requested: usize, available: usize },

    /// One or more columns hold non-numeric data
    #[error("Non-numeric columns found: {columns:?}; convert them to numbers or drop them")]
    NoNumericColumns { columns: Vec<String> },

    /// Shape mismatch between columns, or between a dataset and a fitted clustering
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),

    /// A column name that the dataset does not contain
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_centroids_message_has_both_counts() {
        let err = KMeansError::MoreCentroids {
            requested: 5,
            available: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("5 centroids"));
        assert!(msg.contains("2 rows"));
    }

    #[test]
    fn test_no_numeric_message_lists_columns() {
        let err = KMeansError::NoNumericColumns {
            columns: vec!["country".to_string(), "region".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("\"country\""));
        assert!(msg.contains("\"region\""));
    }
}
