use crate::dataset::Dataset;
use crate::error::KMeansError;

/// Checks that run before any numeric work: emptiness, then the centroid
/// count, then column types.
pub fn check_request(dataset: &Dataset, k: usize) -> Result<(), KMeansError> {
    if dataset.is_empty() {
        return Err(KMeansError::EmptyDataset);
    }

    if k == 0 {
        return Err(KMeansError::ZeroCentroids);
    }

    let columns = dataset.non_numeric_columns();
    if !columns.is_empty() {
        return Err(KMeansError::NoNumericColumns { columns });
    }

    Ok(())
}

/// Checked after normalization, against the rows that survived cleaning
pub fn check_capacity(k: usize, available: usize) -> Result<(), KMeansError> {
    if k > available {
        return Err(KMeansError::MoreCentroids {
            requested: k,
            available,
        });
    }

    Ok(())
}
