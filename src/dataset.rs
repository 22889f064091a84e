use crate::error::KMeansError;
use ndarray::ArrayView2;
use std::collections::HashSet;

/// Typed storage for a single column.
///
/// Missing values are `None` for the optional variants and NaN for `Float`.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<Option<i64>>),
    Float(Vec<f64>),
    Text(Vec<Option<String>>),
    Bool(Vec<Option<bool>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Only integer and floating-point columns can be clustered
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnData::Int(_) | ColumnData::Float(_))
    }

    /// Numeric value at `row`, or `None` when missing, non-finite or non-numeric
    pub(crate) fn value(&self, row: usize) -> Option<f64> {
        match self {
            ColumnData::Int(v) => v[row].map(|x| x as f64),
            ColumnData::Float(v) => Some(v[row]).filter(|x| x.is_finite()),
            ColumnData::Text(_) | ColumnData::Bool(_) => None,
        }
    }
}

/// A named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Integer column without missing values
    pub fn int(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        Self::new(name, ColumnData::Int(values.into_iter().map(Some).collect()))
    }

    /// Floating-point column; NaN marks a missing value
    pub fn float(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(name, ColumnData::Float(values.into_iter().collect()))
    }

    pub fn text<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            name,
            ColumnData::Text(values.into_iter().map(|s| Some(s.into())).collect()),
        )
    }

    pub fn bool(name: impl Into<String>, values: impl IntoIterator<Item = bool>) -> Self {
        Self::new(name, ColumnData::Bool(values.into_iter().map(Some).collect()))
    }
}

/// An ordered table of equally long, uniquely named columns.
///
/// The engine only ever borrows a `Dataset`; normalization works on its own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    /// Build a dataset, checking that every column has the same length and
    /// that column names are unique.
    pub fn new(columns: Vec<Column>) -> Result<Self, KMeansError> {
        let n_rows = columns.first().map_or(0, |c| c.data.len());

        let mut seen = HashSet::new();
        for column in &columns {
            if column.data.len() != n_rows {
                return Err(KMeansError::InvalidDimensions(format!(
                    "Column '{}' has {} rows, expected {}",
                    column.name,
                    column.data.len(),
                    n_rows
                )));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(KMeansError::InvalidDimensions(format!(
                    "Duplicate column name '{}'",
                    column.name
                )));
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Build an all-float dataset from a matrix, one column per name
    pub fn from_array(names: &[&str], data: &ArrayView2<f64>) -> Result<Self, KMeansError> {
        if names.len() != data.ncols() {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} column names, got {}",
                data.ncols(),
                names.len()
            )));
        }

        let columns = names
            .iter()
            .zip(data.columns())
            .map(|(name, values)| Column::float(*name, values.iter().copied()))
            .collect();

        Self::new(columns)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Restrict the dataset to `names`, in that order
    pub fn select(&self, names: &[&str]) -> Result<Self, KMeansError> {
        let columns = names
            .iter()
            .map(|name| {
                self.column(name)
                    .cloned()
                    .ok_or_else(|| KMeansError::UnknownColumn(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(columns)
    }

    /// Names of the columns that are neither integer nor floating point
    pub fn non_numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| !c.data.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }
}
