//! Tabular observation data for absorption experiments.
//!
//! Provides a minimal named-column [`DataFrame`] with numeric and
//! categorical columns, the categorical encoder used to turn sample labels
//! into dense integer codes, a typed [`Observations`] set consumed by the
//! likelihood and inference driver, and the per-sample posterior
//! [`SummaryTable`] the variant models read their fixed radius from.
//!
//! Heavy data wrangling should be delegated to an external table engine;
//! this module holds only what the fitting workflow needs.

use serde::{Deserialize, Serialize};

use crate::error::{RemojoError, Result};

/// A single named column: either numeric measurements or sample labels.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Floating-point measurements.
    Numeric(Vec<f64>),
    /// Nominal labels, e.g. biscuit names.
    Categorical(Vec<String>),
}

impl Column {
    /// Number of rows in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
        }
    }

    /// True if the column has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A minimal table with named columns.
///
/// # Examples
///
/// ```
/// use remojo::data::{Column, DataFrame};
///
/// let df = DataFrame::new(vec![
///     ("t".to_string(), Column::Numeric(vec![1.0, 2.0, 3.0])),
///     (
///         "biscuit".to_string(),
///         Column::Categorical(vec![
///             "digestive".to_string(),
///             "rich_tea".to_string(),
///             "hobnob".to_string(),
///         ]),
///     ),
/// ])
/// .unwrap();
/// assert_eq!(df.shape(), (3, 2));
/// ```
#[derive(Debug, Clone)]
pub struct DataFrame {
    columns: Vec<(String, Column)>,
    n_rows: usize,
}

impl DataFrame {
    /// Creates a new `DataFrame` from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns, columns have different
    /// lengths, a name is empty, or names are duplicated.
    pub fn new(columns: Vec<(String, Column)>) -> Result<Self> {
        if columns.is_empty() {
            return Err("DataFrame must have at least one column".into());
        }

        let n_rows = columns[0].1.len();

        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err("All columns must have the same length".into());
            }
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
        }

        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err("Duplicate column names not allowed".into());
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns a reference to a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::MissingColumn`] if the column doesn't exist.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| RemojoError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// Returns a numeric column by name.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::MissingColumn`] if absent, or
    /// [`RemojoError::InputType`] if the column holds labels.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        match self.column(name)? {
            Column::Numeric(v) => Ok(v),
            Column::Categorical(_) => Err(RemojoError::InputType {
                expected: format!("numeric column {name:?}"),
                actual: "categorical column".to_string(),
            }),
        }
    }

    /// Returns a categorical column by name.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::MissingColumn`] if absent, or
    /// [`RemojoError::InputType`] if the column holds numbers.
    pub fn categorical(&self, name: &str) -> Result<&[String]> {
        match self.column(name)? {
            Column::Categorical(v) => Ok(v),
            Column::Numeric(_) => Err(RemojoError::InputType {
                expected: format!("categorical column {name:?}"),
                actual: "numeric column".to_string(),
            }),
        }
    }

    /// Adds a new column to the `DataFrame`.
    ///
    /// # Errors
    ///
    /// Returns an error if column length doesn't match or name already
    /// exists.
    pub fn add_column(&mut self, name: String, column: Column) -> Result<()> {
        if column.len() != self.n_rows {
            return Err("Column length must match existing rows".into());
        }
        if self.columns.iter().any(|(n, _)| n == &name) {
            return Err("Column name already exists".into());
        }
        if name.is_empty() {
            return Err("Column name cannot be empty".into());
        }

        self.columns.push((name, column));
        Ok(())
    }

    /// Drops a column by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the column doesn't exist or is the last column.
    pub fn drop_column(&mut self, name: &str) -> Result<()> {
        if self.columns.len() == 1 {
            return Err("Cannot drop the last column".into());
        }

        let idx = self
            .columns
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| RemojoError::MissingColumn {
                column: name.to_string(),
            })?;

        self.columns.remove(idx);
        Ok(())
    }

    /// Encodes a categorical column to dense integer codes.
    ///
    /// Appends a numeric column named `encoded <name>` where each row's
    /// code equals the index of that row's label in `ordering`. Codes are
    /// stable for a fixed ordering and unique per label.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::MissingColumn`] if the column is absent,
    /// [`RemojoError::InputType`] if it is numeric, and
    /// [`RemojoError::UnknownCategory`] if any row's label does not appear
    /// in `ordering`. Unmatched labels are rejected, never mapped to a
    /// default code.
    ///
    /// # Example
    ///
    /// ```
    /// use remojo::data::{Column, DataFrame};
    ///
    /// let mut df = DataFrame::new(vec![(
    ///     "biscuit".to_string(),
    ///     Column::Categorical(vec![
    ///         "digestive".to_string(),
    ///         "rich_tea".to_string(),
    ///         "hobnob".to_string(),
    ///     ]),
    /// )])
    /// .unwrap();
    ///
    /// df.encode_category("biscuit", &["rich_tea", "digestive", "hobnob"])
    ///     .unwrap();
    /// assert_eq!(
    ///     df.numeric("encoded biscuit").unwrap(),
    ///     &[1.0, 0.0, 2.0]
    /// );
    /// ```
    pub fn encode_category(&mut self, name: &str, ordering: &[&str]) -> Result<()> {
        let labels = self.categorical(name)?;

        let mut codes = Vec::with_capacity(labels.len());
        for label in labels {
            let code = ordering
                .iter()
                .position(|&known| known == label)
                .ok_or_else(|| RemojoError::UnknownCategory {
                    column: name.to_string(),
                    label: label.clone(),
                })?;
            #[allow(clippy::cast_precision_loss)]
            codes.push(code as f64);
        }

        self.add_column(format!("encoded {name}"), Column::Numeric(codes))
    }
}

/// A validated set of time-resolved absorption observations.
///
/// Invariants, checked at construction: all series have the same non-zero
/// length, every value is finite, `t >= 0`, and `depth_err > 0` (required
/// by the Gaussian likelihood).
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    t: Vec<f64>,
    depth: Vec<f64>,
    depth_err: Vec<f64>,
}

impl Observations {
    /// Creates a validated observation set.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::ShapeMismatch`] for unequal lengths,
    /// [`RemojoError::InputType`] for an empty set, and
    /// [`RemojoError::InvalidParameter`] for non-finite values, negative
    /// times, or non-positive uncertainties.
    pub fn new(t: Vec<f64>, depth: Vec<f64>, depth_err: Vec<f64>) -> Result<Self> {
        if t.is_empty() {
            return Err(RemojoError::InputType {
                expected: "non-empty observation set".to_string(),
                actual: "0 rows".to_string(),
            });
        }
        if depth.len() != t.len() {
            return Err(RemojoError::shape_mismatch("t", t.len(), depth.len()));
        }
        if depth_err.len() != t.len() {
            return Err(RemojoError::shape_mismatch("t", t.len(), depth_err.len()));
        }

        for &ti in &t {
            if !ti.is_finite() || ti < 0.0 {
                return Err(RemojoError::invalid_parameter("t", ti, "finite and >= 0"));
            }
        }
        for &li in &depth {
            if !li.is_finite() {
                return Err(RemojoError::invalid_parameter("L", li, "finite"));
            }
        }
        for &ei in &depth_err {
            if !ei.is_finite() || ei <= 0.0 {
                return Err(RemojoError::invalid_parameter("dL", ei, "finite and > 0"));
            }
        }

        Ok(Self {
            t,
            depth,
            depth_err,
        })
    }

    /// Extracts an observation set from a [`DataFrame`].
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::MissingColumn`] if a column is absent, plus
    /// the validation errors of [`Observations::new`].
    pub fn from_frame(df: &DataFrame, t_col: &str, depth_col: &str, err_col: &str) -> Result<Self> {
        Self::new(
            df.numeric(t_col)?.to_vec(),
            df.numeric(depth_col)?.to_vec(),
            df.numeric(err_col)?.to_vec(),
        )
    }

    /// Extracts the observations of a single sample from a [`DataFrame`],
    /// keeping only rows whose label matches.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::MissingColumn`] if a column is absent,
    /// [`RemojoError::UnknownCategory`] if no row carries the label, plus
    /// the validation errors of [`Observations::new`].
    pub fn from_frame_filtered(
        df: &DataFrame,
        t_col: &str,
        depth_col: &str,
        err_col: &str,
        label_col: &str,
        label: &str,
    ) -> Result<Self> {
        let labels = df.categorical(label_col)?;
        let t = df.numeric(t_col)?;
        let depth = df.numeric(depth_col)?;
        let depth_err = df.numeric(err_col)?;

        let keep: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.as_str() == label)
            .map(|(i, _)| i)
            .collect();

        if keep.is_empty() {
            return Err(RemojoError::UnknownCategory {
                column: label_col.to_string(),
                label: label.to_string(),
            });
        }

        Self::new(
            keep.iter().map(|&i| t[i]).collect(),
            keep.iter().map(|&i| depth[i]).collect(),
            keep.iter().map(|&i| depth_err[i]).collect(),
        )
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// True if the set is empty. Never true for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Elapsed times, s.
    #[must_use]
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Observed penetration depths, m.
    #[must_use]
    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    /// Per-observation measurement uncertainties, m.
    #[must_use]
    pub fn depth_err(&self) -> &[f64] {
        &self.depth_err
    }
}

/// Posterior pore-radius summary for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Sample label, e.g. the biscuit name.
    pub label: String,
    /// Posterior mean of the pore radius, m.
    pub mean: f64,
    /// Posterior standard deviation of the pore radius, m.
    pub std: f64,
}

/// Per-sample posterior summaries keyed by label.
///
/// Produced by the inference driver and threaded explicitly into the
/// variant models; the models never read ambient state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    entries: Vec<SampleSummary>,
}

impl SummaryTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sample summary.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::InvalidParameter`] for a non-finite mean or a
    /// non-positive standard deviation, and an error if the label is
    /// already present.
    pub fn push(&mut self, summary: SampleSummary) -> Result<()> {
        if !summary.mean.is_finite() {
            return Err(RemojoError::invalid_parameter(
                "mean",
                summary.mean,
                "finite",
            ));
        }
        if !summary.std.is_finite() || summary.std <= 0.0 {
            return Err(RemojoError::invalid_parameter("std", summary.std, "> 0"));
        }
        if self.get(&summary.label).is_some() {
            return Err(format!("duplicate summary for sample {:?}", summary.label).into());
        }
        self.entries.push(summary);
        Ok(())
    }

    /// Looks up the summary for a sample label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&SampleSummary> {
        self.entries.iter().find(|s| s.label == label)
    }

    /// Number of samples summarized.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no samples are summarized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the summaries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SampleSummary> {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
