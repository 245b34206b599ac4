//! Error types for remojo operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for remojo operations.
///
/// Provides detailed context about failures including missing table
/// columns, out-of-domain model inputs, malformed parameters, and
/// non-converged sampling runs.
///
/// # Examples
///
/// ```
/// use remojo::error::RemojoError;
///
/// let err = RemojoError::MissingColumn {
///     column: "biscuit".to_string(),
/// };
/// assert!(err.to_string().contains("biscuit"));
/// ```
#[derive(Debug)]
pub enum RemojoError {
    /// A required table column is absent.
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// A categorical value has no code in the caller-supplied ordering.
    UnknownCategory {
        /// Column the value was found in
        column: String,
        /// The label with no assigned code
        label: String,
    },

    /// Wrong type or shape for an input series.
    InputType {
        /// Expected input description
        expected: String,
        /// Actual input found
        actual: String,
    },

    /// Mathematically invalid model input (e.g. negative radicand).
    Domain {
        /// Description of the violated domain constraint
        message: String,
    },

    /// Invalid parameter value provided.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Two sequences that must agree in length do not.
    ShapeMismatch {
        /// Expected length description
        expected: String,
        /// Actual length found
        actual: String,
    },

    /// Posterior sampling failed to converge across chains.
    ConvergenceFailure {
        /// Number of chains run
        chains: usize,
        /// Worst split potential scale reduction factor observed
        rhat: f64,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RemojoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemojoError::MissingColumn { column } => {
                write!(f, "Missing column: {column:?} does not exist in this table")
            }
            RemojoError::UnknownCategory { column, label } => {
                write!(
                    f,
                    "Unknown category in column {column:?}: label {label:?} is not in the ordering"
                )
            }
            RemojoError::InputType { expected, actual } => {
                write!(f, "Invalid input type: expected {expected}, got {actual}")
            }
            RemojoError::Domain { message } => {
                write!(f, "Domain error: {message}")
            }
            RemojoError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
            RemojoError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {expected}, got {actual}")
            }
            RemojoError::ConvergenceFailure { chains, rhat } => {
                write!(
                    f,
                    "Convergence failure across {chains} chains: split R-hat = {rhat}"
                )
            }
            RemojoError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RemojoError {}

impl From<&str> for RemojoError {
    fn from(msg: &str) -> Self {
        RemojoError::Other(msg.to_string())
    }
}

impl From<String> for RemojoError {
    fn from(msg: String) -> Self {
        RemojoError::Other(msg)
    }
}

impl RemojoError {
    /// Create an invalid parameter error with descriptive context.
    #[must_use]
    pub fn invalid_parameter(param: &str, value: f64, constraint: &str) -> Self {
        Self::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create a shape mismatch error from two lengths.
    #[must_use]
    pub fn shape_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for RemojoError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<RemojoError> for &str {
    fn eq(&self, other: &RemojoError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RemojoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = RemojoError::MissingColumn {
            column: "biscuit".to_string(),
        };
        assert!(err.to_string().contains("Missing column"));
        assert!(err.to_string().contains("biscuit"));
    }

    #[test]
    fn test_unknown_category_display() {
        let err = RemojoError::UnknownCategory {
            column: "biscuit".to_string(),
            label: "bourbon".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Unknown category"));
        assert!(msg.contains("bourbon"));
    }

    #[test]
    fn test_input_type_display() {
        let err = RemojoError::InputType {
            expected: "non-empty finite time series".to_string(),
            actual: "empty slice".to_string(),
        };
        assert!(err.to_string().contains("Invalid input type"));
        assert!(err.to_string().contains("empty slice"));
    }

    #[test]
    fn test_domain_display() {
        let err = RemojoError::Domain {
            message: "negative radicand".to_string(),
        };
        assert!(err.to_string().contains("Domain error"));
        assert!(err.to_string().contains("negative radicand"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = RemojoError::InvalidParameter {
            param: "std".to_string(),
            value: "-0.1".to_string(),
            constraint: "> 0".to_string(),
        };
        assert!(err.to_string().contains("Invalid parameter"));
        assert!(err.to_string().contains("std"));
        assert!(err.to_string().contains("-0.1"));
        assert!(err.to_string().contains("> 0"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = RemojoError::shape_mismatch("priors", 2, 3);
        let msg = err.to_string();
        assert!(msg.contains("Shape mismatch"));
        assert!(msg.contains("priors=2"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_convergence_failure_display() {
        let err = RemojoError::ConvergenceFailure {
            chains: 10,
            rhat: 1.32,
        };
        assert!(err.to_string().contains("Convergence failure"));
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("1.32"));
    }

    #[test]
    fn test_from_str() {
        let err: RemojoError = "test error".into();
        assert!(matches!(err, RemojoError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: RemojoError = "test error".to_string().into();
        assert!(matches!(err, RemojoError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = RemojoError::invalid_parameter("r_low", 2.0, "< r_high");
        let msg = err.to_string();
        assert!(msg.contains("r_low"));
        assert!(msg.contains("2"));
        assert!(msg.contains("< r_high"));
    }

    #[test]
    fn test_error_eq_str() {
        let err = RemojoError::Other("test error".to_string());
        assert!(err == "test error");
        assert!("test error" == err);
    }

    #[test]
    fn test_error_source_none() {
        use std::error::Error;
        let err = RemojoError::Other("test".to_string());
        assert!(err.source().is_none());
    }
}
