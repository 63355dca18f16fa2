//! Error types shared by every marshaling entry point.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

/// Top-level error type for the crate.
///
/// The set is closed. `UnknownIdentifier` comes from identifier resolvers
/// and is propagated unchanged. `ShapeMismatch` signals a broken internal
/// invariant and is never caused by caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A caller value has a type the receiving position cannot accept.
    #[error("input must be {expected}; got {actual}")]
    UnsupportedType {
        /// What the position accepts.
        expected: &'static str,
        /// Host type name of the rejected value.
        actual: String,
    },
    /// An array argument is not laid out in row-major order.
    #[error(
        "array with shape {shape:?} and strides {strides:?} is not C-contiguous; \
         make a contiguous copy of the array before passing it"
    )]
    NonContiguousLayout {
        /// Shape of the rejected array.
        shape: Vec<usize>,
        /// Element strides of the rejected array.
        strides: Vec<isize>,
    },
    /// A list element is not an int or a float.
    #[error("list element at position {position} must be an int or a float; got {actual}")]
    InvalidElementType {
        /// Zero-based position of the offending element.
        position: usize,
        /// Host type name of the offending element.
        actual: String,
    },
    /// Zipped arguments disagree in length.
    #[error("incompatible lists/arrays size for argument {argument}: expected {expected}, got {actual}")]
    IncompatibleLength {
        /// Zero-based argument position.
        argument: usize,
        /// Length set by the first non-scalar argument.
        expected: usize,
        /// Length of this argument.
        actual: usize,
    },
    /// A zipped array argument has more than one axis.
    #[error("array argument {argument} must be 1-D for element-wise evaluation; got {ndim} axes")]
    RankMismatch {
        /// Zero-based argument position.
        argument: usize,
        /// Number of axes of the rejected array.
        ndim: usize,
    },
    /// An identifier resolver could not map a value to a code.
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),
    /// A cartesian product has more combinations than can be stored.
    #[error("cartesian product of shape {shape:?} has too many elements to store")]
    TooManyElements {
        /// Concatenated shape of the requested product.
        shape: Vec<usize>,
    },
    /// An output buffer does not fill its shape.
    #[error("internal error: {len} results do not fill an output of shape {shape:?}")]
    ShapeMismatch {
        /// Shape the output was built with.
        shape: Vec<usize>,
        /// Number of results produced.
        len: usize,
    },
}

impl EngineError {
    /// Builds an [`EngineError::UnsupportedType`] from a host type name.
    pub(crate) fn unsupported(expected: &'static str, actual: impl Into<String>) -> Self {
        Self::UnsupportedType {
            expected,
            actual: actual.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_error_names_the_remedy() {
        let err = EngineError::NonContiguousLayout {
            shape: vec![3, 2],
            strides: vec![1, 3],
        };
        let printed = err.to_string();
        assert!(
            printed.contains("contiguous copy"),
            "expected remedy in message, got {printed}"
        );
    }

    #[test]
    fn type_error_names_accepted_inputs() {
        let err = EngineError::unsupported("an int or a float", "str");
        assert_eq!(err.to_string(), "input must be an int or a float; got str");
    }

    #[test]
    fn length_error_reports_both_lengths() {
        let err = EngineError::IncompatibleLength {
            argument: 1,
            expected: 3,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "incompatible lists/arrays size for argument 1: expected 3, got 4"
        );
    }

    #[test]
    fn internal_shape_error_does_not_blame_an_argument() {
        let err = EngineError::ShapeMismatch {
            shape: vec![2, 2],
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "internal error: 3 results do not fill an output of shape [2, 2]"
        );
    }
}
