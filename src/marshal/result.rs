//! Output containers produced by the evaluators.

use ndarray::{Array1, ArrayD, IxDyn};

use crate::errors::{EngineError, Result};
use crate::host::{HostArray, HostValue};
use crate::math::Scalar;

/// Reassembles a row-major buffer into an array of `shape`.
///
/// Callers guarantee that `data` holds exactly the element count of `shape`.
///
/// # Errors
///
/// Returns [`EngineError::ShapeMismatch`] if that invariant is broken.
pub fn shaped<T>(shape: &[usize], data: Vec<T>) -> Result<ArrayD<T>> {
    let len = data.len();
    ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| EngineError::ShapeMismatch {
        shape: shape.to_vec(),
        len,
    })
}

/// Result of one evaluation, shaped after the dominant input category.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ResultContainer {
    /// A single number.
    Scalar(Scalar),
    /// A list, mirroring a list input.
    Sequence(Vec<Scalar>),
    /// A floating array.
    Array(ArrayD<Scalar>),
}

impl ResultContainer {
    /// Builds an array result from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ShapeMismatch`] if `data` does not hold exactly
    /// the element count of `shape`.
    pub fn array(shape: Vec<usize>, data: Vec<Scalar>) -> Result<Self> {
        shaped(&shape, data).map(Self::Array)
    }

    /// Builds a flat 1-D array result.
    #[must_use]
    pub fn flat(data: Vec<Scalar>) -> Self {
        Self::Array(Array1::from(data).into_dyn())
    }

    /// The empty 1-D array, shape `[0]`.
    #[must_use]
    pub fn empty() -> Self {
        Self::flat(Vec::new())
    }

    /// Shape of the result. Scalars have the empty shape.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Scalar(_) => Vec::new(),
            Self::Sequence(values) => vec![values.len()],
            Self::Array(array) => array.shape().to_vec(),
        }
    }

    /// Total number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Sequence(values) => values.len(),
            Self::Array(array) => array.len(),
        }
    }

    /// True if the result holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value of a scalar result.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// All values in row-major order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Scalar> {
        match self {
            Self::Scalar(value) => vec![*value],
            Self::Sequence(values) => values.clone(),
            Self::Array(array) => array.iter().copied().collect(),
        }
    }
}

impl From<ResultContainer> for HostValue {
    fn from(result: ResultContainer) -> Self {
        match result {
            ResultContainer::Scalar(value) => Self::Float(value),
            ResultContainer::Sequence(values) => {
                Self::List(values.into_iter().map(Self::Float).collect())
            }
            ResultContainer::Array(array) => Self::Array(HostArray::Float(array)),
        }
    }
}
