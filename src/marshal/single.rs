//! Single-argument evaluation: the output mirrors the input's category.

use crate::errors::Result;
use crate::marshal::classify::{sequence_values, ClassifiedArgument};
use crate::marshal::result::ResultContainer;
use crate::math::{NumericValue, Scalar};

/// Applies a one-parameter function to a classified argument.
///
/// Scalars give a scalar, sequences give a sequence of the same length, and
/// arrays give a floating array of identical shape. Every element is checked
/// before `f` is first called.
///
/// # Errors
///
/// Returns [`crate::errors::EngineError::InvalidElementType`] when a sequence
/// holds a non-numeric element.
pub fn evaluate1<F>(f: F, argument: &ClassifiedArgument<'_>) -> Result<ResultContainer>
where
    F: Fn(Scalar) -> Scalar,
{
    map_elements(|value| f(value.as_f64()), argument)
}

/// Like [`evaluate1`], but hands each element over with its numeric kind.
///
/// # Errors
///
/// Same as [`evaluate1`].
pub fn map_elements<F>(f: F, argument: &ClassifiedArgument<'_>) -> Result<ResultContainer>
where
    F: Fn(NumericValue) -> Scalar,
{
    match argument {
        ClassifiedArgument::Scalar(value) => Ok(ResultContainer::Scalar(f(*value))),
        ClassifiedArgument::Sequence(items) => {
            let values = sequence_values(items)?;
            Ok(ResultContainer::Sequence(values.into_iter().map(f).collect()))
        }
        ClassifiedArgument::Array(array) => {
            let data = array.buffer().iter().map(f).collect();
            ResultContainer::array(array.shape().to_vec(), data)
        }
    }
}
