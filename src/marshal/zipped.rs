//! Multi-argument zipped evaluation: index-aligned rows with scalar
//! broadcasting.

use crate::errors::{EngineError, Result};
use crate::marshal::classify::{ArgumentSet, ClassifiedArgument, ElementSource};
use crate::marshal::result::ResultContainer;
use crate::math::{NumericValue, Scalar};

/// Applies an N-parameter function row by row across `arguments`.
///
/// If every argument is a scalar, `f` runs once and a scalar is returned.
/// Otherwise the first non-scalar argument fixes the row count `L`, scalars
/// are broadcast to `L` rows, and the result is a flat array of `L` values.
/// Only scalars broadcast: a 0-D array is an array argument of length 1.
///
/// # Errors
///
/// - [`EngineError::RankMismatch`] for a non-scalar array with more than one
///   axis.
/// - [`EngineError::IncompatibleLength`] for a non-scalar argument whose
///   length differs from `L`.
/// - [`EngineError::InvalidElementType`] for a non-numeric list element.
pub fn evaluate_zip<F>(f: F, arguments: &ArgumentSet<'_>) -> Result<ResultContainer>
where
    F: Fn(&[NumericValue]) -> Scalar,
{
    let scalars: Option<Vec<NumericValue>> = arguments
        .iter()
        .map(ClassifiedArgument::broadcast_value)
        .collect();
    if let Some(tuple) = scalars {
        return Ok(ResultContainer::Scalar(f(&tuple)));
    }
    let length = row_count(arguments);

    let columns = arguments
        .iter()
        .enumerate()
        .map(|(position, argument)| column(position, argument, length))
        .collect::<Result<Vec<_>>>()?;

    let mut row = Vec::with_capacity(columns.len());
    let mut results = Vec::with_capacity(length);
    for index in 0..length {
        row.clear();
        row.extend(columns.iter().map(|source| source.at(index)));
        results.push(f(&row));
    }
    Ok(ResultContainer::flat(results))
}

/// Length of the first non-scalar argument, or 0 if there is none.
fn row_count(arguments: &ArgumentSet<'_>) -> usize {
    arguments
        .iter()
        .find(|argument| argument.broadcast_value().is_none())
        .map_or(0, ClassifiedArgument::len)
}

fn column<'a>(
    position: usize,
    argument: &ClassifiedArgument<'a>,
    length: usize,
) -> Result<ElementSource<'a>> {
    if let Some(value) = argument.broadcast_value() {
        return Ok(ElementSource::Repeated(value));
    }
    if let ClassifiedArgument::Array(array) = argument {
        if array.ndim() > 1 {
            return Err(EngineError::RankMismatch {
                argument: position,
                ndim: array.ndim(),
            });
        }
    }
    if argument.len() != length {
        return Err(EngineError::IncompatibleLength {
            argument: position,
            expected: length,
            actual: argument.len(),
        });
    }
    argument.elements()
}
