//! Argument classification: one explicit tag per caller value, decided once.

use crate::errors::{EngineError, Result};
use crate::host::HostValue;
use crate::marshal::layout::{self, ContiguousArray, NumericBuffer};
use crate::math::{Dtype, NumericValue};

/// A caller value after classification.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedArgument<'a> {
    /// A single number.
    Scalar(NumericValue),
    /// An ordered list. Elements are type-checked when expanded.
    Sequence(&'a [HostValue]),
    /// A validated row-major array.
    Array(ContiguousArray<'a>),
}

impl<'a> ClassifiedArgument<'a> {
    /// Number of elements this argument supplies.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Sequence(items) => items.len(),
            Self::Array(array) => array.len(),
        }
    }

    /// True if the argument supplies no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape this argument contributes to a cartesian output.
    ///
    /// Scalars (and 0-D arrays) contribute no axis.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Scalar(_) => Vec::new(),
            Self::Sequence(items) => vec![items.len()],
            Self::Array(array) => array.shape().to_vec(),
        }
    }

    /// Element type, where it is fixed by the container.
    ///
    /// Sequences may mix integers and floats, so they report `None`.
    #[must_use]
    pub const fn dtype(&self) -> Option<Dtype> {
        match self {
            Self::Scalar(value) => Some(value.dtype()),
            Self::Sequence(_) => None,
            Self::Array(array) => Some(array.buffer().dtype()),
        }
    }

    /// The value of a scalar argument, which broadcasts freely.
    ///
    /// Arrays never broadcast, including 0-D arrays: they supply one element.
    #[must_use]
    pub const fn broadcast_value(&self) -> Option<NumericValue> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Expands the argument into an indexable element source.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidElementType`] for the first sequence
    /// element that is not an int or a float.
    pub fn elements(&self) -> Result<ElementSource<'a>> {
        Ok(match self {
            Self::Scalar(value) => ElementSource::Repeated(*value),
            Self::Sequence(items) => ElementSource::Owned(sequence_values(items)?),
            Self::Array(array) => ElementSource::Buffer(array.buffer()),
        })
    }
}

/// Indexable elements of one argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementSource<'a> {
    /// One value standing in for every index.
    Repeated(NumericValue),
    /// Values coerced from a sequence.
    Owned(Vec<NumericValue>),
    /// Values read straight from an array buffer.
    Buffer(NumericBuffer<'a>),
}

impl ElementSource<'_> {
    /// Element at `index`. A repeated value answers every index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<NumericValue> {
        match self {
            Self::Repeated(value) => Some(*value),
            Self::Owned(values) => values.get(index).copied(),
            Self::Buffer(buffer) => buffer.get(index),
        }
    }

    /// Element at `index`, for indices already checked against the argument
    /// length.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for an owned or buffered source.
    #[must_use]
    pub fn at(&self, index: usize) -> NumericValue {
        match self {
            Self::Repeated(value) => *value,
            Self::Owned(values) => values[index],
            Self::Buffer(buffer) => buffer.at(index),
        }
    }
}

/// Inputs accepted by the classifier, as named in type errors.
pub const ACCEPTED_INPUTS: &str = "an int, float, list, or numeric array";

/// Converts one sequence element to a number.
///
/// # Errors
///
/// Returns [`EngineError::InvalidElementType`] naming `position`.
pub fn numeric_element(position: usize, value: &HostValue) -> Result<NumericValue> {
    match value {
        HostValue::Int(v) => Ok(NumericValue::Int(*v)),
        HostValue::Float(v) => Ok(NumericValue::Float(*v)),
        other => Err(EngineError::InvalidElementType {
            position,
            actual: other.type_name().to_owned(),
        }),
    }
}

/// Converts every sequence element, failing on the first non-numeric one.
///
/// # Errors
///
/// Returns [`EngineError::InvalidElementType`] for the first bad element.
pub fn sequence_values(items: &[HostValue]) -> Result<Vec<NumericValue>> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| numeric_element(position, item))
        .collect()
}

/// Classifies one caller value.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedType`] for values that are not numbers,
/// lists or arrays, and [`EngineError::NonContiguousLayout`] for arrays that
/// fail layout validation.
pub fn classify(value: &HostValue) -> Result<ClassifiedArgument<'_>> {
    match value {
        HostValue::Int(v) => Ok(ClassifiedArgument::Scalar(NumericValue::Int(*v))),
        HostValue::Float(v) => Ok(ClassifiedArgument::Scalar(NumericValue::Float(*v))),
        HostValue::List(items) => Ok(ClassifiedArgument::Sequence(items)),
        HostValue::Array(array) => layout::validate(array).map(ClassifiedArgument::Array),
        other => Err(EngineError::unsupported(ACCEPTED_INPUTS, other.type_name())),
    }
}

/// Classified arguments, one per parameter position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentSet<'a> {
    arguments: Vec<ClassifiedArgument<'a>>,
}

impl<'a> ArgumentSet<'a> {
    /// Classifies every value in order, stopping at the first failure.
    ///
    /// Values are borrowed, so a slice of values and an array of references
    /// both work.
    ///
    /// # Errors
    ///
    /// Propagates the first classification error.
    pub fn classify<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a HostValue>,
    {
        let arguments = values
            .into_iter()
            .map(classify)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { arguments })
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// True if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Arguments in parameter order.
    #[must_use]
    pub fn as_slice(&self) -> &[ClassifiedArgument<'a>] {
        &self.arguments
    }

    /// Iterates arguments in parameter order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedArgument<'a>> {
        self.arguments.iter()
    }

    /// True if every argument is a scalar.
    #[must_use]
    pub fn is_all_scalar(&self) -> bool {
        self.arguments
            .iter()
            .all(|argument| argument.broadcast_value().is_some())
    }
}

impl<'a> From<Vec<ClassifiedArgument<'a>>> for ArgumentSet<'a> {
    fn from(arguments: Vec<ClassifiedArgument<'a>>) -> Self {
        Self { arguments }
    }
}

impl<'s, 'a> IntoIterator for &'s ArgumentSet<'a> {
    type Item = &'s ClassifiedArgument<'a>;
    type IntoIter = std::slice::Iter<'s, ClassifiedArgument<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.iter()
    }
}
