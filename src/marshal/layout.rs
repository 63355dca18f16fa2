//! Contiguity and shape validation for array arguments.
//!
//! An array is accepted only when its buffer is row-major: the last axis has
//! stride 1 and every preceding axis has a stride equal to the product of the
//! extents after it. Arrays with no elements are always accepted. Anything
//! else is rejected rather than copied, since a silent copy would hide a
//! caller-side layout bug.

use crate::errors::{EngineError, Result};
use crate::host::HostArray;
use crate::math::{c_strides, Dtype, Integer, NumericValue, Scalar};

/// Returns `true` when `strides` describe a row-major buffer for `shape`.
#[must_use]
pub fn is_c_contiguous(shape: &[usize], strides: &[isize]) -> bool {
    if shape.contains(&0) {
        return true;
    }
    shape.len() == strides.len() && strides == c_strides(shape).as_slice()
}

/// Read-only flat view over a validated array buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericBuffer<'a> {
    /// Integer elements in storage order.
    Int(&'a [Integer]),
    /// Float elements in storage order.
    Float(&'a [Scalar]),
}

impl<'a> NumericBuffer<'a> {
    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Int(data) => data.len(),
            Self::Float(data) => data.len(),
        }
    }

    /// True if the buffer holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type of the buffer.
    #[must_use]
    pub const fn dtype(&self) -> Dtype {
        match self {
            Self::Int(_) => Dtype::Int,
            Self::Float(_) => Dtype::Float,
        }
    }

    /// Element at flat position `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<NumericValue> {
        match self {
            Self::Int(data) => data.get(index).copied().map(NumericValue::Int),
            Self::Float(data) => data.get(index).copied().map(NumericValue::Float),
        }
    }

    /// Element at flat position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn at(&self, index: usize) -> NumericValue {
        match self {
            Self::Int(data) => NumericValue::Int(data[index]),
            Self::Float(data) => NumericValue::Float(data[index]),
        }
    }

    /// Iterates elements in storage order.
    pub fn iter(&self) -> impl Iterator<Item = NumericValue> + 'a {
        let buffer = *self;
        (0..buffer.len()).map(move |index| buffer.at(index))
    }
}

/// A validated array argument: flat buffer plus the shape needed to rebuild
/// output arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ContiguousArray<'a> {
    buffer: NumericBuffer<'a>,
    shape: Vec<usize>,
}

impl<'a> ContiguousArray<'a> {
    /// Flat element buffer in row-major order.
    #[must_use]
    pub const fn buffer(&self) -> NumericBuffer<'a> {
        self.buffer
    }

    /// Extent of every axis.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total element count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True if the array holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Validates the layout of `array` and exposes its flat buffer.
///
/// # Errors
///
/// Returns [`EngineError::NonContiguousLayout`] when the strides do not
/// describe a row-major buffer.
pub fn validate(array: &HostArray) -> Result<ContiguousArray<'_>> {
    let shape = array.shape();
    let strides = array.strides();
    if !is_c_contiguous(shape, strides) {
        tracing::debug!(?shape, ?strides, "rejecting non-contiguous array");
        return Err(non_contiguous(array));
    }
    let buffer = match array {
        HostArray::Int(a) => a.as_slice().map(NumericBuffer::Int),
        HostArray::Float(a) => a.as_slice().map(NumericBuffer::Float),
    }
    .ok_or_else(|| non_contiguous(array))?;
    Ok(ContiguousArray {
        buffer,
        shape: shape.to_vec(),
    })
}

fn non_contiguous(array: &HostArray) -> EngineError {
    EngineError::NonContiguousLayout {
        shape: array.shape().to_vec(),
        strides: array.strides().to_vec(),
    }
}
