//! Host-side value model: what a caller hands to the engine.
//!
//! A host (interpreter binding, FFI shim, test harness) converts its own
//! objects into [`HostValue`] before calling into the engine, and converts the
//! returned value back. Arrays keep their `ndarray` stride metadata so that
//! layout problems surface as errors instead of hidden copies.

use ndarray::ArrayD;

use crate::math::{Dtype, Integer, NumericValue, Scalar};

/// An n-dimensional host array with integer or floating elements.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum HostArray {
    /// Integer-typed array.
    Int(ArrayD<Integer>),
    /// Float-typed array.
    Float(ArrayD<Scalar>),
}

impl HostArray {
    /// Extent of every axis.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Int(a) => a.shape(),
            Self::Float(a) => a.shape(),
        }
    }

    /// Element strides of every axis.
    #[must_use]
    pub fn strides(&self) -> &[isize] {
        match self {
            Self::Int(a) => a.strides(),
            Self::Float(a) => a.strides(),
        }
    }

    /// Number of axes.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Total element count.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Int(a) => a.len(),
            Self::Float(a) => a.len(),
        }
    }

    /// True if the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type.
    #[must_use]
    pub const fn dtype(&self) -> Dtype {
        match self {
            Self::Int(_) => Dtype::Int,
            Self::Float(_) => Dtype::Float,
        }
    }
}

/// Opaque host object that exposes an integer `id`, e.g. a `Material`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle {
    /// Host class name of the object.
    pub kind: String,
    /// Integer code carried by the object.
    pub id: Integer,
}

impl Handle {
    /// Creates a handle of the given kind.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: Integer) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }
}

/// A caller-supplied value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// The host's null value.
    None,
    /// Integer scalar.
    Int(Integer),
    /// Floating scalar.
    Float(Scalar),
    /// Text.
    Str(String),
    /// Ordered list of arbitrary values.
    List(Vec<HostValue>),
    /// N-dimensional numeric array.
    Array(HostArray),
    /// Object handle carrying an integer code.
    Handle(Handle),
}

impl HostValue {
    /// Host type name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Array(HostArray::Int(_)) => "int array",
            Self::Array(HostArray::Float(_)) => "float array",
            Self::Handle(_) => "handle",
        }
    }

    /// Returns the floating value for numeric scalars.
    #[must_use]
    pub fn as_f64(&self) -> Option<Scalar> {
        match self {
            Self::Int(v) => Some(*v as Scalar),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrows the list elements, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[HostValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrows the array, if this is an array.
    #[must_use]
    pub const fn as_array(&self) -> Option<&HostArray> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl From<Scalar> for HostValue {
    fn from(value: Scalar) -> Self {
        Self::Float(value)
    }
}

impl From<Integer> for HostValue {
    fn from(value: Integer) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for HostValue {
    fn from(value: i32) -> Self {
        Self::Int(Integer::from(value))
    }
}

impl From<NumericValue> for HostValue {
    fn from(value: NumericValue) -> Self {
        match value {
            NumericValue::Int(v) => Self::Int(v),
            NumericValue::Float(v) => Self::Float(v),
        }
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Handle> for HostValue {
    fn from(value: Handle) -> Self {
        Self::Handle(value)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<ArrayD<Scalar>> for HostValue {
    fn from(array: ArrayD<Scalar>) -> Self {
        Self::Array(HostArray::Float(array))
    }
}

impl From<ArrayD<Integer>> for HostValue {
    fn from(array: ArrayD<Integer>) -> Self {
        Self::Array(HostArray::Int(array))
    }
}
