//! Shared numeric primitives: the element variant passed to wrapped functions.

/// Primary floating scalar type used across the crate.
pub type Scalar = f64;
/// Integer element type used for codes and integer arrays.
pub type Integer = i64;

/// Element type of an array argument.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dtype {
    /// Signed integer elements.
    Int,
    /// Floating point elements.
    Float,
}

/// A single numeric argument value, either integer or floating.
///
/// Multi-argument functions receive a slice of these so that integer codes
/// (material, model) keep their integer identity next to floating energies.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// Integer value.
    Int(Integer),
    /// Floating value.
    Float(Scalar),
}

impl NumericValue {
    /// Returns the value as a float, converting integers.
    #[must_use]
    pub fn as_f64(self) -> Scalar {
        match self {
            Self::Int(v) => v as Scalar,
            Self::Float(v) => v,
        }
    }

    /// Returns the value as an integer, truncating floats toward zero.
    #[must_use]
    pub fn as_i64(self) -> Integer {
        match self {
            Self::Int(v) => v,
            Self::Float(v) => v as Integer,
        }
    }

    /// Element type of this value.
    #[must_use]
    pub const fn dtype(self) -> Dtype {
        match self {
            Self::Int(_) => Dtype::Int,
            Self::Float(_) => Dtype::Float,
        }
    }
}

impl From<Scalar> for NumericValue {
    fn from(value: Scalar) -> Self {
        Self::Float(value)
    }
}

impl From<Integer> for NumericValue {
    fn from(value: Integer) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for NumericValue {
    fn from(value: i32) -> Self {
        Self::Int(Integer::from(value))
    }
}

/// Number of elements described by `shape`, or `None` when the count
/// overflows `usize`. The empty shape holds one element.
///
/// A zero extent anywhere gives `Some(0)`, whatever the other extents are.
#[must_use]
pub fn checked_element_count(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }
    shape
        .iter()
        .try_fold(1_usize, |count, &extent| count.checked_mul(extent))
}

/// Row-major element strides for `shape`, accumulated right to left.
#[must_use]
pub fn c_strides(shape: &[usize]) -> Vec<isize> {
    let mut strides = vec![0; shape.len()];
    let mut expected = 1_isize;
    for (axis, &extent) in shape.iter().enumerate().rev() {
        strides[axis] = expected;
        expected = expected.saturating_mul(extent as isize);
    }
    strides
}
