//! Identifier resolution boundary.
//!
//! Material and model arguments arrive as names, codes or host objects. A
//! resolver turns each one into an integer code; after that the engine treats
//! the argument like any other integer-typed argument.

use crate::errors::Result;
use crate::host::{HostArray, HostValue};
use crate::marshal::{shaped, validate};
use crate::math::Integer;

/// Maps one caller value to an integer code.
///
/// Implementations must be total: every input yields a code or an error.
pub trait IdentifierResolver {
    /// Resolves a single identifier.
    ///
    /// # Errors
    ///
    /// Implementations return [`crate::errors::EngineError::UnknownIdentifier`]
    /// for well-typed but unknown identifiers and
    /// [`crate::errors::EngineError::UnsupportedType`] for values they cannot
    /// interpret at all.
    fn resolve(&self, value: &HostValue) -> Result<Integer>;
}

impl<F> IdentifierResolver for F
where
    F: Fn(&HostValue) -> Result<Integer>,
{
    fn resolve(&self, value: &HostValue) -> Result<Integer> {
        self(value)
    }
}

/// Resolves a possibly multi-valued identifier argument.
///
/// Scalars resolve once. Lists and arrays resolve element by element and keep
/// their category and shape, producing integer lists and integer arrays.
/// Arrays must pass layout validation first.
///
/// # Errors
///
/// Propagates layout errors and the first resolver error.
pub fn resolve_argument<R>(resolver: &R, value: &HostValue) -> Result<HostValue>
where
    R: IdentifierResolver + ?Sized,
{
    match value {
        HostValue::List(items) => items
            .iter()
            .map(|item| resolver.resolve(item).map(HostValue::Int))
            .collect::<Result<Vec<_>>>()
            .map(HostValue::List),
        HostValue::Array(array) => {
            let view = validate(array)?;
            let codes = view
                .buffer()
                .iter()
                .map(|element| resolver.resolve(&HostValue::from(element)))
                .collect::<Result<Vec<_>>>()?;
            shaped(view.shape(), codes).map(|codes| HostValue::Array(HostArray::Int(codes)))
        }
        scalar => resolver.resolve(scalar).map(HostValue::Int),
    }
}
