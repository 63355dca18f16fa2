//! Material arguments: integer codes or host `Material` handles.
//!
//! Material tables live in the external numerics library. This module only
//! adapts caller values into the integer code that library expects.

use crate::errors::{EngineError, Result};
use crate::host::{Handle, HostValue};
use crate::math::Integer;
use crate::resolve::IdentifierResolver;

/// Code of liquid water, the default material.
pub const LIQUID_WATER: Integer = 1;
/// Host class name of material handles.
pub const MATERIAL_KIND: &str = "Material";

const ACCEPTED_MATERIALS: &str = "an integer or a Material object";

/// Creates a host handle for the material with code `id`.
#[must_use]
pub fn material_handle(id: Integer) -> Handle {
    Handle::new(MATERIAL_KIND, id)
}

/// Passes material codes through and unwraps `Material` handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialResolver;

impl IdentifierResolver for MaterialResolver {
    fn resolve(&self, value: &HostValue) -> Result<Integer> {
        match value {
            HostValue::Int(code) => Ok(*code),
            HostValue::Handle(handle) if handle.kind == MATERIAL_KIND => Ok(handle.id),
            HostValue::Handle(handle) => Err(EngineError::unsupported(
                ACCEPTED_MATERIALS,
                format!("{} handle", handle.kind),
            )),
            other => Err(EngineError::unsupported(ACCEPTED_MATERIALS, other.type_name())),
        }
    }
}
