//! Convenience re-exports for wrapping numeric routines.

pub use crate::backend::PhysicsBackend;
pub use crate::config::{CallConfig, EvaluationMode};
pub use crate::converters::{beta_from_energy, energy_from_beta};
pub use crate::engine::{call, call_unary, evaluate, evaluate_unary};
pub use crate::errors::{EngineError, Result};
pub use crate::host::{Handle, HostArray, HostValue};
pub use crate::marshal::{
    classify, evaluate1, evaluate_cartesian, evaluate_zip, ArgumentSet, ClassifiedArgument,
    ResultContainer,
};
pub use crate::materials::{material_handle, MaterialResolver, LIQUID_WATER};
pub use crate::math::{Dtype, NumericValue, Scalar};
pub use crate::resolve::{resolve_argument, IdentifierResolver};
pub use crate::stopping::{
    electron_range, electron_range_default, model_id, model_names, ModelResolver, StoppingModel,
};
