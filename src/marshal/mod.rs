//! Argument marshaling: classification, layout checks and the three
//! evaluation strategies.

/// Caller value classification.
pub mod classify;
/// Row-major layout validation for arrays.
pub mod layout;
/// Output containers.
pub mod result;
/// Single-argument, category-preserving evaluation.
pub mod single;
/// Index-aligned multi-argument evaluation.
pub mod zipped;
/// Cartesian-product multi-argument evaluation.
pub mod cartesian;

pub use cartesian::{evaluate_cartesian, MixedRadixCounter};
pub use classify::{classify, ArgumentSet, ClassifiedArgument, ElementSource, ACCEPTED_INPUTS};
pub use layout::{is_c_contiguous, validate, ContiguousArray, NumericBuffer};
pub use result::{shaped, ResultContainer};
pub use single::{evaluate1, map_elements};
pub use zipped::evaluate_zip;
