#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Shared numeric primitives (element variant, dtype, stride helpers).
pub mod math;
/// Caller-side value model.
pub mod host;
/// Classification, layout validation and evaluation strategies.
pub mod marshal;
/// Per-call configuration.
pub mod config;
/// Top-level evaluation entry points.
pub mod engine;
/// Identifier resolution boundary.
pub mod resolve;
/// Boundary to the external physics library.
pub mod backend;
/// Material argument adapter.
pub mod materials;
/// Stopping-power models and electron range.
pub mod stopping;
/// Energy/velocity conversions.
pub mod converters;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
