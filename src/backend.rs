//! Boundary to the external numerics library.
//!
//! The physics routines are supplied by the host build (for instance a
//! binding to a C library). The engine only needs them as plain functions.

use crate::math::{Integer, Scalar};

/// Numeric routines provided by the external physics library.
pub trait PhysicsBackend {
    /// Relativistic speed β for a kinetic energy per nucleon in MeV/u.
    fn beta_from_energy(&self, energy_mev_u: Scalar) -> Scalar;

    /// Kinetic energy per nucleon in MeV/u for a relativistic speed β.
    fn energy_from_beta(&self, beta: Scalar) -> Scalar;

    /// Maximum delta-electron range in meters.
    ///
    /// `material` is a material code and `model` a stopping model code.
    fn max_electron_range(&self, energy_mev_u: Scalar, material: Integer, model: Integer) -> Scalar;
}
