//! Energy/velocity conversions exposed to the host.

use crate::backend::PhysicsBackend;
use crate::engine::call_unary;
use crate::errors::Result;
use crate::host::HostValue;

/// Computes β from energy per nucleon (MeV/u).
///
/// Accepts a number, a list or an array; the result has the same form.
///
/// # Errors
///
/// Propagates classification, layout and element errors.
pub fn beta_from_energy<B>(backend: &B, input: &HostValue) -> Result<HostValue>
where
    B: PhysicsBackend + ?Sized,
{
    call_unary(|energy| backend.beta_from_energy(energy), input)
}

/// Computes energy per nucleon (MeV/u) from β.
///
/// Accepts a number, a list or an array; the result has the same form.
///
/// # Errors
///
/// Propagates classification, layout and element errors.
pub fn energy_from_beta<B>(backend: &B, input: &HostValue) -> Result<HostValue>
where
    B: PhysicsBackend + ?Sized,
{
    call_unary(|beta| backend.energy_from_beta(beta), input)
}
