//! Stopping-power models and the electron range entry point.

use std::fmt;
use std::str::FromStr;

use crate::backend::PhysicsBackend;
use crate::config::{CallConfig, EvaluationMode};
use crate::engine::{call, call_unary};
use crate::errors::{EngineError, Result};
use crate::host::HostValue;
use crate::materials::{MaterialResolver, LIQUID_WATER};
use crate::math::Integer;
use crate::resolve::{resolve_argument, IdentifierResolver};

/// Electron range models understood by the external library.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum StoppingModel {
    /// Butts & Katz.
    ButtsKatz,
    /// Waligorski.
    Waligorski,
    /// Geiss.
    Geiss,
    /// Scholz.
    Scholz,
    /// Edmund.
    Edmund,
    /// Tabata.
    #[default]
    Tabata,
    /// Updated Scholz.
    ScholzNew,
}

impl StoppingModel {
    /// Every model, ordered by name.
    pub const ALL: [Self; 7] = [
        Self::ButtsKatz,
        Self::Edmund,
        Self::Geiss,
        Self::Scholz,
        Self::ScholzNew,
        Self::Tabata,
        Self::Waligorski,
    ];

    /// Host-facing name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ButtsKatz => "butts_katz",
            Self::Waligorski => "waligorski",
            Self::Geiss => "geiss",
            Self::Scholz => "scholz",
            Self::Edmund => "edmund",
            Self::Tabata => "tabata",
            Self::ScholzNew => "scholz_new",
        }
    }

    /// Code passed to the external library.
    #[must_use]
    pub const fn id(self) -> Integer {
        match self {
            Self::ButtsKatz => 2,
            Self::Waligorski => 3,
            Self::Geiss => 4,
            Self::Scholz => 5,
            Self::Edmund => 6,
            Self::Tabata => 7,
            Self::ScholzNew => 8,
        }
    }

    /// Model with the given code, if any.
    #[must_use]
    pub fn from_id(id: Integer) -> Option<Self> {
        Self::ALL.into_iter().find(|model| model.id() == id)
    }
}

impl fmt::Display for StoppingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StoppingModel {
    type Err = EngineError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|model| model.name() == name)
            .ok_or_else(|| EngineError::UnknownIdentifier(format!("model name {name}")))
    }
}

/// Names of every available model, sorted.
#[must_use]
pub fn model_names() -> Vec<&'static str> {
    StoppingModel::ALL.iter().map(|model| model.name()).collect()
}

/// Code of the model called `name`.
///
/// # Errors
///
/// Returns [`EngineError::UnknownIdentifier`] for unknown names.
pub fn model_id(name: &str) -> Result<Integer> {
    name.parse::<StoppingModel>().map(StoppingModel::id)
}

/// Resolves model names through the catalogue; integer codes pass through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelResolver;

impl IdentifierResolver for ModelResolver {
    fn resolve(&self, value: &HostValue) -> Result<Integer> {
        match value {
            HostValue::Str(name) => model_id(name),
            HostValue::Int(code) => Ok(*code),
            other => Err(EngineError::unsupported(
                "a model name or an integer",
                other.type_name(),
            )),
        }
    }
}

/// Maximum electron range in meters.
///
/// `material` and `model` may each be a single identifier or a list/array of
/// them. With single identifiers in zipped mode, `energy` is mapped through
/// the single-argument path, so the result mirrors it (list in, list out).
/// Otherwise energy, material and model are combined as three arguments,
/// zipped or as a cartesian product depending on `mode`.
///
/// # Errors
///
/// Propagates resolver errors, then classification and evaluation errors.
pub fn electron_range<B>(
    backend: &B,
    energy: &HostValue,
    material: &HostValue,
    model: &HostValue,
    mode: EvaluationMode,
) -> Result<HostValue>
where
    B: PhysicsBackend + ?Sized,
{
    let material = resolve_argument(&MaterialResolver, material)?;
    let model = resolve_argument(&ModelResolver, model)?;

    if let (EvaluationMode::Zipped, HostValue::Int(material), HostValue::Int(model)) =
        (mode, &material, &model)
    {
        let (material, model) = (*material, *model);
        tracing::debug!(material, model, "electron range with fixed identifiers");
        return call_unary(
            |energy| backend.max_electron_range(energy, material, model),
            energy,
        );
    }

    let config = CallConfig::new("electron_range", mode);
    call(
        |args| backend.max_electron_range(args[0].as_f64(), args[1].as_i64(), args[2].as_i64()),
        [energy, &material, &model],
        &config,
    )
}

/// [`electron_range`] in liquid water with the Tabata model.
///
/// # Errors
///
/// Same as [`electron_range`].
pub fn electron_range_default<B>(backend: &B, energy: &HostValue) -> Result<HostValue>
where
    B: PhysicsBackend + ?Sized,
{
    electron_range(
        backend,
        energy,
        &HostValue::Int(LIQUID_WATER),
        &HostValue::from(StoppingModel::default().name()),
        EvaluationMode::Zipped,
    )
}
