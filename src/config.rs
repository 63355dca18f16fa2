//! Per-call configuration for multi-argument evaluation.

/// How multi-argument calls combine their arguments.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvaluationMode {
    /// Index-aligned rows with scalar broadcasting.
    #[default]
    Zipped,
    /// Every combination of argument elements.
    Cartesian,
}

/// Metadata describing one marshaled call.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallConfig {
    /// Name of the wrapped function, used in log spans.
    pub name: String,
    /// Combination strategy for multi-argument calls.
    pub mode: EvaluationMode,
}

impl CallConfig {
    /// Creates a configuration with an explicit mode.
    #[must_use]
    pub fn new(name: impl Into<String>, mode: EvaluationMode) -> Self {
        Self {
            name: name.into(),
            mode,
        }
    }

    /// Creates a zipped configuration.
    #[must_use]
    pub fn zipped(name: impl Into<String>) -> Self {
        Self::new(name, EvaluationMode::Zipped)
    }

    /// Creates a cartesian-product configuration.
    #[must_use]
    pub fn cartesian(name: impl Into<String>) -> Self {
        Self::new(name, EvaluationMode::Cartesian)
    }

    /// Returns a copy with `mode` replaced.
    #[must_use]
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// True for cartesian-product evaluation.
    #[must_use]
    pub fn is_cartesian(&self) -> bool {
        self.mode == EvaluationMode::Cartesian
    }
}

impl Default for CallConfig {
    fn default() -> Self {
        Self::zipped("anonymous")
    }
}
