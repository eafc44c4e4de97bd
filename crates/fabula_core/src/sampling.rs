//! Sampling parameters for model initialization.

use serde::{Deserialize, Serialize};

/// Tuning parameters passed to the model at initialization.
///
/// # Examples
///
/// ```
/// use fabula_core::SamplingConfig;
///
/// let sampling = SamplingConfig::default();
/// assert_eq!(*sampling.temperature(), 0.7);
/// assert_eq!(*sampling.top_p(), 0.95);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SamplingConfig {
    /// Sampling temperature (0.0 = deterministic, higher = more creative).
    #[serde(default = "default_temperature")]
    temperature: f32,

    /// Nucleus-sampling threshold.
    #[serde(default = "default_top_p")]
    top_p: f32,
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    0.95
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

impl SamplingConfig {
    /// Create a config with explicit values.
    pub fn new(temperature: f32, top_p: f32) -> Self {
        Self { temperature, top_p }
    }
}
