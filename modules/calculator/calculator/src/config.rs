//! Configuration for the calculator module.

use calculator_sdk::OverflowPolicy;
use figment::Figment;
use serde::Deserialize;

/// Key under which the host places this module's configuration.
pub const CONFIG_KEY: &str = "calculator";

/// Module configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// What to do when a result does not fit in `i64`.
    /// Default: `wrapping`
    pub overflow: OverflowPolicy,
}

impl CalculatorConfig {
    /// Extracts the `calculator` section of a host-supplied figment.
    ///
    /// A missing section yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the section contains unknown fields or an
    /// unrecognized overflow policy.
    pub fn from_figment(figment: &Figment) -> Result<Self, figment::Error> {
        if !figment.contains(CONFIG_KEY) {
            return Ok(Self::default());
        }
        figment.extract_inner(CONFIG_KEY)
    }
}
