//! Per-job stat profiles.

use crate::consumable::ConsumableVariant;
use crate::error::ConfigError;
use crate::stats::{StatBounds, StatField};

/// Stat configuration for a single crafting job.
///
/// Profiles are plain values: the store replaces or patches them wholesale
/// and no other component mutates them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobProfile {
    pub level: i32,
    pub craftsmanship: i32,
    pub control: i32,
    pub cp: i32,
    pub specialist: bool,
    pub food: Option<ConsumableVariant>,
    pub potion: Option<ConsumableVariant>,
}

impl Default for JobProfile {
    /// Range minima for every numeric field; valid under every bound.
    fn default() -> Self {
        Self {
            level: StatBounds::LEVEL.min,
            craftsmanship: StatBounds::CRAFTSMANSHIP.min,
            control: StatBounds::CONTROL.min,
            cp: StatBounds::CP.min,
            specialist: false,
            food: None,
            potion: None,
        }
    }
}

impl JobProfile {
    /// Checks every numeric field against its declared bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            (StatField::Level, self.level),
            (StatField::Craftsmanship, self.craftsmanship),
            (StatField::Control, self.control),
            (StatField::Cp, self.cp),
        ] {
            if !StatBounds::for_field(field).contains(value) {
                return Err(ConfigError::out_of_range(field, value));
            }
        }
        Ok(())
    }
}
