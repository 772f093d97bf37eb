//! Crafting job enumeration.
//!
//! Jobs are a closed set. [`crate::store::ConfigStore`] keys its profile
//! table by [`Job::as_index`], so every job structurally has exactly one
//! profile at all times.

use crate::error::ConfigError;

/// The eight crafting disciplines a player can configure.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Job {
    /// Woodworking
    #[default]
    Carpenter,
    /// Smithing
    Blacksmith,
    /// Armorcraft
    Armorer,
    /// Goldsmithing
    Goldsmith,
    /// Leatherworking
    Leatherworker,
    /// Clothcraft
    Weaver,
    /// Alchemy
    Alchemist,
    /// Cooking
    Culinarian,
}

impl Job {
    /// Total number of jobs.
    pub const COUNT: usize = 8;

    /// Returns all jobs in declaration order.
    pub const fn all() -> [Job; Self::COUNT] {
        [
            Job::Carpenter,
            Job::Blacksmith,
            Job::Armorer,
            Job::Goldsmith,
            Job::Leatherworker,
            Job::Weaver,
            Job::Alchemist,
            Job::Culinarian,
        ]
    }

    /// Returns the job as an array index.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Parses a job name arriving from an external boundary.
    ///
    /// The enumeration is closed, so internal callers never need this;
    /// it exists where untrusted strings enter the system.
    pub fn parse(name: &str) -> Result<Job, ConfigError> {
        name.parse()
            .map_err(|_| ConfigError::UnknownJob(name.to_string()))
    }
}
