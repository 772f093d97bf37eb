//! Wire types exchanged with the external simulation module.
//!
//! The optimizer itself lives outside this workspace; these types feed it
//! and carry its results back.

use craft_core::{JobProfile, StatBonuses};

/// A craftable recipe as reported by the simulation module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub job_level: i32,
    pub recipe_level: i32,
    pub progress: u32,
    pub quality: u32,
    pub durability: i32,
}

/// A single crafting action in a simulated sequence.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CraftAction {
    BasicSynthesis,
    CarefulSynthesis,
    BasicTouch,
    StandardTouch,
    MastersMend,
    Observe,
    WasteNot,
    Veneration,
    Innovation,
    GreatStrides,
    ByregotsBlessing,
}

/// Craft state returned by a simulation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CraftState {
    pub progress: u32,
    pub quality: u32,
    pub durability: i32,
    pub cp: i32,
    pub steps: u32,
}

/// Tuning knobs forwarded to the optimizer's search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOptions {
    pub iterations: u32,
    pub max_steps: u32,
    pub rng_seed: Option<u64>,
    pub exploration_constant: Option<f32>,
    pub max_score_weighting_constant: Option<f32>,
    pub score_storage_threshold: Option<f32>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            max_steps: 30,
            rng_seed: None,
            exploration_constant: None,
            max_score_weighting_constant: None,
            score_storage_threshold: None,
        }
    }
}

/// Effective player stats fed to the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub job_level: i32,
    pub craftsmanship: i32,
    pub control: i32,
    pub cp: i32,
}

impl PlayerStats {
    /// Sums a profile's base stats with its food and potion bonuses.
    ///
    /// This is the only place the two bonuses are added together; the
    /// bonus calculator itself exposes them separately.
    pub fn effective(profile: &JobProfile, food: StatBonuses, potion: StatBonuses) -> Self {
        Self {
            job_level: profile.level,
            craftsmanship: profile.craftsmanship + food.craftsmanship + potion.craftsmanship,
            control: profile.control + food.control + potion.control,
            cp: profile.cp + food.cp + potion.cp,
        }
    }
}
