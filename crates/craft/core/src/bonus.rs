//! Consumable bonus arithmetic.
//!
//! Food and potion bonuses are computed independently per stat and both
//! are exposed to the caller; summation, if any, is a presentation
//! concern and never happens here.

use crate::consumable::{ConsumableVariant, Effect};
use crate::profile::JobProfile;

/// Applies a single effect to a base stat value.
///
/// Returns `floor(base * percent / 100)` capped at the effect's ceiling,
/// or 0 when no effect is present.
///
/// # Example
/// ```
/// # use craft_core::bonus::compute_bonus;
/// # use craft_core::consumable::Effect;
/// let effect = Effect::new(10, 20);
/// assert_eq!(compute_bonus(100, Some(&effect)), 10);
/// assert_eq!(compute_bonus(300, Some(&effect)), 20); // cap binds
/// assert_eq!(compute_bonus(100, None), 0);
/// ```
pub fn compute_bonus(base: i32, effect: Option<&Effect>) -> i32 {
    match effect {
        Some(effect) => ((base * effect.percent) / 100).min(effect.cap),
        None => 0,
    }
}

/// Per-stat bonuses derived from one consumable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBonuses {
    pub craftsmanship: i32,
    pub control: i32,
    pub cp: i32,
}

impl StatBonuses {
    /// Computes the bonuses a consumable grants on top of a profile's base
    /// stats. `None` (no consumable selected) grants nothing.
    pub fn from_consumable(profile: &JobProfile, variant: Option<&ConsumableVariant>) -> Self {
        let Some(variant) = variant else {
            return Self::default();
        };
        Self {
            craftsmanship: compute_bonus(profile.craftsmanship, variant.craftsmanship.as_ref()),
            control: compute_bonus(profile.control, variant.control.as_ref()),
            cp: compute_bonus(profile.cp, variant.cp.as_ref()),
        }
    }
}
