//! Stat field identities, bounds, and fixed deltas.
//!
//! All clamping bounds live here so the ranges for different stat fields
//! are centralized and easy to adjust.

/// Identifies a numeric field of a [`JobProfile`](crate::profile::JobProfile).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatField {
    Level,
    Craftsmanship,
    Control,
    Cp,
}

/// Inclusive bounds for a single stat field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBounds {
    pub min: i32,
    pub max: i32,
}

impl StatBounds {
    /// Job level bounds [1, 90].
    pub const LEVEL: Self = Self { min: 1, max: 90 };

    /// Craftsmanship bounds [0, 9000].
    pub const CRAFTSMANSHIP: Self = Self { min: 0, max: 9000 };

    /// Control bounds [0, 9000].
    pub const CONTROL: Self = Self { min: 0, max: 9000 };

    /// CP bounds [180, 1000].
    ///
    /// Every job starts with at least 180 CP, so the minimum is above zero.
    pub const CP: Self = Self { min: 180, max: 1000 };

    /// Returns the declared bounds for `field`.
    pub const fn for_field(field: StatField) -> Self {
        match field {
            StatField::Level => Self::LEVEL,
            StatField::Craftsmanship => Self::CRAFTSMANSHIP,
            StatField::Control => Self::CONTROL,
            StatField::Cp => Self::CP,
        }
    }

    /// Returns true if `value` lies within the bounds.
    pub const fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Flat delta on the three crafting stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatDelta {
    pub craftsmanship: i32,
    pub control: i32,
    pub cp: i32,
}

/// Stat delta granted while the specialist flag is set.
///
/// Integer and exact: applying and removing the delta restores the
/// original values bit-for-bit.
pub const SPECIALIST_DELTA: StatDelta = StatDelta {
    craftsmanship: 20,
    control: 20,
    cp: 15,
};
