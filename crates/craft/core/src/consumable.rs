//! Consumable item definitions.
//!
//! Variants belong to exactly one of two immutable catalogs (food or
//! potion), provided by the content crate. This module only defines the
//! shapes; catalog data never appears in core.

/// Percentage boost with an absolute cap for a single stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    /// Percent of the base stat granted (e.g. 10 = +10%).
    pub percent: i32,

    /// Absolute ceiling on the granted amount.
    pub cap: i32,
}

impl Effect {
    pub const fn new(percent: i32, cap: i32) -> Self {
        Self { percent, cap }
    }
}

/// A single food or potion variant.
///
/// A stat without an effect entry grants nothing for that stat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumableVariant {
    pub name: String,
    pub craftsmanship: Option<Effect>,
    pub control: Option<Effect>,
    pub cp: Option<Effect>,
}

impl ConsumableVariant {
    /// Creates a variant with no effects.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            craftsmanship: None,
            control: None,
            cp: None,
        }
    }

    /// Attaches a craftsmanship effect (builder pattern).
    #[must_use]
    pub fn with_craftsmanship(mut self, percent: i32, cap: i32) -> Self {
        self.craftsmanship = Some(Effect::new(percent, cap));
        self
    }

    /// Attaches a control effect (builder pattern).
    #[must_use]
    pub fn with_control(mut self, percent: i32, cap: i32) -> Self {
        self.control = Some(Effect::new(percent, cap));
        self
    }

    /// Attaches a CP effect (builder pattern).
    #[must_use]
    pub fn with_cp(mut self, percent: i32, cap: i32) -> Self {
        self.cp = Some(Effect::new(percent, cap));
        self
    }
}
