//! Partial profile updates and change tracking.

use bitflags::bitflags;

use crate::consumable::ConsumableVariant;
use crate::error::ConfigError;
use crate::profile::JobProfile;
use crate::stats::{StatBounds, StatField};

bitflags! {
    /// Tracks which fields of a [`JobProfile`] changed during an update.
    ///
    /// Each bit represents a single field. A bit is set only when the
    /// stored value actually changed, not merely because the patch named
    /// the field.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ProfileFields: u8 {
        const LEVEL         = 1 << 0;
        const CRAFTSMANSHIP = 1 << 1;
        const CONTROL       = 1 << 2;
        const CP            = 1 << 3;
        const SPECIALIST    = 1 << 4;
        const FOOD          = 1 << 5;
        const POTION        = 1 << 6;
    }
}

impl ProfileFields {
    /// Computes the set of fields on which `before` and `after` differ.
    pub fn diff(before: &JobProfile, after: &JobProfile) -> Self {
        let mut fields = Self::empty();
        if before.level != after.level {
            fields |= Self::LEVEL;
        }
        if before.craftsmanship != after.craftsmanship {
            fields |= Self::CRAFTSMANSHIP;
        }
        if before.control != after.control {
            fields |= Self::CONTROL;
        }
        if before.cp != after.cp {
            fields |= Self::CP;
        }
        if before.specialist != after.specialist {
            fields |= Self::SPECIALIST;
        }
        if before.food != after.food {
            fields |= Self::FOOD;
        }
        if before.potion != after.potion {
            fields |= Self::POTION;
        }
        fields
    }
}

/// Field-by-field update of a [`JobProfile`].
///
/// `None` leaves a field unchanged. The consumable slots are doubly
/// optional so "clear the slot" (`Some(None)`) stays distinct from "leave
/// it alone" (`None`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub level: Option<i32>,
    pub craftsmanship: Option<i32>,
    pub control: Option<i32>,
    pub cp: Option<i32>,
    pub specialist: Option<bool>,
    pub food: Option<Option<ConsumableVariant>>,
    pub potion: Option<Option<ConsumableVariant>>,
}

impl ProfilePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level field (builder pattern).
    #[must_use]
    pub fn level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the craftsmanship field (builder pattern).
    #[must_use]
    pub fn craftsmanship(mut self, craftsmanship: i32) -> Self {
        self.craftsmanship = Some(craftsmanship);
        self
    }

    /// Sets the control field (builder pattern).
    #[must_use]
    pub fn control(mut self, control: i32) -> Self {
        self.control = Some(control);
        self
    }

    /// Sets the CP field (builder pattern).
    #[must_use]
    pub fn cp(mut self, cp: i32) -> Self {
        self.cp = Some(cp);
        self
    }

    /// Sets the specialist flag (builder pattern).
    #[must_use]
    pub fn specialist(mut self, specialist: bool) -> Self {
        self.specialist = Some(specialist);
        self
    }

    /// Sets or clears the food slot (builder pattern).
    #[must_use]
    pub fn food(mut self, food: Option<ConsumableVariant>) -> Self {
        self.food = Some(food);
        self
    }

    /// Sets or clears the potion slot (builder pattern).
    #[must_use]
    pub fn potion(mut self, potion: Option<ConsumableVariant>) -> Self {
        self.potion = Some(potion);
        self
    }

    /// Checks every provided numeric field against its declared bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            (StatField::Level, self.level),
            (StatField::Craftsmanship, self.craftsmanship),
            (StatField::Control, self.control),
            (StatField::Cp, self.cp),
        ] {
            if let Some(value) = value
                && !StatBounds::for_field(field).contains(value)
            {
                return Err(ConfigError::out_of_range(field, value));
            }
        }
        Ok(())
    }

    /// Merges the patch into `profile`, returning the fields whose stored
    /// value changed.
    ///
    /// Callers are expected to [`validate`](Self::validate) first; the
    /// store does so before any field is written.
    pub(crate) fn apply(&self, profile: &mut JobProfile) -> ProfileFields {
        let mut changed = ProfileFields::empty();

        if let Some(level) = self.level
            && profile.level != level
        {
            profile.level = level;
            changed |= ProfileFields::LEVEL;
        }
        if let Some(craftsmanship) = self.craftsmanship
            && profile.craftsmanship != craftsmanship
        {
            profile.craftsmanship = craftsmanship;
            changed |= ProfileFields::CRAFTSMANSHIP;
        }
        if let Some(control) = self.control
            && profile.control != control
        {
            profile.control = control;
            changed |= ProfileFields::CONTROL;
        }
        if let Some(cp) = self.cp
            && profile.cp != cp
        {
            profile.cp = cp;
            changed |= ProfileFields::CP;
        }
        if let Some(specialist) = self.specialist
            && profile.specialist != specialist
        {
            profile.specialist = specialist;
            changed |= ProfileFields::SPECIALIST;
        }
        if let Some(food) = &self.food
            && profile.food != *food
        {
            profile.food = food.clone();
            changed |= ProfileFields::FOOD;
        }
        if let Some(potion) = &self.potion
            && profile.potion != *potion
        {
            profile.potion = potion.clone();
            changed |= ProfileFields::POTION;
        }

        changed
    }
}
