//! Shared slot for the externally selected recipe.

use std::sync::{Arc, Mutex, MutexGuard};

use craft_core::RecipeSlot;

use crate::types::Recipe;

/// Clonable handle to the currently selected recipe.
///
/// Recipe pickers set it; the config store clears it on every job switch
/// through the [`RecipeSlot`] trait. Clones share the same slot.
#[derive(Clone, Default)]
pub struct SelectedRecipe {
    inner: Arc<Mutex<Option<Recipe>>>,
}

impl SelectedRecipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `recipe` as the current selection.
    pub fn set(&self, recipe: Recipe) {
        *self.lock() = Some(recipe);
    }

    /// Returns a copy of the current selection, if any.
    pub fn get(&self) -> Option<Recipe> {
        self.lock().clone()
    }

    /// True when no recipe is selected.
    pub fn is_empty(&self) -> bool {
        self.lock().is_none()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Recipe>> {
        self.inner.lock().expect("recipe slot lock poisoned")
    }
}

impl RecipeSlot for SelectedRecipe {
    fn clear(&self) {
        *self.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            name: "Rarefied Sykon Bavarois".to_string(),
            job_level: 89,
            recipe_level: 560,
            progress: 3500,
            quality: 7200,
            durability: 80,
        }
    }

    #[test]
    fn clones_share_the_same_slot() {
        let slot = SelectedRecipe::new();
        let other = slot.clone();

        slot.set(recipe());
        assert_eq!(other.get(), Some(recipe()));

        RecipeSlot::clear(&other);
        assert!(slot.is_empty());
    }
}
