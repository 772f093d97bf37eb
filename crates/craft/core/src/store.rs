//! Authoritative store for per-job configuration.
//!
//! All profile mutation flows through [`ConfigStore`]. Mutating operations
//! return [`ProfileFields`] describing what actually changed so callers
//! can re-run derived computations (bonus readouts, candidate lists) after
//! each committed update.

use std::sync::Arc;

use crate::bonus::StatBonuses;
use crate::consumable::ConsumableVariant;
use crate::copy::CopyMenu;
use crate::error::ConfigError;
use crate::job::Job;
use crate::patch::{ProfileFields, ProfilePatch};
use crate::profile::JobProfile;
use crate::stats::SPECIALIST_DELTA;

/// Collaborator owning the externally selected recipe.
///
/// The store only ever clears the slot; picking a recipe happens outside
/// this crate.
pub trait RecipeSlot: Send + Sync {
    fn clear(&self);
}

/// Slot used when no collaborator is wired in.
struct NullRecipeSlot;

impl RecipeSlot for NullRecipeSlot {
    fn clear(&self) {}
}

/// Holds one profile per job, the active job, and the copy-menu state.
///
/// The profile table is a fixed-size array keyed by [`Job::as_index`], so
/// every job has exactly one profile at all times; entries are replaced,
/// never removed.
pub struct ConfigStore {
    profiles: [JobProfile; Job::COUNT],
    active: Job,
    copy_menu: CopyMenu,
    recipe_slot: Arc<dyn RecipeSlot>,
}

impl ConfigStore {
    /// Creates a store with default profiles and no recipe collaborator.
    pub fn new() -> Self {
        Self::with_recipe_slot(Arc::new(NullRecipeSlot))
    }

    /// Creates a store wired to the given recipe collaborator.
    pub fn with_recipe_slot(recipe_slot: Arc<dyn RecipeSlot>) -> Self {
        Self {
            profiles: std::array::from_fn(|_| JobProfile::default()),
            active: Job::default(),
            copy_menu: CopyMenu::Inactive,
            recipe_slot,
        }
    }

    /// Returns the currently active job.
    pub fn active_job(&self) -> Job {
        self.active
    }

    /// Returns the profile for `job`. Total: every job always has one.
    pub fn profile(&self, job: Job) -> &JobProfile {
        &self.profiles[job.as_index()]
    }

    /// Returns the active job's profile.
    pub fn active_profile(&self) -> &JobProfile {
        self.profile(self.active)
    }

    /// Returns the current copy-menu state.
    pub fn copy_menu(&self) -> CopyMenu {
        self.copy_menu
    }

    pub(crate) fn set_copy_menu(&mut self, state: CopyMenu) {
        self.copy_menu = state;
    }

    /// Switches the active job.
    ///
    /// The selected recipe and the copy menu are cleared unconditionally,
    /// also when `job` is already active.
    pub fn switch_job(&mut self, job: Job) {
        self.active = job;
        self.recipe_slot.clear();
        self.copy_menu = CopyMenu::Inactive;
    }

    /// Merges `patch` into `job`'s profile.
    ///
    /// The patch is validated before any field is written; on error the
    /// stored profile is untouched.
    pub fn patch_profile(
        &mut self,
        job: Job,
        patch: &ProfilePatch,
    ) -> Result<ProfileFields, ConfigError> {
        patch.validate()?;
        Ok(patch.apply(&mut self.profiles[job.as_index()]))
    }

    /// Applies the same patch independently to every job's profile.
    pub fn patch_all_jobs(&mut self, patch: &ProfilePatch) -> Result<ProfileFields, ConfigError> {
        patch.validate()?;
        let mut changed = ProfileFields::empty();
        for profile in &mut self.profiles {
            changed |= patch.apply(profile);
        }
        Ok(changed)
    }

    /// Replaces `job`'s profile wholesale.
    pub fn replace_profile(
        &mut self,
        job: Job,
        profile: JobProfile,
    ) -> Result<ProfileFields, ConfigError> {
        profile.validate()?;
        Ok(self.overwrite_profile(job, profile))
    }

    /// Replaces every job's profile with an independent copy of `profile`.
    pub fn replace_all_jobs(&mut self, profile: JobProfile) -> Result<ProfileFields, ConfigError> {
        profile.validate()?;
        Ok(self.overwrite_all_jobs(profile))
    }

    /// Overwrite without revalidation; the profile must already satisfy
    /// the store invariants (e.g. it came out of this store).
    pub(crate) fn overwrite_profile(&mut self, job: Job, profile: JobProfile) -> ProfileFields {
        let slot = &mut self.profiles[job.as_index()];
        let changed = ProfileFields::diff(slot, &profile);
        *slot = profile;
        changed
    }

    pub(crate) fn overwrite_all_jobs(&mut self, profile: JobProfile) -> ProfileFields {
        let mut changed = ProfileFields::empty();
        for slot in &mut self.profiles {
            changed |= ProfileFields::diff(slot, &profile);
            *slot = profile.clone();
        }
        changed
    }

    /// Sets or clears `job`'s food selection.
    ///
    /// Infallible: consumable slots carry no numeric range to validate.
    pub fn set_food(&mut self, job: Job, food: Option<ConsumableVariant>) -> ProfileFields {
        let profile = &mut self.profiles[job.as_index()];
        if profile.food == food {
            return ProfileFields::empty();
        }
        profile.food = food;
        ProfileFields::FOOD
    }

    /// Sets or clears `job`'s potion selection.
    pub fn set_potion(&mut self, job: Job, potion: Option<ConsumableVariant>) -> ProfileFields {
        let profile = &mut self.profiles[job.as_index()];
        if profile.potion == potion {
            return ProfileFields::empty();
        }
        profile.potion = potion;
        ProfileFields::POTION
    }

    /// Toggles the specialist flag for `job`, applying or removing the
    /// fixed stat delta.
    ///
    /// The delta is integer and exact: toggling twice restores the
    /// original values. Range revalidation is skipped so the round-trip
    /// holds near the bounds.
    pub fn toggle_specialist(&mut self, job: Job) -> ProfileFields {
        let profile = &mut self.profiles[job.as_index()];
        let sign = if profile.specialist { -1 } else { 1 };

        profile.craftsmanship += sign * SPECIALIST_DELTA.craftsmanship;
        profile.control += sign * SPECIALIST_DELTA.control;
        profile.cp += sign * SPECIALIST_DELTA.cp;
        profile.specialist = !profile.specialist;

        ProfileFields::CRAFTSMANSHIP
            | ProfileFields::CONTROL
            | ProfileFields::CP
            | ProfileFields::SPECIALIST
    }

    /// Bonuses granted by `job`'s selected food, per stat.
    pub fn food_bonus(&self, job: Job) -> StatBonuses {
        let profile = self.profile(job);
        StatBonuses::from_consumable(profile, profile.food.as_ref())
    }

    /// Bonuses granted by `job`'s selected potion, per stat.
    pub fn potion_bonus(&self, job: Job) -> StatBonuses {
        let profile = self.profile(job);
        StatBonuses::from_consumable(profile, profile.potion.as_ref())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Counts clears so tests can observe the side-effect contract.
    struct CountingSlot {
        cleared: AtomicUsize,
    }

    impl CountingSlot {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                cleared: AtomicUsize::new(0),
            })
        }

        fn cleared(&self) -> usize {
            self.cleared.load(Ordering::SeqCst)
        }
    }

    impl RecipeSlot for CountingSlot {
        fn clear(&self) {
            self.cleared.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn every_job_has_a_profile_at_startup() {
        let store = ConfigStore::new();
        for job in Job::all() {
            assert_eq!(store.profile(job), &JobProfile::default());
        }
    }

    #[test]
    fn rejected_patch_leaves_profile_unchanged() {
        let mut store = ConfigStore::new();
        store
            .patch_profile(Job::Weaver, &ProfilePatch::new().craftsmanship(2500))
            .unwrap();

        let before = store.profile(Job::Weaver).clone();
        let patch = ProfilePatch::new().craftsmanship(-1).control(1000);
        let err = store.patch_profile(Job::Weaver, &patch).unwrap_err();

        assert!(matches!(err, ConfigError::OutOfRange { value: -1, .. }));
        assert_eq!(store.profile(Job::Weaver), &before);
    }

    #[test]
    fn patch_all_jobs_yields_independent_profiles() {
        let mut store = ConfigStore::new();
        let food = ConsumableVariant::new("Jhinga Biryani").with_control(10, 90);
        store
            .patch_all_jobs(&ProfilePatch::new().craftsmanship(2500).food(Some(food)))
            .unwrap();

        store
            .patch_profile(Job::Alchemist, &ProfilePatch::new().craftsmanship(100))
            .unwrap();

        assert_eq!(store.profile(Job::Alchemist).craftsmanship, 100);
        for job in Job::all() {
            if job != Job::Alchemist {
                assert_eq!(store.profile(job).craftsmanship, 2500);
            }
        }
    }

    #[test]
    fn switch_job_clears_recipe_even_when_already_active() {
        let slot = CountingSlot::new();
        let mut store = ConfigStore::with_recipe_slot(slot.clone());

        store.switch_job(Job::Goldsmith);
        assert_eq!(store.active_job(), Job::Goldsmith);
        assert_eq!(slot.cleared(), 1);

        // Same job again: clear still fires.
        store.switch_job(Job::Goldsmith);
        assert_eq!(slot.cleared(), 2);
    }

    #[test]
    fn toggle_specialist_twice_restores_exact_values() {
        let mut store = ConfigStore::new();
        store
            .patch_profile(
                Job::Culinarian,
                &ProfilePatch::new().craftsmanship(2711).control(2631).cp(507),
            )
            .unwrap();
        let before = store.profile(Job::Culinarian).clone();

        store.toggle_specialist(Job::Culinarian);
        let toggled = store.profile(Job::Culinarian);
        assert!(toggled.specialist);
        assert_eq!(toggled.craftsmanship, 2731);
        assert_eq!(toggled.control, 2651);
        assert_eq!(toggled.cp, 522);

        store.toggle_specialist(Job::Culinarian);
        assert_eq!(store.profile(Job::Culinarian), &before);
    }

    #[test]
    fn bonuses_track_the_selected_consumables() {
        let mut store = ConfigStore::new();
        let food = ConsumableVariant::new("Tsai tou Vounou")
            .with_control(10, 90)
            .with_cp(22, 80);
        store
            .patch_profile(
                Job::Carpenter,
                &ProfilePatch::new().control(2000).cp(500).food(Some(food)),
            )
            .unwrap();

        let food_bonus = store.food_bonus(Job::Carpenter);
        assert_eq!(food_bonus.control, 90);
        assert_eq!(food_bonus.cp, 80);
        assert_eq!(food_bonus.craftsmanship, 0);

        // No potion selected: independent and empty.
        assert_eq!(store.potion_bonus(Job::Carpenter), StatBonuses::default());
    }
}
