//! Session facade wiring the store, event bus, recipe slot, and simulator.
//!
//! Consumers embed [`Session`] to drive configuration and subscribe to
//! change events. Every committed mutation made through the session
//! publishes a [`ConfigEvent`]; layers that mutate the store directly
//! (e.g. selection widgets) forward their change-sets through
//! [`Session::publish_profile_change`].

use std::sync::Arc;

use craft_core::{ConfigStore, Job, ProfileFields, ProfilePatch};
use tokio::sync::broadcast;
use tracing::debug;

use crate::error::Result;
use crate::events::{ConfigEvent, EventBus};
use crate::recipe::SelectedRecipe;
use crate::simulator::{Simulator, SimulatorBackend};
use crate::types::{CraftAction, CraftState, PlayerStats, Recipe, SearchOptions};

/// Owns the configuration state and its collaborators for one app run.
pub struct Session {
    store: ConfigStore,
    bus: EventBus,
    recipe: SelectedRecipe,
    simulator: Simulator,
}

impl Session {
    /// Builds a session around the given simulator backend.
    ///
    /// The store is wired to the shared recipe slot so job switches clear
    /// the selected recipe. The simulator starts uninitialized; call
    /// [`load_simulator`](Self::load_simulator) to open the gate.
    pub fn new(backend: Arc<dyn SimulatorBackend>) -> Self {
        let recipe = SelectedRecipe::new();
        Self {
            store: ConfigStore::with_recipe_slot(Arc::new(recipe.clone())),
            bus: EventBus::new(),
            recipe,
            simulator: Simulator::new(backend),
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Mutable store access for widget layers.
    ///
    /// Changes applied here bypass the bus; forward the returned
    /// [`ProfileFields`] through [`publish_profile_change`](Self::publish_profile_change).
    pub fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    pub fn recipe(&self) -> &SelectedRecipe {
        &self.recipe
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Subscribes to events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ConfigEvent> {
        self.bus.subscribe()
    }

    /// Publishes a change-set produced outside the session's own methods.
    pub fn publish_profile_change(&self, job: Job, fields: ProfileFields) {
        if !fields.is_empty() {
            self.bus.publish(ConfigEvent::ProfileChanged { job, fields });
        }
    }

    /// Runs the simulator backend's one-time load step.
    pub async fn load_simulator(&self) -> Result<()> {
        self.simulator.load().await
    }

    /// Switches the active job, clearing the recipe slot and copy menu.
    pub fn switch_job(&mut self, job: Job) {
        self.store.switch_job(job);
        debug!(%job, "switched active job");
        self.bus.publish(ConfigEvent::JobSwitched { job });
    }

    /// Patches the active job's profile.
    pub fn patch_active(&mut self, patch: &ProfilePatch) -> Result<ProfileFields> {
        let job = self.store.active_job();
        let fields = self.store.patch_profile(job, patch)?;
        self.publish_profile_change(job, fields);
        Ok(fields)
    }

    /// Applies the same patch to every job's profile.
    pub fn patch_all(&mut self, patch: &ProfilePatch) -> Result<ProfileFields> {
        let fields = self.store.patch_all_jobs(patch)?;
        if !fields.is_empty() {
            self.bus.publish(ConfigEvent::AllProfilesChanged { fields });
        }
        Ok(fields)
    }

    /// Toggles the active job's specialist flag.
    pub fn toggle_specialist(&mut self) -> ProfileFields {
        let job = self.store.active_job();
        let fields = self.store.toggle_specialist(job);
        self.publish_profile_change(job, fields);
        fields
    }

    /// Opens the copy-from prompt.
    pub fn begin_copy_from(&mut self) {
        self.store.begin_copy_from();
        self.publish_copy_menu();
    }

    /// Opens the copy-to-all prompt.
    pub fn begin_copy_to_all(&mut self) {
        self.store.begin_copy_to_all();
        self.publish_copy_menu();
    }

    /// Dismisses whichever copy prompt is open.
    pub fn cancel_copy(&mut self) {
        self.store.cancel_copy();
        self.publish_copy_menu();
    }

    /// Copies `source`'s profile into the active job (copy-from pick).
    pub fn pick_copy_source(&mut self, source: Job) -> Option<ProfileFields> {
        let job = self.store.active_job();
        let fields = self.store.pick_copy_source(source)?;
        debug!(%source, %job, "copied profile");
        self.publish_profile_change(job, fields);
        self.publish_copy_menu();
        Some(fields)
    }

    /// Replicates the active profile to every job (copy-to-all confirm).
    pub fn confirm_copy_to_all(&mut self) -> Option<ProfileFields> {
        let fields = self.store.confirm_copy_to_all()?;
        if !fields.is_empty() {
            self.bus.publish(ConfigEvent::AllProfilesChanged { fields });
        }
        self.publish_copy_menu();
        Some(fields)
    }

    /// Effective stats for the simulator: base plus food and potion
    /// bonuses for the active job.
    pub fn player_stats(&self) -> PlayerStats {
        let job = self.store.active_job();
        PlayerStats::effective(
            self.store.profile(job),
            self.store.food_bonus(job),
            self.store.potion_bonus(job),
        )
    }

    /// Recipes craftable at the active job's level. Gated on readiness.
    pub fn recipes_for_active_job(&self) -> Result<Vec<Recipe>> {
        self.simulator
            .recipes_by_level(self.store.active_profile().level)
    }

    /// Replays an action sequence with explicit search options.
    pub fn simulate_actions(
        &self,
        recipe: &Recipe,
        options: &SearchOptions,
        actions: &[CraftAction],
    ) -> Result<CraftState> {
        self.simulator
            .simulate_actions(recipe, &self.player_stats(), options, actions)
    }

    /// Replays an action sequence with the default search options.
    pub fn simulate_with_defaults(
        &self,
        recipe: &Recipe,
        actions: &[CraftAction],
    ) -> Result<CraftState> {
        self.simulate_actions(recipe, &SearchOptions::default(), actions)
    }

    fn publish_copy_menu(&self) {
        self.bus.publish(ConfigEvent::CopyMenuChanged {
            state: self.store.copy_menu(),
        });
    }
}

#[cfg(test)]
mod tests {
    use craft_core::CopyMenu;

    use super::*;
    use crate::mock::MockBackend;
    use crate::types::Recipe;

    fn session() -> Session {
        Session::new(Arc::new(MockBackend::with_default_recipes()))
    }

    fn recipe() -> Recipe {
        Recipe {
            name: "Sykon Bavarois".to_string(),
            job_level: 86,
            recipe_level: 555,
            progress: 3300,
            quality: 6800,
            durability: 70,
        }
    }

    #[test]
    fn switch_job_clears_recipe_and_publishes() {
        let mut session = session();
        let mut rx = session.subscribe();
        session.recipe().set(recipe());

        session.switch_job(Job::Culinarian);

        assert!(session.recipe().is_empty());
        assert!(matches!(
            rx.try_recv().unwrap(),
            ConfigEvent::JobSwitched {
                job: Job::Culinarian
            }
        ));
    }

    #[test]
    fn patch_active_publishes_the_changed_fields() {
        let mut session = session();
        let mut rx = session.subscribe();

        let fields = session
            .patch_active(&ProfilePatch::new().craftsmanship(2500))
            .unwrap();
        assert_eq!(fields, ProfileFields::CRAFTSMANSHIP);

        match rx.try_recv().unwrap() {
            ConfigEvent::ProfileChanged { job, fields } => {
                assert_eq!(job, Job::Carpenter);
                assert_eq!(fields, ProfileFields::CRAFTSMANSHIP);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn unchanged_patch_publishes_nothing() {
        let mut session = session();
        let mut rx = session.subscribe();

        let fields = session.patch_active(&ProfilePatch::new().level(1)).unwrap();
        assert!(fields.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn copy_prompts_publish_menu_transitions() {
        let mut session = session();
        let mut rx = session.subscribe();

        session.begin_copy_from();
        assert!(matches!(
            rx.try_recv().unwrap(),
            ConfigEvent::CopyMenuChanged {
                state: CopyMenu::CopyingFrom
            }
        ));

        session.switch_job(Job::Armorer);
        assert_eq!(session.store().copy_menu(), CopyMenu::Inactive);
    }

    #[test]
    fn player_stats_include_consumable_bonuses() {
        let mut session = session();
        let food = craft_core::ConsumableVariant::new("Tsai tou Vounou")
            .with_control(10, 90)
            .with_cp(22, 80);
        session
            .patch_active(
                &ProfilePatch::new()
                    .level(90)
                    .craftsmanship(2700)
                    .control(2600)
                    .cp(500)
                    .food(Some(food)),
            )
            .unwrap();

        let stats = session.player_stats();
        assert_eq!(stats.craftsmanship, 2700);
        assert_eq!(stats.control, 2690);
        assert_eq!(stats.cp, 580);
    }

    #[tokio::test]
    async fn simulation_is_gated_until_load() {
        let mut session = session();
        session
            .patch_active(&ProfilePatch::new().level(90).craftsmanship(1000))
            .unwrap();

        let err = session
            .simulate_with_defaults(&recipe(), &[CraftAction::BasicSynthesis])
            .unwrap_err();
        assert!(matches!(err, crate::RuntimeError::NotReady));

        session.load_simulator().await.unwrap();
        let state = session
            .simulate_with_defaults(&recipe(), &[CraftAction::BasicSynthesis])
            .unwrap();
        assert_eq!(state.steps, 1);
    }
}
