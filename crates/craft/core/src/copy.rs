//! Copy-menu state machine layered on the store.
//!
//! The menu drives two workflows: copying a chosen job's profile into the
//! active one, and replicating the active profile to every job. The states
//! are mutually exclusive; entering one while another is active replaces
//! it, and any job switch forces the menu back to inactive.

use crate::job::Job;
use crate::patch::ProfileFields;
use crate::store::ConfigStore;

/// Which copy prompt, if any, is currently open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CopyMenu {
    #[default]
    Inactive,
    /// Waiting for the user to pick a source job.
    CopyingFrom,
    /// Waiting for confirmation to overwrite every job.
    CopyingToAll,
}

impl ConfigStore {
    /// Opens the copy-from prompt.
    pub fn begin_copy_from(&mut self) {
        self.set_copy_menu(CopyMenu::CopyingFrom);
    }

    /// Opens the copy-to-all prompt.
    pub fn begin_copy_to_all(&mut self) {
        self.set_copy_menu(CopyMenu::CopyingToAll);
    }

    /// Dismisses whichever prompt is open without touching profiles.
    pub fn cancel_copy(&mut self) {
        self.set_copy_menu(CopyMenu::Inactive);
    }

    /// Copies `source`'s whole profile (consumables and specialist flag
    /// included) into the active job, closing the prompt.
    ///
    /// Ignored unless the copy-from prompt is open.
    pub fn pick_copy_source(&mut self, source: Job) -> Option<ProfileFields> {
        if self.copy_menu() != CopyMenu::CopyingFrom {
            return None;
        }
        let profile = self.profile(source).clone();
        let changed = self.overwrite_profile(self.active_job(), profile);
        self.set_copy_menu(CopyMenu::Inactive);
        Some(changed)
    }

    /// Replicates the active profile to every job as independent values,
    /// closing the prompt.
    ///
    /// Ignored unless the copy-to-all prompt is open.
    pub fn confirm_copy_to_all(&mut self) -> Option<ProfileFields> {
        if self.copy_menu() != CopyMenu::CopyingToAll {
            return None;
        }
        let profile = self.active_profile().clone();
        let changed = self.overwrite_all_jobs(profile);
        self.set_copy_menu(CopyMenu::Inactive);
        Some(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::ProfilePatch;

    #[test]
    fn prompts_replace_each_other() {
        let mut store = ConfigStore::new();
        store.begin_copy_from();
        assert_eq!(store.copy_menu(), CopyMenu::CopyingFrom);

        store.begin_copy_to_all();
        assert_eq!(store.copy_menu(), CopyMenu::CopyingToAll);

        store.cancel_copy();
        assert_eq!(store.copy_menu(), CopyMenu::Inactive);
    }

    #[test]
    fn pick_copy_source_overwrites_the_active_profile() {
        let mut store = ConfigStore::new();
        store
            .patch_profile(
                Job::Blacksmith,
                &ProfilePatch::new().level(90).craftsmanship(2800).specialist(true),
            )
            .unwrap();

        store.switch_job(Job::Weaver);
        store.begin_copy_from();
        let changed = store.pick_copy_source(Job::Blacksmith).unwrap();

        assert!(changed.contains(ProfileFields::CRAFTSMANSHIP));
        assert_eq!(store.profile(Job::Weaver), store.profile(Job::Blacksmith));
        assert_eq!(store.copy_menu(), CopyMenu::Inactive);
    }

    #[test]
    fn pick_copy_source_is_ignored_when_prompt_is_closed() {
        let mut store = ConfigStore::new();
        store
            .patch_profile(Job::Blacksmith, &ProfilePatch::new().craftsmanship(2800))
            .unwrap();

        assert_eq!(store.pick_copy_source(Job::Blacksmith), None);
        assert_eq!(store.active_profile().craftsmanship, 0);
    }

    #[test]
    fn confirm_copy_to_all_replicates_by_value() {
        let mut store = ConfigStore::new();
        store
            .patch_profile(Job::Carpenter, &ProfilePatch::new().control(2600))
            .unwrap();

        store.begin_copy_to_all();
        store.confirm_copy_to_all().unwrap();

        for job in Job::all() {
            assert_eq!(store.profile(job).control, 2600);
        }

        // Later mutation of one job must not leak into the others.
        store
            .patch_profile(Job::Goldsmith, &ProfilePatch::new().control(100))
            .unwrap();
        assert_eq!(store.profile(Job::Carpenter).control, 2600);
    }

    #[test]
    fn cancel_leaves_profiles_untouched() {
        let mut store = ConfigStore::new();
        store.begin_copy_to_all();
        store.cancel_copy();
        assert_eq!(store.confirm_copy_to_all(), None);
        for job in Job::all() {
            assert_eq!(store.profile(job).control, 0);
        }
    }

    #[test]
    fn switch_job_forces_the_menu_inactive() {
        let mut store = ConfigStore::new();
        store.begin_copy_from();
        store.switch_job(Job::Armorer);
        assert_eq!(store.copy_menu(), CopyMenu::Inactive);
    }
}
