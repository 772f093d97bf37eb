//! Autocomplete selection state machine for consumable pickers.
//!
//! One [`ConsumableSelect`] exists per picker (food, potion). The machine
//! owns the query text, the candidate list, and the open/highlight state;
//! committing writes the chosen variant into the active job's profile
//! through the config store.

use craft_core::{ConfigStore, ConsumableVariant, ProfileFields};

use crate::search::{SearchHit, search};

/// Which profile slot a selector commits into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumableSlot {
    Food,
    Potion,
}

impl ConsumableSlot {
    fn write(
        self,
        store: &mut ConfigStore,
        value: Option<ConsumableVariant>,
    ) -> ProfileFields {
        let job = store.active_job();
        match self {
            ConsumableSlot::Food => store.set_food(job, value),
            ConsumableSlot::Potion => store.set_potion(job, value),
        }
    }
}

/// Combobox state over one catalog.
///
/// Invariants: `candidates` is always the search output for `query`
/// against the catalog; `highlighted`, when set, indexes into
/// `candidates`; while closed, `query` equals the committed variant's
/// name (or is empty when nothing is committed).
pub struct ConsumableSelect<'a> {
    slot: ConsumableSlot,
    catalog: &'a [ConsumableVariant],
    query: String,
    candidates: Vec<SearchHit<'a>>,
    open: bool,
    highlighted: Option<usize>,
    committed: Option<ConsumableVariant>,
}

impl<'a> ConsumableSelect<'a> {
    /// Creates a closed selector with an empty query.
    pub fn new(slot: ConsumableSlot, catalog: &'a [ConsumableVariant]) -> Self {
        Self {
            slot,
            catalog,
            query: String::new(),
            candidates: search(catalog, ""),
            open: false,
            highlighted: None,
            committed: None,
        }
    }

    pub fn slot(&self) -> ConsumableSlot {
        self.slot
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[SearchHit<'a>] {
        &self.candidates
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn committed(&self) -> Option<&ConsumableVariant> {
        self.committed.as_ref()
    }

    /// Opens the candidate list (focus), highlighting the first candidate.
    pub fn focus(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.refresh();
        self.highlight_first();
    }

    /// Replaces the query text, opening the list if it was closed.
    ///
    /// The highlight resets to the first candidate, or to none when the
    /// result list is empty.
    pub fn input(&mut self, text: &str) {
        self.open = true;
        self.query = text.to_string();
        self.refresh();
        self.highlight_first();
    }

    /// Moves the highlight down one candidate, clamped at the last entry.
    pub fn highlight_next(&mut self) {
        if !self.open || self.candidates.is_empty() {
            return;
        }
        let last = self.candidates.len() - 1;
        self.highlighted = Some(match self.highlighted {
            Some(index) => (index + 1).min(last),
            None => 0,
        });
    }

    /// Moves the highlight up one candidate, clamped at the first entry.
    pub fn highlight_prev(&mut self) {
        if !self.open || self.candidates.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(index) => index.saturating_sub(1),
            None => 0,
        });
    }

    /// Commits the highlighted candidate (Enter) into the active job's
    /// profile.
    ///
    /// With nothing highlighted (empty result list) this is a no-op and
    /// the widget stays open.
    pub fn commit(&mut self, store: &mut ConfigStore) -> Option<ProfileFields> {
        let index = self.highlighted?;
        self.commit_candidate(index, store)
    }

    /// Commits the candidate at `index` (click on a list entry).
    pub fn commit_candidate(
        &mut self,
        index: usize,
        store: &mut ConfigStore,
    ) -> Option<ProfileFields> {
        let variant = self.candidates.get(index)?.variant.clone();

        self.query = variant.name.clone();
        self.committed = Some(variant.clone());
        self.open = false;
        self.highlighted = None;
        self.refresh();

        Some(self.slot.write(store, Some(variant)))
    }

    /// Closes without committing (Escape or blur).
    ///
    /// The query reverts to the committed variant's name, or empty; the
    /// store is not touched.
    pub fn cancel(&mut self) {
        self.open = false;
        self.highlighted = None;
        self.query = self
            .committed
            .as_ref()
            .map(|variant| variant.name.clone())
            .unwrap_or_default();
        self.refresh();
    }

    /// Resynchronizes with the backing profile after an external change
    /// (reset action, copy operation, programmatic set).
    ///
    /// Forces the widget closed with the query mirroring the new value.
    pub fn sync_committed(&mut self, current: Option<&ConsumableVariant>) {
        self.committed = current.cloned();
        self.query = current.map(|variant| variant.name.clone()).unwrap_or_default();
        self.open = false;
        self.highlighted = None;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.candidates = search(self.catalog, &self.query);
    }

    fn highlight_first(&mut self) {
        self.highlighted = if self.candidates.is_empty() {
            None
        } else {
            Some(0)
        };
    }
}

impl ConsumableSelect<'static> {
    /// Selector over the embedded food catalog.
    pub fn food() -> Self {
        Self::new(ConsumableSlot::Food, craft_content::food_catalog())
    }

    /// Selector over the embedded potion catalog.
    pub fn potion() -> Self {
        Self::new(ConsumableSlot::Potion, craft_content::potion_catalog())
    }
}
