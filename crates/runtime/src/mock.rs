//! Scripted simulator backend for tests and offline development.
//!
//! Returns canned recipe lists and deterministic arithmetic in place of
//! the real optimizer. This is not a simulation: the numbers only need to
//! be stable and input-dependent so callers can assert on them.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::simulator::SimulatorBackend;
use crate::types::{CraftAction, CraftState, PlayerStats, Recipe, SearchOptions};

/// Backend with a scripted recipe table.
pub struct MockBackend {
    recipes: Vec<Recipe>,
    init_calls: AtomicUsize,
}

impl MockBackend {
    /// Creates a backend serving the given recipe table.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            init_calls: AtomicUsize::new(0),
        }
    }

    /// Creates a backend with a small default recipe table.
    pub fn with_default_recipes() -> Self {
        Self::new(vec![
            Recipe {
                name: "Maple Lumber".to_string(),
                job_level: 3,
                recipe_level: 3,
                progress: 9,
                quality: 80,
                durability: 40,
            },
            Recipe {
                name: "Sykon Bavarois".to_string(),
                job_level: 86,
                recipe_level: 555,
                progress: 3300,
                quality: 6800,
                durability: 70,
            },
            Recipe {
                name: "Rarefied Sykon Bavarois".to_string(),
                job_level: 89,
                recipe_level: 560,
                progress: 3500,
                quality: 7200,
                durability: 80,
            },
        ])
    }

    /// Number of times `init` ran.
    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SimulatorBackend for MockBackend {
    async fn init(&self) -> anyhow::Result<()> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn recipes_by_level(&self, level: i32) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.job_level <= level)
            .cloned()
            .collect()
    }

    fn simulate_actions(
        &self,
        recipe: &Recipe,
        player: &PlayerStats,
        options: &SearchOptions,
        actions: &[CraftAction],
    ) -> CraftState {
        let steps = actions.len().min(options.max_steps as usize) as u32;
        CraftState {
            progress: (player.craftsmanship as u32 / 10) * steps,
            quality: (player.control as u32 / 10) * steps,
            durability: recipe.durability - 10 * steps as i32,
            cp: player.cp - 7 * steps as i32,
            steps,
        }
    }
}
