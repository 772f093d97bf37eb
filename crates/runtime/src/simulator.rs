//! Lifecycle gate for the external simulation module.
//!
//! The native optimizer loads asynchronously; until that single load step
//! completes, both simulator-facing operations fail fast instead of
//! blocking or queuing. Configuration and selection never wait on this
//! gate.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::error::{Result, RuntimeError};
use crate::types::{CraftAction, CraftState, PlayerStats, Recipe, SearchOptions};

/// External optimizer interface.
///
/// This workspace never implements the search algorithm; backends wrap
/// the native module and are injected at construction.
#[async_trait]
pub trait SimulatorBackend: Send + Sync {
    /// One-time asynchronous load step (e.g. instantiating the native
    /// module).
    async fn init(&self) -> anyhow::Result<()>;

    /// All recipes craftable at `level`.
    fn recipes_by_level(&self, level: i32) -> Vec<Recipe>;

    /// Replays `actions` against `recipe` for `player` and returns the
    /// resulting craft state.
    fn simulate_actions(
        &self,
        recipe: &Recipe,
        player: &PlayerStats,
        options: &SearchOptions,
        actions: &[CraftAction],
    ) -> CraftState;
}

/// Two-state lifecycle wrapper around a [`SimulatorBackend`].
///
/// The gate starts uninitialized and transitions to ready exactly once,
/// when [`load`](Simulator::load) completes. Both operations return
/// [`RuntimeError::NotReady`] until then, mutating nothing.
pub struct Simulator {
    backend: Arc<dyn SimulatorBackend>,
    ready_tx: watch::Sender<bool>,
    ready_rx: watch::Receiver<bool>,
}

impl Simulator {
    /// Wraps `backend` in an uninitialized gate.
    pub fn new(backend: Arc<dyn SimulatorBackend>) -> Self {
        let (ready_tx, ready_rx) = watch::channel(false);
        Self {
            backend,
            ready_tx,
            ready_rx,
        }
    }

    /// Runs the backend's load step and opens the gate.
    ///
    /// Loading again after success is a no-op; a failed load leaves the
    /// gate closed and surfaces the backend error.
    pub async fn load(&self) -> Result<()> {
        if self.is_ready() {
            return Ok(());
        }
        self.backend
            .init()
            .await
            .map_err(RuntimeError::BackendInit)?;
        self.ready_tx.send_replace(true);
        info!("simulator backend loaded");
        Ok(())
    }

    /// True once the load step has completed.
    pub fn is_ready(&self) -> bool {
        *self.ready_rx.borrow()
    }

    /// Resolves once the gate opens; returns immediately when it already
    /// has.
    pub async fn ready(&self) {
        let mut rx = self.ready_rx.clone();
        // The sender lives on self, so the channel cannot close here.
        let _ = rx.wait_for(|ready| *ready).await;
    }

    fn check_ready(&self) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            warn!("simulator invoked before load completed");
            Err(RuntimeError::NotReady)
        }
    }

    /// Recipes craftable at `level`. Fails fast while uninitialized.
    pub fn recipes_by_level(&self, level: i32) -> Result<Vec<Recipe>> {
        self.check_ready()?;
        Ok(self.backend.recipes_by_level(level))
    }

    /// Replays an action sequence. Fails fast while uninitialized.
    pub fn simulate_actions(
        &self,
        recipe: &Recipe,
        player: &PlayerStats,
        options: &SearchOptions,
        actions: &[CraftAction],
    ) -> Result<CraftState> {
        self.check_ready()?;
        Ok(self
            .backend
            .simulate_actions(recipe, player, options, actions))
    }
}
