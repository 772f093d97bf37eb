//! Runtime orchestration for the configuration engine.
//!
//! This crate wires the config store, the broadcast event bus, the shared
//! recipe slot, and the simulation-module gate into a cohesive API.
//! Consumers embed [`Session`] to drive configuration, subscribe to
//! change events, and reach the simulator once its asynchronous load
//! completes.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator
//! - [`events`] provides the broadcast bus for change notifications
//! - [`simulator`] gates the external optimizer behind its lifecycle
//! - [`recipe`] holds the shared selected-recipe slot
//! - [`mock`] provides a scripted backend for tests
pub mod error;
pub mod events;
pub mod mock;
pub mod recipe;
pub mod session;
pub mod simulator;
pub mod types;

pub use error::{Result, RuntimeError};
pub use events::{ConfigEvent, EventBus};
pub use recipe::SelectedRecipe;
pub use session::Session;
pub use simulator::{Simulator, SimulatorBackend};
pub use types::{CraftAction, CraftState, PlayerStats, Recipe, SearchOptions};
