//! Headless widget state for the player-configuration frontend.
//!
//! Houses the search/match engine and the consumable selection state
//! machines that any rendering layer (terminal or graphical) can reuse.
//! Nothing here draws: presentation consumes match spans and widget state.
pub mod search;
pub mod selection;

pub use search::{MatchSpan, SearchHit, search};
pub use selection::{ConsumableSelect, ConsumableSlot};
