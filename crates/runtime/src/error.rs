//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the simulator gate and the configuration store so
//! clients can bubble them up with consistent context.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A simulator operation ran before the backend finished loading.
    ///
    /// The call fails fast; nothing blocks and no state is touched.
    #[error("simulator invoked before load completed")]
    NotReady,

    /// The backend's one-time load step failed; the gate stays closed.
    #[error("simulator backend failed to initialize")]
    BackendInit(#[source] anyhow::Error),

    #[error(transparent)]
    Config(#[from] craft_core::ConfigError),
}
