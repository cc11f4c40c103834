//! Orchestration between the API, the repository and the settlement engine.

pub mod resettle;

pub use resettle::{Resettler, ResettleError};
