//! Core node contract and the small pieces every variant composes.
//!
//! - The `State` trait every node implements
//! - `Completion` bookkeeping for per-activation done flags
//! - `Guard` predicates for selection-time validity
//! - Top-level activation history

mod completion;
mod guard;
mod history;
mod state;

pub use completion::Completion;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
