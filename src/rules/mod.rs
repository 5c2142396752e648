//! Focus rules: legality, execution, turn order and victory.
//!
//! - `validate`: pure checks on a board, no side effects
//! - `execute`: splitting, merging and overflow resolution
//! - `engine`: `FocusGame`, the stateful entry point callers use
//! - `error`: the `RuleError` taxonomy

pub mod engine;
pub mod error;
pub mod execute;
pub mod validate;

pub use engine::{FocusGame, Outcome};
pub use error::RuleError;
