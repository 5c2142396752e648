//! Presentation adapter.
//!
//! Maps window pixels to cells, turns clicks into actions, and renders
//! snapshots. Holds no game state of its own: every change goes through the
//! `FocusGame` the session was given.

pub mod geometry;
pub mod gesture;
pub mod session;
pub mod text;

pub use geometry::BoardGeometry;
pub use gesture::{Gesture, Selection};
pub use session::Session;
pub use text::{render_board, render_snapshot};
