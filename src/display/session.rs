//! A presentation session bound to one engine.
//!
//! The session is handed its `FocusGame` at construction and forwards
//! completed gestures to it on behalf of whoever holds the turn. Rendering
//! reads owned snapshots only.

use tracing::debug;

use crate::core::action::Action;
use crate::core::player::PlayerId;
use crate::core::state::{GameSnapshot, TurnState};
use crate::rules::{FocusGame, Outcome, RuleError};

use super::geometry::BoardGeometry;
use super::gesture::Gesture;

pub struct Session<'g> {
    game: &'g mut FocusGame,
    geometry: BoardGeometry,
    gesture: Gesture,
}

impl<'g> Session<'g> {
    /// Bind a session to `game` with the default window layout.
    pub fn new(game: &'g mut FocusGame) -> Self {
        Self::with_geometry(game, BoardGeometry::default())
    }

    pub fn with_geometry(game: &'g mut FocusGame, geometry: BoardGeometry) -> Self {
        Self {
            game,
            geometry,
            gesture: Gesture::new(),
        }
    }

    #[must_use]
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Adjust the pending gesture (piece count, reserve, cancel).
    pub fn gesture_mut(&mut self) -> &mut Gesture {
        &mut self.gesture
    }

    #[must_use]
    pub fn game(&self) -> &FocusGame {
        self.game
    }

    /// Name of the player a completed gesture acts for.
    ///
    /// Player one opens when the turn is still unset.
    #[must_use]
    pub fn acting_player(&self) -> String {
        let seat = match self.game.turn_state() {
            TurnState::Unset => PlayerId::One,
            TurnState::ToMove(seat) => seat,
            TurnState::GameOver { winner } => winner,
        };
        self.game.players()[seat].name().to_string()
    }

    /// Handle a click at pixel `(x, y)`.
    ///
    /// Returns `None` when the click misses the grid or only advances the
    /// gesture; otherwise the engine's verdict on the completed action.
    pub fn click(&mut self, x: i32, y: i32) -> Option<Result<Outcome, RuleError>> {
        let cell = self.geometry.cell_at(x, y)?;
        let action = self.gesture.click(cell)?;
        Some(self.submit(action))
    }

    /// Perform `action` for the acting player.
    pub fn submit(&mut self, action: Action) -> Result<Outcome, RuleError> {
        let actor = self.acting_player();
        debug!(%actor, %action, "submitting action");
        self.game.apply(&actor, action)
    }

    /// State to draw for the current frame.
    #[must_use]
    pub fn frame(&self) -> GameSnapshot {
        self.game.snapshot()
    }
}
