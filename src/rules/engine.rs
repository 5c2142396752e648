//! The Focus game engine.
//!
//! `FocusGame` owns the board, both players, the turn state and the action
//! history. Callers act by player name; every action is checked in full
//! before anything changes, so a rejected action has no side effects
//! (including on an unset turn).

use im::Vector;
use tracing::{debug, info, instrument};

use crate::core::action::{Action, ActionRecord, Evictions};
use crate::core::board::Board;
use crate::core::color::PieceColor;
use crate::core::config::{ConfigError, FocusConfig, PlayerSetup};
use crate::core::coord::Coord;
use crate::core::player::{Player, PlayerId, Players};
use crate::core::state::{GameSnapshot, Turn, TurnState};

use super::error::RuleError;
use super::{execute, validate};

/// Result of a successful action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The action resolved and the turn passed to the opponent.
    Success,
    /// The action resolved and the named player has won.
    PlayerWins(String),
}

impl Outcome {
    /// Name of the winner, if this action ended the game.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            Outcome::Success => None,
            Outcome::PlayerWins(name) => Some(name),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "successfully moved"),
            Outcome::PlayerWins(name) => write!(f, "{} wins", name),
        }
    }
}

/// A game of Focus between two named players.
#[derive(Clone, Debug)]
pub struct FocusGame {
    config: FocusConfig,
    board: Board,
    players: Players,
    turn: TurnState,
    history: Vector<ActionRecord>,
}

impl FocusGame {
    /// Start a game from the standard layout.
    pub fn new(config: FocusConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::standard(config.first.color, config.second.color);
        Ok(Self::assemble(config, board))
    }

    /// Start a standard game between two `(name, color)` players.
    pub fn with_players(
        first: impl Into<PlayerSetup>,
        second: impl Into<PlayerSetup>,
    ) -> Result<Self, ConfigError> {
        Self::new(FocusConfig::new(first, second))
    }

    /// Start from an arbitrary position instead of the standard layout.
    ///
    /// Pools start empty and the turn is unset. Every stack must already be
    /// within the configured height cap.
    pub fn with_board(config: FocusConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        let max = config.max_stack_height;
        if let Some((at, stack)) = board.stacks().find(|(_, s)| s.len() > max) {
            return Err(ConfigError::StackTooTall {
                at,
                height: stack.len(),
                max,
            });
        }
        Ok(Self::assemble(config, board))
    }

    fn assemble(config: FocusConfig, board: Board) -> Self {
        let players = Players::new(
            Player::new(config.first.name.clone(), config.first.color),
            Player::new(config.second.name.clone(), config.second.color),
        );
        Self {
            config,
            board,
            players,
            turn: TurnState::Unset,
            history: Vector::new(),
        }
    }

    // === Actions ===

    /// Move the top `count` pieces of the stack at `from` to `to`.
    pub fn move_piece(
        &mut self,
        player: &str,
        from: impl Into<Coord>,
        to: impl Into<Coord>,
        count: usize,
    ) -> Result<Outcome, RuleError> {
        self.apply(player, Action::move_stack(from, to, count))
    }

    /// Place one piece from `player`'s reserve on `to`.
    pub fn place_from_reserve(
        &mut self,
        player: &str,
        to: impl Into<Coord>,
    ) -> Result<Outcome, RuleError> {
        self.apply(player, Action::place(to))
    }

    /// Perform `action` for `player`.
    #[instrument(skip(self))]
    pub fn apply(&mut self, player: &str, action: Action) -> Result<Outcome, RuleError> {
        let result = self.try_apply(player, action);
        match &result {
            Ok(outcome) => debug!(%outcome, "action accepted"),
            Err(error) => debug!(%error, "action rejected"),
        }
        result
    }

    fn try_apply(&mut self, player: &str, action: Action) -> Result<Outcome, RuleError> {
        let seat = self.seat(player)?;
        self.check(seat, action)?;

        let max_height = self.config.max_stack_height;
        let mover = &mut self.players[seat];
        let evictions = match action {
            Action::Move { from, to, count } => {
                execute::move_stack(&mut self.board, mover, from, to, count, max_height)?
            }
            Action::Place { to } => {
                execute::place_from_reserve(&mut self.board, mover, to, max_height)?
            }
        };

        Ok(self.finish(seat, action, evictions))
    }

    /// Full legality check for `seat` taking `action`, turn order included.
    fn check(&self, seat: PlayerId, action: Action) -> Result<(), RuleError> {
        if self.turn.is_over() {
            return Err(RuleError::GameOver);
        }
        match action {
            Action::Move { from, to, count } => {
                self.check_turn(seat)?;
                validate::check_move(&self.board, self.players[seat].color(), from, to, count)
            }
            Action::Place { to } => {
                if self.players[seat].reserve_count() == 0 {
                    return Err(RuleError::NoReserve);
                }
                self.check_turn(seat)?;
                validate::check_location(to)
            }
        }
    }

    fn check_turn(&self, seat: PlayerId) -> Result<(), RuleError> {
        if self.turn.allows(seat) {
            Ok(())
        } else {
            Err(RuleError::NotYourTurn)
        }
    }

    /// Record the action, then either declare a winner or pass the turn.
    fn finish(&mut self, seat: PlayerId, action: Action, evictions: Evictions) -> Outcome {
        let sequence = self.history.len() + 1;
        self.history
            .push_back(ActionRecord::new(seat, action, sequence, evictions));

        let mover = &self.players[seat];
        if mover.captured_count() >= self.config.captures_to_win {
            info!(winner = mover.name(), captured = mover.captured_count(), "game won");
            self.turn = TurnState::GameOver { winner: seat };
            Outcome::PlayerWins(mover.name().to_string())
        } else {
            self.turn = TurnState::ToMove(seat.opponent());
            Outcome::Success
        }
    }

    /// Check whether a move would be accepted, without making it.
    pub fn check_move(
        &self,
        player: &str,
        from: impl Into<Coord>,
        to: impl Into<Coord>,
        count: usize,
    ) -> Result<(), RuleError> {
        let seat = self.seat(player)?;
        self.check(seat, Action::move_stack(from, to, count))
    }

    /// Every action `player` could take right now.
    ///
    /// Empty once the game is over or while it is the opponent's turn.
    pub fn legal_actions(&self, player: &str) -> Result<Vec<Action>, RuleError> {
        let seat = self.seat(player)?;
        if !self.turn.allows(seat) {
            return Ok(Vec::new());
        }

        let me = &self.players[seat];
        let mut actions: Vec<Action> = self
            .board
            .controlled_by(me.color())
            .flat_map(|(from, stack)| {
                validate::reachable(from, stack.len())
                    .map(move |(to, count)| Action::Move { from, to, count })
            })
            .collect();

        if me.reserve_count() > 0 {
            actions.extend(Coord::all().map(|to| Action::Place { to }));
        }
        Ok(actions)
    }

    // === Queries ===

    /// Pieces at `at`, bottom-first, or `None` for an empty cell.
    pub fn pieces_at(&self, at: impl Into<Coord>) -> Result<Option<Vec<PieceColor>>, RuleError> {
        let at = at.into();
        validate::check_location(at)?;
        Ok(self.board.get(at).map(|s| s.bottom_to_top()))
    }

    /// Number of pieces in `player`'s reserve.
    pub fn reserve_count(&self, player: &str) -> Result<usize, RuleError> {
        self.player(player).map(Player::reserve_count)
    }

    /// Number of enemy pieces `player` has captured.
    pub fn captured_count(&self, player: &str) -> Result<usize, RuleError> {
        self.player(player).map(Player::captured_count)
    }

    /// Look up a player by name.
    pub fn player(&self, name: &str) -> Result<&Player, RuleError> {
        self.players
            .by_name(name)
            .ok_or_else(|| RuleError::UnknownPlayer(name.to_string()))
    }

    fn seat(&self, name: &str) -> Result<PlayerId, RuleError> {
        self.players
            .find(name)
            .ok_or_else(|| RuleError::UnknownPlayer(name.to_string()))
    }

    /// Both players.
    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Whose turn it is, by name.
    #[must_use]
    pub fn current_turn(&self) -> Turn {
        self.turn.to_view(&self.players)
    }

    /// Whose turn it is, by seat.
    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }

    /// Name of the winner, once there is one.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.turn.winner().map(|seat| self.players[seat].name())
    }

    /// Owned copy of the board.
    #[must_use]
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Owned copy of everything a renderer shows.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.board, &self.players, self.turn)
    }

    /// Successful actions so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vector<ActionRecord> {
        self.history.clone()
    }

    #[must_use]
    pub fn config(&self) -> &FocusConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stack::Stack;
    use PieceColor::{Green as G, Red as R};

    fn game() -> FocusGame {
        FocusGame::with_players(("A", R), ("B", G)).unwrap()
    }

    #[test]
    fn test_construct_rejects_same_color() {
        let err = FocusGame::with_players(("A", R), ("B", R)).unwrap_err();
        assert_eq!(err, ConfigError::SameColor(R));
    }

    #[test]
    fn test_fresh_game() {
        let g = game();
        assert_eq!(g.current_turn(), Turn::Unset);
        assert_eq!(g.reserve_count("A"), Ok(0));
        assert_eq!(g.captured_count("B"), Ok(0));
        assert_eq!(g.pieces_at((0, 0)), Ok(Some(vec![R])));
        assert!(g.history().is_empty());
        assert!(!g.is_over());
    }

    #[test]
    fn test_first_mover_claims_turn() {
        let mut g = game();
        assert_eq!(g.move_piece("B", (0, 2), (0, 1), 1), Ok(Outcome::Success));
        assert_eq!(g.current_turn(), Turn::ToMove("A".into()));
    }

    #[test]
    fn test_failed_first_attempt_leaves_turn_unset() {
        let mut g = game();
        assert!(g.move_piece("A", (0, 4), (0, 2), 2).is_err());
        assert_eq!(g.current_turn(), Turn::Unset);
        assert_eq!(g.move_piece("B", (0, 2), (0, 1), 1), Ok(Outcome::Success));
    }

    #[test]
    fn test_not_your_turn() {
        let mut g = game();
        g.move_piece("A", (0, 0), (0, 1), 1).unwrap();
        assert_eq!(g.move_piece("A", (0, 1), (0, 3), 2), Err(RuleError::NotYourTurn));
    }

    #[test]
    fn test_unknown_player() {
        let mut g = game();
        assert_eq!(
            g.move_piece("Z", (0, 0), (0, 1), 1),
            Err(RuleError::UnknownPlayer("Z".into()))
        );
        assert_eq!(g.reserve_count("Z"), Err(RuleError::UnknownPlayer("Z".into())));
        assert!(g.player("Z").is_err());
    }

    #[test]
    fn test_placement_check_order() {
        let mut g = game();
        // Empty reserve is reported before anything else.
        assert_eq!(g.place_from_reserve("A", (9, 9)), Err(RuleError::NoReserve));
    }

    #[test]
    fn test_pieces_at_off_board() {
        let g = game();
        assert_eq!(
            g.pieces_at((6, 6)),
            Err(RuleError::InvalidLocation(Coord::new(6, 6)))
        );
    }

    #[test]
    fn test_history_records_successes_only() {
        let mut g = game();
        g.move_piece("A", (0, 0), (0, 1), 1).unwrap();
        let _ = g.move_piece("B", (0, 0), (0, 1), 1);
        g.move_piece("B", (0, 2), (0, 3), 1).unwrap();

        let history = g.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].player, PlayerId::One);
        assert_eq!(history[0].sequence, 1);
        assert_eq!(history[1].action, Action::move_stack((0, 2), (0, 3), 1));
        assert_eq!(history[1].sequence, 2);
    }

    #[test]
    fn test_check_move_does_not_mutate() {
        let g = game();
        assert_eq!(g.check_move("A", (0, 0), (0, 1), 1), Ok(()));
        assert_eq!(g.current_turn(), Turn::Unset);
        assert_eq!(g.pieces_at((0, 0)), Ok(Some(vec![R])));
    }

    #[test]
    fn test_legal_actions_opening() {
        let g = game();
        let actions = g.legal_actions("A").unwrap();

        // 18 single red pieces, each with its in-bounds neighbours.
        assert!(!actions.is_empty());
        assert!(actions.iter().all(|a| matches!(a, Action::Move { count: 1, .. })));
        for action in &actions {
            if let Action::Move { from, to, count } = *action {
                assert_eq!(g.check_move("A", from, to, count), Ok(()));
            }
        }
    }

    #[test]
    fn test_legal_actions_respects_turn() {
        let mut g = game();
        g.move_piece("A", (0, 0), (0, 1), 1).unwrap();
        assert!(g.legal_actions("A").unwrap().is_empty());
        assert!(!g.legal_actions("B").unwrap().is_empty());
    }

    #[test]
    fn test_legal_actions_include_placements() {
        let mut board = Board::empty();
        board.set(Coord::new(0, 0), Stack::from_top_first(&[R, R, R, R, R]));
        board.set(Coord::new(0, 1), Stack::from_top_first(&[R]));
        board.set(Coord::new(5, 5), Stack::from_top_first(&[G]));
        let mut g = FocusGame::with_board(FocusConfig::new(("A", R), ("B", G)), board).unwrap();

        g.move_piece("A", (0, 1), (0, 0), 1).unwrap();
        assert_eq!(g.reserve_count("A"), Ok(1));
        g.move_piece("B", (5, 5), (4, 5), 1).unwrap();

        let actions = g.legal_actions("A").unwrap();
        let placements = actions
            .iter()
            .filter(|a| matches!(a, Action::Place { .. }))
            .count();
        assert_eq!(placements, 36);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut g = game();
        let before = g.snapshot();
        let board_before = g.board_snapshot();

        g.move_piece("A", (0, 0), (0, 1), 1).unwrap();

        assert_eq!(before.board.get(Coord::new(0, 0)).map(Stack::len), Some(1));
        assert_eq!(board_before.get(Coord::new(0, 1)).map(Stack::len), Some(1));
        assert_eq!(before.turn, Turn::Unset);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Success.to_string(), "successfully moved");
        assert_eq!(Outcome::PlayerWins("A".into()).to_string(), "A wins");
        assert_eq!(Outcome::PlayerWins("A".into()).winner(), Some("A"));
        assert_eq!(Outcome::Success.winner(), None);
    }
}
