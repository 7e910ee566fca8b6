use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Board, InputEvent, Orientation, Piece, PieceKind, Player, Point, Reserve};

/// What the current input is about to do.
///
/// The two kinds of selection are mutually exclusive, and both always come
/// with a non-empty set of candidate cells, which are also the highlighted
/// cells of the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    /// A piece of the side to move was picked up.
    Square {
        from: Point,
        destinations: BTreeSet<Point>,
    },
    /// A piece from the reserve of the side to move is waiting to be dropped.
    Reserve {
        kind: PieceKind,
        cells: BTreeSet<Point>,
    },
}

/// Summarizes what an input did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputOutcome {
    /// A piece on the board was selected.
    Selected { at: Point, candidates: usize },
    /// A piece in the reserve was selected.
    ReserveSelected { kind: PieceKind, candidates: usize },
    /// The previous selection, if any, was dropped.
    Deselected,
    /// A piece moved, possibly capturing another one. The turn passed.
    Moved {
        from: Point,
        to: Point,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde(default)]
        captured: Option<PieceKind>,
    },
    /// A piece from the reserve was put on the board. The turn passed.
    Dropped { kind: PieceKind, at: Point },
    /// Nothing changed.
    Ignored,
}

impl InputOutcome {
    /// Did this input end the turn?
    pub fn is_turn(&self) -> bool {
        matches!(self, InputOutcome::Moved { .. } | InputOutcome::Dropped { .. })
    }
}

/// The cells a piece standing at `from` may move to.
///
/// Every move offset is applied in the piece's orientation. A target is
/// legal if it is on the board and not occupied by a piece of the same side.
/// Returns an empty set if there is no piece at `from`.
pub fn legal_destinations(board: &Board, from: Point) -> BTreeSet<Point> {
    let Some(piece) = board.piece_at(from) else {
        return BTreeSet::new();
    };
    piece
        .kind
        .moves()
        .iter()
        .map(|&offset| piece.orientation.apply(from, offset))
        .filter(|&to| match board.get(to) {
            None => false,
            Some(cell) => cell
                .piece
                .map_or(true, |other| other.orientation != piece.orientation),
        })
        .collect()
}

/// The cells a piece from the reserve may be dropped on: all empty cells.
pub fn drop_cells(board: &Board) -> BTreeSet<Point> {
    board.empty_cells().collect()
}

/// The rule engine.
///
/// Owns the board and both players, keeps track of whose turn it is and
/// what is currently selected. Everything that happens in a game goes
/// through [`Self::handle_cell_input()`] and [`Self::select_reserve_slot()`]
/// (or [`Self::apply()`], which dispatches to them). Invalid inputs never
/// fail, they just change or clear the selection.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    // Indexed by `player_idx()`
    players: [Player; 2],
    turn: Orientation,
    selection: Selection,
}

fn player_idx(orientation: Orientation) -> usize {
    match orientation {
        Orientation::Forward => 0,
        Orientation::Backward => 1,
    }
}

impl Game {
    /// A game on the given board with empty reserves, forward to move.
    pub fn new(board: Board) -> Self {
        Self::with_reserves(board, Reserve::new(), Reserve::new(), Orientation::Forward)
    }

    /// A game in the starting position.
    pub fn standard() -> Self {
        Self::new(Board::standard())
    }

    pub fn with_reserves(
        mut board: Board,
        forward_reserve: Reserve,
        backward_reserve: Reserve,
        first_to_move: Orientation,
    ) -> Self {
        board.clear_highlights();
        Self {
            board,
            players: [
                Player::with_reserve(Orientation::Forward, forward_reserve),
                Player::with_reserve(Orientation::Backward, backward_reserve),
            ],
            turn: first_to_move,
            selection: Selection::None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, orientation: Orientation) -> &Player {
        &self.players[player_idx(orientation)]
    }

    /// Whose turn it is.
    pub fn turn(&self) -> Orientation {
        self.turn
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.turn)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_square(&self) -> Option<Point> {
        match self.selection {
            Selection::Square { from, .. } => Some(from),
            _ => None,
        }
    }

    /// The reserve kind waiting to be dropped, if any.
    pub fn pending_reserve(&self) -> Option<PieceKind> {
        match self.selection {
            Selection::Reserve { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Pieces on the board plus pieces in both reserves.
    ///
    /// Captures and drops move pieces around, but never change this number.
    pub fn total_pieces(&self) -> usize {
        self.board.piece_count()
            + self
                .players
                .iter()
                .map(|p| p.reserve().len())
                .sum::<usize>()
    }

    /// Dispatches an event from the input mapper.
    pub fn apply(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::Cell { x, y } => self.handle_cell_input(Point::new(x, y)),
            InputEvent::Reserve { owner, slot } => self.select_reserve_slot(owner, slot),
        }
    }

    /// Reacts to a click/keypress on a board cell.
    ///
    /// Reserve drops take precedence: if a reserve piece is pending, it is
    /// dropped here if possible. Otherwise the input either moves the
    /// selected piece, or selects (or deselects) the piece at `p`.
    pub fn handle_cell_input(&mut self, p: Point) -> InputOutcome {
        if self.pending_reserve().is_some() {
            let outcome = self.attempt_drop(p);
            if outcome.is_turn() {
                return outcome;
            }
        }
        match self.selection {
            Selection::Square { .. } => self.attempt_move(p),
            _ => self.select_square(p),
        }
    }

    /// Selects the piece at `p` if it belongs to the side to move and has
    /// somewhere to go. Otherwise, clears the selection.
    pub fn select_square(&mut self, p: Point) -> InputOutcome {
        self.board.clear_highlights();
        self.selection = Selection::None;

        let own_piece = self
            .board
            .piece_at(p)
            .is_some_and(|piece| piece.orientation == self.turn);
        if !own_piece {
            trace!(%p, "Deselected");
            return InputOutcome::Deselected;
        }
        let destinations = legal_destinations(&self.board, p);
        if destinations.is_empty() {
            trace!(%p, "Selected piece has no moves");
            return InputOutcome::Deselected;
        }

        for &to in &destinations {
            self.board[to].highlight();
        }
        let candidates = destinations.len();
        trace!(%p, candidates, "Selected piece");
        self.selection = Selection::Square {
            from: p,
            destinations,
        };
        InputOutcome::Selected { at: p, candidates }
    }

    /// Moves the selected piece to `to`, capturing whatever stands there.
    ///
    /// If `to` is not a legal destination for the selected piece (or no
    /// piece is selected), this is the same as [`Self::select_square()`].
    pub fn attempt_move(&mut self, to: Point) -> InputOutcome {
        let from = match &self.selection {
            Selection::Square { from, destinations } if destinations.contains(&to) => *from,
            _ => return self.select_square(to),
        };

        // Both cells were checked when the selection was made
        let Some(piece) = self.board[from].take_piece() else {
            unreachable!("selected square {} is empty", from);
        };
        let captured = self.board[to].piece.replace(piece).map(|victim| victim.kind);
        if let Some(kind) = captured {
            debug!(mover = %self.turn, %kind, %to, "Captured piece");
            self.players[player_idx(self.turn)].add_captured(kind);
        }
        debug!(side = %self.turn, kind = %piece.kind, %from, %to, "Moved piece");

        self.end_turn();
        InputOutcome::Moved { from, to, captured }
    }

    /// Selects a reserve kind of the side to move for dropping.
    ///
    /// Ignored if the side to move has no such piece, or if there is no
    /// empty cell to drop it on.
    pub fn select_reserve_type(&mut self, kind: PieceKind) -> InputOutcome {
        if !self.current_player().reserve().contains(kind) {
            trace!(%kind, side = %self.turn, "Reserve piece not available");
            return InputOutcome::Ignored;
        }
        let cells = drop_cells(&self.board);
        if cells.is_empty() {
            trace!(%kind, "No empty cell to drop on");
            return InputOutcome::Ignored;
        }

        self.board.clear_highlights();
        for &p in &cells {
            self.board[p].highlight();
        }
        let candidates = cells.len();
        trace!(%kind, candidates, "Selected reserve piece");
        self.selection = Selection::Reserve { kind, cells };
        InputOutcome::ReserveSelected { kind, candidates }
    }

    /// Like [`Self::select_reserve_type()`], but only if `owner` is the side
    /// to move.
    pub fn select_reserve_piece(&mut self, owner: Orientation, kind: PieceKind) -> InputOutcome {
        if owner != self.turn {
            trace!(%owner, "Not this player's turn");
            return InputOutcome::Ignored;
        }
        self.select_reserve_type(kind)
    }

    /// Selects the `slot`-th kind (in [`Reserve::kinds()`] order) of
    /// `owner`'s reserve.
    pub fn select_reserve_slot(&mut self, owner: Orientation, slot: usize) -> InputOutcome {
        match self.player(owner).reserve_contents().get(slot) {
            Some(&kind) => self.select_reserve_piece(owner, kind),
            None => InputOutcome::Ignored,
        }
    }

    /// Drops the pending reserve piece on `at`.
    ///
    /// If `at` is not an empty cell, the drop fails and the selection is
    /// cleared. Ignored if there is no pending reserve piece.
    pub fn attempt_drop(&mut self, at: Point) -> InputOutcome {
        let kind = match &self.selection {
            Selection::Reserve { kind, .. } => *kind,
            _ => return InputOutcome::Ignored,
        };
        let is_empty = self.board.get(at).is_some_and(|cell| !cell.contains_piece());
        if !is_empty {
            trace!(%at, %kind, "Cannot drop here");
            self.board.clear_highlights();
            self.selection = Selection::None;
            return InputOutcome::Deselected;
        }

        // Only kinds in the reserve can be selected
        self.players[player_idx(self.turn)].remove_captured(kind);
        self.board[at].piece = Some(Piece::new(self.turn, kind));
        debug!(side = %self.turn, %kind, %at, "Dropped piece");

        self.end_turn();
        InputOutcome::Dropped { kind, at }
    }

    fn end_turn(&mut self) {
        self.board.clear_highlights();
        self.selection = Selection::None;
        self.turn = self.turn.opponent();
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{ArbitraryBoard, ArbitraryGame, Inputs};

    fn chicken(orientation: Orientation) -> Piece {
        Piece::new(orientation, PieceKind::Chicken)
    }

    fn highlighted(game: &Game) -> Vec<Point> {
        game.board().highlighted_cells().collect()
    }

    fn assert_invariants(game: &Game) {
        let highlights: BTreeSet<Point> = game.board().highlighted_cells().collect();
        match game.selection() {
            Selection::None => assert!(highlights.is_empty()),
            Selection::Square { from, destinations } => {
                assert_eq!(
                    game.board().piece_at(*from).map(|p| p.orientation),
                    Some(game.turn())
                );
                assert!(!destinations.is_empty());
                assert_eq!(&highlights, destinations);
            }
            Selection::Reserve { kind, cells } => {
                assert!(game.current_player().reserve().contains(*kind));
                assert!(!cells.is_empty());
                assert_eq!(&highlights, cells);
            }
        }
    }

    #[test]
    fn scenario_move_to_empty_cell() {
        let mut board = Board::empty(1, 2);
        board[Point::new(0, 0)].piece = Some(chicken(Orientation::Forward));
        let mut game = Game::new(board);

        let outcome = game.handle_cell_input(Point::new(0, 0));
        assert_eq!(
            outcome,
            InputOutcome::Selected {
                at: Point::new(0, 0),
                candidates: 1
            }
        );
        assert_eq!(highlighted(&game), vec![Point::new(0, 1)]);

        let outcome = game.handle_cell_input(Point::new(0, 1));
        assert_eq!(
            outcome,
            InputOutcome::Moved {
                from: Point::new(0, 0),
                to: Point::new(0, 1),
                captured: None
            }
        );
        assert_eq!(game.selection(), &Selection::None);
        assert!(highlighted(&game).is_empty());
        assert_eq!(game.turn(), Orientation::Backward);
        assert_eq!(game.board().piece_at(Point::new(0, 0)), None);
        assert_eq!(
            game.board().piece_at(Point::new(0, 1)),
            Some(chicken(Orientation::Forward))
        );
    }

    #[test]
    fn scenario_capture() {
        let board: Board = "e\nC".parse().unwrap();
        let mut game = Game::new(board);
        let before = game.total_pieces();

        game.handle_cell_input(Point::new(0, 0));
        let outcome = game.handle_cell_input(Point::new(0, 1));
        assert_eq!(
            outcome,
            InputOutcome::Moved {
                from: Point::new(0, 0),
                to: Point::new(0, 1),
                captured: Some(PieceKind::Elephant)
            }
        );
        assert_eq!(
            game.player(Orientation::Forward).reserve_contents(),
            vec![PieceKind::Elephant]
        );
        assert_eq!(
            game.player(Orientation::Forward)
                .reserve()
                .count(PieceKind::Elephant),
            1
        );
        assert!(game.player(Orientation::Backward).reserve().is_empty());
        assert_eq!(
            game.board().piece_at(Point::new(0, 1)),
            Some(chicken(Orientation::Forward))
        );
        assert_eq!(game.total_pieces(), before);
    }

    #[test]
    fn scenario_drop_from_reserve() {
        let board: Board = "
            c.
            .L
        "
        .parse()
        .unwrap();
        let reserve = Reserve::from_iter([PieceKind::Giraffe]);
        let mut game =
            Game::with_reserves(board, reserve, Reserve::new(), Orientation::Forward);
        let before = game.total_pieces();

        let outcome = game.select_reserve_type(PieceKind::Giraffe);
        assert_eq!(
            outcome,
            InputOutcome::ReserveSelected {
                kind: PieceKind::Giraffe,
                candidates: 2
            }
        );
        assert_eq!(highlighted(&game), vec![Point::new(0, 0), Point::new(1, 1)]);
        assert_eq!(game.pending_reserve(), Some(PieceKind::Giraffe));

        // Occupied cell: the drop fails and the selection is gone
        let board_before = game.board().to_rows();
        let outcome = game.attempt_drop(Point::new(0, 1));
        assert_eq!(outcome, InputOutcome::Deselected);
        assert_eq!(game.pending_reserve(), None);
        assert!(highlighted(&game).is_empty());
        assert_eq!(game.board().to_rows(), board_before);
        assert_eq!(
            game.player(Orientation::Forward)
                .reserve()
                .count(PieceKind::Giraffe),
            1
        );
        assert_eq!(game.turn(), Orientation::Forward);

        game.select_reserve_type(PieceKind::Giraffe);
        let outcome = game.attempt_drop(Point::new(1, 1));
        assert_eq!(
            outcome,
            InputOutcome::Dropped {
                kind: PieceKind::Giraffe,
                at: Point::new(1, 1)
            }
        );
        assert!(game.player(Orientation::Forward).reserve().is_empty());
        assert_eq!(
            game.board().piece_at(Point::new(1, 1)),
            Some(Piece::new(Orientation::Forward, PieceKind::Giraffe))
        );
        assert_eq!(game.turn(), Orientation::Backward);
        assert_eq!(game.total_pieces(), before);
    }

    #[test]
    fn scenario_invalid_selection_changes_nothing() {
        let mut game = Game::standard();
        let board_before = game.board().clone();

        // Opponent's lion
        assert_eq!(
            game.handle_cell_input(Point::new(1, 3)),
            InputOutcome::Deselected
        );
        // Empty cell
        assert_eq!(
            game.handle_cell_input(Point::new(0, 1)),
            InputOutcome::Deselected
        );
        // Off the board
        assert_eq!(
            game.handle_cell_input(Point::new(7, -2)),
            InputOutcome::Deselected
        );

        assert_eq!(game.board(), &board_before);
        assert_eq!(game.selection(), &Selection::None);
        assert_eq!(game.turn(), Orientation::Forward);
    }

    #[test]
    fn move_to_non_candidate_reselects() {
        let mut game = Game::standard();
        game.handle_cell_input(Point::new(1, 0)); // lion
        assert_eq!(game.selected_square(), Some(Point::new(1, 0)));

        // Another own piece: reselect
        let outcome = game.handle_cell_input(Point::new(1, 1));
        assert_eq!(
            outcome,
            InputOutcome::Selected {
                at: Point::new(1, 1),
                candidates: 1
            }
        );
        assert_eq!(highlighted(&game), vec![Point::new(1, 2)]);

        // Not a candidate and not an own piece: deselect
        let outcome = game.handle_cell_input(Point::new(2, 2));
        assert_eq!(outcome, InputOutcome::Deselected);
        assert_eq!(game.selection(), &Selection::None);
        assert!(highlighted(&game).is_empty());
        assert_eq!(game.turn(), Orientation::Forward);
    }

    #[test]
    fn blocked_piece_cannot_be_selected() {
        // The giraffe is walled in by its own pieces and the board edge
        let mut game = Game::new("C.\nGC".parse().unwrap());
        assert_eq!(
            game.handle_cell_input(Point::new(0, 0)),
            InputOutcome::Deselected
        );
        assert_eq!(game.selection(), &Selection::None);
    }

    #[test]
    fn standard_opening_moves() {
        let game = Game::standard();
        let lion = legal_destinations(game.board(), Point::new(1, 0));
        assert_eq!(
            lion,
            BTreeSet::from([Point::new(0, 1), Point::new(2, 1)])
        );
        let giraffe = legal_destinations(game.board(), Point::new(2, 0));
        assert_eq!(giraffe, BTreeSet::from([Point::new(2, 1)]));
        // The backward chicken attacks the forward chicken
        let chick = legal_destinations(game.board(), Point::new(1, 2));
        assert_eq!(chick, BTreeSet::from([Point::new(1, 1)]));
    }

    #[test]
    fn pending_drop_takes_precedence_over_selection() {
        let board: Board = "..\nC.".parse().unwrap();
        let reserve = Reserve::from_iter([PieceKind::Chicken]);
        let mut game =
            Game::with_reserves(board, reserve, Reserve::new(), Orientation::Forward);

        game.select_reserve_slot(Orientation::Forward, 0);
        // Dropping on an own piece fails, and the same input selects it
        let outcome = game.handle_cell_input(Point::new(0, 0));
        assert_eq!(
            outcome,
            InputOutcome::Selected {
                at: Point::new(0, 0),
                candidates: 1
            }
        );
        assert_eq!(game.pending_reserve(), None);
        assert_eq!(
            game.player(Orientation::Forward)
                .reserve()
                .count(PieceKind::Chicken),
            1
        );

        // With a piece selected, a reserve selection replaces it
        game.select_reserve_slot(Orientation::Forward, 0);
        assert_eq!(game.selected_square(), None);
        let outcome = game.handle_cell_input(Point::new(1, 1));
        assert_eq!(
            outcome,
            InputOutcome::Dropped {
                kind: PieceKind::Chicken,
                at: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn reserve_selection_is_checked() {
        let board: Board = "..\nC.".parse().unwrap();
        let mut game = Game::with_reserves(
            board,
            Reserve::from_iter([PieceKind::Lion]),
            Reserve::from_iter([PieceKind::Elephant]),
            Orientation::Forward,
        );

        // Not their turn
        assert_eq!(
            game.select_reserve_slot(Orientation::Backward, 0),
            InputOutcome::Ignored
        );
        assert_eq!(
            game.select_reserve_piece(Orientation::Backward, PieceKind::Elephant),
            InputOutcome::Ignored
        );
        // Not in the reserve
        assert_eq!(
            game.select_reserve_type(PieceKind::Giraffe),
            InputOutcome::Ignored
        );
        // No such slot
        assert_eq!(
            game.select_reserve_slot(Orientation::Forward, 1),
            InputOutcome::Ignored
        );
        assert_eq!(game.selection(), &Selection::None);

        assert_eq!(
            game.apply(InputEvent::Reserve {
                owner: Orientation::Forward,
                slot: 0
            }),
            InputOutcome::ReserveSelected {
                kind: PieceKind::Lion,
                candidates: 3
            }
        );
    }

    #[test]
    fn no_drop_on_full_board() {
        let board: Board = "C".parse().unwrap();
        let mut game = Game::with_reserves(
            board,
            Reserve::from_iter([PieceKind::Lion]),
            Reserve::new(),
            Orientation::Forward,
        );
        assert_eq!(
            game.select_reserve_type(PieceKind::Lion),
            InputOutcome::Ignored
        );
        assert_eq!(game.pending_reserve(), None);
    }

    #[test]
    fn attempt_drop_without_pending_piece_is_ignored() {
        let mut game = Game::standard();
        game.select_square(Point::new(1, 1));
        assert_eq!(game.attempt_drop(Point::new(0, 1)), InputOutcome::Ignored);
        assert_eq!(game.selected_square(), Some(Point::new(1, 1)));
    }

    #[test]
    fn capture_then_drop_restores_board_count() {
        let mut game = Game::standard();
        let on_board = game.board().piece_count();

        // Forward chicken takes the backward chicken
        game.handle_cell_input(Point::new(1, 1));
        game.handle_cell_input(Point::new(1, 2));
        assert_eq!(game.board().piece_count(), on_board - 1);

        // Backward lion takes the forward chicken back
        let outcome = game.handle_cell_input(Point::new(1, 3));
        assert!(matches!(outcome, InputOutcome::Selected { .. }));
        game.handle_cell_input(Point::new(1, 2));
        assert_eq!(game.board().piece_count(), on_board - 2);

        // Forward drops its chicken
        game.select_reserve_slot(Orientation::Forward, 0);
        game.handle_cell_input(Point::new(0, 1));
        assert_eq!(game.board().piece_count(), on_board - 1);
        assert_eq!(game.total_pieces(), on_board);
        assert_eq!(
            game.board().piece_at(Point::new(0, 1)),
            Some(chicken(Orientation::Forward))
        );
        assert_eq!(game.turn(), Orientation::Backward);
    }

    quickcheck! {
        fn orientation_mirroring(input: ArbitraryBoard) -> bool {
            let board = input.0;
            let mirrored = board.cells().all(|(p, cell)| {
                let Some(piece) = cell.piece else { return true; };
                let expected: BTreeSet<Point> = piece
                    .kind
                    .moves()
                    .iter()
                    .map(|&d| match piece.orientation {
                        Orientation::Forward => p + d,
                        Orientation::Backward => p - d,
                    })
                    .filter(|&to| board.contains(to))
                    .filter(|&to| {
                        board.cell(to).piece.map_or(true, |o| o.orientation != piece.orientation)
                    })
                    .collect();
                legal_destinations(&board, p) == expected
            });
            mirrored
        }

        fn no_friendly_capture(input: ArbitraryBoard) -> bool {
            let board = input.0;
            let ok = board.cells().all(|(p, cell)| match cell.piece {
                None => legal_destinations(&board, p).is_empty(),
                Some(piece) => legal_destinations(&board, p).into_iter().all(|to| {
                    board.piece_at(to).map_or(true, |o| o.orientation != piece.orientation)
                }),
            });
            ok
        }

        fn pieces_are_conserved(input: ArbitraryGame, inputs: Inputs) -> bool {
            let mut game = input.0;
            let total = game.total_pieces();
            for event in inputs.0 {
                game.apply(event);
                if game.total_pieces() != total {
                    return false;
                }
            }
            true
        }

        fn turn_passes_only_on_moves_and_drops(input: ArbitraryGame, inputs: Inputs) -> bool {
            let mut game = input.0;
            for event in inputs.0 {
                let turn = game.turn();
                let outcome = game.apply(event);
                let switched = game.turn() != turn;
                if switched != outcome.is_turn() {
                    return false;
                }
            }
            true
        }

        fn selection_matches_highlights(input: ArbitraryGame, inputs: Inputs) -> bool {
            let mut game = input.0;
            for event in inputs.0 {
                game.apply(event);
                assert_invariants(&game);
            }
            true
        }

        fn failed_inputs_only_touch_the_selection(input: ArbitraryGame, inputs: Inputs) -> bool {
            let mut game = input.0;
            for event in inputs.0 {
                let rows = game.board().to_rows();
                let reserves = [
                    game.player(Orientation::Forward).reserve().clone(),
                    game.player(Orientation::Backward).reserve().clone(),
                ];
                let outcome = game.apply(event);
                if outcome.is_turn() {
                    continue;
                }
                if game.board().to_rows() != rows
                    || game.player(Orientation::Forward).reserve() != &reserves[0]
                    || game.player(Orientation::Backward).reserve() != &reserves[1]
                {
                    return false;
                }
            }
            true
        }
    }
}
