use crate::{Board, Game, Orientation};

/// Draws the board as text, top row first.
///
/// Pieces use the symbols of the layout format. A highlighted cell is
/// followed by a `*`.
pub fn visualize_board(board: &Board) -> String {
    let header: Vec<String> = (0..board.cols()).map(|x| x.to_string()).collect();
    let mut result = format!("     {}", header.join(" "));
    result += "\n    ╭";
    for _ in 0..board.cols() {
        result += "──";
    }
    result += "╮\n";

    for y in (0..board.rows()).rev() {
        result += &format!("{:>3} │", y);
        for cell in board.row(y) {
            result.push(cell.piece.map_or('.', |p| p.symbol()));
            result.push(if cell.is_highlighted() { '*' } else { ' ' });
        }
        result += "│\n";
    }

    result += "    ╰";
    for _ in 0..board.cols() {
        result += "──";
    }
    result += "╯";
    result
}

/// Draws the board plus both reserves and whose turn it is.
pub fn visualize_game(game: &Game) -> String {
    let reserve_line = |owner: Orientation| {
        let slots: Vec<String> = game
            .player(owner)
            .reserve()
            .iter()
            .map(|(kind, count)| format!("{}x{}", kind, count))
            .collect();
        let marker = if game.pending_reserve().is_some() && game.turn() == owner {
            " (dropping)"
        } else {
            ""
        };
        format!("{:>8}: [{}]{}", owner, slots.join(", "), marker)
    };
    format!(
        "{}\n{}\n{}\n{} to move",
        reserve_line(Orientation::Backward),
        visualize_board(game.board()),
        reserve_line(Orientation::Forward),
        game.turn()
    )
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_game(self))
    }
}
