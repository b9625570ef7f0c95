use super::board::Board;
use super::types::{Mark, Position};

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: &Board, bot_mark: Mark) -> Self {
        Self {
            board: *board,
            bot_mark,
        }
    }
}

pub fn calculate_move(input: &BotInput) -> Option<Position> {
    select_best_move(&input.board, input.bot_mark, input.bot_mark.opponent())
}

/// Exhaustive minimax over the remaining game tree.
///
/// Candidates are tried in row-major order and only a strictly better score
/// replaces the current best, so among equally good moves the first one wins.
/// Returns `None` when no cell is empty. The caller's board is not modified.
pub fn select_best_move(board: &Board, maximizing: Mark, minimizing: Mark) -> Option<Position> {
    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in board.available_moves() {
        board.place_unchecked(pos, maximizing);
        let score = minimax(&mut board, 0, false, maximizing, minimizing);
        board.clear(pos);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

/// Scores `10 - depth` for a maximizing win and `depth - 10` for a minimizing
/// win, so faster wins and slower losses are preferred. A full board scores 0.
pub fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    maximizing: Mark,
    minimizing: Mark,
) -> i32 {
    match board.winner() {
        Some(winner) if winner == maximizing => return WIN_SCORE - depth,
        Some(winner) if winner == minimizing => return depth - WIN_SCORE,
        _ => {}
    }
    if board.is_full() {
        return 0;
    }

    let mark = if is_maximizing { maximizing } else { minimizing };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for pos in board.available_moves() {
        board.place_unchecked(pos, mark);
        let score = minimax(board, depth + 1, !is_maximizing, maximizing, minimizing);
        board.clear(pos);

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::GameStatus;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn test_completes_own_row_for_immediate_win() {
        let board = Board::from_rows([
            [X, X, E],
            [O, O, E],
            [E, E, E],
        ]);
        assert_eq!(
            select_best_move(&board, Mark::O, Mark::X),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn test_takes_diagonal_win() {
        let board = Board::from_rows([
            [X, O, O],
            [E, X, E],
            [E, E, E],
        ]);
        assert_eq!(
            select_best_move(&board, Mark::X, Mark::O),
            Some(Position::new(2, 2))
        );
    }

    #[test]
    fn test_blocks_opponent_win() {
        let board = Board::from_rows([
            [X, X, E],
            [E, O, E],
            [E, E, E],
        ]);
        assert_eq!(
            select_best_move(&board, Mark::O, Mark::X),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_blocks_column_threat() {
        let board = Board::from_rows([
            [O, X, E],
            [E, X, E],
            [E, E, E],
        ]);
        assert_eq!(
            select_best_move(&board, Mark::O, Mark::X),
            Some(Position::new(2, 1))
        );
    }

    #[test]
    fn test_answers_corner_opening_with_center() {
        let board = Board::from_rows([
            [X, E, E],
            [E, E, E],
            [E, E, E],
        ]);
        assert_eq!(
            select_best_move(&board, Mark::O, Mark::X),
            Some(Position::new(1, 1))
        );
    }

    #[test]
    fn test_empty_board_picks_first_cell_on_tie() {
        // Every opening is a draw under perfect play, so the first cell is kept.
        let board = Board::new();
        assert_eq!(
            select_best_move(&board, Mark::X, Mark::O),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_full_board_returns_none() {
        let board = Board::from_rows([
            [X, O, X],
            [X, O, O],
            [O, X, X],
        ]);
        assert_eq!(select_best_move(&board, Mark::X, Mark::O), None);
    }

    #[test]
    fn test_does_not_modify_callers_board() {
        let board = Board::from_rows([
            [X, E, E],
            [E, O, E],
            [E, E, E],
        ]);
        let before = board;
        let _ = select_best_move(&board, Mark::X, Mark::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut board = Board::from_rows([
            [X, O, E],
            [E, X, E],
            [E, E, O],
        ]);
        let before = board;
        let _ = minimax(&mut board, 0, true, Mark::X, Mark::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_depth_bias() {
        let mut won = Board::from_rows([
            [O, O, O],
            [X, X, E],
            [X, E, E],
        ]);
        assert_eq!(minimax(&mut won, 0, false, Mark::O, Mark::X), 10);
        assert_eq!(minimax(&mut won, 3, false, Mark::O, Mark::X), 7);
        assert_eq!(minimax(&mut won, 3, false, Mark::X, Mark::O), -7);
    }

    #[test]
    fn test_selected_cell_is_always_empty() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        while board.status() == GameStatus::InProgress {
            let pos = select_best_move(&board, mark, mark.opponent()).unwrap();
            assert!(board.is_empty_at(pos), "{} is occupied on\n{}", pos, board);
            board.place(pos, mark).unwrap();
            mark = mark.opponent();
        }
    }

    #[test]
    fn test_self_play_draws_from_every_opening() {
        // Every opening is a draw under perfect play.
        for opening in Board::new().available_moves() {
            let mut board = Board::new();
            board.place(opening, Mark::X).unwrap();
            let mut mark = Mark::O;
            while board.status() == GameStatus::InProgress {
                let input = BotInput::new(&board, mark);
                let pos = calculate_move(&input).unwrap();
                board.place(pos, mark).unwrap();
                mark = mark.opponent();
            }
            assert_eq!(board.status(), GameStatus::Draw, "opening {}\n{}", opening, board);
        }
    }

    #[test]
    fn test_self_play_from_empty_board_draws() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        while !board.status().is_terminal() {
            let pos = select_best_move(&board, mark, mark.opponent()).unwrap();
            board.place(pos, mark).unwrap();
            mark = mark.opponent();
        }
        assert_eq!(board.status(), GameStatus::Draw);
        assert!(board.is_full());
    }
}
