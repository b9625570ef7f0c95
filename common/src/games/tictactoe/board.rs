use std::fmt;

use super::error::IllegalMove;
use super::types::{BOARD_SIZE, Cell, GameStatus, Mark, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// The 3x3 grid. Cells only ever go from empty to marked through [`Board::place`];
/// [`Board::reset`] is the only way back.
///
/// At most one mark can own a completed line. That holds as long as marks are
/// placed alternately and play stops at the first win; the board itself does
/// not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of `Option<Mark>`, `None` being an empty cell.
    pub fn from_rows(rows: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, marks) in rows.iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                if let Some(mark) = mark {
                    board.cells[row][col] = Cell::Marked(*mark);
                }
            }
        }
        board
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), IllegalMove> {
        let Position { row, col } = pos;
        match self.get(pos) {
            None => Err(IllegalMove::OutOfBounds { row, col }),
            Some(Cell::Marked(_)) => Err(IllegalMove::Occupied { row, col }),
            Some(Cell::Empty) => {
                self.cells[row][col] = Cell::Marked(mark);
                Ok(())
            }
        }
    }

    /// Hypothetical placement during search. `pos` must come from
    /// [`Board::available_moves`] of this same board.
    pub(crate) fn place_unchecked(&mut self, pos: Position, mark: Mark) {
        debug_assert!(self.is_empty_at(pos), "search placed a mark on taken cell {}", pos);
        self.cells[pos.row][pos.col] = Cell::Marked(mark);
    }

    /// Undoes a hypothetical placement during search.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Cell::Empty;
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn status(&self) -> GameStatus {
        if let Some(mark) = self.winner() {
            GameStatus::Won(mark)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn marks_placed(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(mark) => write!(f, "{}", mark)?,
                }
            }
        }
        Ok(())
    }
}
