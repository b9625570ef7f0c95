use super::types::{BOARD_SIZE, Cell, Mark, Position, WinningLine};

type Cells = [[Cell; BOARD_SIZE]; BOARD_SIZE];

const fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Every line that wins the game: both diagonals, the rows, then the columns.
pub const LINES: [[Position; BOARD_SIZE]; 8] = [
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
];

pub fn check_win(cells: &Cells) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &Cells) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a.row][a.col].mark()?;
        let completed = cells[b.row][b.col] == Cell::Marked(mark)
            && cells[c.row][c.col] == Cell::Marked(mark);
        completed.then(|| WinningLine::new(mark, a, c))
    })
}
