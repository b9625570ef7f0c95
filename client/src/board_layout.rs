use common::games::tictactoe::{BOARD_SIZE, Position};
use egui::{Pos2, Rect, vec2};

/// Screen geometry of the board: the largest square that fits the available
/// area, centered in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    rect: Rect,
    cell_size: f32,
}

impl BoardLayout {
    pub fn fit(container: Rect) -> Self {
        let side = container.width().min(container.height()).max(0.0);
        let rect = Rect::from_center_size(container.center(), vec2(side, side));
        Self {
            rect,
            cell_size: side / BOARD_SIZE as f32,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cell_rect(&self, pos: Position) -> Rect {
        let min = self.rect.min + vec2(pos.col as f32, pos.row as f32) * self.cell_size;
        Rect::from_min_size(min, vec2(self.cell_size, self.cell_size))
    }

    pub fn cell_center(&self, pos: Position) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// The cell under `point`. The right and bottom edges belong to no cell.
    pub fn position_at(&self, point: Pos2) -> Option<Position> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let in_x = point.x >= self.rect.left() && point.x < self.rect.right();
        let in_y = point.y >= self.rect.top() && point.y < self.rect.bottom();
        if !(in_x && in_y) {
            return None;
        }
        let col = ((point.x - self.rect.left()) / self.cell_size) as usize;
        let row = ((point.y - self.rect.top()) / self.cell_size) as usize;
        Some(Position::new(row.min(BOARD_SIZE - 1), col.min(BOARD_SIZE - 1)))
    }
}
