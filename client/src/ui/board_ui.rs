use std::time::Duration;

use common::games::tictactoe::{
    BOARD_SIZE, Cell, GameMode, GameSession, Mark, Outcome, Position, RoundState,
};
use common::log;
use egui::{RichText, Stroke};

use super::{UiAction, panel_frame};
use crate::board_layout::BoardLayout;
use crate::colors;

const GRID_LINE_WIDTH: f32 = 5.0;
const BOARD_MARGIN: f32 = 8.0;
const STATUS_TEXT_SIZE: f32 = 24.0;
const RESULT_TEXT_SIZE: f32 = 40.0;

#[derive(Default)]
pub struct BoardUi {
    hovered: Option<Position>,
}

impl BoardUi {
    pub fn render(&mut self, ctx: &egui::Context, session: &mut GameSession) -> Option<UiAction> {
        let mut action = None;

        egui::TopBottomPanel::top("round_status")
            .frame(panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("Time: {}s", session.elapsed().as_secs()))
                            .size(STATUS_TEXT_SIZE)
                            .color(colors::TEXT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(status_text(session))
                                .size(STATUS_TEXT_SIZE)
                                .color(colors::TEXT),
                        );
                    });
                });
            });

        if let RoundState::Terminal(outcome) = session.state() {
            egui::TopBottomPanel::bottom("round_over")
                .frame(panel_frame())
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(result_text(outcome))
                                .size(RESULT_TEXT_SIZE)
                                .color(colors::TEXT)
                                .strong(),
                        );
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            if ui
                                .button(RichText::new("Play Again").size(STATUS_TEXT_SIZE))
                                .clicked()
                            {
                                action = Some(UiAction::PlayAgain);
                            }
                            if ui
                                .button(RichText::new("Back to Main Menu").size(STATUS_TEXT_SIZE))
                                .clicked()
                            {
                                action = Some(UiAction::BackToMenu);
                            }
                        });
                    });
                });
        }

        egui::CentralPanel::default()
            .frame(panel_frame())
            .show(ctx, |ui| {
                self.render_board(ui, session);
            });

        if !session.status().is_terminal() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        action
    }

    fn render_board(&mut self, ui: &mut egui::Ui, session: &mut GameSession) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let layout = BoardLayout::fit(response.rect.shrink(BOARD_MARGIN));

        if response.clicked()
            && session.is_human_turn()
            && let Some(pos) = response
                .interact_pointer_pos()
                .and_then(|pos| layout.position_at(pos))
        {
            match session.place_human_mark(pos) {
                Ok(()) => ui.ctx().request_repaint(),
                Err(e) => log!("Ignored click on {}: {}", pos, e),
            }
        }

        self.hovered = response
            .hover_pos()
            .and_then(|pos| layout.position_at(pos))
            .filter(|&pos| session.is_human_turn() && session.board().is_empty_at(pos));

        if let Some(pos) = self.hovered {
            painter.rect_filled(layout.cell_rect(pos), 0.0, colors::HOVER);
        }

        draw_grid(&painter, &layout);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                match session.board().get(pos) {
                    Some(Cell::Marked(Mark::X)) => draw_x(&painter, layout.cell_rect(pos)),
                    Some(Cell::Marked(Mark::O)) => draw_o(&painter, layout.cell_rect(pos)),
                    _ => {}
                }
            }
        }

        if let Some(line) = session.winning_line() {
            painter.line_segment(
                [layout.cell_center(line.start), layout.cell_center(line.end)],
                Stroke::new(layout.cell_size() * 0.08, colors::WINNING_LINE),
            );
        }
    }
}

fn draw_grid(painter: &egui::Painter, layout: &BoardLayout) {
    let rect = layout.rect();
    let stroke = Stroke::new(GRID_LINE_WIDTH, colors::GRID_LINE);

    for i in 1..BOARD_SIZE {
        let offset = i as f32 * layout.cell_size();
        painter.line_segment(
            [
                egui::pos2(rect.left(), rect.top() + offset),
                egui::pos2(rect.right(), rect.top() + offset),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.left() + offset, rect.top()),
                egui::pos2(rect.left() + offset, rect.bottom()),
            ],
            stroke,
        );
    }
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let space = rect.width() / 4.0;
    let stroke = Stroke::new(rect.width() * 0.12, colors::CROSS);

    painter.line_segment(
        [
            egui::pos2(rect.left() + space, rect.bottom() - space),
            egui::pos2(rect.right() - space, rect.top() + space),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.left() + space, rect.top() + space),
            egui::pos2(rect.right() - space, rect.bottom() - space),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let radius = rect.width() / 3.0;
    painter.circle_stroke(rect.center(), radius, Stroke::new(rect.width() * 0.08, colors::CIRCLE));
}

fn status_text(session: &GameSession) -> String {
    match (session.state(), session.mode()) {
        (RoundState::AwaitingMove(mark), GameMode::PlayerVsPlayer) => format!("{} to move", mark),
        (RoundState::AwaitingMove(mark), GameMode::PlayerVsComputer { human }) if mark == human => {
            format!("Your turn ({})", mark)
        }
        (RoundState::AwaitingMove(mark), GameMode::PlayerVsComputer { .. }) => {
            format!("Computer ({}) is thinking", mark)
        }
        (RoundState::Terminal(outcome), _) => result_text(outcome),
    }
}

fn result_text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won(mark) => format!("{} wins!", mark),
        Outcome::Draw => "It's a draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_for_computer_round() {
        let mut session = GameSession::new(GameMode::PlayerVsComputer { human: Mark::O });
        assert_eq!(status_text(&session), "Computer (X) is thinking");
        session.play_computer_turn();
        assert_eq!(status_text(&session), "Your turn (O)");
    }

    #[test]
    fn test_status_text_for_finished_round() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        assert_eq!(status_text(&session), "X to move");
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.place_human_mark(Position::new(row, col)).unwrap();
        }
        assert_eq!(status_text(&session), "X wins!");
        assert_eq!(result_text(Outcome::Draw), "It's a draw!");
    }
}
