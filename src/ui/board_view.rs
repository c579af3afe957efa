//! Board rendering for the checkers GUI

use crate::board::{Board, Color, Pos, Rank};
use crate::rules::Move;
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selected: Option<Pos>,
        targets: &[Pos],
        last_move: Option<&Move>,
        interactive: bool,
    ) -> Option<Pos> {
        let size = board.size();
        let available_size = ui.available_size();

        let board_px = available_size.x.min(available_size.y) - 10.0;
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / size as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());
        self.board_rect = response.rect;

        // Border frame behind the squares
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);

        self.draw_squares(&painter, size);
        self.draw_coordinates(&painter, size);

        if let Some(mv) = last_move {
            self.draw_last_move(&painter, mv);
        }
        if let Some(pos) = selected {
            self.fill_square(&painter, pos, SELECTED_SQUARE);
        }

        self.draw_pieces(&painter, board);
        self.draw_targets(&painter, targets);

        // Handle hover preview and click
        let mut clicked_pos = None;

        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos, size) {
                    let is_target = targets.contains(&board_pos);
                    let hover_color = if is_target || !board.is_empty(board_pos) {
                        hover_valid()
                    } else {
                        hover_invalid()
                    };
                    self.fill_square(&painter, board_pos, hover_color);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the checkered squares
    fn draw_squares(&self, painter: &Painter, size: usize) {
        for row in 0..size as u8 {
            for col in 0..size as u8 {
                let pos = Pos::new(row, col);
                let fill = if pos.is_playable() { DARK_SQUARE } else { LIGHT_SQUARE };
                painter.rect_filled(self.square_rect(pos), CornerRadius::ZERO, fill);
            }
        }
    }

    /// Draw coordinate labels along the left and bottom edges
    fn draw_coordinates(&self, painter: &Painter, size: usize) {
        let font = egui::FontId::proportional(11.0);

        for col in 0..size {
            let letter = (b'a' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.max.y - BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LIGHT_SQUARE);
        }

        for row in 0..size {
            let y = self.board_rect.min.y + BOARD_MARGIN + (row as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{row}"),
                font.clone(),
                LIGHT_SQUARE,
            );
        }
    }

    /// Tint the origin and every landing square of the last move
    fn draw_last_move(&self, painter: &Painter, mv: &Move) {
        self.fill_square(painter, mv.from, LAST_MOVE_SQUARE);
        for &landing in &mv.path {
            self.fill_square(painter, landing, LAST_MOVE_SQUARE);
        }
    }

    /// Draw all pieces
    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for (pos, piece) in board.pieces() {
            let center = self.square_center(pos);
            let radius = self.cell_size * PIECE_RADIUS_RATIO;

            let (fill, rim) = match piece.color {
                Color::Black => (BLACK_PIECE, BLACK_PIECE_RIM),
                Color::White => (WHITE_PIECE, WHITE_PIECE_RIM),
            };

            // Shadow
            painter.circle_filled(
                center + Vec2::new(1.5, 1.5),
                radius,
                Color32::from_rgba_unmultiplied(0, 0, 0, 60),
            );
            painter.circle_filled(center, radius, fill);
            painter.circle_stroke(center, radius, Stroke::new(2.0, rim));

            if piece.rank == Rank::King {
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    "♛",
                    egui::FontId::proportional(radius * 1.2),
                    KING_MARK,
                );
            }
        }
    }

    /// Draw a dot on every legal destination of the selected piece
    fn draw_targets(&self, painter: &Painter, targets: &[Pos]) {
        let radius = self.cell_size * TARGET_DOT_RADIUS_RATIO;
        for &pos in targets {
            painter.circle_filled(self.square_center(pos), radius, TARGET_DOT);
        }
    }

    fn fill_square(&self, painter: &Painter, pos: Pos, color: Color32) {
        painter.rect_filled(self.square_rect(pos), CornerRadius::ZERO, color);
    }

    fn square_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + f32::from(pos.col) * self.cell_size,
                BOARD_MARGIN + f32::from(pos.row) * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
            .shrink(SQUARE_STROKE_WIDTH * 0.5)
    }

    fn square_center(&self, pos: Pos) -> Pos2 {
        self.square_rect(pos).center()
    }

    /// Convert screen coordinates to a board square
    pub fn screen_to_board(&self, screen_pos: Pos2, size: usize) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, size) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
