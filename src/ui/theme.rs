//! Theme constants for the checkers GUI

use egui::Color32;

// Board colors - classic wood tones
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(235, 209, 166);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(165, 117, 80);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(92, 62, 40);

// Piece colors with better contrast
pub const BLACK_PIECE: Color32 = Color32::from_rgb(40, 40, 45);
pub const BLACK_PIECE_RIM: Color32 = Color32::from_rgb(15, 15, 18);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(242, 238, 230);
pub const WHITE_PIECE_RIM: Color32 = Color32::from_rgb(180, 172, 160);
pub const KING_MARK: Color32 = Color32::from_rgb(212, 175, 55);

// Markers
pub const SELECTED_SQUARE: Color32 = Color32::from_rgba_premultiplied(90, 170, 90, 120);
pub const TARGET_DOT: Color32 = Color32::from_rgba_premultiplied(60, 140, 60, 160);
pub const LAST_MOVE_SQUARE: Color32 = Color32::from_rgba_premultiplied(200, 170, 60, 70);

// Hover colors
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 160, 80, 90)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(200, 60, 60, 70)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const RESULT_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const TARGET_DOT_RADIUS_RATIO: f32 = 0.14;
pub const SQUARE_STROKE_WIDTH: f32 = 1.0;
