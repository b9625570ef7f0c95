use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(28, 170, 156);
pub const GRID_LINE: Color32 = Color32::from_rgb(23, 145, 135);
pub const CIRCLE: Color32 = Color32::from_rgb(239, 231, 200);
pub const CROSS: Color32 = Color32::from_rgb(66, 66, 66);
pub const TEXT: Color32 = Color32::WHITE;
pub const WINNING_LINE: Color32 = Color32::from_rgba_premultiplied(200, 40, 40, 220);
pub const HOVER: Color32 = Color32::from_rgba_premultiplied(40, 40, 40, 40);
