use eframe::egui::Color32;

pub const SECONDARY: Color32 = Color32::from_rgb(156, 39, 176);
pub const WARNING: Color32 = Color32::from_rgb(237, 108, 2);
pub const SUCCESS: Color32 = Color32::from_rgb(46, 125, 50);

pub const BADGE: Color32 = SECONDARY;
pub const ON_DARK: Color32 = Color32::WHITE;

/// Text color that stays readable on top of `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let [r, g, b, _] = background.to_array();
    let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    if luma > 160.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
