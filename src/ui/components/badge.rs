use crate::utils::colors::{BADGE, ON_DARK};
use eframe::egui::{self, pos2, vec2, Align2, FontId, Response, RichText};

/// Icon button with an optional count badge in its top-right corner.
/// A zero count paints no badge.
pub fn badged_icon_button(ui: &mut egui::Ui, icon: &str, badge: Option<usize>) -> Response {
    let response = ui.add(egui::Button::new(RichText::new(icon).size(20.0)).frame(false));
    if let Some(count) = badge.filter(|count| *count > 0) {
        let label = if count > 99 {
            "99+".to_string()
        } else {
            count.to_string()
        };
        let radius = 8.0;
        let center = pos2(response.rect.right() - 2.0, response.rect.top() + 2.0);
        let painter = ui.painter();
        let width = (label.len() as f32 * 6.0).max(radius * 2.0);
        painter.rect_filled(
            egui::Rect::from_center_size(center, vec2(width, radius * 2.0)),
            radius,
            BADGE,
        );
        painter.text(
            center,
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(11.0),
            ON_DARK,
        );
    }
    response
}
