use crate::ui::menu::{MenuAnchor, MenuKind};
use eframe::egui::{self, Align2, Order};

/// Draws a popup hanging below the right edge of its anchor.
pub fn anchored_popup(
    ctx: &egui::Context,
    kind: MenuKind,
    anchor: &MenuAnchor,
    min_width: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Area::new(kind.popup_id())
        .order(Order::Foreground)
        .pivot(Align2::RIGHT_TOP)
        .fixed_pos(anchor.rect.right_bottom())
        .constrain(true)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(min_width);
                add_contents(ui);
            });
        });
}

/// A full-width, frameless menu entry.
pub fn menu_item(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(
        egui::Button::new(text)
            .frame(false)
            .min_size(egui::vec2(ui.min_rect().width().max(120.0), 28.0)),
    )
}
