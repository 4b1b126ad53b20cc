use crate::store::{Navigator, Route};
use eframe::egui;

/// Side navigation opened from the app bar's drawer button.
pub struct Drawer {}

impl Drawer {
    pub fn new() -> Self {
        Self {}
    }

    /// Returns false once the user asked to close the drawer.
    pub fn show(&mut self, ui: &mut egui::Ui, navigator: &mut impl Navigator) -> bool {
        let mut keep_open = true;
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("◀").on_hover_text("close drawer").clicked() {
                    keep_open = false;
                }
            });
        });
        ui.separator();
        for (label, route) in [
            ("Home", Route::home()),
            ("Settings", Route::settings()),
            ("Email", Route::email()),
        ] {
            if ui.selectable_label(false, label).clicked() {
                navigator.push(route);
            }
        }
        keep_open
    }
}
