use super::popup::menu_item;
use crate::ui::app_bar::{AppBarAction, ProfileItem};
use eframe::egui;

pub struct ProfileMenu {}

impl ProfileMenu {
    pub fn new() -> Self {
        Self {}
    }

    pub fn show(&self, ui: &mut egui::Ui, actions: &mut Vec<AppBarAction>) {
        ui.vertical(|ui| {
            for item in ProfileItem::ALL {
                if item == ProfileItem::SignOut {
                    ui.separator();
                }
                if menu_item(ui, item.label()).clicked() {
                    actions.push(AppBarAction::Profile(item));
                }
            }
        });
    }
}
