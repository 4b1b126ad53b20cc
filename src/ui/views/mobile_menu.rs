use super::popup::menu_item;
use crate::store::GlobalState;
use crate::ui::app_bar::{open_from_overflow, AppBar, AppBarAction};
use crate::ui::components::{avatar, badged_icon_button};
use crate::ui::menu::MenuKind;
use eframe::egui::{self, vec2, Sense};

/// Overflow menu gathering the bar's actions on narrow windows.
pub struct MobileMenu<'a> {
    app_bar: &'a AppBar,
    state: &'a GlobalState,
}

impl<'a> MobileMenu<'a> {
    pub fn new(app_bar: &'a AppBar, state: &'a GlobalState) -> Self {
        Self { app_bar, state }
    }

    pub fn show(&self, ui: &mut egui::Ui, actions: &mut Vec<AppBarAction>) {
        ui.vertical(|ui| {
            if menu_item(ui, "🌓  Dark Mode").clicked() {
                actions.push(AppBarAction::ToggleTheme);
            }

            if self.state.wallet.is_none() {
                return;
            }

            let entry = ui.horizontal(|ui| {
                let icon = badged_icon_button(ui, "✉", self.app_bar.mail_badge(self.state));
                icon.clicked() | ui.button("Messages").clicked()
            });
            if entry.inner {
                actions.push(open_from_overflow(MenuKind::Mail, &entry.response));
            }

            let entry = ui.horizontal(|ui| {
                let icon = badged_icon_button(ui, "🔔", self.app_bar.notifications_badge());
                icon.clicked() | ui.button("Notifications").clicked()
            });
            if entry.inner {
                actions.push(open_from_overflow(MenuKind::Notifications, &entry.response));
            }

            let entry = ui.horizontal(|ui| {
                let icon = match self.state.account_user() {
                    Some(user) => avatar(ui, &user.identity(), 24.0).interact(Sense::click()),
                    None => ui.allocate_exact_size(vec2(24.0, 24.0), Sense::click()).1,
                };
                icon.clicked() | ui.button("Account").clicked()
            });
            if entry.inner {
                actions.push(open_from_overflow(MenuKind::Profile, &entry.response));
            }
        });
    }
}
