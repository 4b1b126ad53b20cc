use crate::domain::{identity_for, RecentMessage};
use crate::store::GlobalState;
use crate::ui::app_bar::AppBarAction;
use crate::ui::components::avatar::{avatar, AVATAR_SIZE};
use crate::utils::{colors, format_date};
use eframe::egui::{self, RichText, Sense};

/// Recent message previews, one per sender.
pub struct MailMenu<'a> {
    state: &'a GlobalState,
    date_format: &'a str,
}

impl<'a> MailMenu<'a> {
    pub fn new(state: &'a GlobalState, date_format: &'a str) -> Self {
        Self { state, date_format }
    }

    pub fn show(&self, ui: &mut egui::Ui, actions: &mut Vec<AppBarAction>) {
        let messages = &self.state.recent_messages;
        ui.vertical(|ui| {
            ui.heading("New Messages");
            ui.label(
                RichText::new(format!("{} New Messages", messages.sender_count()))
                    .color(colors::SECONDARY),
            );
        });
        ui.separator();

        for message in messages.iter() {
            if self.show_entry(ui, message).clicked() {
                actions.push(AppBarAction::OpenConversation(message.handle.clone()));
            }
        }
    }

    fn show_entry(&self, ui: &mut egui::Ui, message: &RecentMessage) -> egui::Response {
        let row = ui
            .horizontal(|ui| {
                ui.vertical_centered(|ui| {
                    avatar(ui, &identity_for(&message.handle), AVATAR_SIZE);
                    ui.label(
                        RichText::new(format_date(&message.timestamp, self.date_format)).small(),
                    );
                });
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&message.handle).strong());
                    ui.label(message.body.as_str());
                });
            })
            .response;
        let row = ui.interact(
            row.rect,
            ui.id().with(("mail-entry", &message.handle)),
            Sense::click(),
        );
        if row.hovered() {
            let highlight = ui.visuals().widgets.hovered.weak_bg_fill.gamma_multiply(0.3);
            ui.painter().rect_filled(row.rect, 2.0, highlight);
        }
        row
    }
}
