use crate::domain::NotificationItem;
use crate::ui::app_bar::AppBarAction;
use eframe::egui::{self, RichText, Sense};

pub struct NotificationsMenu<'a> {
    notifications: &'a [NotificationItem],
}

impl<'a> NotificationsMenu<'a> {
    pub fn new(notifications: &'a [NotificationItem]) -> Self {
        Self { notifications }
    }

    pub fn show(&self, ui: &mut egui::Ui, actions: &mut Vec<AppBarAction>) {
        if self.notifications.is_empty() {
            ui.label(RichText::new("No notifications").weak());
            return;
        }
        for notification in self.notifications {
            let color = notification.severity.get_color();
            let row = ui
                .horizontal(|ui| {
                    ui.label(RichText::new(notification.severity.get_icon()).color(color));
                    ui.label(notification.message.as_str());
                })
                .response;
            let row = ui.interact(
                row.rect,
                ui.id().with(("notification", notification.id)),
                Sense::click(),
            );
            if row.hovered() {
                ui.painter()
                    .rect_stroke(row.rect, 2.0, (1.0, color), egui::StrokeKind::Outside);
            }
            if row.clicked() {
                actions.push(AppBarAction::SelectNotification(notification.id));
            }
            ui.add_space(4.0);
        }
    }
}
