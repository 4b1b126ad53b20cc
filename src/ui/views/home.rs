use crate::config::AppConfig;
use crate::domain::{RecentMessage, UserIdentity};
use crate::store::{Dispatcher, GlobalState, Intent, Router};
use crate::ui::components::AvatarGroup;
use crate::utils::format_date;
use chrono::Utc;
use eframe::egui::{self, RichText};

/// Central panel: shows where the router currently points.
pub struct HomeView<'a> {
    config: &'a AppConfig,
}

impl<'a> HomeView<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &GlobalState,
        router: &mut Router,
        dispatcher: &mut impl Dispatcher,
    ) {
        let route = router.current().clone();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(router.history().len() > 1, egui::Button::new("⬅"))
                .clicked()
            {
                router.back();
            }
            ui.heading(route.path());
        });
        ui.separator();

        if let Some(handle) = route.path().strip_prefix("/messages/") {
            match state.recent_messages.get(handle) {
                Some(message) => {
                    ui.label(RichText::new(handle).strong());
                    ui.label(format_date(&message.timestamp, &self.config.date_format));
                    ui.label(message.body.as_str());
                }
                None => {
                    ui.label(RichText::new(format!("No messages from {}", handle)).weak());
                }
            }
            return;
        }

        let senders: Vec<UserIdentity> = state
            .recent_messages
            .iter()
            .map(|message| UserIdentity::new(message.handle.clone()))
            .collect();
        ui.horizontal(|ui| {
            ui.label("Recent peers:");
            if AvatarGroup::new(self.config.avatar_group_max)
                .show(ui, &senders)
                .is_none()
            {
                ui.label(RichText::new("none yet").weak());
            }
        });
        ui.add_space(8.0);

        match &state.wallet {
            Some(wallet) => {
                ui.label(format!("Wallet: {}", wallet.address));
                if ui.button("Simulate incoming message").clicked() {
                    let handle = format!("peer {}", state.recent_messages.sender_count() + 1);
                    dispatcher.dispatch(Intent::ReceiveMessage(RecentMessage {
                        handle,
                        timestamp: Utc::now(),
                        body: "Is your offer still open?".to_string(),
                    }));
                }
            }
            None => {
                ui.label(RichText::new("Signed out").weak());
                if let Some(wallet) = &self.config.session.wallet {
                    if ui.button("Sign in again").clicked() {
                        dispatcher.dispatch(Intent::SetWallet(Some(wallet.clone())));
                    }
                }
            }
        }
    }
}
