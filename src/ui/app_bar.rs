use super::badges::{Channel, NotificationBadges};
use super::components::{avatar, badged_icon_button};
use super::menu::{MenuAnchor, MenuAnchors, MenuKind};
use super::views::{
    mail_menu::MailMenu, mobile_menu::MobileMenu, notifications_menu::NotificationsMenu,
    popup::anchored_popup, profile_menu::ProfileMenu,
};
use crate::config::AppConfig;
use crate::domain::{NotificationItem, ThemeMode};
use crate::store::{Dispatcher, GlobalState, Intent, Navigator, Route};
use eframe::egui::{self, vec2, Align, Id, Key, Layout, Order, RichText, Sense, TopBottomPanel};
use tracing::info;

/// Below this width the title gives its room to the buttons.
pub const TITLE_MIN_WIDTH: f32 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileItem {
    Profile,
    Settings,
    Email,
    SignOut,
}

impl ProfileItem {
    pub const ALL: [ProfileItem; 4] = [
        ProfileItem::Profile,
        ProfileItem::Settings,
        ProfileItem::Email,
        ProfileItem::SignOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileItem::Profile => "Profile",
            ProfileItem::Settings => "Settings",
            ProfileItem::Email => "Email",
            ProfileItem::SignOut => "Sign out",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ProfileItem::Profile | ProfileItem::SignOut => Route::home(),
            ProfileItem::Settings => Route::settings(),
            ProfileItem::Email => Route::email(),
        }
    }
}

/// Everything a user can do with the app bar.
#[derive(Clone, Debug, PartialEq)]
pub enum AppBarAction {
    OpenDrawer,
    ToggleTheme,
    Open {
        kind: MenuKind,
        anchor: MenuAnchor,
        via_overflow: bool,
    },
    /// Backdrop click or escape on an open menu.
    Dismiss(MenuKind),
    Profile(ProfileItem),
    OpenConversation(String),
    SelectNotification(u32),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct AppBarResponse {
    pub drawer_requested: bool,
}

/// Top app bar: title, theme toggle, mail and notification menus, account menu.
pub struct AppBar {
    title: String,
    mobile_breakpoint: f32,
    date_format: String,
    menus: MenuAnchors,
    badges: NotificationBadges,
    notifications: Vec<NotificationItem>,
}

impl AppBar {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            title: config.title.clone(),
            mobile_breakpoint: config.mobile_breakpoint,
            date_format: config.date_format.clone(),
            menus: MenuAnchors::new(),
            badges: NotificationBadges::new(config.unread_policy),
            notifications: config.notifications.clone(),
        }
    }

    pub fn menus(&self) -> &MenuAnchors {
        &self.menus
    }

    pub fn mail_badge(&self, state: &GlobalState) -> Option<usize> {
        self.badges
            .badge(Channel::Mail, state.recent_messages.sender_count())
    }

    pub fn notifications_badge(&self) -> Option<usize> {
        self.badges
            .badge(Channel::Notifications, self.notifications.len())
    }

    /// Lets the badges see counts that changed since the last frame.
    pub fn observe(&mut self, state: &GlobalState) {
        self.badges
            .observe(Channel::Mail, state.recent_messages.sender_count());
        self.badges
            .observe(Channel::Notifications, self.notifications.len());
    }

    pub fn apply(
        &mut self,
        action: AppBarAction,
        state: &GlobalState,
        dispatcher: &mut impl Dispatcher,
        navigator: &mut impl Navigator,
    ) -> AppBarResponse {
        let mut response = AppBarResponse::default();
        match action {
            AppBarAction::OpenDrawer => response.drawer_requested = true,
            AppBarAction::ToggleTheme => toggle_theme(state.theme, dispatcher),
            AppBarAction::Open {
                kind,
                anchor,
                via_overflow,
            } => self.open(kind, anchor, via_overflow, state),
            AppBarAction::Dismiss(kind) => self.menus.close(kind),
            AppBarAction::Profile(ProfileItem::SignOut) => self.sign_out(dispatcher, navigator),
            AppBarAction::Profile(item) => {
                let route = self.menus.close_with_route(MenuKind::Profile, item.route());
                navigator.push(route);
            }
            AppBarAction::OpenConversation(handle) => {
                let route = self
                    .menus
                    .close_with_route(MenuKind::Mail, Route::messages(&handle));
                navigator.push(route);
            }
            AppBarAction::SelectNotification(_) => self.menus.close(MenuKind::Notifications),
        }
        response
    }

    fn open(&mut self, kind: MenuKind, anchor: MenuAnchor, via_overflow: bool, state: &GlobalState) {
        match kind {
            MenuKind::Mail => self
                .badges
                .mark_seen(Channel::Mail, state.recent_messages.sender_count()),
            MenuKind::Notifications => self
                .badges
                .mark_seen(Channel::Notifications, self.notifications.len()),
            MenuKind::Profile | MenuKind::MobileOverflow => {}
        }
        if via_overflow {
            self.menus.open_from_overflow(kind, anchor);
        } else {
            self.menus.open(kind, anchor);
        }
    }

    /// Closes every menu first so no popup is left hanging off a removed button.
    pub fn sign_out(&mut self, dispatcher: &mut impl Dispatcher, navigator: &mut impl Navigator) {
        info!("sign out");
        self.menus.close_all();
        dispatcher.dispatch(Intent::SetWallet(None));
        navigator.push(Route::home());
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        state: &GlobalState,
        drawer_open: bool,
        dispatcher: &mut impl Dispatcher,
        navigator: &mut impl Navigator,
    ) -> AppBarResponse {
        self.observe(state);
        let mut actions = Vec::new();

        TopBottomPanel::top("app_bar").show(ctx, |ui| {
            self.show_toolbar(ui, state, drawer_open, &mut actions);
        });
        self.show_backdrop(ctx, &mut actions);
        self.show_menus(ctx, state, &mut actions);

        let mut response = AppBarResponse::default();
        for action in actions {
            let applied = self.apply(action, state, dispatcher, navigator);
            response.drawer_requested |= applied.drawer_requested;
        }
        response
    }

    fn show_toolbar(
        &self,
        ui: &mut egui::Ui,
        state: &GlobalState,
        drawer_open: bool,
        actions: &mut Vec<AppBarAction>,
    ) {
        let width = ui.available_width();
        let compact = width < self.mobile_breakpoint;
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if !drawer_open && ui.button("☰").on_hover_text("open drawer").clicked() {
                actions.push(AppBarAction::OpenDrawer);
            }
            if width >= TITLE_MIN_WIDTH {
                ui.label(RichText::new(&self.title).size(20.0).strong());
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if compact {
                    let more = ui.button(RichText::new("⋮").size(20.0)).on_hover_text("show more");
                    if more.clicked() {
                        actions.push(open_action(MenuKind::MobileOverflow, &more, false));
                    }
                    return;
                }

                if state.wallet.is_some() {
                    let account = match state.account_user() {
                        Some(user) => avatar(ui, &user.identity(), 28.0).interact(Sense::click()),
                        None => ui.allocate_exact_size(vec2(28.0, 28.0), Sense::click()).1,
                    }
                    .on_hover_text("account of current user");
                    if account.clicked() {
                        actions.push(open_action(MenuKind::Profile, &account, false));
                    }

                    let bell = badged_icon_button(ui, "🔔", self.notifications_badge())
                        .on_hover_text("notifications");
                    if bell.clicked() {
                        actions.push(open_action(MenuKind::Notifications, &bell, false));
                    }

                    let mail = badged_icon_button(ui, "✉", self.mail_badge(state))
                        .on_hover_text("show new messages");
                    if mail.clicked() {
                        actions.push(open_action(MenuKind::Mail, &mail, false));
                    }
                }

                if ui
                    .button(RichText::new("🌓").size(20.0))
                    .on_hover_text("toggle dark theme")
                    .clicked()
                {
                    actions.push(AppBarAction::ToggleTheme);
                }
            });
        });
        ui.add_space(6.0);
    }

    /// Invisible full-window layer between the panels and the popups. It
    /// swallows the click that dismisses the topmost menu, so nothing
    /// underneath reacts to it.
    fn show_backdrop(&self, ctx: &egui::Context, actions: &mut Vec<AppBarAction>) {
        let Some(kind) = self.menus.topmost() else {
            return;
        };
        let screen = ctx.screen_rect();
        let clicked = egui::Area::new(Id::new("app_bar_backdrop"))
            .order(Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.allocate_response(screen.size(), Sense::click())
                    .clicked()
            })
            .inner;
        let escape = ctx.input(|i| i.key_pressed(Key::Escape));
        if clicked || escape {
            actions.push(AppBarAction::Dismiss(kind));
        }
    }

    fn show_menus(&self, ctx: &egui::Context, state: &GlobalState, actions: &mut Vec<AppBarAction>) {
        // overflow first so its children are drawn above it
        for kind in [
            MenuKind::MobileOverflow,
            MenuKind::Profile,
            MenuKind::Mail,
            MenuKind::Notifications,
        ] {
            let Some(anchor) = self.menus.anchor(kind) else {
                continue;
            };
            match kind {
                MenuKind::MobileOverflow => anchored_popup(ctx, kind, anchor, 200.0, |ui| {
                    MobileMenu::new(self, state).show(ui, actions)
                }),
                MenuKind::Profile => anchored_popup(ctx, kind, anchor, 160.0, |ui| {
                    ProfileMenu::new().show(ui, actions)
                }),
                MenuKind::Mail => anchored_popup(ctx, kind, anchor, 265.0, |ui| {
                    MailMenu::new(state, &self.date_format).show(ui, actions)
                }),
                MenuKind::Notifications => anchored_popup(ctx, kind, anchor, 265.0, |ui| {
                    NotificationsMenu::new(&self.notifications).show(ui, actions)
                }),
            }
        }
    }
}

fn open_action(kind: MenuKind, response: &egui::Response, via_overflow: bool) -> AppBarAction {
    AppBarAction::Open {
        kind,
        anchor: MenuAnchor::new(response.id, response.rect),
        via_overflow,
    }
}

pub(super) fn open_from_overflow(kind: MenuKind, response: &egui::Response) -> AppBarAction {
    open_action(kind, response, true)
}

/// Flips the theme held by the store. Nothing is kept locally.
pub fn toggle_theme(current: ThemeMode, dispatcher: &mut impl Dispatcher) {
    dispatcher.dispatch(Intent::SetTheme(current.toggled()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Account, RecentMessage, WalletIdentity};
    use crate::store::{IntentQueue, Router, Store};
    use crate::utils::{format_date, DEFAULT_DATE_FORMAT};
    use chrono::{TimeZone, Utc};
    use eframe::egui::{pos2, CentralPanel, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape};

    const WIDE: f32 = 1200.0;

    fn anchor(name: &str) -> MenuAnchor {
        MenuAnchor::new(
            Id::new(name),
            Rect::from_min_max(pos2(0.0, 0.0), pos2(24.0, 24.0)),
        )
    }

    fn open(kind: MenuKind, via_overflow: bool) -> AppBarAction {
        AppBarAction::Open {
            kind,
            anchor: anchor("trigger"),
            via_overflow,
        }
    }

    fn message(handle: &str, body: &str) -> RecentMessage {
        RecentMessage {
            handle: handle.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap(),
            body: body.to_string(),
        }
    }

    fn signed_in() -> GlobalState {
        GlobalState {
            wallet: Some(WalletIdentity {
                address: "bc1qexample".to_string(),
            }),
            account: Some(Account {
                emoji: "🦊".to_string(),
            }),
            recent_messages: vec![message("alice", "hi")].into_iter().collect(),
            theme: ThemeMode::Light,
        }
    }

    /// Anchor hanging off the right edge of a window of the given width.
    fn right_anchor(width: f32) -> MenuAnchor {
        MenuAnchor::new(
            Id::new("right trigger"),
            Rect::from_min_max(pos2(width - 24.0, 0.0), pos2(width, 24.0)),
        )
    }

    fn collect_texts(shape: &Shape, out: &mut Vec<String>) {
        match shape {
            Shape::Text(text) => out.push(text.galley.text().to_string()),
            Shape::Vec(shapes) => shapes.iter().for_each(|shape| collect_texts(shape, out)),
            _ => {}
        }
    }

    fn press(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    struct Harness {
        bar: AppBar,
        store: Store,
        router: Router,
        ctx: egui::Context,
        /// Where the central panel's button was last drawn, and how often it was clicked.
        behind: Rect,
        behind_clicks: usize,
    }

    impl Harness {
        fn new(config: AppConfig) -> Self {
            Self {
                bar: AppBar::new(&config),
                store: Store::new(signed_in()),
                router: Router::default(),
                ctx: egui::Context::default(),
                behind: Rect::NOTHING,
                behind_clicks: 0,
            }
        }

        /// Runs one headless frame: the bar over a central panel holding a
        /// single button. Returns every piece of text painted.
        fn frame(&mut self, width: f32, events: Vec<Event>) -> Vec<String> {
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(width, 800.0))),
                events,
                ..Default::default()
            };
            let state = self.store.state().clone();
            let mut queue = IntentQueue::new();
            let output = self.ctx.clone().run(input, |ctx| {
                self.bar.show(ctx, &state, false, &mut queue, &mut self.router);
                CentralPanel::default().show(ctx, |ui| {
                    let button = ui.button("behind");
                    self.behind = button.rect;
                    if button.clicked() {
                        self.behind_clicks += 1;
                    }
                });
            });
            queue.drain_into(&mut self.store);
            self.bar.observe(self.store.state());

            let mut texts = Vec::new();
            for clipped in &output.shapes {
                collect_texts(&clipped.shape, &mut texts);
            }
            texts
        }

        /// New areas spend their first frame measuring themselves.
        fn settle(&mut self, width: f32) -> Vec<String> {
            self.frame(width, Vec::new());
            self.frame(width, Vec::new());
            self.frame(width, Vec::new())
        }

        fn click(&mut self, width: f32, pos: Pos2) {
            self.frame(width, vec![Event::PointerMoved(pos), press(pos, true)]);
            self.frame(width, vec![press(pos, false)]);
        }

        fn act(&mut self, action: AppBarAction) -> AppBarResponse {
            let state = self.store.state().clone();
            let mut queue = IntentQueue::new();
            let response = self.bar.apply(action, &state, &mut queue, &mut self.router);
            queue.drain_into(&mut self.store);
            self.bar.observe(self.store.state());
            response
        }
    }

    #[test]
    fn test_mail_badge_counts_senders_until_opened() {
        let mut h = Harness::new(AppConfig::default());
        assert_eq!(h.bar.mail_badge(h.store.state()), Some(1));

        h.act(open(MenuKind::Mail, false));
        assert!(h.bar.menus().is_open(MenuKind::Mail));
        assert_eq!(h.bar.mail_badge(h.store.state()), None);

        h.store
            .dispatch(Intent::ReceiveMessage(message("bob", "new here")));
        h.bar.observe(h.store.state());
        assert_eq!(h.store.state().recent_messages.sender_count(), 2);
        assert_eq!(h.bar.mail_badge(h.store.state()), None);
    }

    #[test]
    fn test_notifications_badge() {
        let mut h = Harness::new(AppConfig::default());
        assert_eq!(h.bar.notifications_badge(), Some(3));
        h.act(open(MenuKind::Notifications, false));
        assert_eq!(h.bar.notifications_badge(), None);
        // mail is a separate channel
        assert_eq!(h.bar.mail_badge(h.store.state()), Some(1));
    }

    #[test]
    fn test_reset_on_growth_policy() {
        let config = AppConfig {
            unread_policy: crate::ui::badges::UnreadPolicy::ResetOnGrowth,
            ..AppConfig::default()
        };
        let mut h = Harness::new(config);
        h.act(open(MenuKind::Mail, false));
        assert_eq!(h.bar.mail_badge(h.store.state()), None);

        h.store.dispatch(Intent::ReceiveMessage(message("bob", "yo")));
        h.bar.observe(h.store.state());
        assert_eq!(h.bar.mail_badge(h.store.state()), Some(2));
    }

    #[test]
    fn test_open_conversation_navigates_after_closing() {
        let mut h = Harness::new(AppConfig::default());
        h.act(open(MenuKind::MobileOverflow, false));
        h.act(open(MenuKind::Mail, true));
        h.act(AppBarAction::OpenConversation("alice".to_string()));
        assert!(!h.bar.menus().any_open());
        assert_eq!(h.router.current(), &Route::messages("alice"));
    }

    #[test]
    fn test_dismissing_overflow_clears_children() {
        let mut h = Harness::new(AppConfig::default());
        h.act(open(MenuKind::MobileOverflow, false));
        h.act(open(MenuKind::Mail, true));
        h.act(AppBarAction::Dismiss(MenuKind::MobileOverflow));
        assert!(!h.bar.menus().any_open());
    }

    #[test]
    fn test_profile_items_route() {
        let mut h = Harness::new(AppConfig::default());
        for (item, route) in [
            (ProfileItem::Profile, Route::home()),
            (ProfileItem::Settings, Route::settings()),
            (ProfileItem::Email, Route::email()),
        ] {
            h.act(open(MenuKind::Profile, false));
            h.act(AppBarAction::Profile(item));
            assert!(!h.bar.menus().is_open(MenuKind::Profile));
            assert_eq!(h.router.current(), &route);
        }
        assert!(h.store.state().wallet.is_some());
    }

    #[test]
    fn test_sign_out_closes_everything() {
        let mut h = Harness::new(AppConfig::default());
        h.act(open(MenuKind::Notifications, false));
        h.act(open(MenuKind::MobileOverflow, false));
        h.act(open(MenuKind::Profile, true));
        h.router.push(Route::settings());

        h.act(AppBarAction::Profile(ProfileItem::SignOut));
        assert!(!h.bar.menus().any_open());
        assert!(h.store.state().wallet.is_none());
        assert_eq!(h.router.current(), &Route::home());
    }

    #[test]
    fn test_theme_toggle_is_involutive() {
        let mut h = Harness::new(AppConfig::default());
        let original = h.store.state().theme;
        h.act(AppBarAction::ToggleTheme);
        assert_eq!(h.store.state().theme, ThemeMode::Dark);
        h.act(AppBarAction::ToggleTheme);
        assert_eq!(h.store.state().theme, original);
    }

    #[test]
    fn test_selecting_notification_closes_menu() {
        let mut h = Harness::new(AppConfig::default());
        h.act(open(MenuKind::Notifications, false));
        h.act(AppBarAction::SelectNotification(1));
        assert!(!h.bar.menus().is_open(MenuKind::Notifications));
        assert_eq!(h.router.history().len(), 1);
    }

    #[test]
    fn test_drawer_request() {
        let mut h = Harness::new(AppConfig::default());
        assert!(h.act(AppBarAction::OpenDrawer).drawer_requested);
        assert!(!h.act(AppBarAction::ToggleTheme).drawer_requested);
    }

    #[test]
    fn test_missing_state_is_not_an_error() {
        let bar = AppBar::new(&AppConfig::default());
        let empty = GlobalState::default();
        assert_eq!(bar.mail_badge(&empty), Some(0));
    }

    #[test]
    fn test_click_outside_popups_dismisses_menus() {
        let mut h = Harness::new(AppConfig::default());
        h.settle(WIDE);
        h.act(open(MenuKind::MobileOverflow, false));
        h.act(AppBarAction::Open {
            kind: MenuKind::Mail,
            anchor: right_anchor(WIDE),
            via_overflow: true,
        });
        h.settle(WIDE);

        h.click(WIDE, pos2(600.0, 600.0));
        assert!(!h.bar.menus().any_open());
    }

    #[test]
    fn test_backdrop_swallows_the_dismissing_click() {
        let mut h = Harness::new(AppConfig::default());
        h.settle(WIDE);
        h.act(AppBarAction::Open {
            kind: MenuKind::Notifications,
            anchor: right_anchor(WIDE),
            via_overflow: false,
        });
        h.settle(WIDE);

        let behind = h.behind.center();
        h.click(WIDE, behind);
        assert!(!h.bar.menus().is_open(MenuKind::Notifications));
        assert_eq!(h.behind_clicks, 0);

        // with the menu gone the same click reaches the panel
        h.settle(WIDE);
        h.click(WIDE, behind);
        assert_eq!(h.behind_clicks, 1);
    }

    #[test]
    fn test_escape_dismisses_topmost_menu() {
        let mut h = Harness::new(AppConfig::default());
        h.act(AppBarAction::Open {
            kind: MenuKind::Profile,
            anchor: right_anchor(WIDE),
            via_overflow: false,
        });
        h.settle(WIDE);

        h.frame(
            WIDE,
            vec![Event::Key {
                key: Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::default(),
            }],
        );
        assert!(!h.bar.menus().any_open());
    }

    #[test]
    fn test_wallet_buttons_need_a_wallet() {
        let mut h = Harness::new(AppConfig::default());
        let texts = h.settle(WIDE);
        assert!(texts.iter().any(|t| t == "🔔"));
        assert!(texts.iter().any(|t| t == "✉"));
        assert!(texts.iter().any(|t| t == "🦊"));

        h.store = Store::new(GlobalState::default());
        let texts = h.settle(WIDE);
        assert!(texts.iter().any(|t| t == "🌓"));
        assert!(!texts.iter().any(|t| t == "🔔"));
        assert!(!texts.iter().any(|t| t == "✉"));
        assert!(!texts.iter().any(|t| t == "🦊"));
    }

    #[test]
    fn test_narrow_window_collapses_into_overflow_trigger() {
        let mut h = Harness::new(AppConfig::default());
        let texts = h.settle(WIDE);
        assert!(!texts.iter().any(|t| t == "⋮"));
        assert!(texts.iter().any(|t| t == "Peerswap"));

        let texts = h.settle(700.0);
        assert!(texts.iter().any(|t| t == "⋮"));
        assert!(!texts.iter().any(|t| t == "🔔"));
        assert!(texts.iter().any(|t| t == "Peerswap"));

        let texts = h.settle(500.0);
        assert!(texts.iter().any(|t| t == "⋮"));
        assert!(!texts.iter().any(|t| t == "Peerswap"));
    }

    #[test]
    fn test_mail_menu_lists_one_entry_per_sender() {
        let mut h = Harness::new(AppConfig::default());
        h.act(AppBarAction::Open {
            kind: MenuKind::Mail,
            anchor: right_anchor(WIDE),
            via_overflow: false,
        });
        let texts = h.settle(WIDE);

        let sent = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let stamp = format_date(&sent, DEFAULT_DATE_FORMAT);
        for expected in ["New Messages", "1 New Messages", "alice", "hi", stamp.as_str()] {
            assert_eq!(
                texts.iter().filter(|t| *t == expected).count(),
                1,
                "{expected:?} in {texts:?}"
            );
        }
    }
}
