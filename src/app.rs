use crate::config::AppConfig;
use crate::domain::ThemeMode;
use crate::store::{Router, Store};
use crate::ui;
use crate::ui::app_bar::AppBar;
use eframe::egui;

pub struct SwapApp {
    pub config: AppConfig,
    pub store: Store,
    pub router: Router,
    pub app_bar: AppBar,
    pub drawer_open: bool,
    pub applied_theme: Option<ThemeMode>,
}

impl SwapApp {
    pub fn new(config: AppConfig) -> Self {
        let store = Store::new(config.session.clone().into_state());
        let app_bar = AppBar::new(&config);
        Self {
            config,
            store,
            router: Router::default(),
            app_bar,
            drawer_open: false,
            applied_theme: None,
        }
    }
}

impl eframe::App for SwapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::display(self, ctx);
    }
}
