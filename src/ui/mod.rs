pub mod app_bar;
pub mod badges;
pub mod components;
pub mod menu;
pub mod views;

use crate::app::SwapApp;
use crate::store::IntentQueue;
use eframe::egui;
use egui::{CentralPanel, SidePanel};
use views::{drawer::Drawer, home::HomeView};

pub fn display(app: &mut SwapApp, ctx: &egui::Context) {
    let theme = app.store.state().theme;
    if app.applied_theme != Some(theme) {
        ctx.set_visuals(theme.visuals());
        app.applied_theme = Some(theme);
    }

    // Intents are applied after the frame so every panel reads the same snapshot.
    let mut intents = IntentQueue::new();
    let state = app.store.state();

    // The drawer claims its column first so the bar starts to its right.
    if app.drawer_open {
        SidePanel::left("drawer")
            .exact_width(app.config.drawer_width)
            .resizable(false)
            .show(ctx, |ui| {
                app.drawer_open = Drawer::new().show(ui, &mut app.router);
            });
    }

    let response = app
        .app_bar
        .show(ctx, state, app.drawer_open, &mut intents, &mut app.router);
    if response.drawer_requested {
        app.drawer_open = true;
        ctx.request_repaint();
    }

    CentralPanel::default().show(ctx, |ui| {
        HomeView::new(&app.config).show(ui, state, &mut app.router, &mut intents);
    });

    intents.drain_into(&mut app.store);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use egui::{Pos2, RawInput, Rect, Shape};

    fn title_x(shape: &Shape, title: &str) -> Option<f32> {
        match shape {
            Shape::Text(text) if text.galley.text() == title => Some(text.pos.x),
            Shape::Vec(shapes) => shapes.iter().find_map(|shape| title_x(shape, title)),
            _ => None,
        }
    }

    /// Where the title lands after a few frames of the whole window.
    fn title_position(app: &mut SwapApp) -> Option<f32> {
        let ctx = egui::Context::default();
        let mut found = None;
        for _ in 0..3 {
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1200.0, 800.0))),
                ..Default::default()
            };
            let output = ctx.run(input, |ctx| display(app, ctx));
            found = output
                .shapes
                .iter()
                .find_map(|clipped| title_x(&clipped.shape, &app.config.title));
        }
        found
    }

    #[test]
    fn test_open_drawer_pushes_app_bar_right() {
        let mut app = SwapApp::new(AppConfig::default());
        let drawer_width = app.config.drawer_width;

        let closed = title_position(&mut app).unwrap();
        assert!(closed < drawer_width);

        app.drawer_open = true;
        let open = title_position(&mut app).unwrap();
        assert!(open >= drawer_width, "title at {open}, drawer {drawer_width}");
        assert!(app.drawer_open);
    }
}
