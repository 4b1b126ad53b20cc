use crate::domain::{Identity, UserIdentity};
use crate::utils::colors::contrast_text;
use eframe::egui::{self, vec2, Align2, FontId, Response, Sense, Stroke};

pub const DEFAULT_GROUP_MAX: usize = 4;
pub const AVATAR_SIZE: f32 = 32.0;

/// Paints a round avatar and returns its response.
pub fn avatar(ui: &mut egui::Ui, identity: &Identity, size: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(vec2(size, size), Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let radius = size / 2.0;
        painter.circle(
            rect.center(),
            radius,
            identity.background,
            Stroke::new(1.5, ui.visuals().panel_fill),
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &identity.initials,
            FontId::proportional(size * 0.42),
            contrast_text(identity.background),
        );
    }
    response
}

/// Which avatars a group shows for a given input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarGroupLayout {
    pub shown: Vec<Identity>,
    /// Number of users hidden behind the "+N" chip.
    pub overflow: Option<usize>,
}

pub struct AvatarGroup {
    max: usize,
    size: f32,
}

impl AvatarGroup {
    pub fn new(max: usize) -> Self {
        Self {
            max: max.max(1),
            size: AVATAR_SIZE,
        }
    }

    /// `None` for an empty group: nothing is drawn, not even a container.
    pub fn layout(users: &[UserIdentity], max: usize) -> Option<AvatarGroupLayout> {
        if users.is_empty() {
            return None;
        }
        let max = max.max(1);
        let shown = users.iter().take(max).map(UserIdentity::identity).collect();
        let overflow = users.len().checked_sub(max).filter(|n| *n > 0);
        Some(AvatarGroupLayout { shown, overflow })
    }

    pub fn show(&self, ui: &mut egui::Ui, users: &[UserIdentity]) -> Option<Response> {
        let layout = Self::layout(users, self.max)?;
        let response = ui
            .horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = -self.size * 0.25;
                for (user, identity) in users.iter().zip(&layout.shown) {
                    avatar(ui, identity, self.size).on_hover_text(user.handle.as_str());
                }
                if let Some(hidden) = layout.overflow {
                    let chip = Identity {
                        initials: format!("+{}", hidden),
                        background: ui.visuals().widgets.inactive.bg_fill,
                    };
                    avatar(ui, &chip, self.size);
                }
            })
            .response;
        Some(response)
    }
}
