use crate::store::Route;
use eframe::egui::{Id, Rect};
use std::collections::HashMap;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuKind {
    Profile,
    MobileOverflow,
    Mail,
    Notifications,
}

impl MenuKind {
    /// Menus that also have an entry in the mobile overflow menu.
    pub fn is_overflow_child(&self) -> bool {
        !matches!(self, MenuKind::MobileOverflow)
    }

    pub fn popup_id(&self) -> Id {
        let name = match self {
            MenuKind::Profile => "primary-search-account-menu",
            MenuKind::MobileOverflow => "primary-search-account-menu-mobile",
            MenuKind::Mail => "mail-menu",
            MenuKind::Notifications => "notifications-menu",
        };
        Id::new(name)
    }
}

/// The widget a popup hangs from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuAnchor {
    pub id: Id,
    pub rect: Rect,
}

impl MenuAnchor {
    pub fn new(id: Id, rect: Rect) -> Self {
        Self { id, rect }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct AnchorState {
    anchor: MenuAnchor,
    via_overflow: bool,
}

/// Open/closed state of every popup menu of the app bar, keyed by kind.
///
/// A menu is open exactly when it has an anchor. Children opened through the
/// overflow menu are tied to it: closing one of them closes the overflow menu,
/// and closing the overflow menu closes them.
#[derive(Debug, Default)]
pub struct MenuAnchors {
    anchors: HashMap<MenuKind, AnchorState>,
}

impl MenuAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, kind: MenuKind, anchor: MenuAnchor) {
        debug!(?kind, "menu open");
        self.anchors.insert(
            kind,
            AnchorState {
                anchor,
                via_overflow: false,
            },
        );
    }

    /// Opens `kind` from its entry in the overflow menu, which stays open behind it.
    pub fn open_from_overflow(&mut self, kind: MenuKind, anchor: MenuAnchor) {
        if !kind.is_overflow_child() {
            self.open(kind, anchor);
            return;
        }
        debug!(?kind, "menu open via overflow");
        self.anchors.insert(
            kind,
            AnchorState {
                anchor,
                via_overflow: true,
            },
        );
    }

    pub fn close(&mut self, kind: MenuKind) {
        if self.anchors.remove(&kind).is_some() {
            debug!(?kind, "menu close");
        }
        if kind.is_overflow_child() {
            self.close(MenuKind::MobileOverflow);
        } else {
            self.anchors.retain(|_, state| !state.via_overflow);
        }
    }

    /// Closes `kind` and hands back the route to navigate to.
    pub fn close_with_route(&mut self, kind: MenuKind, route: Route) -> Route {
        self.close(kind);
        route
    }

    pub fn close_all(&mut self) {
        if !self.anchors.is_empty() {
            debug!("menu close all");
        }
        self.anchors.clear();
    }

    pub fn is_open(&self, kind: MenuKind) -> bool {
        self.anchors.contains_key(&kind)
    }

    pub fn anchor(&self, kind: MenuKind) -> Option<&MenuAnchor> {
        self.anchors.get(&kind).map(|state| &state.anchor)
    }

    pub fn any_open(&self) -> bool {
        !self.anchors.is_empty()
    }

    /// Menu drawn on top: an open child before the overflow menu.
    pub fn topmost(&self) -> Option<MenuKind> {
        [
            MenuKind::Profile,
            MenuKind::Mail,
            MenuKind::Notifications,
            MenuKind::MobileOverflow,
        ]
        .into_iter()
        .find(|kind| self.is_open(*kind))
    }
}
