use egui::Color32;

/// Background used when a handle carries nothing to derive an identity from.
pub const NEUTRAL_BACKGROUND: Color32 = Color32::from_rgb(189, 189, 189);
pub const NEUTRAL_INITIALS: &str = "?";

/// A user as seen by the chrome: a handle plus an optional emoji picked by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserIdentity {
    pub handle: String,
    pub display_emoji: Option<String>,
}

impl UserIdentity {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            display_emoji: None,
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.display_emoji = Some(emoji.into());
        self
    }

    /// The emoji replaces the initials, the color always follows the handle.
    pub fn identity(&self) -> Identity {
        let mut identity = identity_for(&self.handle);
        if let Some(emoji) = self.display_emoji.as_ref().filter(|e| !e.trim().is_empty()) {
            identity.initials = emoji.clone();
        }
        identity
    }
}

/// What an avatar needs to paint itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub initials: String,
    pub background: Color32,
}

impl Identity {
    pub fn neutral() -> Self {
        Self {
            initials: NEUTRAL_INITIALS.to_string(),
            background: NEUTRAL_BACKGROUND,
        }
    }
}

/// Derives the avatar identity of a handle. Same handle, same identity, everywhere.
pub fn identity_for(handle: &str) -> Identity {
    let handle = handle.trim();
    if handle.is_empty() {
        return Identity::neutral();
    }

    Identity {
        initials: initials_of(handle),
        background: color_of(handle),
    }
}

fn color_of(handle: &str) -> Color32 {
    let hash = handle.chars().fold(0i32, |hash, c| {
        (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    let byte = |shift: u32| ((hash >> shift) & 0xff) as u8;
    Color32::from_rgb(byte(0), byte(8), byte(16))
}

fn initials_of(handle: &str) -> String {
    handle
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
