use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Success,
    Secondary,
}

impl Severity {
    pub fn get_color(&self) -> egui::Color32 {
        match self {
            Severity::Warning => crate::utils::colors::WARNING,
            Severity::Success => crate::utils::colors::SUCCESS,
            Severity::Secondary => crate::utils::colors::SECONDARY,
        }
    }

    pub fn get_icon(&self) -> &'static str {
        match self {
            Severity::Warning => "⚠",
            Severity::Success => "✔",
            Severity::Secondary => "ℹ",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: u32,
    pub severity: Severity,
    pub message: String,
}

impl NotificationItem {
    pub fn new(id: u32, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id,
            severity,
            message: message.into(),
        }
    }
}

/// The notifications shown until a real feed exists.
pub static DEFAULT_NOTIFICATIONS: Lazy<Vec<NotificationItem>> = Lazy::new(|| {
    vec![
        NotificationItem::new(0, Severity::Warning, "Someone has bid on your swap!"),
        NotificationItem::new(1, Severity::Success, "Your swap is complete!"),
        NotificationItem::new(
            2,
            Severity::Secondary,
            "This is just a simple notification",
        ),
    ]
});
