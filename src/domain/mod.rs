pub mod identity;
pub mod message;
pub mod notification;
pub mod session;

pub use identity::{identity_for, Identity, UserIdentity};
pub use message::{RecentMessage, RecentMessages};
pub use notification::{NotificationItem, DEFAULT_NOTIFICATIONS};
pub use session::{Account, ThemeMode, WalletIdentity};
