pub mod avatar;
pub mod badge;

pub use avatar::{avatar, AvatarGroup};
pub use badge::badged_icon_button;
