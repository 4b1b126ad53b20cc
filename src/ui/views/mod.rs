pub mod drawer;
pub mod home;
pub mod mail_menu;
pub mod mobile_menu;
pub mod notifications_menu;
pub mod popup;
pub mod profile_menu;
