pub mod colors;
pub mod time;

pub use time::*;
