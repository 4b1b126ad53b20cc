pub mod router;
pub mod state;

pub use router::{Navigator, Route, Router};
pub use state::{Dispatcher, GlobalState, Intent, IntentQueue, Store};
