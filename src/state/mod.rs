//! Application state module

mod app_state;
mod focus;
mod picker;

pub use app_state::*;
pub use focus::*;
pub use picker::*;
