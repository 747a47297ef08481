//! Dialog components for TUI

mod base;
mod error_dialog;
mod type_picker;

pub use error_dialog::render_error_dialog;
pub use type_picker::render_type_picker;
