//! Form definition domain layer
//!
//! - `question`: question schema and option invariants
//! - `store`: ordered question list and its structural mutations
//! - `reorder`: single-element move used by drag and drop
//! - `drag`: drag gesture state machine
//! - `observer`: change subscribers
//! - `controller`: builder session orchestration
//! - `render`: edit and preview projections

mod controller;
mod drag;
mod observer;
mod question;
mod render;
mod reorder;
mod store;

pub use controller::{BuilderController, EditorMode};
pub use drag::{DragGesture, DragState, ReorderRequest};
pub use observer::{CallbackObserver, ChannelObserver, FormObserver};
pub use question::{Question, QuestionOption, QuestionType, COPY_SUFFIX, DEFAULT_TITLE};
pub use render::{
    edit_card, edit_cards, preview_control, preview_items, EditAffordance, EditCard, OptionMarker,
    PreviewControl, PreviewItem,
};
pub use reorder::{move_question, normalize, reindex};
pub use store::{FormDefinition, Snapshot};

#[cfg(test)]
pub use observer::MockFormObserver;
