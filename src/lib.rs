//! Award application form builder
//!
//! Awards carry an ordered list of questions that administrators edit as
//! cards, reorder by dragging and check in a read-only respondent preview.
//! Every committed edit is pushed to subscribers as a fresh snapshot.

pub mod answers;
pub mod app;
pub mod award;
pub mod config;
pub mod form;
pub mod platform;
pub mod state;
pub mod storage;
pub mod ui;
pub mod upload;
