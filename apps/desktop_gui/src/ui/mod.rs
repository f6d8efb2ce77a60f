//! UI layer for the sequencer GUI: app shell, drag-and-drop board, feedback
//! panel, and slot theming.

pub mod app;
pub mod theme;

pub use app::SequencerApp;
