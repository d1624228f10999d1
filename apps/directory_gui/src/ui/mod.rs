//! UI layer for the desktop directory: app shell and card widgets.

pub mod app;
pub mod widgets;

pub use app::DirectoryApp;
