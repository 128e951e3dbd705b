//! UI rendering modules for the TUI.
//!
//! Rendering is separated from state management in `app`. Layout helpers
//! here are also used for mouse hit-testing.

pub mod footer;
pub mod popup;
pub mod screens;
pub mod toast;

pub use toast::{Toast, ToastLevel};
