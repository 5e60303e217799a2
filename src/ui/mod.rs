//! User interface: the main form window and its themes.

pub mod main_window;
pub mod theme;
