//! Utility modules.

pub mod clipboard;
