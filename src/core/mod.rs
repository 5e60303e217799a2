//! Recipe catalog, selection state and matching.

pub mod catalog;
pub mod health;
pub mod matcher;
pub mod pager;
pub mod search;
pub mod selection;
