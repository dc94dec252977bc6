//! Data models for the menus widget.
//!
//! These models match the `/api/menus` JSON payload.

mod date_key;
mod menu;

pub use date_key::*;
pub use menu::*;
