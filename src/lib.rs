//! Menu of the day widget.
//!
//! Fetches the daily menus once, renders the menu of the viewed date into a
//! page template and navigates between days from buttons, keys and taps.

pub mod config;
pub mod errors;
pub mod models;
pub mod page;
pub mod store;
pub mod view;

pub use config::Config;
pub use errors::AppError;
pub use page::{Page, TextPage};
pub use store::{MenuSource, MenuStore};
pub use view::{AppState, InputEvent, ViewController};
