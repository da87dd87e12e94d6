//! HTTP request handlers for API endpoints.
//!
//! Each handler opens a span carrying its name and the request id, validates
//! its input, makes one storage call and maps the outcome to a response.

pub mod health;
pub mod redirect;
pub mod remove;
pub mod save;

pub use health::health_handler;
pub use redirect::{redirect_handler, redirect_root_handler};
pub use remove::remove_handler;
pub use save::save_handler;
