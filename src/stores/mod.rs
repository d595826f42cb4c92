//! Page-Level Editing Stores
//!
//! Plain collection stores owned by their pages, one instance per session.
//! No store is shared across pages and nothing here touches the backend.

mod composer;
mod menu;
mod playlist;
mod schedule;

pub use composer::*;
pub use menu::*;
pub use playlist::*;
pub use schedule::*;
