//! Application Context
//!
//! Shared signals provided via the Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch the user list from the backend - read
    pub users_reload: ReadSignal<u32>,
    /// Trigger to refetch the user list from the backend - write
    set_users_reload: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(users_reload: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            users_reload: users_reload.0,
            set_users_reload: users_reload.1,
        }
    }

    /// Trigger a refetch of the user list
    pub fn reload_users(&self) {
        self.set_users_reload.update(|v| *v += 1);
    }
}
