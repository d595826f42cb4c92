//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only the
//! state genuinely shared across pages: the connected-device list and the
//! toast queue. Page editors keep their own stores (see `crate::stores`).

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{new_id, Device, DeviceState, Toast};

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Connected display devices (static mock values, no device protocol)
    pub devices: Vec<Device>,
    /// Pending non-blocking notifications
    pub toasts: Vec<Toast>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            devices: mock_devices(),
            ..Default::default()
        }
    }
}

fn mock_devices() -> Vec<Device> {
    vec![
        Device {
            id: new_id(),
            name: "Display - Main Entrance".to_string(),
            status: DeviceState::Online,
            location: "Lobby".to_string(),
            last_seen: "Just now".to_string(),
        },
        Device {
            id: new_id(),
            name: "Display - Conference Room A".to_string(),
            status: DeviceState::Online,
            location: "2nd Floor".to_string(),
            last_seen: "2 minutes ago".to_string(),
        },
        Device {
            id: new_id(),
            name: "Display - Cafeteria".to_string(),
            status: DeviceState::Offline,
            location: "1st Floor".to_string(),
            last_seen: "15 minutes ago".to_string(),
        },
    ]
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Queue a toast; the toast host dismisses it after a few seconds
pub fn store_push_toast(store: &DashboardStore, title: &str, message: &str) {
    store.toasts().write().push(Toast {
        id: new_id(),
        title: title.to_string(),
        message: message.to_string(),
    });
}

/// Remove a toast from the queue by id
pub fn store_dismiss_toast(store: &DashboardStore, toast_id: &str) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
