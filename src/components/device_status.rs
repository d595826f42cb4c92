//! Device Status Component
//!
//! Connected-devices panel. Values come from the dashboard store's mock
//! device list; there is no heartbeat or device protocol behind them.

use leptos::prelude::*;
use crate::models::DeviceState;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn DeviceStatusPanel() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"Connected Devices"</h3>
            </div>
            <div class="card-body device-list">
                <For
                    each=move || store.devices().get()
                    key=|device| device.id.clone()
                    children=move |device| {
                        let online = device.status == DeviceState::Online;
                        let badge_class = if online { "badge online" } else { "badge offline" };
                        view! {
                            <div class="device-row">
                                <div class="device-main">
                                    <div class="device-name-row">
                                        <h4>{device.name.clone()}</h4>
                                        <span class=badge_class>{device.status.label()}</span>
                                    </div>
                                    <p class="device-location">{device.location.clone()}</p>
                                    <p class="device-last-seen">{format!("Last seen: {}", device.last_seen)}</p>
                                </div>
                                <div class="device-indicators">
                                    <span class="indicator">"WiFi"</span>
                                    <span class="indicator">"100%"</span>
                                    <span class="indicator">"45%"</span>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
