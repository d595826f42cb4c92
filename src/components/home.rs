//! Home Page
//!
//! Display composition workspace: content editor, live preview, connected
//! devices, and quick stats. The page owns its layer composer; the view
//! layer only borrows it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{DeviceState, LayerKind};
use crate::store::{use_dashboard_store, store_push_toast, DashboardStateStoreFields};
use crate::stores::LayerComposer;
use crate::components::{ContentEditor, DeviceStatusPanel, DisplayPreview};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_dashboard_store();

    let composer = RwSignal::new(LayerComposer::new());
    composer.update(|c| {
        c.add_layer(LayerKind::Text, "Welcome to Menuboard");
    });

    let layers = Signal::derive(move || composer.with(|c| c.layers().to_vec()));

    let deploy = move |_| {
        let payload = layers.get();
        spawn_local(async move {
            match commands::push_to_displays(&payload).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[HOME] Deployed {} layers", payload.len()).into());
                    store_push_toast(&store, "Content Pushed Successfully", "Content deployed to connected displays");
                }
                Err(e) => store_push_toast(&store, "Error", &e),
            }
        });
    };

    let device_count = move || store.devices().get().len();
    let online_count = move || {
        store
            .devices()
            .get()
            .iter()
            .filter(|d| d.status == DeviceState::Online)
            .count()
    };
    let layer_count = move || composer.with(|c| c.len());

    view! {
        <div class="page home-page">
            <div class="page-header">
                <div>
                    <h2>"Display Preview"</h2>
                    <p class="page-subtitle">"Real-time preview of your content"</p>
                </div>
                <button class="primary-btn" on:click=deploy>"Deploy to Devices"</button>
            </div>

            <div class="home-grid">
                <div class="home-side">
                    <ContentEditor composer=composer />
                    <DeviceStatusPanel />
                </div>

                <div class="home-main">
                    <DisplayPreview layers=layers />

                    <div class="stats-grid">
                        <div class="stat-card">
                            <div class="stat-value">{device_count}</div>
                            <div class="stat-label">"Active Displays"</div>
                        </div>
                        <div class="stat-card">
                            <div class="stat-value">{online_count}</div>
                            <div class="stat-label">"Online Now"</div>
                        </div>
                        <div class="stat-card">
                            <div class="stat-value">{layer_count}</div>
                            <div class="stat-label">"Content Layers"</div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
