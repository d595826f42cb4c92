//! Menuboard App
//!
//! Root component: page switching, context providers, toast host. No
//! router; the current page is plain state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::AppContext;
use crate::store::DashboardState;
use crate::components::{HomePage, ManageUsers, MenuBuilder, PlaylistsPage, SchedulePage, ToastHost};

/// Page selection
#[derive(Clone, Copy, PartialEq)]
enum Page {
    Home,
    Menus,
    Playlists,
    Schedule,
    Users,
}

const PAGES: &[(Page, &str)] = &[
    (Page::Home, "Home"),
    (Page::Menus, "Menus"),
    (Page::Playlists, "Playlists"),
    (Page::Schedule, "Schedule"),
    (Page::Users, "Users"),
];

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);
    let (users_reload, set_users_reload) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((users_reload, set_users_reload)));
    provide_context(Store::new(DashboardState::new()));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Menuboard"</h1>
                <nav class="app-nav">
                    {PAGES.iter().map(|(target, label)| {
                        let target = *target;
                        let is_active = move || page.get() == target;
                        view! {
                            <button
                                class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                                on:click=move |_| set_page.set(target)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </header>

            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Menus => view! { <MenuBuilder /> }.into_any(),
                    Page::Playlists => view! { <PlaylistsPage /> }.into_any(),
                    Page::Schedule => view! { <SchedulePage /> }.into_any(),
                    Page::Users => view! { <ManageUsers /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
