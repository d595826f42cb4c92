//! Playlists Page
//!
//! Playlist cards with ordered item sequences and per-card add-content
//! controls. The page owns a PlaylistStore constructed fresh per session.

use leptos::prelude::*;

use crate::models::PlaylistItemKind;
use crate::stores::{NewPlaylistItem, PlaylistStore};
use crate::components::DeleteConfirmButton;

/// Content choices offered by the add-content select
const CONTENT_CHOICES: &[(&str, &str)] = &[
    ("menu", "Morning Specials"),
    ("menu", "Daily Lunch"),
    ("image", "Coffee Promo"),
    ("video", "Restaurant Tour"),
];

#[component]
pub fn PlaylistsPage() -> impl IntoView {
    let playlists = RwSignal::new(PlaylistStore::sample());
    let (show_create, set_show_create) = signal(false);
    let (new_name, set_new_name) = signal(String::new());

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        let mut created = false;
        playlists.update(|s| created = s.create(&name).is_some());
        if created {
            set_new_name.set(String::new());
            set_show_create.set(false);
        }
    };

    view! {
        <div class="page playlists-page">
            <div class="page-header">
                <div>
                    <h2>"Playlists"</h2>
                    <p class="page-subtitle">"Create and manage content playlists for your displays"</p>
                </div>
                <button class="primary-btn" on:click=move |_| set_show_create.update(|v| *v = !*v)>
                    "Create Playlist"
                </button>
            </div>

            <Show when=move || show_create.get()>
                <form class="card create-form" on:submit=on_create>
                    <div class="card-header">
                        <h3>"Create New Playlist"</h3>
                        <p class="card-subtitle">"Give your playlist a name to get started"</p>
                    </div>
                    <div class="card-body inline-form">
                        <input
                            type="text"
                            placeholder="Playlist name..."
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <button type="submit" class="primary-btn">"Create"</button>
                    </div>
                </form>
            </Show>

            <div class="playlist-grid">
                <For
                    each=move || playlists.with(|s| s.playlists().to_vec())
                    key=|playlist| playlist.id.clone()
                    children=move |playlist| {
                        let pid = playlist.id.clone();

                        let items = {
                            let pid = pid.clone();
                            move || playlists.with(|s| {
                                s.get(&pid).map(|p| p.items.clone()).unwrap_or_default()
                            })
                        };
                        let summary = {
                            let pid = pid.clone();
                            move || playlists.with(|s| {
                                s.get(&pid)
                                    .map(|p| format!("{} items · {} transition", p.items.len(), p.transition.label()))
                                    .unwrap_or_default()
                            })
                        };

                        let (choice, set_choice) = signal(0usize);
                        let (duration, set_duration) = signal(String::new());

                        let add_item = {
                            let pid = pid.clone();
                            move |_| {
                                let idx = choice.get().min(CONTENT_CHOICES.len() - 1);
                                let (kind, name) = CONTENT_CHOICES[idx];
                                // malformed or empty duration is stored as zero
                                let secs = duration.get().trim().parse::<u32>().unwrap_or(0);
                                playlists.update(|s| {
                                    s.add_item(&pid, NewPlaylistItem {
                                        kind: PlaylistItemKind::from_str(kind),
                                        name: name.to_string(),
                                        duration_secs: secs,
                                    });
                                });
                                set_duration.set(String::new());
                            }
                        };

                        let remove_pid = pid.clone();
                        let on_remove = Callback::new(move |_| {
                            playlists.update(|s| s.remove(&remove_pid));
                        });

                        let items_for_empty = items.clone();
                        view! {
                            <div class="card playlist-card">
                                <div class="card-header">
                                    <div class="playlist-title-row">
                                        <h3>{playlist.name.clone()}</h3>
                                        <DeleteConfirmButton button_class="ghost-btn danger" on_confirm=on_remove />
                                    </div>
                                    <p class="card-subtitle">{summary}</p>
                                </div>
                                <div class="card-body">
                                    <Show when=move || items_for_empty().is_empty()>
                                        <p class="empty-note">"No items in this playlist"</p>
                                    </Show>
                                    <div class="playlist-items">
                                        {
                                            let items = items.clone();
                                            move || items().into_iter().enumerate().map(|(index, item)| view! {
                                                <div class="playlist-item-row">
                                                    <span class="item-index">{index + 1}</span>
                                                    <span class="item-kind">{item.kind.as_str()}</span>
                                                    <span class="item-name">{item.name.clone()}</span>
                                                    <span class="badge">{format!("{}s", item.duration_secs)}</span>
                                                </div>
                                            }).collect_view()
                                        }
                                    </div>

                                    <div class="add-content">
                                        <label>"Add Content"</label>
                                        <div class="inline-form">
                                            <select on:change=move |ev| {
                                                set_choice.set(event_target_value(&ev).parse().unwrap_or(0));
                                            }>
                                                {CONTENT_CHOICES.iter().enumerate().map(|(i, (_, name))| view! {
                                                    <option value=i.to_string()>{*name}</option>
                                                }).collect_view()}
                                            </select>
                                            <input
                                                type="number"
                                                placeholder="Duration (s)"
                                                prop:value=move || duration.get()
                                                on:input=move |ev| set_duration.set(event_target_value(&ev))
                                            />
                                        </div>
                                        <button type="button" class="outline-btn" on:click=add_item>
                                            "Add to Playlist"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
