//! Menu Builder Page
//!
//! Category-tabbed menu editor. The page owns a MenuStore; the add form
//! submits a typed input struct and the list renders one category at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{ContentLayer, LayerKind, MenuCategory, new_id};
use crate::store::{use_dashboard_store, store_push_toast};
use crate::stores::{MenuStore, NewMenuItem};
use crate::components::{DeleteConfirmButton, DisplayPreview};

/// Layout template options
const LAYOUTS: &[(&str, &str)] = &[
    ("single-column", "Single Column"),
    ("two-column", "Two Column"),
    ("three-column", "Three Column"),
    ("hero-items", "Hero Image + Items"),
    ("rotating", "Rotating Board"),
];

const PREVIEW_IMAGE: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=800&h=600&fit=crop";

#[component]
pub fn MenuBuilder() -> impl IntoView {
    let store = use_dashboard_store();

    let menu = RwSignal::new(MenuStore::sample());
    let (selected_layout, set_selected_layout) = signal("single-column");
    let (selected_category, set_selected_category) = signal(MenuCategory::Breakfast);

    // form buffers
    let (category, set_category) = signal(MenuCategory::Breakfast);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = NewMenuItem {
            category: category.get(),
            title: title.get(),
            description: description.get(),
            price: price.get(),
            image: None,
        };
        let mut added = false;
        menu.update(|m| added = m.add(input));
        if added {
            set_title.set(String::new());
            set_description.set(String::new());
            set_price.set(String::new());
            set_category.set(selected_category.get());
        }
    };

    let filtered = move || {
        menu.with(|m| {
            m.in_category(selected_category.get())
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let preview_layers = RwSignal::new(vec![ContentLayer {
        id: new_id(),
        kind: LayerKind::Image,
        content: PREVIEW_IMAGE.to_string(),
        position: None,
        size: None,
    }]);

    let push = move |_| {
        let payload = preview_layers.get();
        spawn_local(async move {
            match commands::push_to_displays(&payload).await {
                Ok(()) => store_push_toast(&store, "Content Pushed Successfully", "Content deployed to connected displays"),
                Err(e) => store_push_toast(&store, "Error", &e),
            }
        });
    };

    view! {
        <div class="page menu-page">
            <div class="page-header">
                <div>
                    <h2>"Menu Builder"</h2>
                    <p class="page-subtitle">"Create menus with categories, items, and choose layout templates"</p>
                </div>
            </div>

            <div class="card">
                <div class="card-header"><h3>"Layout Templates"</h3></div>
                <div class="card-body layout-grid">
                    {LAYOUTS.iter().map(|(id, name)| {
                        let layout_id = *id;
                        let is_selected = move || selected_layout.get() == layout_id;
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() { "layout-btn active" } else { "layout-btn" }
                                on:click=move |_| set_selected_layout.set(layout_id)
                            >
                                {*name}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="category-tabs">
                {MenuCategory::ALL.iter().map(|c| {
                    let cat = *c;
                    let is_selected = move || selected_category.get() == cat;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "tab-btn active" } else { "tab-btn" }
                            on:click=move |_| set_selected_category.set(cat)
                        >
                            {cat.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="menu-grid">
                <form class="card add-item-form" on:submit=add_item>
                    <div class="card-header">
                        <h3>{move || format!("Add Item to {}", selected_category.get().label())}</h3>
                    </div>
                    <div class="card-body form-fields">
                        <label>"Category"</label>
                        <select
                            prop:value=move || category.get().as_str()
                            on:change=move |ev| set_category.set(MenuCategory::from_str(&event_target_value(&ev)))
                        >
                            {MenuCategory::ALL.iter().map(|c| view! {
                                <option value=c.as_str()>{c.label()}</option>
                            }).collect_view()}
                        </select>

                        <label>"Title"</label>
                        <input
                            type="text"
                            placeholder="e.g., Breakfast Burrito"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />

                        <label>"Description"</label>
                        <textarea
                            placeholder="Describe your menu item..."
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>

                        <label>"Price"</label>
                        <input
                            type="number"
                            step="0.01"
                            placeholder="8.99"
                            prop:value=move || price.get()
                            on:input=move |ev| set_price.set(event_target_value(&ev))
                        />

                        <button type="submit" class="primary-btn">"Add to Menu"</button>
                    </div>
                </form>

                <div class="card">
                    <div class="card-header">
                        <h3>{move || format!(
                            "{} Items ({})",
                            selected_category.get().label(),
                            filtered().len(),
                        )}</h3>
                    </div>
                    <div class="card-body item-list">
                        <Show when=move || filtered().is_empty()>
                            <p class="empty-note">"No items in this category"</p>
                        </Show>
                        <For
                            each=filtered
                            key=|item| item.id.clone()
                            children=move |item| {
                                let delete_id = item.id.clone();
                                let on_confirm = Callback::new(move |_| {
                                    menu.update(|m| m.remove(&delete_id));
                                });
                                view! {
                                    <div class="menu-item-row">
                                        <div class="menu-item-main">
                                            <div class="menu-item-title-row">
                                                <h4>{item.title.clone()}</h4>
                                                <span class="price">{format!("${}", item.price)}</span>
                                            </div>
                                            <span class="badge">{item.category.label()}</span>
                                            <Show when={
                                                let has_description = !item.description.is_empty();
                                                move || has_description
                                            }>
                                                <p class="menu-item-description">{item.description.clone()}</p>
                                            </Show>
                                        </div>
                                        <DeleteConfirmButton button_class="ghost-btn danger" on_confirm=on_confirm />
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>

                <div class="card">
                    <div class="card-header preview-header">
                        <div>
                            <h3>"Display Preview"</h3>
                            <p class="card-subtitle">"Real-time preview of your content"</p>
                        </div>
                        <button type="button" class="primary-btn" on:click=push>"Push to Displays"</button>
                    </div>
                    <div class="card-body">
                        <DisplayPreview layers=preview_layers />
                    </div>
                </div>
            </div>
        </div>
    }
}
