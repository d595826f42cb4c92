//! Content Editor Component
//!
//! Tabbed editor feeding the page's layer composer. Inputs are typed
//! signals handed straight to the store call; nothing reads the DOM back.

use leptos::prelude::*;

use crate::models::LayerKind;
use crate::stores::LayerComposer;

/// Tab definitions: kind plus tab label
const LAYER_TABS: &[(LayerKind, &str)] = &[
    (LayerKind::Text, "Text"),
    (LayerKind::Image, "Image"),
    (LayerKind::Video, "Video"),
];

#[component]
pub fn ContentEditor(composer: RwSignal<LayerComposer>) -> impl IntoView {
    let (active_tab, set_active_tab) = signal(LayerKind::Text);
    let (text_buf, set_text_buf) = signal(String::new());
    let (image_buf, set_image_buf) = signal(String::new());
    let (video_buf, set_video_buf) = signal(String::new());

    let add_text = move |_| {
        let payload = text_buf.get();
        let mut added = false;
        composer.update(|c| added = c.add_layer(LayerKind::Text, &payload));
        if added {
            set_text_buf.set(String::new());
        }
    };
    let add_image = move |_| {
        let payload = image_buf.get();
        let mut added = false;
        composer.update(|c| added = c.add_layer(LayerKind::Image, &payload));
        if added {
            set_image_buf.set(String::new());
        }
    };
    let add_video = move |_| {
        let payload = video_buf.get();
        let mut added = false;
        composer.update(|c| added = c.add_layer(LayerKind::Video, &payload));
        if added {
            set_video_buf.set(String::new());
        }
    };

    view! {
        <div class="card content-editor">
            <div class="card-header">
                <h3>"Content Editor"</h3>
                <p class="card-subtitle">"Add and customize content for your digital display"</p>
            </div>
            <div class="card-body">
                <div class="tab-row">
                    {LAYER_TABS.iter().map(|(kind, label)| {
                        let kind = *kind;
                        let is_active = move || active_tab.get() == kind;
                        view! {
                            <button
                                type="button"
                                class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                                on:click=move |_| set_active_tab.set(kind)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                {move || match active_tab.get() {
                    LayerKind::Text => view! {
                        <div class="tab-panel">
                            <label>"Text Content"</label>
                            <textarea
                                placeholder="Enter your display text..."
                                prop:value=move || text_buf.get()
                                on:input=move |ev| set_text_buf.set(event_target_value(&ev))
                            ></textarea>
                            <button type="button" class="primary-btn" on:click=add_text>
                                "Add Text Layer"
                            </button>
                        </div>
                    }.into_any(),
                    LayerKind::Image => view! {
                        <div class="tab-panel">
                            <label>"Image URL"</label>
                            <input
                                type="url"
                                placeholder="https://example.com/image.jpg"
                                prop:value=move || image_buf.get()
                                on:input=move |ev| set_image_buf.set(event_target_value(&ev))
                            />
                            <button type="button" class="primary-btn" on:click=add_image>
                                "Add Image Layer"
                            </button>
                        </div>
                    }.into_any(),
                    LayerKind::Video => view! {
                        <div class="tab-panel">
                            <label>"Video URL"</label>
                            <input
                                type="url"
                                placeholder="https://example.com/video.mp4"
                                prop:value=move || video_buf.get()
                                on:input=move |ev| set_video_buf.set(event_target_value(&ev))
                            />
                            <button type="button" class="primary-btn" on:click=add_video>
                                "Add Video Layer"
                            </button>
                        </div>
                    }.into_any(),
                }}

                <Show when=move || composer.with(|c| !c.is_empty())>
                    <div class="layer-list">
                        <h4>{move || format!("Active Layers ({})", composer.with(|c| c.len()))}</h4>
                        <For
                            each=move || composer.with(|c| c.layers().to_vec())
                            key=|layer| layer.id.clone()
                            children=move |layer| {
                                let remove_id = layer.id.clone();
                                view! {
                                    <div class="layer-row">
                                        <span class="layer-kind">{layer.kind.as_str()}</span>
                                        <button
                                            type="button"
                                            class="ghost-btn"
                                            on:click=move |_| composer.update(|c| c.remove_layer(&remove_id))
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
