//! Display Preview Component
//!
//! Paints a layer sequence into a monitor frame. Each layer is absolutely
//! positioned; `None` position/size means full-bleed at the origin. Later
//! layers stack above earlier ones.

use leptos::prelude::*;
use crate::models::{ContentLayer, LayerKind};

fn layer_style(layer: &ContentLayer) -> String {
    let left = layer.position.map(|p| p.x).unwrap_or(0.0);
    let top = layer.position.map(|p| p.y).unwrap_or(0.0);
    let width = layer
        .size
        .map(|s| format!("{}px", s.width))
        .unwrap_or_else(|| "100%".to_string());
    let height = layer
        .size
        .map(|s| format!("{}px", s.height))
        .unwrap_or_else(|| "100%".to_string());
    format!("left:{left}px;top:{top}px;width:{width};height:{height}")
}

#[component]
pub fn DisplayPreview(
    #[prop(into)] layers: Signal<Vec<ContentLayer>>,
    #[prop(default = "16:9")] aspect_ratio: &'static str,
) -> impl IntoView {
    let aspect_style = move || {
        let ratio = aspect_ratio.replace(':', " / ");
        format!("aspect-ratio: {ratio}")
    };

    view! {
        <div class="display-preview">
            <div class="display-frame">
                <div class="display-bezel">
                    <div class="display-screen" style=aspect_style>
                        <For
                            each=move || layers.get()
                            key=|layer| layer.id.clone()
                            children=move |layer| {
                                let style = layer_style(&layer);
                                let body = match layer.kind {
                                    LayerKind::Image => view! {
                                        <img class="layer-media" src=layer.content.clone() alt="Display content" />
                                    }.into_any(),
                                    LayerKind::Text => view! {
                                        <div class="layer-text">
                                            <p>{layer.content.clone()}</p>
                                        </div>
                                    }.into_any(),
                                    LayerKind::Video => view! {
                                        <video class="layer-media" src=layer.content.clone() autoplay loop muted></video>
                                    }.into_any(),
                                };
                                view! {
                                    <div class="display-layer" style=style>{body}</div>
                                }
                            }
                        />
                    </div>
                </div>
                <div class="display-stand"></div>
            </div>
            <div class="display-info">
                <span>{format!("Live Preview · {aspect_ratio}")}</span>
            </div>
        </div>
    }
}
