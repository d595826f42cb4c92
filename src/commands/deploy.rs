//! Content Deploy Commands
//!
//! Frontend bindings for pushing the composed layer sequence out to the
//! connected displays.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::ContentLayer;
use super::invoke;

#[derive(Serialize)]
struct PushContentArgs<'a> {
    payload: &'a str,
}

/// Serialize the layer sequence and hand it to the backend for delivery
pub async fn push_to_displays(layers: &[ContentLayer]) -> Result<(), String> {
    let payload = serde_json::to_string(layers).map_err(|e| e.to_string())?;
    let js_args = serde_wasm_bindgen::to_value(&PushContentArgs { payload: &payload })
        .map_err(|e| e.to_string())?;
    let _ = invoke("push_content", js_args).await?;
    Ok(())
}
