//! Hosted Backend Bridge
//!
//! Frontend bindings to the hosted auth/table backend, reached through the
//! `window.__MENUBOARD_BACKEND__` bridge the host page installs. Calls are
//! fire-and-wait: no retry, no timeout. A rejected call surfaces the
//! backend's raw message string.

mod deploy;
mod users;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__MENUBOARD_BACKEND__"], js_name = invoke, catch)]
    async fn invoke_raw(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, String> {
    invoke_raw(cmd, args).await.map_err(err_message)
}

/// Pull a human-readable message out of a rejected bridge call
fn err_message(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use deploy::*;
pub use users::*;
