//! User Management Commands
//!
//! Frontend bindings for the backend's auth and role-table calls.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{User, UserRole};
use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateUserArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

#[derive(Serialize)]
struct UserIdArgs<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
}

// ========================
// Commands
// ========================

pub async fn list_users() -> Result<Vec<User>, String> {
    let result = invoke("list_users", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Create an account and assign its role in one backend round trip
pub async fn create_user(args: &CreateUserArgs<'_>) -> Result<User, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_user", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_user(user_id: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&UserIdArgs { user_id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_user", js_args).await?;
    Ok(())
}

pub async fn update_user_role(user_id: &str, role: UserRole) -> Result<(), String> {
    // Build JSON string with camelCase for the bridge
    let json = format!(r#"{{"userId":"{}","role":"{}"}}"#, user_id, role.as_str());
    let js_args = js_sys::JSON::parse(&json).map_err(|e| format!("JSON parse error: {:?}", e))?;
    let _ = invoke("update_user_role", js_args).await?;
    Ok(())
}
