//! Manage Users Page
//!
//! User administration against the hosted backend. Every call is
//! fire-and-wait; a failure surfaces the backend's message in a toast and
//! leaves the list stale until the next reload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateUserArgs};
use crate::context::AppContext;
use crate::models::{User, UserRole};
use crate::store::{use_dashboard_store, store_push_toast};
use crate::components::DeleteConfirmButton;

/// Render the backend's RFC 3339 `created_at` as a date; unparsable values
/// fall back to the raw string
fn format_created(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn ManageUsers() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_dashboard_store();

    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (show_add, set_show_add) = signal(false);

    // add-user form buffers
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(UserRole::User);

    // Load users on mount and whenever the reload trigger fires
    Effect::new(move |_| {
        let _ = ctx.users_reload.get();
        set_loading.set(true);
        spawn_local(async move {
            match commands::list_users().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[USERS] Loaded {} users", loaded.len()).into());
                    set_users.set(loaded);
                }
                Err(e) => store_push_toast(&store, "Error", &e),
            }
            set_loading.set(false);
        });
    });

    let add_user = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_email = email.get();
        let new_password = password.get();
        if new_email.is_empty() || new_password.is_empty() {
            store_push_toast(&store, "Validation Error", "Please fill in all fields");
            return;
        }
        let new_role = role.get();

        spawn_local(async move {
            let args = CreateUserArgs {
                email: &new_email,
                password: &new_password,
                role: new_role.as_str(),
            };
            match commands::create_user(&args).await {
                Ok(_) => {
                    store_push_toast(&store, "Success", "User added successfully");
                    set_email.set(String::new());
                    set_password.set(String::new());
                    set_role.set(UserRole::User);
                    set_show_add.set(false);
                    ctx.reload_users();
                }
                Err(e) => store_push_toast(&store, "Error", &e),
            }
        });
    };

    view! {
        <div class="page users-page">
            <div class="page-header">
                <div>
                    <h2>"Manage Users"</h2>
                    <p class="page-subtitle">"Add users and manage their permissions"</p>
                </div>
                <button class="primary-btn" on:click=move |_| set_show_add.update(|v| *v = !*v)>
                    "Add User"
                </button>
            </div>

            <Show when=move || show_add.get()>
                <form class="card create-form" on:submit=add_user>
                    <div class="card-header">
                        <h3>"Add New User"</h3>
                        <p class="card-subtitle">"Create a new user account with specified permissions"</p>
                    </div>
                    <div class="card-body form-fields">
                        <label>"Email"</label>
                        <input
                            type="email"
                            placeholder="user@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />

                        <label>"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />

                        <label>"Role"</label>
                        <select
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| set_role.set(UserRole::from_str(&event_target_value(&ev)))
                        >
                            <option value="user">"User"</option>
                            <option value="admin">"Admin"</option>
                        </select>

                        <button type="submit" class="primary-btn">"Add User"</button>
                    </div>
                </form>
            </Show>

            <div class="card">
                <div class="card-header"><h3>"All Users"</h3></div>
                <div class="card-body">
                    <Show when=move || loading.get()>
                        <p class="empty-note">"Loading users..."</p>
                    </Show>
                    <Show when=move || !loading.get() && users.get().is_empty()>
                        <p class="empty-note">"No users found. Add your first user to get started."</p>
                    </Show>
                    <table class="user-table">
                        <thead>
                            <tr>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Created"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || users.get()
                                key=|user| (user.id.clone(), user.role)
                                children=move |user| {
                                    let role_id = user.id.clone();
                                    let change_role = move |ev: web_sys::Event| {
                                        let new_role = UserRole::from_str(&event_target_value(&ev));
                                        let user_id = role_id.clone();
                                        spawn_local(async move {
                                            match commands::update_user_role(&user_id, new_role).await {
                                                Ok(()) => {
                                                    store_push_toast(&store, "Success", "User role updated successfully");
                                                    ctx.reload_users();
                                                }
                                                Err(e) => store_push_toast(&store, "Error", &e),
                                            }
                                        });
                                    };

                                    let delete_id = user.id.clone();
                                    let on_delete = Callback::new(move |_| {
                                        let user_id = delete_id.clone();
                                        spawn_local(async move {
                                            match commands::delete_user(&user_id).await {
                                                Ok(()) => {
                                                    store_push_toast(&store, "Success", "User deleted successfully");
                                                    ctx.reload_users();
                                                }
                                                Err(e) => store_push_toast(&store, "Error", &e),
                                            }
                                        });
                                    });

                                    view! {
                                        <tr>
                                            <td class="user-email">{user.email.clone()}</td>
                                            <td>
                                                <select prop:value=user.role.as_str() on:change=change_role>
                                                    <option value="user">"User"</option>
                                                    <option value="admin">"Admin"</option>
                                                </select>
                                            </td>
                                            <td>{format_created(&user.created_at)}</td>
                                            <td>
                                                <DeleteConfirmButton button_class="ghost-btn danger" on_confirm=on_delete />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_created;

    #[test]
    fn test_format_created_parses_rfc3339() {
        assert_eq!(format_created("2024-01-15T14:32:00+00:00"), "2024-01-15");
    }

    #[test]
    fn test_format_created_falls_back_to_raw() {
        assert_eq!(format_created("yesterday"), "yesterday");
    }
}
