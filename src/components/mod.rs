//! UI Components
//!
//! Page-level editors and reusable Leptos components.

mod content_editor;
mod delete_confirm_button;
mod device_status;
mod display_preview;
mod home;
mod manage_users;
mod menu_builder;
mod playlists;
mod schedule;
mod toast_host;

pub use content_editor::ContentEditor;
pub use delete_confirm_button::DeleteConfirmButton;
pub use device_status::DeviceStatusPanel;
pub use display_preview::DisplayPreview;
pub use home::HomePage;
pub use manage_users::ManageUsers;
pub use menu_builder::MenuBuilder;
pub use playlists::PlaylistsPage;
pub use schedule::SchedulePage;
pub use toast_host::ToastHost;
