//! Frontend Models
//!
//! Flat entity records shared across pages. User records match the hosted
//! backend's JSON; everything else lives only in per-page memory.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh entity id (UUID v4, string form)
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Menu category (fixed set, matches the category tabs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Drinks,
    Dessert,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 5] = [
        MenuCategory::Breakfast,
        MenuCategory::Lunch,
        MenuCategory::Dinner,
        MenuCategory::Drinks,
        MenuCategory::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Breakfast => "breakfast",
            MenuCategory::Lunch => "lunch",
            MenuCategory::Dinner => "dinner",
            MenuCategory::Drinks => "drinks",
            MenuCategory::Dessert => "dessert",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "lunch" => MenuCategory::Lunch,
            "dinner" => MenuCategory::Dinner,
            "drinks" => MenuCategory::Drinks,
            "dessert" => MenuCategory::Dessert,
            _ => MenuCategory::Breakfast,
        }
    }

    /// Display name for tabs and badges
    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Breakfast => "Breakfast",
            MenuCategory::Lunch => "Lunch",
            MenuCategory::Dinner => "Dinner",
            MenuCategory::Drinks => "Drinks",
            MenuCategory::Dessert => "Dessert",
        }
    }
}

/// One entry on a menu board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub category: MenuCategory,
    pub title: String,
    pub description: String,
    /// Price as entered; no format validation
    pub price: String,
    pub image: Option<String>,
}

/// Kind of content a playlist entry points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistItemKind {
    #[default]
    Menu,
    Image,
    Video,
}

impl PlaylistItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistItemKind::Menu => "menu",
            PlaylistItemKind::Image => "image",
            PlaylistItemKind::Video => "video",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "image" => PlaylistItemKind::Image,
            "video" => PlaylistItemKind::Video,
            _ => PlaylistItemKind::Menu,
        }
    }
}

/// Transition style between playlist entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    #[default]
    Fade,
    Slide,
}

impl Transition {
    pub fn label(&self) -> &'static str {
        match self {
            Transition::Fade => "fade",
            Transition::Slide => "slide",
        }
    }
}

/// One timed entry in a playlist's display sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    pub kind: PlaylistItemKind,
    pub name: String,
    pub duration_secs: u32,
}

/// Ordered, timed sequence of content shown in rotation on a display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub items: Vec<PlaylistItem>,
    pub transition: Transition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 3] = [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "lunch" => MealTime::Lunch,
            "dinner" => MealTime::Dinner,
            _ => MealTime::Breakfast,
        }
    }
}

/// Day-of-week label as shown on schedule badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

/// A time/day-bound rule assigning a playlist to be active.
///
/// The playlist is referenced by name, not id; two playlists sharing a name
/// bind ambiguously. Start/end are "HH:MM" strings as entered, no range
/// check (end before start is accepted).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub name: String,
    pub playlist: String,
    pub meal_time: MealTime,
    pub days: Vec<Weekday>,
    pub start_time: String,
    pub end_time: String,
}

/// Kind of a composited display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    #[default]
    Text,
    Image,
    Video,
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Text => "text",
            LayerKind::Image => "image",
            LayerKind::Video => "video",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// One visual element composited into a display preview.
///
/// `None` position/size means full-bleed at the origin. Collection order is
/// render order; later layers paint above earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentLayer {
    pub id: String,
    pub kind: LayerKind,
    pub content: String,
    pub position: Option<Position>,
    pub size: Option<Size>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceState {
    Online,
    #[default]
    Offline,
}

impl DeviceState {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceState::Online => "online",
            DeviceState::Offline => "offline",
        }
    }
}

/// A connected display device. Status and last-seen are static mock values;
/// no device protocol exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub status: DeviceState,
    pub location: String,
    pub last_seen: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "admin" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

/// User record as returned by the hosted backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: String,
}

/// Non-blocking notification shown by the toast host
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        assert_eq!(MenuCategory::Drinks.as_str(), "drinks");
        assert_eq!(MenuCategory::from_str("dessert"), MenuCategory::Dessert);
        // unknown categories fall back to breakfast
        assert_eq!(MenuCategory::from_str("brunch"), MenuCategory::Breakfast);
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::from_str("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str("superuser"), UserRole::User);
    }

    #[test]
    fn test_new_ids_are_distinct() {
        assert_ne!(new_id(), new_id());
    }
}
