//! Menu Item Store
//!
//! Per-page collection of menu entries, insertion-ordered, filterable by
//! category. Owned exclusively by the Menu Builder page.

use crate::models::{new_id, MenuCategory, MenuItem};

/// Input for a new menu entry, passed straight from the form
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub category: MenuCategory,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo data shown until real content is pushed
    pub fn sample() -> Self {
        let mut store = Self::new();
        store.add(NewMenuItem {
            category: MenuCategory::Breakfast,
            title: "Breakfast Burrito".to_string(),
            description: "Eggs, bacon, cheese, and salsa wrapped in a warm tortilla".to_string(),
            price: "8.99".to_string(),
            image: None,
        });
        store.add(NewMenuItem {
            category: MenuCategory::Lunch,
            title: "Club Sandwich".to_string(),
            description: "Triple-decker with turkey, bacon, lettuce, and tomato".to_string(),
            price: "12.99".to_string(),
            image: None,
        });
        store
    }

    /// Append a fully-specified entry. Title and price are required; a
    /// missing one makes this a no-op and returns false. The price string
    /// is stored as entered.
    pub fn add(&mut self, input: NewMenuItem) -> bool {
        if input.title.is_empty() || input.price.is_empty() {
            return false;
        }
        self.items.push(MenuItem {
            id: new_id(),
            category: input.category,
            title: input.title,
            description: input.description,
            price: input.price,
            image: input.image,
        });
        true
    }

    /// Remove by id; unknown ids are a silent no-op
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Lazy view of one category, insertion order preserved. Restartable by
    /// calling again.
    pub fn in_category(&self, category: MenuCategory) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burrito() -> NewMenuItem {
        NewMenuItem {
            category: MenuCategory::Breakfast,
            title: "Burrito".to_string(),
            description: String::new(),
            price: "8.99".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_add_then_filter_other_category_is_empty() {
        let mut store = MenuStore::new();
        assert!(store.add(burrito()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.in_category(MenuCategory::Lunch).count(), 0);
    }

    #[test]
    fn test_add_rejects_missing_required_fields() {
        let mut store = MenuStore::new();
        let mut no_title = burrito();
        no_title.title = String::new();
        assert!(!store.add(no_title));

        let mut no_price = burrito();
        no_price.price = String::new();
        assert!(!store.add(no_price));

        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_price_passes_through() {
        let mut store = MenuStore::new();
        let mut odd = burrito();
        odd.price = "eight-ish".to_string();
        assert!(store.add(odd));
        assert_eq!(store.items()[0].price, "eight-ish");
    }

    #[test]
    fn test_insertion_order_stable_under_removal() {
        let mut store = MenuStore::new();
        for title in ["a", "b", "c", "d"] {
            let mut item = burrito();
            item.title = title.to_string();
            store.add(item);
        }
        let b_id = store.items()[1].id.clone();
        store.remove(&b_id);

        let titles: Vec<&str> = store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["a", "c", "d"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = MenuStore::new();
        store.add(burrito());
        store.remove("no-such-id");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_category_filter_exact_and_idempotent() {
        let mut store = MenuStore::new();
        let mut lunch = burrito();
        lunch.category = MenuCategory::Lunch;
        lunch.title = "Sandwich".to_string();
        store.add(burrito());
        store.add(lunch);
        store.add(burrito());

        let first: Vec<String> = store
            .in_category(MenuCategory::Breakfast)
            .map(|i| i.id.clone())
            .collect();
        let second: Vec<String> = store
            .in_category(MenuCategory::Breakfast)
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert!(store
            .in_category(MenuCategory::Breakfast)
            .all(|i| i.category == MenuCategory::Breakfast));
    }
}
