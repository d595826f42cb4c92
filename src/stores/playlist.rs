//! Playlist Store
//!
//! Ordered collection of playlists, each an ordered sequence of timed
//! content references. Sequence order is playback order; there is no
//! reorder operation.

use crate::models::{new_id, Playlist, PlaylistItem, PlaylistItemKind, Transition};

/// Input for a new playlist entry, passed straight from the form
#[derive(Debug, Clone)]
pub struct NewPlaylistItem {
    pub kind: PlaylistItemKind,
    pub name: String,
    /// Seconds as entered; zero is accepted
    pub duration_secs: u32,
}

#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo data shown until real content is pushed
    pub fn sample() -> Self {
        let mut store = Self::new();
        if let Some(id) = store.create("Breakfast Menu").map(|p| p.id.clone()) {
            store.add_item(&id, NewPlaylistItem {
                kind: PlaylistItemKind::Menu,
                name: "Morning Specials".to_string(),
                duration_secs: 10,
            });
            store.add_item(&id, NewPlaylistItem {
                kind: PlaylistItemKind::Image,
                name: "Coffee Promo".to_string(),
                duration_secs: 5,
            });
        }
        if let Some(id) = store.create("Lunch Menu").map(|p| p.id.clone()) {
            store.add_item(&id, NewPlaylistItem {
                kind: PlaylistItemKind::Menu,
                name: "Daily Lunch".to_string(),
                duration_secs: 15,
            });
            store.add_item(&id, NewPlaylistItem {
                kind: PlaylistItemKind::Video,
                name: "Restaurant Tour".to_string(),
                duration_secs: 30,
            });
            if let Some(playlist) = store.playlists.iter_mut().find(|p| p.id == id) {
                playlist.transition = Transition::Slide;
            }
        }
        store
    }

    /// Append a new empty playlist with the default transition. Empty names
    /// are rejected (no-op, returns None).
    pub fn create(&mut self, name: &str) -> Option<&Playlist> {
        if name.is_empty() {
            return None;
        }
        self.playlists.push(Playlist {
            id: new_id(),
            name: name.to_string(),
            items: Vec::new(),
            transition: Transition::default(),
        });
        self.playlists.last()
    }

    /// Append an entry to one playlist's sequence. Unknown playlist ids are
    /// a no-op returning false. Duration is stored as given.
    pub fn add_item(&mut self, playlist_id: &str, input: NewPlaylistItem) -> bool {
        match self.playlists.iter_mut().find(|p| p.id == playlist_id) {
            Some(playlist) => {
                playlist.items.push(PlaylistItem {
                    id: new_id(),
                    kind: input.kind,
                    name: input.name,
                    duration_secs: input.duration_secs,
                });
                true
            }
            None => false,
        }
    }

    /// Delete a whole playlist including its items
    pub fn remove(&mut self, playlist_id: &str) {
        self.playlists.retain(|p| p.id != playlist_id);
    }

    pub fn get(&self, playlist_id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == playlist_id)
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promo(duration_secs: u32) -> NewPlaylistItem {
        NewPlaylistItem {
            kind: PlaylistItemKind::Image,
            name: "Promo".to_string(),
            duration_secs,
        }
    }

    #[test]
    fn test_create_starts_empty_with_default_transition() {
        let mut store = PlaylistStore::new();
        let id = store.create("Test").map(|p| p.id.clone()).unwrap();

        let playlist = store.get(&id).unwrap();
        assert!(playlist.items.is_empty());
        assert_eq!(playlist.transition, Transition::Fade);

        assert!(store.add_item(&id, promo(5)));
        let playlist = store.get(&id).unwrap();
        assert_eq!(playlist.items.len(), 1);
        assert_eq!(playlist.items[0].duration_secs, 5);
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let mut store = PlaylistStore::new();
        assert!(store.create("").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_item_does_not_alias_other_playlists() {
        let mut store = PlaylistStore::new();
        let first = store.create("First").map(|p| p.id.clone()).unwrap();
        let second = store.create("Second").map(|p| p.id.clone()).unwrap();

        store.add_item(&first, promo(5));
        store.add_item(&first, promo(10));

        assert_eq!(store.get(&first).unwrap().items.len(), 2);
        assert!(store.get(&second).unwrap().items.is_empty());
    }

    #[test]
    fn test_add_item_to_unknown_playlist_is_noop() {
        let mut store = PlaylistStore::new();
        store.create("Only");
        assert!(!store.add_item("no-such-id", promo(5)));
        assert!(store.playlists()[0].items.is_empty());
    }

    #[test]
    fn test_remove_deletes_only_its_own_items() {
        let mut store = PlaylistStore::new();
        let first = store.create("First").map(|p| p.id.clone()).unwrap();
        let second = store.create("Second").map(|p| p.id.clone()).unwrap();
        store.add_item(&first, promo(5));
        store.add_item(&second, promo(7));
        store.add_item(&second, promo(9));

        store.remove(&first);

        assert_eq!(store.len(), 1);
        assert!(store.get(&first).is_none());
        assert_eq!(store.get(&second).unwrap().items.len(), 2);
    }

    #[test]
    fn test_sequence_order_is_append_order() {
        let mut store = PlaylistStore::new();
        let id = store.create("Ordered").map(|p| p.id.clone()).unwrap();
        for secs in [1, 2, 3] {
            store.add_item(&id, promo(secs));
        }
        let durations: Vec<u32> = store
            .get(&id)
            .unwrap()
            .items
            .iter()
            .map(|i| i.duration_secs)
            .collect();
        assert_eq!(durations, [1, 2, 3]);
    }

    #[test]
    fn test_zero_duration_is_accepted() {
        let mut store = PlaylistStore::new();
        let id = store.create("Loose").map(|p| p.id.clone()).unwrap();
        assert!(store.add_item(&id, promo(0)));
        assert_eq!(store.get(&id).unwrap().items[0].duration_secs, 0);
    }
}
