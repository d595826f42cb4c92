//! Content Layer Composer
//!
//! Ordered collection of display layers feeding the preview renderer.
//! Collection order is render order; later layers paint above earlier ones.

use crate::models::{new_id, ContentLayer, LayerKind};

#[derive(Debug, Clone, Default)]
pub struct LayerComposer {
    layers: Vec<ContentLayer>,
}

impl LayerComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer with default full-bleed placement. Payloads that are
    /// empty after trimming are rejected (no-op, returns false); accepted
    /// payloads are stored untrimmed.
    pub fn add_layer(&mut self, kind: LayerKind, payload: &str) -> bool {
        if payload.trim().is_empty() {
            return false;
        }
        self.layers.push(ContentLayer {
            id: new_id(),
            kind,
            content: payload.to_string(),
            position: None,
            size: None,
        });
        true
    }

    /// Remove by id; unknown ids are a silent no-op
    pub fn remove_layer(&mut self, id: &str) {
        self.layers.retain(|layer| layer.id != id);
    }

    pub fn layers(&self) -> &[ContentLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order_is_insertion_order() {
        let mut composer = LayerComposer::new();
        composer.add_layer(LayerKind::Text, "Welcome");
        composer.add_layer(LayerKind::Image, "https://example.com/a.jpg");
        composer.add_layer(LayerKind::Text, "Specials");

        let kinds: Vec<LayerKind> = composer.layers().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, [LayerKind::Text, LayerKind::Image, LayerKind::Text]);

        // removing the first keeps the rest in relative order
        let first_id = composer.layers()[0].id.clone();
        composer.remove_layer(&first_id);
        let kinds: Vec<LayerKind> = composer.layers().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, [LayerKind::Image, LayerKind::Text]);
    }

    #[test]
    fn test_blank_payload_rejected_for_every_kind() {
        let mut composer = LayerComposer::new();
        for kind in [LayerKind::Text, LayerKind::Image, LayerKind::Video] {
            assert!(!composer.add_layer(kind, "   "));
            assert!(!composer.add_layer(kind, ""));
        }
        assert!(composer.is_empty());
    }

    #[test]
    fn test_payload_stored_untrimmed() {
        let mut composer = LayerComposer::new();
        assert!(composer.add_layer(LayerKind::Text, "  Happy Hour  "));
        assert_eq!(composer.layers()[0].content, "  Happy Hour  ");
    }

    #[test]
    fn test_new_layers_default_to_full_bleed() {
        let mut composer = LayerComposer::new();
        composer.add_layer(LayerKind::Video, "https://example.com/loop.mp4");
        let layer = &composer.layers()[0];
        assert!(layer.position.is_none());
        assert!(layer.size.is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut composer = LayerComposer::new();
        composer.add_layer(LayerKind::Text, "Keep me");
        composer.remove_layer("no-such-id");
        assert_eq!(composer.len(), 1);
    }
}
