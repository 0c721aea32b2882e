use std::collections::HashMap;

use scrollfx_protocol::{ElementRect, TargetId, TickInput, Viewport};

/// Where the pipeline reads geometry from, once per tick.
///
/// A tick sees exactly one snapshot: the pipeline queries the source at the
/// start of the pass and never re-reads mid-pass, so every effect in the same
/// tick agrees on viewport, scroll position, and element boxes.
pub trait GeometrySource {
    fn viewport(&self) -> Viewport;

    /// Absolute scroll offset from the top of the document, in pixels.
    fn scroll_y(&self) -> f64;

    /// Viewport-relative bounding box for a target, or `None` if the host
    /// has no element for it this tick.
    fn element_rect(&self, target: &TargetId) -> Option<ElementRect>;
}

/// Snapshot-backed geometry source.
///
/// Hosts that batch their measurements (the WASM bridge, test harnesses)
/// build one of these per tick from a [`TickInput`].
#[derive(Debug, Clone)]
pub struct GeometryMap {
    viewport: Viewport,
    scroll_y: f64,
    rects: HashMap<TargetId, ElementRect>,
}

impl GeometryMap {
    pub fn new(viewport: Viewport, scroll_y: f64) -> Self {
        Self {
            viewport,
            scroll_y,
            rects: HashMap::new(),
        }
    }

    pub fn insert(&mut self, target: TargetId, rect: ElementRect) {
        self.rects.insert(target, rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// All tracked rects in the snapshot, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&TargetId, &ElementRect)> {
        self.rects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl From<TickInput> for GeometryMap {
    fn from(input: TickInput) -> Self {
        let mut map = Self::new(input.viewport, input.scroll_y);
        for sample in input.elements {
            map.insert(sample.target, sample.rect);
        }
        map
    }
}

impl GeometrySource for GeometryMap {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn element_rect(&self, target: &TargetId) -> Option<ElementRect> {
        self.rects.get(target.as_str()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollfx_protocol::ElementSample;

    #[test]
    fn lookup_by_target() {
        let mut map = GeometryMap::new(Viewport::new(1280.0, 1000.0), 340.0);
        map.insert(
            TargetId::from("hero-card"),
            ElementRect::new(550.0, 100.0, 600.0, 400.0),
        );

        assert_eq!(map.scroll_y(), 340.0);
        assert_eq!(map.viewport().height, 1000.0);
        let rect = map
            .element_rect(&TargetId::from("hero-card"))
            .expect("tracked rect");
        assert_eq!(rect.top, 550.0);
        assert!(map.element_rect(&TargetId::from("missing")).is_none());
    }

    #[test]
    fn built_from_tick_input() {
        let input = TickInput {
            viewport: Viewport::new(800.0, 600.0),
            scroll_y: 0.0,
            elements: vec![ElementSample {
                target: TargetId::from("promo-video"),
                rect: ElementRect::new(600.0, 0.0, 800.0, 450.0),
            }],
        };
        let map = GeometryMap::from(input);
        assert_eq!(map.len(), 1);
        assert!(map.element_rect(&TargetId::from("promo-video")).is_some());
    }
}
