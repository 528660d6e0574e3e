// this_file: crates/labelshape-core/src/glyph_set.rs

//! Glyph metrics store for one font at one size.
//!
//! The store is two-phase: a [`GlyphSetBuilder`] is populated by the font
//! loader, then frozen into a [`GlyphSet`] that is only ever read. A frozen
//! set is `Send + Sync` and is shared between shaping workers behind an
//! `Arc`; re-populating it requires taking ownership back with
//! [`GlyphSet::into_builder`].

use crate::types::{GlyphId, GlyphMetrics};
use std::collections::BTreeMap;

/// Mutable phase of the metrics store.
#[derive(Debug, Clone, Default)]
pub struct GlyphSetBuilder {
    sdfs: BTreeMap<GlyphId, GlyphMetrics>,
}

impl GlyphSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite the metrics for `id`. Last write wins.
    pub fn insert(&mut self, id: GlyphId, metrics: GlyphMetrics) -> &mut Self {
        self.sdfs.insert(id, metrics);
        self
    }

    /// Current mapping, in ascending id order.
    pub fn metrics(&self) -> &BTreeMap<GlyphId, GlyphMetrics> {
        &self.sdfs
    }

    pub fn len(&self) -> usize {
        self.sdfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sdfs.is_empty()
    }

    /// Freeze into a read-only glyph set.
    pub fn build(self) -> GlyphSet {
        log::debug!(
            target: "labelshape::registry",
            "froze glyph set with {} glyphs",
            self.sdfs.len()
        );
        GlyphSet { sdfs: self.sdfs }
    }
}

impl Extend<(GlyphId, GlyphMetrics)> for GlyphSetBuilder {
    fn extend<T: IntoIterator<Item = (GlyphId, GlyphMetrics)>>(&mut self, iter: T) {
        self.sdfs.extend(iter);
    }
}

impl FromIterator<(GlyphId, GlyphMetrics)> for GlyphSetBuilder {
    fn from_iter<T: IntoIterator<Item = (GlyphId, GlyphMetrics)>>(iter: T) -> Self {
        Self {
            sdfs: iter.into_iter().collect(),
        }
    }
}

/// Read-only phase of the metrics store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphSet {
    sdfs: BTreeMap<GlyphId, GlyphMetrics>,
}

impl GlyphSet {
    pub fn builder() -> GlyphSetBuilder {
        GlyphSetBuilder::new()
    }

    /// Metrics of `id`, if the glyph is present.
    pub fn get(&self, id: GlyphId) -> Option<&GlyphMetrics> {
        self.sdfs.get(&id)
    }

    pub fn contains(&self, id: GlyphId) -> bool {
        self.sdfs.contains_key(&id)
    }

    /// Advance of `id`; missing glyphs advance by zero.
    pub fn advance(&self, id: GlyphId) -> u32 {
        self.sdfs.get(&id).map(|m| m.advance).unwrap_or(0)
    }

    /// Full mapping, in ascending id order.
    pub fn metrics(&self) -> &BTreeMap<GlyphId, GlyphMetrics> {
        &self.sdfs
    }

    pub fn len(&self) -> usize {
        self.sdfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sdfs.is_empty()
    }

    /// Return to the mutable phase for re-population.
    pub fn into_builder(self) -> GlyphSetBuilder {
        GlyphSetBuilder { sdfs: self.sdfs }
    }
}

impl FromIterator<(GlyphId, GlyphMetrics)> for GlyphSet {
    fn from_iter<T: IntoIterator<Item = (GlyphId, GlyphMetrics)>>(iter: T) -> Self {
        GlyphSetBuilder::from_iter(iter).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_last_write_wins() {
        let mut builder = GlyphSet::builder();
        builder.insert(65, GlyphMetrics::with_advance(10));
        builder.insert(65, GlyphMetrics::with_advance(12));
        let set = builder.build();
        assert_eq!(set.len(), 1);
        assert_eq!(set.advance(65), 12);
    }

    #[test]
    fn test_metrics_enumerate_in_id_order() {
        let set: GlyphSet = [(90, GlyphMetrics::with_advance(1)), (65, GlyphMetrics::with_advance(2))]
            .into_iter()
            .collect();
        let ids: Vec<GlyphId> = set.metrics().keys().copied().collect();
        assert_eq!(ids, vec![65, 90]);
    }

    #[test]
    fn test_missing_glyph_has_zero_advance() {
        let set = GlyphSet::default();
        assert!(!set.contains(9));
        assert!(set.get(9).is_none());
        assert_eq!(set.advance(9), 0);
    }

    #[test]
    fn test_into_builder_repopulates() {
        let set: GlyphSet = [(5, GlyphMetrics::new(8, 9, 1, -2, 7))].into_iter().collect();
        let mut builder = set.into_builder();
        builder.insert(6, GlyphMetrics::with_advance(3));
        let set = builder.build();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(5).map(|m| m.top), Some(-2));
    }

    #[test]
    fn test_glyph_set_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GlyphSet>();
    }
}
