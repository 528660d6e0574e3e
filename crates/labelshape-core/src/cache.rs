// this_file: crates/labelshape-core/src/cache.rs

//! Glyph set registry and shaping cache.

use crate::glyph_set::GlyphSet;
use crate::options::ShapingOptions;
use crate::types::{Direction, Shaping, WritingMode};
use crate::utils::quantize;
use crate::{LabelShapeError, Result};
use dashmap::DashMap;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;

const DEFAULT_SHAPE_CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(512) {
    Some(size) => size,
    None => unreachable!(),
};

/// Concurrent map from font stack name to its frozen glyph set.
///
/// Readers receive an `Arc` and keep using it for as long as they need; a
/// hot reload replaces the entry without disturbing shape calls that are
/// still in flight on the previous set.
#[derive(Default)]
pub struct GlyphSetRegistry {
    sets: DashMap<String, Arc<GlyphSet>>,
}

impl GlyphSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the glyph set for `font_stack`, returning the
    /// previous one.
    pub fn insert(&self, font_stack: impl Into<String>, set: GlyphSet) -> Option<Arc<GlyphSet>> {
        let font_stack = font_stack.into();
        log::debug!(
            target: "labelshape::registry",
            "registering {} glyphs for font stack {font_stack:?}",
            set.len()
        );
        self.sets.insert(font_stack, Arc::new(set))
    }

    /// Look up the glyph set for `font_stack`.
    pub fn get(&self, font_stack: &str) -> Result<Arc<GlyphSet>> {
        self.sets
            .get(font_stack)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| LabelShapeError::FontStackNotFound {
                name: font_stack.to_string(),
            })
    }

    pub fn remove(&self, font_stack: &str) -> Option<Arc<GlyphSet>> {
        self.sets.remove(font_stack).map(|(_, set)| set)
    }

    pub fn contains(&self, font_stack: &str) -> bool {
        self.sets.contains_key(font_stack)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn clear(&self) {
        self.sets.clear();
    }
}

/// Quantized view of [`ShapingOptions`] usable as a hash key.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct OptionsKey {
    direction: Direction,
    writing_mode: WritingMode,
    full_justify: bool,
    balanced_breaking: Option<bool>,
    // max_width, line_height, horizontal_align, vertical_align, justify,
    // spacing, translate.x, translate.y, vertical_height
    values: [i32; 9],
}

impl From<&ShapingOptions> for OptionsKey {
    fn from(options: &ShapingOptions) -> Self {
        Self {
            direction: options.direction,
            writing_mode: options.writing_mode,
            full_justify: options.full_justify,
            balanced_breaking: options.balanced_breaking,
            values: [
                quantize(options.max_width),
                quantize(options.line_height),
                quantize(options.horizontal_align),
                quantize(options.vertical_align),
                quantize(options.justify),
                quantize(options.spacing),
                quantize(options.translate.x),
                quantize(options.translate.y),
                quantize(options.vertical_height),
            ],
        }
    }
}

/// Key for shaping cache lookups
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ShapeKey {
    pub font_stack: String,
    pub text: String,
    pub options: OptionsKey,
}

impl ShapeKey {
    pub fn new(font_stack: impl Into<String>, text: impl Into<String>, options: &ShapingOptions) -> Self {
        Self {
            font_stack: font_stack.into(),
            text: text.into(),
            options: OptionsKey::from(options),
        }
    }
}

/// Bounded LRU cache of finished shapings.
///
/// Labels repeat heavily across tiles (street names, place names), so the
/// same request is often shaped many times.
pub struct ShapingCache {
    shapes: Mutex<LruCache<ShapeKey, Arc<Shaping>>>,
    capacity: usize,
}

impl ShapingCache {
    /// Create a cache holding up to `capacity` shapings (512 if zero).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_SHAPE_CACHE_SIZE);
        Self {
            shapes: Mutex::new(LruCache::new(capacity)),
            capacity: capacity.get(),
        }
    }

    /// Get cached shaping
    pub fn get(&self, key: &ShapeKey) -> Option<Arc<Shaping>> {
        self.shapes.lock().get(key).cloned()
    }

    /// Cache shaping
    pub fn insert(&self, key: ShapeKey, shaping: Shaping) -> Arc<Shaping> {
        let shaping = Arc::new(shaping);
        self.shapes.lock().put(key, shaping.clone());
        shaping
    }

    /// Return the cached shaping for `key`, computing it on a miss.
    pub fn get_or_insert_with(&self, key: ShapeKey, shape: impl FnOnce() -> Shaping) -> Arc<Shaping> {
        if let Some(shaping) = self.get(&key) {
            return shaping;
        }
        // Shape outside the lock; concurrent misses on one key compute the
        // same value, so the later insert is harmless.
        let shaping = shape();
        self.insert(key, shaping)
    }

    pub fn clear(&self) {
        self.shapes.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            shape_count: self.shapes.lock().len(),
            capacity: self.capacity,
        }
    }
}

impl Default for ShapingCache {
    fn default() -> Self {
        Self::new(DEFAULT_SHAPE_CACHE_SIZE.get())
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub shape_count: usize,
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GlyphMetrics, Point};

    fn glyph_set(advance: u32) -> GlyphSet {
        [(65, GlyphMetrics::with_advance(advance))].into_iter().collect()
    }

    #[test]
    fn test_registry_lookup() {
        let registry = GlyphSetRegistry::new();
        assert!(registry.insert("Open Sans", glyph_set(10)).is_none());
        assert_eq!(registry.get("Open Sans").unwrap().advance(65), 10);
        assert!(matches!(
            registry.get("Noto Sans"),
            Err(LabelShapeError::FontStackNotFound { .. })
        ));
    }

    #[test]
    fn test_registry_replace_keeps_old_readers() {
        let registry = GlyphSetRegistry::new();
        registry.insert("Open Sans", glyph_set(10));
        let in_flight = registry.get("Open Sans").unwrap();

        let previous = registry.insert("Open Sans", glyph_set(14));
        assert!(previous.is_some());
        assert_eq!(in_flight.advance(65), 10);
        assert_eq!(registry.get("Open Sans").unwrap().advance(65), 14);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_shape_key_quantizes_options() {
        let a = ShapingOptions::default();
        let b = ShapingOptions {
            max_width: a.max_width + 0.001,
            ..a.clone()
        };
        let c = ShapingOptions {
            translate: Point::new(1.0, 0.0),
            ..a.clone()
        };
        assert_eq!(ShapeKey::new("s", "t", &a), ShapeKey::new("s", "t", &b));
        assert_ne!(ShapeKey::new("s", "t", &a), ShapeKey::new("s", "t", &c));
    }

    #[test]
    fn test_shaping_cache_evicts_least_recent() {
        let cache = ShapingCache::new(1);
        let options = ShapingOptions::default();
        let empty = Shaping::invalid(Point::ORIGIN, WritingMode::Horizontal);

        cache.insert(ShapeKey::new("s", "one", &options), empty.clone());
        cache.insert(ShapeKey::new("s", "two", &options), empty.clone());
        assert!(cache.get(&ShapeKey::new("s", "one", &options)).is_none());
        assert!(cache.get(&ShapeKey::new("s", "two", &options)).is_some());
        assert_eq!(
            cache.stats(),
            CacheStats {
                shape_count: 1,
                capacity: 1
            }
        );
    }

    #[test]
    fn test_get_or_insert_with_computes_once() {
        let cache = ShapingCache::default();
        let options = ShapingOptions::default();
        let key = ShapeKey::new("s", "label", &options);
        let mut calls = 0;
        for _ in 0..3 {
            cache.get_or_insert_with(key.clone(), || {
                calls += 1;
                Shaping::invalid(Point::ORIGIN, WritingMode::Horizontal)
            });
        }
        assert_eq!(calls, 1);
    }
}
