// this_file: crates/labelshape-shaping/src/batch.rs

//! Batch shaping for parallel label processing.

use crate::shaper::Shaper;
use labelshape_core::{
    BidiResolver, GlyphSetRegistry, LabelShapeError, Result, ShapeKey, Shaping, ShapingCache,
    ShapingOptions,
};
use rayon::iter::IndexedParallelIterator;
use rayon::prelude::*;
use std::sync::Arc;

/// Item to be shaped in batch.
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Registry key of the glyph set to shape with
    pub font_stack: String,
    /// Label text
    pub text: String,
    /// Shaping options
    pub options: ShapingOptions,
}

impl BatchItem {
    pub fn new(font_stack: impl Into<String>, text: impl Into<String>, options: ShapingOptions) -> Self {
        Self {
            font_stack: font_stack.into(),
            text: text.into(),
            options,
        }
    }
}

/// Result from batch shaping.
#[derive(Debug)]
pub struct BatchResult {
    /// Index of the item in the batch
    pub index: usize,
    /// Shaping result or error
    pub result: Result<Arc<Shaping>>,
}

/// Shapes many labels in parallel against a shared glyph set registry.
pub struct BatchShaper {
    registry: Arc<GlyphSetRegistry>,
    resolver: Arc<dyn BidiResolver>,
    cache: Option<Arc<ShapingCache>>,
}

impl BatchShaper {
    /// Create a new batch shaper over `registry`.
    pub fn new(registry: Arc<GlyphSetRegistry>, resolver: Arc<dyn BidiResolver>) -> Self {
        Self {
            registry,
            resolver,
            cache: None,
        }
    }

    /// Share finished shapings through `cache`.
    pub fn with_cache(mut self, cache: Arc<ShapingCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache(&self) -> Option<&Arc<ShapingCache>> {
        self.cache.as_ref()
    }

    /// Shape a batch of items in parallel. Results are in item order.
    pub fn shape_batch(&self, items: Vec<BatchItem>) -> Vec<BatchResult> {
        log::debug!(target: "labelshape::batch", "shaping batch of {} items", items.len());
        items
            .into_par_iter()
            .enumerate()
            .map(|(index, item)| {
                let result = self.shape_single(&item);
                BatchResult { index, result }
            })
            .collect()
    }

    /// Shape a batch with a specific number of threads.
    pub fn shape_batch_with_threads(
        &self,
        items: Vec<BatchItem>,
        num_threads: usize,
    ) -> Result<Vec<BatchResult>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(LabelShapeError::worker_pool)?;

        Ok(pool.install(|| self.shape_batch(items)))
    }

    /// Shape items from an indexed parallel iterator.
    pub fn shape_streaming<'a, I>(&'a self, items: I) -> impl ParallelIterator<Item = BatchResult> + 'a
    where
        I: IndexedParallelIterator<Item = BatchItem> + 'a,
    {
        items.enumerate().map(move |(index, item)| {
            let result = self.shape_single(&item);
            BatchResult { index, result }
        })
    }

    /// Shape a single item.
    pub fn shape_single(&self, item: &BatchItem) -> Result<Arc<Shaping>> {
        item.options.validate()?;
        let glyphs = self.registry.get(&item.font_stack)?;
        let shape = || Shaper::new(&glyphs, &*self.resolver).get_shaping(&item.text, &item.options);

        match &self.cache {
            Some(cache) => {
                let key = ShapeKey::new(item.font_stack.as_str(), item.text.as_str(), &item.options);
                Ok(cache.get_or_insert_with(key, shape))
            }
            None => Ok(Arc::new(shape())),
        }
    }
}
