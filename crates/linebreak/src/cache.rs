//! The layout cache: at-most-once shaping per (font-collection id,
//! paint shape parameters, text slice, direction, hyphen edit) key, an
//! LRU with bounded entries, guarded by one process-wide mutex.

use lru::LruCache;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::num::NonZeroUsize;

use crate::hyphen::HyphenEdit;
use crate::run::Paint;
use crate::shaping::{ShapedPiece, ShapingBackend};
use crate::text::Range;

/// Default capacity of the process-wide layout cache.
pub const DEFAULT_CAPACITY: usize = 5000;

/// The lookup key. Equality compares every field, including the code
/// units of the shaped text slice byte-for-byte.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    font_collection_id: u64,
    size_bits: u32,
    scale_x_bits: u32,
    skew_x_bits: u32,
    letter_spacing_bits: u32,
    flags: u32,
    locale_list_id: u32,
    start_edit: u8,
    end_edit: u8,
    is_rtl: bool,
    text: Vec<u16>,
}

impl CacheKey {
    pub fn new(paint: &Paint, is_rtl: bool, edit: HyphenEdit, text: &[u16]) -> Self {
        Self {
            font_collection_id: paint.font_collection_id,
            size_bits: paint.size.to_bits(),
            scale_x_bits: paint.scale_x.to_bits(),
            skew_x_bits: paint.skew_x.to_bits(),
            letter_spacing_bits: paint.letter_spacing.to_bits(),
            flags: paint.flags.bits(),
            locale_list_id: paint.locale_list_id.raw(),
            start_edit: edit.start() as u8,
            end_edit: edit.end() as u8,
            is_rtl,
            text: text.to_vec(),
        }
    }
}

/// Whether font-feature-settings bypass the cache: a paint with
/// non-empty font-feature-settings is never cached.
pub fn bypasses_cache(paint: &Paint) -> bool {
    !paint.font_feature_settings.is_empty()
}

/// The layout cache itself.
pub struct LayoutCache {
    entries: LruCache<CacheKey, ShapedPiece>,
}

impl LayoutCache {
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self { entries: LruCache::new(cap) }
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<ShapedPiece> {
        self.entries.get(key).cloned()
    }

    /// Inserts a freshly shaped piece. The key owns a copy of the relevant
    /// code units so the cache never aliases caller memory.
    pub fn insert(&mut self, key: CacheKey, value: ShapedPiece) {
        if self.entries.put(key, value).is_some() {
            tracing::debug!("layout cache entry replaced");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

static CACHE: OnceCell<Mutex<LayoutCache>> = OnceCell::new();

/// The process-wide layout cache singleton, guarded by one mutex: any
/// operation that shapes text or reads/writes the cache runs while
/// holding it.
pub fn shared() -> &'static Mutex<LayoutCache> {
    CACHE.get_or_init(|| Mutex::new(LayoutCache::with_capacity(DEFAULT_CAPACITY)))
}

/// Clears the process-wide layout cache. Part of [`crate::purge_caches`].
pub fn purge() {
    shared().lock().clear();
}

/// Resizes the process-wide layout cache, e.g. from [`crate::EngineConfig`].
pub fn resize(capacity: usize) {
    let cap = NonZeroUsize::new(capacity.max(1)).unwrap();
    shared().lock().entries.resize(cap);
}

/// Shapes `text[range]` under `paint`, going through the layout cache
/// unless `bypasses_cache` says the paint's font-feature-settings make
/// caching counterproductive. The whole lookup-shape-insert sequence runs
/// under the cache's mutex, since the shaping backend is assumed
/// non-reentrant.
pub fn shape_with_cache(
    shaper: &dyn ShapingBackend,
    full_text: &str,
    range: Range,
    code_units: &[u16],
    paint: &Paint,
    is_rtl: bool,
    edit: HyphenEdit,
) -> Result<ShapedPiece, ()> {
    if bypasses_cache(paint) {
        return shaper.try_shape(full_text, range, paint, is_rtl, edit);
    }

    let key = CacheKey::new(paint, is_rtl, edit, code_units);
    let mut cache = shared().lock();
    if let Some(hit) = cache.get(&key) {
        return Ok(hit);
    }
    let piece = shaper.try_shape(full_text, range, paint, is_rtl, edit)?;
    cache.insert(key, piece.clone());
    Ok(piece)
}
