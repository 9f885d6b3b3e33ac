//! Locale-list interning.
//!
//! The hyphenator map and locale-list cache are read-mostly after
//! warm-up; lookups acquire the same mutex discipline as the layout
//! cache. This module is a small interner: callers register a locale
//! list once (e.g. `"en-US,en"`) and get back a cheap [`LocaleListId`]
//! to carry around on [`Paint`](crate::run::Paint) instead of a
//! `String`.

use ecow::EcoString;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// An interned locale list, e.g. `["en-US", "en"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocaleListId(u32);

impl Default for LocaleListId {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl LocaleListId {
    /// The empty locale list (no hyphenation locale available).
    pub const EMPTY: Self = Self(0);

    /// The raw intern id, exposed so the layout cache key (which must hash
    /// and compare paint parameters including the locale list) doesn't
    /// need its own parallel interner.
    pub fn raw(self) -> u32 {
        self.0
    }
}

struct Interner {
    lists: Vec<Vec<EcoString>>,
    index: FxHashMap<Vec<EcoString>, u32>,
}

impl Interner {
    fn new() -> Self {
        Self { lists: vec![Vec::new()], index: FxHashMap::default() }
    }
}

static INTERNER: Mutex<Option<Interner>> = Mutex::new(None);

fn with_interner<R>(f: impl FnOnce(&mut Interner) -> R) -> R {
    let mut guard = INTERNER.lock();
    let interner = guard.get_or_insert_with(Interner::new);
    f(interner)
}

/// Interns a locale list (comma-separated BCP-47 tags, most-preferred
/// first) and returns its id.
pub fn intern(locales: &[&str]) -> LocaleListId {
    if locales.is_empty() {
        return LocaleListId::EMPTY;
    }
    with_interner(|interner| {
        let key: Vec<EcoString> = locales.iter().map(|s| EcoString::from(*s)).collect();
        if let Some(&id) = interner.index.get(&key) {
            return LocaleListId(id);
        }
        let id = interner.lists.len() as u32;
        interner.lists.push(key.clone());
        interner.index.insert(key, id);
        LocaleListId(id)
    })
}

/// The first locale of the list, used for hyphenation/word-break selection.
///
/// Script-aware fallback across the rest of the list is not implemented;
/// this is a deliberate scope cut, recorded in `DESIGN.md`.
pub fn first_locale(id: LocaleListId) -> Option<String> {
    with_interner(|interner| {
        interner.lists.get(id.0 as usize)?.first().map(|s| s.to_string())
    })
}

/// Clears the interner. Part of [`crate::purge_caches`].
pub fn purge() {
    *INTERNER.lock() = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_and_dedupes() {
        purge();
        let a = intern(&["en-US", "en"]);
        let b = intern(&["en-US", "en"]);
        let c = intern(&["pl"]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(first_locale(a).as_deref(), Some("en-US"));
        assert_eq!(first_locale(c).as_deref(), Some("pl"));
    }
}
