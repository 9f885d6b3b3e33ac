//! Hyphenation edits and the hyphenator contract.

use std::sync::Arc;

/// What to do to the code unit(s) at the *end* of a line when a word is
/// hyphenated there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EndHyphenEdit {
    NoEdit = 0,
    InsertHyphen = 1,
    ReplaceWithHyphen = 2,
}

/// What to do to the code unit(s) at the *start* of the following line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StartHyphenEdit {
    NoEdit = 0,
    InsertHyphen = 1,
    ReplaceWithHyphen = 2,
}

/// A packed `(start_edit, end_edit)` pair. End edit occupies the low
/// nibble, start edit the high nibble; `NO_EDIT` is all-zero. This exact
/// layout is load-bearing for any caller storing it in the packed
/// `flags` byte, so the packing order must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HyphenEdit(u8);

impl HyphenEdit {
    pub const NO_EDIT: Self = Self(0);

    pub fn pack(start: StartHyphenEdit, end: EndHyphenEdit) -> Self {
        Self(((start as u8) << 4) | (end as u8))
    }

    pub fn start(self) -> StartHyphenEdit {
        match self.0 >> 4 {
            1 => StartHyphenEdit::InsertHyphen,
            2 => StartHyphenEdit::ReplaceWithHyphen,
            _ => StartHyphenEdit::NoEdit,
        }
    }

    pub fn end(self) -> EndHyphenEdit {
        match self.0 & 0x0F {
            1 => EndHyphenEdit::InsertHyphen,
            2 => EndHyphenEdit::ReplaceWithHyphen,
            _ => EndHyphenEdit::NoEdit,
        }
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn from_byte(byte: u8) -> Self {
        Self(byte)
    }
}

/// The hyphenator's per-position classification of an interior break
/// inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyphenationClass {
    /// Not a legal hyphenation point.
    DontBreak,
    /// Break and insert a visible hyphen (the common case, e.g. English
    /// "hy-phen-ation").
    BreakAndInsertHyphen,
    /// Break without inserting anything (used for desperate breaks and a
    /// few scripts that never show a hyphen glyph).
    BreakAndDontInsertHyphen,
    /// Break and replace the existing code unit with a hyphen glyph (used
    /// where the word already contains a soft hyphen or similar marker).
    BreakAndReplaceWithHyphen,
    /// Break right after a hyphen-minus that is already part of the word
    /// (e.g. Polish `"czerwono-niebieska"`). The existing hyphen already
    /// satisfies the end-of-line edit; typographic convention repeats it
    /// at the start of the next line.
    BreakAndInsertHyphenAtNextLine,
}

impl HyphenationClass {
    /// The edit to apply at the end of the line that ends here.
    pub fn edit_for_this_line(self) -> EndHyphenEdit {
        match self {
            HyphenationClass::DontBreak => EndHyphenEdit::NoEdit,
            HyphenationClass::BreakAndInsertHyphen => EndHyphenEdit::InsertHyphen,
            HyphenationClass::BreakAndDontInsertHyphen => EndHyphenEdit::NoEdit,
            HyphenationClass::BreakAndReplaceWithHyphen => EndHyphenEdit::ReplaceWithHyphen,
            // The hyphen is already present in the source text; no edit
            // needed at the end of this line.
            HyphenationClass::BreakAndInsertHyphenAtNextLine => EndHyphenEdit::NoEdit,
        }
    }

    /// The edit to apply at the start of the line that begins here.
    pub fn edit_for_next_line(self) -> StartHyphenEdit {
        match self {
            HyphenationClass::DontBreak => StartHyphenEdit::NoEdit,
            // By convention (matching common hyphenation renderers) the
            // hyphen glyph is only drawn once, at the end of the line it
            // breaks. The next line starts clean unless the class calls
            // for a start-side replacement explicitly.
            HyphenationClass::BreakAndInsertHyphen => StartHyphenEdit::NoEdit,
            HyphenationClass::BreakAndDontInsertHyphen => StartHyphenEdit::NoEdit,
            HyphenationClass::BreakAndReplaceWithHyphen => StartHyphenEdit::ReplaceWithHyphen,
            HyphenationClass::BreakAndInsertHyphenAtNextLine => StartHyphenEdit::InsertHyphen,
        }
    }
}

/// The hyphenator contract: for a word slice, fill a classification for
/// each interior code-unit position.
///
/// Implementations must set the classification to `DontBreak` for the
/// first `min_prefix` and last `min_suffix` positions, per locale
/// pattern configuration.
pub trait Hyphenator: Send + Sync {
    /// Returns `None` if the locale has no loaded pattern — the caller
    /// then silently disables hyphenation for the run.
    fn hyphenate(&self, word: &str, locale: &str) -> Option<Vec<HyphenationClass>>;
}

/// A hyphenator backed by the `hypher` syllable-based hyphenation crate.
///
/// `hypher` only hyphenates at syllable boundaries and doesn't expose a
/// per-locale `min_prefix`/`min_suffix` configuration, so this
/// implementation applies the commonly used defaults of 2/2 code points
/// uniformly.
pub struct HypherHyphenator {
    pub min_prefix: usize,
    pub min_suffix: usize,
}

impl Default for HypherHyphenator {
    fn default() -> Self {
        Self { min_prefix: 2, min_suffix: 2 }
    }
}

impl Hyphenator for HypherHyphenator {
    fn hyphenate(&self, word: &str, locale: &str) -> Option<Vec<HyphenationClass>> {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        let mut classes = vec![HyphenationClass::DontBreak; n.saturating_sub(1)];

        // A hyphen-minus already present in the word (e.g. Polish
        // compounds) is a legal break point on its own, independent of
        // whether a syllable pattern is loaded for `locale`.
        let mut has_existing_hyphen = false;
        for (i, &c) in chars.iter().enumerate() {
            if c == '-' && i + 1 < n {
                has_existing_hyphen = true;
                let offset = i + 1;
                if offset >= self.min_prefix && n - offset >= self.min_suffix {
                    classes[i] = HyphenationClass::BreakAndInsertHyphenAtNextLine;
                }
            }
        }
        if has_existing_hyphen {
            // hypher's syllable patterns assume a plain letter sequence;
            // the embedded hyphen already supplies a break, so syllable
            // analysis is skipped for this word.
            return Some(classes);
        }

        let bytes: [u8; 2] = locale.get(0..2)?.as_bytes().try_into().ok()?;
        let lang = hypher::Lang::from_iso(bytes)?;

        let mut offset = 0usize;
        for syllable in hypher::hyphenate(word, lang) {
            offset += syllable.chars().count();
            if offset == 0 || offset >= n {
                continue;
            }
            let pos = offset - 1; // classes[pos] = break after char index `offset - 1`
            if offset >= self.min_prefix && n - offset >= self.min_suffix {
                classes[pos] = HyphenationClass::BreakAndInsertHyphen;
            }
        }
        Some(classes)
    }
}

/// A hyphenator that never finds a break (used where hyphenation is
/// disabled entirely, i.e. `frequency == None`).
pub struct NoHyphenator;

impl Hyphenator for NoHyphenator {
    fn hyphenate(&self, _word: &str, _locale: &str) -> Option<Vec<HyphenationClass>> {
        None
    }
}

pub type SharedHyphenator = Arc<dyn Hyphenator>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_unpacks_hyphen_edit() {
        let edit = HyphenEdit::pack(StartHyphenEdit::InsertHyphen, EndHyphenEdit::ReplaceWithHyphen);
        assert_eq!(edit.start(), StartHyphenEdit::InsertHyphen);
        assert_eq!(edit.end(), EndHyphenEdit::ReplaceWithHyphen);
        assert_eq!(HyphenEdit::NO_EDIT.as_byte(), 0);
    }

    #[test]
    fn hyphenates_english_word() {
        let hyph = HypherHyphenator::default();
        let classes = hyph.hyphenate("hyphenation", "en").expect("en is supported");
        assert!(classes.iter().any(|c| *c == HyphenationClass::BreakAndInsertHyphen));
    }

    #[test]
    fn existing_hyphen_breaks_with_start_edit_insert() {
        let hyph = HypherHyphenator::default();
        let classes = hyph
            .hyphenate("czerwono-niebieska", "pl")
            .expect("an embedded hyphen classifies regardless of locale pattern support");
        let hyphen_pos = "czerwono-niebieska".chars().position(|c| c == '-').unwrap();
        assert_eq!(classes[hyphen_pos], HyphenationClass::BreakAndInsertHyphenAtNextLine);
        assert_eq!(classes[hyphen_pos].edit_for_this_line(), EndHyphenEdit::NoEdit);
        assert_eq!(classes[hyphen_pos].edit_for_next_line(), StartHyphenEdit::InsertHyphen);
    }
}
