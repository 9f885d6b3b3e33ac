//! Runs: the polymorphic per-span style/replacement model.

use smallvec::SmallVec;

use crate::locale::LocaleListId;
use crate::text::Range;

bitflags::bitflags! {
    /// Miscellaneous paint flags that affect shaping/measurement but not
    /// the geometry fields below (e.g. underline, strikethrough — those
    /// are rendering concerns this crate does not otherwise model).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PaintFlags: u32 {
        /// Advances are left exactly as shaped rather than rounded.
        const LINEAR_TEXT = 1 << 0;
        /// The paragraph is justified (affects the hyphen penalty).
        const JUSTIFIED = 1 << 1;
    }
}

/// A single OpenType feature setting, e.g. `('liga', 1)`.
pub type FontFeature = (u32, u32);

/// Size, shaping, and spacing parameters for a [`StyleRun`].
#[derive(Debug, Clone)]
pub struct Paint {
    pub size: f32,
    pub scale_x: f32,
    pub skew_x: f32,
    pub letter_spacing: f32,
    pub word_spacing: f32,
    pub flags: PaintFlags,
    pub font_feature_settings: SmallVec<[FontFeature; 4]>,
    pub font_collection_id: u64,
    pub locale_list_id: LocaleListId,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            size: 16.0,
            scale_x: 1.0,
            skew_x: 0.0,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            flags: PaintFlags::empty(),
            font_feature_settings: SmallVec::new(),
            font_collection_id: 0,
            locale_list_id: LocaleListId::EMPTY,
        }
    }
}

/// Scripts for which letter-spacing must not be applied. A fixed
/// deny-list, matched by [`unicode_script::Script`].
pub fn forbids_letter_spacing(script: unicode_script::Script) -> bool {
    use unicode_script::Script::*;
    matches!(
        script,
        Arabic | Syriac | Mongolian | Devanagari | Bengali | Gurmukhi | Gujarati
            | Oriya | Tamil | Telugu | Kannada | Malayalam | Sinhala | Thaana
            | Nko | Tifinagh
    )
}

/// A style-backed run of hyphenatable text, carrying a [`Paint`].
#[derive(Debug, Clone)]
pub struct StyleRun {
    pub range: Range,
    pub paint: Paint,
    pub is_rtl: bool,
}

/// A fixed-advance replacement (e.g. an inline image), non-hyphenatable.
#[derive(Debug, Clone)]
pub struct ReplacementRun {
    pub range: Range,
    pub width: f32,
    pub locale_list_id: LocaleListId,
    pub is_rtl: bool,
}

/// A paragraph run: either a [`StyleRun`] or a [`ReplacementRun`]. A sum
/// type stands in for what a class hierarchy would otherwise model.
#[derive(Debug, Clone)]
pub enum Run {
    Style(StyleRun),
    Replacement(ReplacementRun),
}

impl Run {
    pub fn range(&self) -> Range {
        match self {
            Run::Style(r) => r.range.clone(),
            Run::Replacement(r) => r.range.clone(),
        }
    }

    pub fn is_rtl(&self) -> bool {
        match self {
            Run::Style(r) => r.is_rtl,
            Run::Replacement(r) => r.is_rtl,
        }
    }

    /// Whether interior hyphenation may be attempted in this run.
    pub fn can_hyphenate(&self) -> bool {
        matches!(self, Run::Style(_))
    }

    pub fn locale_list_id(&self) -> LocaleListId {
        match self {
            Run::Style(r) => r.paint.locale_list_id,
            Run::Replacement(r) => r.locale_list_id,
        }
    }

    pub fn paint(&self) -> Option<&Paint> {
        match self {
            Run::Style(r) => Some(&r.paint),
            Run::Replacement(_) => None,
        }
    }
}
