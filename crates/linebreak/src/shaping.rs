//! The shaping backend contract — the one external collaborator this
//! crate deliberately keeps out of scope: font-family matching, font
//! fallback, and real glyph shaping are either mechanical or delegated
//! to established libraries. This crate never shapes glyphs itself; it
//! calls out to whatever the caller supplies here.

use crate::hyphen::HyphenEdit;
use crate::run::Paint;
use crate::text::Range;

/// One shaped piece of text, as returned by a [`ShapingBackend`].
#[derive(Debug, Clone)]
pub struct ShapedPiece {
    /// Per-code-unit advances, one entry per code unit in the requested
    /// range. When several code units form one glyph cluster, the
    /// backend concentrates the cluster's full advance on its first
    /// code unit and reports `0.0` for the rest, the same convention a
    /// `ReplacementRun` uses for its own single fixed advance.
    pub advances: Vec<f32>,
    /// Uniform vertical extent for the whole piece.
    pub ascent: f32,
    pub descent: f32,
    /// Per-code-unit left/right overhang, parallel to `advances`.
    pub overhangs: Vec<(f32, f32)>,
}

impl ShapedPiece {
    pub fn empty(len: usize) -> Self {
        Self {
            advances: vec![0.0; len],
            ascent: 0.0,
            descent: 0.0,
            overhangs: vec![(0.0, 0.0); len],
        }
    }
}

/// The external shaping backend: given a style, a direction, and a slice
/// of text (optionally with a hyphen edit applied at one end), produce
/// shaped metrics.
///
/// Shaping is expected to always succeed; a shaper failure is fatal for
/// the paragraph. Implementations should prefer panicking or returning
/// degenerate-but-valid metrics over signaling partial failure; the one
/// case this crate surfaces as [`crate::Error::ShapingFailed`] is a
/// backend that opts into fallibility via [`ShapingBackend::try_shape`].
pub trait ShapingBackend: Send + Sync {
    /// Shapes `text[range]` under `paint`, in direction `is_rtl`, with
    /// `edit` applied at the line boundary (`HyphenEdit::NO_EDIT` for an
    /// ordinary, non-hyphenated slice).
    fn shape(
        &self,
        text: &str,
        range: Range,
        paint: &Paint,
        is_rtl: bool,
        edit: HyphenEdit,
    ) -> ShapedPiece;

    /// Fallible variant used when a backend can genuinely fail (e.g. an
    /// IPC-backed shaper). The default forwards to [`Self::shape`],
    /// which always succeeds.
    fn try_shape(
        &self,
        text: &str,
        range: Range,
        paint: &Paint,
        is_rtl: bool,
        edit: HyphenEdit,
    ) -> Result<ShapedPiece, ()> {
        Ok(self.shape(text, range, paint, is_rtl, edit))
    }
}

/// A deterministic fixed-width shaper for tests: every code unit gets a
/// fixed advance (`char_width`), ascent/descent are fixed, and no
/// overhang is ever produced. Stands in for a real font backend so
/// line-breaking behavior can be asserted without shipping a font file.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthShaper {
    pub char_width: f32,
    pub ascent: f32,
    pub descent: f32,
    pub hyphen_width: f32,
}

impl Default for FixedWidthShaper {
    fn default() -> Self {
        Self { char_width: 10.0, ascent: -8.0, descent: 2.0, hyphen_width: 10.0 }
    }
}

impl ShapingBackend for FixedWidthShaper {
    fn shape(
        &self,
        _text: &str,
        range: Range,
        _paint: &Paint,
        _is_rtl: bool,
        edit: HyphenEdit,
    ) -> ShapedPiece {
        // This fixture is only ever driven with ASCII test fixtures, where
        // one code unit is always one character, so `range.len()` is the
        // code-unit count we need.
        let len = range.len();
        let mut advances = vec![self.char_width; len];
        let overhangs = vec![(0.0, 0.0); len];

        if edit.end() != crate::hyphen::EndHyphenEdit::NoEdit {
            if let Some(last) = advances.last_mut() {
                *last += self.hyphen_width;
            }
        }
        if edit.start() != crate::hyphen::StartHyphenEdit::NoEdit {
            if let Some(first) = advances.first_mut() {
                *first += self.hyphen_width;
            }
        }

        ShapedPiece { advances, ascent: self.ascent, descent: self.descent, overhangs }
    }
}
