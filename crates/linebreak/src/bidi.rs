//! Bidi sub-run splitting.

use unicode_bidi::{BidiInfo, Level};

use crate::text::{Range, TextBuffer};

/// One visual-order sub-run produced by bidi analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidiSubRun {
    pub range: Range,
    pub is_rtl: bool,
}

/// The bidi contract: splits a range into a sequence of
/// `{run_start, run_length, is_rtl}` tuples covering it in visual order.
pub trait BidiAnalyzer {
    /// Splits `range` into visual-order sub-runs. `paragraph_rtl`, when
    /// `Some`, forces the whole range to be treated as a single
    /// direction: if the paragraph-level flag forces a direction, the
    /// whole run is a single sub-run.
    fn split(
        &self,
        text: &TextBuffer,
        range: Range,
        paragraph_rtl: Option<bool>,
    ) -> Vec<BidiSubRun>;
}

/// Default [`BidiAnalyzer`] backed by `unicode-bidi`.
pub struct UnicodeBidiAnalyzer;

impl BidiAnalyzer for UnicodeBidiAnalyzer {
    fn split(
        &self,
        text: &TextBuffer,
        range: Range,
        paragraph_rtl: Option<bool>,
    ) -> Vec<BidiSubRun> {
        if range.is_empty() {
            return Vec::new();
        }

        if let Some(is_rtl) = paragraph_rtl {
            return vec![BidiSubRun { range, is_rtl }];
        }

        let (s, map) = text.slice_to_utf8(range.clone());
        if s.is_empty() {
            return vec![BidiSubRun { range, is_rtl: false }];
        }

        let info = BidiInfo::new(&s, None);
        if info.paragraphs.is_empty() {
            // No paragraphs at all: recover with a single LTR run rather
            // than aborting.
            tracing::warn!("bidi analysis returned no paragraphs; falling back to single LTR run");
            return vec![BidiSubRun { range, is_rtl: false }];
        }

        let para = &info.paragraphs[0];
        let (levels, level_runs) = info.visual_runs(para, para.range.clone());
        if level_runs.is_empty() {
            tracing::warn!("bidi analysis produced zero visual runs; falling back to single run");
            return vec![BidiSubRun { range, is_rtl: false }];
        }

        level_runs
            .into_iter()
            .map(|r| {
                let start = map.to_code_unit(r.start);
                let end = map.to_code_unit(r.end);
                let is_rtl = levels.get(r.start).copied().unwrap_or(Level::ltr()).is_rtl();
                BidiSubRun { range: start..end, is_rtl }
            })
            .filter(|r| !r.range.is_empty())
            .collect()
    }
}
