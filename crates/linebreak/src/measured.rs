//! `MeasuredText`: the per-code-unit arrays produced by the measurement
//! pipeline, plus the run list that produced them.

use crate::error::{Error, Result};
use crate::run::Run;
use crate::text::Range;

/// Vertical extent of a code unit or range. `ascent` is non-positive,
/// `descent` is non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    pub ascent: f32,
    pub descent: f32,
}

impl Extent {
    pub const ZERO: Self = Self { ascent: 0.0, descent: 0.0 };

    /// Widens `self` to also cover `other`: `ascent = min`, `descent = max`.
    pub fn widen(&mut self, other: Extent) {
        self.ascent = self.ascent.min(other.ascent);
        self.descent = self.descent.max(other.descent);
    }
}

/// Horizontal ink extending outside a code unit's advance box, both sides
/// non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overhang {
    pub left: f32,
    pub right: f32,
}

/// Three parallel per-code-unit arrays plus the run list that produced
/// them.
#[derive(Debug, Clone)]
pub struct MeasuredText {
    widths: Vec<f32>,
    extents: Vec<Extent>,
    overhangs: Vec<Overhang>,
    runs: Vec<Run>,
}

impl MeasuredText {
    /// Allocates a zeroed `MeasuredText` of length `len` covering the
    /// given runs after validating that the runs partition the
    /// paragraph exactly, with no gaps or overlaps.
    pub fn new(len: usize, runs: Vec<Run>) -> Result<Self> {
        let mut expected_start = 0;
        for (i, run) in runs.iter().enumerate() {
            let range = run.range();
            if range.start > range.end || range.end > len {
                return Err(Error::InvalidRange { run_index: i, range, len });
            }
            if range.start != expected_start {
                return Err(Error::NonContiguousRuns {
                    run_index: i,
                    expected_start,
                    run_start: range.start,
                });
            }
            expected_start = range.end;
        }
        if expected_start != len {
            return Err(Error::NonContiguousRuns {
                run_index: runs.len(),
                expected_start: len,
                run_start: expected_start,
            });
        }

        Ok(Self {
            widths: vec![0.0; len],
            extents: vec![Extent::ZERO; len],
            overhangs: vec![Overhang::default(); len],
            runs,
        })
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn widths(&self) -> &[f32] {
        &self.widths
    }

    pub fn extents(&self) -> &[Extent] {
        &self.extents
    }

    pub fn overhangs(&self) -> &[Overhang] {
        &self.overhangs
    }

    pub fn width_at(&self, i: usize) -> f32 {
        self.widths[i]
    }

    pub fn set_width(&mut self, i: usize, w: f32) {
        self.widths[i] = w;
    }

    pub fn widen_extent(&mut self, range: Range, extent: Extent) {
        for e in &mut self.extents[range] {
            e.widen(extent);
        }
    }

    pub fn set_overhang(&mut self, i: usize, overhang: Overhang) {
        self.overhangs[i] = overhang;
    }

    /// The sum of widths over `range` (a direct pass), the baseline the
    /// line-width invariant checks packed line widths against.
    pub fn sum_widths(&self, range: Range) -> f64 {
        self.widths[range].iter().map(|&w| w as f64).sum()
    }

    /// Max ascent (most negative, i.e. `min`) over a range.
    pub fn max_ascent(&self, range: Range) -> f32 {
        self.extents[range].iter().map(|e| e.ascent).fold(0.0, f32::min)
    }

    /// Max descent over a range.
    pub fn max_descent(&self, range: Range) -> f32 {
        self.extents[range].iter().map(|e| e.descent).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::{Paint, ReplacementRun, StyleRun};

    #[test]
    fn rejects_gaps_between_runs() {
        let runs = vec![
            Run::Style(StyleRun { range: 0..2, paint: Paint::default(), is_rtl: false }),
            Run::Style(StyleRun { range: 3..5, paint: Paint::default(), is_rtl: false }),
        ];
        let err = MeasuredText::new(5, runs).unwrap_err();
        assert!(matches!(err, Error::NonContiguousRuns { .. }));
    }

    #[test]
    fn rejects_runs_overflowing_len() {
        let runs = vec![Run::Replacement(ReplacementRun {
            range: 0..10,
            width: 5.0,
            locale_list_id: Default::default(),
            is_rtl: false,
        })];
        let err = MeasuredText::new(4, runs).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn accepts_contiguous_cover() {
        let runs = vec![
            Run::Style(StyleRun { range: 0..2, paint: Paint::default(), is_rtl: false }),
            Run::Replacement(ReplacementRun {
                range: 2..4,
                width: 5.0,
                locale_list_id: Default::default(),
                is_rtl: false,
            }),
        ];
        let measured = MeasuredText::new(4, runs).unwrap();
        assert_eq!(measured.len(), 4);
    }

    /// "ab cd" with index 2 the trailing space of the first line: the sum
    /// of per-line widths plus the dropped trailing-space widths must
    /// equal a direct pass over the whole range.
    #[test]
    fn sum_widths_matches_direct_pass_modulo_line_end_space_deletion() {
        let runs = vec![Run::Style(StyleRun { range: 0..5, paint: Paint::default(), is_rtl: false })];
        let mut measured = MeasuredText::new(5, runs).unwrap();
        for (i, &w) in [1.0, 2.0, 3.0, 4.0, 5.0].iter().enumerate() {
            measured.set_width(i, w);
        }
        let is_line_end_space = [false, false, true, false, false];

        let mut start = 0;
        let mut line_widths_total = 0.0f64;
        let mut dropped = 0.0f64;
        for &end in &[3usize, 5usize] {
            let mut line_end = end;
            while line_end > start && is_line_end_space[line_end - 1] {
                dropped += measured.width_at(line_end - 1) as f64;
                line_end -= 1;
            }
            line_widths_total += measured.sum_widths(start..line_end);
            start = end;
        }

        assert_eq!(line_widths_total + dropped, measured.sum_widths(0..5));
    }
}
