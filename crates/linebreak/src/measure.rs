//! The measurement pipeline (C1): drives the bidi analyzer and shaping
//! backend over every run, filling a [`MeasuredText`]'s per-code-unit
//! arrays.

use unicode_script::UnicodeScript;

use crate::bidi::BidiAnalyzer;
use crate::cache;
use crate::classify::is_word_space;
use crate::error::{Error, Result};
use crate::hyphen::HyphenEdit;
use crate::measured::{Extent, MeasuredText, Overhang};
use crate::run::{forbids_letter_spacing, PaintFlags, ReplacementRun, Run, StyleRun};
use crate::shaping::ShapingBackend;
use crate::text::{Range, TextBuffer};

/// Measures every run of `runs` into a freshly allocated [`MeasuredText`].
///
/// `paragraph_rtl` is forwarded to the bidi analyzer unchanged: `Some(_)`
/// forces the whole paragraph to one direction, `None` lets it run the
/// bidi algorithm per style run.
pub fn measure(
    text: &TextBuffer,
    runs: Vec<Run>,
    bidi: &dyn BidiAnalyzer,
    shaper: &dyn ShapingBackend,
    paragraph_rtl: Option<bool>,
) -> Result<MeasuredText> {
    let mut measured = MeasuredText::new(text.len(), runs)?;
    let (full_str, _) = text.slice_to_utf8(0..text.len());
    let runs = measured.runs().to_vec();

    for (run_index, run) in runs.iter().enumerate() {
        match run {
            Run::Style(style) => {
                measure_style_run(text, &full_str, style, run_index, bidi, shaper, paragraph_rtl, &mut measured)?;
            }
            Run::Replacement(replacement) => measure_replacement_run(replacement, &mut measured),
        }
    }

    Ok(measured)
}

fn measure_replacement_run(run: &ReplacementRun, measured: &mut MeasuredText) {
    // The rest of the range is already zero from `MeasuredText::new`.
    measured.set_width(run.range.start, run.width);
}

fn measure_style_run(
    text: &TextBuffer,
    full_str: &str,
    style: &StyleRun,
    run_index: usize,
    bidi: &dyn BidiAnalyzer,
    shaper: &dyn ShapingBackend,
    paragraph_rtl: Option<bool>,
    measured: &mut MeasuredText,
) -> Result<()> {
    let linear_text = style.paint.flags.contains(PaintFlags::LINEAR_TEXT);

    for sub in bidi.split(text, style.range.clone(), paragraph_rtl) {
        let mut extent = Extent::ZERO;

        for slice in word_slices(text, sub.range.clone()) {
            if slice.is_empty() {
                continue;
            }

            let code_units = &text.as_slice()[slice.clone()];
            let piece = cache::shape_with_cache(
                shaper,
                full_str,
                slice.clone(),
                code_units,
                &style.paint,
                sub.is_rtl,
                HyphenEdit::NO_EDIT,
            )
            .map_err(|_| Error::ShapingFailed { run_index })?;

            extent.widen(Extent { ascent: piece.ascent, descent: piece.descent });

            for (j, k) in slice.clone().enumerate() {
                let raw = piece.advances[j] * style.paint.scale_x;
                let mut w = if linear_text { raw } else { raw.round() };

                if w != 0.0 {
                    if let Some(c) = text.char_at(k) {
                        if !forbids_letter_spacing(c.script()) {
                            let (half_left, half_right) =
                                split_letter_spacing(style.paint.letter_spacing, linear_text);
                            w += half_left + half_right;
                        }
                    }
                }

                measured.set_width(k, w);
                let (left, right) = piece.overhangs[j];
                measured.set_overhang(k, Overhang { left, right });
            }

            if slice.len() == 1 {
                if let Some(c) = text.char_at(slice.start) {
                    if is_word_space(c) {
                        let current = measured.width_at(slice.start);
                        measured.set_width(slice.start, current + style.paint.word_spacing);
                    }
                }
            }
        }

        measured.widen_extent(sub.range.clone(), extent);
    }

    Ok(())
}

/// Splits `range` at ASCII-space boundaries: each space becomes its own
/// one-code-unit slice, and the text between spaces becomes a slice. This
/// is `prev_word_break_for_cache`/`next_word_break_for_cache` collapsed
/// into one pass, since both only ever need to agree on the same split
/// points.
fn word_slices(text: &TextBuffer, range: Range) -> Vec<Range> {
    let mut slices = Vec::new();
    let mut word_start = range.start;
    let mut i = range.start;

    while i < range.end {
        let c = text.char_at(i);
        let unit_len = c.map(|c| c.len_utf16()).unwrap_or(1);

        if c.map(is_word_space).unwrap_or(false) {
            if word_start < i {
                slices.push(word_start..i);
            }
            slices.push(i..i + unit_len);
            word_start = i + unit_len;
        }

        i += unit_len;
    }

    if word_start < range.end {
        slices.push(word_start..range.end);
    }

    slices
}

/// Splits a letter-spacing value into its left and right halves. When
/// advances are rounded, the left half is floored so the two halves still
/// sum to exactly `ls` without fractional drift; when left as floats
/// (`linear_text`), they split evenly.
fn split_letter_spacing(ls: f32, linear_text: bool) -> (f32, f32) {
    let half_left = if linear_text { ls / 2.0 } else { (ls / 2.0).floor() };
    let half_right = ls - half_left;
    (half_left, half_right)
}
