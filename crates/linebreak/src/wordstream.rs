//! The word / hyphen candidate stream (C3): walks the already-measured
//! paragraph word by word, asking the hyphenator for interior break
//! classes and pushing a [`Candidate`] for every legal break point.

use linebreak_utils::{Advance, ParaWidth};

use crate::cache;
use crate::candidate::{Candidate, Candidates};
use crate::classify::{is_line_end_space, is_tab, is_word_space};
use crate::config::HyphenFrequency;
use crate::error::Result;
use crate::hyphen::{EndHyphenEdit, HyphenEdit, Hyphenator, StartHyphenEdit};
use crate::locale;
use crate::measured::MeasuredText;
use crate::run::{Paint, Run};
use crate::shaping::ShapingBackend;
use crate::text::TextBuffer;
use crate::width_profile::{LineWidthProfile, TabStops};
use crate::word::WordBreakIterator;

/// Everything the breakers need that only the candidate stream can
/// compute: the candidates themselves, plus paragraph-wide facts the
/// streaming pass discovers along the way.
pub struct WordStreamOutput {
    pub candidates: Candidates,
    /// A U+0009 was seen anywhere in the paragraph: forces the greedy
    /// breaker regardless of the caller's requested strategy.
    pub strategy_forced_greedy: bool,
    /// Code-unit offset of every tab in the paragraph, in order. The
    /// output packer (C7) consumes these left to right, attributing each
    /// to whichever line it falls in.
    pub tab_offsets: Vec<usize>,
    /// `max(hyphen_penalty * 2)` over all runs, applied once per line by
    /// the optimal breaker, unless the paragraph is justified.
    pub line_penalty: f64,
}

#[allow(clippy::too_many_arguments)]
pub fn build_candidates(
    text: &TextBuffer,
    measured: &mut MeasuredText,
    word_iter: &mut dyn WordBreakIterator,
    hyphenator: &dyn Hyphenator,
    shaper: &dyn ShapingBackend,
    frequency: HyphenFrequency,
    justified: bool,
    max_hyphenated_word_len: usize,
    tab_stops: &TabStops,
    line_width_profile: &dyn LineWidthProfile,
) -> Result<WordStreamOutput> {
    let mut candidates = Candidates::new();
    let mut strategy_forced_greedy = false;
    let mut tab_offsets = Vec::new();
    let mut line_penalty = 0.0f64;

    let mut space_count = 0u32;
    let mut width = ParaWidth::ZERO;
    let mut post_break_var = ParaWidth::ZERO;
    let mut post_space_count = 0u32;

    let (full_str, _) = text.slice_to_utf8(0..text.len());
    word_iter.set_text(text);

    let runs = measured.runs().to_vec();
    for run in &runs {
        let range = run.range();
        if range.is_empty() {
            continue;
        }

        let locale = locale::first_locale(run.locale_list_id());
        word_iter.following_with_locale(locale.as_deref(), range.start);

        let hyphen_penalty =
            hyphen_penalty_for_run(run, frequency, justified, line_width_profile);
        if !justified {
            line_penalty = line_penalty.max(hyphen_penalty * 2.0);
        }
        let run_hyphenatable =
            run.can_hyphenate() && frequency != HyphenFrequency::None;

        let mut word_start = range.start;
        let mut i = range.start;
        while i < range.end {
            let c = text.char_at(i).unwrap_or('\u{FFFD}');
            let unit_len = c.len_utf16().max(1);

            if is_tab(c) {
                strategy_forced_greedy = true;
                tab_offsets.push(i);
                let last_pre_break = candidates
                    .as_slice()
                    .last()
                    .map(|c| c.pre_break)
                    .unwrap_or(ParaWidth::ZERO);
                let target = tab_stops.next_tab(width.get() as f32);
                let tab_width = (target as f64 - last_pre_break.get()).max(0.0) as f32;
                measured.set_width(i, tab_width);
                width = width + Advance::new(tab_width);
                i += unit_len;
                continue;
            }

            let w = measured.width_at(i);
            width = width + Advance::new(w);

            if is_word_space(c) {
                space_count += 1;
            }

            if !is_line_end_space(c) {
                post_break_var = width;
                post_space_count = space_count;
            }

            let word_end = i + unit_len;
            if word_end as i32 == word_iter.current() {
                if run_hyphenatable && word_end - word_start <= max_hyphenated_word_len {
                    push_hyphen_candidates(
                        text,
                        &full_str,
                        shaper,
                        hyphenator,
                        &mut candidates,
                        run,
                        word_start,
                        word_end,
                        hyphen_penalty,
                        space_count,
                        locale.as_deref(),
                    )?;
                }

                let at_run_end = word_end == range.end;
                let push_natural = run_hyphenatable
                    || (word_end < measured.len() && measured.width_at(word_end) > 0.0)
                    || at_run_end;

                if push_natural {
                    candidates.push(Candidate {
                        offset: word_end,
                        pre_break: post_break_var,
                        post_break: post_break_var,
                        first_overhang: 0.0,
                        second_overhang: 0.0,
                        penalty: hyphen_penalty * word_iter.break_badness() as f64,
                        pre_space_count: post_space_count,
                        post_space_count,
                        hyphen_class: crate::hyphen::HyphenationClass::DontBreak,
                        is_rtl: run.is_rtl(),
                    });

                    // The glyph starting the next word may carry ink that
                    // intrudes backward into the whitespace just
                    // produced; retroactively widen earlier candidates'
                    // second_overhang so the greedy fit test sees it.
                    let idx = candidates.last_index();
                    let left_overhang = measured.overhangs().get(word_end).map(|o| o.left).unwrap_or(0.0);
                    if left_overhang > 0.0 {
                        candidates.get_mut(idx).second_overhang = left_overhang;
                        adjust_second_overhang_backward(&mut candidates, idx);
                    }
                }

                word_start = word_end;
                word_iter.next();
            }

            i += unit_len;
        }
    }

    Ok(WordStreamOutput { candidates, strategy_forced_greedy, tab_offsets, line_penalty })
}

#[allow(clippy::too_many_arguments)]
fn push_hyphen_candidates(
    text: &TextBuffer,
    full_str: &str,
    shaper: &dyn ShapingBackend,
    hyphenator: &dyn Hyphenator,
    candidates: &mut Candidates,
    run: &Run,
    word_start: usize,
    word_end: usize,
    hyphen_penalty: f64,
    space_count: u32,
    locale: Option<&str>,
) -> Result<()> {
    let Some(locale) = locale else { return Ok(()) };
    let Some(paint) = run.paint() else { return Ok(()) };

    let (word, _) = text.slice_to_utf8(word_start..word_end);
    let Some(classes) = hyphenator.hyphenate(&word, locale) else { return Ok(()) };

    // Code-unit offset of the start of each char in the word, so the
    // hyphenator's char-indexed classes can be translated back to the
    // buffer's code-unit space.
    let mut char_offsets = Vec::with_capacity(word.chars().count() + 1);
    let mut offset = word_start;
    for ch in word.chars() {
        char_offsets.push(offset);
        offset += ch.len_utf16();
    }
    char_offsets.push(word_end);

    for (k, class) in classes.iter().enumerate() {
        if *class == crate::hyphen::HyphenationClass::DontBreak {
            continue;
        }
        let interior = char_offsets[k + 1];

        let first_edit = HyphenEdit::pack(StartHyphenEdit::NoEdit, class.edit_for_this_line());
        let second_edit = HyphenEdit::pack(class.edit_for_next_line(), EndHyphenEdit::NoEdit);

        let first_piece = piece_width(text, full_str, shaper, paint, run.is_rtl(), word_start..interior, first_edit);
        let second_piece = piece_width(text, full_str, shaper, paint, run.is_rtl(), interior..word_end, second_edit);

        let last_break_width = candidates
            .as_slice()
            .last()
            .map(|c| c.pre_break)
            .unwrap_or(ParaWidth::ZERO);
        let post_break = last_break_width + Advance::new(first_piece);
        let pre_break = post_break - Advance::new(second_piece);

        candidates.push(Candidate {
            offset: interior,
            pre_break,
            post_break,
            first_overhang: 0.0,
            second_overhang: 0.0,
            penalty: hyphen_penalty,
            pre_space_count: space_count,
            post_space_count: space_count,
            hyphen_class: *class,
            is_rtl: run.is_rtl(),
        });
    }

    Ok(())
}

fn piece_width(
    text: &TextBuffer,
    full_str: &str,
    shaper: &dyn ShapingBackend,
    paint: &Paint,
    is_rtl: bool,
    range: std::ops::Range<usize>,
    edit: HyphenEdit,
) -> f32 {
    let code_units = &text.as_slice()[range.clone()];
    cache::shape_with_cache(shaper, full_str, range, code_units, paint, is_rtl, edit)
        .map(|piece| piece.advances.iter().sum())
        .unwrap_or(0.0)
}

/// Walks backward from `idx`, widening each earlier candidate's
/// `second_overhang` as long as the newly-discovered overhang still
/// reaches that far back.
fn adjust_second_overhang_backward(candidates: &mut Candidates, idx: usize) {
    let second_overhang = candidates[idx].second_overhang;
    let last_pre_break = candidates[idx].pre_break;
    let mut j = idx;
    while j > 0 {
        j -= 1;
        let remaining = second_overhang as f64 - (last_pre_break.get() - candidates[j].pre_break.get());
        if remaining <= 0.0 {
            break;
        }
        let prev = candidates.get_mut(j);
        prev.second_overhang = prev.second_overhang.max(remaining as f32);
    }
}

/// `0.5 * size * scaleX * width(0)`, scaled by frequency and justification.
fn hyphen_penalty_for_run(
    run: &Run,
    frequency: HyphenFrequency,
    justified: bool,
    line_width_profile: &dyn LineWidthProfile,
) -> f64 {
    let default_paint = Paint::default();
    let paint = run.paint().unwrap_or(&default_paint);
    let base = 0.5 * paint.size as f64 * paint.scale_x as f64 * line_width_profile.width(0) as f64;
    let mut penalty = base * frequency.multiplier();
    if justified {
        penalty *= 0.25;
    }
    penalty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyphen::{HypherHyphenator, NoHyphenator};
    use crate::measure;
    use crate::run::{Paint as RunPaint, StyleRun};
    use crate::shaping::FixedWidthShaper;
    use crate::width_profile::UniformWidthProfile;
    use crate::word::IcuWordBreakIterator;

    fn style_paint(locale: &str) -> RunPaint {
        RunPaint { locale_list_id: locale::intern(&[locale]), ..Paint::default() }
    }

    #[test]
    fn natural_candidates_cover_every_word() {
        let text = TextBuffer::from_str("This is text");
        let runs = vec![Run::Style(StyleRun {
            range: 0..text.len(),
            paint: style_paint("en"),
            is_rtl: false,
        })];
        let mut measured =
            measure::measure(&text, runs, &crate::bidi::UnicodeBidiAnalyzer, &FixedWidthShaper::default(), None)
                .unwrap();

        let profile = UniformWidthProfile { width: 1000.0 };
        let tabs = TabStops::default_only(40.0);
        let mut word_iter = IcuWordBreakIterator::default();
        let out = build_candidates(
            &text,
            &mut measured,
            &mut word_iter,
            &NoHyphenator,
            &FixedWidthShaper::default(),
            HyphenFrequency::None,
            false,
            45,
            &tabs,
            &profile,
        )
        .unwrap();

        // sentinel + one natural candidate per word.
        assert_eq!(out.candidates.len(), 4);
        assert!(!out.strategy_forced_greedy);
    }

    #[test]
    fn hyphenation_inserts_interior_candidates() {
        let text = TextBuffer::from_str("hyphenation");
        let runs = vec![Run::Style(StyleRun {
            range: 0..text.len(),
            paint: style_paint("en"),
            is_rtl: false,
        })];
        let mut measured =
            measure::measure(&text, runs, &crate::bidi::UnicodeBidiAnalyzer, &FixedWidthShaper::default(), None)
                .unwrap();

        let profile = UniformWidthProfile { width: 1000.0 };
        let tabs = TabStops::default_only(40.0);
        let mut word_iter = IcuWordBreakIterator::default();
        let hyphenator = HypherHyphenator::default();
        let out = build_candidates(
            &text,
            &mut measured,
            &mut word_iter,
            &hyphenator,
            &FixedWidthShaper::default(),
            HyphenFrequency::Normal,
            false,
            45,
            &tabs,
            &profile,
        )
        .unwrap();

        // sentinel, >=1 interior hyphen candidate, plus the final word-end.
        assert!(out.candidates.len() > 2);
    }
}
