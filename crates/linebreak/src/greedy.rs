//! The greedy breaker (C5): streams candidates, keeps the best pending
//! break by penalty, and emits a line whenever the running width
//! overflows. Falls back to desperate breaks when even the shortest
//! pending candidate doesn't fit.

use std::collections::VecDeque;

use linebreak_utils::Advance;

use crate::candidate::{Candidate, Candidates, DESPERATE_PENALTY};
use crate::hyphen::HyphenationClass;
use crate::measured::MeasuredText;
use crate::width_profile::LineWidthProfile;

/// Runs the greedy algorithm over every candidate after the sentinel,
/// returning the ordered list of candidates that end a line (the last
/// entry always covers the end of the paragraph).
pub fn break_greedy(
    candidates: &Candidates,
    measured: &MeasuredText,
    profile: &dyn LineWidthProfile,
) -> Vec<Candidate> {
    let slice = candidates.as_slice();
    let mut emitted: Vec<Candidate> = Vec::new();
    let mut last_greedy = slice[0];
    let mut best_greedy: VecDeque<(Candidate, f64)> = VecDeque::new();

    for &cand in &slice[1..] {
        loop {
            let (left, right) = side_overhangs(&cand, &last_greedy);
            let width = (cand.post_break - last_greedy.pre_break).get() as f32;
            if fits(width, left, right, emitted.len(), profile) {
                break;
            }

            if let Some((best, _)) = best_greedy.pop_front() {
                emitted.push(best);
                last_greedy = best;
                continue;
            }

            desperate_breaks(&mut emitted, &mut last_greedy, measured, profile, cand.offset, cand.is_rtl);
            break;
        }

        let pos = best_greedy.iter().position(|(_, p)| *p >= cand.penalty);
        if let Some(pos) = pos {
            best_greedy.truncate(pos);
        }
        best_greedy.push_back((cand, cand.penalty));
    }

    if let Some(&last) = slice.last() {
        if emitted.last().map(|c| c.offset) != Some(last.offset) {
            emitted.push(last);
        }
    }

    emitted
}

/// Left/right overhang for the fit test between `last_greedy` and `cand`.
fn side_overhangs(cand: &Candidate, last_greedy: &Candidate) -> (f32, f32) {
    if cand.is_rtl {
        (cand.first_overhang, last_greedy.second_overhang)
    } else {
        (last_greedy.second_overhang, cand.first_overhang)
    }
}

fn fits(width: f32, left_overhang: f32, right_overhang: f32, line_no: usize, profile: &dyn LineWidthProfile) -> bool {
    let lo = (left_overhang - profile.left_pad(line_no)).max(0.0);
    let ro = (right_overhang - profile.right_pad(line_no)).max(0.0);
    width + lo + ro <= profile.width(line_no)
}

/// Forces breaks at every grapheme-cluster boundary (`widths[i] > 0`)
/// between `last_greedy.offset` and `up_to` that would otherwise overflow
/// the line, since no pending candidate admits a legal break there.
fn desperate_breaks(
    emitted: &mut Vec<Candidate>,
    last_greedy: &mut Candidate,
    measured: &MeasuredText,
    profile: &dyn LineWidthProfile,
    up_to: usize,
    is_rtl: bool,
) {
    let mut baseline_pre = last_greedy.pre_break;
    let mut acc = linebreak_utils::ParaWidth::ZERO;
    let mut cluster_start = last_greedy.offset;

    for i in last_greedy.offset..up_to {
        let w = measured.width_at(i);
        if w > 0.0 && i > cluster_start {
            let width_if_included = (acc + Advance::new(w)).get() as f32;
            if !fits(width_if_included, 0.0, 0.0, emitted.len(), profile) {
                let synthetic = Candidate {
                    offset: i,
                    pre_break: baseline_pre + acc,
                    post_break: baseline_pre + acc,
                    first_overhang: 0.0,
                    second_overhang: 0.0,
                    penalty: DESPERATE_PENALTY,
                    pre_space_count: last_greedy.post_space_count,
                    post_space_count: last_greedy.post_space_count,
                    hyphen_class: HyphenationClass::BreakAndDontInsertHyphen,
                    is_rtl,
                };
                emitted.push(synthetic);
                *last_greedy = synthetic;
                baseline_pre = synthetic.pre_break;
                acc = linebreak_utils::ParaWidth::ZERO;
                cluster_start = i;
            }
        }
        acc = acc + Advance::new(w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidi::UnicodeBidiAnalyzer;
    use crate::config::HyphenFrequency;
    use crate::hyphen::NoHyphenator;
    use crate::locale;
    use crate::measure;
    use crate::run::{Paint, Run, StyleRun};
    use crate::shaping::FixedWidthShaper;
    use crate::text::TextBuffer;
    use crate::width_profile::{TabStops, UniformWidthProfile};
    use crate::word::IcuWordBreakIterator;
    use crate::wordstream::build_candidates;

    #[test]
    fn wraps_at_word_boundaries_under_width_budget() {
        let text = TextBuffer::from_str("This is an example text.");
        let paint = Paint { locale_list_id: locale::intern(&["en"]), ..Paint::default() };
        let runs = vec![Run::Style(StyleRun { range: 0..text.len(), paint, is_rtl: false })];
        let mut measured =
            measure::measure(&text, runs, &UnicodeBidiAnalyzer, &FixedWidthShaper::default(), None).unwrap();

        let profile = UniformWidthProfile { width: 70.0 };
        let tabs = TabStops::default_only(40.0);
        let mut word_iter = IcuWordBreakIterator::default();
        let stream = build_candidates(
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

        let lines = break_greedy(&stream.candidates, &measured, &profile);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.last().unwrap().offset, text.len());
    }
}
