//! The optimal (dynamic-programming) breaker (C6): scores every reachable
//! chain of candidates under a quadratic shrink/overfull penalty and
//! follows `prev`-links back to the lowest-scoring chain.

use linebreak_utils::{Advance, ParaWidth};

use crate::candidate::{Candidate, Candidates};
use crate::classify::is_word_space;
use crate::hyphen::HyphenationClass;
use crate::measured::MeasuredText;
use crate::text::TextBuffer;
use crate::width_profile::LineWidthProfile;

const SCORE_OVERFULL: f64 = 1e12;
const SCORE_DESPERATE: f64 = 1e10;

#[derive(Clone, Copy)]
struct BreakData {
    score: f64,
    prev: usize,
    line_number: usize,
}

/// Runs the optimal breaker, returning the ordered list of candidates
/// that end a line, same shape as [`crate::greedy::break_greedy`]'s
/// result so the output packer can treat both uniformly.
pub fn break_optimal(
    candidates: &Candidates,
    text: &TextBuffer,
    measured: &MeasuredText,
    profile: &dyn LineWidthProfile,
    justified: bool,
    balanced: bool,
    line_penalty: f64,
) -> Vec<Candidate> {
    let expanded = expand_desperate(candidates, measured, profile);
    let n = expanded.len();
    if n <= 1 {
        return expanded;
    }

    let space_width = first_space_width(text, measured) as f64;
    let max_shrink = if justified { space_width / 3.0 } else { 0.0 };

    let mut breaks_data = vec![BreakData { score: 0.0, prev: 0, line_number: 0 }; n];
    let mut active = 0usize;

    for i in 1..n {
        let mut best = f64::MAX;
        let mut best_prev = 0usize;
        let mut line_no_last = breaks_data[active].line_number;
        let mut w = profile.width(line_no_last) as f64;
        let mut left_edge = expanded[i].post_break.get() - w;
        let mut best_hope = 0.0f64;
        let at_end = i == n - 1;

        let mut j = active;
        while j < i {
            let line_no = breaks_data[j].line_number;
            if line_no != line_no_last {
                let w2 = profile.width(line_no) as f64;
                if w2 != w {
                    left_edge = expanded[i].post_break.get() - w2;
                    best_hope = 0.0;
                    w = w2;
                }
                line_no_last = line_no;
            }

            if breaks_data[j].score + best_hope >= best {
                j += 1;
                continue;
            }

            let delta = expanded[j].pre_break.get() - left_edge;
            let mut width_score;
            let mut additional_penalty = 0.0;

            if (at_end || !justified) && delta < 0.0 {
                width_score = SCORE_OVERFULL;
            } else if at_end && !balanced {
                width_score = 0.0;
                additional_penalty = 4.0 * expanded[j].penalty;
            } else {
                width_score = delta * delta;
                if delta < 0.0 {
                    let shrink_budget = max_shrink
                        * (expanded[i].post_space_count as f64 - expanded[j].pre_space_count as f64);
                    if -delta < shrink_budget {
                        width_score *= 4.0;
                    } else {
                        width_score = SCORE_OVERFULL;
                    }
                }
            }

            if delta < 0.0 {
                active = j + 1;
            } else {
                best_hope = width_score;
            }

            let score = breaks_data[j].score + width_score + additional_penalty;
            if score <= best {
                best = score;
                best_prev = j;
            }
            j += 1;
        }

        breaks_data[i] = BreakData {
            score: best + expanded[i].penalty + line_penalty,
            prev: best_prev,
            line_number: breaks_data[best_prev].line_number + 1,
        };
    }

    let mut chain = Vec::new();
    let mut i = n - 1;
    while i != 0 {
        chain.push(expanded[i]);
        i = breaks_data[i].prev;
    }
    chain.reverse();
    chain
}

/// Pre-pass: wherever two adjacent real candidates span more than
/// `min_width()`, insert a forced break at every non-zero-advance
/// position between them so the DP always has something to fall back on.
fn expand_desperate(candidates: &Candidates, measured: &MeasuredText, profile: &dyn LineWidthProfile) -> Vec<Candidate> {
    let slice = candidates.as_slice();
    let min_w = profile.min_width();
    let mut out = Vec::with_capacity(slice.len());
    out.push(slice[0]);

    for pair in slice.windows(2) {
        let prev = pair[0];
        let cur = pair[1];

        if (cur.post_break - prev.pre_break).get() as f32 > min_w {
            let mut acc = ParaWidth::ZERO;
            for k in prev.offset..cur.offset {
                let width_k = measured.width_at(k);
                if width_k > 0.0 && k > prev.offset {
                    out.push(Candidate {
                        offset: k,
                        pre_break: prev.pre_break + acc,
                        post_break: prev.pre_break + acc,
                        first_overhang: 0.0,
                        second_overhang: 0.0,
                        penalty: SCORE_DESPERATE,
                        pre_space_count: prev.post_space_count,
                        post_space_count: prev.post_space_count,
                        hyphen_class: HyphenationClass::BreakAndDontInsertHyphen,
                        is_rtl: cur.is_rtl,
                    });
                }
                acc = acc + Advance::new(width_k);
            }
        }
        out.push(cur);
    }

    out
}

/// Width of the first word-space (ASCII space) in the paragraph, or `0`
/// if the paragraph has none.
fn first_space_width(text: &TextBuffer, measured: &MeasuredText) -> f32 {
    for i in 0..text.len() {
        if text.char_at(i).map(is_word_space).unwrap_or(false) {
            return measured.width_at(i);
        }
    }
    0.0
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
    use crate::width_profile::{TabStops, UniformWidthProfile};
    use crate::word::IcuWordBreakIterator;
    use crate::wordstream::build_candidates;

    #[test]
    fn balances_lines_more_evenly_than_high_quality() {
        let text = TextBuffer::from_str("This is an example text.");
        let paint = Paint { locale_list_id: locale::intern(&["en"]), ..Paint::default() };
        let runs = vec![Run::Style(StyleRun { range: 0..text.len(), paint, is_rtl: false })];
        let mut measured =
            measure::measure(&text, runs, &UnicodeBidiAnalyzer, &FixedWidthShaper::default(), None).unwrap();

        let profile = UniformWidthProfile { width: 230.0 };
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

        let balanced = break_optimal(&stream.candidates, &text, &measured, &profile, false, true, 0.0);
        let high_quality = break_optimal(&stream.candidates, &text, &measured, &profile, false, false, 0.0);
        assert_eq!(balanced.last().unwrap().offset, text.len());
        assert_eq!(high_quality.last().unwrap().offset, text.len());
    }
}
