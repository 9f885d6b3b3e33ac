//! The public entry point: wires the measurement pipeline, the
//! word/hyphen stream, and whichever breaker applies into one call per
//! paragraph.

use crate::bidi::BidiAnalyzer;
use crate::cache;
use crate::config::{BreakStrategy, EngineConfig, HyphenFrequency};
use crate::error::Result;
use crate::greedy;
use crate::hyphen::Hyphenator;
use crate::locale;
use crate::measure;
use crate::measured::MeasuredText;
use crate::optimal;
use crate::pack::{self, BreakResult};
use crate::run::Run;
use crate::shaping::ShapingBackend;
use crate::text::TextBuffer;
use crate::width_profile::{LineWidthProfile, TabStops};
use crate::word::WordBreakIterator;
use crate::wordstream;

/// A handle bundling the process-wide tunables, meant to be threaded
/// through the public API as a single value rather than passed as loose
/// arguments at every call site.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        cache::resize(config.cache_capacity);
        Self { config }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// The measurement pipeline (C1): fills a fresh [`MeasuredText`]'s
    /// per-code-unit arrays for `runs`.
    pub fn measure(
        &self,
        text: &TextBuffer,
        runs: Vec<Run>,
        bidi: &dyn BidiAnalyzer,
        shaper: &dyn ShapingBackend,
        paragraph_rtl: Option<bool>,
    ) -> Result<MeasuredText> {
        measure::measure(text, runs, bidi, shaper, paragraph_rtl)
    }

    /// Breaks one already-measured paragraph into lines.
    ///
    /// `strategy == Greedy`, or any U+0009 in `text`, selects the greedy
    /// breaker; otherwise the optimal (DP) breaker runs.
    #[tracing::instrument(skip_all)]
    #[allow(clippy::too_many_arguments)]
    pub fn break_into_lines(
        &self,
        text: &TextBuffer,
        strategy: BreakStrategy,
        frequency: HyphenFrequency,
        justified: bool,
        measured_text: &mut MeasuredText,
        word_iter: &mut dyn WordBreakIterator,
        hyphenator: &dyn Hyphenator,
        shaper: &dyn ShapingBackend,
        line_width_profile: &dyn LineWidthProfile,
        tab_stops: &TabStops,
    ) -> Result<BreakResult> {
        let stream = wordstream::build_candidates(
            text,
            measured_text,
            word_iter,
            hyphenator,
            shaper,
            frequency,
            justified,
            self.config.max_hyphenated_word_len,
            tab_stops,
            line_width_profile,
        )?;

        let use_greedy = strategy == BreakStrategy::Greedy || stream.strategy_forced_greedy;
        if stream.strategy_forced_greedy && strategy != BreakStrategy::Greedy {
            tracing::debug!("tab character forced the greedy breaker");
        }

        let breaks = if use_greedy {
            greedy::break_greedy(&stream.candidates, measured_text, line_width_profile)
        } else {
            optimal::break_optimal(
                &stream.candidates,
                text,
                measured_text,
                line_width_profile,
                justified,
                strategy == BreakStrategy::Balanced,
                stream.line_penalty,
            )
        };

        Ok(pack::pack(&breaks, measured_text, &stream.tab_offsets))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Clears the process-wide layout cache and locale-list interner.
pub fn purge_caches() {
    cache::purge();
    locale::purge();
}
