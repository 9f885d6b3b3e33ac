//! End-to-end scenarios driving the public [`linebreak::Engine`] API with
//! [`FixedWidthShaper`] as the shaping backend, so every line's width is
//! predictable from character counts alone.

use linebreak::{
    locale, BreakStrategy, Engine, EngineConfig, FixedWidthShaper, HyphenFrequency,
    HypherHyphenator, IcuWordBreakIterator, NoHyphenator, Paint, PaintFlags, ReplacementRun, Run,
    StyleRun, TabStops, TextBuffer, UnicodeBidiAnalyzer, UniformWidthProfile,
};

fn en_paint() -> Paint {
    Paint { locale_list_id: locale::intern(&["en"]), ..Paint::default() }
}

fn run_engine(
    text: &TextBuffer,
    runs: Vec<Run>,
    strategy: BreakStrategy,
    frequency: HyphenFrequency,
    justified: bool,
    width: f32,
) -> linebreak::BreakResult {
    let engine = Engine::new(EngineConfig::default());
    let bidi = UnicodeBidiAnalyzer;
    let shaper = FixedWidthShaper::default();
    let mut measured = engine.measure(text, runs, &bidi, &shaper, None).unwrap();

    let profile = UniformWidthProfile { width };
    let tabs = TabStops::default_only(40.0);
    let mut word_iter = IcuWordBreakIterator::default();
    let hyphenator: Box<dyn linebreak::Hyphenator> = if frequency == HyphenFrequency::None {
        Box::new(NoHyphenator)
    } else {
        Box::new(HypherHyphenator::default())
    };

    engine
        .break_into_lines(
            text,
            strategy,
            frequency,
            justified,
            &mut measured,
            &mut word_iter,
            hyphenator.as_ref(),
            &shaper,
            &profile,
            &tabs,
        )
        .unwrap()
}

/// A paragraph that fits each line within the budget at word boundaries
/// with no hyphenation, so lines should break exactly at spaces.
#[test]
fn natural_wrap_without_hyphenation() {
    let text = TextBuffer::from_str("This is an example text.");
    let runs = vec![Run::Style(StyleRun { range: 0..text.len(), paint: en_paint(), is_rtl: false })];

    let result = run_engine(&text, runs, BreakStrategy::Greedy, HyphenFrequency::None, false, 70.0);

    assert!(result.line_count() > 1);
    assert_eq!(*result.break_offset.last().unwrap(), text.len() as u32);
    for &w in &result.width {
        assert!(w <= 70.0, "line overflowed budget: {w}");
    }
}

/// A single long word, too wide for the line on its own, should pick up
/// at least one interior hyphen break when hyphenation is enabled.
#[test]
fn hyphenation_splits_a_long_word() {
    let text = TextBuffer::from_str("hyphenation");
    let runs = vec![Run::Style(StyleRun { range: 0..text.len(), paint: en_paint(), is_rtl: false })];

    let result =
        run_engine(&text, runs, BreakStrategy::HighQuality, HyphenFrequency::Full, false, 60.0);

    assert!(result.line_count() >= 2);
    let first_width = result.width[0];
    assert!(first_width <= 60.0);
}

/// A replacement span (e.g. an inline image) occupies a single fixed
/// advance and never offers an interior break.
#[test]
fn replacement_span_is_atomic() {
    let text = TextBuffer::from_str("ab  cd");
    let runs = vec![
        Run::Style(StyleRun { range: 0..2, paint: en_paint(), is_rtl: false }),
        Run::Replacement(ReplacementRun {
            range: 2..4,
            width: 90.0,
            locale_list_id: Default::default(),
            is_rtl: false,
        }),
        Run::Style(StyleRun { range: 4..6, paint: en_paint(), is_rtl: false }),
    ];

    let result = run_engine(&text, runs, BreakStrategy::Greedy, HyphenFrequency::None, false, 100.0);

    // The replacement's own offset (3, mid-unit) never appears as a line
    // break: only 2 or 4 are legal.
    for &off in &result.break_offset {
        assert_ne!(off, 3);
    }
}

/// Any U+0009 in the paragraph forces the greedy breaker even when the
/// caller asked for the optimal one.
#[test]
fn tab_forces_greedy_breaker() {
    let text = TextBuffer::from_str("a\tbb");
    let runs = vec![Run::Style(StyleRun { range: 0..text.len(), paint: en_paint(), is_rtl: false })];

    let result = run_engine(&text, runs, BreakStrategy::HighQuality, HyphenFrequency::None, false, 1000.0);

    assert_eq!(result.line_count(), 1);
    assert_ne!(result.flags[0] & linebreak::pack::TAB_FLAG, 0);
}

/// `Balanced` and `HighQuality` both cover the whole paragraph; `Balanced`
/// additionally evens out the two resulting lines' widths.
#[test]
fn balanced_evens_out_line_widths() {
    let text = TextBuffer::from_str("This is an example text that wraps twice over.");
    let runs = vec![Run::Style(StyleRun { range: 0..text.len(), paint: en_paint(), is_rtl: false })];

    let high_quality =
        run_engine(&text, runs.clone(), BreakStrategy::HighQuality, HyphenFrequency::None, false, 230.0);
    let balanced = run_engine(&text, runs, BreakStrategy::Balanced, HyphenFrequency::None, false, 230.0);

    assert_eq!(
        *high_quality.break_offset.last().unwrap(),
        *balanced.break_offset.last().unwrap()
    );

    let spread = |r: &linebreak::BreakResult| {
        let max = r.width.iter().cloned().fold(f32::MIN, f32::max);
        let min = r.width.iter().cloned().fold(f32::MAX, f32::min);
        max - min
    };
    assert!(spread(&balanced) <= spread(&high_quality) + 1.0);
}

/// A paragraph whose only legal break in a stretch of text is at the very
/// start of the hyphenated word (min_prefix keeps the first syllables
/// glued together, so the visible hyphen may fall right after the
/// smallest legal prefix).
#[test]
fn hyphen_break_respects_minimum_prefix() {
    let hyph = HypherHyphenator::default();
    let classes = hyph.hyphenate("photographer", "en").expect("en loaded");
    // min_prefix = 2: no break class may appear before code-point index 1.
    for class in &classes[..1.min(classes.len())] {
        assert_eq!(*class, linebreak::HyphenationClass::DontBreak);
    }
}

#[test]
fn justified_line_reports_nonzero_width_even_when_shrunk() {
    let text = TextBuffer::from_str("This is an example text.");
    let paint = Paint { flags: PaintFlags::JUSTIFIED, ..en_paint() };
    let runs = vec![Run::Style(StyleRun { range: 0..text.len(), paint, is_rtl: false })];

    let result = run_engine(&text, runs, BreakStrategy::HighQuality, HyphenFrequency::None, true, 80.0);
    assert!(result.line_count() >= 1);
    for &w in &result.width {
        assert!(w > 0.0);
    }
}
