//! Paragraph line breaking: given a run of styled text, decide where to
//! break it into display lines, where to insert automatic hyphens, and
//! report each line's width and vertical extents.
//!
//! Two strategies are available: [`config::BreakStrategy::Greedy`] fills
//! each line as full as possible; [`config::BreakStrategy::HighQuality`]
//! and [`config::BreakStrategy::Balanced`] minimize a global badness
//! score over the whole paragraph. Font selection, glyph shaping, and
//! rendering are out of scope — callers supply them through the
//! [`shaping::ShapingBackend`], [`word::WordBreakIterator`],
//! [`bidi::BidiAnalyzer`], and [`hyphen::Hyphenator`] traits.
//!
//! [`engine::Engine`] is the entry point: [`engine::Engine::measure`]
//! fills a [`measured::MeasuredText`], and
//! [`engine::Engine::break_into_lines`] consumes it to produce a
//! [`pack::BreakResult`].

pub mod bidi;
pub mod cache;
pub mod candidate;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod greedy;
pub mod hyphen;
pub mod locale;
pub mod measure;
pub mod measured;
pub mod optimal;
pub mod pack;
pub mod run;
pub mod shaping;
pub mod text;
pub mod width_profile;
pub mod word;
pub mod wordstream;

pub use bidi::{BidiAnalyzer, BidiSubRun, UnicodeBidiAnalyzer};
pub use config::{BreakStrategy, EngineConfig, HyphenFrequency};
pub use engine::{purge_caches, Engine};
pub use error::{Error, Result};
pub use hyphen::{
    EndHyphenEdit, HyphenEdit, HyphenationClass, Hyphenator, HypherHyphenator, NoHyphenator,
    SharedHyphenator, StartHyphenEdit,
};
pub use locale::LocaleListId;
pub use measured::{Extent, MeasuredText, Overhang};
pub use pack::BreakResult;
pub use run::{FontFeature, Paint, PaintFlags, ReplacementRun, Run, StyleRun};
pub use shaping::{FixedWidthShaper, ShapedPiece, ShapingBackend};
pub use text::{Range, TextBuffer};
pub use width_profile::{LineWidthProfile, TabStops, UniformWidthProfile};
pub use word::{GradedWordBreakIterator, IcuWordBreakIterator, WordBreakIterator};
