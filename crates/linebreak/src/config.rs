//! Engine-wide tunables, collected into one struct so a caller can
//! override them without digging through the breaker modules.

/// Which algorithm produces the line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakStrategy {
    /// Fill each line as much as possible; fastest.
    Greedy,
    /// Minimize the global badness score.
    HighQuality,
    /// Like `HighQuality` but additionally evens out line lengths.
    Balanced,
}

/// How aggressively to offer hyphenation opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyphenFrequency {
    /// Hyphenation disabled entirely.
    None,
    Normal,
    Full,
}

impl HyphenFrequency {
    /// Multiplier applied to the base hyphen penalty.
    pub fn multiplier(self) -> f64 {
        match self {
            HyphenFrequency::None => 0.0,
            HyphenFrequency::Normal => 4.0,
            HyphenFrequency::Full => 1.0,
        }
    }
}

/// Process-wide tunables threaded through [`crate::Engine::new`].
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Capacity of the process-wide layout cache.
    pub cache_capacity: usize,
    /// Words longer than this (in code units) are never offered for
    /// hyphenation, to avoid quadratic per-position measurement.
    pub max_hyphenated_word_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: crate::cache::DEFAULT_CAPACITY,
            max_hyphenated_word_len: 45,
        }
    }
}
