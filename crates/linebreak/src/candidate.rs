//! The candidate model: a legal break point and everything the breakers
//! need to score it.

use linebreak_utils::ParaWidth;

use crate::hyphen::HyphenationClass;

/// A penalty assigned to injected desperate breaks: always chosen so no
/// legitimate candidate is ever preferred over a break the algorithm
/// needs to make fit.
pub const DESPERATE_PENALTY: f64 = f64::MAX / 4.0;

/// A legal break point, with every scalar both breakers need to score it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Code-unit offset of the break.
    pub offset: usize,
    /// Paragraph-cumulative width if we do *not* break here.
    pub pre_break: ParaWidth,
    /// Paragraph-cumulative width if we *do* break here (excludes any
    /// trailing line-end space).
    pub post_break: ParaWidth,
    /// Overhang at the end of the line if broken here.
    pub first_overhang: f32,
    /// Overhang at the start of the next line if broken here (adjusted
    /// retroactively by the greedy breaker).
    pub second_overhang: f32,
    /// Local break penalty: hyphen penalty x word-breaker badness, or
    /// [`DESPERATE_PENALTY`] for injected breaks.
    pub penalty: f64,
    /// Number of word-spaces preceding this break.
    pub pre_space_count: u32,
    /// Number of word-spaces up to and including this break.
    pub post_space_count: u32,
    /// `DONT_BREAK` for natural breaks; otherwise the class that selects
    /// the hyphen edit.
    pub hyphen_class: HyphenationClass,
    /// Direction of the run containing or ending in this candidate.
    pub is_rtl: bool,
}

impl Candidate {
    /// Candidate 0: a sentinel at offset 0, all scalars zero, class
    /// `DONT_BREAK`.
    pub fn sentinel() -> Self {
        Self {
            offset: 0,
            pre_break: ParaWidth::ZERO,
            post_break: ParaWidth::ZERO,
            first_overhang: 0.0,
            second_overhang: 0.0,
            penalty: 0.0,
            pre_space_count: 0,
            post_space_count: 0,
            hyphen_class: HyphenationClass::DontBreak,
            is_rtl: false,
        }
    }

    pub fn is_desperate(&self) -> bool {
        self.penalty >= DESPERATE_PENALTY
    }
}

/// A growable, append-only vector of candidates.
#[derive(Debug, Default)]
pub struct Candidates {
    items: Vec<Candidate>,
}

impl Candidates {
    pub fn new() -> Self {
        Self { items: vec![Candidate::sentinel()] }
    }

    pub fn push(&mut self, candidate: Candidate) {
        debug_assert!(
            self.items.last().map_or(true, |last| last.offset <= candidate.offset),
            "candidate offsets must be non-decreasing"
        );
        debug_assert!(
            candidate.pre_break.get() <= candidate.post_break.get() + 1e-6,
            "pre_break must not exceed post_break"
        );
        self.items.push(candidate);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        false // the sentinel is always present
    }

    pub fn get(&self, i: usize) -> &Candidate {
        &self.items[i]
    }

    pub fn get_mut(&mut self, i: usize) -> &mut Candidate {
        &mut self.items[i]
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.items
    }

    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }
}

impl std::ops::Index<usize> for Candidates {
    type Output = Candidate;
    fn index(&self, i: usize) -> &Candidate {
        &self.items[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_sentinel() {
        let candidates = Candidates::new();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0], Candidate::sentinel());
    }
}
