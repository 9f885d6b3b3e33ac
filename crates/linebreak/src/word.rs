//! The word-boundary iterator contract and a default implementation
//! backed by `icu_segmenter`.

use icu_segmenter::WordSegmenter;

use crate::text::TextBuffer;

/// The word iterator contract.
///
/// `following_with_locale` restarts the iterator at `restart_from` using
/// `locale` — switching locales mid-paragraph restarts the iterator
/// from the run's start; `current`/`next` step through boundaries;
/// `break_badness` grades how "soft" the boundary is (1.0 at
/// ordinary word boundaries, larger at boundaries UAX #14 allows but that
/// are linguistically unusual, e.g. a break between two alphanumeric runs
/// with no separating punctuation or space).
pub trait WordBreakIterator {
    fn set_text(&mut self, text: &TextBuffer);
    fn following_with_locale(&mut self, locale: Option<&str>, restart_from: usize) -> i32;
    fn current(&self) -> i32;
    fn next(&mut self) -> i32;
    fn break_badness(&self) -> f32;
}

/// Default [`WordBreakIterator`] backed by ICU's word segmenter (the same
/// family of segmenter `typst-layout::inline::linebreak` uses for its line
/// break opportunities, here applied to word boundaries instead).
pub struct IcuWordBreakIterator {
    boundaries: Vec<usize>,
    pos: usize,
}

impl Default for IcuWordBreakIterator {
    fn default() -> Self {
        Self { boundaries: vec![0], pos: 0 }
    }
}

impl WordBreakIterator for IcuWordBreakIterator {
    fn set_text(&mut self, text: &TextBuffer) {
        let (s, map) = text.slice_to_utf8(0..text.len());
        let segmenter = WordSegmenter::new_auto();
        let mut boundaries: Vec<usize> =
            segmenter.segment_str(&s).map(|b| map.to_code_unit(b)).collect();
        if boundaries.first() != Some(&0) {
            boundaries.insert(0, 0);
        }
        self.boundaries = boundaries;
        self.pos = 0;
    }

    fn following_with_locale(&mut self, _locale: Option<&str>, restart_from: usize) -> i32 {
        // icu_segmenter's general word segmenter isn't locale-specific the
        // way a dictionary-based segmenter (Thai, Lao, Khmer) would be;
        // `locale` is accepted for interface compatibility and otherwise
        // unused, the same limitation hyphenation locale selection has.
        self.pos = self.boundaries.partition_point(|&b| b < restart_from);
        if self.boundaries.get(self.pos) != Some(&restart_from) {
            self.boundaries.insert(self.pos, restart_from);
        }
        self.current()
    }

    fn current(&self) -> i32 {
        self.boundaries.get(self.pos).map(|&b| b as i32).unwrap_or(-1)
    }

    fn next(&mut self) -> i32 {
        if self.pos + 1 < self.boundaries.len() {
            self.pos += 1;
            self.boundaries[self.pos] as i32
        } else {
            -1
        }
    }

    fn break_badness(&self) -> f32 {
        1.0
    }
}

/// A [`WordBreakIterator`] decorator that grades boundary badness by
/// looking at the characters on either side, since plain ICU boundary
/// positions carry no notion of "how soft" a break is. Wraps any inner
/// iterator (normally [`IcuWordBreakIterator`]) and needs a reference to
/// the buffer being segmented to do the grading.
pub struct GradedWordBreakIterator<'a, I> {
    inner: I,
    text: &'a TextBuffer,
}

impl<'a, I: WordBreakIterator> GradedWordBreakIterator<'a, I> {
    pub fn new(inner: I, text: &'a TextBuffer) -> Self {
        Self { inner, text }
    }
}

impl<I: WordBreakIterator> WordBreakIterator for GradedWordBreakIterator<'_, I> {
    fn set_text(&mut self, text: &TextBuffer) {
        self.inner.set_text(text)
    }

    fn following_with_locale(&mut self, locale: Option<&str>, restart_from: usize) -> i32 {
        self.inner.following_with_locale(locale, restart_from)
    }

    fn current(&self) -> i32 {
        self.inner.current()
    }

    fn next(&mut self) -> i32 {
        self.inner.next()
    }

    fn break_badness(&self) -> f32 {
        let boundary = self.inner.current();
        if boundary <= 0 || boundary as usize >= self.text.len() {
            return 1.0;
        }
        let boundary = boundary as usize;
        let before = self.text.char_at(boundary.saturating_sub(1));
        let after = self.text.char_at(boundary);
        match (before, after) {
            (Some(b), Some(a)) if b.is_alphanumeric() && a.is_alphanumeric() => 1.4,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_sentence_into_words() {
        let buf = TextBuffer::from_str("This is text.");
        let mut it = IcuWordBreakIterator::default();
        it.set_text(&buf);
        let mut boundaries = vec![it.current()];
        loop {
            let n = it.next();
            if n < 0 {
                break;
            }
            boundaries.push(n);
        }
        assert!(boundaries.contains(&(buf.len() as i32)));
        assert!(boundaries.len() > 2);
    }

    #[test]
    fn grades_alphanumeric_boundaries_higher() {
        let buf = TextBuffer::from_str("a1 b");
        let mut inner = IcuWordBreakIterator::default();
        inner.set_text(&buf);
        inner.following_with_locale(None, 1);
        let graded = GradedWordBreakIterator::new(inner, &buf);
        assert_eq!(graded.break_badness(), 1.4);
    }
}
