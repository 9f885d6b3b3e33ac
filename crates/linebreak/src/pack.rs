//! The output packer (C7): turns an ordered list of line-ending
//! candidates into the parallel `BreakResult` arrays the public API
//! returns.

use crate::candidate::Candidate;
use crate::hyphen::HyphenEdit;
use crate::measured::MeasuredText;

/// Bit 29 of `flags` marks a line that contains at least one tab. A fixed
/// shift that callers depend on; never renumber it.
pub const TAB_FLAG: i32 = 1 << 29;

/// Parallel per-line output arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakResult {
    /// Offset one past the last code unit of each line.
    pub break_offset: Vec<u32>,
    /// Visible width of each line, excluding trailing line-end space.
    pub width: Vec<f32>,
    /// Most negative ascent over the line.
    pub ascent: Vec<f32>,
    /// Largest descent over the line.
    pub descent: Vec<f32>,
    /// Bit 29 = line contains a tab; bits 0-7 = packed `HyphenEdit`.
    pub flags: Vec<i32>,
}

impl BreakResult {
    pub fn line_count(&self) -> usize {
        self.break_offset.len()
    }
}

/// Packs an ordered list of line-ending candidates (as produced by
/// [`crate::greedy::break_greedy`] or [`crate::optimal::break_optimal`])
/// into a [`BreakResult`].
pub fn pack(breaks: &[Candidate], measured: &MeasuredText, tab_offsets: &[usize]) -> BreakResult {
    let mut result = BreakResult {
        break_offset: Vec::with_capacity(breaks.len()),
        width: Vec::with_capacity(breaks.len()),
        ascent: Vec::with_capacity(breaks.len()),
        descent: Vec::with_capacity(breaks.len()),
        flags: Vec::with_capacity(breaks.len()),
    };

    let mut prev = Candidate::sentinel();
    let mut tab_cursor = 0usize;

    for &cur in breaks {
        let width = (cur.post_break - prev.pre_break).get() as f32;
        let ascent = measured.max_ascent(prev.offset..cur.offset);
        let descent = measured.max_descent(prev.offset..cur.offset);

        let mut has_tab = false;
        while tab_cursor < tab_offsets.len() && tab_offsets[tab_cursor] < cur.offset {
            has_tab = true;
            tab_cursor += 1;
        }

        let edit = HyphenEdit::pack(prev.hyphen_class.edit_for_next_line(), cur.hyphen_class.edit_for_this_line());
        let mut flags = edit.as_byte() as i32;
        if has_tab {
            flags |= TAB_FLAG;
        }

        result.break_offset.push(cur.offset as u32);
        result.width.push(width);
        result.ascent.push(ascent);
        result.descent.push(descent);
        result.flags.push(flags);

        prev = cur;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::hyphen::HyphenationClass;
    use crate::run::{Paint, Run, StyleRun};

    #[test]
    fn packs_two_lines_with_tab_flag_on_first() {
        let runs = vec![Run::Style(StyleRun { range: 0..10, paint: Paint::default(), is_rtl: false })];
        let measured = MeasuredText::new(10, runs).unwrap();

        let mut c1 = Candidate::sentinel();
        c1.offset = 5;
        c1.post_break = linebreak_utils::ParaWidth::new(50.0);
        c1.pre_break = c1.post_break;
        c1.hyphen_class = HyphenationClass::DontBreak;

        let mut c2 = Candidate::sentinel();
        c2.offset = 10;
        c2.post_break = linebreak_utils::ParaWidth::new(100.0);
        c2.pre_break = c2.post_break;

        let result = pack(&[c1, c2], &measured, &[2]);
        assert_eq!(result.break_offset, vec![5, 10]);
        assert_eq!(result.width, vec![50.0, 50.0]);
        assert_ne!(result.flags[0] & TAB_FLAG, 0);
        assert_eq!(result.flags[1] & TAB_FLAG, 0);
    }
}
