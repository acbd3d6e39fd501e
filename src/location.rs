//! Source locations, spans, and offset lookup.
//!
//! Everything in this crate addresses text with one convention: lines are
//! 1-based, columns are 0-based and counted in characters. [`LineIndex`]
//! converts between byte offsets and locations over a single text buffer;
//! hosts use one index per file to map reported spans back to offsets.

use memchr::memchr_iter;

/// A position in a text buffer. Line 1-based, column 0-based (characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A contiguous region of text; `end` addresses the first position past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }
}

/// Byte-offset ↔ location lookup over one text buffer.
///
/// Line starts are found up front with a `memchr` scan; lookups are a
/// binary search plus a character walk within the line.
#[derive(Debug)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(memchr_iter(b'\n', text.as_bytes()).map(|pos| pos + 1));
        Self { text, line_starts }
    }

    /// Location of a byte offset. Offsets past the end clamp to the end;
    /// the offset must lie on a character boundary.
    pub fn location(&self, offset: usize) -> Location {
        let offset = offset.min(self.text.len());
        let line_idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = self.text[self.line_starts[line_idx]..offset].chars().count();
        Location::new(line_idx as u32 + 1, column as u32)
    }

    /// Byte offset of a location, or `None` if the line does not exist or
    /// is too short. A column addressing the position just past the last
    /// character of a line is valid (it is where end-of-span points).
    pub fn offset(&self, loc: Location) -> Option<usize> {
        if loc.line == 0 {
            return None;
        }
        let start = *self.line_starts.get(loc.line as usize - 1)?;
        let line_end = self
            .line_starts
            .get(loc.line as usize)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        let mut offset = start;
        for _ in 0..loc.column {
            if offset >= line_end {
                return None;
            }
            let ch = self.text[offset..].chars().next()?;
            offset += ch.len_utf8();
        }
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_of_offset() {
        let index = LineIndex::new("ab\ncde\n\nf");
        assert_eq!(index.location(0), Location::new(1, 0));
        assert_eq!(index.location(1), Location::new(1, 1));
        assert_eq!(index.location(3), Location::new(2, 0));
        assert_eq!(index.location(6), Location::new(2, 3));
        assert_eq!(index.location(7), Location::new(3, 0));
        assert_eq!(index.location(8), Location::new(4, 0));
        assert_eq!(index.location(9), Location::new(4, 1));
    }

    #[test]
    fn test_offset_of_location() {
        let text = "ab\ncde\n\nf";
        let index = LineIndex::new(text);
        assert_eq!(index.offset(Location::new(1, 0)), Some(0));
        assert_eq!(index.offset(Location::new(2, 3)), Some(6));
        assert_eq!(index.offset(Location::new(3, 0)), Some(7));
        // past the end of a line
        assert_eq!(index.offset(Location::new(1, 3)), None);
        // nonexistent line
        assert_eq!(index.offset(Location::new(9, 0)), None);
    }

    #[test]
    fn test_round_trip() {
        let text = "width: 300px;\nheight: 200px;\n";
        let index = LineIndex::new(text);
        for (offset, _) in text.char_indices() {
            assert_eq!(index.offset(index.location(offset)), Some(offset));
        }
    }

    #[test]
    fn test_multibyte_columns() {
        // 'é' is two bytes, one character
        let text = "café: x;\nnext";
        let index = LineIndex::new(text);
        assert_eq!(index.location(5), Location::new(1, 4));
        assert_eq!(index.offset(Location::new(1, 4)), Some(5));
        assert_eq!(index.location(10), Location::new(2, 0));
    }
}
