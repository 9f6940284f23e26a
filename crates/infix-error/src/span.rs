//! Source locations of tokens, tree nodes and syntax errors

/// A character position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line (1-indexed)
    pub line: u32,
    /// Column (1-indexed, counted in characters)
    pub column: u32,
    /// Byte offset from the beginning of the input
    pub offset: usize,
}

impl Position {
    /// Line 1, column 1
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };

    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }

    /// The position right after `ch`. A line feed moves to column 1 of the
    /// next line; a carriage return is an ordinary character.
    pub fn after(self, ch: char) -> Position {
        let offset = self.offset + ch.len_utf8();
        if ch == '\n' {
            Position {
                line: self.line + 1,
                column: 1,
                offset,
            }
        } else {
            Position {
                column: self.column + 1,
                offset,
                ..self
            }
        }
    }
}

/// Region of one input covered by a token or node, `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
    /// Input the region belongs to, as registered in a `SourceCache`
    pub file_id: u32,
}

impl Span {
    pub fn new(start: Position, end: Position, file_id: u32) -> Self {
        Self { start, end, file_id }
    }

    /// Zero-width span, as carried by the end-of-input sentinel
    pub fn empty_at(pos: Position, file_id: u32) -> Self {
        Self::new(pos, pos, file_id)
    }

    /// Span from the start of `self` to the end of `last`, which must not
    /// begin before `self` does
    pub fn to(self, last: Span) -> Span {
        debug_assert!(self.start.offset <= last.start.offset);
        Span::new(self.start, last.end, self.file_id)
    }

    pub fn line(&self) -> u32 {
        self.start.line
    }

    pub fn column(&self) -> u32 {
        self.start.column
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Columns to underline in a snippet of the first line: at least one,
    /// and exactly one when the span runs onto a later line
    pub fn underline_width(&self) -> usize {
        if self.start.line == self.end.line {
            self.end.column.saturating_sub(self.start.column).max(1) as usize
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(text: &str) -> Position {
        text.chars().fold(Position::START, Position::after)
    }

    #[test]
    fn test_position_after_characters() {
        assert_eq!(walk("ab"), Position::new(1, 3, 2));
        assert_eq!(walk("a\nb"), Position::new(2, 2, 3));
        assert_eq!(walk("a\r\n"), Position::new(2, 1, 3));
        // Columns count characters, offsets count bytes
        assert_eq!(walk("ß"), Position::new(1, 2, 2));
    }

    #[test]
    fn test_span_to_covers_both_operands() {
        let left = Span::new(walk(""), walk("x"), 0);
        let right = Span::new(walk("x = "), walk("x = 10"), 0);

        let span = left.to(right);
        assert_eq!((span.line(), span.column()), (1, 1));
        assert_eq!(span.end.offset, 6);
        assert_eq!(span.underline_width(), 6);
    }

    #[test]
    fn test_underline_width() {
        assert_eq!(Span::empty_at(walk("1 +\n"), 0).underline_width(), 1);
        assert!(Span::empty_at(walk("1 +\n"), 0).is_empty());

        let across_lines = Span::new(walk("1 "), walk("1 +\n2"), 0);
        assert_eq!(across_lines.underline_width(), 1);
        assert!(!across_lines.is_empty());
    }
}
