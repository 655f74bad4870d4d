//! Source locations.

use std::fmt;

use serde::Serialize;

/// A byte range in the original source plus the 1-based line/column of its
/// start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// 1-based line of `start`.
    pub line: u32,
    /// 1-based column of `start`.
    pub column: u32,
}

impl Span {
    /// Create a span.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn merge(&self, other: &Span) -> Span {
        let (line, column) = if (self.line, self.column) <= (other.line, other.column) {
            (self.line, self.column)
        } else {
            (other.line, other.column)
        };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_earliest_position() {
        let a = Span::new(10, 12, 2, 5);
        let b = Span::new(3, 8, 1, 4);
        let merged = a.merge(&b);
        assert_eq!(merged, Span::new(3, 12, 1, 4));
    }

    #[test]
    fn test_display_is_line_column() {
        assert_eq!(Span::new(0, 1, 7, 3).to_string(), "7:3");
    }
}
