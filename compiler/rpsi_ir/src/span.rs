//! Byte ranges into one source text.
//!
//! Tokens, tree nodes, stubs and diagnostics all carry a [`Span`]. Offsets
//! are `u32`, so a source is limited to 4 GiB; the parser rejects anything
//! larger before a span is made.

use std::fmt;
use std::ops::Range;

/// A `usize` range that does not fit in `u32` offsets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("range {start}..{end} exceeds the 4 GiB source limit")]
pub struct SpanError {
    pub start: usize,
    pub end: usize,
}

/// Half-open byte range `start..end`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Zero-length span at offset 0, for synthesized positions.
    pub const DUMMY: Span = Span::point(0);

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-length span: where an empty node or a missing token sits.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span::new(offset, offset)
    }

    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        match (u32::try_from(range.start), u32::try_from(range.end)) {
            (Ok(start), Ok(end)) => Ok(Span::new(start, end)),
            _ => Err(SpanError {
                start: range.start,
                end: range.end,
            }),
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// `offset` lies inside; the end is exclusive.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        (self.start..self.end).contains(&offset)
    }

    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Where this span lands after the text under `edit` is replaced by
    /// `new_len` bytes.
    ///
    /// Spans after the edit shift by the length change. Spans that reach the
    /// edit's end keep their start and move their end. Spans ending before
    /// the edit's end are untouched.
    #[must_use]
    pub fn adjust_for_edit(self, edit: Span, new_len: u32) -> Span {
        let shift = |offset: u32| -> u32 {
            let moved = i64::from(offset) - i64::from(edit.len()) + i64::from(new_len);
            u32::try_from(moved).unwrap_or(0)
        };
        if self.start >= edit.end {
            Span::new(shift(self.start), shift(self.end))
        } else if self.end >= edit.end {
            Span::new(self.start, shift(self.end))
        } else {
            self
        }
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
