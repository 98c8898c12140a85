//! Parse context flags.
//!
//! R decides whether a newline ends an expression by bracket nesting:
//! inside `( )` and `[ ]` newlines are layout, inside `{ }` and at top level
//! they terminate. The flags travel with the parser and are saved and
//! restored around each bracketed region.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u8);

impl ParseContext {
    /// Statement level: newlines end expressions.
    pub const NONE: Self = Self(0);

    /// Inside `( )`, `[ ]`, argument and parameter lists.
    pub const IGNORE_NEWLINES: Self = Self(1 << 0);

    /// Inside a Roxygen doc comment.
    pub const IN_ROXYGEN: Self = Self(1 << 1);

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    /// Whether a newline before the current token ends the expression.
    #[inline]
    pub const fn newlines_terminate(self) -> bool {
        !self.has(Self::IGNORE_NEWLINES)
    }
}
