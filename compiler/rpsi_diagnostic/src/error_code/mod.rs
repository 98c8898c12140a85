//! Stable error codes.
//!
//! `E0xxx` come from the lexer, `E1xxx` from the parser and `E9xxx` from
//! internal failures (tree assembly, stub storage). Codes are never reused.

use std::fmt;

/// Front-end phase that owns a code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexer,
    Parser,
    Internal,
}

macro_rules! define_error_codes {
    ($( $phase:ident { $( $code:ident => $description:literal, )* } )*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        pub enum ErrorCode {
            $( $( #[doc = $description] $code, )* )*
        }

        impl ErrorCode {
            /// Every code, in declaration order.
            pub const ALL: &'static [ErrorCode] = &[$( $( ErrorCode::$code, )* )*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $( ErrorCode::$code => stringify!($code), )* )*
                }
            }

            /// Short lowercase description, used as the default label text.
            pub const fn description(self) -> &'static str {
                match self {
                    $( $( ErrorCode::$code => $description, )* )*
                }
            }

            pub const fn phase(self) -> Phase {
                match self {
                    $( $( ErrorCode::$code => Phase::$phase, )* )*
                }
            }
        }
    };
}

define_error_codes! {
    Lexer {
        E0001 => "unterminated string literal",
        E0002 => "unrecognized character",
    }
    Parser {
        E1001 => "unexpected token",
        E1002 => "expected expression",
        E1003 => "unclosed delimiter",
        E1004 => "expected identifier",
        E1005 => "expected token",
        E1006 => "malformed doc comment",
    }
    Internal {
        E9001 => "syntax tree could not be assembled",
        E9002 => "stub index entry corrupt",
    }
}

impl ErrorCode {
    #[inline]
    pub fn is_lexer_error(self) -> bool {
        self.phase() == Phase::Lexer
    }

    #[inline]
    pub fn is_parser_error(self) -> bool {
        self.phase() == Phase::Parser
    }

    #[inline]
    pub fn is_internal_error(self) -> bool {
        self.phase() == Phase::Internal
    }

    /// Look up a code by name, ignoring ASCII case (`"e1002"` works).
    pub fn from_code_str(code: &str) -> Option<ErrorCode> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
