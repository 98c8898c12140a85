//! Closed registry of syntax node kinds.
//!
//! Every grammar production has exactly one `NodeKind`, and every kind has a
//! stable raw `u16` tag used by the stub store. Token leaves are represented
//! as `NodeKind::Token(kind)` with tags in the `TOKEN_TAG_BASE` range.

use std::fmt;

use crate::TokenKind;

/// Raw tags at or above this value encode token leaves.
pub const TOKEN_TAG_BASE: u16 = 0x8000;

/// A raw tag that names no known node kind.
///
/// Node kinds are a closed, compile-time set, so this only surfaces when
/// persisted data was written by a different build or is corrupt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown node kind tag {0:#06x}")]
pub struct UnknownNodeKind(pub u16);

macro_rules! define_node_kinds {
    ($( $(#[$doc:meta])* $name:ident = $tag:literal, )*) => {
        /// Kind tag of a syntax tree node.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum NodeKind {
            $( $(#[$doc])* $name, )*
            /// Leaf holding a single token.
            Token(TokenKind),
        }

        impl NodeKind {
            /// Every production kind (token leaves excluded).
            pub const PRODUCTIONS: &'static [NodeKind] = &[$(NodeKind::$name),*];

            /// Stable raw tag.
            pub const fn to_raw(self) -> u16 {
                match self {
                    $( NodeKind::$name => $tag, )*
                    NodeKind::Token(kind) => TOKEN_TAG_BASE | kind.discriminant_index() as u16,
                }
            }

            /// Decode a raw tag.
            pub fn from_raw(raw: u16) -> Result<NodeKind, UnknownNodeKind> {
                if raw & TOKEN_TAG_BASE != 0 {
                    return u8::try_from(raw & !TOKEN_TAG_BASE)
                        .ok()
                        .and_then(TokenKind::from_discriminant_index)
                        .map(NodeKind::Token)
                        .ok_or(UnknownNodeKind(raw));
                }
                match raw {
                    $( $tag => Ok(NodeKind::$name), )*
                    _ => Err(UnknownNodeKind(raw)),
                }
            }

            /// Production name as shown in tree dumps.
            pub const fn name(self) -> &'static str {
                match self {
                    $( NodeKind::$name => stringify!($name), )*
                    NodeKind::Token(_) => "Token",
                }
            }
        }
    };
}

define_node_kinds! {
    File = 1,
    /// Unparseable region, possibly empty.
    Error = 2,
    /// Placeholder for an omitted expression (`f(, x)`, `x[1, ]`, `a =`).
    EmptyExpression = 3,
    /// Literal the lexer could not complete (unterminated string).
    InvalidLiteral = 4,

    AssignmentStatement = 10,
    IfStatement = 11,
    WhileStatement = 12,
    ForStatement = 13,
    RepeatStatement = 14,
    BreakStatement = 15,
    NextStatement = 16,

    BlockExpression = 20,
    HelpExpression = 21,
    ParenthesizedExpression = 22,
    FunctionExpression = 23,
    ParameterList = 24,
    Parameter = 25,
    CallExpression = 26,
    ArgumentList = 27,
    NamedArgument = 28,
    SubscriptionExpression = 29,
    MemberExpression = 30,
    AtExpression = 31,
    NamespaceAccessExpression = 32,
    OperatorExpression = 33,
    TildeExpression = 34,
    UnaryTildeExpression = 35,
    UnaryNotExpression = 36,
    UnaryPlusMinusExpression = 37,

    IdentifierExpression = 40,
    StringLiteralExpression = 41,
    NumericLiteralExpression = 42,
    BooleanLiteral = 43,
    NullLiteral = 44,
    NaLiteral = 45,
    /// `Inf` and `NaN`.
    BoundaryLiteral = 46,

    AssignOperator = 50,
    AndOperator = 51,
    OrOperator = 52,
    NotOperator = 53,
    CompareOperator = 54,
    PlusMinusOperator = 55,
    MulDivOperator = 56,
    InfixOperator = 57,
    ColonOperator = 58,
    ExpOperator = 59,
    TildeOperator = 60,
    ListSubsetOperator = 61,
    AtOperator = 62,

    RoxygenComment = 80,
    RoxygenParamTag = 81,
    RoxygenTag = 82,
    RoxygenParameter = 83,
    RoxygenHelpPageLink = 84,
    RoxygenLinkDestination = 85,
    RoxygenAutolink = 86,
    RoxygenNamespaceAccess = 87,
    RoxygenIdentifier = 88,
}

impl NodeKind {
    #[inline]
    pub const fn is_token(self) -> bool {
        matches!(self, NodeKind::Token(_))
    }

    #[inline]
    pub const fn token_kind(self) -> Option<TokenKind> {
        match self {
            NodeKind::Token(kind) => Some(kind),
            _ => None,
        }
    }

    /// Nodes that stand for an R expression (including statements, which are
    /// expressions in R).
    pub const fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::EmptyExpression
                | NodeKind::InvalidLiteral
                | NodeKind::AssignmentStatement
                | NodeKind::IfStatement
                | NodeKind::WhileStatement
                | NodeKind::ForStatement
                | NodeKind::RepeatStatement
                | NodeKind::BreakStatement
                | NodeKind::NextStatement
                | NodeKind::BlockExpression
                | NodeKind::HelpExpression
                | NodeKind::ParenthesizedExpression
                | NodeKind::FunctionExpression
                | NodeKind::CallExpression
                | NodeKind::SubscriptionExpression
                | NodeKind::MemberExpression
                | NodeKind::AtExpression
                | NodeKind::NamespaceAccessExpression
                | NodeKind::OperatorExpression
                | NodeKind::TildeExpression
                | NodeKind::UnaryTildeExpression
                | NodeKind::UnaryNotExpression
                | NodeKind::UnaryPlusMinusExpression
                | NodeKind::IdentifierExpression
                | NodeKind::StringLiteralExpression
                | NodeKind::NumericLiteralExpression
                | NodeKind::BooleanLiteral
                | NodeKind::NullLiteral
                | NodeKind::NaLiteral
                | NodeKind::BoundaryLiteral
        )
    }

    /// Operator wrapper nodes (`AssignOperator`, `AndOperator`, ...).
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            NodeKind::AssignOperator
                | NodeKind::AndOperator
                | NodeKind::OrOperator
                | NodeKind::NotOperator
                | NodeKind::CompareOperator
                | NodeKind::PlusMinusOperator
                | NodeKind::MulDivOperator
                | NodeKind::InfixOperator
                | NodeKind::ColonOperator
                | NodeKind::ExpOperator
                | NodeKind::TildeOperator
                | NodeKind::ListSubsetOperator
                | NodeKind::AtOperator
        )
    }

    /// Loop statements targeted by `break` and `next`.
    pub const fn is_loop(self) -> bool {
        matches!(
            self,
            NodeKind::ForStatement | NodeKind::WhileStatement | NodeKind::RepeatStatement
        )
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, NodeKind::Error)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Token(kind) => write!(f, "Token({kind:?})"),
            other => f.write_str(other.name()),
        }
    }
}
