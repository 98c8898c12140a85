//! Operator precedence cascade.
//!
//! One function per level, loosest first:
//!
//! ```text
//! left_assign   <- <<- :=        right-assoc
//! eq_assign     =                right-assoc, value may be empty
//! right_assign  -> ->>
//! tilde         ~
//! or            | ||
//! and           & &&
//! compare       == != < <= > >=
//! additive      + -
//! multiplicative * /
//! infix         %op% |>
//! range         :
//! power         ^                right-assoc
//! postfix       ( ) [ ] [[ ]] $ @
//! primary       atoms, prefix ~ ! + - ?
//! ```
//!
//! Prefix operators live in `primary` and parse their operand at their own
//! level, so `a + !b == c` reads as `a + !(b == c)`. No binary operator or
//! postfix form continues across a newline at statement level.

use rpsi_diagnostic::ErrorCode;
use rpsi_ir::{NodeKind, TokenKind};

use crate::marker::CompletedMarker;
use crate::recovery::{
    TokenSet, AND_OPS, COMPARE_OPS, LEFT_ASSIGN, MUL_DIV, OR_OPS, PLUS_MINUS, RIGHT_ASSIGN,
};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

type Level<'a> = fn(&mut Parser<'a>) -> Option<CompletedMarker>;

impl<'a> Parser<'a> {
    /// Parse a full expression. Consumes nothing and returns `None` when the
    /// current token cannot start one.
    pub(crate) fn expr(&mut self) -> Option<CompletedMarker> {
        ensure_sufficient_stack(|| self.left_assign())
    }

    /// Run a right-recursive level with stack growth.
    pub(super) fn guarded(&mut self, level: Level<'a>) -> Option<CompletedMarker> {
        ensure_sufficient_stack(|| level(self))
    }

    /// Parse the operand after an operator, or synthesize an error node.
    pub(super) fn operand(&mut self, level: Level<'a>) {
        if self.guarded(level).is_none() {
            self.missing_expression();
        }
    }

    fn left_assign(&mut self) -> Option<CompletedMarker> {
        let lhs = self.eq_assign()?;
        if !self.at_operator(LEFT_ASSIGN) {
            return Some(lhs);
        }
        let m = lhs.precede(self);
        self.operator(NodeKind::AssignOperator);
        self.operand(Self::left_assign);
        Some(m.complete(self, NodeKind::AssignmentStatement))
    }

    fn eq_assign(&mut self) -> Option<CompletedMarker> {
        let lhs = self.right_assign()?;
        if !self.at_operator(TokenSet::single(TokenKind::Eq)) {
            return Some(lhs);
        }
        let m = lhs.precede(self);
        self.operator(NodeKind::AssignOperator);
        if self.guarded(Self::eq_assign).is_none() {
            self.empty_expression();
        }
        Some(m.complete(self, NodeKind::AssignmentStatement))
    }

    fn right_assign(&mut self) -> Option<CompletedMarker> {
        let mut lhs = self.tilde()?;
        while self.at_operator(RIGHT_ASSIGN) {
            let m = lhs.precede(self);
            self.operator(NodeKind::AssignOperator);
            self.operand(Self::tilde);
            lhs = m.complete(self, NodeKind::AssignmentStatement);
        }
        Some(lhs)
    }

    /// Binary `~`. The prefix form is parsed in `primary` with this level
    /// as its operand.
    pub(crate) fn tilde(&mut self) -> Option<CompletedMarker> {
        self.binary(
            TokenSet::single(TokenKind::Tilde),
            NodeKind::TildeOperator,
            NodeKind::TildeExpression,
            Self::or,
        )
    }

    fn or(&mut self) -> Option<CompletedMarker> {
        self.binary(OR_OPS, NodeKind::OrOperator, NodeKind::OperatorExpression, Self::and)
    }

    fn and(&mut self) -> Option<CompletedMarker> {
        self.binary(
            AND_OPS,
            NodeKind::AndOperator,
            NodeKind::OperatorExpression,
            Self::compare,
        )
    }

    /// Operand level of prefix `!`.
    pub(crate) fn compare(&mut self) -> Option<CompletedMarker> {
        self.binary(
            COMPARE_OPS,
            NodeKind::CompareOperator,
            NodeKind::OperatorExpression,
            Self::additive,
        )
    }

    fn additive(&mut self) -> Option<CompletedMarker> {
        self.binary(
            PLUS_MINUS,
            NodeKind::PlusMinusOperator,
            NodeKind::OperatorExpression,
            Self::multiplicative,
        )
    }

    fn multiplicative(&mut self) -> Option<CompletedMarker> {
        self.binary(
            MUL_DIV,
            NodeKind::MulDivOperator,
            NodeKind::OperatorExpression,
            Self::infix,
        )
    }

    fn infix(&mut self) -> Option<CompletedMarker> {
        self.binary(
            TokenSet::single(TokenKind::InfixOp),
            NodeKind::InfixOperator,
            NodeKind::OperatorExpression,
            Self::range,
        )
    }

    fn range(&mut self) -> Option<CompletedMarker> {
        self.binary(
            TokenSet::single(TokenKind::Colon),
            NodeKind::ColonOperator,
            NodeKind::OperatorExpression,
            Self::power,
        )
    }

    /// `^`, right-associative. Also the operand level of prefix `+`/`-`, so
    /// `-2^2` is `-(2^2)` while `2^-1` is accepted.
    pub(crate) fn power(&mut self) -> Option<CompletedMarker> {
        let lhs = self.postfix()?;
        if !self.at_operator(TokenSet::single(TokenKind::Exp)) {
            return Some(lhs);
        }
        let m = lhs.precede(self);
        self.operator(NodeKind::ExpOperator);
        self.operand(Self::power);
        Some(m.complete(self, NodeKind::OperatorExpression))
    }

    /// Left-associative binary level.
    fn binary(
        &mut self,
        ops: TokenSet,
        operator: NodeKind,
        node: NodeKind,
        next: Level<'a>,
    ) -> Option<CompletedMarker> {
        let mut lhs = next(self)?;
        while self.at_operator(ops) {
            let m = lhs.precede(self);
            self.operator(operator);
            self.operand(next);
            lhs = m.complete(self, node);
        }
        Some(lhs)
    }

    /// Calls, subscripts, `$` and `@` member access.
    fn postfix(&mut self) -> Option<CompletedMarker> {
        let mut lhs = self.primary()?;
        loop {
            if self.newline_breaks() {
                break;
            }
            lhs = match self.current_kind() {
                TokenKind::LParen => {
                    let m = lhs.precede(self);
                    self.argument_list();
                    m.complete(self, NodeKind::CallExpression)
                }
                TokenKind::LBracket | TokenKind::LDoubleBracket => {
                    let m = lhs.precede(self);
                    self.subscript();
                    m.complete(self, NodeKind::SubscriptionExpression)
                }
                TokenKind::ListSubset => {
                    let m = lhs.precede(self);
                    self.operator(NodeKind::ListSubsetOperator);
                    self.member_tag();
                    m.complete(self, NodeKind::MemberExpression)
                }
                TokenKind::At => {
                    let m = lhs.precede(self);
                    self.operator(NodeKind::AtOperator);
                    self.member_tag();
                    m.complete(self, NodeKind::AtExpression)
                }
                _ => break,
            };
        }
        Some(lhs)
    }

    /// Name after `$` or `@`: an identifier, string, or parenthesized
    /// expression.
    fn member_tag(&mut self) {
        match self.current_kind() {
            TokenKind::Identifier | TokenKind::TripleDots => {
                self.identifier_expression();
            }
            TokenKind::String => {
                self.string_literal();
            }
            TokenKind::LParen => {
                self.parenthesized();
            }
            _ => {
                let found = self.current_kind().display_name();
                self.error(
                    ErrorCode::E1004,
                    format!("expected a name after `$` or `@`, found {found}"),
                );
                let m = self.start();
                m.complete(self, NodeKind::Error);
            }
        }
    }
}
