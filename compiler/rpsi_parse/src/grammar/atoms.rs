//! Atoms: literals, names, grouping, control flow, functions, and the prefix
//! operators.

use rpsi_diagnostic::ErrorCode;
use rpsi_ir::{NodeKind, TokenKind};

use crate::context::ParseContext;
use crate::marker::CompletedMarker;
use crate::recovery::TokenSet;
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

const NAMESPACE_OPS: TokenSet = TokenSet::new(&[TokenKind::DoubleColon, TokenKind::TripleColon]);

impl<'a> Parser<'a> {
    /// An atom, or `None` without consuming when nothing can start here.
    pub(crate) fn primary(&mut self) -> Option<CompletedMarker> {
        ensure_sufficient_stack(|| self.primary_inner())
    }

    fn primary_inner(&mut self) -> Option<CompletedMarker> {
        let done = match self.current_kind() {
            TokenKind::Identifier | TokenKind::TripleDots | TokenKind::Underscore => {
                if self.at_namespace_access() {
                    self.namespace_access()
                } else {
                    self.identifier_expression()
                }
            }
            TokenKind::String => {
                if self.at_namespace_access() {
                    self.namespace_access()
                } else {
                    self.string_literal()
                }
            }
            TokenKind::InvalidString => {
                self.error(ErrorCode::E0001, "unterminated string literal");
                self.leaf(NodeKind::InvalidLiteral)
            }
            TokenKind::Integer | TokenKind::Numeric | TokenKind::Complex => {
                self.leaf(NodeKind::NumericLiteralExpression)
            }
            TokenKind::True | TokenKind::False => self.leaf(NodeKind::BooleanLiteral),
            TokenKind::Null => self.leaf(NodeKind::NullLiteral),
            TokenKind::Na
            | TokenKind::NaInteger
            | TokenKind::NaReal
            | TokenKind::NaComplex
            | TokenKind::NaCharacter => self.leaf(NodeKind::NaLiteral),
            TokenKind::Inf | TokenKind::NaN => self.leaf(NodeKind::BoundaryLiteral),
            TokenKind::LParen => self.parenthesized(),
            TokenKind::LBrace => self.block(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Repeat => self.repeat_statement(),
            TokenKind::Break => self.leaf(NodeKind::BreakStatement),
            TokenKind::Next => self.leaf(NodeKind::NextStatement),
            TokenKind::Function | TokenKind::Lambda => self.function(),
            TokenKind::Help => self.help(),
            TokenKind::Tilde => {
                self.prefix(NodeKind::TildeOperator, NodeKind::UnaryTildeExpression, Self::tilde)
            }
            TokenKind::Not => {
                self.prefix(NodeKind::NotOperator, NodeKind::UnaryNotExpression, Self::compare)
            }
            TokenKind::Plus | TokenKind::Minus => self.prefix(
                NodeKind::PlusMinusOperator,
                NodeKind::UnaryPlusMinusExpression,
                Self::power,
            ),
            TokenKind::BadCharacter => {
                self.error(ErrorCode::E0002, "unrecognized character");
                self.leaf(NodeKind::Error)
            }
            _ => return None,
        };
        Some(done)
    }

    /// Single-token node.
    pub(super) fn leaf(&mut self, kind: NodeKind) -> CompletedMarker {
        let m = self.start();
        self.bump();
        m.complete(self, kind)
    }

    pub(crate) fn identifier_expression(&mut self) -> CompletedMarker {
        self.leaf(NodeKind::IdentifierExpression)
    }

    pub(crate) fn string_literal(&mut self) -> CompletedMarker {
        self.leaf(NodeKind::StringLiteralExpression)
    }

    fn at_namespace_access(&self) -> bool {
        NAMESPACE_OPS.contains(self.nth_kind(1))
            && !(self.context.newlines_terminate() && self.cursor.nth_newline_before(1))
    }

    /// `pkg::name`, `pkg:::name`, `"pkg"::"name"`.
    fn namespace_access(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump();
        self.bump();
        match self.current_kind() {
            TokenKind::Identifier | TokenKind::TripleDots | TokenKind::Underscore => {
                self.identifier_expression();
            }
            TokenKind::String => {
                self.string_literal();
            }
            found => {
                self.error(
                    ErrorCode::E1004,
                    format!("expected a name after `::`, found {}", found.display_name()),
                );
                let err = self.start();
                err.complete(self, NodeKind::Error);
            }
        }
        m.complete(self, NodeKind::NamespaceAccessExpression)
    }

    /// `( expr )`. Newlines inside are insignificant.
    pub(crate) fn parenthesized(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump();
        let inner = self.context.with(ParseContext::IGNORE_NEWLINES);
        self.in_context(inner, |p| {
            p.expect_expr();
            p.expect(TokenKind::RParen, ErrorCode::E1003);
        });
        m.complete(self, NodeKind::ParenthesizedExpression)
    }

    /// `{ expression_list }`. Newlines terminate statements again inside.
    fn block(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump();
        let inner = self.context.without(ParseContext::IGNORE_NEWLINES);
        self.in_context(inner, |p| {
            p.expression_list(TokenSet::single(TokenKind::RBrace));
        });
        self.expect(TokenKind::RBrace, ErrorCode::E1003);
        m.complete(self, NodeKind::BlockExpression)
    }

    /// `( expr )` after `if` and `while`.
    fn condition(&mut self) {
        if !self.at(TokenKind::LParen) {
            let found = self.current_kind().display_name();
            self.error(ErrorCode::E1005, format!("expected `(`, found {found}"));
            return;
        }
        self.bump();
        let inner = self.context.with(ParseContext::IGNORE_NEWLINES);
        self.in_context(inner, |p| {
            p.expect_expr();
            p.expect(TokenKind::RParen, ErrorCode::E1003);
        });
    }

    /// `if (cond) expr [else expr]`. An `else` on a later line is accepted.
    fn if_statement(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump();
        self.condition();
        self.expect_expr();
        if self.eat(TokenKind::Else) {
            self.expect_expr();
        }
        m.complete(self, NodeKind::IfStatement)
    }

    fn while_statement(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump();
        self.condition();
        self.expect_expr();
        m.complete(self, NodeKind::WhileStatement)
    }

    fn repeat_statement(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump();
        self.expect_expr();
        m.complete(self, NodeKind::RepeatStatement)
    }

    /// `for (name in range) body`
    fn for_statement(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump();
        if self.at(TokenKind::LParen) {
            self.bump();
            let inner = self.context.with(ParseContext::IGNORE_NEWLINES);
            self.in_context(inner, |p| {
                if matches!(p.current_kind(), TokenKind::Identifier | TokenKind::TripleDots) {
                    p.identifier_expression();
                } else {
                    let found = p.current_kind().display_name();
                    p.error(
                        ErrorCode::E1004,
                        format!("expected loop variable, found {found}"),
                    );
                    let err = p.start();
                    err.complete(p, NodeKind::Error);
                }
                if p.expect(TokenKind::In, ErrorCode::E1005) {
                    p.expect_expr();
                }
                p.expect(TokenKind::RParen, ErrorCode::E1003);
            });
        } else {
            let found = self.current_kind().display_name();
            self.error(ErrorCode::E1005, format!("expected `(`, found {found}"));
        }
        self.expect_expr();
        m.complete(self, NodeKind::ForStatement)
    }

    /// `function (params) body` or `\(params) body`.
    fn function(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump();
        self.parameter_list();
        self.expect_expr();
        m.complete(self, NodeKind::FunctionExpression)
    }

    /// `?topic`, `??topic`. A keyword topic (`?if`) is taken as a bare token.
    fn help(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump();
        self.eat(TokenKind::Help);
        if self.current_kind().is_keyword() {
            self.bump();
        } else {
            self.expect_expr();
        }
        m.complete(self, NodeKind::HelpExpression)
    }

    /// Prefix operator whose operand is parsed at `operand_level`.
    fn prefix(
        &mut self,
        operator: NodeKind,
        node: NodeKind,
        operand_level: fn(&mut Parser<'a>) -> Option<CompletedMarker>,
    ) -> CompletedMarker {
        let m = self.start();
        self.operator(operator);
        self.operand(operand_level);
        m.complete(self, node)
    }
}
