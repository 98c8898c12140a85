//! Comma-separated lists: call arguments, subscripts, and formal parameters.
//!
//! All three ignore newlines between their delimiters. An element may be
//! omitted (`f(, x)`, `m[1, ]`), which yields an `EmptyExpression`.

use rpsi_diagnostic::ErrorCode;
use rpsi_ir::{NodeKind, TokenKind};

use crate::context::ParseContext;
use crate::recovery::{ARGUMENT_END, ARGUMENT_NAME};
use crate::Parser;

impl Parser<'_> {
    /// `( [argument (, argument)*] )`
    pub(crate) fn argument_list(&mut self) {
        let m = self.start();
        self.bump();
        let inner = self.context.with(ParseContext::IGNORE_NEWLINES);
        self.in_context(inner, |p| {
            p.elements(TokenKind::RParen);
            p.expect(TokenKind::RParen, ErrorCode::E1003);
        });
        m.complete(self, NodeKind::ArgumentList);
    }

    /// `[ elements ]` or `[[ elements ]]`. The elements are direct children
    /// of the enclosing subscription node.
    pub(crate) fn subscript(&mut self) {
        let close = if self.at(TokenKind::LDoubleBracket) {
            TokenKind::RDoubleBracket
        } else {
            TokenKind::RBracket
        };
        self.bump();
        let inner = self.context.with(ParseContext::IGNORE_NEWLINES);
        self.in_context(inner, |p| {
            p.elements(close);
            p.expect(close, ErrorCode::E1003);
        });
    }

    fn elements(&mut self, close: TokenKind) {
        if self.at(close) {
            return;
        }
        loop {
            self.argument();
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
    }

    /// `name = value`, `name =`, `value`, or nothing.
    fn argument(&mut self) {
        if self.at_set(ARGUMENT_END) || self.at_end() {
            self.empty_expression();
            return;
        }
        let named = self.at_set(ARGUMENT_NAME) && self.named_argument();
        if !named {
            self.expect_expr();
        }
        self.skip_to_argument_end();
    }

    /// Try `name = [value]`. On anything but `=` after the name, every
    /// event is undone and `false` returned.
    fn named_argument(&mut self) -> bool {
        let m = self.start();
        match self.current_kind() {
            TokenKind::String => {
                self.string_literal();
            }
            TokenKind::Null => {
                self.leaf(NodeKind::NullLiteral);
            }
            _ => {
                self.identifier_expression();
            }
        }
        if !self.at(TokenKind::Eq) {
            m.rollback(self);
            return false;
        }
        self.operator(NodeKind::AssignOperator);
        if self.at_set(ARGUMENT_END) || self.at_end() {
            self.empty_expression();
        } else {
            self.expect_expr();
        }
        m.complete(self, NodeKind::NamedArgument);
        true
    }

    /// Anything left before the next `,` or closer becomes one `Error` node.
    fn skip_to_argument_end(&mut self) {
        if self.at_set(ARGUMENT_END) || self.at_end() {
            return;
        }
        let found = self.current_kind().display_name();
        self.error(ErrorCode::E1001, format!("unexpected {found}"));
        let m = self.start();
        while !self.at_set(ARGUMENT_END) && !self.at_end() {
            self.bump();
        }
        m.complete(self, NodeKind::Error);
    }

    /// `( [parameter (, parameter)*] )` after `function` or `\`.
    pub(crate) fn parameter_list(&mut self) {
        let m = self.start();
        if !self.at(TokenKind::LParen) {
            let found = self.current_kind().display_name();
            self.error(ErrorCode::E1005, format!("expected `(`, found {found}"));
            m.complete(self, NodeKind::ParameterList);
            return;
        }
        self.bump();
        let inner = self.context.with(ParseContext::IGNORE_NEWLINES);
        self.in_context(inner, |p| {
            if !p.at(TokenKind::RParen) {
                loop {
                    p.parameter();
                    if !p.eat(TokenKind::Comma) {
                        break;
                    }
                }
            }
            p.expect(TokenKind::RParen, ErrorCode::E1003);
        });
        m.complete(self, NodeKind::ParameterList);
    }

    /// `name [= default]`
    fn parameter(&mut self) {
        let m = self.start();
        if matches!(
            self.current_kind(),
            TokenKind::Identifier | TokenKind::TripleDots
        ) {
            self.identifier_expression();
            if self.at(TokenKind::Eq) {
                self.operator(NodeKind::AssignOperator);
                self.expect_expr();
            }
        } else {
            let found = self.current_kind().display_name();
            self.error(
                ErrorCode::E1004,
                format!("expected parameter name, found {found}"),
            );
            if self.at_set(ARGUMENT_END) || self.at_end() {
                let err = self.start();
                err.complete(self, NodeKind::Error);
            }
        }
        self.skip_to_argument_end();
        m.complete(self, NodeKind::Parameter);
    }
}
