//! Grammar productions.
//!
//! - `mod.rs`: file root, expression lists, statement recovery
//! - `expr.rs`: operator precedence cascade and postfix forms
//! - `atoms.rs`: literals, identifiers, control flow, functions, prefix forms
//! - `lists.rs`: argument, subscript, and parameter lists
//! - `roxygen.rs`: doc-comment sub-grammar

mod atoms;
mod expr;
mod lists;
mod roxygen;

use rpsi_diagnostic::ErrorCode;
use rpsi_ir::{NodeKind, TokenKind};

use crate::recovery::{TokenSet, EXPR_FIRST, EXPR_RECOVERY};
use crate::Parser;

impl Parser<'_> {
    /// `file := expression_list`
    pub(crate) fn file(&mut self) {
        let m = self.start();
        self.expression_list(TokenSet::EMPTY);
        m.complete(self, NodeKind::File);
    }

    /// Expressions separated by newlines or `;`, up to end of input or a
    /// token in `closers` (left unconsumed).
    pub(crate) fn expression_list(&mut self, closers: TokenSet) {
        loop {
            while self.eat(TokenKind::Semi) {}
            if self.at_end() || self.at_set(closers) {
                return;
            }
            if self.at_set(EXPR_FIRST) {
                self.expr();
                if self.at(TokenKind::Semi)
                    || self.at_end()
                    || self.at_set(closers)
                    || self.cursor.newline_before()
                {
                    continue;
                }
            }
            let found = self.current_kind().display_name();
            self.error(ErrorCode::E1001, format!("unexpected {found}"));
            self.recover_statement(closers);
        }
    }

    /// Wrap tokens up to the next statement boundary in an `Error` node.
    /// Always consumes at least one token.
    fn recover_statement(&mut self, closers: TokenSet) {
        let m = self.start();
        self.bump();
        while !self.at_end()
            && !self.at(TokenKind::Semi)
            && !self.at_set(closers)
            && !self.cursor.newline_before()
        {
            self.bump();
        }
        m.complete(self, NodeKind::Error);
    }

    /// Parse an expression, or record "expected expression" and leave an
    /// `Error` node in its place.
    pub(crate) fn expect_expr(&mut self) {
        if self.expr().is_none() {
            self.missing_expression();
        }
    }

    /// `Error` node for an absent expression. Tokens in the recovery set are
    /// left for the caller; anything else is swallowed into the node.
    pub(crate) fn missing_expression(&mut self) {
        let found = self.current_kind().display_name();
        self.error(ErrorCode::E1002, format!("expected expression, found {found}"));
        let m = self.start();
        if !self.at_set(EXPR_RECOVERY) {
            self.bump();
        }
        m.complete(self, NodeKind::Error);
    }

    /// Zero-width placeholder for an omitted expression.
    pub(crate) fn empty_expression(&mut self) {
        let m = self.start();
        m.complete(self, NodeKind::EmptyExpression);
    }

    /// Wrap the current token in an operator node.
    pub(crate) fn operator(&mut self, kind: NodeKind) {
        let m = self.start();
        self.bump();
        m.complete(self, kind);
    }
}
