//! Roxygen doc-comment grammar.
//!
//! ```text
//! comment         := line (DocNewline line)*
//! line            := DocWhitespace? DocPrefix content*
//! content         := param_tag | tag | help_page_link | link_destination
//!                  | autolink | text
//! param_tag       := "@param" (ws? parameter (ws? "," ws? parameter)*)?
//! help_page_link  := "[" (name "::" name | name) ("(" ")")? "]"
//! ```

use rpsi_diagnostic::ErrorCode;
use rpsi_ir::{NodeKind, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn roxygen_comment(&mut self) {
        let m = self.start();
        while !self.at_end() {
            self.doc_line();
            self.eat(TokenKind::DocNewline);
        }
        m.complete(self, NodeKind::RoxygenComment);
    }

    fn doc_line(&mut self) {
        self.eat(TokenKind::DocWhitespace);
        if !self.eat(TokenKind::DocPrefix) {
            if !self.at(TokenKind::DocNewline) && !self.at_end() {
                self.error(ErrorCode::E1006, "doc comment line must start with `#'`");
            }
            self.skip_doc_line();
            return;
        }
        while !self.at(TokenKind::DocNewline) && !self.at_end() {
            match self.current_kind() {
                TokenKind::DocTagName if self.current_text() == "@param" => self.param_tag(),
                TokenKind::DocTagName => self.tag(),
                TokenKind::DocLBracket => self.help_page_link(),
                TokenKind::DocLParen => self.link_destination(),
                TokenKind::DocLAngle => self.autolink(),
                _ => self.bump(),
            }
        }
    }

    fn skip_doc_line(&mut self) {
        while !self.at(TokenKind::DocNewline) && !self.at_end() {
            self.bump();
        }
    }

    fn tag(&mut self) {
        let m = self.start();
        self.bump();
        m.complete(self, NodeKind::RoxygenTag);
    }

    fn param_tag(&mut self) {
        let m = self.start();
        self.bump();
        if self.at(TokenKind::DocWhitespace) && self.nth_kind(1) == TokenKind::DocIdentifier {
            self.bump();
        }
        if self.at(TokenKind::DocIdentifier) {
            self.doc_node(NodeKind::RoxygenParameter);
            while let Some(gap) = self.param_separator() {
                for _ in 0..gap {
                    self.bump();
                }
                self.doc_node(NodeKind::RoxygenParameter);
            }
        } else {
            self.error(ErrorCode::E1006, "expected a parameter name after `@param`");
        }
        m.complete(self, NodeKind::RoxygenParamTag);
    }

    /// Number of tokens between the current position and the next
    /// parameter name, when a `,` separates them.
    fn param_separator(&self) -> Option<usize> {
        let mut n = 0;
        if self.nth_kind(n) == TokenKind::DocWhitespace {
            n += 1;
        }
        if self.nth_kind(n) != TokenKind::DocComma {
            return None;
        }
        n += 1;
        if self.nth_kind(n) == TokenKind::DocWhitespace {
            n += 1;
        }
        (self.nth_kind(n) == TokenKind::DocIdentifier).then_some(n)
    }

    fn help_page_link(&mut self) {
        let m = self.start();
        self.bump();
        // Opened before the name; kept only when `::` follows it.
        let ns = self.start();
        let named = self.doc_identifier();
        if named && self.eat(TokenKind::DocDoubleColon) {
            self.doc_identifier();
            ns.complete(self, NodeKind::RoxygenNamespaceAccess);
        } else {
            ns.abandon(self);
        }
        if self.eat(TokenKind::DocLParen) {
            self.expect(TokenKind::DocRParen, ErrorCode::E1006);
        }
        self.expect(TokenKind::DocRBracket, ErrorCode::E1006);
        m.complete(self, NodeKind::RoxygenHelpPageLink);
    }

    fn doc_identifier(&mut self) -> bool {
        if self.at(TokenKind::DocIdentifier) {
            self.doc_node(NodeKind::RoxygenIdentifier);
            true
        } else {
            let found = self.current_kind().display_name();
            self.error(ErrorCode::E1006, format!("expected doc identifier, found {found}"));
            false
        }
    }

    fn link_destination(&mut self) {
        let m = self.start();
        self.bump();
        while self.at(TokenKind::DocText) || self.at(TokenKind::DocWhitespace) {
            self.bump();
        }
        self.expect(TokenKind::DocRParen, ErrorCode::E1006);
        m.complete(self, NodeKind::RoxygenLinkDestination);
    }

    fn autolink(&mut self) {
        let m = self.start();
        self.bump();
        self.expect(TokenKind::DocAutolinkUri, ErrorCode::E1006);
        self.expect(TokenKind::DocRAngle, ErrorCode::E1006);
        m.complete(self, NodeKind::RoxygenAutolink);
    }

    /// Single-token doc node.
    fn doc_node(&mut self, kind: NodeKind) {
        let m = self.start();
        self.bump();
        m.complete(self, kind);
    }
}
