//! Names and literal values.

use rpsi_ir::{NodeKind, TokenKind};

use crate::element::{
    AssignmentStatement, BooleanLiteral, IdentifierExpression, StringLiteralExpression,
};
use crate::node::PsiNode;

impl<'t> IdentifierExpression<'t> {
    /// The identifier without surrounding backticks. Under an assignment,
    /// quote characters are stripped as well, so `` `f<-` `` and `"f"`
    /// both name `f<-` / `f`.
    pub fn name(self) -> &'t str {
        let text = self.text();
        let text = text.find("::").map_or(text, |at| &text[at + 2..]);
        let under_assignment = self
            .node()
            .parent()
            .and_then(AssignmentStatement::cast)
            .is_some();
        if under_assignment {
            text.trim_matches(['`', '"', '\''])
        } else {
            text.trim_matches('`')
        }
    }

    /// The `Identifier` token leaf, absent for `...` and `_`.
    pub fn identifier_token(self) -> Option<PsiNode<'t>> {
        self.node().token(TokenKind::Identifier)
    }
}

impl<'t> StringLiteralExpression<'t> {
    /// Contents between the delimiters. Raw strings (`r"(...)"`,
    /// `R"--[...]--"`) drop their dashes and brackets too. `None` for a
    /// literal too short to have both delimiters.
    pub fn name(self) -> Option<&'t str> {
        let (open, close) = string_delimiters(self.text())?;
        self.text().get(open..self.text().len() - close)
    }
}

/// Byte lengths of the opening and closing delimiters of a string literal.
pub(crate) fn string_delimiters(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    if matches!(bytes.first(), Some(b'r' | b'R')) {
        let dashes = bytes.iter().skip(2).take_while(|&&b| b == b'-').count();
        let open = 3 + dashes;
        let close = 2 + dashes;
        return (text.len() >= open + close).then_some((open, close));
    }
    (text.len() >= 2).then_some((1, 1))
}

impl BooleanLiteral<'_> {
    pub fn is_true(self) -> bool {
        self.node().token(TokenKind::True).is_some()
    }

    pub fn is_false(self) -> bool {
        !self.is_true()
    }
}

/// Name carried by an identifier or string literal node.
pub(crate) fn name_of<'t>(node: PsiNode<'t>) -> Option<&'t str> {
    match node.kind() {
        NodeKind::IdentifierExpression => IdentifierExpression::cast(node).map(IdentifierExpression::name),
        NodeKind::StringLiteralExpression => {
            StringLiteralExpression::cast(node).and_then(StringLiteralExpression::name)
        }
        _ => None,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
