//! Rename edits.
//!
//! A rename rewrites the text of one token leaf in place. The tree keeps its
//! shape and node ids; every span after the edit shifts by the change in
//! length.

use rpsi_ir::{NodeId, NodeKind, SyntaxTree, TokenKind, TreeError};
use tracing::debug;

use crate::element::{
    AssignmentStatement, IdentifierExpression, NamedArgument, Parameter, StringLiteralExpression,
};
use crate::literal::string_delimiters;
use crate::node::PsiNode;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenameError {
    #[error("{0} nodes cannot be renamed")]
    NotNamed(NodeKind),
    #[error("node has no name to rename")]
    NoName,
    #[error("`{0}` cannot be written as a name here")]
    InvalidName(String),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Rename the element at `node`.
///
/// Supported: assignments (their assignee), parameters, named arguments,
/// identifiers, and string literals. A new identifier name that is not a
/// syntactic R name is written in backticks, as is any name replacing a
/// backticked one. Returns the node that now carries the name: the renamed
/// node itself for identifiers and strings, `node` otherwise.
pub fn set_name(tree: &mut SyntaxTree, node: NodeId, new_name: &str) -> Result<NodeId, RenameError> {
    if new_name.is_empty() {
        return Err(RenameError::InvalidName(String::new()));
    }
    let psi = PsiNode::new(tree, node);
    let kind = psi.kind();
    let target = match kind {
        NodeKind::IdentifierExpression | NodeKind::StringLiteralExpression => psi,
        NodeKind::AssignmentStatement => AssignmentStatement::cast(psi)
            .and_then(AssignmentStatement::name_identifier)
            .ok_or(RenameError::NoName)?,
        NodeKind::Parameter => Parameter::cast(psi)
            .and_then(Parameter::variable)
            .ok_or(RenameError::NoName)?,
        NodeKind::NamedArgument => NamedArgument::cast(psi)
            .and_then(NamedArgument::name_identifier)
            .ok_or(RenameError::NoName)?,
        other => return Err(RenameError::NotNamed(other)),
    };
    let (leaf, text) = replacement(target, new_name)?;
    let target_id = target.id();
    debug!(?kind, old = %tree.node_text(leaf), new = %text, "rename");
    tree.replace_token_text(leaf, &text)?;
    Ok(match kind {
        NodeKind::IdentifierExpression | NodeKind::StringLiteralExpression => target_id,
        _ => node,
    })
}

/// Leaf to rewrite and its new text.
fn replacement(target: PsiNode<'_>, name: &str) -> Result<(NodeId, String), RenameError> {
    if let Some(ident) = IdentifierExpression::cast(target) {
        let leaf = ident.identifier_token().ok_or(RenameError::NoName)?;
        let quoted = leaf.text().starts_with('`');
        let text = if quoted || !is_syntactic_name(name) {
            if name.contains('`') {
                return Err(RenameError::InvalidName(name.to_owned()));
            }
            format!("`{name}`")
        } else {
            name.to_owned()
        };
        return Ok((leaf.id(), text));
    }
    let string = StringLiteralExpression::cast(target).ok_or(RenameError::NoName)?;
    let leaf = string.node().token(TokenKind::String).ok_or(RenameError::NoName)?;
    let old = leaf.text();
    let (open, close) = string_delimiters(old).ok_or(RenameError::NoName)?;
    let opener = &old[..open];
    let closer = &old[old.len() - close..];
    let quote = opener.chars().last().unwrap_or('"');
    let raw = open > 1;
    if name.contains(closer) || (!raw && (name.contains(quote) || name.contains('\\'))) {
        return Err(RenameError::InvalidName(name.to_owned()));
    }
    Ok((leaf.id(), format!("{opener}{name}{closer}")))
}

/// `name` lexes as one plain identifier: not a keyword, not backticked.
fn is_syntactic_name(name: &str) -> bool {
    if name.starts_with('`') {
        return false;
    }
    let tokens = rpsi_lexer::lex(name);
    tokens.len() == 2 && tokens[0].kind == TokenKind::Identifier && tokens[0].span.len() as usize == name.len()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
