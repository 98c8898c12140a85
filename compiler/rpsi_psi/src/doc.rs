//! Documentation text of a function.

use rpsi_ir::{NodeKind, TokenKind};

use crate::element::FunctionExpression;
use crate::node::PsiNode;

/// Blank lines tolerated between a Roxygen block and the code it documents.
const MAX_GAP_LINES: usize = 2;

impl FunctionExpression<'_> {
    /// Roxygen lines directly above the enclosing statement, or failing
    /// that, the comments that open the body block. Lines are joined with
    /// `\n` and stripped of their comment prefix.
    pub fn doc_string(self) -> Option<String> {
        roxygen_above(self.node()).or_else(|| leading_block_comments(self.node()))
    }
}

fn roxygen_above(function: PsiNode<'_>) -> Option<String> {
    let anchor = function
        .parent()
        .filter(|parent| parent.kind() != NodeKind::File)
        .unwrap_or(function);
    let mut lines = Vec::new();
    let mut gap = 0;
    let mut sibling = anchor.prev_sibling();
    while let Some(node) = sibling {
        match node.token_kind() {
            Some(TokenKind::Comment) if node.text().starts_with("#'") => {
                lines.push(node.text().trim_start_matches("#'").trim());
                gap = 0;
            }
            Some(TokenKind::Comment | TokenKind::Newline) => {
                gap += 1;
                if gap > MAX_GAP_LINES {
                    break;
                }
            }
            Some(TokenKind::Whitespace) => {}
            _ => break,
        }
        sibling = node.prev_sibling();
    }
    if lines.is_empty() {
        return None;
    }
    lines.reverse();
    Some(lines.join("\n"))
}

fn leading_block_comments(function: PsiNode<'_>) -> Option<String> {
    let block = function
        .children()
        .find(|child| child.kind() == NodeKind::BlockExpression)?;
    let comments: Vec<&str> = block
        .children()
        .take_while(|child| child.kind().is_token())
        .filter(|child| child.token_kind() == Some(TokenKind::Comment))
        .map(|comment| {
            let text = comment.text();
            text.strip_prefix("#'")
                .or_else(|| text.strip_prefix('#'))
                .unwrap_or(text)
                .trim()
        })
        .collect();
    (!comments.is_empty()).then(|| comments.join("\n"))
}
