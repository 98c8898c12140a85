//! Operator, access, and grouping expressions.

use rpsi_ir::{NodeKind, TokenKind};
use smallvec::SmallVec;

use crate::element::{
    AtExpression, BlockExpression, MemberExpression, NamespaceAccessExpression,
    OperatorExpression, Operator, ParenthesizedExpression, SubscriptionExpression,
    TildeExpression, UnaryNotExpression, UnaryPlusMinusExpression, UnaryTildeExpression,
};
use crate::literal::name_of;
use crate::node::PsiNode;

fn operator_child(node: PsiNode<'_>) -> Option<Operator<'_>> {
    node.children().find_map(Operator::cast)
}

/// Binary accessors shared by `OperatorExpression` and `TildeExpression`.
macro_rules! binary_accessors {
    ($($view:ident),*) => {$(
        impl<'t> $view<'t> {
            /// Two operands. A parse that lost an operand is not binary.
            pub fn is_binary(self) -> bool {
                self.node().expressions().len() == 2
            }

            pub fn operator(self) -> Option<Operator<'t>> {
                operator_child(self.node())
            }

            pub fn left_expr(self) -> Option<PsiNode<'t>> {
                let [left, _] = self.node().expressions()[..] else {
                    return None;
                };
                Some(left)
            }

            pub fn right_expr(self) -> Option<PsiNode<'t>> {
                let [_, right] = self.node().expressions()[..] else {
                    return None;
                };
                Some(right)
            }
        }
    )*};
}

binary_accessors!(OperatorExpression, TildeExpression);

/// Unary accessors for the prefix forms.
macro_rules! unary_accessors {
    ($($view:ident),*) => {$(
        impl<'t> $view<'t> {
            pub fn operator(self) -> Option<Operator<'t>> {
                operator_child(self.node())
            }

            /// The operand.
            pub fn expr(self) -> Option<PsiNode<'t>> {
                let [operand] = self.node().expressions()[..] else {
                    return None;
                };
                Some(operand)
            }
        }
    )*};
}

unary_accessors!(UnaryNotExpression, UnaryPlusMinusExpression, UnaryTildeExpression);

impl<'t> MemberExpression<'t> {
    pub fn object(self) -> Option<PsiNode<'t>> {
        self.node().first_expression()
    }

    /// Member name after `$`.
    pub fn tag(self) -> &'t str {
        member_tag(self.node())
    }
}

impl<'t> AtExpression<'t> {
    pub fn object(self) -> Option<PsiNode<'t>> {
        self.node().first_expression()
    }

    /// Slot name after `@`.
    pub fn tag(self) -> &'t str {
        member_tag(self.node())
    }
}

/// Name after the access operator: an identifier's text, a string's
/// contents, or `...` for anything else.
fn member_tag(node: PsiNode<'_>) -> &str {
    let tag = node
        .children()
        .skip_while(|child| !child.kind().is_operator())
        .skip(1)
        .find(|child| !child.kind().is_token());
    match tag {
        Some(tag) if tag.kind() == NodeKind::IdentifierExpression => tag.text(),
        Some(tag) => name_of(tag).unwrap_or("..."),
        None => "...",
    }
}

impl<'t> NamespaceAccessExpression<'t> {
    /// Package name before `::`.
    pub fn namespace_name(self) -> &'t str {
        self.node()
            .children()
            .next()
            .filter(|first| first.kind().is_token())
            .map_or("", |leaf| leaf.text().trim_matches(['`', '"', '\'']))
    }

    /// Accessed name after `::`.
    pub fn identifier(self) -> Option<PsiNode<'t>> {
        self.node().first_expression()
    }

    /// `:::` (internal access) rather than `::`.
    pub fn is_internal(self) -> bool {
        self.node().token(TokenKind::TripleColon).is_some()
    }
}

impl<'t> SubscriptionExpression<'t> {
    /// `x[...]` rather than `x[[...]]`.
    pub fn is_single(self) -> bool {
        self.node().token(TokenKind::LBracket).is_some()
    }

    pub fn object(self) -> Option<PsiNode<'t>> {
        self.node().first_expression()
    }

    /// Index expressions (named ones included), empty slots as
    /// `EmptyExpression`.
    pub fn indices(self) -> SmallVec<[PsiNode<'t>; 4]> {
        self.node()
            .children()
            .filter(|child| child.is_expression() || child.kind() == NodeKind::NamedArgument)
            .skip(1)
            .collect()
    }
}

impl<'t> ParenthesizedExpression<'t> {
    pub fn expression(self) -> Option<PsiNode<'t>> {
        self.node().first_expression()
    }
}

impl<'t> BlockExpression<'t> {
    pub fn expressions(self) -> SmallVec<[PsiNode<'t>; 4]> {
        self.node().expressions()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
