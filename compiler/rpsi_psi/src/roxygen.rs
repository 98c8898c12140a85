//! Roxygen doc-comment views.

use rpsi_ir::NodeKind;
use smallvec::SmallVec;

use crate::element::{
    RoxygenAutolink, RoxygenComment, RoxygenHelpPageLink, RoxygenParamTag, RoxygenParameter,
    RoxygenTag,
};
use crate::node::PsiNode;

impl<'t> RoxygenComment<'t> {
    /// Every `@param` tag, in order.
    pub fn param_tags(self) -> impl Iterator<Item = RoxygenParamTag<'t>> + 't {
        self.node().children().filter_map(RoxygenParamTag::cast)
    }

    /// Tags other than `@param`.
    pub fn tags(self) -> impl Iterator<Item = RoxygenTag<'t>> + 't {
        self.node().children().filter_map(RoxygenTag::cast)
    }

    /// Names documented by `@param`, across all tags.
    pub fn documented_parameters(self) -> Vec<&'t str> {
        self.param_tags()
            .flat_map(|tag| tag.parameters().into_iter().map(RoxygenParameter::name))
            .collect()
    }
}

impl<'t> RoxygenParamTag<'t> {
    pub fn parameters(self) -> SmallVec<[RoxygenParameter<'t>; 4]> {
        self.node().children().filter_map(RoxygenParameter::cast).collect()
    }
}

impl<'t> RoxygenParameter<'t> {
    pub fn name(self) -> &'t str {
        self.text().trim_matches('`')
    }
}

impl<'t> RoxygenTag<'t> {
    /// Tag name without the `@`.
    pub fn name(self) -> &'t str {
        self.text().trim_start_matches('@')
    }
}

impl<'t> RoxygenHelpPageLink<'t> {
    /// Package of a `[pkg::topic]` link.
    pub fn package(self) -> Option<&'t str> {
        let access = self.node().child_of_kind(NodeKind::RoxygenNamespaceAccess)?;
        access
            .child_of_kind(NodeKind::RoxygenIdentifier)
            .map(PsiNode::text)
    }

    /// Linked topic.
    pub fn topic(self) -> Option<&'t str> {
        let holder = self
            .node()
            .child_of_kind(NodeKind::RoxygenNamespaceAccess)
            .unwrap_or(self.node());
        holder
            .children()
            .rev()
            .find(|child| child.kind() == NodeKind::RoxygenIdentifier)
            .map(PsiNode::text)
    }
}

impl<'t> RoxygenAutolink<'t> {
    pub fn uri(self) -> Option<&'t str> {
        self.node()
            .token(rpsi_ir::TokenKind::DocAutolinkUri)
            .map(PsiNode::text)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
