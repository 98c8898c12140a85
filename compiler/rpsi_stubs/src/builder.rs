//! Syntax tree to stub tree.

use rpsi_ir::{NodeId, NodeKind, SyntaxTree, TreeError};
use rpsi_parse::{parse, ParseOptions};
use rpsi_psi::{AssignmentStatement, PsiNode};
use tracing::debug;

use crate::stub::{AssignmentStub, ParameterStub, StubElement, StubId, StubNode, StubTree};

/// Stubs for every named assignment in `tree`, and the parameters of the
/// function-valued ones.
///
/// Function bodies are not visited: a helper assigned inside a function is
/// local to it. The walk is iterative, so deeply nested sources cannot
/// overflow the stack.
pub fn build_stub_tree(tree: &SyntaxTree) -> StubTree {
    let mut stubs = StubTree::default();
    let mut stack: Vec<(NodeId, Option<StubId>)> = vec![(tree.root(), None)];
    while let Some((id, enclosing)) = stack.pop() {
        let node = PsiNode::new(tree, id);
        let scope = match node.kind() {
            NodeKind::FunctionExpression => continue,
            NodeKind::AssignmentStatement => AssignmentStatement::cast(node)
                .and_then(|assignment| add_assignment(&mut stubs, assignment, enclosing))
                .or(enclosing),
            _ => enclosing,
        };
        stack.extend(
            tree.children(id)
                .iter()
                .rev()
                .filter(|&&child| !tree.kind(child).is_token())
                .map(|&child| (child, scope)),
        );
    }
    debug!(stubs = stubs.len(), "built stub tree");
    stubs
}

fn add_assignment(
    stubs: &mut StubTree,
    assignment: AssignmentStatement<'_>,
    enclosing: Option<StubId>,
) -> Option<StubId> {
    let name_node = assignment.name_identifier()?;
    let is_top_level_assignment = assignment
        .node()
        .parent()
        .is_some_and(|parent| parent.kind() == NodeKind::File);
    let id = stubs.push(StubNode {
        element: StubElement::Assignment(AssignmentStub {
            name: assignment.name().to_owned(),
            is_function_declaration: assignment.is_function_declaration(),
            is_top_level_assignment,
            is_right: assignment.is_right(),
        }),
        parent: enclosing,
        span: name_node.span(),
    });
    if let Some(function) = assignment.function() {
        for parameter in function.parameters() {
            let span = parameter.variable().map_or(parameter.node().span(), PsiNode::span);
            stubs.push(StubNode {
                element: StubElement::Parameter(ParameterStub {
                    name: parameter.name().to_owned(),
                }),
                parent: Some(id),
                span,
            });
        }
    }
    Some(id)
}

/// Parse `source` and build its stubs.
pub fn stubs_for_source(source: &str, options: &ParseOptions) -> Result<StubTree, TreeError> {
    let parsed = parse(source, options)?;
    Ok(build_stub_tree(parsed.tree()))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
