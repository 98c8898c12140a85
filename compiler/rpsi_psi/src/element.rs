//! Typed views and the `Element` factory.
//!
//! Every production kind has exactly one view type. The thirteen operator
//! wrapper kinds share [`Operator`]. [`Element::cast`] matches on every
//! [`NodeKind`] without a wildcard, so a kind added to the registry without
//! a view fails to compile here.

use rpsi_ir::{NodeKind, TokenKind};

use crate::node::PsiNode;
use crate::visitor::walk_children;

macro_rules! define_elements {
    ($( $(#[$doc:meta])* $view:ident => $visit:ident, )*) => {
        $(
            $(#[$doc])*
            #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
            pub struct $view<'t>(PsiNode<'t>);

            impl<'t> $view<'t> {
                /// View `node` as this kind, if it is one.
                pub fn cast(node: PsiNode<'t>) -> Option<Self> {
                    (node.kind() == NodeKind::$view).then_some($view(node))
                }

                #[inline]
                pub fn node(self) -> PsiNode<'t> {
                    self.0
                }

                #[inline]
                pub fn text(self) -> &'t str {
                    self.0.text()
                }
            }
        )*

        /// Typed view of any node.
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        pub enum Element<'t> {
            $( $view($view<'t>), )*
            Operator(Operator<'t>),
            Token(PsiNode<'t>),
        }

        impl<'t> Element<'t> {
            /// The typed view for `node`'s kind.
            pub fn cast(node: PsiNode<'t>) -> Element<'t> {
                match node.kind() {
                    $( NodeKind::$view => Element::$view($view(node)), )*
                    NodeKind::AssignOperator
                    | NodeKind::AndOperator
                    | NodeKind::OrOperator
                    | NodeKind::NotOperator
                    | NodeKind::CompareOperator
                    | NodeKind::PlusMinusOperator
                    | NodeKind::MulDivOperator
                    | NodeKind::InfixOperator
                    | NodeKind::ColonOperator
                    | NodeKind::ExpOperator
                    | NodeKind::TildeOperator
                    | NodeKind::ListSubsetOperator
                    | NodeKind::AtOperator => Element::Operator(Operator(node)),
                    NodeKind::Token(_) => Element::Token(node),
                }
            }

            pub fn node(self) -> PsiNode<'t> {
                match self {
                    $( Element::$view(view) => view.0, )*
                    Element::Operator(operator) => operator.0,
                    Element::Token(node) => node,
                }
            }
        }

        /// Tree visitor with one method per node kind.
        ///
        /// Every method defaults to visiting the node's children, so an
        /// implementation overrides only the kinds it cares about and calls
        /// [`walk_children`] itself when it still wants to descend.
        pub trait Visitor<'t> {
            fn visit_element(&mut self, element: Element<'t>) {
                walk_element(self, element);
            }

            $(
                fn $visit(&mut self, view: $view<'t>) {
                    walk_children(self, view.node());
                }
            )*

            fn visit_operator(&mut self, operator: Operator<'t>) {
                walk_children(self, operator.node());
            }

            fn visit_token(&mut self, _token: PsiNode<'t>) {}
        }

        /// Dispatch `element` to the matching `visit_*` method.
        pub fn walk_element<'t, V: Visitor<'t> + ?Sized>(visitor: &mut V, element: Element<'t>) {
            match element {
                $( Element::$view(view) => visitor.$visit(view), )*
                Element::Operator(operator) => visitor.visit_operator(operator),
                Element::Token(token) => visitor.visit_token(token),
            }
        }
    };
}

define_elements! {
    File => visit_file,
    /// Unparseable region.
    Error => visit_error,
    EmptyExpression => visit_empty_expression,
    InvalidLiteral => visit_invalid_literal,

    AssignmentStatement => visit_assignment_statement,
    IfStatement => visit_if_statement,
    WhileStatement => visit_while_statement,
    ForStatement => visit_for_statement,
    RepeatStatement => visit_repeat_statement,
    BreakStatement => visit_break_statement,
    NextStatement => visit_next_statement,

    BlockExpression => visit_block_expression,
    HelpExpression => visit_help_expression,
    ParenthesizedExpression => visit_parenthesized_expression,
    FunctionExpression => visit_function_expression,
    ParameterList => visit_parameter_list,
    Parameter => visit_parameter,
    CallExpression => visit_call_expression,
    ArgumentList => visit_argument_list,
    NamedArgument => visit_named_argument,
    SubscriptionExpression => visit_subscription_expression,
    MemberExpression => visit_member_expression,
    AtExpression => visit_at_expression,
    NamespaceAccessExpression => visit_namespace_access_expression,
    OperatorExpression => visit_operator_expression,
    TildeExpression => visit_tilde_expression,
    UnaryTildeExpression => visit_unary_tilde_expression,
    UnaryNotExpression => visit_unary_not_expression,
    UnaryPlusMinusExpression => visit_unary_plus_minus_expression,

    IdentifierExpression => visit_identifier_expression,
    StringLiteralExpression => visit_string_literal_expression,
    NumericLiteralExpression => visit_numeric_literal_expression,
    BooleanLiteral => visit_boolean_literal,
    NullLiteral => visit_null_literal,
    NaLiteral => visit_na_literal,
    /// `Inf` or `NaN`.
    BoundaryLiteral => visit_boundary_literal,

    RoxygenComment => visit_roxygen_comment,
    RoxygenParamTag => visit_roxygen_param_tag,
    RoxygenTag => visit_roxygen_tag,
    RoxygenParameter => visit_roxygen_parameter,
    RoxygenHelpPageLink => visit_roxygen_help_page_link,
    RoxygenLinkDestination => visit_roxygen_link_destination,
    RoxygenAutolink => visit_roxygen_autolink,
    RoxygenNamespaceAccess => visit_roxygen_namespace_access,
    RoxygenIdentifier => visit_roxygen_identifier,
}

/// Operator wrapper node (`AssignOperator`, `CompareOperator`, ...).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Operator<'t>(PsiNode<'t>);

impl<'t> Operator<'t> {
    pub fn cast(node: PsiNode<'t>) -> Option<Self> {
        node.kind().is_operator().then_some(Operator(node))
    }

    #[inline]
    pub fn node(self) -> PsiNode<'t> {
        self.0
    }

    /// Operator text, e.g. `<-` or `%in%`.
    pub fn name(self) -> &'t str {
        self.0.text()
    }

    /// Kind of the operator token.
    pub fn token_kind(self) -> Option<TokenKind> {
        self.0.children().find_map(PsiNode::token_kind)
    }
}
