// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definitions for tree traversal.

use super::node::NodeMut;
use crate::nodes::{
    Alias, Arg, Arguments, BoolOperator, CmpOperator, Comprehension, Expr, Handler, Keyword,
    MatchCase, Mod, Operator, Pattern, Stmt, TypeParam, UnaryOperator, WithItem,
};

/// Result of visiting a node - controls traversal behavior.
///
/// When a visitor method returns a `VisitResult`, it controls how the walker
/// proceeds with traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    ///
    /// After visiting children, `leave_*` will be called for this node.
    #[default]
    Continue,

    /// Skip children, continue with siblings.
    ///
    /// The walker will not descend into this node's children, but `leave_*`
    /// will still be called for this node.
    SkipChildren,

    /// Stop traversal entirely.
    ///
    /// No further `visit_*` or `leave_*` methods will be called. The walk
    /// function will return immediately.
    Stop,
}

/// Macro to generate visitor trait method signatures.
///
/// This macro generates pairs of `visit_*` and `leave_*` methods with default
/// implementations that return `VisitResult::Continue` and do nothing, respectively.
///
/// # Usage
///
/// ```ignore
/// visitor_methods! {
///     // Generates visit_stmt and leave_stmt for Stmt
///     stmt: Stmt,
/// }
/// ```
macro_rules! visitor_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Visit a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called before descending into children. Return `VisitResult` to control traversal."]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: &'a $node_type) -> VisitResult {
                    VisitResult::Continue
                }

                $(#[$meta])*
                #[doc = concat!("Leave a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called after all children have been visited. Called even if `SkipChildren` was returned."]
                #[allow(unused_variables)]
                fn [<leave_ $base_name>](&mut self, node: &'a $node_type) {}
            )*
        }
    };
}

/// Read-only traversal with one `visit_*`/`leave_*` pair per node family.
///
/// Statement and expression kinds are dispatched at family granularity;
/// implementations match on the node to select kinds of interest.
///
/// ```
/// use astkit_ast::{walk_module, Expr, Mod, Stmt, VisitResult, Visitor};
///
/// struct NameCounter {
///     count: usize,
/// }
///
/// impl<'a> Visitor<'a> for NameCounter {
///     fn visit_expr(&mut self, node: &'a Expr) -> VisitResult {
///         if matches!(node, Expr::Name(_)) {
///             self.count += 1;
///         }
///         VisitResult::Continue
///     }
/// }
///
/// let module = Mod::module(vec![Stmt::assign(vec![Expr::name("a")], Expr::name("b"))]);
/// let mut counter = NameCounter { count: 0 };
/// walk_module(&mut counter, &module);
/// assert_eq!(counter.count, 2);
/// ```
pub trait Visitor<'a> {
    visitor_methods! {
        module: Mod,
        stmt: Stmt,
        expr: Expr,
        handler: Handler,
        pattern: Pattern,
        type_param: TypeParam,
        arguments: Arguments,
        arg: Arg,
        keyword: Keyword,
        alias: Alias,
        comprehension: Comprehension,
        with_item: WithItem,
        match_case: MatchCase,
        bool_op: BoolOperator,
        operator: Operator,
        unary_op: UnaryOperator,
        cmp_op: CmpOperator,
    }
}

/// In-place traversal over mutable node handles.
///
/// [`walk_mut`](super::walk_mut) calls `visit_mut` on a node before
/// descending into its children.
pub trait MutVisitor {
    /// Visit one node. Returning `SkipChildren` leaves the subtree untouched;
    /// `Stop` ends the walk.
    fn visit_mut(&mut self, node: &mut NodeMut<'_>) -> VisitResult;
}
