// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions for tree traversal.
//!
//! The walkers are kind-agnostic: they recurse through
//! [`NodeRef::children`] and [`NodeMut::into_children`], so every reachable
//! node is visited exactly once regardless of kind.
//!
//! - **Pre-order**: `visit_*` is called before descending into children
//! - **Post-order**: `leave_*` is called after all children have been visited
//! - **Field order**: children are visited in declared field order
//!
//! # Control Flow
//!
//! - `VisitResult::Continue` - traverse into children
//! - `VisitResult::SkipChildren` - skip children but still call `leave_*`
//! - `VisitResult::Stop` - halt traversal immediately (no `leave_*` called)

use super::node::{NodeMut, NodeRef};
use super::traits::{MutVisitor, VisitResult, Visitor};
use crate::nodes::{Expr, Mod, Stmt};

fn visit<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, node: NodeRef<'a>) -> VisitResult {
    match node {
        NodeRef::Mod(n) => visitor.visit_module(n),
        NodeRef::Stmt(n) => visitor.visit_stmt(n),
        NodeRef::Expr(n) => visitor.visit_expr(n),
        NodeRef::Handler(n) => visitor.visit_handler(n),
        NodeRef::Pattern(n) => visitor.visit_pattern(n),
        NodeRef::TypeParam(n) => visitor.visit_type_param(n),
        NodeRef::Arguments(n) => visitor.visit_arguments(n),
        NodeRef::Arg(n) => visitor.visit_arg(n),
        NodeRef::Keyword(n) => visitor.visit_keyword(n),
        NodeRef::Alias(n) => visitor.visit_alias(n),
        NodeRef::Comprehension(n) => visitor.visit_comprehension(n),
        NodeRef::WithItem(n) => visitor.visit_with_item(n),
        NodeRef::MatchCase(n) => visitor.visit_match_case(n),
        NodeRef::BoolOp(n) => visitor.visit_bool_op(n),
        NodeRef::Operator(n) => visitor.visit_operator(n),
        NodeRef::UnaryOp(n) => visitor.visit_unary_op(n),
        NodeRef::CmpOp(n) => visitor.visit_cmp_op(n),
    }
}

fn leave<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, node: NodeRef<'a>) {
    match node {
        NodeRef::Mod(n) => visitor.leave_module(n),
        NodeRef::Stmt(n) => visitor.leave_stmt(n),
        NodeRef::Expr(n) => visitor.leave_expr(n),
        NodeRef::Handler(n) => visitor.leave_handler(n),
        NodeRef::Pattern(n) => visitor.leave_pattern(n),
        NodeRef::TypeParam(n) => visitor.leave_type_param(n),
        NodeRef::Arguments(n) => visitor.leave_arguments(n),
        NodeRef::Arg(n) => visitor.leave_arg(n),
        NodeRef::Keyword(n) => visitor.leave_keyword(n),
        NodeRef::Alias(n) => visitor.leave_alias(n),
        NodeRef::Comprehension(n) => visitor.leave_comprehension(n),
        NodeRef::WithItem(n) => visitor.leave_with_item(n),
        NodeRef::MatchCase(n) => visitor.leave_match_case(n),
        NodeRef::BoolOp(n) => visitor.leave_bool_op(n),
        NodeRef::Operator(n) => visitor.leave_operator(n),
        NodeRef::UnaryOp(n) => visitor.leave_unary_op(n),
        NodeRef::CmpOp(n) => visitor.leave_cmp_op(n),
    }
}

/// Walk any node and its descendants.
///
/// Traversal order:
/// 1. `visit_*` for the node's family
/// 2. Walk each child in field order
/// 3. `leave_*` for the node's family
pub fn walk_node<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, node: NodeRef<'a>) -> VisitResult {
    match visit(visitor, node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for child in node.children() {
                if walk_node(visitor, child) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    leave(visitor, node);
    VisitResult::Continue
}

/// Walk a tree from its root.
pub fn walk_module<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, module: &'a Mod) -> VisitResult {
    walk_node(visitor, NodeRef::Mod(module))
}

/// Walk a statement subtree.
pub fn walk_stmt<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, stmt: &'a Stmt) -> VisitResult {
    walk_node(visitor, NodeRef::Stmt(stmt))
}

/// Walk an expression subtree.
pub fn walk_expr<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, expr: &'a Expr) -> VisitResult {
    walk_node(visitor, NodeRef::Expr(expr))
}

/// Walk a subtree through mutable handles, pre-order.
///
/// Operators have no mutable handle and are not visited.
pub fn walk_mut<V: MutVisitor + ?Sized>(visitor: &mut V, mut node: NodeMut<'_>) -> VisitResult {
    match visitor.visit_mut(&mut node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => return VisitResult::Continue,
        VisitResult::Continue => {}
    }
    for child in node.into_children() {
        if walk_mut(visitor, child) == VisitResult::Stop {
            return VisitResult::Stop;
        }
    }
    VisitResult::Continue
}
