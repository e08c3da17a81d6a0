// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for tree traversal.
//!
//! This module provides traits and utilities for walking and rewriting trees
//! without writing one function per node kind. Kind-agnostic handles
//! ([`NodeRef`], [`NodeMut`]) expose each node's children in declared field
//! order; the walkers recurse through them.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order** for `visit_*` methods
//! - **Post-order** for `leave_*` methods
//! - Children are visited in field order
//!
//! # Visitor Pattern
//!
//! The [`Visitor`] trait provides read-only traversal with per-family hooks.
//! [`Accumulate`] is a simpler fold with a single per-node hook, and
//! [`MutVisitor`] rewrites nodes in place; [`LocationAdjuster`] is built on
//! it.

mod accumulate;
mod dispatch;
mod location;
mod node;
mod traits;

pub use accumulate::{accumulate, Accumulate, KindCounter, NameCollector};
pub use dispatch::{walk_expr, walk_module, walk_mut, walk_node, walk_stmt};
pub use location::{adjust_location, adjust_node_location, LocationAdjuster};
pub use node::{NodeMut, NodeRef};
pub use traits::{MutVisitor, VisitResult, Visitor};
