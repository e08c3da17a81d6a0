// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Generic pre-order folds over a tree.

use std::collections::{BTreeMap, HashSet};

use super::node::NodeRef;
use crate::kinds::NodeKind;
use crate::nodes::Expr;

/// Per-node hook of a fold.
///
/// [`accumulate`] owns the traversal; implementations only see one node at
/// a time, in pre-order, each reachable node exactly once.
pub trait Accumulate {
    /// Final result of the fold.
    type Output;

    /// Called once per node.
    fn accumulate(&mut self, node: NodeRef<'_>);

    /// Produces the result after the walk.
    fn finish(self) -> Self::Output;
}

/// Folds `acc` over the subtree rooted at `node`.
///
/// ```
/// use astkit_ast::{accumulate, Expr, KindCounter, NodeKind, Stmt};
///
/// let stmt = Stmt::assign(vec![Expr::name("a")], Expr::name("b"));
/// let counts = accumulate(&stmt, KindCounter::default());
/// assert_eq!(counts[&NodeKind::Name], 2);
/// ```
pub fn accumulate<'a, A: Accumulate>(node: impl Into<NodeRef<'a>>, mut acc: A) -> A::Output {
    fold(node.into(), &mut acc);
    acc.finish()
}

fn fold<A: Accumulate>(node: NodeRef<'_>, acc: &mut A) {
    acc.accumulate(node);
    for child in node.children() {
        fold(child, acc);
    }
}

/// Collects the identifiers of every `Name` expression, first occurrence
/// first, without duplicates.
#[derive(Debug, Default)]
pub struct NameCollector {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl Accumulate for NameCollector {
    type Output = Vec<String>;

    fn accumulate(&mut self, node: NodeRef<'_>) {
        if let NodeRef::Expr(Expr::Name(name)) = node {
            if self.seen.insert(name.id.clone()) {
                self.names.push(name.id.clone());
            }
        }
    }

    fn finish(self) -> Self::Output {
        self.names
    }
}

/// Counts nodes per kind.
#[derive(Debug, Default)]
pub struct KindCounter {
    counts: BTreeMap<NodeKind, usize>,
}

impl Accumulate for KindCounter {
    type Output = BTreeMap<NodeKind, usize>;

    fn accumulate(&mut self, node: NodeRef<'_>) {
        *self.counts.entry(node.kind()).or_insert(0) += 1;
    }

    fn finish(self) -> Self::Output {
        self.counts
    }
}
