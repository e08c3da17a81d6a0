// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Position shifting for splicing a subtree into a larger file.

use super::dispatch::walk_mut;
use super::node::NodeMut;
use super::traits::{MutVisitor, VisitResult};
use crate::nodes::Mod;

/// Adds a fixed line and column offset to every positioned node.
///
/// Nodes without a recorded position are left alone; structure and all
/// other fields are untouched. Offsets saturate at `u32::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationAdjuster {
    pub lineno: u32,
    pub col_offset: u32,
    adjusted: usize,
}

impl LocationAdjuster {
    pub fn new(lineno: u32, col_offset: u32) -> Self {
        Self {
            lineno,
            col_offset,
            adjusted: 0,
        }
    }

    /// Number of positions shifted so far.
    pub fn adjusted(&self) -> usize {
        self.adjusted
    }
}

impl MutVisitor for LocationAdjuster {
    fn visit_mut(&mut self, node: &mut NodeMut<'_>) -> VisitResult {
        if let Some(Some(position)) = node.position_mut() {
            position.lineno = position.lineno.saturating_add(self.lineno);
            position.col_offset = position.col_offset.saturating_add(self.col_offset);
            self.adjusted += 1;
        }
        VisitResult::Continue
    }
}

/// Shifts every position in the subtree rooted at `node`; returns the
/// number of positions changed.
pub fn adjust_node_location<'a>(
    node: impl Into<NodeMut<'a>>,
    lineno: u32,
    col_offset: u32,
) -> usize {
    let mut adjuster = LocationAdjuster::new(lineno, col_offset);
    walk_mut(&mut adjuster, node.into());
    tracing::trace!(
        "shifted {} positions by ({}, {})",
        adjuster.adjusted,
        lineno,
        col_offset
    );
    adjuster.adjusted
}

/// Shifts every position in a whole tree.
pub fn adjust_location(module: &mut Mod, lineno: u32, col_offset: u32) -> usize {
    adjust_node_location(module, lineno, col_offset)
}
