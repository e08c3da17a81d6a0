// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Abstract syntax tree node types.
//!
//! Every concrete node kind is a struct; kinds are grouped into the family
//! sum types [`Mod`], [`Stmt`], [`Expr`], [`Handler`], [`Pattern`] and
//! [`TypeParam`]. Legacy and modern
//! shapes of the same construct are distinct variants with their own field
//! sets, never one variant with optional fields.
//!
//! All nodes serialize to JSON internally tagged by `"kind"` using the
//! grammar names from [`NodeKind`](crate::NodeKind).

use serde::{Deserialize, Serialize};

/// Source position carried by positioned nodes.
///
/// Only the location-adjustment transform reads or writes positions; the
/// renderer ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    pub lineno: u32,
    /// 0-based column offset.
    pub col_offset: u32,
}

impl Position {
    pub fn new(lineno: u32, col_offset: u32) -> Self {
        Self { lineno, col_offset }
    }
}

/// Declares a family sum type whose variant names match [`NodeKind`]
/// variants, and derives `kind()`, `position()` and `position_mut()` for it.
///
/// [`NodeKind`]: crate::NodeKind
macro_rules! node_family {
    (
        $(#[$meta:meta])*
        pub enum $family:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($node:ty)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(tag = "kind")]
        pub enum $family {
            $(
                $(#[$vmeta])*
                $variant($node),
            )*
        }

        impl $family {
            /// Concrete kind of this node.
            pub fn kind(&self) -> $crate::kinds::NodeKind {
                match self {
                    $($family::$variant(_) => $crate::kinds::NodeKind::$variant,)*
                }
            }

            /// Source position, if recorded.
            pub fn position(&self) -> Option<$crate::nodes::Position> {
                match self {
                    $($family::$variant(node) => node.position,)*
                }
            }

            /// Mutable access to the source position.
            pub fn position_mut(&mut self) -> &mut Option<$crate::nodes::Position> {
                match self {
                    $($family::$variant(node) => &mut node.position,)*
                }
            }
        }
    };
}

mod build;
mod expression;
mod module;
mod op;
mod pattern;
mod statement;

pub use expression::*;
pub use module::*;
pub use op::*;
pub use pattern::*;
pub use statement::*;
