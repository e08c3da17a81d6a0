// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Python abstract syntax tree model, source renderer and generic traversal.
//!
//! # Overview
//!
//! - **Tree model**: [`Mod`], [`Stmt`], [`Expr`], [`Handler`], [`Pattern`] and
//!   [`TypeParam`] sum types with one struct per concrete node kind, including
//!   the legacy shapes older dialects produce (`print`, `exec`, split `try`,
//!   three-part `raise`). Integer literals are unbounded [`BigInt`]s.
//! - **Rendering**: [`SourceRenderer`] turns a tree back into source text.
//!   Binary, boolean and comparison operations are always parenthesized.
//! - **Dialects**: [`PythonVersion`] decides which node kinds a renderer
//!   accepts.
//! - **Introspection**: [`KindIndex`] classifies every [`NodeKind`] under its
//!   abstract family.
//! - **Traversal**: [`Visitor`], [`Accumulate`] and [`LocationAdjuster`] work
//!   against every node kind through [`NodeRef`] and [`NodeMut`].
//!
//! # Quick Start
//!
//! ```
//! use astkit_ast::{Expr, PythonVersion, SourceRenderer, Stmt, CmpOperator};
//!
//! let stmt = Stmt::assert(
//!     Expr::compare(Expr::int(5), CmpOperator::NotEq, Expr::int(7)),
//!     Some(Expr::str("Let's hope this assert is true")),
//! );
//! let renderer = SourceRenderer::new(PythonVersion::Permissive);
//! assert_eq!(
//!     renderer.render_stmt(&stmt).unwrap(),
//!     "assert (5 != 7), \"Let's hope this assert is true\"\n"
//! );
//! ```

// ============================================================================
// Public modules and re-exports
// ============================================================================

/// Python version abstraction for version-aware rendering.
pub mod version;
pub use version::{Availability, PythonVersion, VersionParseError, VERSION_ENV_VAR};

/// Node-kind catalogue and classification index.
pub mod kinds;
pub use kinds::{Family, IndexNode, KindIndex, NodeKind};

/// Tree model.
pub mod nodes;
pub use nodes::*;
pub use num_bigint::BigInt;

/// Source rendering.
pub mod render;
pub use render::{RenderError, RenderOptions, RenderResult, RenderState, SourceRenderer};

/// Generic traversal, accumulation and location adjustment.
pub mod visitor;
pub use visitor::{
    accumulate, adjust_location, adjust_node_location, walk_module, walk_mut, walk_node,
    Accumulate, KindCounter, LocationAdjuster, MutVisitor, NameCollector, NodeMut, NodeRef,
    VisitResult, Visitor,
};
