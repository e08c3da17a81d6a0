// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Source rendering.
//!
//! [`SourceRenderer`] converts a tree back into source text. Statement kinds
//! append indented lines to a [`RenderState`]; expression kinds return a
//! fragment that their parent composes. Every node kind has exactly one rule,
//! selected by an exhaustive match on the family sum types.
//!
//! The renderer itself holds only configuration. Each top-level call creates
//! a fresh [`RenderState`], so one renderer may serve any number of calls,
//! including from several threads.
//!
//! Binary, boolean and comparison operations are always parenthesized, as
//! are unary operations, conditional expressions, lambdas and the
//! `await`/`yield`/`:=` forms. The output is therefore independent of
//! operator precedence.

mod error;
mod expression;
mod literal;
mod pattern;
mod state;
mod statement;

pub use error::{RenderError, RenderResult};
pub use literal::{
    bytes_repr, complex_repr, constant_repr, docstring_literal, float_repr, number_repr, str_repr,
};
pub use state::RenderState;

use crate::kinds::NodeKind;
use crate::nodes::{Mod, Stmt};
use crate::version::PythonVersion;
use crate::visitor::NodeRef;
use crate::Expr;

/// Default number of spaces per block level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Renderer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Dialect whose node kinds the renderer accepts.
    pub version: PythonVersion,
    /// Spaces per block level.
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            version: PythonVersion::Permissive,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl RenderOptions {
    pub fn new(version: PythonVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}

/// Converts trees into source text.
#[derive(Debug, Clone, Default)]
pub struct SourceRenderer {
    options: RenderOptions,
}

impl SourceRenderer {
    /// Creates a renderer for `version` with default options.
    pub fn new(version: PythonVersion) -> Self {
        Self::with_options(RenderOptions::new(version))
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Creates a renderer for the dialect named by the host environment.
    pub fn detect() -> Self {
        Self::new(PythonVersion::detect())
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn version(&self) -> PythonVersion {
        self.options.version
    }

    /// Creates an empty state using this renderer's indentation.
    pub fn new_state(&self) -> RenderState {
        RenderState::new(self.options.indent_width)
    }

    /// Renders a whole tree.
    ///
    /// A module's leading docstring is kept first and its
    /// `from __future__` imports are moved up to follow it.
    pub fn render_module(&self, module: &Mod) -> RenderResult<String> {
        tracing::debug!(
            "rendering {} ({} statements) for Python {}",
            module.kind(),
            module.body().map_or(0, <[Stmt]>::len),
            self.options.version
        );
        let mut state = self.new_state();
        self.module(module, &mut state)?;
        Ok(state.into_string())
    }

    /// Renders one statement (and its nested blocks) at block level zero.
    pub fn render_stmt(&self, stmt: &Stmt) -> RenderResult<String> {
        let mut state = self.new_state();
        self.stmt(stmt, &mut state)?;
        Ok(state.into_string())
    }

    /// Renders one statement into an existing state, at its current level.
    pub fn render_stmt_into(&self, stmt: &Stmt, state: &mut RenderState) -> RenderResult<()> {
        self.stmt(stmt, state)
    }

    /// Renders an expression fragment (no indentation, no newline).
    pub fn render_expr(&self, expr: &Expr) -> RenderResult<String> {
        self.expr(expr)
    }

    /// Renders any node.
    ///
    /// Roots, statements, handlers and `case` clauses produce
    /// newline-terminated lines; every other kind produces its fragment. A
    /// comprehension clause produces its `for`/`if` lines joined by newlines.
    pub fn render_node(&self, node: NodeRef<'_>) -> RenderResult<String> {
        match node {
            NodeRef::Mod(module) => self.render_module(module),
            NodeRef::Stmt(stmt) => self.render_stmt(stmt),
            NodeRef::Expr(expr) => self.render_expr(expr),
            NodeRef::Handler(handler) => {
                let mut state = self.new_state();
                self.handler(handler, false, &mut state)?;
                Ok(state.into_string())
            }
            NodeRef::Arguments(args) => self.arguments(args, true),
            NodeRef::Arg(arg) => self.arg(arg, true),
            NodeRef::Keyword(keyword) => self.keyword(keyword),
            NodeRef::Alias(alias) => self.alias(alias),
            NodeRef::Comprehension(comp) => Ok(self.comprehension(comp)?.join("\n")),
            NodeRef::WithItem(item) => self.with_item(item),
            NodeRef::Pattern(pattern) => self.pattern(pattern),
            NodeRef::TypeParam(param) => self.type_param(param),
            NodeRef::MatchCase(case) => {
                let mut state = self.new_state();
                self.match_case(case, &mut state)?;
                Ok(state.into_string())
            }
            NodeRef::BoolOp(op) => self.token(op.kind(), op.as_str()),
            NodeRef::Operator(op) => self.token(op.kind(), op.as_str()),
            NodeRef::UnaryOp(op) => self.token(op.kind(), op.as_str()),
            NodeRef::CmpOp(op) => self.token(op.kind(), op.as_str()),
        }
    }

    /// Fails unless `kind` exists in the configured dialect.
    pub(crate) fn check(&self, kind: NodeKind) -> RenderResult<()> {
        if self.options.version.supports(kind) {
            Ok(())
        } else {
            tracing::debug!(
                "node kind {} is not available in Python {}",
                kind,
                self.options.version
            );
            Err(RenderError::UnsupportedKind {
                kind,
                version: self.options.version,
            })
        }
    }

    fn token(&self, kind: NodeKind, token: &'static str) -> RenderResult<String> {
        self.check(kind)?;
        Ok(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::*;

    #[test]
    fn test_render_node_fragments() {
        let renderer = SourceRenderer::default();
        let keyword = Keyword::new("c", Expr::str("c"));
        assert_eq!(renderer.render_node(NodeRef::Keyword(&keyword)).unwrap(), "c='c'");

        let alias = Alias::with_asname("steve", "todd");
        assert_eq!(
            renderer.render_node(NodeRef::Alias(&alias)).unwrap(),
            "steve as todd"
        );

        assert_eq!(
            renderer.render_node(NodeRef::CmpOp(&CmpOperator::IsNot)).unwrap(),
            "is not"
        );
    }

    #[test]
    fn test_render_node_statement_lines() {
        let renderer = SourceRenderer::default();
        let stmt = Stmt::pass();
        assert_eq!(renderer.render_node(NodeRef::Stmt(&stmt)).unwrap(), "pass\n");
    }

    #[test]
    fn test_operator_rejected_by_dialect() {
        let renderer = SourceRenderer::new(PythonVersion::V2_7);
        let err = renderer
            .render_node(NodeRef::Operator(&Operator::MatMult))
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::UnsupportedKind {
                kind: NodeKind::MatMult,
                version: PythonVersion::V2_7
            }
        );
    }

    #[test]
    fn test_indent_width_option() {
        let renderer =
            SourceRenderer::with_options(RenderOptions::default().with_indent_width(2));
        let stmt = Stmt::while_(Expr::name("x"), vec![Stmt::pass()]);
        assert_eq!(renderer.render_stmt(&stmt).unwrap(), "while x:\n  pass\n");
    }

    #[test]
    fn test_render_stmt_into_uses_current_level() {
        let renderer = SourceRenderer::default();
        let mut state = renderer.new_state();
        state
            .block(|s| renderer.render_stmt_into(&Stmt::pass(), s))
            .unwrap();
        assert_eq!(state.into_string(), "    pass\n");
    }
}
