// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statement and exception-handler nodes.

use serde::{Deserialize, Serialize};

use super::{Alias, Arguments, Expr, Keyword, MatchCase, Operator, Position, TypeParam, WithItem};

node_family! {
    /// A statement.
    ///
    /// `AsyncFunctionDef`, `AsyncFor` and `AsyncWith` share the payload of
    /// their synchronous counterparts, and `TryStar` shares the payload of
    /// `Try`; the variant alone selects the keyword that is emitted.
    pub enum Stmt {
        FunctionDef(FunctionDef),
        AsyncFunctionDef(FunctionDef),
        ClassDef(ClassDef),
        Return(Return),
        Delete(Delete),
        Assign(Assign),
        AugAssign(AugAssign),
        AnnAssign(AnnAssign),
        Print(Print),
        For(For),
        AsyncFor(For),
        While(While),
        If(If),
        With(With),
        AsyncWith(With),
        LegacyWith(LegacyWith),
        Raise(Raise),
        LegacyRaise(LegacyRaise),
        Try(Try),
        TryStar(Try),
        TryExcept(TryExcept),
        TryFinally(TryFinally),
        Assert(Assert),
        Import(Import),
        ImportFrom(ImportFrom),
        Exec(Exec),
        Match(Match),
        TypeAlias(TypeAlias),
        Global(Global),
        Nonlocal(Nonlocal),
        /// An expression evaluated for its side effects.
        Expr(ExprStmt),
        Pass(Pass),
        Break(Break),
        Continue(Continue),
    }
}

node_family! {
    /// An `except` clause.
    pub enum Handler {
        /// `except T as name:`
        ExceptHandler(ExceptHandler),
        /// `except T, target:`
        LegacyExceptHandler(LegacyExceptHandler),
    }
}

/// `def name[type_params](args) -> returns:`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub args: Arguments,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub decorator_list: Vec<Expr>,
    pub returns: Option<Expr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `class name[type_params](bases, keywords):`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    #[serde(default)]
    pub bases: Vec<Expr>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub decorator_list: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    pub value: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `del targets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    #[serde(default)]
    pub targets: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Chained assignment `t1 = t2 = value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    #[serde(default)]
    pub targets: Vec<Expr>,
    pub value: Expr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugAssign {
    pub target: Expr,
    pub op: Operator,
    pub value: Expr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Annotated assignment `target: annotation = value`.
///
/// `simple` is false when a bare name target was written in parentheses,
/// which keeps it out of the enclosing scope's annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnAssign {
    pub target: Expr,
    pub annotation: Expr,
    pub value: Option<Expr>,
    #[serde(default = "default_true")]
    pub simple: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Legacy `print >>dest, values` statement.
///
/// `nl` is false when the statement ends with a trailing comma.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Print {
    pub dest: Option<Expr>,
    #[serde(default)]
    pub values: Vec<Expr>,
    #[serde(default = "default_true")]
    pub nl: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct For {
    pub target: Expr,
    pub iter: Expr,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub orelse: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct While {
    pub test: Expr,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub orelse: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Conditional. An `elif` chain is a nested `If` as the sole `orelse`
/// statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub test: Expr,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub orelse: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `with` statement holding a list of context items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct With {
    #[serde(default)]
    pub items: Vec<WithItem>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `with` statement holding one inline context expression. Multiple
/// managers nest as further `LegacyWith` statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyWith {
    pub context_expr: Expr,
    pub optional_vars: Option<Expr>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `raise exc from cause`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raise {
    pub exc: Option<Expr>,
    pub cause: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `raise type, inst, tback`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyRaise {
    #[serde(rename = "type")]
    pub type_: Option<Expr>,
    pub inst: Option<Expr>,
    pub tback: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Unified `try` statement (also the payload of `try/except*`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Try {
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub handlers: Vec<Handler>,
    #[serde(default)]
    pub orelse: Vec<Stmt>,
    #[serde(default)]
    pub finalbody: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `try/except/else` without a `finally` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryExcept {
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub handlers: Vec<Handler>,
    #[serde(default)]
    pub orelse: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `try/finally`. A combined `try/except/finally` is a `TryFinally` whose
/// body is a single `TryExcept`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryFinally {
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub finalbody: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assert {
    pub test: Expr,
    pub msg: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    #[serde(default)]
    pub names: Vec<Alias>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `from module import names`, with `level` leading dots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFrom {
    pub module: Option<String>,
    #[serde(default)]
    pub names: Vec<Alias>,
    #[serde(default)]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl ImportFrom {
    /// Returns true for `from __future__ import ...`.
    pub fn is_future(&self) -> bool {
        self.level == 0 && self.module.as_deref() == Some("__future__")
    }
}

/// Legacy `exec body in globals, locals` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exec {
    pub body: Expr,
    pub globals: Option<Expr>,
    pub locals: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `match subject:` followed by its `case` clauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub subject: Expr,
    #[serde(default)]
    pub cases: Vec<MatchCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `type name[type_params] = value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub name: Expr,
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
    pub value: Expr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Global {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nonlocal {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Payload of [`Stmt::Expr`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub value: Expr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pass {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Break {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Continue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `except type as name:` handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptHandler {
    #[serde(rename = "type")]
    pub type_: Option<Expr>,
    pub name: Option<String>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `except type, target:` handler; the target may be any assignable
/// expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyExceptHandler {
    #[serde(rename = "type")]
    pub type_: Option<Expr>,
    pub name: Option<Expr>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Handler {
    /// Statements of the handler block.
    pub fn body(&self) -> &[Stmt] {
        match self {
            Handler::ExceptHandler(h) => &h.body,
            Handler::LegacyExceptHandler(h) => &h.body,
        }
    }

    /// The exception type expression, if any.
    pub fn type_expr(&self) -> Option<&Expr> {
        match self {
            Handler::ExceptHandler(h) => h.type_.as_ref(),
            Handler::LegacyExceptHandler(h) => h.type_.as_ref(),
        }
    }
}

impl Stmt {
    /// Returns true for `from __future__ import ...`.
    pub fn is_future_import(&self) -> bool {
        matches!(self, Stmt::ImportFrom(import) if import.is_future())
    }
}

fn default_true() -> bool {
    true
}
