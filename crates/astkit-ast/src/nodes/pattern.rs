// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Structural pattern matching and type parameter nodes.

use serde::{Deserialize, Serialize};

use super::{Expr, Position, Singleton, Stmt};

node_family! {
    /// A pattern of a `case` clause.
    pub enum Pattern {
        MatchValue(MatchValue),
        MatchSingleton(MatchSingleton),
        MatchSequence(MatchSequence),
        MatchMapping(MatchMapping),
        MatchClass(MatchClass),
        MatchStar(MatchStar),
        MatchAs(MatchAs),
        MatchOr(MatchOr),
    }
}

node_family! {
    /// A type parameter of a generic function, class or `type` alias.
    pub enum TypeParam {
        /// `T` or `T: bound`
        TypeVar(TypeVar),
        /// `**P`
        ParamSpec(ParamSpec),
        /// `*Ts`
        TypeVarTuple(TypeVarTuple),
    }
}

/// Literal or dotted-name value compared by equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchValue {
    pub value: Expr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `None`, `True` or `False`, compared by identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSingleton {
    pub value: Singleton,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `[p1, p2, *rest]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSequence {
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `{key: pattern, **rest}`; `keys` and `patterns` are parallel lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchMapping {
    #[serde(default)]
    pub keys: Vec<Expr>,
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    pub rest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `Cls(p1, attr=p2)`; `kwd_attrs` and `kwd_patterns` are parallel lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchClass {
    pub cls: Expr,
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    #[serde(default)]
    pub kwd_attrs: Vec<String>,
    #[serde(default)]
    pub kwd_patterns: Vec<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `*name` inside a sequence pattern; `None` is the wildcard `*_`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchStar {
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `pattern as name`, a bare capture `name`, or the wildcard `_` when both
/// are absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchAs {
    pub pattern: Option<Box<Pattern>>,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `p1 | p2 | ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOr {
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// One `case pattern if guard:` clause of a `match` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCase {
    pub pattern: Pattern,
    pub guard: Option<Expr>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeVar {
    pub name: String,
    pub bound: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeVarTuple {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl TypeParam {
    /// Name the parameter binds.
    pub fn name(&self) -> &str {
        match self {
            TypeParam::TypeVar(p) => &p.name,
            TypeParam::ParamSpec(p) => &p.name,
            TypeParam::TypeVarTuple(p) => &p.name,
        }
    }
}
