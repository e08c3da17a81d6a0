// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

use super::{Expr, Stmt};
use crate::kinds::NodeKind;

/// A module parsed from a file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Module {
    pub body: Vec<Stmt>,
}

/// Input from the interactive prompt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interactive {
    pub body: Vec<Stmt>,
}

/// A single expression evaluated in `eval` mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub body: Box<Expr>,
}

/// Statement sequence used by older dialects for code fragments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Suite {
    pub body: Vec<Stmt>,
}

/// Root node of a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Mod {
    Module(Module),
    Interactive(Interactive),
    Expression(Expression),
    Suite(Suite),
}

impl Mod {
    /// Builds a `Module` root from a statement list.
    pub fn module(body: Vec<Stmt>) -> Self {
        Mod::Module(Module { body })
    }

    /// Concrete kind of this root.
    pub fn kind(&self) -> NodeKind {
        match self {
            Mod::Module(_) => NodeKind::Module,
            Mod::Interactive(_) => NodeKind::Interactive,
            Mod::Expression(_) => NodeKind::Expression,
            Mod::Suite(_) => NodeKind::Suite,
        }
    }

    /// Statement body, for the statement-carrying roots.
    pub fn body(&self) -> Option<&[Stmt]> {
        match self {
            Mod::Module(m) => Some(&m.body),
            Mod::Interactive(m) => Some(&m.body),
            Mod::Suite(m) => Some(&m.body),
            Mod::Expression(_) => None,
        }
    }
}
