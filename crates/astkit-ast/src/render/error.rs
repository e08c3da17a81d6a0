// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::kinds::NodeKind;
use crate::version::PythonVersion;

/// Failure to render a tree. Rendering never returns partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The node kind does not exist in the renderer's dialect.
    #[error("no render rule for node kind '{kind}' under Python {version}")]
    UnsupportedKind {
        kind: NodeKind,
        version: PythonVersion,
    },

    /// The node's fields do not form a valid instance of its kind.
    #[error("malformed '{kind}' node: {reason}")]
    MalformedNode { kind: NodeKind, reason: String },
}

impl RenderError {
    pub(crate) fn malformed(kind: NodeKind, reason: impl Into<String>) -> Self {
        RenderError::MalformedNode {
            kind,
            reason: reason.into(),
        }
    }

    /// Kind of the node that failed to render.
    pub fn kind(&self) -> NodeKind {
        match self {
            RenderError::UnsupportedKind { kind, .. } | RenderError::MalformedNode { kind, .. } => {
                *kind
            }
        }
    }
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
