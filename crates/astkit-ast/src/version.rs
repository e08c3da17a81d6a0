// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Python dialect abstraction for version-aware rendering.
//!
//! The syntax tree grammar changed shape across Python releases: the `print`
//! and `exec` statements disappeared in 3.0, `try` statements were unified in
//! 3.3, literal nodes collapsed into `Constant` in 3.8, `match` statements
//! arrived in 3.10 and type parameters in 3.12, and so on. Every
//! [`NodeKind`] declares the range of versions in which it exists, and
//! [`PythonVersion`] answers membership queries against that table.
//!
//! A renderer resolves its version once at construction time, either
//! explicitly or through [`PythonVersion::detect`]. It never changes while a
//! tree is being rendered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kinds::NodeKind;

/// Environment variable consulted by [`PythonVersion::detect`].
pub const VERSION_ENV_VAR: &str = "ASTKIT_PYTHON_VERSION";

/// Target Python language version for rendering.
///
/// # Example
///
/// ```
/// use astkit_ast::{NodeKind, PythonVersion};
///
/// assert!(PythonVersion::V2_7.supports(NodeKind::Print));
/// assert!(!PythonVersion::V3_12.supports(NodeKind::Print));
/// assert!(PythonVersion::Permissive.supports(NodeKind::Print));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PythonVersion {
    /// Accept every node kind the tree model defines.
    ///
    /// This is the default mode. Legacy and modern shapes may be mixed in a
    /// single tree; each still renders through its own rule.
    #[default]
    Permissive,

    /// A specific language version (e.g., 2.7 or 3.12).
    V {
        /// Major version number.
        major: u8,
        /// Minor version number.
        minor: u8,
    },
}

impl PythonVersion {
    /// Python 2.7 - the last release with `print`/`exec` statements.
    pub const V2_7: Self = Self::V { major: 2, minor: 7 };

    /// Python 3.0 - `raise ... from`, `except ... as`, `nonlocal`.
    pub const V3_0: Self = Self::V { major: 3, minor: 0 };

    /// Python 3.3 - unified `Try`, `with` items, `yield from`.
    pub const V3_3: Self = Self::V { major: 3, minor: 3 };

    /// Python 3.5 - `async`/`await`, matrix multiplication.
    pub const V3_5: Self = Self::V { major: 3, minor: 5 };

    /// Python 3.8 - `Constant` literals, assignment expressions.
    pub const V3_8: Self = Self::V { major: 3, minor: 8 };

    /// Python 3.9 - subscripts take plain expressions.
    pub const V3_9: Self = Self::V { major: 3, minor: 9 };

    /// Python 3.10 - structural pattern matching (`match`).
    pub const V3_10: Self = Self::V {
        major: 3,
        minor: 10,
    };

    /// Python 3.11 - exception groups (`except*`).
    pub const V3_11: Self = Self::V {
        major: 3,
        minor: 11,
    };

    /// Python 3.12 - type parameters and `type` aliases.
    pub const V3_12: Self = Self::V {
        major: 3,
        minor: 12,
    };

    /// Returns whether `kind` exists in this version's grammar.
    #[must_use]
    pub fn supports(self, kind: NodeKind) -> bool {
        match self {
            Self::Permissive => true,
            Self::V { major, minor } => kind.availability().contains(major, minor),
        }
    }

    /// Returns whether the `print` statement is available.
    #[must_use]
    pub fn has_print_statement(self) -> bool {
        self.supports(NodeKind::Print)
    }

    /// Returns whether the unified `try` statement (one node for
    /// `try/except/else/finally`) is available.
    #[must_use]
    pub fn has_unified_try(self) -> bool {
        self.supports(NodeKind::Try)
    }

    /// Returns whether `with` statements carry a list of items.
    #[must_use]
    pub fn has_with_items(self) -> bool {
        self.supports(NodeKind::With)
    }

    /// Returns whether literals are represented by `Constant` nodes.
    #[must_use]
    pub fn has_constant_literals(self) -> bool {
        self.supports(NodeKind::Constant)
    }

    /// Returns whether exception groups (`except*`) are supported.
    #[must_use]
    pub fn has_exception_groups(self) -> bool {
        self.supports(NodeKind::TryStar)
    }

    /// Returns whether `match` statements are supported.
    #[must_use]
    pub fn has_pattern_matching(self) -> bool {
        self.supports(NodeKind::Match)
    }

    /// Returns whether generic definitions and `type` aliases are supported.
    #[must_use]
    pub fn has_type_params(self) -> bool {
        self.supports(NodeKind::TypeAlias)
    }

    /// Returns whether replacement fields of f-strings may contain
    /// backslashes.
    #[must_use]
    pub fn allows_fstring_backslash(self) -> bool {
        match self {
            Self::Permissive => true,
            Self::V { major, minor } => (major, minor) >= (3, 12),
        }
    }

    /// Returns whether this is the permissive mode.
    #[must_use]
    pub fn is_permissive(self) -> bool {
        matches!(self, Self::Permissive)
    }

    /// Returns the major and minor version numbers, if this is a specific version.
    #[must_use]
    pub fn version_tuple(self) -> Option<(u8, u8)> {
        match self {
            Self::Permissive => None,
            Self::V { major, minor } => Some((major, minor)),
        }
    }

    /// Parses `"permissive"` or `"<major>.<minor>"`.
    pub fn parse(s: &str) -> Result<Self, VersionParseError> {
        s.parse()
    }

    /// Resolves the version from the host environment.
    ///
    /// Reads [`VERSION_ENV_VAR`]; an unset or unparsable value yields
    /// [`PythonVersion::Permissive`].
    pub fn detect() -> Self {
        match std::env::var(VERSION_ENV_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!("ignoring {}: {}", VERSION_ENV_VAR, err);
                Self::Permissive
            }),
            Err(_) => Self::Permissive,
        }
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::V { major, minor } => write!(f, "{}.{}", major, minor),
        }
    }
}

/// Error returned when a version string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid Python version '{0}', expected 'permissive' or '<major>.<minor>'")]
pub struct VersionParseError(pub String);

impl FromStr for PythonVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("permissive") {
            return Ok(Self::Permissive);
        }
        let (major, minor) = trimmed
            .split_once('.')
            .ok_or_else(|| VersionParseError(s.to_string()))?;
        let major: u8 = major.parse().map_err(|_| VersionParseError(s.to_string()))?;
        let minor: u8 = minor.parse().map_err(|_| VersionParseError(s.to_string()))?;
        if !(2..=3).contains(&major) {
            return Err(VersionParseError(s.to_string()));
        }
        Ok(Self::V { major, minor })
    }
}

impl TryFrom<String> for PythonVersion {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PythonVersion> for String {
    fn from(value: PythonVersion) -> Self {
        value.to_string()
    }
}

/// Half-open range of versions `[since, until)` in which a node kind exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Availability {
    /// First version containing the kind.
    pub since: (u8, u8),
    /// First version no longer containing the kind, if it was removed.
    pub until: Option<(u8, u8)>,
}

impl Availability {
    pub(crate) const fn new(since: (u8, u8), until: Option<(u8, u8)>) -> Self {
        Self { since, until }
    }

    /// Returns whether version `major.minor` falls inside this range.
    #[must_use]
    pub fn contains(&self, major: u8, minor: u8) -> bool {
        let v = (major, minor);
        v >= self.since && self.until.map_or(true, |until| v < until)
    }
}
