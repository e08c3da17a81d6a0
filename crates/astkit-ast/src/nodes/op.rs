// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Operator nodes.
//!
//! Each operator enum maps one-to-one onto its textual token through
//! `as_str()`. The mapping is exhaustive over every dialect.

use serde::{Deserialize, Serialize};

use crate::kinds::NodeKind;

/// Generates an operator enum with its token table and kind mapping.
macro_rules! operators {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $token:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = concat!("`", $token, "`")]
                $variant,
            )*
        }

        impl $name {
            /// Every operator of this family.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// The operator's source token.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)*
                }
            }

            /// The operator's node kind.
            pub fn kind(self) -> NodeKind {
                match self {
                    $($name::$variant => NodeKind::$variant,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operators! {
    /// Boolean chain operator.
    pub enum BoolOperator {
        And => "and",
        Or => "or",
    }
}

operators! {
    /// Binary arithmetic or bitwise operator.
    pub enum Operator {
        Add => "+",
        Sub => "-",
        Mult => "*",
        MatMult => "@",
        Div => "/",
        Mod => "%",
        Pow => "**",
        LShift => "<<",
        RShift => ">>",
        BitOr => "|",
        BitXor => "^",
        BitAnd => "&",
        FloorDiv => "//",
    }
}

operators! {
    /// Unary operator.
    pub enum UnaryOperator {
        Invert => "~",
        Not => "not",
        UAdd => "+",
        USub => "-",
    }
}

operators! {
    /// Comparison operator.
    pub enum CmpOperator {
        Eq => "==",
        NotEq => "!=",
        Lt => "<",
        LtE => "<=",
        Gt => ">",
        GtE => ">=",
        Is => "is",
        IsNot => "is not",
        In => "in",
        NotIn => "not in",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{Family, NodeKind};

    #[test]
    fn test_operator_tables_cover_every_operator_kind() {
        let mut covered: Vec<NodeKind> = Vec::new();
        covered.extend(BoolOperator::ALL.iter().map(|op| op.kind()));
        covered.extend(Operator::ALL.iter().map(|op| op.kind()));
        covered.extend(UnaryOperator::ALL.iter().map(|op| op.kind()));
        covered.extend(CmpOperator::ALL.iter().map(|op| op.kind()));

        let expected: Vec<NodeKind> = NodeKind::ALL
            .iter()
            .copied()
            .filter(|kind| kind.is_operator())
            .collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn test_operator_families() {
        assert!(BoolOperator::ALL.iter().all(|op| op.kind().family() == Family::BoolOp));
        assert!(Operator::ALL.iter().all(|op| op.kind().family() == Family::Operator));
        assert!(UnaryOperator::ALL.iter().all(|op| op.kind().family() == Family::UnaryOp));
        assert!(CmpOperator::ALL.iter().all(|op| op.kind().family() == Family::CmpOp));
    }

    #[test]
    fn test_operator_tokens() {
        assert_eq!(Operator::FloorDiv.as_str(), "//");
        assert_eq!(Operator::MatMult.to_string(), "@");
        assert_eq!(CmpOperator::IsNot.as_str(), "is not");
        assert_eq!(CmpOperator::NotIn.as_str(), "not in");
        assert_eq!(UnaryOperator::Not.as_str(), "not");
        assert_eq!(BoolOperator::Or.as_str(), "or");
    }

    #[test]
    fn test_operator_serde_names() {
        let op: Operator = serde_json::from_str("\"LShift\"").unwrap();
        assert_eq!(op, Operator::LShift);
        assert_eq!(serde_json::to_string(&CmpOperator::GtE).unwrap(), "\"GtE\"");
    }
}
