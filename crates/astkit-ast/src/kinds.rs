// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Node-kind catalogue and the classification index built from it.
//!
//! [`NodeKind`] enumerates every concrete node kind the tree model defines,
//! together with its abstract family, declared field names and the range of
//! Python versions in which it exists. The table below is the single source
//! of truth: the tree model, the renderer and the traversal all match on the
//! same enumeration, so adding a kind without a render rule fails to compile.
//!
//! [`KindIndex`] arranges the kinds available in one dialect into a tree
//! rooted at `AST`, with one internal node per abstract family and one leaf
//! per concrete kind.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::{Availability, PythonVersion};

/// Name of the root of the classification tree.
pub const ROOT_NAME: &str = "AST";

/// Abstract grouping of node kinds.
///
/// The first eleven families are abstract in the grammar and appear as
/// internal nodes of a [`KindIndex`]. The remaining ones each hold a single
/// concrete helper kind that hangs directly off the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Mod,
    Stmt,
    Expr,
    Slice,
    BoolOp,
    Operator,
    UnaryOp,
    CmpOp,
    ExceptHandler,
    Pattern,
    TypeParam,
    Comprehension,
    Arguments,
    Arg,
    Keyword,
    Alias,
    WithItem,
    MatchCase,
}

impl Family {
    /// All families, in index order.
    pub const ALL: &'static [Family] = &[
        Family::Mod,
        Family::Stmt,
        Family::Expr,
        Family::Slice,
        Family::BoolOp,
        Family::Operator,
        Family::UnaryOp,
        Family::CmpOp,
        Family::ExceptHandler,
        Family::Pattern,
        Family::TypeParam,
        Family::Comprehension,
        Family::Arguments,
        Family::Arg,
        Family::Keyword,
        Family::Alias,
        Family::WithItem,
        Family::MatchCase,
    ];

    /// Grammar name of the family.
    pub fn name(self) -> &'static str {
        match self {
            Family::Mod => "mod",
            Family::Stmt => "stmt",
            Family::Expr => "expr",
            Family::Slice => "slice",
            Family::BoolOp => "boolop",
            Family::Operator => "operator",
            Family::UnaryOp => "unaryop",
            Family::CmpOp => "cmpop",
            Family::ExceptHandler => "excepthandler",
            Family::Pattern => "pattern",
            Family::TypeParam => "type_param",
            Family::Comprehension => "comprehension",
            Family::Arguments => "arguments",
            Family::Arg => "arg",
            Family::Keyword => "keyword",
            Family::Alias => "alias",
            Family::WithItem => "withitem",
            Family::MatchCase => "match_case",
        }
    }

    /// Returns true for families that group several kinds under an abstract
    /// super-kind.
    pub fn is_abstract(self) -> bool {
        matches!(
            self,
            Family::Mod
                | Family::Stmt
                | Family::Expr
                | Family::Slice
                | Family::BoolOp
                | Family::Operator
                | Family::UnaryOp
                | Family::CmpOp
                | Family::ExceptHandler
                | Family::Pattern
                | Family::TypeParam
        )
    }

    /// Concrete kinds belonging to this family, in declaration order,
    /// regardless of dialect.
    pub fn kinds(self) -> impl Iterator<Item = NodeKind> {
        NodeKind::ALL
            .iter()
            .copied()
            .filter(move |kind| kind.family() == self)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .iter()
            .copied()
            .find(|family| family.name() == s)
            .ok_or_else(|| format!("unknown node family '{}'", s))
    }
}

/// Generates [`NodeKind`] and its per-kind tables from one row per kind:
/// `Variant "grammar name" => Family [fields] since, until;`
macro_rules! node_kinds {
    (
        $(
            $variant:ident $name:literal => $family:ident [$($field:literal),*] $since:expr, $until:expr;
        )*
    ) => {
        /// A concrete node kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum NodeKind {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl NodeKind {
            /// Every concrete kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)*];

            /// Grammar name of the kind.
            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $name,)*
                }
            }

            /// Family the kind belongs to.
            pub fn family(self) -> Family {
                match self {
                    $(NodeKind::$variant => Family::$family,)*
                }
            }

            /// Declared field names, in traversal order.
            pub fn fields(self) -> &'static [&'static str] {
                match self {
                    $(NodeKind::$variant => &[$($field),*],)*
                }
            }

            /// Versions in which the kind exists.
            pub fn availability(self) -> Availability {
                match self {
                    $(NodeKind::$variant => Availability::new($since, $until),)*
                }
            }
        }
    };
}

node_kinds! {
    // mod
    Module "Module" => Mod ["body"] (2, 0), None;
    Interactive "Interactive" => Mod ["body"] (2, 0), None;
    Expression "Expression" => Mod ["body"] (2, 0), None;
    Suite "Suite" => Mod ["body"] (2, 0), Some((3, 9));

    // stmt
    FunctionDef "FunctionDef" => Stmt ["name", "args", "body", "decorator_list", "returns", "type_params"] (2, 0), None;
    AsyncFunctionDef "AsyncFunctionDef" => Stmt ["name", "args", "body", "decorator_list", "returns", "type_params"] (3, 5), None;
    ClassDef "ClassDef" => Stmt ["name", "bases", "keywords", "body", "decorator_list", "type_params"] (2, 0), None;
    Return "Return" => Stmt ["value"] (2, 0), None;
    Delete "Delete" => Stmt ["targets"] (2, 0), None;
    Assign "Assign" => Stmt ["targets", "value"] (2, 0), None;
    AugAssign "AugAssign" => Stmt ["target", "op", "value"] (2, 0), None;
    AnnAssign "AnnAssign" => Stmt ["target", "annotation", "value", "simple"] (3, 6), None;
    Print "Print" => Stmt ["dest", "values", "nl"] (2, 0), Some((3, 0));
    For "For" => Stmt ["target", "iter", "body", "orelse"] (2, 0), None;
    AsyncFor "AsyncFor" => Stmt ["target", "iter", "body", "orelse"] (3, 5), None;
    While "While" => Stmt ["test", "body", "orelse"] (2, 0), None;
    If "If" => Stmt ["test", "body", "orelse"] (2, 0), None;
    With "With" => Stmt ["items", "body"] (3, 3), None;
    AsyncWith "AsyncWith" => Stmt ["items", "body"] (3, 5), None;
    LegacyWith "LegacyWith" => Stmt ["context_expr", "optional_vars", "body"] (2, 5), Some((3, 3));
    Raise "Raise" => Stmt ["exc", "cause"] (3, 0), None;
    LegacyRaise "LegacyRaise" => Stmt ["type", "inst", "tback"] (2, 0), Some((3, 0));
    Try "Try" => Stmt ["body", "handlers", "orelse", "finalbody"] (3, 3), None;
    TryStar "TryStar" => Stmt ["body", "handlers", "orelse", "finalbody"] (3, 11), None;
    TryExcept "TryExcept" => Stmt ["body", "handlers", "orelse"] (2, 0), Some((3, 3));
    TryFinally "TryFinally" => Stmt ["body", "finalbody"] (2, 0), Some((3, 3));
    Assert "Assert" => Stmt ["test", "msg"] (2, 0), None;
    Import "Import" => Stmt ["names"] (2, 0), None;
    ImportFrom "ImportFrom" => Stmt ["module", "names", "level"] (2, 0), None;
    Exec "Exec" => Stmt ["body", "globals", "locals"] (2, 0), Some((3, 0));
    Match "Match" => Stmt ["subject", "cases"] (3, 10), None;
    TypeAlias "TypeAlias" => Stmt ["name", "type_params", "value"] (3, 12), None;
    Global "Global" => Stmt ["names"] (2, 0), None;
    Nonlocal "Nonlocal" => Stmt ["names"] (3, 0), None;
    Expr "Expr" => Stmt ["value"] (2, 0), None;
    Pass "Pass" => Stmt [] (2, 0), None;
    Break "Break" => Stmt [] (2, 0), None;
    Continue "Continue" => Stmt [] (2, 0), None;

    // expr
    BoolOp "BoolOp" => Expr ["op", "values"] (2, 0), None;
    NamedExpr "NamedExpr" => Expr ["target", "value"] (3, 8), None;
    BinOp "BinOp" => Expr ["left", "op", "right"] (2, 0), None;
    UnaryOp "UnaryOp" => Expr ["op", "operand"] (2, 0), None;
    Lambda "Lambda" => Expr ["args", "body"] (2, 0), None;
    IfExp "IfExp" => Expr ["test", "body", "orelse"] (2, 5), None;
    Dict "Dict" => Expr ["keys", "values"] (2, 0), None;
    Set "Set" => Expr ["elts"] (2, 7), None;
    ListComp "ListComp" => Expr ["elt", "generators"] (2, 0), None;
    SetComp "SetComp" => Expr ["elt", "generators"] (2, 7), None;
    DictComp "DictComp" => Expr ["key", "value", "generators"] (2, 7), None;
    GeneratorExp "GeneratorExp" => Expr ["elt", "generators"] (2, 4), None;
    Await "Await" => Expr ["value"] (3, 5), None;
    Yield "Yield" => Expr ["value"] (2, 0), None;
    YieldFrom "YieldFrom" => Expr ["value"] (3, 3), None;
    Compare "Compare" => Expr ["left", "ops", "comparators"] (2, 0), None;
    Call "Call" => Expr ["func", "args", "keywords", "starargs", "kwargs"] (2, 0), None;
    Repr "Repr" => Expr ["value"] (2, 0), Some((3, 0));
    FormattedValue "FormattedValue" => Expr ["value", "conversion", "format_spec"] (3, 6), None;
    JoinedStr "JoinedStr" => Expr ["values"] (3, 6), None;
    Constant "Constant" => Expr ["value"] (3, 8), None;
    Num "Num" => Expr ["n"] (2, 0), Some((3, 8));
    Str "Str" => Expr ["s"] (2, 0), Some((3, 8));
    Bytes "Bytes" => Expr ["s"] (3, 0), Some((3, 8));
    NameConstant "NameConstant" => Expr ["value"] (3, 4), Some((3, 8));
    Ellipsis "Ellipsis" => Expr [] (2, 0), Some((3, 8));
    Attribute "Attribute" => Expr ["value", "attr"] (2, 0), None;
    Subscript "Subscript" => Expr ["value", "slice"] (2, 0), None;
    Starred "Starred" => Expr ["value"] (3, 0), None;
    Name "Name" => Expr ["id"] (2, 0), None;
    List "List" => Expr ["elts"] (2, 0), None;
    Tuple "Tuple" => Expr ["elts"] (2, 0), None;

    // slice
    Slice "Slice" => Slice ["lower", "upper", "step"] (2, 0), None;
    Index "Index" => Slice ["value"] (2, 0), Some((3, 9));
    ExtSlice "ExtSlice" => Slice ["dims"] (2, 0), Some((3, 9));

    // boolop
    And "And" => BoolOp [] (2, 0), None;
    Or "Or" => BoolOp [] (2, 0), None;

    // operator
    Add "Add" => Operator [] (2, 0), None;
    Sub "Sub" => Operator [] (2, 0), None;
    Mult "Mult" => Operator [] (2, 0), None;
    MatMult "MatMult" => Operator [] (3, 5), None;
    Div "Div" => Operator [] (2, 0), None;
    Mod "Mod" => Operator [] (2, 0), None;
    Pow "Pow" => Operator [] (2, 0), None;
    LShift "LShift" => Operator [] (2, 0), None;
    RShift "RShift" => Operator [] (2, 0), None;
    BitOr "BitOr" => Operator [] (2, 0), None;
    BitXor "BitXor" => Operator [] (2, 0), None;
    BitAnd "BitAnd" => Operator [] (2, 0), None;
    FloorDiv "FloorDiv" => Operator [] (2, 0), None;

    // unaryop
    Invert "Invert" => UnaryOp [] (2, 0), None;
    Not "Not" => UnaryOp [] (2, 0), None;
    UAdd "UAdd" => UnaryOp [] (2, 0), None;
    USub "USub" => UnaryOp [] (2, 0), None;

    // cmpop
    Eq "Eq" => CmpOp [] (2, 0), None;
    NotEq "NotEq" => CmpOp [] (2, 0), None;
    Lt "Lt" => CmpOp [] (2, 0), None;
    LtE "LtE" => CmpOp [] (2, 0), None;
    Gt "Gt" => CmpOp [] (2, 0), None;
    GtE "GtE" => CmpOp [] (2, 0), None;
    Is "Is" => CmpOp [] (2, 0), None;
    IsNot "IsNot" => CmpOp [] (2, 0), None;
    In "In" => CmpOp [] (2, 0), None;
    NotIn "NotIn" => CmpOp [] (2, 0), None;

    // excepthandler
    ExceptHandler "ExceptHandler" => ExceptHandler ["type", "name", "body"] (3, 0), None;
    LegacyExceptHandler "LegacyExceptHandler" => ExceptHandler ["type", "name", "body"] (2, 0), Some((3, 0));

    // pattern
    MatchValue "MatchValue" => Pattern ["value"] (3, 10), None;
    MatchSingleton "MatchSingleton" => Pattern ["value"] (3, 10), None;
    MatchSequence "MatchSequence" => Pattern ["patterns"] (3, 10), None;
    MatchMapping "MatchMapping" => Pattern ["keys", "patterns", "rest"] (3, 10), None;
    MatchClass "MatchClass" => Pattern ["cls", "patterns", "kwd_attrs", "kwd_patterns"] (3, 10), None;
    MatchStar "MatchStar" => Pattern ["name"] (3, 10), None;
    MatchAs "MatchAs" => Pattern ["pattern", "name"] (3, 10), None;
    MatchOr "MatchOr" => Pattern ["patterns"] (3, 10), None;

    // type_param
    TypeVar "TypeVar" => TypeParam ["name", "bound"] (3, 12), None;
    ParamSpec "ParamSpec" => TypeParam ["name"] (3, 12), None;
    TypeVarTuple "TypeVarTuple" => TypeParam ["name"] (3, 12), None;

    // standalone helper kinds
    Comprehension "comprehension" => Comprehension ["target", "iter", "ifs", "is_async"] (2, 0), None;
    Arguments "arguments" => Arguments ["posonlyargs", "args", "vararg", "kwonlyargs", "kw_defaults", "kwarg", "defaults"] (2, 0), None;
    Arg "arg" => Arg ["arg", "annotation"] (2, 0), None;
    Keyword "keyword" => Keyword ["arg", "value"] (2, 0), None;
    Alias "alias" => Alias ["name", "asname"] (2, 0), None;
    WithItem "withitem" => WithItem ["context_expr", "optional_vars"] (3, 3), None;
    MatchCase "match_case" => MatchCase ["pattern", "guard", "body"] (3, 10), None;
}

impl NodeKind {
    /// Looks up a kind by its grammar name.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        NodeKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Returns true for statement kinds.
    pub fn is_stmt(self) -> bool {
        self.family() == Family::Stmt
    }

    /// Returns true for kinds that render to an expression fragment.
    pub fn is_expr(self) -> bool {
        matches!(self.family(), Family::Expr | Family::Slice)
    }

    /// Returns true for operator kinds of any family.
    pub fn is_operator(self) -> bool {
        matches!(
            self.family(),
            Family::BoolOp | Family::Operator | Family::UnaryOp | Family::CmpOp
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::from_name(s).ok_or_else(|| format!("unknown node kind '{}'", s))
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Classification index
// ============================================================================

/// One node of the classification tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexNode {
    /// An abstract kind grouping its children.
    Internal {
        name: &'static str,
        children: Vec<IndexNode>,
    },
    /// A concrete, instantiable kind.
    Leaf(NodeKind),
}

impl IndexNode {
    /// Name of the node (family name or kind name).
    pub fn name(&self) -> &'static str {
        match self {
            IndexNode::Internal { name, .. } => name,
            IndexNode::Leaf(kind) => kind.name(),
        }
    }

    /// Returns true for concrete kinds.
    pub fn is_leaf(&self) -> bool {
        matches!(self, IndexNode::Leaf(_))
    }

    /// Direct children; empty for leaves.
    pub fn children(&self) -> &[IndexNode] {
        match self {
            IndexNode::Internal { children, .. } => children,
            IndexNode::Leaf(_) => &[],
        }
    }

    /// Declared field names. Abstract kinds declare none.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            IndexNode::Internal { .. } => &[],
            IndexNode::Leaf(kind) => kind.fields(),
        }
    }

    fn collect_leaves(&self, out: &mut Vec<NodeKind>) {
        match self {
            IndexNode::Internal { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
            IndexNode::Leaf(kind) => out.push(*kind),
        }
    }

    fn find(&self, name: &str) -> Option<&IndexNode> {
        if self.name() == name {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(name))
    }
}

/// Classification of the node kinds available in one dialect.
///
/// # Example
///
/// ```
/// use astkit_ast::{Family, KindIndex, NodeKind, PythonVersion};
///
/// let index = KindIndex::build(PythonVersion::V2_7);
/// assert!(index.leaves_of(Family::Stmt).contains(&NodeKind::Print));
/// assert!(index.lookup("Constant").is_none());
/// assert_eq!(index.fields("For"), Some(&["target", "iter", "body", "orelse"][..]));
/// ```
#[derive(Debug, Clone)]
pub struct KindIndex {
    version: PythonVersion,
    root: IndexNode,
}

impl KindIndex {
    /// Builds the index for `version`.
    ///
    /// Kinds absent from the dialect are left out; a family left without any
    /// kinds is omitted entirely.
    pub fn build(version: PythonVersion) -> Self {
        let mut children = Vec::new();
        for family in Family::ALL.iter().copied() {
            let leaves: Vec<IndexNode> = family
                .kinds()
                .filter(|kind| version.supports(*kind))
                .map(IndexNode::Leaf)
                .collect();
            if leaves.is_empty() {
                continue;
            }
            if family.is_abstract() {
                children.push(IndexNode::Internal {
                    name: family.name(),
                    children: leaves,
                });
            } else {
                children.extend(leaves);
            }
        }
        tracing::debug!(
            "built node-kind index for {} ({} top-level entries)",
            version,
            children.len()
        );
        Self {
            version,
            root: IndexNode::Internal {
                name: ROOT_NAME,
                children,
            },
        }
    }

    /// The process-wide permissive index, built on first use.
    pub fn global() -> &'static KindIndex {
        static GLOBAL: OnceLock<KindIndex> = OnceLock::new();
        GLOBAL.get_or_init(|| KindIndex::build(PythonVersion::Permissive))
    }

    /// Dialect the index was built for.
    pub fn version(&self) -> PythonVersion {
        self.version
    }

    /// Root of the classification tree.
    pub fn root(&self) -> &IndexNode {
        &self.root
    }

    /// Every concrete kind in the index, in tree order.
    pub fn leaves(&self) -> Vec<NodeKind> {
        let mut out = Vec::new();
        self.root.collect_leaves(&mut out);
        out
    }

    /// Concrete kinds of one family present in the index.
    pub fn leaves_of(&self, family: Family) -> Vec<NodeKind> {
        self.leaves()
            .into_iter()
            .filter(|kind| kind.family() == family)
            .collect()
    }

    /// Finds an abstract or concrete kind by name.
    pub fn lookup(&self, name: &str) -> Option<&IndexNode> {
        self.root.find(name)
    }

    /// Declared fields of the named kind.
    pub fn fields(&self, name: &str) -> Option<&'static [&'static str]> {
        self.lookup(name).map(IndexNode::fields)
    }

    /// Families with at least one kind in the index, abstract families first
    /// and then the root-level helper kinds.
    pub fn families(&self) -> Vec<Family> {
        Family::ALL
            .iter()
            .copied()
            .filter(|family| family.kinds().any(|kind| self.version.supports(kind)))
            .collect()
    }

    /// Returns true when `name` names a kind or family in the index.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of concrete kinds in the index.
    pub fn len(&self) -> usize {
        self.leaves().len()
    }

    /// Returns true when no kinds are present.
    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_kind_names_are_unique() {
        let names: HashSet<&str> = NodeKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), NodeKind::ALL.len());
    }

    #[test]
    fn test_kind_name_roundtrip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!("withitem".parse::<NodeKind>(), Ok(NodeKind::WithItem));
        assert_eq!("match_case".parse::<NodeKind>(), Ok(NodeKind::MatchCase));
        assert!("Matcher".parse::<NodeKind>().is_err());
    }

    #[test]
    fn test_permissive_index_has_every_kind() {
        let index = KindIndex::global();
        assert_eq!(index.len(), NodeKind::ALL.len());
        assert!(index.version().is_permissive());
    }

    #[test]
    fn test_index_tree_shape() {
        let index = KindIndex::build(PythonVersion::V3_12);
        let root = index.root();
        assert_eq!(root.name(), ROOT_NAME);

        let stmt = index.lookup("stmt").unwrap();
        assert!(!stmt.is_leaf());
        assert!(stmt.children().iter().all(IndexNode::is_leaf));

        // helper kinds hang directly off the root
        let comprehension = root
            .children()
            .iter()
            .find(|child| child.name() == "comprehension")
            .unwrap();
        assert!(comprehension.is_leaf());
    }

    #[test]
    fn test_index_omits_absent_kinds() {
        let modern = KindIndex::build(PythonVersion::V3_12);
        assert!(!modern.contains("Print"));
        assert!(!modern.contains("TryExcept"));
        assert!(!modern.contains("Num"));
        assert!(!modern.contains("Index"));
        assert!(modern.contains("Constant"));
        assert!(modern.contains("TryStar"));

        let legacy = KindIndex::build(PythonVersion::V2_7);
        assert!(legacy.contains("Print"));
        assert!(legacy.contains("LegacyRaise"));
        assert!(!legacy.contains("Raise"));
        assert!(!legacy.contains("withitem"));
        assert!(!legacy.contains("AsyncFunctionDef"));

        let pre_match = KindIndex::build(PythonVersion::V3_9);
        assert!(!pre_match.contains("Match"));
        assert!(!pre_match.contains("pattern"));
        assert!(!pre_match.contains("match_case"));
        assert!(!pre_match.contains("type_param"));

        let match_only = KindIndex::build(PythonVersion::V3_10);
        assert!(match_only.contains("MatchOr"));
        assert!(match_only.contains("match_case"));
        assert!(!match_only.contains("TypeAlias"));
        assert!(!match_only.contains("type_param"));
        assert!(modern.contains("TypeAlias"));
        assert!(modern.contains("ParamSpec"));
    }

    #[test]
    fn test_index_fields_lookup() {
        let index = KindIndex::global();
        assert_eq!(
            index.fields("Compare"),
            Some(&["left", "ops", "comparators"][..])
        );
        assert_eq!(index.fields("expr"), Some(&[][..]));
        assert_eq!(index.fields("Add"), Some(&[][..]));
        assert_eq!(index.fields("NoSuchKind"), None);
    }

    #[test]
    fn test_leaves_of_family() {
        let index = KindIndex::build(PythonVersion::V3_12);
        let cmpops = index.leaves_of(Family::CmpOp);
        assert_eq!(cmpops.len(), 10);
        assert!(index.leaves_of(Family::ExceptHandler) == vec![NodeKind::ExceptHandler]);
    }

    #[test]
    fn test_families_present() {
        let modern = KindIndex::build(PythonVersion::V3_12);
        let families = modern.families();
        assert!(families.contains(&Family::Stmt));
        assert!(families.contains(&Family::Slice));
        assert!(families.contains(&Family::Pattern));
        assert!(families.contains(&Family::TypeParam));
        assert!(families.contains(&Family::Keyword));
        assert!(families.contains(&Family::MatchCase));

        let legacy = KindIndex::build(PythonVersion::V2_7);
        let families = legacy.families();
        assert!(families.contains(&Family::Comprehension));
        assert!(!families.contains(&Family::WithItem));
        assert!(!families.contains(&Family::Pattern));
    }

    #[test]
    fn test_abstract_families_are_internal_nodes() {
        let index = KindIndex::global();
        for family in Family::ALL {
            let node = index.lookup(family.name()).unwrap();
            assert_eq!(node.is_leaf(), !family.is_abstract(), "{}", family);
        }
    }

    #[test]
    fn test_kind_serializes_as_name() {
        let json = serde_json::to_string(&NodeKind::WithItem).unwrap();
        assert_eq!(json, "\"withitem\"");
        let kind: NodeKind = serde_json::from_str("\"LegacyRaise\"").unwrap();
        assert_eq!(kind, NodeKind::LegacyRaise);
    }
}
