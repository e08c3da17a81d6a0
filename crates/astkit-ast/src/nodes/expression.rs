// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression nodes, literal values and the helper kinds shared by
//! statements and expressions (arguments, keywords, aliases, comprehension
//! clauses, `with` items).

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use super::{BoolOperator, CmpOperator, Operator, Position, UnaryOperator};

node_family! {
    /// An expression.
    ///
    /// The legacy slice kinds `Index` and `ExtSlice` and the `Slice` kind are
    /// variants here as well; they only appear as the `slice` of a
    /// [`Subscript`].
    pub enum Expr {
        BoolOp(BoolOp),
        NamedExpr(NamedExpr),
        BinOp(BinOp),
        UnaryOp(UnaryOp),
        Lambda(Lambda),
        IfExp(IfExp),
        Dict(Dict),
        Set(Set),
        ListComp(ListComp),
        SetComp(SetComp),
        DictComp(DictComp),
        GeneratorExp(GeneratorExp),
        Await(Await),
        Yield(Yield),
        YieldFrom(YieldFrom),
        Compare(Compare),
        Call(Call),
        Repr(Repr),
        FormattedValue(FormattedValue),
        JoinedStr(JoinedStr),
        Constant(Constant),
        Num(Num),
        Str(Str),
        Bytes(Bytes),
        NameConstant(NameConstant),
        Ellipsis(Ellipsis),
        Attribute(Attribute),
        Subscript(Subscript),
        Starred(Starred),
        Name(Name),
        List(List),
        Tuple(Tuple),
        Slice(Slice),
        Index(Index),
        ExtSlice(ExtSlice),
    }
}

// ============================================================================
// Literal values
// ============================================================================

/// Numeric literal payload of a legacy `Num` node.
///
/// Integers have no size limit. In JSON they are numbers while they fit in
/// 64 bits and decimal strings beyond that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(#[serde(with = "int_literal")] BigInt),
    Float(f64),
    Complex { real: f64, imag: f64 },
}

impl Number {
    pub fn int(value: impl Into<BigInt>) -> Self {
        Number::Int(value.into())
    }
}

/// Payload of a `Constant` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantValue {
    None,
    Bool(bool),
    Int(#[serde(with = "int_literal")] BigInt),
    Float(f64),
    Complex { real: f64, imag: f64 },
    Str(String),
    Bytes(Vec<u8>),
    Ellipsis,
}

/// JSON form of integer literals.
///
/// Values within `i64`/`u64` travel as JSON numbers. Larger magnitudes travel
/// as decimal strings, since a JSON number beyond 64 bits would be read back
/// as a lossy float.
mod int_literal {
    use std::fmt;

    use num_bigint::BigInt;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        if let Ok(small) = i64::try_from(value) {
            serializer.serialize_i64(small)
        } else if let Ok(large) = u64::try_from(value) {
            serializer.serialize_u64(large)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        deserializer.deserialize_any(IntVisitor)
    }

    struct IntVisitor;

    impl<'de> Visitor<'de> for IntVisitor {
        type Value = BigInt;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer, or a decimal string for integers beyond 64 bits")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
            let digits = v.trim();
            let unsigned = digits.strip_prefix('-').unwrap_or(digits);
            if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
                return Err(E::invalid_value(de::Unexpected::Str(v), &self));
            }
            digits
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }
}

/// Payload of a `NameConstant` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Singleton {
    None,
    True,
    False,
}

impl Singleton {
    pub fn as_str(self) -> &'static str {
        match self {
            Singleton::None => "None",
            Singleton::True => "True",
            Singleton::False => "False",
        }
    }
}

/// `!s`, `!r` or `!a` conversion of a formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conversion {
    #[serde(rename = "s")]
    Str,
    #[serde(rename = "r")]
    Repr,
    #[serde(rename = "a")]
    Ascii,
}

impl Conversion {
    pub fn as_char(self) -> char {
        match self {
            Conversion::Str => 's',
            Conversion::Repr => 'r',
            Conversion::Ascii => 'a',
        }
    }
}

// ============================================================================
// Expression kinds
// ============================================================================

/// `a and b and c`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolOp {
    pub op: BoolOperator,
    #[serde(default)]
    pub values: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `target := value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedExpr {
    pub target: Box<Expr>,
    pub value: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinOp {
    pub left: Box<Expr>,
    pub op: Operator,
    pub right: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOp {
    pub op: UnaryOperator,
    pub operand: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lambda {
    pub args: Box<Arguments>,
    pub body: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `body if test else orelse`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfExp {
    pub test: Box<Expr>,
    pub body: Box<Expr>,
    pub orelse: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Dict display. A `None` key marks a `**mapping` unpacking whose value is
/// the mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dict {
    #[serde(default)]
    pub keys: Vec<Option<Expr>>,
    #[serde(default)]
    pub values: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    #[serde(default)]
    pub elts: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListComp {
    pub elt: Box<Expr>,
    #[serde(default)]
    pub generators: Vec<Comprehension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetComp {
    pub elt: Box<Expr>,
    #[serde(default)]
    pub generators: Vec<Comprehension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictComp {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
    #[serde(default)]
    pub generators: Vec<Comprehension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorExp {
    pub elt: Box<Expr>,
    #[serde(default)]
    pub generators: Vec<Comprehension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Await {
    pub value: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yield {
    pub value: Option<Box<Expr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldFrom {
    pub value: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Comparison chain `left op1 c1 op2 c2 ...`; `ops` and `comparators` are
/// parallel lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compare {
    pub left: Box<Expr>,
    #[serde(default)]
    pub ops: Vec<CmpOperator>,
    #[serde(default)]
    pub comparators: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Call expression. `starargs` and `kwargs` carry the trailing `*args` and
/// `**kwargs` of older dialects; newer trees express them as `Starred`
/// arguments and keywords without a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub func: Box<Expr>,
    #[serde(default)]
    pub args: Vec<Expr>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starargs: Option<Box<Expr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kwargs: Option<Box<Expr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Backtick repr `` `value` ``.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repr {
    pub value: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Replacement field of an f-string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedValue {
    pub value: Box<Expr>,
    pub conversion: Option<Conversion>,
    pub format_spec: Option<Box<Expr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// f-string. `values` holds string constants and formatted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedStr {
    #[serde(default)]
    pub values: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub value: ConstantValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Num {
    pub n: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Str {
    pub s: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bytes {
    pub s: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameConstant {
    pub value: Singleton,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ellipsis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub value: Box<Expr>,
    pub attr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscript {
    pub value: Box<Expr>,
    pub slice: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starred {
    pub value: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(default)]
    pub elts: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuple {
    #[serde(default)]
    pub elts: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `lower:upper:step`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Slice {
    pub lower: Option<Box<Expr>>,
    pub upper: Option<Box<Expr>>,
    pub step: Option<Box<Expr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Legacy wrapper around a plain subscript value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub value: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Legacy multi-dimensional subscript `x[a:b, c]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtSlice {
    #[serde(default)]
    pub dims: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

// ============================================================================
// Helper kinds
// ============================================================================

/// Parameter list of a function or lambda.
///
/// `defaults` align with the trailing entries of `posonlyargs + args`.
/// `kw_defaults` runs parallel to `kwonlyargs`, `None` marking a
/// keyword-only parameter without a default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Arguments {
    #[serde(default)]
    pub posonlyargs: Vec<Arg>,
    #[serde(default)]
    pub args: Vec<Arg>,
    pub vararg: Option<Arg>,
    #[serde(default)]
    pub kwonlyargs: Vec<Arg>,
    #[serde(default)]
    pub kw_defaults: Vec<Option<Expr>>,
    pub kwarg: Option<Arg>,
    #[serde(default)]
    pub defaults: Vec<Expr>,
}

/// A single parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    pub arg: String,
    pub annotation: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Keyword argument `arg=value`; `arg` is `None` for `**value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub arg: Option<String>,
    pub value: Expr,
}

/// Imported name `name as asname`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
    pub asname: Option<String>,
}

/// One `for target in iter if ...` clause of a comprehension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comprehension {
    pub target: Expr,
    pub iter: Expr,
    #[serde(default)]
    pub ifs: Vec<Expr>,
    #[serde(default)]
    pub is_async: bool,
}

/// One `context_expr as optional_vars` entry of a `with` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithItem {
    pub context_expr: Expr,
    pub optional_vars: Option<Expr>,
}
