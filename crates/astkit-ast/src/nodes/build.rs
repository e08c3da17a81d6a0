// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Convenience constructors for building trees in processors and tests.
//!
//! Built nodes carry no position. Literal helpers produce modern `Constant`
//! nodes; the `legacy_*` helpers produce the pre-3.8 literal kinds.

use num_bigint::BigInt;

use super::*;

impl Expr {
    pub fn name(id: impl Into<String>) -> Self {
        Expr::Name(Name {
            id: id.into(),
            position: None,
        })
    }

    pub fn constant(value: ConstantValue) -> Self {
        Expr::Constant(Constant {
            value,
            position: None,
        })
    }

    pub fn int(value: impl Into<BigInt>) -> Self {
        Self::constant(ConstantValue::Int(value.into()))
    }

    pub fn float(value: f64) -> Self {
        Self::constant(ConstantValue::Float(value))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::constant(ConstantValue::Str(value.into()))
    }

    pub fn bool(value: bool) -> Self {
        Self::constant(ConstantValue::Bool(value))
    }

    pub fn none() -> Self {
        Self::constant(ConstantValue::None)
    }

    /// Legacy `Num` literal.
    pub fn legacy_num(n: Number) -> Self {
        Expr::Num(Num { n, position: None })
    }

    /// Legacy `Str` literal.
    pub fn legacy_str(s: impl Into<String>) -> Self {
        Expr::Str(Str {
            s: s.into(),
            position: None,
        })
    }

    pub fn attribute(value: Expr, attr: impl Into<String>) -> Self {
        Expr::Attribute(Attribute {
            value: Box::new(value),
            attr: attr.into(),
            position: None,
        })
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Self::call_with_keywords(func, args, Vec::new())
    }

    pub fn call_with_keywords(func: Expr, args: Vec<Expr>, keywords: Vec<Keyword>) -> Self {
        Expr::Call(Call {
            func: Box::new(func),
            args,
            keywords,
            starargs: None,
            kwargs: None,
            position: None,
        })
    }

    /// Single-operator comparison.
    pub fn compare(left: Expr, op: CmpOperator, right: Expr) -> Self {
        Expr::Compare(Compare {
            left: Box::new(left),
            ops: vec![op],
            comparators: vec![right],
            position: None,
        })
    }

    pub fn bin_op(left: Expr, op: Operator, right: Expr) -> Self {
        Expr::BinOp(BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
            position: None,
        })
    }

    pub fn bool_op(op: BoolOperator, values: Vec<Expr>) -> Self {
        Expr::BoolOp(BoolOp {
            op,
            values,
            position: None,
        })
    }

    pub fn unary_op(op: UnaryOperator, operand: Expr) -> Self {
        Expr::UnaryOp(UnaryOp {
            op,
            operand: Box::new(operand),
            position: None,
        })
    }

    pub fn tuple(elts: Vec<Expr>) -> Self {
        Expr::Tuple(Tuple {
            elts,
            position: None,
        })
    }

    pub fn list(elts: Vec<Expr>) -> Self {
        Expr::List(List {
            elts,
            position: None,
        })
    }

    pub fn subscript(value: Expr, slice: Expr) -> Self {
        Expr::Subscript(Subscript {
            value: Box::new(value),
            slice: Box::new(slice),
            position: None,
        })
    }

    pub fn starred(value: Expr) -> Self {
        Expr::Starred(Starred {
            value: Box::new(value),
            position: None,
        })
    }

    /// Returns the node with its position replaced.
    pub fn with_position(mut self, position: Position) -> Self {
        *self.position_mut() = Some(position);
        self
    }
}

impl Stmt {
    pub fn expr(value: Expr) -> Self {
        Stmt::Expr(ExprStmt {
            value,
            position: None,
        })
    }

    pub fn assign(targets: Vec<Expr>, value: Expr) -> Self {
        Stmt::Assign(Assign {
            targets,
            value,
            position: None,
        })
    }

    pub fn return_(value: Option<Expr>) -> Self {
        Stmt::Return(Return {
            value,
            position: None,
        })
    }

    pub fn pass() -> Self {
        Stmt::Pass(Pass::default())
    }

    pub fn assert(test: Expr, msg: Option<Expr>) -> Self {
        Stmt::Assert(Assert {
            test,
            msg,
            position: None,
        })
    }

    pub fn if_(test: Expr, body: Vec<Stmt>, orelse: Vec<Stmt>) -> Self {
        Stmt::If(If {
            test,
            body,
            orelse,
            position: None,
        })
    }

    pub fn while_(test: Expr, body: Vec<Stmt>) -> Self {
        Stmt::While(While {
            test,
            body,
            orelse: Vec::new(),
            position: None,
        })
    }

    pub fn for_(target: Expr, iter: Expr, body: Vec<Stmt>) -> Self {
        Stmt::For(For {
            target,
            iter,
            body,
            orelse: Vec::new(),
            position: None,
        })
    }

    pub fn import(names: Vec<Alias>) -> Self {
        Stmt::Import(Import {
            names,
            position: None,
        })
    }

    pub fn import_from(module: impl Into<String>, names: Vec<Alias>) -> Self {
        Stmt::ImportFrom(ImportFrom {
            module: Some(module.into()),
            names,
            level: 0,
            position: None,
        })
    }

    pub fn function_def(name: impl Into<String>, args: Arguments, body: Vec<Stmt>) -> Self {
        Stmt::FunctionDef(FunctionDef {
            name: name.into(),
            args,
            body,
            decorator_list: Vec::new(),
            returns: None,
            type_params: Vec::new(),
            position: None,
        })
    }

    pub fn class_def(name: impl Into<String>, bases: Vec<Expr>, body: Vec<Stmt>) -> Self {
        Stmt::ClassDef(ClassDef {
            name: name.into(),
            bases,
            keywords: Vec::new(),
            body,
            decorator_list: Vec::new(),
            type_params: Vec::new(),
            position: None,
        })
    }

    /// Returns the node with its position replaced.
    pub fn with_position(mut self, position: Position) -> Self {
        *self.position_mut() = Some(position);
        self
    }
}

impl Pattern {
    /// Capture pattern binding `name`.
    pub fn capture(name: impl Into<String>) -> Self {
        Pattern::MatchAs(MatchAs {
            pattern: None,
            name: Some(name.into()),
            position: None,
        })
    }

    /// The wildcard pattern `_`.
    pub fn wildcard() -> Self {
        Pattern::MatchAs(MatchAs::default())
    }

    pub fn value(value: Expr) -> Self {
        Pattern::MatchValue(MatchValue {
            value,
            position: None,
        })
    }

    pub fn sequence(patterns: Vec<Pattern>) -> Self {
        Pattern::MatchSequence(MatchSequence {
            patterns,
            position: None,
        })
    }

    pub fn or(patterns: Vec<Pattern>) -> Self {
        Pattern::MatchOr(MatchOr {
            patterns,
            position: None,
        })
    }
}

impl MatchCase {
    pub fn new(pattern: Pattern, guard: Option<Expr>, body: Vec<Stmt>) -> Self {
        MatchCase {
            pattern,
            guard,
            body,
        }
    }
}

impl TypeParam {
    /// Unbounded type variable.
    pub fn type_var(name: impl Into<String>) -> Self {
        TypeParam::TypeVar(TypeVar {
            name: name.into(),
            bound: None,
            position: None,
        })
    }
}

impl Arguments {
    /// Plain positional parameters without defaults.
    pub fn positional<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arguments {
            args: names.into_iter().map(Arg::new).collect(),
            ..Arguments::default()
        }
    }
}

impl Arg {
    pub fn new(arg: impl Into<String>) -> Self {
        Arg {
            arg: arg.into(),
            annotation: None,
            position: None,
        }
    }
}

impl Keyword {
    pub fn new(arg: impl Into<String>, value: Expr) -> Self {
        Keyword {
            arg: Some(arg.into()),
            value,
        }
    }
}

impl Alias {
    pub fn new(name: impl Into<String>) -> Self {
        Alias {
            name: name.into(),
            asname: None,
        }
    }

    pub fn with_asname(name: impl Into<String>, asname: impl Into<String>) -> Self {
        Alias {
            name: name.into(),
            asname: Some(asname.into()),
        }
    }
}

impl Comprehension {
    pub fn new(target: Expr, iter: Expr, ifs: Vec<Expr>) -> Self {
        Comprehension {
            target,
            iter,
            ifs,
            is_async: false,
        }
    }
}

impl WithItem {
    pub fn new(context_expr: Expr, optional_vars: Option<Expr>) -> Self {
        WithItem {
            context_expr,
            optional_vars,
        }
    }
}
