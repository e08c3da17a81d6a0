// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Kind-agnostic node handles.
//!
//! [`NodeRef`] and [`NodeMut`] wrap a reference to any node of the tree so
//! traversals can be written once against the whole kind set. Children are
//! listed in declared field order (see [`NodeKind::fields`]), list fields
//! expanded in place and absent optional fields skipped.

use crate::kinds::NodeKind;
use crate::nodes::*;

/// Shared reference to any node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Mod(&'a Mod),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Handler(&'a Handler),
    Pattern(&'a Pattern),
    TypeParam(&'a TypeParam),
    Arguments(&'a Arguments),
    Arg(&'a Arg),
    Keyword(&'a Keyword),
    Alias(&'a Alias),
    Comprehension(&'a Comprehension),
    WithItem(&'a WithItem),
    MatchCase(&'a MatchCase),
    BoolOp(&'a BoolOperator),
    Operator(&'a Operator),
    UnaryOp(&'a UnaryOperator),
    CmpOp(&'a CmpOperator),
}

/// Mutable reference to any node that carries fields.
///
/// Operators are plain values and have no mutable handle.
#[derive(Debug)]
pub enum NodeMut<'a> {
    Mod(&'a mut Mod),
    Stmt(&'a mut Stmt),
    Expr(&'a mut Expr),
    Handler(&'a mut Handler),
    Pattern(&'a mut Pattern),
    TypeParam(&'a mut TypeParam),
    Arguments(&'a mut Arguments),
    Arg(&'a mut Arg),
    Keyword(&'a mut Keyword),
    Alias(&'a mut Alias),
    Comprehension(&'a mut Comprehension),
    WithItem(&'a mut WithItem),
    MatchCase(&'a mut MatchCase),
}

macro_rules! node_conversions {
    ($($variant:ident($node:ty)),* $(,)?) => {
        $(
            impl<'a> From<&'a $node> for NodeRef<'a> {
                fn from(node: &'a $node) -> Self {
                    NodeRef::$variant(node)
                }
            }
        )*
    };
}

macro_rules! node_mut_conversions {
    ($($variant:ident($node:ty)),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $node> for NodeMut<'a> {
                fn from(node: &'a mut $node) -> Self {
                    NodeMut::$variant(node)
                }
            }
        )*
    };
}

node_conversions! {
    Mod(Mod),
    Stmt(Stmt),
    Expr(Expr),
    Handler(Handler),
    Pattern(Pattern),
    TypeParam(TypeParam),
    Arguments(Arguments),
    Arg(Arg),
    Keyword(Keyword),
    Alias(Alias),
    Comprehension(Comprehension),
    WithItem(WithItem),
    MatchCase(MatchCase),
    BoolOp(BoolOperator),
    Operator(Operator),
    UnaryOp(UnaryOperator),
    CmpOp(CmpOperator),
}

node_mut_conversions! {
    Mod(Mod),
    Stmt(Stmt),
    Expr(Expr),
    Handler(Handler),
    Pattern(Pattern),
    TypeParam(TypeParam),
    Arguments(Arguments),
    Arg(Arg),
    Keyword(Keyword),
    Alias(Alias),
    Comprehension(Comprehension),
    WithItem(WithItem),
    MatchCase(MatchCase),
}

// ============================================================================
// NodeRef
// ============================================================================

fn one<'a, T>(out: &mut Vec<NodeRef<'a>>, node: &'a T)
where
    &'a T: Into<NodeRef<'a>>,
{
    out.push(node.into());
}

fn opt<'a, T>(out: &mut Vec<NodeRef<'a>>, node: Option<&'a T>)
where
    &'a T: Into<NodeRef<'a>>,
{
    if let Some(node) = node {
        out.push(node.into());
    }
}

fn all<'a, T>(out: &mut Vec<NodeRef<'a>>, nodes: &'a [T])
where
    &'a T: Into<NodeRef<'a>>,
{
    out.extend(nodes.iter().map(Into::into));
}

impl<'a> NodeRef<'a> {
    /// Concrete kind of the referenced node.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Mod(node) => node.kind(),
            NodeRef::Stmt(node) => node.kind(),
            NodeRef::Expr(node) => node.kind(),
            NodeRef::Handler(node) => node.kind(),
            NodeRef::Pattern(node) => node.kind(),
            NodeRef::TypeParam(node) => node.kind(),
            NodeRef::Arguments(_) => NodeKind::Arguments,
            NodeRef::Arg(_) => NodeKind::Arg,
            NodeRef::Keyword(_) => NodeKind::Keyword,
            NodeRef::Alias(_) => NodeKind::Alias,
            NodeRef::Comprehension(_) => NodeKind::Comprehension,
            NodeRef::WithItem(_) => NodeKind::WithItem,
            NodeRef::MatchCase(_) => NodeKind::MatchCase,
            NodeRef::BoolOp(op) => op.kind(),
            NodeRef::Operator(op) => op.kind(),
            NodeRef::UnaryOp(op) => op.kind(),
            NodeRef::CmpOp(op) => op.kind(),
        }
    }

    /// Source position, for kinds that carry one.
    pub fn position(&self) -> Option<Position> {
        match self {
            NodeRef::Stmt(node) => node.position(),
            NodeRef::Expr(node) => node.position(),
            NodeRef::Handler(node) => node.position(),
            NodeRef::Pattern(node) => node.position(),
            NodeRef::TypeParam(node) => node.position(),
            NodeRef::Arg(node) => node.position,
            _ => None,
        }
    }

    /// Direct children in field order.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        match *self {
            NodeRef::Mod(node) => match node {
                Mod::Module(m) => all(&mut out, &m.body),
                Mod::Interactive(m) => all(&mut out, &m.body),
                Mod::Suite(m) => all(&mut out, &m.body),
                Mod::Expression(m) => one(&mut out, &*m.body),
            },
            NodeRef::Stmt(node) => stmt_children(&mut out, node),
            NodeRef::Expr(node) => expr_children(&mut out, node),
            NodeRef::Handler(node) => match node {
                Handler::ExceptHandler(h) => {
                    opt(&mut out, h.type_.as_ref());
                    all(&mut out, &h.body);
                }
                Handler::LegacyExceptHandler(h) => {
                    opt(&mut out, h.type_.as_ref());
                    opt(&mut out, h.name.as_ref());
                    all(&mut out, &h.body);
                }
            },
            NodeRef::Pattern(node) => pattern_children(&mut out, node),
            NodeRef::TypeParam(node) => match node {
                TypeParam::TypeVar(p) => opt(&mut out, p.bound.as_ref()),
                TypeParam::ParamSpec(_) | TypeParam::TypeVarTuple(_) => {}
            },
            NodeRef::Arguments(node) => {
                all(&mut out, &node.posonlyargs);
                all(&mut out, &node.args);
                opt(&mut out, node.vararg.as_ref());
                all(&mut out, &node.kwonlyargs);
                out.extend(node.kw_defaults.iter().flatten().map(NodeRef::Expr));
                opt(&mut out, node.kwarg.as_ref());
                all(&mut out, &node.defaults);
            }
            NodeRef::Arg(node) => opt(&mut out, node.annotation.as_ref()),
            NodeRef::Keyword(node) => one(&mut out, &node.value),
            NodeRef::Comprehension(node) => {
                one(&mut out, &node.target);
                one(&mut out, &node.iter);
                all(&mut out, &node.ifs);
            }
            NodeRef::WithItem(node) => {
                one(&mut out, &node.context_expr);
                opt(&mut out, node.optional_vars.as_ref());
            }
            NodeRef::MatchCase(node) => {
                one(&mut out, &node.pattern);
                opt(&mut out, node.guard.as_ref());
                all(&mut out, &node.body);
            }
            NodeRef::Alias(_)
            | NodeRef::BoolOp(_)
            | NodeRef::Operator(_)
            | NodeRef::UnaryOp(_)
            | NodeRef::CmpOp(_) => {}
        }
        out
    }
}

fn stmt_children<'a>(out: &mut Vec<NodeRef<'a>>, stmt: &'a Stmt) {
    match stmt {
        Stmt::FunctionDef(s) | Stmt::AsyncFunctionDef(s) => {
            one(out, &s.args);
            all(out, &s.body);
            all(out, &s.decorator_list);
            opt(out, s.returns.as_ref());
            all(out, &s.type_params);
        }
        Stmt::ClassDef(s) => {
            all(out, &s.bases);
            all(out, &s.keywords);
            all(out, &s.body);
            all(out, &s.decorator_list);
            all(out, &s.type_params);
        }
        Stmt::Return(s) => opt(out, s.value.as_ref()),
        Stmt::Delete(s) => all(out, &s.targets),
        Stmt::Assign(s) => {
            all(out, &s.targets);
            one(out, &s.value);
        }
        Stmt::AugAssign(s) => {
            one(out, &s.target);
            one(out, &s.op);
            one(out, &s.value);
        }
        Stmt::AnnAssign(s) => {
            one(out, &s.target);
            one(out, &s.annotation);
            opt(out, s.value.as_ref());
        }
        Stmt::Print(s) => {
            opt(out, s.dest.as_ref());
            all(out, &s.values);
        }
        Stmt::For(s) | Stmt::AsyncFor(s) => {
            one(out, &s.target);
            one(out, &s.iter);
            all(out, &s.body);
            all(out, &s.orelse);
        }
        Stmt::While(s) => {
            one(out, &s.test);
            all(out, &s.body);
            all(out, &s.orelse);
        }
        Stmt::If(s) => {
            one(out, &s.test);
            all(out, &s.body);
            all(out, &s.orelse);
        }
        Stmt::With(s) | Stmt::AsyncWith(s) => {
            all(out, &s.items);
            all(out, &s.body);
        }
        Stmt::LegacyWith(s) => {
            one(out, &s.context_expr);
            opt(out, s.optional_vars.as_ref());
            all(out, &s.body);
        }
        Stmt::Raise(s) => {
            opt(out, s.exc.as_ref());
            opt(out, s.cause.as_ref());
        }
        Stmt::LegacyRaise(s) => {
            opt(out, s.type_.as_ref());
            opt(out, s.inst.as_ref());
            opt(out, s.tback.as_ref());
        }
        Stmt::Try(s) | Stmt::TryStar(s) => {
            all(out, &s.body);
            all(out, &s.handlers);
            all(out, &s.orelse);
            all(out, &s.finalbody);
        }
        Stmt::TryExcept(s) => {
            all(out, &s.body);
            all(out, &s.handlers);
            all(out, &s.orelse);
        }
        Stmt::TryFinally(s) => {
            all(out, &s.body);
            all(out, &s.finalbody);
        }
        Stmt::Assert(s) => {
            one(out, &s.test);
            opt(out, s.msg.as_ref());
        }
        Stmt::Import(s) => all(out, &s.names),
        Stmt::ImportFrom(s) => all(out, &s.names),
        Stmt::Exec(s) => {
            one(out, &s.body);
            opt(out, s.globals.as_ref());
            opt(out, s.locals.as_ref());
        }
        Stmt::Match(s) => {
            one(out, &s.subject);
            all(out, &s.cases);
        }
        Stmt::TypeAlias(s) => {
            one(out, &s.name);
            all(out, &s.type_params);
            one(out, &s.value);
        }
        Stmt::Expr(s) => one(out, &s.value),
        Stmt::Global(_) | Stmt::Nonlocal(_) | Stmt::Pass(_) | Stmt::Break(_) | Stmt::Continue(_) => {}
    }
}

fn pattern_children<'a>(out: &mut Vec<NodeRef<'a>>, pattern: &'a Pattern) {
    match pattern {
        Pattern::MatchValue(p) => one(out, &p.value),
        Pattern::MatchSequence(p) => all(out, &p.patterns),
        Pattern::MatchMapping(p) => {
            all(out, &p.keys);
            all(out, &p.patterns);
        }
        Pattern::MatchClass(p) => {
            one(out, &p.cls);
            all(out, &p.patterns);
            all(out, &p.kwd_patterns);
        }
        Pattern::MatchAs(p) => opt(out, p.pattern.as_deref()),
        Pattern::MatchOr(p) => all(out, &p.patterns),
        Pattern::MatchSingleton(_) | Pattern::MatchStar(_) => {}
    }
}

fn expr_children<'a>(out: &mut Vec<NodeRef<'a>>, expr: &'a Expr) {
    match expr {
        Expr::BoolOp(e) => {
            one(out, &e.op);
            all(out, &e.values);
        }
        Expr::NamedExpr(e) => {
            one(out, &*e.target);
            one(out, &*e.value);
        }
        Expr::BinOp(e) => {
            one(out, &*e.left);
            one(out, &e.op);
            one(out, &*e.right);
        }
        Expr::UnaryOp(e) => {
            one(out, &e.op);
            one(out, &*e.operand);
        }
        Expr::Lambda(e) => {
            one(out, &*e.args);
            one(out, &*e.body);
        }
        Expr::IfExp(e) => {
            one(out, &*e.test);
            one(out, &*e.body);
            one(out, &*e.orelse);
        }
        Expr::Dict(e) => {
            out.extend(e.keys.iter().flatten().map(NodeRef::Expr));
            all(out, &e.values);
        }
        Expr::Set(e) => all(out, &e.elts),
        Expr::ListComp(e) => {
            one(out, &*e.elt);
            all(out, &e.generators);
        }
        Expr::SetComp(e) => {
            one(out, &*e.elt);
            all(out, &e.generators);
        }
        Expr::GeneratorExp(e) => {
            one(out, &*e.elt);
            all(out, &e.generators);
        }
        Expr::DictComp(e) => {
            one(out, &*e.key);
            one(out, &*e.value);
            all(out, &e.generators);
        }
        Expr::Await(e) => one(out, &*e.value),
        Expr::Yield(e) => opt(out, e.value.as_deref()),
        Expr::YieldFrom(e) => one(out, &*e.value),
        Expr::Compare(e) => {
            one(out, &*e.left);
            all(out, &e.ops);
            all(out, &e.comparators);
        }
        Expr::Call(e) => {
            one(out, &*e.func);
            all(out, &e.args);
            all(out, &e.keywords);
            opt(out, e.starargs.as_deref());
            opt(out, e.kwargs.as_deref());
        }
        Expr::Repr(e) => one(out, &*e.value),
        Expr::FormattedValue(e) => {
            one(out, &*e.value);
            opt(out, e.format_spec.as_deref());
        }
        Expr::JoinedStr(e) => all(out, &e.values),
        Expr::Attribute(e) => one(out, &*e.value),
        Expr::Subscript(e) => {
            one(out, &*e.value);
            one(out, &*e.slice);
        }
        Expr::Starred(e) => one(out, &*e.value),
        Expr::List(e) => all(out, &e.elts),
        Expr::Tuple(e) => all(out, &e.elts),
        Expr::Slice(e) => {
            opt(out, e.lower.as_deref());
            opt(out, e.upper.as_deref());
            opt(out, e.step.as_deref());
        }
        Expr::Index(e) => one(out, &*e.value),
        Expr::ExtSlice(e) => all(out, &e.dims),
        Expr::Constant(_)
        | Expr::Num(_)
        | Expr::Str(_)
        | Expr::Bytes(_)
        | Expr::NameConstant(_)
        | Expr::Ellipsis(_)
        | Expr::Name(_) => {}
    }
}

// ============================================================================
// NodeMut
// ============================================================================

fn one_mut<'a, T>(out: &mut Vec<NodeMut<'a>>, node: &'a mut T)
where
    &'a mut T: Into<NodeMut<'a>>,
{
    out.push(node.into());
}

fn opt_mut<'a, T>(out: &mut Vec<NodeMut<'a>>, node: Option<&'a mut T>)
where
    &'a mut T: Into<NodeMut<'a>>,
{
    if let Some(node) = node {
        out.push(node.into());
    }
}

fn all_mut<'a, T>(out: &mut Vec<NodeMut<'a>>, nodes: &'a mut [T])
where
    &'a mut T: Into<NodeMut<'a>>,
{
    out.extend(nodes.iter_mut().map(Into::into));
}

impl<'a> NodeMut<'a> {
    /// Concrete kind of the referenced node.
    pub fn kind(&self) -> NodeKind {
        self.as_node_ref().kind()
    }

    /// Shared view of the same node.
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            NodeMut::Mod(node) => NodeRef::Mod(node),
            NodeMut::Stmt(node) => NodeRef::Stmt(node),
            NodeMut::Expr(node) => NodeRef::Expr(node),
            NodeMut::Handler(node) => NodeRef::Handler(node),
            NodeMut::Pattern(node) => NodeRef::Pattern(node),
            NodeMut::TypeParam(node) => NodeRef::TypeParam(node),
            NodeMut::Arguments(node) => NodeRef::Arguments(node),
            NodeMut::Arg(node) => NodeRef::Arg(node),
            NodeMut::Keyword(node) => NodeRef::Keyword(node),
            NodeMut::Alias(node) => NodeRef::Alias(node),
            NodeMut::Comprehension(node) => NodeRef::Comprehension(node),
            NodeMut::WithItem(node) => NodeRef::WithItem(node),
            NodeMut::MatchCase(node) => NodeRef::MatchCase(node),
        }
    }

    /// Mutable access to the position slot, for kinds that carry one.
    pub fn position_mut(&mut self) -> Option<&mut Option<Position>> {
        match self {
            NodeMut::Stmt(node) => Some(node.position_mut()),
            NodeMut::Expr(node) => Some(node.position_mut()),
            NodeMut::Handler(node) => Some(node.position_mut()),
            NodeMut::Pattern(node) => Some(node.position_mut()),
            NodeMut::TypeParam(node) => Some(node.position_mut()),
            NodeMut::Arg(node) => Some(&mut node.position),
            _ => None,
        }
    }

    /// Consumes the handle and returns mutable handles to the direct
    /// children, in field order.
    pub fn into_children(self) -> Vec<NodeMut<'a>> {
        let mut out = Vec::new();
        match self {
            NodeMut::Mod(node) => match node {
                Mod::Module(m) => all_mut(&mut out, &mut m.body),
                Mod::Interactive(m) => all_mut(&mut out, &mut m.body),
                Mod::Suite(m) => all_mut(&mut out, &mut m.body),
                Mod::Expression(m) => one_mut(&mut out, &mut *m.body),
            },
            NodeMut::Stmt(node) => stmt_children_mut(&mut out, node),
            NodeMut::Expr(node) => expr_children_mut(&mut out, node),
            NodeMut::Handler(node) => match node {
                Handler::ExceptHandler(h) => {
                    opt_mut(&mut out, h.type_.as_mut());
                    all_mut(&mut out, &mut h.body);
                }
                Handler::LegacyExceptHandler(h) => {
                    opt_mut(&mut out, h.type_.as_mut());
                    opt_mut(&mut out, h.name.as_mut());
                    all_mut(&mut out, &mut h.body);
                }
            },
            NodeMut::Pattern(node) => pattern_children_mut(&mut out, node),
            NodeMut::TypeParam(node) => match node {
                TypeParam::TypeVar(p) => opt_mut(&mut out, p.bound.as_mut()),
                TypeParam::ParamSpec(_) | TypeParam::TypeVarTuple(_) => {}
            },
            NodeMut::Arguments(node) => {
                let Arguments {
                    posonlyargs,
                    args,
                    vararg,
                    kwonlyargs,
                    kw_defaults,
                    kwarg,
                    defaults,
                } = node;
                all_mut(&mut out, posonlyargs);
                all_mut(&mut out, args);
                opt_mut(&mut out, vararg.as_mut());
                all_mut(&mut out, kwonlyargs);
                out.extend(kw_defaults.iter_mut().flatten().map(NodeMut::Expr));
                opt_mut(&mut out, kwarg.as_mut());
                all_mut(&mut out, defaults);
            }
            NodeMut::Arg(node) => opt_mut(&mut out, node.annotation.as_mut()),
            NodeMut::Keyword(node) => one_mut(&mut out, &mut node.value),
            NodeMut::Comprehension(node) => {
                let Comprehension {
                    target, iter, ifs, ..
                } = node;
                one_mut(&mut out, target);
                one_mut(&mut out, iter);
                all_mut(&mut out, ifs);
            }
            NodeMut::WithItem(node) => {
                let WithItem {
                    context_expr,
                    optional_vars,
                } = node;
                one_mut(&mut out, context_expr);
                opt_mut(&mut out, optional_vars.as_mut());
            }
            NodeMut::MatchCase(node) => {
                let MatchCase {
                    pattern,
                    guard,
                    body,
                } = node;
                one_mut(&mut out, pattern);
                opt_mut(&mut out, guard.as_mut());
                all_mut(&mut out, body);
            }
            NodeMut::Alias(_) => {}
        }
        out
    }
}

fn stmt_children_mut<'a>(out: &mut Vec<NodeMut<'a>>, stmt: &'a mut Stmt) {
    match stmt {
        Stmt::FunctionDef(s) | Stmt::AsyncFunctionDef(s) => {
            let FunctionDef {
                args,
                body,
                decorator_list,
                returns,
                type_params,
                ..
            } = s;
            one_mut(out, args);
            all_mut(out, body);
            all_mut(out, decorator_list);
            opt_mut(out, returns.as_mut());
            all_mut(out, type_params);
        }
        Stmt::ClassDef(s) => {
            let ClassDef {
                bases,
                keywords,
                body,
                decorator_list,
                type_params,
                ..
            } = s;
            all_mut(out, bases);
            all_mut(out, keywords);
            all_mut(out, body);
            all_mut(out, decorator_list);
            all_mut(out, type_params);
        }
        Stmt::Return(s) => opt_mut(out, s.value.as_mut()),
        Stmt::Delete(s) => all_mut(out, &mut s.targets),
        Stmt::Assign(s) => {
            let Assign { targets, value, .. } = s;
            all_mut(out, targets);
            one_mut(out, value);
        }
        Stmt::AugAssign(s) => {
            let AugAssign { target, value, .. } = s;
            one_mut(out, target);
            one_mut(out, value);
        }
        Stmt::AnnAssign(s) => {
            let AnnAssign {
                target,
                annotation,
                value,
                ..
            } = s;
            one_mut(out, target);
            one_mut(out, annotation);
            opt_mut(out, value.as_mut());
        }
        Stmt::Print(s) => {
            let Print { dest, values, .. } = s;
            opt_mut(out, dest.as_mut());
            all_mut(out, values);
        }
        Stmt::For(s) | Stmt::AsyncFor(s) => {
            let For {
                target,
                iter,
                body,
                orelse,
                ..
            } = s;
            one_mut(out, target);
            one_mut(out, iter);
            all_mut(out, body);
            all_mut(out, orelse);
        }
        Stmt::While(s) => {
            let While {
                test, body, orelse, ..
            } = s;
            one_mut(out, test);
            all_mut(out, body);
            all_mut(out, orelse);
        }
        Stmt::If(s) => {
            let If {
                test, body, orelse, ..
            } = s;
            one_mut(out, test);
            all_mut(out, body);
            all_mut(out, orelse);
        }
        Stmt::With(s) | Stmt::AsyncWith(s) => {
            let With { items, body, .. } = s;
            all_mut(out, items);
            all_mut(out, body);
        }
        Stmt::LegacyWith(s) => {
            let LegacyWith {
                context_expr,
                optional_vars,
                body,
                ..
            } = s;
            one_mut(out, context_expr);
            opt_mut(out, optional_vars.as_mut());
            all_mut(out, body);
        }
        Stmt::Raise(s) => {
            let Raise { exc, cause, .. } = s;
            opt_mut(out, exc.as_mut());
            opt_mut(out, cause.as_mut());
        }
        Stmt::LegacyRaise(s) => {
            let LegacyRaise {
                type_, inst, tback, ..
            } = s;
            opt_mut(out, type_.as_mut());
            opt_mut(out, inst.as_mut());
            opt_mut(out, tback.as_mut());
        }
        Stmt::Try(s) | Stmt::TryStar(s) => {
            let Try {
                body,
                handlers,
                orelse,
                finalbody,
                ..
            } = s;
            all_mut(out, body);
            all_mut(out, handlers);
            all_mut(out, orelse);
            all_mut(out, finalbody);
        }
        Stmt::TryExcept(s) => {
            let TryExcept {
                body,
                handlers,
                orelse,
                ..
            } = s;
            all_mut(out, body);
            all_mut(out, handlers);
            all_mut(out, orelse);
        }
        Stmt::TryFinally(s) => {
            let TryFinally {
                body, finalbody, ..
            } = s;
            all_mut(out, body);
            all_mut(out, finalbody);
        }
        Stmt::Assert(s) => {
            let Assert { test, msg, .. } = s;
            one_mut(out, test);
            opt_mut(out, msg.as_mut());
        }
        Stmt::Import(s) => all_mut(out, &mut s.names),
        Stmt::ImportFrom(s) => all_mut(out, &mut s.names),
        Stmt::Exec(s) => {
            let Exec {
                body,
                globals,
                locals,
                ..
            } = s;
            one_mut(out, body);
            opt_mut(out, globals.as_mut());
            opt_mut(out, locals.as_mut());
        }
        Stmt::Match(s) => {
            let Match { subject, cases, .. } = s;
            one_mut(out, subject);
            all_mut(out, cases);
        }
        Stmt::TypeAlias(s) => {
            let TypeAlias {
                name,
                type_params,
                value,
                ..
            } = s;
            one_mut(out, name);
            all_mut(out, type_params);
            one_mut(out, value);
        }
        Stmt::Expr(s) => one_mut(out, &mut s.value),
        Stmt::Global(_) | Stmt::Nonlocal(_) | Stmt::Pass(_) | Stmt::Break(_) | Stmt::Continue(_) => {}
    }
}

fn pattern_children_mut<'a>(out: &mut Vec<NodeMut<'a>>, pattern: &'a mut Pattern) {
    match pattern {
        Pattern::MatchValue(p) => one_mut(out, &mut p.value),
        Pattern::MatchSequence(p) => all_mut(out, &mut p.patterns),
        Pattern::MatchMapping(p) => {
            let MatchMapping { keys, patterns, .. } = p;
            all_mut(out, keys);
            all_mut(out, patterns);
        }
        Pattern::MatchClass(p) => {
            let MatchClass {
                cls,
                patterns,
                kwd_patterns,
                ..
            } = p;
            one_mut(out, cls);
            all_mut(out, patterns);
            all_mut(out, kwd_patterns);
        }
        Pattern::MatchAs(p) => opt_mut(out, p.pattern.as_deref_mut()),
        Pattern::MatchOr(p) => all_mut(out, &mut p.patterns),
        Pattern::MatchSingleton(_) | Pattern::MatchStar(_) => {}
    }
}

fn expr_children_mut<'a>(out: &mut Vec<NodeMut<'a>>, expr: &'a mut Expr) {
    match expr {
        Expr::BoolOp(e) => all_mut(out, &mut e.values),
        Expr::NamedExpr(e) => {
            let NamedExpr { target, value, .. } = e;
            one_mut(out, &mut **target);
            one_mut(out, &mut **value);
        }
        Expr::BinOp(e) => {
            let BinOp { left, right, .. } = e;
            one_mut(out, &mut **left);
            one_mut(out, &mut **right);
        }
        Expr::UnaryOp(e) => one_mut(out, &mut *e.operand),
        Expr::Lambda(e) => {
            let Lambda { args, body, .. } = e;
            one_mut(out, &mut **args);
            one_mut(out, &mut **body);
        }
        Expr::IfExp(e) => {
            let IfExp {
                test, body, orelse, ..
            } = e;
            one_mut(out, &mut **test);
            one_mut(out, &mut **body);
            one_mut(out, &mut **orelse);
        }
        Expr::Dict(e) => {
            let Dict { keys, values, .. } = e;
            out.extend(keys.iter_mut().flatten().map(NodeMut::Expr));
            all_mut(out, values);
        }
        Expr::Set(e) => all_mut(out, &mut e.elts),
        Expr::ListComp(e) => {
            let ListComp {
                elt, generators, ..
            } = e;
            one_mut(out, &mut **elt);
            all_mut(out, generators);
        }
        Expr::SetComp(e) => {
            let SetComp {
                elt, generators, ..
            } = e;
            one_mut(out, &mut **elt);
            all_mut(out, generators);
        }
        Expr::GeneratorExp(e) => {
            let GeneratorExp {
                elt, generators, ..
            } = e;
            one_mut(out, &mut **elt);
            all_mut(out, generators);
        }
        Expr::DictComp(e) => {
            let DictComp {
                key,
                value,
                generators,
                ..
            } = e;
            one_mut(out, &mut **key);
            one_mut(out, &mut **value);
            all_mut(out, generators);
        }
        Expr::Await(e) => one_mut(out, &mut *e.value),
        Expr::Yield(e) => opt_mut(out, e.value.as_deref_mut()),
        Expr::YieldFrom(e) => one_mut(out, &mut *e.value),
        Expr::Compare(e) => {
            let Compare {
                left, comparators, ..
            } = e;
            one_mut(out, &mut **left);
            all_mut(out, comparators);
        }
        Expr::Call(e) => {
            let Call {
                func,
                args,
                keywords,
                starargs,
                kwargs,
                ..
            } = e;
            one_mut(out, &mut **func);
            all_mut(out, args);
            all_mut(out, keywords);
            opt_mut(out, starargs.as_deref_mut());
            opt_mut(out, kwargs.as_deref_mut());
        }
        Expr::Repr(e) => one_mut(out, &mut *e.value),
        Expr::FormattedValue(e) => {
            let FormattedValue {
                value, format_spec, ..
            } = e;
            one_mut(out, &mut **value);
            opt_mut(out, format_spec.as_deref_mut());
        }
        Expr::JoinedStr(e) => all_mut(out, &mut e.values),
        Expr::Attribute(e) => one_mut(out, &mut *e.value),
        Expr::Subscript(e) => {
            let Subscript { value, slice, .. } = e;
            one_mut(out, &mut **value);
            one_mut(out, &mut **slice);
        }
        Expr::Starred(e) => one_mut(out, &mut *e.value),
        Expr::List(e) => all_mut(out, &mut e.elts),
        Expr::Tuple(e) => all_mut(out, &mut e.elts),
        Expr::Slice(e) => {
            let Slice {
                lower, upper, step, ..
            } = e;
            opt_mut(out, lower.as_deref_mut());
            opt_mut(out, upper.as_deref_mut());
            opt_mut(out, step.as_deref_mut());
        }
        Expr::Index(e) => one_mut(out, &mut *e.value),
        Expr::ExtSlice(e) => all_mut(out, &mut e.dims),
        Expr::Constant(_)
        | Expr::Num(_)
        | Expr::Str(_)
        | Expr::Bytes(_)
        | Expr::NameConstant(_)
        | Expr::Ellipsis(_)
        | Expr::Name(_) => {}
    }
}
