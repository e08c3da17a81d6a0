// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Every node kind has a render rule.
//!
//! `sample` builds a minimal instance of each kind. Its match has no
//! wildcard arm, so adding a kind without a sample fails to compile. The
//! samples only nest kinds available from the sampled kind's first version,
//! which lets the dialect tests render each sample exactly at its
//! availability boundaries.

use astkit_ast::*;

/// An owned node of any kind.
enum Sample {
    Mod(Mod),
    Stmt(Stmt),
    Expr(Expr),
    Handler(Handler),
    Arguments(Arguments),
    Keyword(Keyword),
    Alias(Alias),
    Arg(Arg),
    Comprehension(Comprehension),
    WithItem(WithItem),
    Pattern(Pattern),
    TypeParam(TypeParam),
    MatchCase(MatchCase),
    BoolOp(BoolOperator),
    Operator(Operator),
    UnaryOp(UnaryOperator),
    CmpOp(CmpOperator),
}

impl Sample {
    fn node(&self) -> NodeRef<'_> {
        match self {
            Sample::Mod(n) => n.into(),
            Sample::Stmt(n) => n.into(),
            Sample::Expr(n) => n.into(),
            Sample::Handler(n) => n.into(),
            Sample::Arguments(n) => n.into(),
            Sample::Keyword(n) => n.into(),
            Sample::Alias(n) => n.into(),
            Sample::Arg(n) => n.into(),
            Sample::Comprehension(n) => n.into(),
            Sample::WithItem(n) => n.into(),
            Sample::Pattern(n) => n.into(),
            Sample::TypeParam(n) => n.into(),
            Sample::MatchCase(n) => n.into(),
            Sample::BoolOp(n) => n.into(),
            Sample::Operator(n) => n.into(),
            Sample::UnaryOp(n) => n.into(),
            Sample::CmpOp(n) => n.into(),
        }
    }
}

fn n(id: &str) -> Expr {
    Expr::name(id)
}

fn body() -> Vec<Stmt> {
    vec![Stmt::pass()]
}

fn b(expr: Expr) -> Box<Expr> {
    Box::new(expr)
}

fn comp() -> Vec<Comprehension> {
    vec![Comprehension::new(n("x"), n("xs"), vec![])]
}

fn for_loop() -> For {
    For {
        target: n("x"),
        iter: n("xs"),
        body: body(),
        orelse: vec![],
        position: None,
    }
}

fn with() -> With {
    With {
        items: vec![WithItem::new(n("ctx"), None)],
        body: body(),
        position: None,
    }
}

fn except_handler() -> ExceptHandler {
    ExceptHandler {
        type_: Some(n("E")),
        name: None,
        body: body(),
        position: None,
    }
}

fn legacy_handler() -> LegacyExceptHandler {
    LegacyExceptHandler {
        type_: Some(n("E")),
        name: Some(n("e")),
        body: body(),
        position: None,
    }
}

fn try_with_handler(handler: Handler) -> Try {
    Try {
        body: body(),
        handlers: vec![handler],
        orelse: vec![],
        finalbody: vec![],
        position: None,
    }
}

fn formatted(value: Expr) -> FormattedValue {
    FormattedValue {
        value: b(value),
        conversion: None,
        format_spec: None,
        position: None,
    }
}

fn sample(kind: NodeKind) -> Sample {
    use NodeKind as K;
    match kind {
        K::Module => Sample::Mod(Mod::module(body())),
        K::Interactive => Sample::Mod(Mod::Interactive(Interactive { body: body() })),
        K::Expression => Sample::Mod(Mod::Expression(Expression { body: b(n("x")) })),
        K::Suite => Sample::Mod(Mod::Suite(Suite { body: body() })),

        K::FunctionDef => Sample::Stmt(Stmt::function_def("f", Arguments::default(), body())),
        K::AsyncFunctionDef => {
            let Stmt::FunctionDef(def) = Stmt::function_def("f", Arguments::default(), body())
            else {
                unreachable!()
            };
            Sample::Stmt(Stmt::AsyncFunctionDef(def))
        }
        K::ClassDef => Sample::Stmt(Stmt::class_def("C", vec![n("Base")], body())),
        K::Return => Sample::Stmt(Stmt::return_(Some(n("x")))),
        K::Delete => Sample::Stmt(Stmt::Delete(Delete {
            targets: vec![n("x")],
            position: None,
        })),
        K::Assign => Sample::Stmt(Stmt::assign(vec![n("x")], n("y"))),
        K::AugAssign => Sample::Stmt(Stmt::AugAssign(AugAssign {
            target: n("x"),
            op: Operator::Add,
            value: n("y"),
            position: None,
        })),
        K::AnnAssign => Sample::Stmt(Stmt::AnnAssign(AnnAssign {
            target: n("x"),
            annotation: n("int"),
            value: None,
            simple: true,
            position: None,
        })),
        K::Print => Sample::Stmt(Stmt::Print(Print {
            dest: None,
            values: vec![n("x")],
            nl: true,
            position: None,
        })),
        K::For => Sample::Stmt(Stmt::For(for_loop())),
        K::AsyncFor => Sample::Stmt(Stmt::AsyncFor(for_loop())),
        K::While => Sample::Stmt(Stmt::while_(n("x"), body())),
        K::If => Sample::Stmt(Stmt::if_(n("x"), body(), body())),
        K::With => Sample::Stmt(Stmt::With(with())),
        K::AsyncWith => Sample::Stmt(Stmt::AsyncWith(with())),
        K::LegacyWith => Sample::Stmt(Stmt::LegacyWith(LegacyWith {
            context_expr: n("ctx"),
            optional_vars: Some(n("v")),
            body: body(),
            position: None,
        })),
        K::Raise => Sample::Stmt(Stmt::Raise(Raise {
            exc: Some(n("E")),
            cause: None,
            position: None,
        })),
        K::LegacyRaise => Sample::Stmt(Stmt::LegacyRaise(LegacyRaise {
            type_: Some(n("E")),
            inst: None,
            tback: None,
            position: None,
        })),
        K::Try => Sample::Stmt(Stmt::Try(try_with_handler(Handler::ExceptHandler(
            except_handler(),
        )))),
        K::TryStar => Sample::Stmt(Stmt::TryStar(try_with_handler(
            Handler::ExceptHandler(except_handler()),
        ))),
        K::TryExcept => Sample::Stmt(Stmt::TryExcept(TryExcept {
            body: body(),
            handlers: vec![Handler::LegacyExceptHandler(legacy_handler())],
            orelse: vec![],
            position: None,
        })),
        K::TryFinally => Sample::Stmt(Stmt::TryFinally(TryFinally {
            body: body(),
            finalbody: body(),
            position: None,
        })),
        K::Assert => Sample::Stmt(Stmt::assert(n("x"), None)),
        K::Import => Sample::Stmt(Stmt::import(vec![Alias::new("os")])),
        K::ImportFrom => Sample::Stmt(Stmt::import_from("os", vec![Alias::new("path")])),
        K::Exec => Sample::Stmt(Stmt::Exec(Exec {
            body: n("code"),
            globals: None,
            locals: None,
            position: None,
        })),
        K::Match => Sample::Stmt(Stmt::Match(Match {
            subject: n("x"),
            cases: vec![MatchCase::new(Pattern::wildcard(), None, body())],
            position: None,
        })),
        K::TypeAlias => Sample::Stmt(Stmt::TypeAlias(TypeAlias {
            name: n("Alias"),
            type_params: vec![TypeParam::type_var("T")],
            value: n("T"),
            position: None,
        })),
        K::Global => Sample::Stmt(Stmt::Global(Global {
            names: vec!["x".into()],
            position: None,
        })),
        K::Nonlocal => Sample::Stmt(Stmt::Nonlocal(Nonlocal {
            names: vec!["x".into()],
            position: None,
        })),
        K::Expr => Sample::Stmt(Stmt::expr(n("x"))),
        K::Pass => Sample::Stmt(Stmt::pass()),
        K::Break => Sample::Stmt(Stmt::Break(Break::default())),
        K::Continue => Sample::Stmt(Stmt::Continue(Continue::default())),

        K::BoolOp => Sample::Expr(Expr::bool_op(BoolOperator::Or, vec![n("a"), n("b")])),
        K::NamedExpr => Sample::Expr(Expr::NamedExpr(NamedExpr {
            target: b(n("x")),
            value: b(n("y")),
            position: None,
        })),
        K::BinOp => Sample::Expr(Expr::bin_op(n("a"), Operator::Sub, n("b"))),
        K::UnaryOp => Sample::Expr(Expr::unary_op(UnaryOperator::USub, n("a"))),
        K::Lambda => Sample::Expr(Expr::Lambda(Lambda {
            args: Box::new(Arguments::positional(["x"])),
            body: b(n("x")),
            position: None,
        })),
        K::IfExp => Sample::Expr(Expr::IfExp(IfExp {
            test: b(n("t")),
            body: b(n("a")),
            orelse: b(n("b")),
            position: None,
        })),
        K::Dict => Sample::Expr(Expr::Dict(Dict {
            keys: vec![Some(n("k"))],
            values: vec![n("v")],
            position: None,
        })),
        K::Set => Sample::Expr(Expr::Set(Set {
            elts: vec![n("a")],
            position: None,
        })),
        K::ListComp => Sample::Expr(Expr::ListComp(ListComp {
            elt: b(n("x")),
            generators: comp(),
            position: None,
        })),
        K::SetComp => Sample::Expr(Expr::SetComp(SetComp {
            elt: b(n("x")),
            generators: comp(),
            position: None,
        })),
        K::DictComp => Sample::Expr(Expr::DictComp(DictComp {
            key: b(n("x")),
            value: b(n("x")),
            generators: comp(),
            position: None,
        })),
        K::GeneratorExp => Sample::Expr(Expr::GeneratorExp(GeneratorExp {
            elt: b(n("x")),
            generators: comp(),
            position: None,
        })),
        K::Await => Sample::Expr(Expr::Await(Await {
            value: b(n("x")),
            position: None,
        })),
        K::Yield => Sample::Expr(Expr::Yield(Yield {
            value: Some(b(n("x"))),
            position: None,
        })),
        K::YieldFrom => Sample::Expr(Expr::YieldFrom(YieldFrom {
            value: b(n("x")),
            position: None,
        })),
        K::Compare => Sample::Expr(Expr::compare(n("a"), CmpOperator::Lt, n("b"))),
        K::Call => Sample::Expr(Expr::call(n("f"), vec![n("x")])),
        K::Repr => Sample::Expr(Expr::Repr(Repr {
            value: b(n("x")),
            position: None,
        })),
        K::FormattedValue => Sample::Expr(Expr::FormattedValue(formatted(n("x")))),
        K::JoinedStr => Sample::Expr(Expr::JoinedStr(JoinedStr {
            values: vec![
                Expr::legacy_str("x = "),
                Expr::FormattedValue(formatted(n("x"))),
            ],
            position: None,
        })),
        K::Constant => Sample::Expr(Expr::int(1)),
        K::Num => Sample::Expr(Expr::legacy_num(Number::int(1))),
        K::Str => Sample::Expr(Expr::legacy_str("s")),
        K::Bytes => Sample::Expr(Expr::Bytes(Bytes {
            s: b"s".to_vec(),
            position: None,
        })),
        K::NameConstant => Sample::Expr(Expr::NameConstant(NameConstant {
            value: Singleton::True,
            position: None,
        })),
        K::Ellipsis => Sample::Expr(Expr::Ellipsis(Ellipsis::default())),
        K::Attribute => Sample::Expr(Expr::attribute(n("obj"), "attr")),
        K::Subscript => Sample::Expr(Expr::subscript(n("xs"), n("i"))),
        K::Starred => Sample::Expr(Expr::starred(n("xs"))),
        K::Name => Sample::Expr(n("x")),
        K::List => Sample::Expr(Expr::list(vec![n("x")])),
        K::Tuple => Sample::Expr(Expr::tuple(vec![n("x")])),

        K::Slice => Sample::Expr(Expr::Slice(Slice {
            lower: Some(b(n("a"))),
            ..Slice::default()
        })),
        K::Index => Sample::Expr(Expr::Index(Index {
            value: b(n("i")),
            position: None,
        })),
        K::ExtSlice => Sample::Expr(Expr::ExtSlice(ExtSlice {
            dims: vec![n("i"), n("j")],
            position: None,
        })),

        K::And => Sample::BoolOp(BoolOperator::And),
        K::Or => Sample::BoolOp(BoolOperator::Or),

        K::Add => Sample::Operator(Operator::Add),
        K::Sub => Sample::Operator(Operator::Sub),
        K::Mult => Sample::Operator(Operator::Mult),
        K::MatMult => Sample::Operator(Operator::MatMult),
        K::Div => Sample::Operator(Operator::Div),
        K::Mod => Sample::Operator(Operator::Mod),
        K::Pow => Sample::Operator(Operator::Pow),
        K::LShift => Sample::Operator(Operator::LShift),
        K::RShift => Sample::Operator(Operator::RShift),
        K::BitOr => Sample::Operator(Operator::BitOr),
        K::BitXor => Sample::Operator(Operator::BitXor),
        K::BitAnd => Sample::Operator(Operator::BitAnd),
        K::FloorDiv => Sample::Operator(Operator::FloorDiv),

        K::Invert => Sample::UnaryOp(UnaryOperator::Invert),
        K::Not => Sample::UnaryOp(UnaryOperator::Not),
        K::UAdd => Sample::UnaryOp(UnaryOperator::UAdd),
        K::USub => Sample::UnaryOp(UnaryOperator::USub),

        K::Eq => Sample::CmpOp(CmpOperator::Eq),
        K::NotEq => Sample::CmpOp(CmpOperator::NotEq),
        K::Lt => Sample::CmpOp(CmpOperator::Lt),
        K::LtE => Sample::CmpOp(CmpOperator::LtE),
        K::Gt => Sample::CmpOp(CmpOperator::Gt),
        K::GtE => Sample::CmpOp(CmpOperator::GtE),
        K::Is => Sample::CmpOp(CmpOperator::Is),
        K::IsNot => Sample::CmpOp(CmpOperator::IsNot),
        K::In => Sample::CmpOp(CmpOperator::In),
        K::NotIn => Sample::CmpOp(CmpOperator::NotIn),

        K::ExceptHandler => Sample::Handler(Handler::ExceptHandler(except_handler())),
        K::LegacyExceptHandler => {
            Sample::Handler(Handler::LegacyExceptHandler(legacy_handler()))
        }

        K::MatchValue => Sample::Pattern(Pattern::value(Expr::int(1))),
        K::MatchSingleton => Sample::Pattern(Pattern::MatchSingleton(MatchSingleton {
            value: Singleton::None,
            position: None,
        })),
        K::MatchSequence => Sample::Pattern(Pattern::sequence(vec![Pattern::capture("x")])),
        K::MatchMapping => Sample::Pattern(Pattern::MatchMapping(MatchMapping {
            keys: vec![Expr::str("k")],
            patterns: vec![Pattern::capture("v")],
            rest: None,
            position: None,
        })),
        K::MatchClass => Sample::Pattern(Pattern::MatchClass(MatchClass {
            cls: n("Point"),
            patterns: vec![Pattern::capture("x")],
            kwd_attrs: vec!["y".into()],
            kwd_patterns: vec![Pattern::wildcard()],
            position: None,
        })),
        K::MatchStar => Sample::Pattern(Pattern::MatchStar(MatchStar {
            name: Some("rest".into()),
            position: None,
        })),
        K::MatchAs => Sample::Pattern(Pattern::capture("x")),
        K::MatchOr => Sample::Pattern(Pattern::or(vec![
            Pattern::value(Expr::int(1)),
            Pattern::value(Expr::int(2)),
        ])),

        K::TypeVar => Sample::TypeParam(TypeParam::TypeVar(TypeVar {
            name: "T".into(),
            bound: Some(n("int")),
            position: None,
        })),
        K::ParamSpec => Sample::TypeParam(TypeParam::ParamSpec(ParamSpec {
            name: "P".into(),
            position: None,
        })),
        K::TypeVarTuple => Sample::TypeParam(TypeParam::TypeVarTuple(TypeVarTuple {
            name: "Ts".into(),
            position: None,
        })),

        K::MatchCase => Sample::MatchCase(MatchCase::new(
            Pattern::capture("x"),
            Some(n("x")),
            body(),
        )),

        K::Comprehension => Sample::Comprehension(Comprehension::new(
            n("x"),
            n("xs"),
            vec![n("x")],
        )),
        K::Arguments => Sample::Arguments(Arguments::positional(["a", "b"])),
        K::Arg => Sample::Arg(Arg::new("a")),
        K::Keyword => Sample::Keyword(Keyword::new("k", n("v"))),
        K::Alias => Sample::Alias(Alias::with_asname("a", "b")),
        K::WithItem => Sample::WithItem(WithItem::new(n("ctx"), Some(n("v")))),
    }
}

fn version(pair: (u8, u8)) -> PythonVersion {
    PythonVersion::V {
        major: pair.0,
        minor: pair.1,
    }
}

#[test]
fn samples_have_their_kind() {
    for &kind in NodeKind::ALL {
        let sample = sample(kind);
        assert_eq!(sample.node().kind(), kind, "sample for {}", kind);
    }
}

#[test]
fn every_indexed_leaf_renders() {
    let renderer = SourceRenderer::default();
    let leaves = KindIndex::global().leaves();
    assert_eq!(leaves.len(), NodeKind::ALL.len());
    for kind in leaves {
        let sample = sample(kind);
        let text = renderer
            .render_node(sample.node())
            .unwrap_or_else(|e| panic!("{} failed to render: {}", kind, e));
        assert!(!text.is_empty(), "{} rendered empty text", kind);
    }
}

#[test]
fn every_kind_renders_from_its_first_version() {
    for &kind in NodeKind::ALL {
        let since = version(kind.availability().since);
        let renderer = SourceRenderer::new(since);
        let sample = sample(kind);
        if let Err(e) = renderer.render_node(sample.node()) {
            panic!("{} failed under Python {}: {}", kind, since, e);
        }
    }
}

#[test]
fn every_removed_kind_is_rejected_once_removed() {
    for &kind in NodeKind::ALL {
        let Some(until) = kind.availability().until else {
            continue;
        };
        let renderer = SourceRenderer::new(version(until));
        let sample = sample(kind);
        let err = renderer
            .render_node(sample.node())
            .expect_err("removed kind rendered");
        assert_eq!(
            err,
            RenderError::UnsupportedKind {
                kind,
                version: version(until)
            }
        );
    }
}

#[test]
fn version_index_leaves_render_under_that_version() {
    for v in [PythonVersion::V2_7, PythonVersion::V3_8, PythonVersion::V3_12] {
        let index = KindIndex::build(v);
        let renderer = SourceRenderer::new(v);
        for kind in index.leaves() {
            assert!(v.supports(kind));
            let since = kind.availability().since;
            let sample = sample(kind);
            // Samples only nest kinds available from `since`, but some of
            // those may already be removed in `v`.
            let nested_removed = sample_nests_removed_kind(&sample, v);
            let result = renderer.render_node(sample.node());
            if !nested_removed {
                assert!(result.is_ok(), "{} (since {:?}) under {}", kind, since, v);
            }
        }
    }
}

/// Returns true when any node below the sample's root is unavailable in
/// `version`.
fn sample_nests_removed_kind(sample: &Sample, version: PythonVersion) -> bool {
    let counts = accumulate(sample.node(), KindCounter::default());
    counts.keys().any(|&kind| !version.supports(kind))
}
