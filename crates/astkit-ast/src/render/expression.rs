// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Rendering rules for expressions and the helper kinds they contain.

use super::error::{RenderError, RenderResult};
use super::literal::{bytes_repr, constant_repr, escape_str_body, number_repr, str_repr};
use super::SourceRenderer;
use crate::kinds::NodeKind;
use crate::nodes::*;

/// Quote styles tried, in order, when rendering an f-string.
const FSTRING_QUOTES: [&str; 4] = ["'", "\"", "'''", "\"\"\""];

/// A piece of an f-string body: literal text, which is escaped for the
/// chosen quote, or replacement-field syntax, which is emitted verbatim.
enum Segment {
    Literal(String),
    Code(String),
}

impl SourceRenderer {
    pub(crate) fn expr(&self, expr: &Expr) -> RenderResult<String> {
        let kind = expr.kind();
        self.check(kind)?;
        let text = match expr {
            Expr::BoolOp(op) => {
                self.check(op.op.kind())?;
                if op.values.len() < 2 {
                    return Err(RenderError::malformed(kind, "fewer than two operands"));
                }
                let sep = format!(" {} ", op.op.as_str());
                format!("({})", self.exprs(&op.values)?.join(&sep))
            }
            Expr::NamedExpr(named) => format!(
                "({} := {})",
                self.expr(&named.target)?,
                self.expr(&named.value)?
            ),
            Expr::BinOp(bin) => {
                self.check(bin.op.kind())?;
                format!(
                    "({} {} {})",
                    self.expr(&bin.left)?,
                    bin.op.as_str(),
                    self.expr(&bin.right)?
                )
            }
            Expr::UnaryOp(unary) => {
                self.check(unary.op.kind())?;
                let operand = self.expr(&unary.operand)?;
                match unary.op {
                    UnaryOperator::Not => format!("(not {})", operand),
                    op => format!("({}{})", op.as_str(), operand),
                }
            }
            Expr::Lambda(lambda) => {
                let params = self.arguments(&lambda.args, false)?;
                let body = self.expr(&lambda.body)?;
                if params.is_empty() {
                    format!("(lambda: {})", body)
                } else {
                    format!("(lambda {}: {})", params, body)
                }
            }
            Expr::IfExp(if_exp) => format!(
                "({} if {} else {})",
                self.expr(&if_exp.body)?,
                self.expr(&if_exp.test)?,
                self.expr(&if_exp.orelse)?
            ),
            Expr::Dict(dict) => {
                if dict.keys.len() != dict.values.len() {
                    return Err(RenderError::malformed(
                        kind,
                        format!(
                            "{} keys but {} values",
                            dict.keys.len(),
                            dict.values.len()
                        ),
                    ));
                }
                let entries = dict
                    .keys
                    .iter()
                    .zip(&dict.values)
                    .map(|(key, value)| match key {
                        Some(key) => Ok(format!("{}: {}", self.expr(key)?, self.expr(value)?)),
                        None => Ok(format!("**{}", self.expr(value)?)),
                    })
                    .collect::<RenderResult<Vec<_>>>()?;
                format!("{{{}}}", entries.join(", "))
            }
            Expr::Set(set) => {
                if set.elts.is_empty() {
                    "set()".to_string()
                } else {
                    format!("{{{}}}", self.exprs(&set.elts)?.join(", "))
                }
            }
            Expr::ListComp(comp) => {
                let head = self.expr(&comp.elt)?;
                self.comprehension_display(kind, "[", head, &comp.generators, "]")?
            }
            Expr::SetComp(comp) => {
                let head = self.expr(&comp.elt)?;
                self.comprehension_display(kind, "{", head, &comp.generators, "}")?
            }
            Expr::DictComp(comp) => {
                let head = format!("{}: {}", self.expr(&comp.key)?, self.expr(&comp.value)?);
                self.comprehension_display(kind, "{", head, &comp.generators, "}")?
            }
            Expr::GeneratorExp(comp) => {
                let head = self.expr(&comp.elt)?;
                self.comprehension_display(kind, "(", head, &comp.generators, ")")?
            }
            Expr::Await(await_) => format!("(await {})", self.expr(&await_.value)?),
            Expr::Yield(yield_) => match &yield_.value {
                Some(value) => format!("(yield {})", self.expr(value)?),
                None => "(yield)".to_string(),
            },
            Expr::YieldFrom(yield_from) => {
                format!("(yield from {})", self.expr(&yield_from.value)?)
            }
            Expr::Compare(compare) => {
                if compare.ops.is_empty() {
                    return Err(RenderError::malformed(kind, "no comparisons"));
                }
                if compare.ops.len() != compare.comparators.len() {
                    return Err(RenderError::malformed(
                        kind,
                        format!(
                            "{} operators but {} comparators",
                            compare.ops.len(),
                            compare.comparators.len()
                        ),
                    ));
                }
                let mut text = format!("({}", self.expr(&compare.left)?);
                for (op, comparator) in compare.ops.iter().zip(&compare.comparators) {
                    self.check(op.kind())?;
                    text.push(' ');
                    text.push_str(op.as_str());
                    text.push(' ');
                    text.push_str(&self.expr(comparator)?);
                }
                text.push(')');
                text
            }
            Expr::Call(call) => {
                let mut parts = self.exprs(&call.args)?;
                for keyword in &call.keywords {
                    parts.push(self.keyword(keyword)?);
                }
                if let Some(starargs) = &call.starargs {
                    parts.push(format!("*{}", self.expr(starargs)?));
                }
                if let Some(kwargs) = &call.kwargs {
                    parts.push(format!("**{}", self.expr(kwargs)?));
                }
                format!("{}({})", self.expr(&call.func)?, parts.join(", "))
            }
            Expr::Repr(repr) => format!("`{}`", self.expr(&repr.value)?),
            Expr::FormattedValue(value) => {
                let mut segments = Vec::new();
                self.formatted_value(value, &mut segments)?;
                self.fstring(kind, segments)?
            }
            Expr::JoinedStr(joined) => {
                let mut segments = Vec::new();
                self.fstring_values(&joined.values, &mut segments)?;
                self.fstring(kind, segments)?
            }
            Expr::Constant(constant) => constant_repr(&constant.value),
            Expr::Num(num) => number_repr(&num.n),
            Expr::Str(s) => str_repr(&s.s),
            Expr::Bytes(b) => bytes_repr(&b.s),
            Expr::NameConstant(constant) => constant.value.as_str().to_string(),
            Expr::Ellipsis(_) => "...".to_string(),
            Expr::Attribute(attr) => {
                let value = self.expr(&attr.value)?;
                // `5.real` would lex as a float literal.
                let int_literal = matches!(
                    attr.value.as_ref(),
                    Expr::Constant(Constant {
                        value: ConstantValue::Int(_),
                        ..
                    }) | Expr::Num(Num {
                        n: Number::Int(_),
                        ..
                    })
                );
                if int_literal && !value.starts_with('(') {
                    format!("({}).{}", value, attr.attr)
                } else {
                    format!("{}.{}", value, attr.attr)
                }
            }
            Expr::Subscript(sub) => {
                let slice = match sub.slice.as_ref() {
                    Expr::Tuple(tuple) if !tuple.elts.is_empty() => {
                        self.check(NodeKind::Tuple)?;
                        self.unparenthesized(&tuple.elts)?
                    }
                    slice => self.expr(slice)?,
                };
                format!("{}[{}]", self.expr(&sub.value)?, slice)
            }
            Expr::Starred(starred) => format!("*{}", self.expr(&starred.value)?),
            Expr::Name(name) => name.id.clone(),
            Expr::List(list) => format!("[{}]", self.exprs(&list.elts)?.join(", ")),
            Expr::Tuple(tuple) => {
                if tuple.elts.is_empty() {
                    "()".to_string()
                } else {
                    format!("({})", self.unparenthesized(&tuple.elts)?)
                }
            }
            Expr::Slice(slice) => {
                let mut text = self.opt_expr(slice.lower.as_deref())?;
                text.push(':');
                text.push_str(&self.opt_expr(slice.upper.as_deref())?);
                if let Some(step) = &slice.step {
                    text.push(':');
                    text.push_str(&self.expr(step)?);
                }
                text
            }
            Expr::Index(index) => self.expr(&index.value)?,
            Expr::ExtSlice(ext) => {
                if ext.dims.is_empty() {
                    return Err(RenderError::malformed(kind, "no dimensions"));
                }
                self.unparenthesized(&ext.dims)?
            }
        };
        Ok(text)
    }

    pub(crate) fn exprs(&self, exprs: &[Expr]) -> RenderResult<Vec<String>> {
        exprs.iter().map(|expr| self.expr(expr)).collect()
    }

    fn opt_expr(&self, expr: Option<&Expr>) -> RenderResult<String> {
        match expr {
            Some(expr) => self.expr(expr),
            None => Ok(String::new()),
        }
    }

    /// Comma-separated elements; a single element keeps its trailing comma.
    fn unparenthesized(&self, elts: &[Expr]) -> RenderResult<String> {
        let parts = self.exprs(elts)?;
        Ok(match parts.as_slice() {
            [single] => format!("{},", single),
            _ => parts.join(", "),
        })
    }

    fn comprehension_display(
        &self,
        kind: NodeKind,
        open: &str,
        head: String,
        generators: &[Comprehension],
        close: &str,
    ) -> RenderResult<String> {
        if generators.is_empty() {
            return Err(RenderError::malformed(kind, "no generators"));
        }
        let mut text = format!("{} {}", open, head);
        for generator in generators {
            for line in self.comprehension(generator)? {
                text.push_str("\n  ");
                text.push_str(&line);
            }
        }
        text.push(' ');
        text.push_str(close);
        Ok(text)
    }

    /// The `for` line of a comprehension clause followed by one line per
    /// condition.
    pub(crate) fn comprehension(&self, comp: &Comprehension) -> RenderResult<Vec<String>> {
        self.check(NodeKind::Comprehension)?;
        let keyword = if comp.is_async { "async for" } else { "for" };
        let mut lines = vec![format!(
            "{} {} in {}",
            keyword,
            self.expr(&comp.target)?,
            self.expr(&comp.iter)?
        )];
        for condition in &comp.ifs {
            lines.push(format!("if {}", self.expr(condition)?));
        }
        Ok(lines)
    }

    pub(crate) fn keyword(&self, keyword: &Keyword) -> RenderResult<String> {
        self.check(NodeKind::Keyword)?;
        let value = self.expr(&keyword.value)?;
        Ok(match &keyword.arg {
            Some(arg) => format!("{}={}", arg, value),
            None => format!("**{}", value),
        })
    }

    /// A single parameter. Lambdas pass `annotations = false`, which rejects
    /// annotated parameters.
    pub(crate) fn arg(&self, arg: &Arg, annotations: bool) -> RenderResult<String> {
        self.check(NodeKind::Arg)?;
        match &arg.annotation {
            Some(_) if !annotations => Err(RenderError::malformed(
                NodeKind::Lambda,
                format!("parameter '{}' is annotated", arg.arg),
            )),
            Some(annotation) => Ok(format!("{}: {}", arg.arg, self.expr(annotation)?)),
            None => Ok(arg.arg.clone()),
        }
    }

    fn arg_with_default(
        &self,
        arg: &Arg,
        default: Option<&Expr>,
        annotations: bool,
    ) -> RenderResult<String> {
        let mut text = self.arg(arg, annotations)?;
        if let Some(default) = default {
            let sep = if arg.annotation.is_some() { " = " } else { "=" };
            text.push_str(sep);
            text.push_str(&self.expr(default)?);
        }
        Ok(text)
    }

    /// Parameter list without the surrounding parentheses.
    pub(crate) fn arguments(&self, args: &Arguments, annotations: bool) -> RenderResult<String> {
        let kind = NodeKind::Arguments;
        self.check(kind)?;
        let positional: Vec<&Arg> = args.posonlyargs.iter().chain(&args.args).collect();
        if args.defaults.len() > positional.len() {
            return Err(RenderError::malformed(
                kind,
                "more defaults than positional parameters",
            ));
        }
        if !args.kw_defaults.is_empty() && args.kw_defaults.len() != args.kwonlyargs.len() {
            return Err(RenderError::malformed(
                kind,
                "keyword-only defaults do not match keyword-only parameters",
            ));
        }

        let first_default = positional.len() - args.defaults.len();
        let mut parts = Vec::new();
        for (i, arg) in positional.iter().enumerate() {
            let default = i
                .checked_sub(first_default)
                .and_then(|d| args.defaults.get(d));
            parts.push(self.arg_with_default(arg, default, annotations)?);
            if i + 1 == args.posonlyargs.len() {
                parts.push("/".to_string());
            }
        }

        match &args.vararg {
            Some(vararg) => parts.push(format!("*{}", self.arg(vararg, annotations)?)),
            None if !args.kwonlyargs.is_empty() => parts.push("*".to_string()),
            None => {}
        }
        for (i, arg) in args.kwonlyargs.iter().enumerate() {
            let default = args.kw_defaults.get(i).and_then(Option::as_ref);
            parts.push(self.arg_with_default(arg, default, annotations)?);
        }
        if let Some(kwarg) = &args.kwarg {
            parts.push(format!("**{}", self.arg(kwarg, annotations)?));
        }
        Ok(parts.join(", "))
    }

    fn fstring_values(&self, values: &[Expr], out: &mut Vec<Segment>) -> RenderResult<()> {
        for value in values {
            match value {
                Expr::Constant(Constant {
                    value: ConstantValue::Str(s),
                    ..
                }) => {
                    self.check(NodeKind::Constant)?;
                    out.push(Segment::Literal(s.clone()));
                }
                Expr::Str(s) => {
                    self.check(NodeKind::Str)?;
                    out.push(Segment::Literal(s.s.clone()));
                }
                Expr::FormattedValue(formatted) => self.formatted_value(formatted, out)?,
                other => {
                    return Err(RenderError::malformed(
                        NodeKind::JoinedStr,
                        format!("unexpected '{}' part", other.kind()),
                    ))
                }
            }
        }
        Ok(())
    }

    fn formatted_value(&self, value: &FormattedValue, out: &mut Vec<Segment>) -> RenderResult<()> {
        self.check(NodeKind::FormattedValue)?;
        let text = self.expr(&value.value)?;
        let mut code = String::from("{");
        // `{{` would read as an escaped brace.
        if text.starts_with('{') {
            code.push(' ');
        }
        code.push_str(&text);
        if let Some(conversion) = value.conversion {
            code.push('!');
            code.push(conversion.as_char());
        }
        out.push(Segment::Code(code));
        if let Some(spec) = &value.format_spec {
            match spec.as_ref() {
                Expr::JoinedStr(joined) => {
                    self.check(NodeKind::JoinedStr)?;
                    out.push(Segment::Code(":".to_string()));
                    self.fstring_values(&joined.values, out)?;
                }
                other => {
                    return Err(RenderError::malformed(
                        NodeKind::FormattedValue,
                        format!("format spec is a '{}' node", other.kind()),
                    ))
                }
            }
        }
        out.push(Segment::Code("}".to_string()));
        Ok(())
    }

    /// Joins f-string segments under the first quote style that none of the
    /// replacement fields contain.
    fn fstring(&self, kind: NodeKind, segments: Vec<Segment>) -> RenderResult<String> {
        let code_contains = |pattern: &str| {
            segments
                .iter()
                .any(|segment| matches!(segment, Segment::Code(code) if code.contains(pattern)))
        };

        if !self.version().allows_fstring_backslash() && code_contains("\\") {
            return Err(RenderError::malformed(
                kind,
                "backslash inside a replacement field",
            ));
        }

        let multiline = code_contains("\n");
        let quote = FSTRING_QUOTES
            .iter()
            .filter(|quote| !multiline || quote.len() == 3)
            .find(|quote| !code_contains(**quote))
            .ok_or_else(|| {
                RenderError::malformed(kind, "replacement fields use every quote style")
            })?;
        let quote_char = if quote.starts_with('\'') { '\'' } else { '"' };

        let mut body = String::new();
        for segment in &segments {
            match segment {
                Segment::Literal(text) => body.push_str(
                    &escape_str_body(text, quote_char)
                        .replace('{', "{{")
                        .replace('}', "}}"),
                ),
                Segment::Code(code) => body.push_str(code),
            }
        }
        Ok(format!("f{}{}{}", quote, body, quote))
    }
}
