// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Rendering rules for roots, statements and exception handlers.

use super::error::{RenderError, RenderResult};
use super::literal::docstring_literal;
use super::state::RenderState;
use super::SourceRenderer;
use crate::kinds::NodeKind;
use crate::nodes::*;

/// Returns the docstring text when `body` opens with a string expression
/// statement.
fn docstring_text(body: &[Stmt]) -> Option<(&Expr, &str)> {
    match body.first()? {
        Stmt::Expr(ExprStmt { value, .. }) => match value {
            Expr::Str(s) => Some((value, s.s.as_str())),
            Expr::Constant(Constant {
                value: ConstantValue::Str(s),
                ..
            }) => Some((value, s.as_str())),
            _ => None,
        },
        _ => None,
    }
}

impl SourceRenderer {
    pub(crate) fn module(&self, module: &Mod, state: &mut RenderState) -> RenderResult<()> {
        self.check(module.kind())?;
        match module {
            Mod::Module(m) => {
                let rest = match docstring_text(&m.body) {
                    Some((expr, text)) => {
                        self.docstring(expr, text, state)?;
                        &m.body[1..]
                    }
                    None => &m.body[..],
                };
                // Future imports must precede every other statement.
                let (future, other): (Vec<&Stmt>, Vec<&Stmt>) =
                    rest.iter().partition(|stmt| stmt.is_future_import());
                for stmt in future.into_iter().chain(other) {
                    self.stmt(stmt, state)?;
                }
            }
            Mod::Interactive(m) => self.stmts(&m.body, state)?,
            Mod::Suite(m) => self.stmts(&m.body, state)?,
            Mod::Expression(e) => {
                let text = self.expr(&e.body)?;
                state.emit(&text);
            }
        }
        Ok(())
    }

    fn stmts(&self, stmts: &[Stmt], state: &mut RenderState) -> RenderResult<()> {
        for stmt in stmts {
            self.stmt(stmt, state)?;
        }
        Ok(())
    }

    /// Renders `body` one level deeper. An empty body becomes `pass`.
    pub(super) fn block(&self, body: &[Stmt], state: &mut RenderState) -> RenderResult<()> {
        state.block(|state| {
            if body.is_empty() {
                state.emit("pass");
                Ok(())
            } else {
                self.stmts(body, state)
            }
        })
    }

    /// Like [`Self::block`], rendering a leading string statement as a
    /// docstring.
    fn doc_block(&self, body: &[Stmt], state: &mut RenderState) -> RenderResult<()> {
        match docstring_text(body) {
            Some((expr, text)) => state.block(|state| {
                self.docstring(expr, text, state)?;
                self.stmts(&body[1..], state)
            }),
            None => self.block(body, state),
        }
    }

    fn docstring(&self, expr: &Expr, text: &str, state: &mut RenderState) -> RenderResult<()> {
        self.check(NodeKind::Expr)?;
        self.check(expr.kind())?;
        state.emit_verbatim(&docstring_literal(text));
        Ok(())
    }

    fn else_block(&self, orelse: &[Stmt], state: &mut RenderState) -> RenderResult<()> {
        if !orelse.is_empty() {
            state.emit("else:");
            self.block(orelse, state)?;
        }
        Ok(())
    }

    fn decorators(&self, decorators: &[Expr], state: &mut RenderState) -> RenderResult<()> {
        for decorator in decorators {
            let text = self.expr(decorator)?;
            state.emit(&format!("@{}", text));
        }
        Ok(())
    }

    pub(crate) fn stmt(&self, stmt: &Stmt, state: &mut RenderState) -> RenderResult<()> {
        let kind = stmt.kind();
        self.check(kind)?;
        match stmt {
            Stmt::FunctionDef(def) => self.function_def("def", def, state),
            Stmt::AsyncFunctionDef(def) => self.function_def("async def", def, state),
            Stmt::ClassDef(class) => {
                self.decorators(&class.decorator_list, state)?;
                let mut parts = self.exprs(&class.bases)?;
                for keyword in &class.keywords {
                    parts.push(self.keyword(keyword)?);
                }
                let params = self.type_params(&class.type_params)?;
                if parts.is_empty() {
                    state.emit(&format!("class {}{}:", class.name, params));
                } else {
                    state.emit(&format!(
                        "class {}{}({}):",
                        class.name,
                        params,
                        parts.join(", ")
                    ));
                }
                self.doc_block(&class.body, state)
            }
            Stmt::Return(ret) => {
                match &ret.value {
                    Some(value) => state.emit(&format!("return {}", self.expr(value)?)),
                    None => state.emit("return"),
                }
                Ok(())
            }
            Stmt::Delete(del) => {
                if del.targets.is_empty() {
                    return Err(RenderError::malformed(kind, "no targets"));
                }
                state.emit(&format!("del {}", self.exprs(&del.targets)?.join(", ")));
                Ok(())
            }
            Stmt::Assign(assign) => {
                if assign.targets.is_empty() {
                    return Err(RenderError::malformed(kind, "no targets"));
                }
                let mut parts = self.exprs(&assign.targets)?;
                parts.push(self.expr(&assign.value)?);
                state.emit(&parts.join(" = "));
                Ok(())
            }
            Stmt::AugAssign(aug) => {
                self.check(aug.op.kind())?;
                state.emit(&format!(
                    "{} {}= {}",
                    self.expr(&aug.target)?,
                    aug.op.as_str(),
                    self.expr(&aug.value)?
                ));
                Ok(())
            }
            Stmt::AnnAssign(ann) => {
                let mut target = self.expr(&ann.target)?;
                if !ann.simple && matches!(ann.target, Expr::Name(_)) {
                    target = format!("({})", target);
                }
                let mut line = format!("{}: {}", target, self.expr(&ann.annotation)?);
                if let Some(value) = &ann.value {
                    line.push_str(" = ");
                    line.push_str(&self.expr(value)?);
                }
                state.emit(&line);
                Ok(())
            }
            Stmt::Print(print) => {
                let mut line = String::from("print");
                if let Some(dest) = &print.dest {
                    line.push_str(" >>");
                    line.push_str(&self.expr(dest)?);
                }
                if !print.values.is_empty() {
                    line.push_str(if print.dest.is_some() { ", " } else { " " });
                    line.push_str(&self.exprs(&print.values)?.join(", "));
                    if !print.nl {
                        line.push(',');
                    }
                }
                state.emit(&line);
                Ok(())
            }
            Stmt::For(for_) => self.for_loop("for", for_, state),
            Stmt::AsyncFor(for_) => self.for_loop("async for", for_, state),
            Stmt::While(while_) => {
                state.emit(&format!("while {}:", self.expr(&while_.test)?));
                self.block(&while_.body, state)?;
                self.else_block(&while_.orelse, state)
            }
            Stmt::If(if_) => {
                state.emit(&format!("if {}:", self.expr(&if_.test)?));
                self.block(&if_.body, state)?;
                self.else_block(&if_.orelse, state)
            }
            Stmt::With(with) => self.with("with", with, kind, state),
            Stmt::AsyncWith(with) => self.with("async with", with, kind, state),
            Stmt::LegacyWith(with) => {
                let mut header = format!("with {}", self.expr(&with.context_expr)?);
                if let Some(vars) = &with.optional_vars {
                    header.push_str(" as ");
                    header.push_str(&self.expr(vars)?);
                }
                header.push(':');
                state.emit(&header);
                self.block(&with.body, state)
            }
            Stmt::Raise(raise) => {
                let line = match (&raise.exc, &raise.cause) {
                    (None, None) => "raise".to_string(),
                    (Some(exc), None) => format!("raise {}", self.expr(exc)?),
                    (Some(exc), Some(cause)) => {
                        format!("raise {} from {}", self.expr(exc)?, self.expr(cause)?)
                    }
                    (None, Some(_)) => {
                        return Err(RenderError::malformed(kind, "cause without exception"))
                    }
                };
                state.emit(&line);
                Ok(())
            }
            Stmt::LegacyRaise(raise) => {
                let Some(type_) = &raise.type_ else {
                    if raise.inst.is_some() || raise.tback.is_some() {
                        return Err(RenderError::malformed(
                            kind,
                            "instance or traceback without exception type",
                        ));
                    }
                    state.emit("raise");
                    return Ok(());
                };
                let mut parts = vec![self.expr(type_)?];
                match (&raise.inst, &raise.tback) {
                    (Some(inst), tback) => {
                        parts.push(self.expr(inst)?);
                        if let Some(tback) = tback {
                            parts.push(self.expr(tback)?);
                        }
                    }
                    (None, Some(tback)) => {
                        parts.push("None".to_string());
                        parts.push(self.expr(tback)?);
                    }
                    (None, None) => {}
                }
                state.emit(&format!("raise {}", parts.join(", ")));
                Ok(())
            }
            Stmt::Try(try_) | Stmt::TryStar(try_) => {
                if try_.handlers.is_empty() && try_.finalbody.is_empty() {
                    return Err(RenderError::malformed(
                        kind,
                        "neither handlers nor finally block",
                    ));
                }
                if try_.handlers.is_empty() && !try_.orelse.is_empty() {
                    return Err(RenderError::malformed(kind, "else block without handlers"));
                }
                let star = kind == NodeKind::TryStar;
                state.emit("try:");
                self.block(&try_.body, state)?;
                self.handlers(&try_.handlers, star, state)?;
                self.else_block(&try_.orelse, state)?;
                self.finally_block(&try_.finalbody, state)
            }
            Stmt::TryExcept(try_) => {
                if try_.handlers.is_empty() {
                    return Err(RenderError::malformed(kind, "no handlers"));
                }
                state.emit("try:");
                self.block(&try_.body, state)?;
                self.handlers(&try_.handlers, false, state)?;
                self.else_block(&try_.orelse, state)
            }
            Stmt::TryFinally(try_) => {
                match try_.body.as_slice() {
                    // try/except/finally is stored as a TryExcept inside a
                    // TryFinally; render it as one statement.
                    [Stmt::TryExcept(inner)] if !inner.handlers.is_empty() => {
                        self.check(NodeKind::TryExcept)?;
                        state.emit("try:");
                        self.block(&inner.body, state)?;
                        self.handlers(&inner.handlers, false, state)?;
                        self.else_block(&inner.orelse, state)?;
                    }
                    body => {
                        state.emit("try:");
                        self.block(body, state)?;
                    }
                }
                state.emit("finally:");
                self.block(&try_.finalbody, state)
            }
            Stmt::Assert(assert) => {
                let mut line = format!("assert {}", self.expr(&assert.test)?);
                if let Some(msg) = &assert.msg {
                    line.push_str(", ");
                    line.push_str(&self.expr(msg)?);
                }
                state.emit(&line);
                Ok(())
            }
            Stmt::Import(import) => {
                if import.names.is_empty() {
                    return Err(RenderError::malformed(kind, "no names"));
                }
                state.emit(&format!("import {}", self.aliases(&import.names)?));
                Ok(())
            }
            Stmt::ImportFrom(import) => {
                if import.names.is_empty() {
                    return Err(RenderError::malformed(kind, "no names"));
                }
                if import.module.is_none() && import.level == 0 {
                    return Err(RenderError::malformed(
                        kind,
                        "absolute import without a module",
                    ));
                }
                let dots = ".".repeat(import.level as usize);
                let module = import.module.as_deref().unwrap_or_default();
                state.emit(&format!(
                    "from {}{} import {}",
                    dots,
                    module,
                    self.aliases(&import.names)?
                ));
                Ok(())
            }
            Stmt::Exec(exec) => {
                let mut line = format!("exec {}", self.expr(&exec.body)?);
                match (&exec.globals, &exec.locals) {
                    (Some(globals), locals) => {
                        line.push_str(" in ");
                        line.push_str(&self.expr(globals)?);
                        if let Some(locals) = locals {
                            line.push_str(", ");
                            line.push_str(&self.expr(locals)?);
                        }
                    }
                    (None, Some(_)) => {
                        return Err(RenderError::malformed(kind, "locals without globals"))
                    }
                    (None, None) => {}
                }
                state.emit(&line);
                Ok(())
            }
            Stmt::Match(m) => {
                if m.cases.is_empty() {
                    return Err(RenderError::malformed(kind, "no cases"));
                }
                state.emit(&format!("match {}:", self.expr(&m.subject)?));
                state.block(|state| {
                    for case in &m.cases {
                        self.match_case(case, state)?;
                    }
                    Ok(())
                })
            }
            Stmt::TypeAlias(alias) => {
                state.emit(&format!(
                    "type {}{} = {}",
                    self.expr(&alias.name)?,
                    self.type_params(&alias.type_params)?,
                    self.expr(&alias.value)?
                ));
                Ok(())
            }
            Stmt::Global(global) => self.names("global", &global.names, kind, state),
            Stmt::Nonlocal(nonlocal) => self.names("nonlocal", &nonlocal.names, kind, state),
            Stmt::Expr(expr) => {
                let text = self.expr(&expr.value)?;
                state.emit(&text);
                Ok(())
            }
            Stmt::Pass(_) => {
                state.emit("pass");
                Ok(())
            }
            Stmt::Break(_) => {
                state.emit("break");
                Ok(())
            }
            Stmt::Continue(_) => {
                state.emit("continue");
                Ok(())
            }
        }
    }

    fn function_def(
        &self,
        keyword: &str,
        def: &FunctionDef,
        state: &mut RenderState,
    ) -> RenderResult<()> {
        self.decorators(&def.decorator_list, state)?;
        let mut header = format!(
            "{} {}{}({})",
            keyword,
            def.name,
            self.type_params(&def.type_params)?,
            self.arguments(&def.args, true)?
        );
        if let Some(returns) = &def.returns {
            header.push_str(" -> ");
            header.push_str(&self.expr(returns)?);
        }
        header.push(':');
        state.emit(&header);
        self.doc_block(&def.body, state)
    }

    fn for_loop(&self, keyword: &str, for_: &For, state: &mut RenderState) -> RenderResult<()> {
        state.emit(&format!(
            "{} {} in {}:",
            keyword,
            self.expr(&for_.target)?,
            self.expr(&for_.iter)?
        ));
        self.block(&for_.body, state)?;
        self.else_block(&for_.orelse, state)
    }

    fn with(
        &self,
        keyword: &str,
        with: &With,
        kind: NodeKind,
        state: &mut RenderState,
    ) -> RenderResult<()> {
        if with.items.is_empty() {
            return Err(RenderError::malformed(kind, "no context items"));
        }
        let items = with
            .items
            .iter()
            .map(|item| self.with_item(item))
            .collect::<RenderResult<Vec<_>>>()?;
        state.emit(&format!("{} {}:", keyword, items.join(", ")));
        self.block(&with.body, state)
    }

    fn finally_block(&self, finalbody: &[Stmt], state: &mut RenderState) -> RenderResult<()> {
        if !finalbody.is_empty() {
            state.emit("finally:");
            self.block(finalbody, state)?;
        }
        Ok(())
    }

    fn handlers(&self, handlers: &[Handler], star: bool, state: &mut RenderState) -> RenderResult<()> {
        for handler in handlers {
            self.handler(handler, star, state)?;
        }
        Ok(())
    }

    /// Renders an `except` clause and its block. `star` selects `except*`.
    pub(crate) fn handler(
        &self,
        handler: &Handler,
        star: bool,
        state: &mut RenderState,
    ) -> RenderResult<()> {
        let kind = handler.kind();
        self.check(kind)?;
        let keyword = if star { "except*" } else { "except" };
        let header = match handler {
            Handler::ExceptHandler(h) => match (&h.type_, &h.name) {
                (None, None) if star => {
                    return Err(RenderError::malformed(kind, "except* without a type"))
                }
                (None, None) => format!("{}:", keyword),
                (Some(type_), None) => format!("{} {}:", keyword, self.expr(type_)?),
                (Some(type_), Some(name)) => {
                    format!("{} {} as {}:", keyword, self.expr(type_)?, name)
                }
                (None, Some(_)) => {
                    return Err(RenderError::malformed(kind, "name without exception type"))
                }
            },
            Handler::LegacyExceptHandler(_) if star => {
                return Err(RenderError::malformed(
                    NodeKind::TryStar,
                    "legacy handler in except* statement",
                ))
            }
            Handler::LegacyExceptHandler(h) => match (&h.type_, &h.name) {
                (None, None) => "except:".to_string(),
                (Some(type_), None) => format!("except {}:", self.expr(type_)?),
                (Some(type_), Some(name)) => {
                    format!("except {}, {}:", self.expr(type_)?, self.expr(name)?)
                }
                (None, Some(_)) => {
                    return Err(RenderError::malformed(kind, "target without exception type"))
                }
            },
        };
        state.emit(&header);
        self.block(handler.body(), state)
    }

    fn names(
        &self,
        keyword: &str,
        names: &[String],
        kind: NodeKind,
        state: &mut RenderState,
    ) -> RenderResult<()> {
        if names.is_empty() {
            return Err(RenderError::malformed(kind, "no names"));
        }
        state.emit(&format!("{} {}", keyword, names.join(", ")));
        Ok(())
    }

    fn aliases(&self, aliases: &[Alias]) -> RenderResult<String> {
        let parts = aliases
            .iter()
            .map(|alias| self.alias(alias))
            .collect::<RenderResult<Vec<_>>>()?;
        Ok(parts.join(", "))
    }

    pub(crate) fn alias(&self, alias: &Alias) -> RenderResult<String> {
        self.check(NodeKind::Alias)?;
        Ok(match &alias.asname {
            Some(asname) => format!("{} as {}", alias.name, asname),
            None => alias.name.clone(),
        })
    }

    pub(crate) fn with_item(&self, item: &WithItem) -> RenderResult<String> {
        self.check(NodeKind::WithItem)?;
        let context = self.expr(&item.context_expr)?;
        Ok(match &item.optional_vars {
            Some(vars) => format!("{} as {}", context, self.expr(vars)?),
            None => context,
        })
    }
}
