// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Rendering rules for `match` patterns and type parameters.
//!
//! `as` and `|` patterns are always parenthesized, like compound
//! expressions, so a pattern renders the same wherever it is nested.

use super::error::{RenderError, RenderResult};
use super::state::RenderState;
use super::SourceRenderer;
use crate::kinds::NodeKind;
use crate::nodes::*;

impl SourceRenderer {
    pub(crate) fn pattern(&self, pattern: &Pattern) -> RenderResult<String> {
        let kind = pattern.kind();
        self.check(kind)?;
        let text = match pattern {
            Pattern::MatchValue(p) => self.expr(&p.value)?,
            Pattern::MatchSingleton(p) => p.value.as_str().to_string(),
            Pattern::MatchSequence(p) => format!("[{}]", self.patterns(&p.patterns)?.join(", ")),
            Pattern::MatchMapping(p) => {
                if p.keys.len() != p.patterns.len() {
                    return Err(RenderError::malformed(
                        kind,
                        format!("{} keys but {} patterns", p.keys.len(), p.patterns.len()),
                    ));
                }
                let mut entries = Vec::with_capacity(p.keys.len() + 1);
                for (key, value) in p.keys.iter().zip(&p.patterns) {
                    entries.push(format!("{}: {}", self.expr(key)?, self.pattern(value)?));
                }
                if let Some(rest) = &p.rest {
                    entries.push(format!("**{}", rest));
                }
                format!("{{{}}}", entries.join(", "))
            }
            Pattern::MatchClass(p) => {
                if p.kwd_attrs.len() != p.kwd_patterns.len() {
                    return Err(RenderError::malformed(
                        kind,
                        format!(
                            "{} keyword names but {} keyword patterns",
                            p.kwd_attrs.len(),
                            p.kwd_patterns.len()
                        ),
                    ));
                }
                let mut parts = self.patterns(&p.patterns)?;
                for (attr, value) in p.kwd_attrs.iter().zip(&p.kwd_patterns) {
                    parts.push(format!("{}={}", attr, self.pattern(value)?));
                }
                format!("{}({})", self.expr(&p.cls)?, parts.join(", "))
            }
            Pattern::MatchStar(p) => format!("*{}", p.name.as_deref().unwrap_or("_")),
            Pattern::MatchAs(p) => match (&p.pattern, &p.name) {
                (None, None) => "_".to_string(),
                (None, Some(name)) => name.clone(),
                (Some(inner), Some(name)) => format!("({} as {})", self.pattern(inner)?, name),
                (Some(_), None) => {
                    return Err(RenderError::malformed(kind, "pattern without a name"))
                }
            },
            Pattern::MatchOr(p) => {
                if p.patterns.len() < 2 {
                    return Err(RenderError::malformed(kind, "fewer than two alternatives"));
                }
                format!("({})", self.patterns(&p.patterns)?.join(" | "))
            }
        };
        Ok(text)
    }

    fn patterns(&self, patterns: &[Pattern]) -> RenderResult<Vec<String>> {
        patterns.iter().map(|p| self.pattern(p)).collect()
    }

    /// Renders `case pattern if guard:` and its block.
    pub(crate) fn match_case(
        &self,
        case: &MatchCase,
        state: &mut RenderState,
    ) -> RenderResult<()> {
        self.check(NodeKind::MatchCase)?;
        let mut header = format!("case {}", self.pattern(&case.pattern)?);
        if let Some(guard) = &case.guard {
            header.push_str(" if ");
            header.push_str(&self.expr(guard)?);
        }
        header.push(':');
        state.emit(&header);
        self.block(&case.body, state)
    }

    pub(crate) fn type_param(&self, param: &TypeParam) -> RenderResult<String> {
        self.check(param.kind())?;
        Ok(match param {
            TypeParam::TypeVar(p) => match &p.bound {
                Some(bound) => format!("{}: {}", p.name, self.expr(bound)?),
                None => p.name.clone(),
            },
            TypeParam::ParamSpec(p) => format!("**{}", p.name),
            TypeParam::TypeVarTuple(p) => format!("*{}", p.name),
        })
    }

    /// Bracketed parameter list, or nothing when there are no parameters.
    pub(crate) fn type_params(&self, params: &[TypeParam]) -> RenderResult<String> {
        if params.is_empty() {
            return Ok(String::new());
        }
        let parts = params
            .iter()
            .map(|p| self.type_param(p))
            .collect::<RenderResult<Vec<_>>>()?;
        Ok(format!("[{}]", parts.join(", ")))
    }
}
