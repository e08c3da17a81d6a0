// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::error::RenderResult;

/// Output buffer and block level of one rendering call.
///
/// Lines are stored already indented and newline-terminated, in document
/// order, and are never modified after being appended.
#[derive(Debug, Clone)]
pub struct RenderState {
    lines: Vec<String>,
    level: usize,
    indent_unit: String,
}

impl RenderState {
    pub fn new(indent_width: usize) -> Self {
        Self {
            lines: Vec::new(),
            level: 0,
            indent_unit: " ".repeat(indent_width),
        }
    }

    /// Current block level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Lines emitted so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn indentation(&self) -> String {
        self.indent_unit.repeat(self.level)
    }

    /// Appends `text` at the current level, indenting every line of it.
    pub fn emit(&mut self, text: &str) {
        let indent = self.indentation();
        for line in text.split('\n') {
            self.lines.push(format!("{}{}\n", indent, line));
        }
    }

    /// Appends `text` indenting only its first line. Used for literals whose
    /// embedded newlines are part of the value.
    pub fn emit_verbatim(&mut self, text: &str) {
        let line = format!("{}{}\n", self.indentation(), text);
        self.lines.push(line);
    }

    /// Runs `body` one level deeper. The level is restored whether or not
    /// `body` succeeds.
    pub fn block<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> RenderResult<T>,
    ) -> RenderResult<T> {
        self.level += 1;
        let result = body(self);
        self.level -= 1;
        result
    }

    /// Joins the buffer into the rendered text.
    pub fn into_string(self) -> String {
        self.lines.concat()
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::NodeKind;
    use crate::render::RenderError;

    #[test]
    fn test_emit_indents_every_line() {
        let mut state = RenderState::new(2);
        state.emit("a");
        state
            .block(|s| {
                s.emit("b\nc");
                Ok(())
            })
            .unwrap();
        assert_eq!(state.into_string(), "a\n  b\n  c\n");
    }

    #[test]
    fn test_emit_verbatim_keeps_continuation_lines() {
        let mut state = RenderState::default();
        state
            .block(|s| {
                s.emit_verbatim("\"\"\"one\ntwo\"\"\"");
                Ok(())
            })
            .unwrap();
        assert_eq!(state.into_string(), "    \"\"\"one\ntwo\"\"\"\n");
    }

    #[test]
    fn test_block_restores_level_on_error() {
        let mut state = RenderState::default();
        let result: RenderResult<()> = state.block(|s| {
            s.block(|_| Err(RenderError::malformed(NodeKind::If, "boom")))
        });
        assert!(result.is_err());
        assert_eq!(state.level(), 0);
    }
}
