//! Indentation-aware output accumulator.

use crate::error::Result;

/// Two spaces per indentation level.
const INDENT_UNIT: &str = "  ";

/// How the buffer renders logical breaks between SQL fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Breaks collapse to single spaces; output is one line.
    #[default]
    Compact,
    /// Breaks become newlines followed by the current indentation.
    Pretty,
}

/// Mutable text accumulator shared across one emission call.
///
/// Indentation is captured at append time: raising or lowering the
/// level only affects breaks appended afterwards, never lines already
/// written. One buffer belongs to exactly one emission call.
#[derive(Debug)]
pub struct Buffer {
    out: String,
    indent_level: usize,
    style: Style,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Create an empty compact-style buffer.
    pub fn new() -> Self {
        Self::with_style(Style::Compact)
    }

    /// Create an empty buffer with the given break style.
    pub fn with_style(style: Style) -> Self {
        Self {
            out: String::new(),
            indent_level: 0,
            style,
        }
    }

    /// The break style this buffer renders with.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Append text verbatim. Newlines embedded in `text` are followed
    /// by the current indentation.
    pub fn append(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.out.push_str(first);
        }
        for line in lines {
            self.break_line();
            self.out.push_str(line);
        }
    }

    /// Append a logical break: a space in compact style, a newline plus
    /// indentation in pretty style.
    pub fn separator(&mut self) {
        match self.style {
            Style::Compact => self.out.push(' '),
            Style::Pretty => self.break_line(),
        }
    }

    /// Raise the indentation level by one.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Lower the indentation level by one. Must be balanced with a
    /// prior [`indent`](Self::indent).
    pub fn unindent(&mut self) {
        debug_assert!(self.indent_level > 0, "unindent below zero");
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Run `f` one indentation level deeper, restoring the level
    /// afterwards even when `f` fails.
    pub fn indented<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Buffer) -> Result<()>,
    {
        self.indent();
        let result = f(self);
        self.unindent();
        result
    }

    /// Consume the buffer and return the accumulated text.
    pub fn finish(self) -> String {
        self.out
    }

    fn break_line(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent_level {
            self.out.push_str(INDENT_UNIT);
        }
    }
}
