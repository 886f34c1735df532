//! Wrapping Writer: records positioned text and rules into a display list.
//!
//! Nothing here touches the output stream. Layout first produces a complete
//! `DisplayList`; the PDF emitter only runs once the list is finished.

use serde::Serialize;

use crate::errors::LayoutError;
use crate::layout::font_metrics::{line_height, measure};
use crate::layout::styles::{FontFace, StyleRegistry, StyleRole, TextStyle};

// ────────────────────────────────────────────────────────────────────────────
// Display list
// ────────────────────────────────────────────────────────────────────────────

/// One line of text. `y` is the top of the line box, measured from the page top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub face: FontFace,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// A horizontal stroke at `y` from `x1` to `x2`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleLine {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    Text(TextRun),
    Rule(RuleLine),
}

/// Ordered draw operations for a single page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text runs in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            DrawOp::Rule(_) => None,
        })
    }

    pub fn rules(&self) -> impl Iterator<Item = &RuleLine> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rule(rule) => Some(rule),
            DrawOp::Text(_) => None,
        })
    }

    fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Canvas
// ────────────────────────────────────────────────────────────────────────────

/// Drawing surface for one generation: a style registry plus the list being built.
pub struct Canvas<'a> {
    styles: &'a StyleRegistry,
    list: DisplayList,
}

impl<'a> Canvas<'a> {
    pub fn new(styles: &'a StyleRegistry) -> Self {
        Self {
            styles,
            list: DisplayList::new(),
        }
    }

    pub fn style(&self, role: StyleRole) -> TextStyle {
        self.styles.get(role)
    }

    /// Number of operations recorded so far.
    pub fn op_count(&self) -> usize {
        self.list.len()
    }

    pub fn list(&self) -> &DisplayList {
        &self.list
    }

    pub fn into_list(self) -> DisplayList {
        self.list
    }

    /// Rendered width of `text` in the given role.
    pub fn measure(&self, text: &str, role: StyleRole) -> f32 {
        measure(text, self.style(role))
    }

    /// Places `text` at (x, y) without wrapping. Returns `y` below the line.
    pub fn draw_point(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        role: StyleRole,
    ) -> Result<f32, LayoutError> {
        let style = self.style(role);
        check_style(style)?;
        self.push_text(style, x, y, text);
        Ok(y + line_height(style))
    }

    /// Lays `text` into lines no wider than `max_width` starting at (x, y).
    /// Returns `y` immediately below the last line.
    pub fn draw_bounded(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        role: StyleRole,
        max_width: f32,
    ) -> Result<f32, LayoutError> {
        let style = self.style(role);
        check_style(style)?;
        if !max_width.is_finite() || max_width <= 0.0 {
            return Err(LayoutError::Render(format!(
                "invalid wrap width {max_width} for {text:?}"
            )));
        }

        let step = line_height(style);
        let mut line_y = y;
        for line in wrap_lines(text, style, max_width) {
            self.push_text(style, x, line_y, &line);
            line_y += step;
        }
        Ok(line_y)
    }

    /// Records a horizontal rule at `y` spanning `x1..x2`.
    pub fn rule(&mut self, x1: f32, x2: f32, y: f32) {
        self.list.push(DrawOp::Rule(RuleLine {
            x1,
            x2,
            y,
            width: 1.0,
        }));
    }

    fn push_text(&mut self, style: TextStyle, x: f32, y: f32, text: &str) {
        self.list.push(DrawOp::Text(TextRun {
            face: style.face,
            size: style.size,
            x,
            y,
            text: text.to_string(),
        }));
    }
}

fn check_style(style: TextStyle) -> Result<(), LayoutError> {
    if style.size.is_finite() && style.size > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::Render(format!(
            "invalid font size {} for {:?}",
            style.size, style.face
        )))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Line breaking
// ────────────────────────────────────────────────────────────────────────────

/// Greedy word wrap. Each line breaks at the last whitespace that keeps it
/// within `max_width`; a token wider than `max_width` gets a line of its own
/// and is never split. Explicit `\n` forces a break. Empty input → no lines.
pub fn wrap_lines(text: &str, style: TextStyle, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate, style) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
