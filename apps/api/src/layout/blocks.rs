//! Composite renderers: section headers, bullet lists, label+value lines,
//! title lines with a right-aligned trailing token, and the header block.
//!
//! Each renderer takes the current `LayoutCursor` by value and returns the
//! cursor after its output. None of them reads ahead or revisits earlier output.

use crate::errors::LayoutError;
use crate::layout::cursor::{
    LayoutCursor, BULLET_TEXT_OFFSET, CONTENT_WIDTH, LEFT_MARGIN, PAGE_WIDTH, RIGHT_MARGIN,
    RULE_OFFSET, SECTION_GAP,
};
use crate::layout::styles::StyleRole;
use crate::layout::writer::Canvas;

pub const BULLET_GLYPH: &str = "\u{2022}";
pub const CONTACT_SEPARATOR: &str = " | ";
/// Fixed drop from the top of the name band to the contact line.
pub const NAME_BAND_HEIGHT: f32 = 20.0;
/// Space below the contact line.
pub const CONTACT_GAP: f32 = 15.0;

// ────────────────────────────────────────────────────────────────────────────
// Section header
// ────────────────────────────────────────────────────────────────────────────

/// Title in `SectionHeader` style with a full-width rule just below it.
pub fn section_header(
    canvas: &mut Canvas<'_>,
    title: &str,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let text_bottom = canvas.draw_bounded(
        title,
        LEFT_MARGIN,
        cursor.y(),
        StyleRole::SectionHeader,
        CONTENT_WIDTH,
    )?;
    let rule_y = text_bottom + RULE_OFFSET;
    canvas.rule(LEFT_MARGIN, RIGHT_MARGIN, rule_y);
    Ok(cursor.moved_to(text_bottom + SECTION_GAP))
}

// ────────────────────────────────────────────────────────────────────────────
// Bullets
// ────────────────────────────────────────────────────────────────────────────

/// One bullet: glyph at `LEFT_MARGIN + indent`, wrapped text 15pt to its right.
pub fn bullet_item(
    canvas: &mut Canvas<'_>,
    text: &str,
    indent: f32,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let x = LEFT_MARGIN + indent;
    let glyph_y = canvas.draw_point(BULLET_GLYPH, x, cursor.y(), StyleRole::Body)?;
    let text_y = canvas.draw_bounded(
        text,
        x + BULLET_TEXT_OFFSET,
        cursor.y(),
        StyleRole::Body,
        CONTENT_WIDTH - indent,
    )?;
    Ok(cursor.moved_to(glyph_y).moved_to(text_y))
}

/// Bullets in input order, each followed by `gap` points. Empty input draws nothing.
pub fn bullet_list(
    canvas: &mut Canvas<'_>,
    items: &[&str],
    indent: f32,
    gap: f32,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let mut cursor = cursor;
    for item in items {
        cursor = bullet_item(canvas, item, indent, cursor)?.advanced_by(gap);
    }
    Ok(cursor)
}

// ────────────────────────────────────────────────────────────────────────────
// Label + value
// ────────────────────────────────────────────────────────────────────────────

/// Where the value of a label+value line starts and how wide it may wrap.
pub fn label_value_geometry(canvas: &Canvas<'_>, label: &str) -> (f32, f32) {
    let label_width = canvas.measure(label, StyleRole::Bold);
    (LEFT_MARGIN + label_width, CONTENT_WIDTH - label_width)
}

/// Bold label at the left margin, body-style value wrapped to its right.
pub fn label_value(
    canvas: &mut Canvas<'_>,
    label: &str,
    value: &str,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let (value_x, value_width) = label_value_geometry(canvas, label);
    let label_y = canvas.draw_point(label, LEFT_MARGIN, cursor.y(), StyleRole::Bold)?;
    let value_y = canvas.draw_bounded(value, value_x, cursor.y(), StyleRole::Body, value_width)?;
    // An empty value draws nothing; the label line still takes up its height.
    Ok(cursor.moved_to(label_y).moved_to(value_y))
}

// ────────────────────────────────────────────────────────────────────────────
// Title + trailing date
// ────────────────────────────────────────────────────────────────────────────

/// Left edge for `text` so that its right edge sits on the right margin.
pub fn right_aligned_x(canvas: &Canvas<'_>, text: &str, role: StyleRole) -> f32 {
    RIGHT_MARGIN - canvas.measure(text, role)
}

/// Bold title at the left margin and a right-aligned trailing token on the
/// same line, then advances by `advance`.
///
/// The two are placed independently; a long title will overlap the token.
pub fn title_with_trailing(
    canvas: &mut Canvas<'_>,
    title: &str,
    trailing: &str,
    advance: f32,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    canvas.draw_point(title, LEFT_MARGIN, cursor.y(), StyleRole::Bold)?;
    let x = right_aligned_x(canvas, trailing, StyleRole::Bold);
    canvas.draw_point(trailing, x, cursor.y(), StyleRole::Bold)?;
    Ok(cursor.advanced_by(advance))
}

// ────────────────────────────────────────────────────────────────────────────
// Header block
// ────────────────────────────────────────────────────────────────────────────

/// Left edge that centers `width` on the full page, ignoring margins.
pub fn centered_x(width: f32) -> f32 {
    (PAGE_WIDTH - width) / 2.0
}

/// Joins the non-blank contact fields with " | ".
pub fn contact_line(parts: &[&str]) -> String {
    parts.join(CONTACT_SEPARATOR)
}

/// Name (flowed, then centered over it) followed by the centered contact line.
pub fn header_block(
    canvas: &mut Canvas<'_>,
    name: &str,
    contact: &str,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let band_top = cursor.y();
    let after_name = canvas.draw_point(name, LEFT_MARGIN, band_top, StyleRole::Name)?;

    let name_width = canvas.measure(name, StyleRole::Name);
    canvas.draw_point(name, centered_x(name_width), band_top, StyleRole::Name)?;

    let cursor = cursor
        .moved_to(after_name)
        .moved_to(band_top + NAME_BAND_HEIGHT);

    let contact_width = canvas.measure(contact, StyleRole::Contact);
    let y = canvas.draw_point(
        contact,
        centered_x(contact_width),
        cursor.y(),
        StyleRole::Contact,
    )?;
    Ok(cursor.moved_to(y).advanced_by(CONTACT_GAP))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
