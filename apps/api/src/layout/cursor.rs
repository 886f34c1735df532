//! Page geometry and the vertical layout cursor.
//!
//! All coordinates are in points, measured from the top-left corner of the
//! page. The PDF emitter flips them into PDF user space.

/// Page width in points.
pub const PAGE_WIDTH: f32 = 612.0;
/// Page height in points.
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 72.0;
pub const LEFT_MARGIN: f32 = MARGIN;
/// The right edge sits 90pt in from the page edge, leaving a wider gutter
/// than the left margin.
pub const RIGHT_INSET: f32 = 90.0;
pub const RIGHT_MARGIN: f32 = PAGE_WIDTH - RIGHT_INSET;
/// Printable width between the left and right margins.
pub const CONTENT_WIDTH: f32 = RIGHT_MARGIN - LEFT_MARGIN;
/// First baseline band of the page.
pub const TOP_START: f32 = 72.0;
/// Horizontal distance from a bullet glyph to its text.
pub const BULLET_TEXT_OFFSET: f32 = 15.0;
/// Section rules sit this far below the header text.
pub const RULE_OFFSET: f32 = 2.0;
/// Gap between a section rule and the section body.
pub const SECTION_GAP: f32 = 8.0;

/// Vertical write position, threaded by value through every renderer.
///
/// Invariant: a cursor derived from another never has a smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    y: f32,
}

impl LayoutCursor {
    /// Cursor at the top of the printable area.
    pub fn new() -> Self {
        Self { y: TOP_START }
    }

    pub fn at(y: f32) -> Self {
        Self { y }
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Moves down by `dy`. Negative deltas are ignored.
    pub fn advanced_by(self, dy: f32) -> Self {
        Self {
            y: self.y + dy.max(0.0),
        }
    }

    /// Moves to the absolute position `y`, clamped so the cursor never rewinds.
    pub fn moved_to(self, y: f32) -> Self {
        Self { y: self.y.max(y) }
    }
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_constants() {
        assert_eq!(LEFT_MARGIN, 72.0);
        assert_eq!(RIGHT_MARGIN, 522.0);
        assert_eq!(CONTENT_WIDTH, 450.0);
        assert_eq!(LayoutCursor::new().y(), 72.0);
    }

    #[test]
    fn test_cursor_never_rewinds() {
        let cursor = LayoutCursor::at(100.0);
        assert_eq!(cursor.moved_to(90.0).y(), 100.0);
        assert_eq!(cursor.moved_to(120.0).y(), 120.0);
        assert_eq!(cursor.advanced_by(-5.0).y(), 100.0);
        assert_eq!(cursor.advanced_by(5.0).y(), 105.0);
    }
}
