//! Style registry: semantic text role → (font face, size).
//!
//! The registry is built once and never mutated. Every generation borrows the
//! same `&'static StyleRegistry`, so concurrent requests share no mutable state.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font faces
// ────────────────────────────────────────────────────────────────────────────

/// The three logical faces of the fixed serif family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFace {
    Regular,
    Bold,
    /// Declared for completeness; no renderer currently asks for it.
    Italic,
}

impl FontFace {
    /// PostScript name of the base-14 font backing this face.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Times-Roman",
            FontFace::Bold => "Times-Bold",
            FontFace::Italic => "Times-Italic",
        }
    }

    /// Name under which the face is registered in the page resources.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
            FontFace::Italic => "F3",
        }
    }

    pub const ALL: [FontFace; 3] = [FontFace::Regular, FontFace::Bold, FontFace::Italic];
}

// ────────────────────────────────────────────────────────────────────────────
// Roles and styles
// ────────────────────────────────────────────────────────────────────────────

/// Semantic role of a piece of text on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleRole {
    Name,
    Contact,
    SectionHeader,
    RoleTitle,
    Body,
    Bold,
}

/// A concrete face + point size pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
}

impl TextStyle {
    pub const fn new(face: FontFace, size: f32) -> Self {
        Self { face, size }
    }
}

/// Static role → style lookup table.
#[derive(Debug)]
pub struct StyleRegistry {
    name: TextStyle,
    contact: TextStyle,
    section_header: TextStyle,
    role_title: TextStyle,
    body: TextStyle,
    bold: TextStyle,
}

impl StyleRegistry {
    pub fn get(&self, role: StyleRole) -> TextStyle {
        match role {
            StyleRole::Name => self.name,
            StyleRole::Contact => self.contact,
            StyleRole::SectionHeader => self.section_header,
            StyleRole::RoleTitle => self.role_title,
            StyleRole::Body => self.body,
            StyleRole::Bold => self.bold,
        }
    }
}

static DEFAULT_STYLES: StyleRegistry = StyleRegistry {
    name: TextStyle::new(FontFace::Bold, 16.0),
    contact: TextStyle::new(FontFace::Regular, 10.0),
    section_header: TextStyle::new(FontFace::Bold, 11.0),
    role_title: TextStyle::new(FontFace::Bold, 12.0),
    body: TextStyle::new(FontFace::Regular, 10.0),
    bold: TextStyle::new(FontFace::Bold, 10.0),
};

/// Returns the process-wide style registry.
pub fn default_styles() -> &'static StyleRegistry {
    &DEFAULT_STYLES
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_resume_styles() {
        let styles = default_styles();
        assert_eq!(styles.get(StyleRole::Name), TextStyle::new(FontFace::Bold, 16.0));
        assert_eq!(
            styles.get(StyleRole::Contact),
            TextStyle::new(FontFace::Regular, 10.0)
        );
        assert_eq!(
            styles.get(StyleRole::SectionHeader),
            TextStyle::new(FontFace::Bold, 11.0)
        );
        assert_eq!(
            styles.get(StyleRole::RoleTitle),
            TextStyle::new(FontFace::Bold, 12.0)
        );
        assert_eq!(styles.get(StyleRole::Body), TextStyle::new(FontFace::Regular, 10.0));
        assert_eq!(styles.get(StyleRole::Bold), TextStyle::new(FontFace::Bold, 10.0));
    }

    #[test]
    fn test_faces_map_to_times_family() {
        assert_eq!(FontFace::Regular.base_font(), "Times-Roman");
        assert_eq!(FontFace::Bold.base_font(), "Times-Bold");
        assert_eq!(FontFace::Italic.base_font(), "Times-Italic");
    }

    #[test]
    fn test_resource_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            FontFace::ALL.iter().map(|f| f.resource_name()).collect();
        assert_eq!(names.len(), 3);
    }
}
