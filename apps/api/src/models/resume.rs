//! The resume record supplied by the client under `optimized_resume`.
//!
//! Fields are optional at the type level on purpose: only the root shape is
//! checked up front, and a missing nested field surfaces as
//! `LayoutError::FieldAccess` at the point where layout first needs it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{LayoutError, SHAPE_ERROR_MESSAGE};

/// Key under which the request body carries the resume record.
pub const ROOT_KEY: &str = "optimized_resume";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub contact_info: Option<ContactInfo>,
    pub role_title: Option<String>,
    pub professional_summary: Option<Vec<String>>,
    pub skills: Option<Skills>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub education: Option<Vec<Education>>,
    pub certifications: Option<Vec<Certification>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
}

impl ContactInfo {
    /// Non-blank contact fields in display order: location, phone, email, linkedin.
    pub fn contact_parts(&self) -> Vec<&str> {
        [&self.location, &self.phone, &self.email, &self.linkedin]
            .into_iter()
            .filter_map(|field| field.as_deref())
            // Stricter than a plain emptiness check: "   " is dropped too, so the
            // line never shows a blank slot between separators.
            .filter(|value| !value.trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    pub technical_skills: Option<String>,
    pub tools_technologies: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkExperience {
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    pub program: Option<String>,
    pub institution: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certification {
    pub name: Option<String>,
    pub date: Option<String>,
}

impl ResumeDocument {
    /// Extracts the resume record from a request body.
    ///
    /// Fails with `LayoutError::Shape` when `optimized_resume` is absent, null,
    /// not an object, or holds values of the wrong JSON type. Missing nested
    /// fields are accepted here and reported later during layout.
    pub fn from_request(body: &Value) -> Result<Self, LayoutError> {
        let root = match body.get(ROOT_KEY) {
            Some(value) if value.is_object() => value,
            _ => return Err(LayoutError::Shape(SHAPE_ERROR_MESSAGE.to_string())),
        };

        serde_json::from_value(root.clone())
            .map_err(|e| LayoutError::Shape(format!("{SHAPE_ERROR_MESSAGE} {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_request_rejects_empty_body() {
        let err = ResumeDocument::from_request(&json!({})).unwrap_err();
        assert!(matches!(err, LayoutError::Shape(_)));
        assert_eq!(err.to_string(), SHAPE_ERROR_MESSAGE);
    }

    #[test]
    fn test_from_request_rejects_non_object_root() {
        for body in [
            json!({ "optimized_resume": null }),
            json!({ "optimized_resume": "resume" }),
            json!({ "optimized_resume": [1, 2] }),
            json!([]),
        ] {
            let err = ResumeDocument::from_request(&body).unwrap_err();
            assert!(matches!(err, LayoutError::Shape(_)), "body {body} should be a shape error");
        }
    }

    #[test]
    fn test_from_request_rejects_wrong_nested_type() {
        let body = json!({ "optimized_resume": { "professional_summary": "not a list" } });
        let err = ResumeDocument::from_request(&body).unwrap_err();
        assert!(matches!(err, LayoutError::Shape(_)));
    }

    #[test]
    fn test_from_request_accepts_missing_nested_fields() {
        let body = json!({ "optimized_resume": { "contact_info": { "name": "A" } } });
        let doc = ResumeDocument::from_request(&body).unwrap();
        assert_eq!(doc.contact_info.unwrap().name.as_deref(), Some("A"));
        assert!(doc.work_experience.is_none());
    }

    #[test]
    fn test_contact_parts_drop_blank_fields() {
        let contact = ContactInfo {
            name: Some("A".to_string()),
            location: Some(String::new()),
            phone: Some("1".to_string()),
            email: Some("  ".to_string()),
            linkedin: Some("x".to_string()),
        };
        assert_eq!(contact.contact_parts(), vec!["1", "x"]);
    }

    #[test]
    fn test_contact_parts_skip_missing_fields() {
        let contact = ContactInfo {
            name: Some("A".to_string()),
            email: Some("a@b.c".to_string()),
            ..Default::default()
        };
        assert_eq!(contact.contact_parts(), vec!["a@b.c"]);
    }
}
