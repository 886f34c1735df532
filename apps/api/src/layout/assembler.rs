//! Document Assembler: fixed top-to-bottom composition of the resume page.
//!
//! Order: header block → "<role> PROFESSIONAL SUMMARY" → summary bullets →
//! SKILLS → WORK EXPERIENCE → EDUCATION → LICENCES/CERTIFICATIONS.
//! One `LayoutCursor` is threaded through every step; no step rewinds it.

use tracing::{debug, warn};

use crate::errors::LayoutError;
use crate::layout::blocks::{
    bullet_list, contact_line, header_block, label_value, section_header, title_with_trailing,
};
use crate::layout::cursor::{LayoutCursor, MARGIN, PAGE_HEIGHT};
use crate::layout::styles::StyleRegistry;
use crate::layout::writer::{Canvas, DisplayList};
use crate::models::resume::{Certification, Education, ResumeDocument, WorkExperience};

pub const SUMMARY_HEADING_SUFFIX: &str = "PROFESSIONAL SUMMARY";
pub const SKILLS_HEADING: &str = "SKILLS";
pub const WORK_HEADING: &str = "WORK EXPERIENCE";
pub const EDUCATION_HEADING: &str = "EDUCATION";
pub const CERTIFICATIONS_HEADING: &str = "LICENCES/CERTIFICATIONS";
pub const TECHNICAL_SKILLS_LABEL: &str = "Technical Skills: ";
pub const TOOLS_LABEL: &str = "Tools & Technologies: ";

// Vertical spacing, in points.
const SUMMARY_ITEM_GAP: f32 = 5.0;
const SUMMARY_TRAILING_GAP: f32 = 5.0;
const TECHNICAL_SKILLS_GAP: f32 = 8.0;
const TOOLS_GAP: f32 = 10.0;
const JOB_TITLE_ADVANCE: f32 = 15.0;
const ACHIEVEMENT_GAP: f32 = 3.0;
const JOB_TRAILING_GAP: f32 = 8.0;
const EDUCATION_ADVANCE: f32 = 12.0;
const EDUCATION_TRAILING_GAP: f32 = 5.0;
const CERTIFICATION_ADVANCE: f32 = 12.0;

/// Lays out the whole resume into a display list.
///
/// A missing nested field aborts with `LayoutError::FieldAccess`; nothing has
/// been emitted at that point, the partially built list is simply dropped.
pub fn assemble(doc: &ResumeDocument, styles: &StyleRegistry) -> Result<DisplayList, LayoutError> {
    let mut canvas = Canvas::new(styles);
    let cursor = LayoutCursor::new();

    let cursor = render_header(&mut canvas, doc, cursor)?;
    let cursor = render_summary(&mut canvas, doc, cursor)?;
    let cursor = render_skills(&mut canvas, doc, cursor)?;
    let cursor = render_work_experience(&mut canvas, doc, cursor)?;
    let cursor = render_education(&mut canvas, doc, cursor)?;
    let cursor = render_certifications(&mut canvas, doc, cursor)?;

    if cursor.y() > PAGE_HEIGHT - MARGIN {
        warn!(
            final_y = cursor.y(),
            "Resume content runs past the bottom margin; output is a single page"
        );
    }
    debug!(ops = canvas.op_count(), final_y = cursor.y(), "Layout complete");

    Ok(canvas.into_list())
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn render_header(
    canvas: &mut Canvas<'_>,
    doc: &ResumeDocument,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let contact = required(canvas, doc.contact_info.as_ref(), "contact_info")?;
    let name = required(canvas, contact.name.as_deref(), "contact_info.name")?;
    let line = contact_line(&contact.contact_parts());
    header_block(canvas, name, &line, cursor)
}

fn render_summary(
    canvas: &mut Canvas<'_>,
    doc: &ResumeDocument,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let role_title = required(canvas, doc.role_title.as_deref(), "role_title")?;
    let cursor = section_header(canvas, &summary_heading(role_title), cursor)?;

    let summary = required(
        canvas,
        doc.professional_summary.as_deref(),
        "professional_summary",
    )?;
    let items: Vec<&str> = summary.iter().map(String::as_str).collect();
    debug!(bullets = items.len(), "Rendering professional summary");

    let cursor = bullet_list(canvas, &items, 0.0, SUMMARY_ITEM_GAP, cursor)?;
    Ok(cursor.advanced_by(SUMMARY_TRAILING_GAP))
}

fn render_skills(
    canvas: &mut Canvas<'_>,
    doc: &ResumeDocument,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let cursor = section_header(canvas, SKILLS_HEADING, cursor)?;
    let skills = required(canvas, doc.skills.as_ref(), "skills")?;

    let technical = required(
        canvas,
        skills.technical_skills.as_deref(),
        "skills.technical_skills",
    )?;
    let cursor = label_value(canvas, TECHNICAL_SKILLS_LABEL, technical, cursor)?
        .advanced_by(TECHNICAL_SKILLS_GAP);

    let tools = required(
        canvas,
        skills.tools_technologies.as_deref(),
        "skills.tools_technologies",
    )?;
    let cursor = label_value(canvas, TOOLS_LABEL, tools, cursor)?.advanced_by(TOOLS_GAP);
    Ok(cursor)
}

fn render_work_experience(
    canvas: &mut Canvas<'_>,
    doc: &ResumeDocument,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let mut cursor = section_header(canvas, WORK_HEADING, cursor)?;
    let entries = required(canvas, doc.work_experience.as_deref(), "work_experience")?;
    debug!(entries = entries.len(), "Rendering work experience");

    for (i, entry) in entries.iter().enumerate() {
        cursor = render_job(canvas, i, entry, cursor)?;
    }
    Ok(cursor)
}

fn render_job(
    canvas: &mut Canvas<'_>,
    index: usize,
    entry: &WorkExperience,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let field = |name: &str| format!("work_experience[{index}].{name}");

    let role = required(canvas, entry.role.as_deref(), &field("role"))?;
    let company = required(canvas, entry.company.as_deref(), &field("company"))?;
    let duration = required(canvas, entry.duration.as_deref(), &field("duration"))?;
    let title = job_title(role, company, entry.location.as_deref());
    let cursor = title_with_trailing(canvas, &title, duration, JOB_TITLE_ADVANCE, cursor)?;

    let achievements = required(
        canvas,
        entry.achievements.as_deref(),
        &field("achievements"),
    )?;
    let items: Vec<&str> = achievements.iter().map(String::as_str).collect();
    let cursor = bullet_list(canvas, &items, 0.0, ACHIEVEMENT_GAP, cursor)?;
    Ok(cursor.advanced_by(JOB_TRAILING_GAP))
}

fn render_education(
    canvas: &mut Canvas<'_>,
    doc: &ResumeDocument,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let mut cursor = section_header(canvas, EDUCATION_HEADING, cursor)?;
    let entries = required(canvas, doc.education.as_deref(), "education")?;

    for (i, entry) in entries.iter().enumerate() {
        cursor = render_education_line(canvas, i, entry, cursor)?;
    }
    Ok(cursor.advanced_by(EDUCATION_TRAILING_GAP))
}

fn render_education_line(
    canvas: &mut Canvas<'_>,
    index: usize,
    entry: &Education,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let field = |name: &str| format!("education[{index}].{name}");

    let program = required(canvas, entry.program.as_deref(), &field("program"))?;
    let institution = required(canvas, entry.institution.as_deref(), &field("institution"))?;
    let duration = required(canvas, entry.duration.as_deref(), &field("duration"))?;
    let line = format!("{program} | {institution}");
    title_with_trailing(canvas, &line, duration, EDUCATION_ADVANCE, cursor)
}

fn render_certifications(
    canvas: &mut Canvas<'_>,
    doc: &ResumeDocument,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let mut cursor = section_header(canvas, CERTIFICATIONS_HEADING, cursor)?;
    let entries = required(canvas, doc.certifications.as_deref(), "certifications")?;

    for (i, entry) in entries.iter().enumerate() {
        cursor = render_certification(canvas, i, entry, cursor)?;
    }
    Ok(cursor)
}

fn render_certification(
    canvas: &mut Canvas<'_>,
    index: usize,
    entry: &Certification,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, LayoutError> {
    let field = |name: &str| format!("certifications[{index}].{name}");

    let name = required(canvas, entry.name.as_deref(), &field("name"))?;
    let date = required(canvas, entry.date.as_deref(), &field("date"))?;
    title_with_trailing(canvas, name, date, CERTIFICATION_ADVANCE, cursor)
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// "`<role_title>` PROFESSIONAL SUMMARY"
pub fn summary_heading(role_title: &str) -> String {
    format!("{role_title} {SUMMARY_HEADING_SUFFIX}")
}

/// "role, company" with ", location" appended only when a location is given.
///
/// A whitespace-only location counts as absent, not only an empty string, so
/// the title never ends in a dangling ", ".
pub fn job_title(role: &str, company: &str, location: Option<&str>) -> String {
    match location.filter(|l| !l.trim().is_empty()) {
        Some(location) => format!("{role}, {company}, {location}"),
        None => format!("{role}, {company}"),
    }
}

fn required<'d, T: ?Sized>(
    canvas: &Canvas<'_>,
    value: Option<&'d T>,
    field: &str,
) -> Result<&'d T, LayoutError> {
    value.ok_or_else(|| {
        warn!(field, partial_ops = canvas.op_count(), "Missing required resume field");
        LayoutError::FieldAccess {
            field: field.to_string(),
            partial_ops: canvas.op_count(),
        }
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::blocks::BULLET_GLYPH;
    use crate::layout::cursor::PAGE_WIDTH;
    use crate::layout::font_metrics::{line_height, measure};
    use crate::layout::styles::{default_styles, StyleRole};
    use crate::layout::writer::{DrawOp, TextRun};
    use crate::models::resume::{ContactInfo, Skills};

    fn contact(name: &str) -> ContactInfo {
        ContactInfo {
            name: Some(name.to_string()),
            location: Some("Berlin".to_string()),
            phone: Some("+49 30 1234".to_string()),
            email: Some("jane@example.com".to_string()),
            linkedin: Some("linkedin.com/in/jane".to_string()),
        }
    }

    fn job(role: &str, company: &str, location: Option<&str>, achievements: &[&str]) -> WorkExperience {
        WorkExperience {
            role: Some(role.to_string()),
            company: Some(company.to_string()),
            location: location.map(str::to_string),
            duration: Some("Jan 2020 - Present".to_string()),
            achievements: Some(achievements.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn minimal_doc() -> ResumeDocument {
        ResumeDocument {
            contact_info: Some(contact("Jane Doe")),
            role_title: Some("DATA ENGINEER".to_string()),
            professional_summary: Some(vec!["Builds reliable pipelines.".to_string()]),
            skills: Some(Skills {
                technical_skills: Some("SQL, Python".to_string()),
                tools_technologies: Some("Airflow, dbt".to_string()),
            }),
            work_experience: Some(vec![]),
            education: Some(vec![]),
            certifications: Some(vec![]),
        }
    }

    fn full_doc() -> ResumeDocument {
        ResumeDocument {
            professional_summary: Some(vec![
                "Summary one".to_string(),
                "Summary two".to_string(),
                "Summary three".to_string(),
            ]),
            work_experience: Some(vec![
                job("Data Engineer", "Acme", Some("Berlin"), &["A1", "A2", "A3"]),
                job("Analyst", "Globex", None, &["B1"]),
            ]),
            education: Some(vec![
                Education {
                    program: Some("MSc Computer Science".to_string()),
                    institution: Some("TU Berlin".to_string()),
                    duration: Some("2016 - 2018".to_string()),
                },
                Education {
                    program: Some("BSc Mathematics".to_string()),
                    institution: Some("LMU".to_string()),
                    duration: Some("2012 - 2016".to_string()),
                },
            ]),
            certifications: Some(vec![
                Certification {
                    name: Some("AWS Data Analytics".to_string()),
                    date: Some("2022".to_string()),
                },
                Certification {
                    name: Some("CKA".to_string()),
                    date: Some("2021".to_string()),
                },
            ]),
            ..minimal_doc()
        }
    }

    fn texts(list: &DisplayList) -> Vec<&TextRun> {
        list.texts().collect()
    }

    fn position_of(list: &DisplayList, text: &str) -> usize {
        list.ops()
            .iter()
            .position(|op| matches!(op, DrawOp::Text(t) if t.text == text))
            .unwrap_or_else(|| panic!("{text:?} not drawn"))
    }

    #[test]
    fn test_minimal_document_renders_all_section_headers() {
        let list = assemble(&minimal_doc(), default_styles()).unwrap();
        let drawn: Vec<&str> = texts(&list).iter().map(|t| t.text.as_str()).collect();

        assert!(drawn.contains(&"DATA ENGINEER PROFESSIONAL SUMMARY"));
        assert!(drawn.contains(&"Builds reliable pipelines."));
        for heading in [SKILLS_HEADING, WORK_HEADING, EDUCATION_HEADING, CERTIFICATIONS_HEADING] {
            assert!(drawn.contains(&heading), "missing heading {heading}");
        }
        assert_eq!(drawn.iter().filter(|t| **t == BULLET_GLYPH).count(), 1);
        // One rule per section header.
        assert_eq!(list.rules().count(), 5);
        // Headers for empty sections are the last three text runs.
        let tail: Vec<&str> = drawn[drawn.len() - 3..].to_vec();
        assert_eq!(tail, vec![WORK_HEADING, EDUCATION_HEADING, CERTIFICATIONS_HEADING]);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let list = assemble(&full_doc(), default_styles()).unwrap();
        let order = [
            "DATA ENGINEER PROFESSIONAL SUMMARY",
            SKILLS_HEADING,
            TECHNICAL_SKILLS_LABEL,
            TOOLS_LABEL,
            WORK_HEADING,
            EDUCATION_HEADING,
            CERTIFICATIONS_HEADING,
        ];
        let positions: Vec<usize> = order.iter().map(|t| position_of(&list, t)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_sequences_keep_input_order() {
        let list = assemble(&full_doc(), default_styles()).unwrap();
        let sequences: [&[&str]; 4] = [
            &["Summary one", "Summary two", "Summary three"],
            &["A1", "A2", "A3", "B1"],
            &["MSc Computer Science | TU Berlin", "BSc Mathematics | LMU"],
            &["AWS Data Analytics", "CKA"],
        ];
        for seq in sequences {
            let positions: Vec<usize> = seq.iter().map(|t| position_of(&list, t)).collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{seq:?} out of order");
        }
    }

    #[test]
    fn test_cursor_is_monotonic_across_draws() {
        let list = assemble(&full_doc(), default_styles()).unwrap();
        // Skip the header band: the centered name is redrawn at the band top.
        let ys: Vec<f32> = list
            .ops()
            .iter()
            .skip(3)
            .map(|op| match op {
                DrawOp::Text(t) => t.y,
                DrawOp::Rule(r) => r.y,
            })
            .collect();
        let mut last_text_y = 0.0_f32;
        for op in list.ops().iter().skip(3) {
            if let DrawOp::Text(t) = op {
                assert!(t.y >= last_text_y, "text {:?} moved up to {}", t.text, t.y);
                last_text_y = t.y;
            }
        }
        assert!(ys.iter().all(|y| *y >= 72.0));
    }

    #[test]
    fn test_job_title_without_location_has_no_trailing_comma() {
        assert_eq!(job_title("Analyst", "Globex", None), "Analyst, Globex");
        assert_eq!(job_title("Analyst", "Globex", Some("")), "Analyst, Globex");
        assert_eq!(job_title("Analyst", "Globex", Some("  ")), "Analyst, Globex");
        assert_eq!(
            job_title("Analyst", "Globex", Some("Paris")),
            "Analyst, Globex, Paris"
        );
    }

    #[test]
    fn test_work_entry_without_location_right_aligns_duration() {
        let doc = ResumeDocument {
            work_experience: Some(vec![job("Analyst", "Globex", None, &["Did things"])]),
            ..minimal_doc()
        };
        let list = assemble(&doc, default_styles()).unwrap();
        let runs = texts(&list);
        let title_idx = runs
            .iter()
            .position(|t| t.text == "Analyst, Globex")
            .expect("title line drawn");
        let duration = runs[title_idx + 1];
        assert_eq!(duration.text, "Jan 2020 - Present");

        let bold = default_styles().get(StyleRole::Bold);
        assert_eq!(duration.x, 522.0 - measure("Jan 2020 - Present", bold));
        assert_eq!(duration.y, runs[title_idx].y);
    }

    #[test]
    fn test_empty_technical_skills_does_not_overlap_tools_line() {
        let doc = ResumeDocument {
            skills: Some(Skills {
                technical_skills: Some(String::new()),
                tools_technologies: Some("Airflow, dbt".to_string()),
            }),
            ..minimal_doc()
        };
        let list = assemble(&doc, default_styles()).unwrap();
        let runs = texts(&list);
        let technical = runs
            .iter()
            .find(|t| t.text == TECHNICAL_SKILLS_LABEL)
            .expect("technical label drawn");
        let tools = runs
            .iter()
            .find(|t| t.text == TOOLS_LABEL)
            .expect("tools label drawn");

        let bold_height = line_height(default_styles().get(StyleRole::Bold));
        let gap = tools.y - technical.y;
        assert!(gap >= bold_height, "gap {gap} below line height {bold_height}");
    }

    #[test]
    fn test_contact_line_filters_blank_fields() {
        let doc = ResumeDocument {
            contact_info: Some(ContactInfo {
                name: Some("A".to_string()),
                location: Some(String::new()),
                phone: Some("1".to_string()),
                email: Some(String::new()),
                linkedin: Some("x".to_string()),
            }),
            ..minimal_doc()
        };
        let list = assemble(&doc, default_styles()).unwrap();
        let runs = texts(&list);
        assert_eq!(runs[2].text, "1 | x");
        let width = measure("1 | x", default_styles().get(StyleRole::Contact));
        assert_eq!(runs[2].x, (PAGE_WIDTH - width) / 2.0);
    }

    #[test]
    fn test_missing_name_fails_before_any_draw() {
        let doc = ResumeDocument {
            contact_info: Some(ContactInfo::default()),
            ..minimal_doc()
        };
        match assemble(&doc, default_styles()).unwrap_err() {
            LayoutError::FieldAccess { field, partial_ops } => {
                assert_eq!(field, "contact_info.name");
                assert_eq!(partial_ops, 0);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_achievements_fails_after_earlier_sections() {
        let mut entry = job("Analyst", "Globex", None, &[]);
        entry.achievements = None;
        let doc = ResumeDocument {
            work_experience: Some(vec![entry]),
            ..minimal_doc()
        };
        match assemble(&doc, default_styles()).unwrap_err() {
            LayoutError::FieldAccess { field, partial_ops } => {
                assert_eq!(field, "work_experience[0].achievements");
                assert!(partial_ops > 0, "earlier sections should already be laid out");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_section_reports_path() {
        let doc = ResumeDocument {
            skills: None,
            ..minimal_doc()
        };
        let err = assemble(&doc, default_styles()).unwrap_err();
        assert!(matches!(err, LayoutError::FieldAccess { ref field, .. } if field == "skills"));
    }
}
