//! Resume PDF generation: the single entry point the transport layer calls.
//!
//! Flow: from_request (shape check) → assemble (full layout into a display
//! list) → PdfEmitter (stream bytes into the sink) → finish.
//!
//! No byte reaches the sink until layout has succeeded, so every failure can
//! still be reported as a clean error.

use std::io::Write;

use serde_json::Value;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::errors::LayoutError;
use crate::layout::assemble;
use crate::layout::styles::StyleRegistry;
use crate::models::resume::ResumeDocument;
use crate::render::{EmitOptions, PdfEmitter};

/// Per-request generation settings.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub compress: bool,
}

/// Parses `{"optimized_resume": {...}}` and renders it to PDF bytes.
pub fn generate_from_request(
    body: &Value,
    styles: &StyleRegistry,
    options: &GenerateOptions,
) -> Result<Vec<u8>, LayoutError> {
    let doc = ResumeDocument::from_request(body)?;
    generate_pdf(&doc, styles, options)
}

/// Renders a resume record to an in-memory PDF.
pub fn generate_pdf(
    doc: &ResumeDocument,
    styles: &StyleRegistry,
    options: &GenerateOptions,
) -> Result<Vec<u8>, LayoutError> {
    generate_pdf_to(doc, styles, options, Vec::new())
}

/// Renders a resume record and streams the PDF into `sink`.
///
/// The sink is untouched if layout fails.
pub fn generate_pdf_to<W: Write>(
    doc: &ResumeDocument,
    styles: &StyleRegistry,
    options: &GenerateOptions,
    sink: W,
) -> Result<W, LayoutError> {
    let generation_id = Uuid::new_v4();
    let span = info_span!("generate_pdf", %generation_id);
    let _enter = span.enter();

    let list = assemble(doc, styles).inspect_err(|e| {
        warn!("Resume layout failed: {e}");
    })?;

    let title = doc.contact_info.as_ref().and_then(|c| c.name.clone());
    let mut emitter = PdfEmitter::new(EmitOptions {
        compress: options.compress,
        title,
    });
    emitter.emit(&list);
    let sink = emitter.finish(sink)?;

    info!(draw_ops = list.len(), "Resume PDF generated");
    Ok(sink)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
