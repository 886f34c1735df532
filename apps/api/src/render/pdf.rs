//! Output Emission: turns a finished `DisplayList` into a one-page PDF.
//!
//! Text uses the unembedded base-14 Times faces with WinAnsiEncoding.
//! Layout coordinates (origin top-left, y down) are flipped into PDF user
//! space here and nowhere else.

use std::io::Write;

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::debug;

use crate::errors::LayoutError;
use crate::layout::cursor::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::layout::encoding::encode_win_ansi;
use crate::layout::font_metrics::get_metrics;
use crate::layout::styles::FontFace;
use crate::layout::writer::{DisplayList, DrawOp, RuleLine, TextRun};

pub const PRODUCER: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Document-level emission settings.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Flate-compress the content stream.
    pub compress: bool,
    /// Written to the `Info` dictionary when present.
    pub title: Option<String>,
}

/// Accumulates page operations and writes the PDF on `finish`.
///
/// `finish` consumes the emitter, so a document is finalized exactly once.
pub struct PdfEmitter {
    options: EmitOptions,
    operations: Vec<Operation>,
}

impl PdfEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self {
            options,
            operations: Vec::new(),
        }
    }

    /// Appends every operation of `list`, in order.
    pub fn emit(&mut self, list: &DisplayList) {
        for op in list.ops() {
            match op {
                DrawOp::Text(run) => self.text(run),
                DrawOp::Rule(rule) => self.rule(rule),
            }
        }
    }

    fn text(&mut self, run: &TextRun) {
        let ascent = get_metrics(run.face).ascent_pt(run.size);
        let baseline = PAGE_HEIGHT - (run.y + ascent);
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(run.face.resource_name().as_bytes().to_vec()),
                    Object::Real(run.size),
                ],
            ),
            Operation::new("Td", vec![Object::Real(run.x), Object::Real(baseline)]),
            Operation::new(
                "Tj",
                vec![Object::String(
                    encode_win_ansi(&run.text),
                    StringFormat::Literal,
                )],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    fn rule(&mut self, rule: &RuleLine) {
        let y = PAGE_HEIGHT - rule.y;
        self.operations.extend([
            Operation::new("w", vec![Object::Real(rule.width)]),
            Operation::new("m", vec![Object::Real(rule.x1), Object::Real(y)]),
            Operation::new("l", vec![Object::Real(rule.x2), Object::Real(y)]),
            Operation::new("S", vec![]),
        ]);
    }

    /// Builds the document around the recorded operations and writes it to `writer`.
    pub fn finish<W: Write>(self, mut writer: W) -> Result<W, LayoutError> {
        let Self {
            options,
            operations,
        } = self;
        let op_count = operations.len();
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for face in FontFace::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), Object::Reference(font_id));
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => Object::Dictionary(fonts),
        });

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(PAGE_WIDTH),
                Object::Real(PAGE_HEIGHT),
            ],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => Object::Integer(1),
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let info_id = info_dictionary(&mut doc, &options);
        doc.trailer.set("Info", info_id);

        if options.compress {
            doc.compress();
        }

        doc.save_to(&mut writer)?;
        writer.flush()?;
        debug!(operations = op_count, "PDF document finalized");
        Ok(writer)
    }
}

fn info_dictionary(doc: &mut Document, options: &EmitOptions) -> ObjectId {
    let created = format!("D:{}", Utc::now().format("%Y%m%d%H%M%SZ"));
    let mut info = dictionary! {
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(created),
    };
    if let Some(title) = &options.title {
        info.set("Title", encode_text_string(title));
    }
    doc.add_object(info)
}

/// PDF text string for document metadata: UTF-16BE with a byte-order mark.
///
/// Info entries are not drawn with the page font, so they carry full Unicode
/// rather than WinAnsi codes.
pub fn encode_text_string(text: &str) -> Object {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
