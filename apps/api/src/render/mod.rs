// Output emission: display list → PDF bytes.

pub mod pdf;

pub use pdf::{EmitOptions, PdfEmitter};
