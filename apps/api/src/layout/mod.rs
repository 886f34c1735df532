// Layout engine: style registry, text measurement, cursor, wrapping writer,
// composite renderers and the fixed-order document assembler.
// Produces a DisplayList only; emission lives in crate::render.

pub mod assembler;
pub mod blocks;
pub mod cursor;
pub mod encoding;
pub mod font_metrics;
pub mod styles;
pub mod writer;

// Re-export the public API consumed by other modules (generator, render).
pub use assembler::assemble;
pub use styles::{default_styles, StyleRegistry};
