// Resume PDF generation: request parsing → layout → emission.
// The layout engine itself is synchronous; handlers run it via spawn_blocking.

pub mod generator;
pub mod handlers;
