//! Doxygen Integration
//!
//! Everything between loaded configuration and a regenerated HTML reference:
//! Doxyfile synthesis, generator probing and invocation, and the pipeline
//! that sequences a full run.

mod doxyfile;
mod pipeline;
mod runner;

pub use doxyfile::Doxyfile;
pub use pipeline::{GenerateOutcome, GeneratePipeline};
pub use runner::DoxygenRunner;
