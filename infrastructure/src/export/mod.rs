//! Export adapters.

mod json_exporter;

pub use json_exporter::JsonFileExporter;
