// crates/infra/src/extraction.rs
mod document;
mod docx;
mod pdf;
mod plain_text;
pub mod script_density;

pub use document::{DocumentExtractor, DocumentFormat};
pub use plain_text::decode_text;
