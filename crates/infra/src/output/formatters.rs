// crates/infra/src/output/formatters.rs
pub mod markdown;
pub mod structured;
pub mod text;

pub use markdown::output_markdown;
pub use structured::{output_json, output_yaml};
pub use text::output_text;
