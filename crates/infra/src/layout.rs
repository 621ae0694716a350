// crates/infra/src/layout.rs
mod reflow;

pub use reflow::{GraphemeReflow, reflow};
