// crates/ports/src/layout.rs

/// Port for re-wrapping text before it is split into lines for prosody.
pub trait TextReflow: Send + Sync {
    fn reflow(&self, text: &str) -> String;
}

/// Leaves the text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReflow;

impl TextReflow for NoReflow {
    fn reflow(&self, text: &str) -> String {
        text.to_owned()
    }
}
