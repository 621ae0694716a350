// crates/infra/src/layout/reflow.rs
use chandas_ports::layout::TextReflow;
use unicode_segmentation::UnicodeSegmentation;

/// Re-wraps lines wider than `max_width` graphemes at whitespace.
///
/// A break replaces the whitespace run it falls on with `\n`; every other
/// whitespace run, leading indentation included, is kept as written. Tokens
/// are never split, so a token wider than `max_width` gets a line of its own.
/// Trailing whitespace stays on the last line and is not counted. Lines that
/// already fit are returned byte for byte. `max_width == 0` returns the text
/// unchanged.
pub fn reflow(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return text.to_owned();
    }
    text.split('\n').map(|line| wrap_line(line, max_width)).collect::<Vec<_>>().join("\n")
}

fn width(s: &str) -> usize {
    s.graphemes(true).count()
}

/// `(whitespace before, token)` pairs and the trailing whitespace of `line`.
fn segments(line: &str) -> (Vec<(&str, &str)>, &str) {
    let mut pairs = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
        let after = &rest[start..];
        let end = after.find(char::is_whitespace).unwrap_or(after.len());
        pairs.push((&rest[..start], &after[..end]));
        rest = &after[end..];
    }
    (pairs, rest)
}

fn wrap_line(line: &str, max_width: usize) -> String {
    if width(line) <= max_width {
        return line.to_owned();
    }

    let (pairs, trailing) = segments(line);
    let mut wrapped = String::with_capacity(line.len() + pairs.len());
    let mut current_width = 0;

    for (i, (gap, token)) in pairs.into_iter().enumerate() {
        let piece_width = width(gap) + width(token);
        if i == 0 || current_width + piece_width <= max_width {
            wrapped.push_str(gap);
            wrapped.push_str(token);
            current_width += piece_width;
        } else {
            wrapped.push('\n');
            wrapped.push_str(token);
            current_width = width(token);
        }
    }
    wrapped.push_str(trailing);
    wrapped
}

/// [`TextReflow`] adapter with a fixed width.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphemeReflow {
    max_width: usize,
}

impl GraphemeReflow {
    pub const fn new(max_width: usize) -> Self {
        Self { max_width }
    }
}

impl TextReflow for GraphemeReflow {
    fn reflow(&self, text: &str) -> String {
        reflow(text, self.max_width)
    }
}
