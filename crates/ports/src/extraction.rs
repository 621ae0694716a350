// crates/ports/src/extraction.rs
use std::{fmt, path::PathBuf};

use chandas_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Where a document's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentSource {
    Stdin,
    File(PathBuf),
}

impl DocumentSource {
    /// `-` means standard input, anything else is a path.
    pub fn from_arg(arg: impl Into<PathBuf>) -> Self {
        let path = arg.into();
        if path.as_os_str() == "-" { Self::Stdin } else { Self::File(path) }
    }

    /// Path used in error messages; `-` for stdin.
    pub fn path(&self) -> PathBuf {
        match self {
            Self::Stdin => PathBuf::from("-"),
            Self::File(path) => path.clone(),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Plain text pulled out of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub name: String,
    pub text: String,
}

/// Port for turning a document into analysable text.
pub trait DocumentTextExtractor: Send + Sync {
    fn extract(&self, source: &DocumentSource) -> Result<ExtractedDocument>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_is_stdin() {
        assert_eq!(DocumentSource::from_arg("-"), DocumentSource::Stdin);
        assert_eq!(DocumentSource::from_arg("poem.txt"), DocumentSource::File("poem.txt".into()));
    }

    #[test]
    fn display_names() {
        assert_eq!(DocumentSource::Stdin.to_string(), "<stdin>");
        assert_eq!(DocumentSource::File("a/b.txt".into()).to_string(), "a/b.txt");
        assert_eq!(DocumentSource::Stdin.path(), PathBuf::from("-"));
    }
}
