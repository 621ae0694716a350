// crates/infra/src/output/writer.rs
use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use chandas_shared_kernel::Result;

use crate::persistence::FileWriter;

/// Where rendered reports end up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    pub fn deliver(&self, bytes: &[u8]) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut out = BufWriter::new(io::stdout().lock());
                out.write_all(bytes)?;
                out.flush()?;
            }
            Self::File(path) => {
                FileWriter::atomic_write(path, bytes)?;
                log::info!("report written to {}", path.display());
            }
        }
        Ok(())
    }
}
