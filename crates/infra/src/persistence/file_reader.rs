// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use chandas_shared_kernel::{InfraResult, InfrastructureError};

/// Reads whole documents into memory, tagging failures with the path.
pub struct FileReader;

impl FileReader {
    /// Read the entire file at `path`.
    pub fn read_all(path: &Path) -> InfraResult<Vec<u8>> {
        let read = || -> io::Result<Vec<u8>> {
            let mut file = File::open(path)?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            Ok(buf)
        };
        read().map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read standard input to the end.
    pub fn read_stdin() -> InfraResult<Vec<u8>> {
        Self::read_from(io::stdin().lock(), Path::new("-"))
    }

    /// Drain an arbitrary reader; `label` names it in errors.
    pub fn read_from(mut reader: impl Read, label: &Path) -> InfraResult<Vec<u8>> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|source| InfrastructureError::FileRead { path: label.to_path_buf(), source })?;
        Ok(buf)
    }
}
