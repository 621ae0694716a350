// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use chandas_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing report files.
pub struct FileWriter;

impl FileWriter {
    /// Write `data` to `path` through a sibling temp file and a rename.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        Self::write_then_rename(path, data)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }

    fn write_then_rename(path: &Path, data: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".chandas.{}.{}.tmp", std::process::id(), nanos));

        let mut writer = BufWriter::new(File::create(&tmp)?);
        let written = writer.write_all(data).and_then(|()| writer.flush());
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        let _ = writer.get_ref().sync_all();
        drop(writer);

        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
