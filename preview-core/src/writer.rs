use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PreviewError, Result};
use crate::transform::Preview;

/// Writes previews as individual files under one directory.
#[derive(Debug, Clone)]
pub struct PreviewWriter {
    dir: PathBuf,
}

impl PreviewWriter {
    /// Create the output directory (and parents). An existing directory is fine.
    pub fn create<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| PreviewError::OutputDirectory { path: dir.clone(), source })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, preview: &Preview) -> PathBuf {
        self.dir.join(preview.file_name())
    }

    /// Write one preview, replacing any previous file of the same name.
    pub fn write(&self, preview: &Preview) -> Result<PathBuf> {
        let path = self.path_for(preview);
        fs::write(&path, &preview.contents).map_err(|source| PreviewError::OutputWriteFailure { path: path.clone(), source })?;
        log::info!("wrote {} ({} frames)", path.display(), preview.frames);
        Ok(path)
    }
}
