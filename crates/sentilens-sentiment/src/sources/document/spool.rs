//! Temporary on-disk copy of an uploaded document.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Owns the temporary file holding an upload while it is parsed.
///
/// The file is deleted when the spool is released or dropped, so every
/// exit path (early return, parser error, panic) cleans up.
pub(super) struct UploadSpool {
    file: NamedTempFile,
}

impl UploadSpool {
    /// Write `bytes` to a fresh temp file in `dir` (or the system temp dir).
    pub(super) fn create(dir: Option<&Path>, bytes: &[u8], extension: &str) -> std::io::Result<Self> {
        let suffix = format!(".{extension}");
        let mut builder = tempfile::Builder::new();
        builder.prefix("sentilens-upload-").suffix(&suffix);

        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(bytes)?;
        file.flush()?;

        tracing::debug!(path = %file.path().display(), size = bytes.len(), "spooled upload");
        Ok(Self { file })
    }

    pub(super) fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the file now, logging instead of failing if removal errors.
    pub(super) fn release(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove upload spool file");
        }
    }
}
