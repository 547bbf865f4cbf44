//! Uploaded document parsing (`txt`, `docx`, `pdf`).

mod docx;
mod pdf;
mod spool;

use std::path::{Path, PathBuf};

use thiserror::Error;

use spool::UploadSpool;

/// Lower-level reasons a document could not be opened.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid docx archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("invalid docx XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("extraction task aborted: {0}")]
    Aborted(String),
}

/// Document formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Txt,
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Pick a parser from the text after the last `.` of a file name,
    /// compared case-insensitively. Returns `None` for anything outside
    /// the allow-list, including names with no extension.
    #[must_use]
    pub fn from_filename(filename: &str) -> Option<Self> {
        match extension_of(filename)?.as_str() {
            "txt" => Some(Self::Txt),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

/// Lowercased text after the final `.`; `None` when there is no dot or
/// nothing follows it.
pub(crate) fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Spool the upload to a temporary file, parse it, and delete the file.
///
/// Parsing is blocking work and runs on the blocking pool. The spool file
/// is removed on every exit path, including a panic inside a parser.
pub(crate) async fn extract_document(
    kind: DocumentKind,
    bytes: Vec<u8>,
    spool_dir: Option<PathBuf>,
) -> Result<String, DocumentError> {
    tokio::task::spawn_blocking(move || {
        let spool = UploadSpool::create(spool_dir.as_deref(), &bytes, kind.as_str())?;
        drop(bytes);
        let text = read_spooled(kind, spool.path());
        spool.release();
        text
    })
    .await
    .map_err(|e| DocumentError::Aborted(e.to_string()))?
}

fn read_spooled(kind: DocumentKind, path: &Path) -> Result<String, DocumentError> {
    match kind {
        DocumentKind::Txt => {
            let raw = std::fs::read(path)?;
            Ok(decode_utf8_skipping_invalid(&raw))
        }
        DocumentKind::Docx => docx::extract_docx_text(path),
        DocumentKind::Pdf => pdf::extract_pdf_text(path),
    }
}

/// Decode UTF-8, dropping invalid byte sequences instead of failing.
fn decode_utf8_skipping_invalid(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len());
    for chunk in raw.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
