//! `.docx` text extraction: paragraph text from `word/document.xml`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::DocumentError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Read every paragraph of a `.docx` in document order, joined by single
/// spaces.
pub(super) fn extract_docx_text(path: &Path) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(File::open(path)?)?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;
    let paragraphs = parse_paragraphs(&xml)?;
    Ok(paragraphs.join(" "))
}

/// Collect the text of each `<w:p>` element.
///
/// Run text comes from `<w:t>`; `<w:tab/>` and `<w:br/>` become a tab and
/// a newline. Empty paragraphs are kept so spacing matches the source.
/// Paragraphs nested inside another (text boxes) are emitted when they
/// close, and the enclosing paragraph keeps its own text around them.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>, DocumentError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match (e.name().as_ref(), open.last_mut()) {
                (b"w:p", _) => paragraphs.push(String::new()),
                (b"w:tab", Some(current)) => current.push('\t'),
                (b"w:br" | b"w:cr", Some(current)) => current.push('\n'),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(done) = open.pop() {
                        paragraphs.push(done);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(e) if in_text => {
                if let Some(current) = open.last_mut() {
                    match e.unescape() {
                        Ok(text) => current.push_str(&text),
                        Err(err) => {
                            tracing::debug!(
                                error = %err,
                                "keeping run text with unresolved entity as-is"
                            );
                            current.push_str(&String::from_utf8_lossy(&e));
                        }
                    }
                }
            }
            Event::CData(e) if in_text => {
                if let Some(current) = open.last_mut() {
                    current.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
