//! PDF report rendering for SentiLens analysis results.
//!
//! [`report_lines`] decides what the report says and in which order;
//! [`render`] lays those lines out on letter-size pages with the standard
//! Helvetica fonts.

mod layout;

use chrono::{DateTime, Local};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use sentilens_core::{truncate_with_ellipsis, AnalysisResult};
use thiserror::Error;

pub use layout::{LineStyle, ReportLine};

/// Characters of the supplied preview text printed in the report.
pub const REPORT_PREVIEW_CHARS: usize = 1000;

pub const REPORT_TITLE: &str = "Sentiment Analysis Report";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to render report: {0}")]
    Render(String),
}

impl ReportError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ReportError::Render(_) => "render_failure",
        }
    }
}

/// Render a report stamped with the current local time.
///
/// # Errors
///
/// Returns [`ReportError::Render`] if the PDF cannot be encoded. No partial
/// output is returned in that case.
pub fn render(result: &AnalysisResult, preview: &str) -> Result<Vec<u8>, ReportError> {
    render_at(result, preview, Local::now())
}

/// Render a report stamped with `generated_at`.
///
/// # Errors
///
/// Returns [`ReportError::Render`] if the PDF cannot be encoded.
pub fn render_at(
    result: &AnalysisResult,
    preview: &str,
    generated_at: DateTime<Local>,
) -> Result<Vec<u8>, ReportError> {
    let lines = report_lines(result, preview, generated_at);
    let pages = layout::paginate(&lines);

    let bytes = build_pdf(&pages).inspect_err(|e| {
        tracing::error!(error = %e, "report rendering failed");
    })?;
    tracing::debug!(pages = pages.len(), size = bytes.len(), "rendered report");
    Ok(bytes)
}

/// Everything the report shows, in print order.
#[must_use]
pub fn report_lines(
    result: &AnalysisResult,
    preview: &str,
    generated_at: DateTime<Local>,
) -> Vec<ReportLine> {
    let scores = &result.raw_scores;
    let mut lines = vec![
        ReportLine::title(REPORT_TITLE),
        ReportLine::body(format!(
            "Generated on: {}",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        )),
        ReportLine::heading("Analysis Results"),
        ReportLine::body(format!("Sentiment: {}", result.sentiment)),
        ReportLine::body(format!("Polarity: {:.3}", scores.polarity)),
        ReportLine::body(format!("Subjectivity: {:.3}", scores.subjectivity)),
        ReportLine::body(format!("Compound Score: {:.3}", scores.compound)),
        ReportLine::body(format!("Confidence: {}", result.confidence_level)),
        ReportLine::body(format!("Word Count: {}", result.word_count)),
        ReportLine::body(format!("Character Count: {}", result.char_count)),
        ReportLine::heading("Original Text Preview"),
    ];
    let preview = truncate_with_ellipsis(preview, REPORT_PREVIEW_CHARS);
    lines.extend(preview.lines().map(ReportLine::body));
    lines
}

/// Download name for a report generated at `at`, e.g.
/// `sentiment_report_20260314_091500.pdf`.
#[must_use]
pub fn report_filename(at: DateTime<Local>) -> String {
    format!("sentiment_report_{}.pdf", at.format("%Y%m%d_%H%M%S"))
}

fn build_pdf(pages: &[Vec<layout::PlacedLine>]) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let regular = add_font(&mut doc, "Helvetica");
    let bold = add_font(&mut doc, "Helvetica-Bold");
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            layout::REGULAR_FONT => regular,
            layout::BOLD_FONT => bold,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content: Content<Vec<Operation>> = Content {
            operations: page.iter().flat_map(text_operations).collect(),
        };
        let encoded = content
            .encode()
            .map_err(|e| ReportError::Render(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).map_err(|e| ReportError::Render(e.to_string()))?;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                layout::PAGE_WIDTH.into(),
                layout::PAGE_HEIGHT.into(),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| ReportError::Render(e.to_string()))?;
    Ok(out)
}

fn add_font(doc: &mut Document, base_font: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

fn text_operations(line: &layout::PlacedLine) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![line.font.into(), line.size.into()]),
        Operation::new("Td", vec![line.x.into(), line.y.into()]),
        Operation::new("Tj", vec![Object::string_literal(encode_latin1(&line.text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Encode for the base fonts: Latin-1 characters map to their byte, tabs
/// become spaces, anything else becomes `?`.
fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\t' => b' ',
            c if c.is_control() => b'?',
            c => u8::try_from(u32::from(c)).unwrap_or(b'?'),
        })
        .collect()
}
