//! Renders full reports and reads them back with `lopdf` to check the
//! document structure and the order of its content.

use chrono::{Local, TimeZone};
use lopdf::Document;

use sentilens_core::{AnalysisResult, ConfidenceLevel, RawScores, Sentiment};
use sentilens_report::{render, render_at, report_filename};

fn negative_result() -> AnalysisResult {
    AnalysisResult {
        sentiment: Sentiment::Negative,
        confidence_level: ConfidenceLevel::Medium,
        raw_scores: RawScores {
            polarity: -0.35,
            subjectivity: 0.6,
            compound: -0.3412,
        },
        word_count: 4,
        char_count: 17,
        text_preview: "This is not good.".to_string(),
    }
}

fn all_text(doc: &Document) -> String {
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages).expect("extract text")
}

#[test]
fn report_reads_back_in_order() {
    let at = Local
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .single()
        .expect("unambiguous local time");
    let bytes = render_at(&negative_result(), "This is not good.", at).expect("render");
    let doc = Document::load_mem(&bytes).expect("valid pdf");
    assert_eq!(doc.get_pages().len(), 1);

    let text = all_text(&doc);
    let expected = [
        "Sentiment Analysis Report",
        "Generated on: 2026-01-02 03:04:05",
        "Analysis Results",
        "Sentiment: Negative",
        "Polarity: -0.350",
        "Subjectivity: 0.600",
        "Compound Score: -0.341",
        "Confidence: Medium",
        "Word Count: 4",
        "Character Count: 17",
        "Original Text Preview",
        "This is not good.",
    ];
    let mut cursor = 0;
    for needle in expected {
        let found = text[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} missing or out of order in {text:?}"));
        cursor += found + needle.len();
    }
}

#[test]
fn emoji_in_preview_does_not_break_rendering() {
    let bytes = render(&negative_result(), "so sad \u{1F61E} today").expect("render");
    let doc = Document::load_mem(&bytes).expect("valid pdf");
    assert!(all_text(&doc).contains("so sad ? today"));
}

#[test]
fn preview_is_capped_but_many_rows_paginate() {
    let long = "word ".repeat(5000);
    let bytes = render(&negative_result(), &long).expect("render");
    let doc = Document::load_mem(&bytes).expect("valid pdf");
    assert_eq!(doc.get_pages().len(), 1, "preview is capped at 1000 chars");

    let many_lines: String = (0..200).map(|i| format!("line {i}\n")).collect();
    let bytes = render(&negative_result(), &many_lines).expect("render");
    let doc = Document::load_mem(&bytes).expect("valid pdf");
    assert!(doc.get_pages().len() > 1);
}

#[test]
fn filename_is_pdf_with_timestamp() {
    let name = report_filename(Local::now());
    assert!(name.starts_with("sentiment_report_"));
    assert!(name.ends_with(".pdf"));
    // sentiment_report_ + YYYYMMDD_HHMMSS + .pdf
    assert_eq!(name.len(), "sentiment_report_".len() + 15 + ".pdf".len());
}
