//! Line wrapping and pagination for the report.

pub(crate) const PAGE_WIDTH: f32 = 612.0;
pub(crate) const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 72.0;
/// Rough Helvetica advance width as a fraction of the font size.
const AVERAGE_GLYPH_WIDTH: f32 = 0.55;
const LEADING: f32 = 1.4;

pub(crate) const REGULAR_FONT: &str = "F1";
pub(crate) const BOLD_FONT: &str = "F2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
}

impl LineStyle {
    fn font(self) -> &'static str {
        match self {
            LineStyle::Title | LineStyle::Heading => BOLD_FONT,
            LineStyle::Body => REGULAR_FONT,
        }
    }

    fn size(self) -> f32 {
        match self {
            LineStyle::Title => 18.0,
            LineStyle::Heading => 14.0,
            LineStyle::Body => 11.0,
        }
    }

    /// Extra gap above the first wrapped row of a line.
    fn space_before(self) -> f32 {
        match self {
            LineStyle::Title => 0.0,
            LineStyle::Heading => 12.0,
            LineStyle::Body => 2.0,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn max_chars(self) -> usize {
        ((PAGE_WIDTH - 2.0 * MARGIN) / (self.size() * AVERAGE_GLYPH_WIDTH)) as usize
    }
}

/// One logical line of report content, before wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub style: LineStyle,
    pub text: String,
}

impl ReportLine {
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Title,
            text: text.into(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Heading,
            text: text.into(),
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Body,
            text: text.into(),
        }
    }
}

/// A wrapped row with its font and baseline position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlacedLine {
    pub(crate) font: &'static str,
    pub(crate) size: f32,
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) text: String,
}

/// Wrap every line to the page width and flow the rows onto pages. Always
/// returns at least one page.
pub(crate) fn paginate(lines: &[ReportLine]) -> Vec<Vec<PlacedLine>> {
    let top = PAGE_HEIGHT - MARGIN;
    let mut pages = vec![Vec::new()];
    let mut y = top;

    for line in lines {
        let size = line.style.size();
        let step = size * LEADING;
        for (i, row) in wrap(&line.text, line.style.max_chars())
            .into_iter()
            .enumerate()
        {
            let gap = if i == 0 { line.style.space_before() } else { 0.0 };
            y -= gap + step;
            if y < MARGIN {
                pages.push(Vec::new());
                y = top - step;
            }
            if let Some(page) = pages.last_mut() {
                page.push(PlacedLine {
                    font: line.style.font(),
                    size,
                    x: MARGIN,
                    y,
                    text: row,
                });
            }
        }
    }
    pages
}

/// Greedy word wrap on whitespace; words longer than `max_chars` are split.
/// Blank input still yields one empty row so paragraph gaps survive.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > max_chars {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(max_chars);
            rows.push(chars.into_iter().collect());
            chars = rest;
        }

        let word_len = chars.len();
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += word_len;
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}
