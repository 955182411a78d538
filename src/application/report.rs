//! PDF report rendering for stored link batches.
//!
//! Output is deterministic: identical input batches produce byte-identical
//! documents. The layout is fixed: a title line, then per batch a header and
//! one line per link in stored order.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::domain::entities::LinkBatch;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN_LEFT: f32 = 50.0;
const MARGIN_TOP: f32 = 50.0;
const MARGIN_BOTTOM: f32 = 50.0;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const TITLE_ADVANCE: f32 = 28.0;
const HEADER_ADVANCE: f32 = 20.0;
const LINK_ADVANCE: f32 = 14.0;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// One rendered text line with its vertical space consumption.
#[derive(Debug, Clone, PartialEq)]
struct Line {
    text: String,
    bold: bool,
    size: f32,
    advance: f32,
}

/// Renders the fixed-layout report for `batches`, in input order.
///
/// Zero batches yield a valid title-only document. No sorting or
/// deduplication is applied; page breaks happen only when a page fills.
pub fn render(batches: &[LinkBatch]) -> Vec<u8> {
    let pages = paginate(layout(batches));

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);
    let page_ids: Vec<Ref> = (0..pages.len())
        .map(|i| Ref::new(5 + 2 * i as i32))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    {
        let mut page_tree = pdf.pages(page_tree_id);
        page_tree.kids(page_ids.iter().copied());
        page_tree.count(pages.len() as i32);
    }
    pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

    for (i, page_lines) in pages.iter().enumerate() {
        let content_id = Ref::new(6 + 2 * i as i32);

        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources()
            .fonts()
            .pair(FONT_REGULAR, regular_id)
            .pair(FONT_BOLD, bold_id);
        page.finish();

        let mut content = Content::new();
        let mut y = PAGE_HEIGHT - MARGIN_TOP;
        for line in page_lines {
            y -= line.advance;
            content.begin_text();
            content.set_font(if line.bold { FONT_BOLD } else { FONT_REGULAR }, line.size);
            content.next_line(MARGIN_LEFT, y);
            content.show(Str(line.text.as_bytes()));
            content.end_text();
        }
        pdf.stream(content_id, &content.finish());
    }

    pdf.finish()
}

/// Flattens batches into the ordered sequence of report lines.
fn layout(batches: &[LinkBatch]) -> Vec<Line> {
    let mut lines = vec![Line {
        text: "Link Status Report".to_string(),
        bold: true,
        size: TITLE_SIZE,
        advance: TITLE_ADVANCE,
    }];

    for batch in batches {
        lines.push(Line {
            text: format!("Batch ID: {}", batch.id),
            bold: false,
            size: BODY_SIZE,
            advance: HEADER_ADVANCE,
        });
        for link in &batch.links {
            lines.push(Line {
                text: format!("{} - {}", link.url, link.status.label()),
                bold: false,
                size: BODY_SIZE,
                advance: LINK_ADVANCE,
            });
        }
    }

    lines
}

/// Splits lines into pages once the usable page height is exhausted.
fn paginate(lines: Vec<Line>) -> Vec<Vec<Line>> {
    let usable = PAGE_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let mut pages = Vec::new();
    let mut current = Vec::new();
    let mut used = 0.0;

    for line in lines {
        if used + line.advance > usable && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            used = 0.0;
        }
        used += line.advance;
        current.push(line);
    }
    pages.push(current);

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{LinkCheck, LinkStatus};
    use chrono::Utc;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn sample_batch(id: i64, urls: &[(&str, LinkStatus)]) -> LinkBatch {
        let now = Utc::now();
        let links = urls
            .iter()
            .map(|(url, status)| LinkCheck::new(url.to_string(), *status, now))
            .collect();
        LinkBatch::new(id, links, now)
    }

    #[test]
    fn test_render_produces_pdf() {
        let batch = sample_batch(1, &[("google.com", LinkStatus::Available)]);
        let bytes = render(&[batch]);

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"Link Status Report"));
        assert!(contains(&bytes, b"Batch ID: 1"));
        assert!(contains(&bytes, b"google.com - Available"));
    }

    #[test]
    fn test_render_not_available_label() {
        let batch = sample_batch(3, &[("invalid.test", LinkStatus::NotAvailable)]);
        let bytes = render(&[batch]);

        assert!(contains(&bytes, b"invalid.test - Not Available"));
    }

    #[test]
    fn test_render_empty_input_is_title_only() {
        let bytes = render(&[]);

        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"Link Status Report"));
        assert!(!contains(&bytes, b"Batch ID:"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let batches = vec![
            sample_batch(1, &[("google.com", LinkStatus::Available)]),
            sample_batch(2, &[("invalid.test", LinkStatus::NotAvailable)]),
        ];

        assert_eq!(render(&batches), render(&batches));
    }

    #[test]
    fn test_layout_preserves_batch_and_link_order() {
        let batches = vec![
            sample_batch(2, &[("b.com", LinkStatus::Available)]),
            sample_batch(1, &[("a.com", LinkStatus::Available)]),
        ];
        let lines = layout(&batches);

        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Link Status Report",
                "Batch ID: 2",
                "b.com - Available",
                "Batch ID: 1",
                "a.com - Available",
            ]
        );
    }

    #[test]
    fn test_paginate_splits_long_reports() {
        let urls: Vec<(String, LinkStatus)> = (0..200)
            .map(|i| (format!("example{i}.com"), LinkStatus::Available))
            .collect();
        let refs: Vec<(&str, LinkStatus)> =
            urls.iter().map(|(u, s)| (u.as_str(), *s)).collect();
        let batch = sample_batch(1, &refs);

        let pages = paginate(layout(std::slice::from_ref(&batch)));
        assert!(pages.len() > 1);

        let total: usize = pages.iter().map(|p| p.len()).sum();
        assert_eq!(total, 202);
    }

    #[test]
    fn test_paginate_title_only_is_single_page() {
        let pages = paginate(layout(&[]));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 1);
    }
}
