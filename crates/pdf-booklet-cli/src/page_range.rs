use pdf_booklet::constants::MAX_SELECTED_PAGES;
use std::collections::BTreeSet;

/// Parse a page range string like "1-4,7,9-12" into a set of 1-indexed page
/// numbers.
///
/// With a `page_count` every page must lie within the document. A selection
/// may name at most [`MAX_SELECTED_PAGES`] pages.
pub fn parse_page_range(input: &str, page_count: Option<u32>) -> Result<BTreeSet<u32>, String> {
    let mut pages = BTreeSet::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let (start, end) = match part.split_once('-') {
            Some((start, end)) => (parse_page(start, page_count)?, parse_page(end, page_count)?),
            None => {
                let page = parse_page(part, page_count)?;
                (page, page)
            }
        };
        if start > end {
            return Err(format!("reversed page range: '{part}'"));
        }
        let span = (end - start) as usize + 1;
        if pages.len() + span > MAX_SELECTED_PAGES {
            return Err(format!(
                "page range '{part}' selects too many pages (limit {MAX_SELECTED_PAGES})"
            ));
        }
        pages.extend(start..=end);
    }

    if pages.is_empty() {
        return Err("page range selects no pages".to_string());
    }
    Ok(pages)
}

fn parse_page(text: &str, page_count: Option<u32>) -> Result<u32, String> {
    let page: u32 = text
        .trim()
        .parse()
        .map_err(|_| format!("invalid page number: '{}'", text.trim()))?;

    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    match page_count {
        Some(count) if page > count => Err(format!(
            "page {page} exceeds document page count ({count})"
        )),
        _ => Ok(page),
    }
}
