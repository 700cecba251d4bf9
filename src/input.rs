//! Loading the portfolio page and extracting its sections with tree-sitter.

use crate::formats::Format;
use crate::section::{slugify, Page, Section};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};
use tracing::debug;

/// A heading found in the source, before sections are cut.
struct Heading {
    level: usize,
    title: String,
    byte_start: usize,
    byte_end: usize,
    line_start: usize,
}

/// Reads the page at `path` and splits it into sections at headings of `section_level`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the grammar/query fails to load.
pub fn load_page(path: &Path, format: &impl Format, section_level: usize) -> io::Result<Page> {
    let source = fs::read_to_string(path)?;
    let page = parse_page(&source, format, section_level)?;
    debug!(
        path = %path.display(),
        sections = page.sections.len(),
        "Loaded page"
    );
    Ok(page)
}

/// Splits page source into a preamble and sections at headings of `section_level`.
///
/// Headings at other levels stay inside the surrounding body text.
///
/// # Errors
///
/// Returns an error if the grammar or the heading query cannot be loaded.
pub fn parse_page(source: &str, format: &impl Format, section_level: usize) -> io::Result<Page> {
    let headings: Vec<Heading> = find_headings(source, format)?
        .into_iter()
        .filter(|h| h.level == section_level)
        .collect();

    let preamble_end = headings.first().map_or(source.len(), |h| h.byte_start);
    let preamble = source[..preamble_end].trim().to_string();
    let total_lines = source.lines().count();

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut sections = Vec::with_capacity(headings.len());

    for (i, heading) in headings.iter().enumerate() {
        let next = headings.get(i + 1);
        let byte_end = next.map_or(source.len(), |n| n.byte_start);
        let line_end = next.map_or(total_lines, |n| n.line_start);
        let byte_start = heading.byte_end.min(byte_end);

        let base = slugify(&heading.title);
        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;
        let id = if *count == 1 {
            base
        } else {
            format!("{base}-{count}")
        };

        sections.push(Section {
            id,
            title: heading.title.clone(),
            level: heading.level,
            line_start: heading.line_start,
            line_end,
            byte_start,
            byte_end,
            body: source[byte_start..byte_end].trim().to_string(),
        });
    }

    Ok(Page { preamble, sections })
}

fn find_headings(source: &str, format: &impl Format) -> io::Result<Vec<Heading>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language).map_err(io::Error::other)?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| io::Error::other("failed to parse page"))?;

    let query = Query::new(&language, format.heading_query()).map_err(io::Error::other)?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());

    let mut headings = Vec::new();
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let text = &source[node.byte_range()];
            let (level, title) = format.heading_parts(text);
            headings.push(Heading {
                level,
                title: title.to_string(),
                byte_start: node.start_byte(),
                byte_end: node.end_byte(),
                line_start: node.start_position().row,
            });
        }
    }

    headings.sort_by_key(|h| h.byte_start);
    headings.dedup_by_key(|h| h.byte_start);
    Ok(headings)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
