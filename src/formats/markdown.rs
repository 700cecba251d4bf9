//! Markdown format implementation using tree-sitter-md.
//!
//! Page sections come from ATX-style headings (# syntax).

use crate::formats::Format;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn heading_parts<'a>(&self, heading: &'a str) -> (usize, &'a str) {
        let line = heading.trim();
        let level = line.chars().take_while(|c| *c == '#').count();
        let rest = line[level..].trim();
        // Optional closing sequence (`## Skills ##`) needs a space before it, so `C#` survives
        let unclosed = rest.trim_end_matches('#');
        let title = if unclosed.is_empty() || unclosed.ends_with(' ') {
            unclosed.trim_end()
        } else {
            rest
        };
        (level, title)
    }
}
