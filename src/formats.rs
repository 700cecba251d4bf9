//! Format trait for page sources.
//!
//! A format supplies the tree-sitter grammar and the query that finds headings, so the loader
//! can stay agnostic of the markup used to write the page.

pub mod markdown;

/// Grammar and heading query for one page markup language.
pub trait Format {
    /// Tree-sitter grammar used to parse the page.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node.
    fn heading_query(&self) -> &str;
    /// Heading depth and title text for a captured heading node's source text.
    fn heading_parts<'a>(&self, heading: &'a str) -> (usize, &'a str);
}
