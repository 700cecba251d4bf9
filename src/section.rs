//! Page sections extracted from the portfolio markdown.
//!
//! A section is one navigation destination on the page: it starts at a heading of the
//! configured section level and runs until the next such heading or the end of the file.
//! Sections keep their line and byte coordinates in the source so the body can be laid out
//! without re-parsing.

#[derive(Clone, Debug, PartialEq)]
/// Named region of the page with a matching nav button.
pub struct Section {
    /// Stable identifier derived from the heading title, unique within the page.
    pub id: String,
    /// Heading text without markup symbols.
    pub title: String,
    /// Heading depth (number of `#` markers).
    pub level: usize,
    /// Source line of the heading (0-indexed).
    pub line_start: usize,
    /// Source line where the next section begins or the file ends.
    pub line_end: usize,
    /// Byte offset where the section body begins (just after the heading).
    pub byte_start: usize,
    /// Byte offset where the section body ends.
    pub byte_end: usize,
    /// Markdown body between this heading and the next section heading.
    pub body: String,
}

/// A loaded portfolio page: whatever precedes the first section, then the sections in order.
pub struct Page {
    /// Markdown before the first section heading, typically the name and tagline.
    pub preamble: String,
    /// Page sections in document order.
    pub sections: Vec<Section>,
}

impl Page {
    #[must_use]
    /// Section ids in page order.
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    #[must_use]
    /// Looks up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

#[must_use]
/// Turns a heading title into a section id: lowercase alphanumerics joined by single dashes.
///
/// `What I Do` becomes `what-i-do`. Titles with nothing alphanumeric become `section`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}
