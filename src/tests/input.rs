use super::{load_page, parse_page};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::section::slugify;
use std::io::Write;
use tempfile::NamedTempFile;

const PAGE: &str = "# Jane Doe

Engineer and tinkerer.

## About

I build things.

### Background

Grew up taking radios apart.

## What I Do

- Embedded firmware
- Web backends

## Projects

Blood Connect.
";

#[test]
fn test_sections_split_at_section_level() {
    let page = parse_page(PAGE, &MarkdownFormat, 2).unwrap();
    let titles: Vec<&str> = page.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["About", "What I Do", "Projects"]);
    assert_eq!(page.section_ids(), ["about", "what-i-do", "projects"]);
}

#[test]
fn test_deeper_headings_stay_in_body() {
    let page = parse_page(PAGE, &MarkdownFormat, 2).unwrap();
    let about = page.section("about").unwrap();
    assert!(about.body.starts_with("I build things."));
    assert!(about.body.contains("### Background"));
    assert!(about.body.ends_with("Grew up taking radios apart."));
    assert!(!about.body.contains("What I Do"));
}

#[test]
fn test_preamble_is_everything_before_first_section() {
    let page = parse_page(PAGE, &MarkdownFormat, 2).unwrap();
    assert_eq!(page.preamble, "# Jane Doe\n\nEngineer and tinkerer.");
}

#[test]
fn test_section_coordinates() {
    let page = parse_page(PAGE, &MarkdownFormat, 2).unwrap();
    let about = &page.sections[0];
    let what = &page.sections[1];

    assert_eq!(about.level, 2);
    assert_eq!(about.line_start, 4);
    assert_eq!(about.line_end, what.line_start);
    assert_eq!(about.byte_end, PAGE.find("## What I Do").unwrap());
    assert_eq!(
        page.sections.last().unwrap().line_end,
        PAGE.lines().count()
    );
}

#[test]
fn test_other_section_level() {
    let page = parse_page(PAGE, &MarkdownFormat, 1).unwrap();
    assert_eq!(page.section_ids(), ["jane-doe"]);
    assert!(page.preamble.is_empty());
    assert!(page.sections[0].body.contains("## Projects"));
}

#[test]
fn test_duplicate_titles_get_suffixes() {
    let source = "## Skills\n\na\n\n## Skills\n\nb\n\n## Skills!\n\nc\n";
    let page = parse_page(source, &MarkdownFormat, 2).unwrap();
    assert_eq!(page.section_ids(), ["skills", "skills-2", "skills-3"]);
}

#[test]
fn test_page_without_sections() {
    let page = parse_page("Just a paragraph.\n", &MarkdownFormat, 2).unwrap();
    assert!(page.sections.is_empty());
    assert_eq!(page.preamble, "Just a paragraph.");
}

#[test]
fn test_load_page_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{PAGE}").unwrap();

    let page = load_page(file.path(), &MarkdownFormat, 2).unwrap();
    assert_eq!(page.sections.len(), 3);
}

#[test]
fn test_load_missing_page_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_page(&dir.path().join("nope.md"), &MarkdownFormat, 2).is_err());
}

#[test]
fn test_heading_parts() {
    let format = MarkdownFormat;
    assert_eq!(format.heading_parts("## Skills\n"), (2, "Skills"));
    assert_eq!(format.heading_parts("### Closed ###"), (3, "Closed"));
    assert_eq!(format.heading_parts("## C#"), (2, "C#"));
}

#[test]
fn test_slugify() {
    assert_eq!(slugify("What I Do"), "what-i-do");
    assert_eq!(slugify("  Soft-Skills & Tools "), "soft-skills-tools");
    assert_eq!(slugify("***"), "section");
}
