//! Text-level SVG scanning.
//!
//! Documents are never parsed into a tree. Start tags are located with a
//! regex, their attributes are split into spans, and edits are spliced back
//! into the original text so everything outside an edit keeps its bytes.

pub mod style;

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

lazy_static! {
    static ref RE_TAG: Regex = Regex::new(r"<([A-Za-z][\w:.-]*)([^<>]*?)(/?)>").unwrap();
    static ref RE_ATTR: Regex =
        Regex::new(r#"([A-Za-z_:][\w:.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// One `name="value"` pair inside a start tag. Spans index the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub span: Range<usize>,
    pub value_span: Range<usize>,
}

/// A start tag (or self-closing tag) found in a document
#[derive(Debug, Clone)]
pub struct Tag<'a> {
    /// Span of the whole tag, `<` through `>`
    pub span: Range<usize>,
    pub name: &'a str,
    /// Raw text between the tag name and the closing `/>` or `>`
    pub attr_text: &'a str,
    /// Document offset of `attr_text`
    pub attr_offset: usize,
    pub attrs: Vec<Attr<'a>>,
    pub self_closing: bool,
}

impl<'a> Tag<'a> {
    /// First attribute with the given name, compared ASCII case-insensitively.
    pub fn attr(&self, name: &str) -> Option<&Attr<'a>> {
        self.attrs.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Whitespace-separated tokens of the first `class` attribute.
    pub fn class_tokens(&self) -> Vec<&'a str> {
        self.attr("class")
            .map(|a| a.value.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_tokens()
            .iter()
            .any(|t| t.eq_ignore_ascii_case(class))
    }
}

/// Find every start tag in `doc`, in document order.
///
/// Closing tags, comments, doctypes and processing instructions are skipped
/// because their names cannot start with a letter. Attribute text may not
/// contain `<`, so a tag with a raw `<` inside a quoted value is not found.
pub fn scan_tags(doc: &str) -> Vec<Tag<'_>> {
    RE_TAG
        .captures_iter(doc)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            let attr_match = caps.get(2).unwrap();
            let attr_offset = attr_match.start();
            let attrs = RE_ATTR
                .captures_iter(attr_match.as_str())
                .map(|a| {
                    let full = a.get(0).unwrap();
                    let value = a.get(2).or_else(|| a.get(3)).unwrap();
                    Attr {
                        name: a.get(1).unwrap().as_str(),
                        value: value.as_str(),
                        span: attr_offset + full.start()..attr_offset + full.end(),
                        value_span: attr_offset + value.start()..attr_offset + value.end(),
                    }
                })
                .collect();

            Tag {
                span: whole.range(),
                name: caps.get(1).unwrap().as_str(),
                attr_text: attr_match.as_str(),
                attr_offset,
                attrs,
                self_closing: !caps[3].is_empty(),
            }
        })
        .collect()
}

/// Apply non-overlapping replacements to `doc`. Edits must be sorted by start offset.
pub fn splice(doc: &str, edits: &[(Range<usize>, String)]) -> String {
    let mut out = String::with_capacity(doc.len());
    let mut cursor = 0;
    for (range, replacement) in edits {
        out.push_str(&doc[cursor..range.start]);
        out.push_str(replacement);
        cursor = range.end;
    }
    out.push_str(&doc[cursor..]);
    out
}

/// Collapse each run of whitespace into a single space and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    RE_WHITESPACE.replace_all(s, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_tags() {
        let doc = r#"<svg viewBox="0 0 1 1"><!-- note --><path class='a b' d="M0 0"/></svg>"#;
        let tags = scan_tags(doc);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "svg");
        assert!(!tags[0].self_closing);

        let path = &tags[1];
        assert_eq!(path.name, "path");
        assert!(path.self_closing);
        assert_eq!(path.class_tokens(), vec!["a", "b"]);
        let d = path.attr("d").unwrap();
        assert_eq!(d.value, "M0 0");
        assert_eq!(&doc[d.value_span.clone()], "M0 0");
        assert_eq!(&doc[d.span.clone()], r#"d="M0 0""#);
        assert_eq!(&doc[path.span.clone()], r#"<path class='a b' d="M0 0"/>"#);
    }

    #[test]
    fn test_tag_without_attributes() {
        let tags = scan_tags("<g><g/></g>");
        assert_eq!(tags.len(), 2);
        assert!(tags[0].attrs.is_empty());
        assert!(tags[1].self_closing);
    }

    #[test]
    fn test_has_class_is_token_match() {
        let tags = scan_tags(r#"<path class="gotchi-secondary-shadow"/><path class="x GOTCHI-SECONDARY"/>"#);
        assert!(!tags[0].has_class("gotchi-secondary"));
        assert!(tags[1].has_class("gotchi-secondary"));
    }

    #[test]
    fn test_raw_angle_bracket_in_value_skips_tag() {
        let tags = scan_tags(r#"<path d="a<b" class="x"/><g class="y"/>"#);
        assert!(tags.iter().all(|t| t.name != "path"));
        assert_eq!(tags.last().unwrap().name, "g");
    }

    #[test]
    fn test_splice() {
        let doc = "abcdef";
        assert_eq!(splice(doc, &[(1..2, "X".into()), (4..6, String::new())]), "aXcd");
        assert_eq!(splice(doc, &[]), "abcdef");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace(""), "");
    }
}
