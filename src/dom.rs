//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate giving the analyzer the handful of
//! tree operations it needs: find-first / find-all by tag, attribute regex
//! search, node removal, comment removal, and text extraction with a
//! separator between text runs.

use regex::Regex;

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Parsing is permissive: malformed markup never fails, missing `<html>`,
/// `<head>` and `<body>` elements are synthesized by the parser.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Selection holding the document node itself.
#[inline]
#[must_use]
pub fn document_root(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

/// The `<body>` element if present, otherwise the document root.
#[must_use]
pub fn content_root(doc: &Document) -> Selection<'_> {
    let body = doc.select("body").first();
    if body.exists() {
        body
    } else {
        document_root(doc)
    }
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants, untrimmed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Trimmed text of the first element matching `tag`, if it has any.
#[must_use]
pub fn first_text(root: &Selection, tag: &str) -> Option<String> {
    let first = root.select(tag).first();
    if !first.exists() {
        return None;
    }

    let text = text_content(&first).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Concatenate every text node under `root`, trimming each run and
/// skipping empty ones, joined by `separator`.
///
/// `<template>` contents live outside the tree and are not visited.
#[must_use]
pub fn text_with_separator(root: &Selection, separator: &str) -> String {
    let Some(root_node) = root.nodes().first() else {
        return String::new();
    };

    let mut runs: Vec<String> = Vec::new();
    for node in root_node.descendants() {
        if !node.is_text() {
            continue;
        }
        let text = node.text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            runs.push(trimmed.to_string());
        }
    }

    runs.join(separator)
}

// === Querying ===

/// True if at least one element matching `selector` exists under `root`.
#[inline]
#[must_use]
pub fn has_element(root: &Selection, selector: &str) -> bool {
    root.select(selector).exists()
}

/// Elements under `root` whose `attr` value matches `pattern`, in document order.
#[must_use]
pub fn find_by_attr_regex<'a>(root: &Selection<'a>, attr: &str, pattern: &Regex) -> Vec<Selection<'a>> {
    root.select(&format!("[{attr}]"))
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| sel.attr(attr).is_some_and(|value| pattern.is_match(&value)))
        .collect()
}

/// True if any element under `root` has an `attr` value matching `pattern`.
#[must_use]
pub fn any_attr_matches(root: &Selection, attr: &str, pattern: &Regex) -> bool {
    root.select(&format!("[{attr}]"))
        .nodes()
        .iter()
        .any(|node| Selection::from(*node).attr(attr).is_some_and(|value| pattern.is_match(&value)))
}

// === Tree Manipulation ===

/// Remove every element under `root` whose tag is in `tags`.
pub fn remove_tags(root: &Selection, tags: &[&str]) {
    if tags.is_empty() {
        return;
    }
    root.select(&tags.join(", ")).remove();
}

/// Remove every element under `root` whose `attr` value matches `pattern`.
pub fn remove_by_attr_regex(root: &Selection, attr: &str, pattern: &Regex) {
    for sel in find_by_attr_regex(root, attr, pattern) {
        sel.remove();
    }
}

/// Remove all comment nodes below `root`.
pub fn remove_comments(root: &Selection) {
    let Some(root_node) = root.nodes().first() else {
        return;
    };

    let comments: Vec<_> = root_node
        .descendants()
        .into_iter()
        .filter(dom_query::NodeRef::is_comment)
        .collect();

    for comment in comments {
        comment.remove_from_parent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_root_prefers_body() {
        let doc = parse("<html><head><title>T</title></head><body><p>Body</p></body></html>");
        let root = content_root(&doc);
        assert_eq!(text_content(&root), "Body".into());
    }

    #[test]
    fn test_first_text_trims_and_skips_empty() {
        let doc = parse("<html><body><h1>  First  </h1><h1>Second</h1><h2> </h2></body></html>");
        let root = content_root(&doc);

        assert_eq!(first_text(&root, "h1"), Some("First".to_string()));
        assert_eq!(first_text(&root, "h2"), None);
        assert_eq!(first_text(&root, "h3"), None);
    }

    #[test]
    fn test_text_with_separator_joins_runs() {
        let doc = parse("<div><p>one</p><p>  two  <b>three</b></p>\n<span>   </span></div>");
        let div = doc.select("div");

        assert_eq!(text_with_separator(&div, " "), "one two three");
        assert_eq!(text_with_separator(&div, "|"), "one|two|three");
    }

    #[test]
    fn test_text_with_separator_skips_template_contents() {
        let doc = parse("<body><p>Hello World</p><template><p>tpl</p></template><p>x y</p></body>");
        let body = content_root(&doc);

        assert_eq!(text_with_separator(&body, " "), "Hello World x y");
        assert!(!has_element(&body, "template p"));
    }

    #[test]
    fn test_text_with_separator_on_empty_selection() {
        let doc = parse("<div>content</div>");
        assert_eq!(text_with_separator(&doc.select("span"), " "), "");
    }

    #[test]
    fn test_find_by_attr_regex() {
        let doc = parse(
            r#"<div class="Blog-post">a</div><div class="nav">b</div><span class="post-meta">c</span>"#,
        );
        let re = Regex::new(r"(?i)post").expect("regex");
        let root = content_root(&doc);

        let found = find_by_attr_regex(&root, "class", &re);
        assert_eq!(found.len(), 2);
        assert!(any_attr_matches(&root, "class", &re));
        assert!(!any_attr_matches(&root, "id", &re));
    }

    #[test]
    fn test_remove_tags() {
        let doc = parse("<body><script>x()</script><style>p{}</style><noscript>js</noscript><p>kept</p></body>");
        let root = content_root(&doc);

        remove_tags(&root, &["script", "style", "noscript"]);

        assert!(!has_element(&root, "script"));
        assert!(!has_element(&root, "style"));
        assert!(!has_element(&root, "noscript"));
        assert_eq!(text_content(&root), "kept".into());
    }

    #[test]
    fn test_remove_by_attr_regex() {
        let doc = parse(r#"<body><div style="display: none">hidden</div><div style="color: red">shown</div></body>"#);
        let root = content_root(&doc);
        let re = Regex::new(r"(?i)display\s*:\s*none").expect("regex");

        remove_by_attr_regex(&root, "style", &re);

        assert_eq!(text_content(&root), "shown".into());
    }

    #[test]
    fn test_remove_comments() {
        let doc = parse("<body><p>before<!-- secret --> after</p><!-- tail --></body>");
        let root = content_root(&doc);

        remove_comments(&root);

        assert!(!root.html().contains("secret"));
        assert!(!root.html().contains("tail"));
        assert_eq!(text_with_separator(&root, " "), "before after");
    }

    #[test]
    fn test_operations_on_empty_selection() {
        let doc = parse("<div>content</div>");
        let empty = doc.select("article");

        remove_tags(&empty, &["script"]);
        remove_comments(&empty);

        assert_eq!(get_attribute(&empty, "class"), None);
        assert_eq!(text_content(&empty), "".into());
    }
}
