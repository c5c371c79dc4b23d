//! Flatten raw HTML into line-separated visible text.
//!
//! Uses the `scraper` crate (html5ever) so malformed markup is tolerated the
//! same way a browser would tolerate it.

use scraper::{Html, Node};

/// Elements whose text content is never rendered.
const INVISIBLE: &[&str] = &["script", "style", "noscript", "template"];

/// Render the document's visible text, one trimmed text node per line.
///
/// Empty text nodes are dropped, so table cells and list items each land on
/// their own line.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|el| INVISIBLE.contains(&el.name()))
        });
        if !hidden {
            lines.push(trimmed);
        }
    }

    lines.join("\n")
}
