//! Markup stripping: keep the visible text of an HTML/XML-ish document.

use scraper::{Html, Node};

/// Elements whose contents are never visible text.
const HIDDEN: &[&str] = &["script", "style", "template", "noscript"];

/// Strip tags, comments, and script/style contents, returning the visible text.
///
/// Text nodes are joined with nothing in between, so `great<br />movie`
/// becomes `greatmovie`. Never fails. Input without `<` or `&` is returned
/// as-is. A trailing tag cut off before its `>` (e.g. `"<div"`) is kept as
/// plain text.
pub fn strip_markup(document: &str) -> String {
    if !document.contains(['<', '&']) {
        return document.to_string();
    }

    let html = Html::parse_document(document);
    let mut text = String::with_capacity(document.len());

    let mut stack = vec![html.tree.root()];
    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(element) if HIDDEN.contains(&element.name()) => {}
            Node::Element(_) | Node::Document | Node::Fragment => {
                stack.extend(node.children().rev());
            }
            _ => {}
        }
    }

    if let Some(tail) = unterminated_tag(document) {
        text.push_str(tail);
    }
    text
}

/// The trailing `<name...` or `</name...` that never reaches a `>`.
///
/// html5ever drops such a tag at end of input; everything else it recovers from.
fn unterminated_tag(document: &str) -> Option<&str> {
    let start = document.rfind('<')?;
    let tail = &document[start..];
    if tail.contains('>') {
        return None;
    }
    let name = tail[1..].strip_prefix('/').unwrap_or(&tail[1..]);
    name.chars()
        .next()
        .filter(char::is_ascii_alphabetic)
        .map(|_| tail)
}
