//! Conversion of inline text spans into leaf nodes.

use crate::attrs::Attributes;
use crate::node::LeafNode;
use crate::text::{InlineText, TextKind};

/// Convert an inline span into the matching leaf node.
///
/// | kind   | tag    | value | attributes            |
/// |--------|--------|-------|-----------------------|
/// | Plain  | none   | text  |                       |
/// | Bold   | `b`    | text  |                       |
/// | Italic | `i`    | text  |                       |
/// | Code   | `code` | text  |                       |
/// | Link   | `a`    | text  | `href`                |
/// | Image  | `img`  | empty | `src`, `alt` = text   |
///
/// A link or image without a destination gets an empty `href`/`src`.
///
/// # Example
///
/// ```
/// use htmlnode::{InlineText, text_to_leaf};
///
/// let leaf = text_to_leaf(&InlineText::link("docs", "/docs"));
/// assert_eq!(leaf.render().unwrap(), r#"<a href="/docs">docs</a>"#);
/// ```
#[must_use]
pub fn text_to_leaf(span: &InlineText) -> LeafNode {
    let kind = span.kind();
    let text = span.text();

    if !kind.has_destination() && span.destination().is_some() {
        tracing::warn!(%kind, "Ignoring destination on non-link text");
    }

    tracing::debug!(%kind, len = text.len(), "Converting inline text");

    match kind {
        TextKind::Plain => LeafNode::text(text),
        TextKind::Bold => LeafNode::new("b", text),
        TextKind::Italic => LeafNode::new("i", text),
        TextKind::Code => LeafNode::new("code", text),
        TextKind::Link => {
            LeafNode::new("a", text).with_attrs([("href", destination_or_empty(span))])
        }
        TextKind::Image => LeafNode::new("img", "").with_attrs(Attributes::from([
            ("src", destination_or_empty(span)),
            ("alt", text),
        ])),
    }
}

/// Convert a sequence of spans, preserving order.
pub fn texts_to_leaves<'a, I>(spans: I) -> Vec<LeafNode>
where
    I: IntoIterator<Item = &'a InlineText>,
{
    spans.into_iter().map(text_to_leaf).collect()
}

fn destination_or_empty(span: &InlineText) -> &str {
    span.destination().unwrap_or_else(|| {
        tracing::warn!(kind = %span.kind(), "Missing destination");
        ""
    })
}
