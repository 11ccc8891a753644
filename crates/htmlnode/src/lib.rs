//! Inline text spans to HTML node trees.
//!
//! This crate turns the inline spans produced by a markdown parser
//! ([`InlineText`]) into HTML nodes and renders node trees to HTML fragments.
//!
//! # Architecture
//!
//! - [`InlineText`]: immutable span of text with a [`TextKind`] and an
//!   optional link/image destination
//! - [`MarkupNode`]: a [`LeafNode`] (value, no children) or a
//!   [`ContainerNode`] (ordered children), both carrying ordered
//!   [`Attributes`]
//! - [`text_to_leaf`]: maps one span to the leaf node for its kind
//!
//! Deciding which leaves go under which containers is left to the caller.
//! Rendering produces a fragment: no doctype or document wrapper is added.
//!
//! # Example
//!
//! ```
//! use htmlnode::{ContainerNode, InlineText, MarkupNode, TextKind, text_to_leaf};
//!
//! let spans = [
//!     InlineText::new("Hello, ", TextKind::Plain),
//!     InlineText::new("world", TextKind::Bold),
//!     InlineText::new("!", TextKind::Plain),
//! ];
//! let children = spans
//!     .iter()
//!     .map(|span| MarkupNode::from(text_to_leaf(span)))
//!     .collect();
//!
//! let html = ContainerNode::new("span", children).render().unwrap();
//! assert_eq!(html, "<span>Hello, <b>world</b>!</span>");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`InlineText`] and [`TextKind`]

mod attrs;
mod convert;
mod error;
mod node;
mod text;

pub use attrs::Attributes;
pub use convert::{text_to_leaf, texts_to_leaves};
pub use error::{MarkupError, Result};
pub use node::{ContainerNode, LeafNode, MarkupNode};
pub use text::{InlineText, TextKind};

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(MarkupNode: Send, Sync);
    assert_impl_all!(LeafNode: Send, Sync);
    assert_impl_all!(ContainerNode: Send, Sync);
    assert_impl_all!(InlineText: Send, Sync);
    assert_impl_all!(MarkupError: Send, Sync, std::error::Error);

    #[test]
    fn test_render_same_tree_from_threads() {
        let tree = MarkupNode::from(ContainerNode::new(
            "p",
            vec![LeafNode::new("i", "shared").into()],
        ));

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| tree.render())).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), "<p><i>shared</i></p>");
            }
        });
    }
}
