//! HTML node tree and recursive rendering.
//!
//! A tree is built bottom-up: leaves first, then containers wrapping them.
//! Nodes cannot be changed once built, so a tree can be rendered any number
//! of times, from any number of threads.
//!
//! # Example
//!
//! ```
//! use htmlnode::{ContainerNode, LeafNode};
//!
//! let span = ContainerNode::new(
//!     "span",
//!     vec![
//!         LeafNode::text("Hello, ").into(),
//!         LeafNode::new("b", "world").into(),
//!         LeafNode::text("!").into(),
//!     ],
//! );
//! assert_eq!(span.render().unwrap(), "<span>Hello, <b>world</b>!</span>");
//! ```

use crate::attrs::Attributes;
use crate::error::{MarkupError, Result};

/// Node in an HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// Node with a value and no children.
    Leaf(LeafNode),
    /// Node wrapping an ordered list of children.
    Container(ContainerNode),
}

impl MarkupNode {
    /// Render this node and its descendants to HTML.
    ///
    /// Either the whole fragment is returned or the first error encountered
    /// while walking the tree; nothing partial is produced.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            Self::Leaf(leaf) => leaf.render_into(out),
            Self::Container(container) => container.render_into(out),
        }
    }

    /// Tag name, if the node has one.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.tag(),
            Self::Container(container) => container.tag(),
        }
    }

    /// Attributes of the node.
    #[must_use]
    pub fn attrs(&self) -> &Attributes {
        match self {
            Self::Leaf(leaf) => leaf.attrs(),
            Self::Container(container) => container.attrs(),
        }
    }
}

impl From<LeafNode> for MarkupNode {
    fn from(leaf: LeafNode) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<ContainerNode> for MarkupNode {
    fn from(container: ContainerNode) -> Self {
        Self::Container(container)
    }
}

/// Node holding a single value.
///
/// Without a tag the value is emitted as raw text. With a tag it is wrapped:
/// `<tag attrs>value</tag>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: Option<String>,
    attrs: Attributes,
}

impl LeafNode {
    /// Create a tagged leaf.
    #[must_use]
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// Create an untagged leaf that renders as raw text.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// Create a leaf where any part may be absent.
    ///
    /// A leaf without a value can be built but fails to render.
    #[must_use]
    pub fn from_parts(
        tag: Option<String>,
        value: Option<String>,
        attrs: Option<Attributes>,
    ) -> Self {
        Self {
            tag,
            value,
            attrs: attrs.unwrap_or_default(),
        }
    }

    /// Set attributes.
    #[must_use]
    pub fn with_attrs(mut self, attrs: impl Into<Attributes>) -> Self {
        self.attrs = attrs.into();
        self
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Attributes.
    #[must_use]
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Render the leaf to HTML.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        let value = self.value.as_deref().ok_or(MarkupError::MissingValue)?;

        // Raw text has no opening tag to carry attributes
        let Some(tag) = self.tag.as_deref() else {
            out.push_str(value);
            return Ok(());
        };

        open_tag(tag, &self.attrs, out);
        out.push_str(value);
        close_tag(tag, out);
        Ok(())
    }
}

/// Node whose content is the concatenation of its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerNode {
    tag: Option<String>,
    children: Option<Vec<MarkupNode>>,
    attrs: Attributes,
}

impl ContainerNode {
    /// Create a container with the given tag and children.
    ///
    /// An empty children list is valid and renders as an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            attrs: Attributes::new(),
        }
    }

    /// Create a container where any part may be absent.
    ///
    /// A container without a tag or without a children list can be built
    /// but fails to render.
    #[must_use]
    pub fn from_parts(
        tag: Option<String>,
        children: Option<Vec<MarkupNode>>,
        attrs: Option<Attributes>,
    ) -> Self {
        Self {
            tag,
            children,
            attrs: attrs.unwrap_or_default(),
        }
    }

    /// Set attributes.
    #[must_use]
    pub fn with_attrs(mut self, attrs: impl Into<Attributes>) -> Self {
        self.attrs = attrs.into();
        self
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Children, in render order.
    #[must_use]
    pub fn children(&self) -> Option<&[MarkupNode]> {
        self.children.as_deref()
    }

    /// Attributes.
    #[must_use]
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Render the container and all descendants to HTML.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        let tag = self.tag.as_deref().ok_or(MarkupError::MissingTag)?;
        let children = self
            .children
            .as_deref()
            .ok_or_else(|| MarkupError::MissingChildren {
                tag: tag.to_owned(),
            })?;

        tracing::trace!(tag, children = children.len(), "Rendering container");

        open_tag(tag, &self.attrs, out);
        for child in children {
            child.render_into(out)?;
        }
        close_tag(tag, out);
        Ok(())
    }
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    attrs.write_to(out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_leaf_with_tag() {
        let node = LeafNode::new("p", "Hello, world!");
        assert_eq!(node.render().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_leaf_without_tag_is_raw_text() {
        let node = LeafNode::text("hi");
        assert_eq!(node.render().unwrap(), "hi");
    }

    #[test]
    fn test_leaf_attrs_in_insertion_order() {
        let node = LeafNode::new("a", "website")
            .with_attrs([("href", "https://x.com"), ("target", "_blank")]);
        assert_eq!(
            node.render().unwrap(),
            r#"<a href="https://x.com" target="_blank">website</a>"#
        );
    }

    #[test]
    fn test_leaf_without_tag_ignores_attrs() {
        let node = LeafNode::from_parts(
            None,
            Some("plain".to_owned()),
            Some(Attributes::from([("class", "x")])),
        );
        assert_eq!(node.render().unwrap(), "plain");
    }

    #[test]
    fn test_leaf_empty_value_is_present() {
        let node = LeafNode::new("img", "").with_attrs([("src", "a.png"), ("alt", "")]);
        assert_eq!(node.render().unwrap(), r#"<img src="a.png" alt=""></img>"#);
    }

    #[test]
    fn test_leaf_missing_value() {
        let node = LeafNode::from_parts(Some("p".to_owned()), None, None);
        assert_eq!(node.render(), Err(MarkupError::MissingValue));

        let raw = LeafNode::from_parts(None, None, None);
        assert_eq!(raw.render(), Err(MarkupError::MissingValue));
    }

    #[test]
    fn test_container_empty_children() {
        let node = ContainerNode::new("div", Vec::new());
        assert_eq!(node.render().unwrap(), "<div></div>");
    }

    #[test]
    fn test_container_with_child() {
        let node = ContainerNode::new("div", vec![LeafNode::new("span", "child").into()]);
        assert_eq!(node.render().unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn test_container_with_grandchildren() {
        let child = ContainerNode::new("span", vec![LeafNode::new("b", "grandchild").into()]);
        let parent = ContainerNode::new("div", vec![child.into()]);
        assert_eq!(
            parent.render().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn test_container_children_in_order() {
        let parent = ContainerNode::new(
            "p",
            vec![
                LeafNode::new("b", "Bold").into(),
                LeafNode::new("i", "Italic").into(),
                LeafNode::text("Plain text").into(),
            ],
        );
        assert_eq!(
            parent.render().unwrap(),
            "<p><b>Bold</b><i>Italic</i>Plain text</p>"
        );
    }

    #[test]
    fn test_container_is_concatenation_of_children() {
        let a = MarkupNode::from(LeafNode::new("b", "A"));
        let b = MarkupNode::from(ContainerNode::new(
            "span",
            vec![ContainerNode::new("em", vec![LeafNode::text("B").into()]).into()],
        ));
        let c = MarkupNode::from(LeafNode::text("C"));
        let expected = format!(
            "<section>{}{}{}</section>",
            a.render().unwrap(),
            b.render().unwrap(),
            c.render().unwrap()
        );

        let parent = ContainerNode::new("section", vec![a, b, c]);
        assert_eq!(parent.render().unwrap(), expected);
    }

    #[test]
    fn test_container_attrs() {
        let parent = ContainerNode::new("div", vec![LeafNode::new("span", "Child").into()])
            .with_attrs([("class", "container"), ("id", "main")]);
        assert_eq!(
            parent.render().unwrap(),
            r#"<div class="container" id="main"><span>Child</span></div>"#
        );
    }

    #[test]
    fn test_nested_containers_with_attrs() {
        let child = ContainerNode::new("span", vec![LeafNode::new("em", "Emphasized").into()])
            .with_attrs([("class", "highlight")]);
        let parent = ContainerNode::new("div", vec![child.into()]).with_attrs([("id", "outer")]);
        assert_eq!(
            parent.render().unwrap(),
            r#"<div id="outer"><span class="highlight"><em>Emphasized</em></span></div>"#
        );
    }

    #[test]
    fn test_deep_nesting() {
        let span = ContainerNode::new(
            "span",
            vec![
                LeafNode::text("Hello, ").into(),
                LeafNode::new("b", "world").into(),
                LeafNode::text("!").into(),
            ],
        );
        let paragraph = ContainerNode::new("p", vec![span.into()]);
        let list = ContainerNode::new(
            "ul",
            vec![
                ContainerNode::new("li", vec![LeafNode::text("First item").into()]).into(),
                ContainerNode::new("li", vec![LeafNode::text("Second item").into()]).into(),
                ContainerNode::new("li", vec![paragraph.into()]).into(),
            ],
        );
        let div = ContainerNode::new(
            "div",
            vec![LeafNode::new("h1", "My Page Title").into(), list.into()],
        );

        let expected = concat!(
            "<div>",
            "<h1>My Page Title</h1>",
            "<ul>",
            "<li>First item</li>",
            "<li>Second item</li>",
            "<li><p><span>Hello, <b>world</b>!</span></p></li>",
            "</ul>",
            "</div>",
        );
        assert_eq!(div.render().unwrap(), expected);
    }

    #[test]
    fn test_render_is_repeatable() {
        let tree = MarkupNode::from(ContainerNode::new(
            "ol",
            vec![ContainerNode::new("li", vec![LeafNode::new("code", "x").into()]).into()],
        ));
        let first = tree.render().unwrap();
        let second = tree.render().unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "<ol><li><code>x</code></li></ol>");
    }

    #[test]
    fn test_container_missing_tag() {
        let node = ContainerNode::from_parts(None, Some(Vec::new()), None);
        assert_eq!(node.render(), Err(MarkupError::MissingTag));
    }

    #[test]
    fn test_container_missing_tag_checked_before_children() {
        let node = ContainerNode::from_parts(None, None, None);
        assert_eq!(node.render(), Err(MarkupError::MissingTag));
    }

    #[test]
    fn test_container_missing_children() {
        let node = ContainerNode::from_parts(Some("ul".to_owned()), None, None);
        assert_eq!(
            node.render(),
            Err(MarkupError::MissingChildren {
                tag: "ul".to_owned()
            })
        );
    }

    #[test]
    fn test_error_in_descendant_propagates() {
        let broken = LeafNode::from_parts(Some("b".to_owned()), None, None);
        let tree = ContainerNode::new(
            "div",
            vec![
                LeafNode::text("ok").into(),
                ContainerNode::new("p", vec![broken.into()]).into(),
            ],
        );
        assert_eq!(tree.render(), Err(MarkupError::MissingValue));
    }

    #[test]
    fn test_markup_node_accessors() {
        let leaf = MarkupNode::from(LeafNode::new("a", "x").with_attrs([("href", "/")]));
        assert_eq!(leaf.tag(), Some("a"));
        assert_eq!(leaf.attrs().get("href"), Some("/"));

        let container = MarkupNode::from(ContainerNode::new("div", Vec::new()));
        assert_eq!(container.tag(), Some("div"));
        assert!(container.attrs().is_empty());
    }

    #[test]
    fn test_container_children_accessor() {
        let node = ContainerNode::new("p", vec![LeafNode::text("a").into()]);
        assert_eq!(node.children().map(<[MarkupNode]>::len), Some(1));
        assert_eq!(ContainerNode::from_parts(None, None, None).children(), None);
    }
}
