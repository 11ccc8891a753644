//! Inline text spans produced by a markdown parser.
//!
//! An [`InlineText`] is the hand-off format between the parsing layer and
//! node conversion: a piece of literal text, how it is formatted, and where it
//! points to when it is a link or an image.

use std::fmt;
use std::str::FromStr;

use crate::error::MarkupError;

/// Formatting applied to an inline span.
///
/// Kinds are named in lowercase when parsed or serialized (`"bold"`,
/// `"link"`, ...). Plain text is named `"text"`; `"plain"` is accepted as an
/// alias when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", try_from = "String")
)]
#[non_exhaustive]
pub enum TextKind {
    /// Unformatted text.
    #[cfg_attr(feature = "serde", serde(rename = "text"))]
    Plain,
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Inline code.
    Code,
    /// Hyperlink; text is the anchor, destination the URL.
    Link,
    /// Image; text is the alt text, destination the source URL.
    Image,
}

impl TextKind {
    /// All known kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Plain,
        Self::Bold,
        Self::Italic,
        Self::Code,
        Self::Link,
        Self::Image,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "text",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
        }
    }

    /// Whether spans of this kind carry a destination.
    #[must_use]
    pub fn has_destination(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextKind {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "plain" => Ok(Self::Plain),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "code" => Ok(Self::Code),
            "link" => Ok(Self::Link),
            "image" => Ok(Self::Image),
            other => Err(MarkupError::InvalidKind(other.to_owned())),
        }
    }
}

impl TryFrom<String> for TextKind {
    type Error = MarkupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A span of formatted inline text.
///
/// Equality is structural. The destination is only meaningful for
/// [`TextKind::Link`] and [`TextKind::Image`]; it is not rejected for other
/// kinds, but conversion ignores it there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InlineText {
    text: String,
    kind: TextKind,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    destination: Option<String>,
}

impl InlineText {
    /// Create a span without a destination.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
            destination: None,
        }
    }

    /// Create a link span.
    #[must_use]
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, TextKind::Link).with_destination(url)
    }

    /// Create an image span from alt text and source URL.
    #[must_use]
    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(alt, TextKind::Image).with_destination(src)
    }

    /// Set the destination.
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Build a span from a kind name as handed over by an external parser.
    ///
    /// # Example
    ///
    /// ```
    /// use htmlnode::{InlineText, MarkupError, TextKind};
    ///
    /// let span = InlineText::parse("docs", "link", Some("/docs")).unwrap();
    /// assert_eq!(span.kind(), TextKind::Link);
    ///
    /// let err = InlineText::parse("x", "underline", None).unwrap_err();
    /// assert_eq!(err, MarkupError::InvalidKind("underline".to_owned()));
    /// ```
    pub fn parse(
        text: impl Into<String>,
        kind: &str,
        destination: Option<&str>,
    ) -> Result<Self, MarkupError> {
        let kind = kind.parse()?;
        Ok(Self {
            text: text.into(),
            kind,
            destination: destination.map(str::to_owned),
        })
    }

    /// Literal text of the span.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Formatting kind.
    #[must_use]
    pub fn kind(&self) -> TextKind {
        self.kind
    }

    /// Link or image destination, if any.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}
