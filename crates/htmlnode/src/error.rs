//! Error types for node rendering and text conversion.

/// Error raised while rendering a node tree or interpreting text kinds.
///
/// All variants indicate a malformed tree or malformed input handed over by
/// the caller. None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MarkupError {
    /// A leaf node was rendered without a value.
    #[error("leaf node has no value")]
    MissingValue,

    /// A container node was rendered without a tag.
    #[error("container node has no tag")]
    MissingTag,

    /// A container node was rendered without a children list.
    #[error("container node <{tag}> has no children")]
    MissingChildren {
        /// Tag of the offending container.
        tag: String,
    },

    /// A text kind name outside the known set.
    #[error("invalid text kind: {0}")]
    InvalidKind(String),
}

/// Result alias for markup operations.
pub type Result<T> = std::result::Result<T, MarkupError>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_missing_children_message_names_tag() {
        let err = MarkupError::MissingChildren {
            tag: "ul".to_owned(),
        };
        assert_eq!(err.to_string(), "container node <ul> has no children");
    }

    #[test]
    fn test_invalid_kind_message() {
        let err = MarkupError::InvalidKind("strike".to_owned());
        assert_eq!(err.to_string(), "invalid text kind: strike");
    }
}
