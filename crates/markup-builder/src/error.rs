//! Error types for the markup builder.

/// Errors produced while preparing values for markup.
///
/// Builder operations never return these: [`MarkupBuilder::add_image`]
/// consumes them and degrades to an empty source. They are exposed for
/// callers using [`normalize_url`] directly.
///
/// [`MarkupBuilder::add_image`]: crate::MarkupBuilder::add_image
/// [`normalize_url`]: crate::normalize_url
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// The value could not be parsed as an absolute URL.
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but its scheme has no handler.
    #[error("Unsupported URL scheme {scheme:?} in {url:?}")]
    UnsupportedScheme {
        /// The rejected input.
        url: String,
        /// Lowercased scheme.
        scheme: String,
    },

    /// The input holds a character that is only valid percent-encoded.
    #[error("Invalid URL {url:?}: unencoded character {character:?} at byte {index}")]
    UnencodedCharacter {
        /// The rejected input.
        url: String,
        /// The offending character.
        character: char,
        /// Byte offset of `character` in the input.
        index: usize,
    },
}
