//! URL normalization for image sources.

use url::Url;

use crate::error::MarkupError;

/// Schemes accepted as image sources.
const SUPPORTED_SCHEMES: [&str; 6] = ["http", "https", "ftp", "file", "jar", "mailto"];

/// Parse `raw` as an absolute URL and serialize it back.
///
/// The round trip normalizes the URL (lowercased scheme and host, default
/// path). Input must already be encoded: a character that would need
/// percent-encoding, such as a space or `<`, rejects it, as do relative
/// references and schemes outside `http`, `https`, `ftp`, `file`, `jar`
/// and `mailto`.
///
/// # Examples
///
/// ```
/// use markup_builder::normalize_url;
///
/// assert_eq!(
///     normalize_url("HTTPS://Example.com/a%20b.png").unwrap(),
///     "https://example.com/a%20b.png"
/// );
/// assert!(normalize_url("https://example.com/a b.png").is_err());
/// assert!(normalize_url("javascript:alert(1)").is_err());
/// assert!(normalize_url("not a url").is_err());
/// ```
pub fn normalize_url(raw: &str) -> Result<String, MarkupError> {
    if let Some((index, character)) = find_unencoded(raw) {
        return Err(MarkupError::UnencodedCharacter {
            url: raw.to_owned(),
            character,
            index,
        });
    }

    let parsed = Url::parse(raw).map_err(|source| MarkupError::InvalidUrl {
        url: raw.to_owned(),
        source,
    })?;

    if !SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
        return Err(MarkupError::UnsupportedScheme {
            url: raw.to_owned(),
            scheme: parsed.scheme().to_owned(),
        });
    }

    Ok(parsed.into())
}

/// First character that is not allowed unescaped anywhere in a URL.
///
/// A `%` must start a two-digit hex escape.
fn find_unencoded(raw: &str) -> Option<(usize, char)> {
    let bytes = raw.as_bytes();
    raw.char_indices().find(|&(index, c)| match c {
        '%' => !matches!(
            bytes.get(index + 1..index + 3),
            Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
        ),
        '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}' => true,
        c => c.is_whitespace() || c.is_control(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_normalize_keeps_canonical_url() {
        assert_eq!(
            normalize_url("https://images.example.com/photo/cat.jpg").unwrap(),
            "https://images.example.com/photo/cat.jpg"
        );
    }

    #[test]
    fn test_normalize_adds_root_path() {
        assert_eq!(
            normalize_url("http://example.com").unwrap(),
            "http://example.com/"
        );
    }

    #[test]
    fn test_normalize_keeps_query_and_fragment() {
        assert_eq!(
            normalize_url("http://example.com/a?b=1&c=2#top").unwrap(),
            "http://example.com/a?b=1&c=2#top"
        );
    }

    #[test]
    fn test_normalize_keeps_existing_escapes() {
        assert_eq!(
            normalize_url("https://example.com/a%20b.png").unwrap(),
            "https://example.com/a%20b.png"
        );
    }

    #[test]
    fn test_normalize_accepts_supported_schemes() {
        for raw in [
            "ftp://files.example.com/pub/a.png",
            "file:///tmp/a.png",
            "mailto:someone@example.com",
        ] {
            assert_eq!(normalize_url(raw).unwrap(), raw);
        }
    }

    #[test]
    fn test_normalize_rejects_space_in_path() {
        let err = normalize_url("https://example.com/a b.png").unwrap_err();
        assert!(matches!(
            err,
            MarkupError::UnencodedCharacter {
                character: ' ',
                index: 21,
                ..
            }
        ));
    }

    #[test]
    fn test_normalize_rejects_markup_in_query() {
        let err = normalize_url("https://example.com/?q=<b>").unwrap_err();
        assert!(matches!(
            err,
            MarkupError::UnencodedCharacter { character: '<', .. }
        ));
    }

    #[test]
    fn test_normalize_rejects_broken_escape() {
        assert!(normalize_url("https://example.com/100%").is_err());
        assert!(normalize_url("https://example.com/%zz").is_err());
    }

    #[test]
    fn test_normalize_rejects_javascript_scheme() {
        let err = normalize_url("javascript:alert(1)").unwrap_err();
        assert!(matches!(
            err,
            MarkupError::UnsupportedScheme { ref scheme, .. } if scheme == "javascript"
        ));
    }

    #[test]
    fn test_normalize_rejects_data_scheme() {
        assert!(matches!(
            normalize_url("data:text/html,hello").unwrap_err(),
            MarkupError::UnsupportedScheme { .. }
        ));
        assert!(normalize_url("data:text/html,<script>x</script>").is_err());
    }

    #[test]
    fn test_normalize_rejects_relative() {
        let err = normalize_url("images/cat.jpg").unwrap_err();
        assert!(matches!(
            err,
            MarkupError::InvalidUrl {
                source: url::ParseError::RelativeUrlWithoutBase,
                ..
            }
        ));
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(normalize_url("").is_err());
    }

    #[test]
    fn test_error_message_names_input() {
        let err = normalize_url("not-a-url").unwrap_err();
        assert!(err.to_string().contains("\"not-a-url\""));

        let err = normalize_url("not a url").unwrap_err();
        assert!(err.to_string().contains("\"not a url\""));
    }
}
