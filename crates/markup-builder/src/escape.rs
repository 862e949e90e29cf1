//! Text escaping and suffix helpers shared by the builder operations.

use std::borrow::Cow;

const LT_ENTITY: &str = "&lt;";
const AMP_ENTITY: &str = "&amp;";

/// Escape `text` for use as a DOM text node.
///
/// Only `<` and `&` are replaced. Returns the input unchanged (borrowed) when
/// neither character occurs.
///
/// # Examples
///
/// ```
/// use markup_builder::escape_text;
///
/// assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c > d");
/// assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '&']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    push_escaped(&mut out, text);
    Cow::Owned(out)
}

/// Append `text` to `out`, escaping `<` and `&`.
pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str(LT_ENTITY),
            '&' => out.push_str(AMP_ENTITY),
            _ => out.push(c),
        }
    }
}

/// Whether `sequence` ends with `suffix` (case sensitive).
pub fn ends_with(sequence: &str, suffix: &str) -> bool {
    ends_with_at(sequence, sequence.len(), suffix)
}

/// Whether `sequence`, cut at byte offset `end_offset`, ends with `suffix`.
///
/// Characters are compared backward from the offset. Returns `false` when the
/// offset is shorter than the suffix or does not fall on a char boundary.
///
/// # Examples
///
/// ```
/// use markup_builder::ends_with_at;
///
/// assert!(ends_with_at("a<BR/>b", 6, "<BR/>"));
/// assert!(!ends_with_at("a<BR/>b", 7, "<BR/>"));
/// ```
pub fn ends_with_at(sequence: &str, end_offset: usize, suffix: &str) -> bool {
    if end_offset < suffix.len() {
        return false;
    }
    let Some(head) = sequence.get(..end_offset) else {
        return false;
    };
    let mut remaining = head.chars().rev();
    suffix
        .chars()
        .rev()
        .all(|expected| remaining.next() == Some(expected))
}
