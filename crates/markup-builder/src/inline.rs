//! Anchors that keep surrounding whitespace outside the link.

use std::borrow::BorrowMut;

use crate::builder::MarkupBuilder;
use crate::escape::push_escaped;

impl<B: BorrowMut<String>> MarkupBuilder<B> {
    /// Append an anchor labelled `text` pointing at `url`.
    ///
    /// Leading and trailing whitespace of `text` is written outside the
    /// anchor, so `" Go "` renders as a space, the link `Go`, then a space.
    /// The label is escaped; `url` is copied verbatim. If `text` is all
    /// whitespace, the whitespace is written before an anchor with an empty
    /// label.
    ///
    /// # Example
    ///
    /// ```
    /// use markup_builder::MarkupBuilder;
    ///
    /// let mut builder = MarkupBuilder::new();
    /// builder.add_link("Google", "http://example.com");
    /// assert_eq!(builder.as_str(), r#"<A HREF="http://example.com">Google</A>"#);
    /// ```
    pub fn add_link(&mut self, text: &str, url: &str) -> &mut Self {
        self.push_anchor(text, "HREF", url)
    }

    /// Append text with an inline link, e.g. "See [the docs] for more".
    ///
    /// `text_before` and `text_after` are escaped and written around the
    /// link when present. The link itself follows [`add_link`](Self::add_link).
    pub fn add_link_in_text(
        &mut self,
        text_before: Option<&str>,
        link_text: &str,
        text_after: Option<&str>,
        url: &str,
    ) -> &mut Self {
        if let Some(before) = text_before {
            self.add(before);
        }
        self.add_link(link_text, url);
        if let Some(after) = text_after {
            self.add(after);
        }
        self
    }

    /// Append an anchor labelled `text` that runs `handler` when clicked.
    ///
    /// Whitespace handling matches [`add_link`](Self::add_link). `handler`
    /// is copied into the `onclick` attribute verbatim.
    pub fn add_on_click(&mut self, text: &str, handler: &str) -> &mut Self {
        self.push_anchor(text, "onclick", handler)
    }

    fn push_anchor(&mut self, text: &str, attribute: &str, value: &str) -> &mut Self {
        let (leading, label, trailing) = split_padding(text);
        let out = self.buffer_mut();
        out.push_str(leading);
        out.push_str("<A ");
        out.push_str(attribute);
        out.push_str("=\"");
        out.push_str(value);
        out.push_str("\">");
        push_escaped(out, label);
        out.push_str("</A>");
        out.push_str(trailing);
        self
    }
}

/// Split `text` into leading whitespace, the trimmed label, and trailing
/// whitespace. The three parts concatenate back to `text`.
fn split_padding(text: &str) -> (&str, &str, &str) {
    let label_start = text.len() - text.trim_start().len();
    let (leading, rest) = text.split_at(label_start);
    let label = rest.trim_end();
    let trailing = &rest[label.len()..];
    (leading, label, trailing)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_padding() {
        assert_eq!(split_padding("  Go \t"), ("  ", "Go", " \t"));
        assert_eq!(split_padding("Go"), ("", "Go", ""));
        assert_eq!(split_padding("a b"), ("", "a b", ""));
        assert_eq!(split_padding(""), ("", "", ""));
    }

    #[test]
    fn test_split_padding_all_whitespace_is_leading() {
        assert_eq!(split_padding(" \n "), (" \n ", "", ""));
    }

    #[test]
    fn test_split_padding_unicode_whitespace() {
        assert_eq!(
            split_padding("\u{3000}label\u{a0}"),
            ("\u{3000}", "label", "\u{a0}")
        );
    }

    #[test]
    fn test_add_link_plain() {
        let mut builder = MarkupBuilder::new();
        builder.add_link("Google", "http://example.com");
        assert_eq!(builder.as_str(), r#"<A HREF="http://example.com">Google</A>"#);
    }

    #[test]
    fn test_add_link_moves_padding_outside() {
        let mut builder = MarkupBuilder::new();
        builder.add_link("  Go  ", "http://x");
        assert_eq!(builder.as_str(), r#"  <A HREF="http://x">Go</A>  "#);
    }

    #[test]
    fn test_add_link_is_deterministic() {
        let render = || {
            let mut builder = MarkupBuilder::new();
            builder.add_link("\tpadded\n", "http://x");
            builder.to_markup()
        };
        assert_eq!(render(), render());
        assert_eq!(render(), "\t<A HREF=\"http://x\">padded</A>\n");
    }

    #[test]
    fn test_add_link_all_whitespace() {
        let mut builder = MarkupBuilder::new();
        builder.add_link("   ", "http://x");
        assert_eq!(builder.as_str(), r#"   <A HREF="http://x"></A>"#);
    }

    #[test]
    fn test_add_link_escapes_label_not_url() {
        let mut builder = MarkupBuilder::new();
        builder.add_link("Q&A <new>", "http://x/?a=1&b=2");
        assert_eq!(
            builder.as_str(),
            r#"<A HREF="http://x/?a=1&b=2">Q&amp;A &lt;new></A>"#
        );
    }

    #[test]
    fn test_add_link_in_text() {
        let mut builder = MarkupBuilder::new();
        builder.add_link_in_text(Some("See "), "the docs", Some(" & more"), "http://d");
        assert_eq!(
            builder.as_str(),
            r#"See <A HREF="http://d">the docs</A> &amp; more"#
        );
    }

    #[test]
    fn test_add_link_in_text_without_context() {
        let mut builder = MarkupBuilder::new();
        builder.add_link_in_text(None, "docs", None, "http://d");
        assert_eq!(builder.as_str(), r#"<A HREF="http://d">docs</A>"#);
    }

    #[test]
    fn test_add_on_click() {
        let mut builder = MarkupBuilder::new();
        builder.add_on_click("Click me", "alert('I am alert');");
        assert_eq!(
            builder.as_str(),
            r#"<A onclick="alert('I am alert');">Click me</A>"#
        );
    }

    #[test]
    fn test_add_on_click_moves_padding_outside() {
        let mut builder = MarkupBuilder::new();
        builder.add_on_click(" go ", "f()");
        assert_eq!(builder.as_str(), r#" <A onclick="f()">go</A> "#);
    }
}
