//! Image and icon elements.

use std::borrow::BorrowMut;

use crate::builder::MarkupBuilder;
use crate::normalize::normalize_url;
use crate::tags::push_attribute;

impl<B: BorrowMut<String>> MarkupBuilder<B> {
    /// Append an image with an optional alt text.
    ///
    /// See [`add_image_with_on_click`](Self::add_image_with_on_click).
    pub fn add_image(&mut self, url: &str, alt_text: Option<&str>) -> &mut Self {
        self.add_image_with_on_click(url, alt_text, None)
    }

    /// Append an image with optional alt text and click handler.
    ///
    /// `url` is normalized by parsing it as an absolute URL and serializing
    /// it back (see [`normalize_url`](crate::normalize_url)). Unencoded
    /// spaces or markup and unsupported schemes such as `javascript:` fail
    /// the same way. When that fails the source attribute is left empty; the
    /// failure is logged and never returned. `alt_text` and `on_click` are
    /// copied verbatim, and `on_click` is written without quotes.
    ///
    /// # Example
    ///
    /// ```
    /// use markup_builder::MarkupBuilder;
    ///
    /// let mut builder = MarkupBuilder::new();
    /// builder.add_image("not a url", Some("alt"));
    /// assert_eq!(builder.as_str(), r#"<img src='' alt="alt" />"#);
    /// ```
    pub fn add_image_with_on_click(
        &mut self,
        url: &str,
        alt_text: Option<&str>,
        on_click: Option<&str>,
    ) -> &mut Self {
        let src = normalize_url(url).unwrap_or_else(|e| {
            tracing::debug!(url = %url, error = %e, "Failed to normalize image URL");
            String::new()
        });

        let out = self.buffer_mut();
        out.push_str("<img src='");
        out.push_str(&src);
        out.push('\'');
        if let Some(alt) = alt_text {
            push_attribute(out, "alt", alt);
        }
        if let Some(handler) = on_click {
            out.push_str(" onclick=");
            out.push_str(handler);
        }
        out.push_str(" />");
        self
    }

    /// Append a 16x16 borderless icon loaded from `src`.
    ///
    /// `src` is used verbatim. Nothing is written when `src` is `None`.
    pub fn add_icon(&mut self, src: Option<&str>) -> &mut Self {
        if let Some(src) = src {
            let out = self.buffer_mut();
            out.push_str("<img src='");
            out.push_str(src);
            out.push_str("' width=16 height=16 border=0 />");
        }
        self
    }
}
