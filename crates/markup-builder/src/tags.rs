//! Fixed tags, text styling, lists and div containers.

use std::borrow::BorrowMut;

use crate::builder::MarkupBuilder;
use crate::escape::push_escaped;

impl<B: BorrowMut<String>> MarkupBuilder<B> {
    /// Append `<html>`.
    pub fn open_html(&mut self) -> &mut Self {
        self.add_html("<html>")
    }

    /// Append `</html>`.
    pub fn close_html(&mut self) -> &mut Self {
        self.add_html("</html>")
    }

    /// Append `<head>`.
    pub fn open_head(&mut self) -> &mut Self {
        self.add_html("<head>")
    }

    /// Append `</head>`.
    pub fn close_head(&mut self) -> &mut Self {
        self.add_html("</head>")
    }

    /// Append `<body>`.
    pub fn open_body(&mut self) -> &mut Self {
        self.add_html("<body>")
    }

    /// Append `</body>`.
    pub fn close_body(&mut self) -> &mut Self {
        self.add_html("</body>")
    }

    /// Append `<B>`.
    pub fn begin_bold(&mut self) -> &mut Self {
        self.add_html("<B>")
    }

    /// Append `</B>`.
    pub fn end_bold(&mut self) -> &mut Self {
        self.add_html("</B>")
    }

    /// Append escaped `text` wrapped in bold tags.
    pub fn add_bold(&mut self, text: &str) -> &mut Self {
        self.begin_bold().add(text).end_bold()
    }

    /// Append `<I>`.
    pub fn begin_italic(&mut self) -> &mut Self {
        self.add_html("<I>")
    }

    /// Append `</I>`.
    pub fn end_italic(&mut self) -> &mut Self {
        self.add_html("</I>")
    }

    /// Append escaped `text` wrapped in italic tags.
    pub fn add_italic(&mut self, text: &str) -> &mut Self {
        self.begin_italic().add(text).end_italic()
    }

    /// Append escaped `text` styled as a bold heading in `color`.
    ///
    /// `color` goes into the inline style verbatim, e.g. `#AAD` or `red`.
    pub fn add_heading(&mut self, text: &str, color: &str) -> &mut Self {
        let out = self.buffer_mut();
        out.push_str(r#"<font style="font-weight:bold; color:"#);
        out.push_str(color);
        out.push_str(r#";">"#);
        push_escaped(out, text);
        out.push_str("</font>");
        self
    }

    /// Append `<OL>`.
    pub fn begin_ordered_list(&mut self) -> &mut Self {
        self.add_html("<OL>")
    }

    /// Append `</OL>`.
    pub fn end_ordered_list(&mut self) -> &mut Self {
        self.add_html("</OL>")
    }

    /// Append `<UL>`.
    pub fn begin_unordered_list(&mut self) -> &mut Self {
        self.add_html("<UL>")
    }

    /// Append `</UL>`.
    pub fn end_unordered_list(&mut self) -> &mut Self {
        self.add_html("</UL>")
    }

    /// Append a list item marker, `<LI>`.
    pub fn list_item(&mut self) -> &mut Self {
        self.add_html("<LI>")
    }

    /// Append `<div>`.
    pub fn begin_div(&mut self) -> &mut Self {
        self.begin_div_with_class_and_style(None, None)
    }

    /// Append a `<div>` with the given class.
    pub fn begin_div_with_class(&mut self, class: &str) -> &mut Self {
        self.begin_div_with_class_and_style(Some(class), None)
    }

    /// Append a `<div>` with the given inline style, e.g. `color : red`.
    pub fn begin_div_with_style(&mut self, style: &str) -> &mut Self {
        self.begin_div_with_class_and_style(None, Some(style))
    }

    /// Append a `<div>` opening tag.
    ///
    /// The `class` and `style` attributes are written only when present,
    /// with their values copied verbatim.
    pub fn begin_div_with_class_and_style(
        &mut self,
        class: Option<&str>,
        style: Option<&str>,
    ) -> &mut Self {
        let out = self.buffer_mut();
        out.push_str("<div");
        if let Some(class) = class {
            push_attribute(out, "class", class);
        }
        if let Some(style) = style {
            push_attribute(out, "style", style);
        }
        out.push('>');
        self
    }

    /// Append `</div>`.
    pub fn end_div(&mut self) -> &mut Self {
        self.add_html("</div>")
    }
}

/// Append ` name="value"` with the value unescaped.
pub(crate) fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}
