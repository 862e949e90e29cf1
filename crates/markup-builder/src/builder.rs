//! The [`MarkupBuilder`] type: buffer ownership, emission and extraction.

use std::borrow::{Borrow, BorrowMut};
use std::fmt;

use crate::escape::{ends_with, push_escaped};

/// Capacity hint for a fresh buffer, sized for a small document.
pub const DEFAULT_CAPACITY: usize = 100;

/// Self-closing line-break token emitted by [`MarkupBuilder::newline`].
pub const LINE_BREAK: &str = "<BR/>";

/// Non-breaking space entity emitted by [`MarkupBuilder::add_nbsp`].
pub const NBSP: &str = "&nbsp;";

/// Fluent builder accumulating markup into a text buffer.
///
/// Every mutating operation returns `&mut Self`, so calls chain. The builder
/// never validates tag nesting: balancing opens and closes is up to the caller.
///
/// The buffer type `B` decides ownership:
/// - `String` (from [`new`](MarkupBuilder::new)): the builder owns the buffer.
/// - `&mut String` (from [`from_buffer`](MarkupBuilder::from_buffer)): the
///   builder appends to a buffer the caller owns. The caller gets direct
///   access back once the builder is dropped, or through
///   [`buffer_mut`](Self::buffer_mut) in between.
///
/// # Example
///
/// ```
/// use markup_builder::MarkupBuilder;
///
/// let mut page = String::from("<!-- header -->");
/// MarkupBuilder::from_buffer(&mut page).add_bold("a < b");
/// assert_eq!(page, "<!-- header --><B>a &lt; b</B>");
/// ```
#[derive(Clone, Debug)]
pub struct MarkupBuilder<B = String> {
    pub(crate) buffer: B,
    /// Attribute text injected into every cell of the currently open table.
    pub(crate) table_cell_attributes: Option<String>,
}

impl MarkupBuilder<String> {
    /// Create a builder with a fresh buffer pre-sized for a small document.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a builder with a fresh buffer of the given capacity hint.
    ///
    /// The buffer still grows past `capacity` as needed.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(String::with_capacity(capacity))
    }
}

impl Default for MarkupBuilder<String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BorrowMut<String>> MarkupBuilder<B> {
    /// Adopt an existing buffer.
    ///
    /// Text already in the buffer is kept; every operation appends after it.
    pub fn from_buffer(buffer: B) -> Self {
        Self {
            buffer,
            table_cell_attributes: None,
        }
    }

    /// Append `html` verbatim, without escaping.
    ///
    /// Use for markup the builder has no dedicated method for. The caller is
    /// responsible for its well-formedness.
    pub fn add_html(&mut self, html: &str) -> &mut Self {
        self.buffer_mut().push_str(html);
        self
    }

    /// Append `text`, replacing `<` with `&lt;` and `&` with `&amp;`.
    ///
    /// No other character is escaped. Applying this to already-escaped text
    /// escapes it again.
    pub fn add(&mut self, text: &str) -> &mut Self {
        push_escaped(self.buffer_mut(), text);
        self
    }

    /// Append a single non-breaking space entity.
    pub fn add_nbsp(&mut self) -> &mut Self {
        self.add_html(NBSP)
    }

    /// Append `count` non-breaking space entities.
    pub fn add_nbsps(&mut self, count: usize) -> &mut Self {
        let out = self.buffer_mut();
        out.reserve(NBSP.len() * count);
        for _ in 0..count {
            out.push_str(NBSP);
        }
        self
    }

    /// Append a line break.
    pub fn newline(&mut self) -> &mut Self {
        self.add_html(LINE_BREAK)
    }

    /// Append a line break unless the buffer already ends with one.
    ///
    /// This is a literal, case-sensitive suffix test against [`LINE_BREAK`].
    /// A `<br>` written by other means does not count.
    pub fn newline_if_necessary(&mut self) -> &mut Self {
        if !ends_with(self.as_str(), LINE_BREAK) {
            self.newline();
        }
        self
    }

    /// Snapshot of the markup accumulated so far.
    ///
    /// Does not consume or clear anything; may be called at any point.
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.as_str().to_owned()
    }

    /// Borrowed view of the markup accumulated so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        Borrow::<String>::borrow(&self.buffer).as_str()
    }

    /// The live buffer.
    ///
    /// Changes made through this reference are visible to every later
    /// builder operation.
    pub fn buffer_mut(&mut self) -> &mut String {
        BorrowMut::<String>::borrow_mut(&mut self.buffer)
    }

    /// Whether nothing has been written to the buffer yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Consume the builder and return its buffer.
    pub fn into_inner(self) -> B {
        self.buffer
    }
}

impl<B: Borrow<String>> fmt::Display for MarkupBuilder<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Borrow::<String>::borrow(&self.buffer))
    }
}
