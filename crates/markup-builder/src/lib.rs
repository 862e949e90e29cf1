//! Fluent builder for HTML fragments.
//!
//! [`MarkupBuilder`] accumulates markup into a single text buffer. Every
//! operation appends to the buffer and returns the builder, so calls chain:
//!
//! ```
//! use markup_builder::MarkupBuilder;
//!
//! let mut builder = MarkupBuilder::new();
//! builder
//!     .open_html()
//!     .open_body()
//!     .add("Fish & chips")
//!     .newline()
//!     .add_link("Docs", "https://example.com/docs")
//!     .close_body()
//!     .close_html();
//!
//! assert_eq!(
//!     builder.as_str(),
//!     r#"<html><body>Fish &amp; chips<BR/><A HREF="https://example.com/docs">Docs</A></body></html>"#
//! );
//! ```
//!
//! # Escaping
//!
//! Text passed to [`add`](MarkupBuilder::add) and the composite helpers is
//! escaped with a minimal policy: only `<` and `&` are replaced. Everything
//! else, including attribute values, URLs, styles and table cell content, is
//! copied verbatim and is the caller's responsibility.
//!
//! # Buffers
//!
//! The builder is generic over its buffer. [`MarkupBuilder::new`] owns a
//! fresh `String`; [`MarkupBuilder::from_buffer`] adopts an existing one,
//! either by value or as `&mut String` to keep appending to a buffer the
//! caller still owns.

mod builder;
mod error;
mod escape;
mod inline;
mod media;
mod normalize;
mod table;
mod tags;

pub use builder::{DEFAULT_CAPACITY, LINE_BREAK, MarkupBuilder, NBSP};
pub use error::MarkupError;
pub use escape::{ends_with, ends_with_at, escape_text};
pub use normalize::normalize_url;
