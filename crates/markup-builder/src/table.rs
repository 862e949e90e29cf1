//! Tables with per-table cell attributes.

use std::borrow::BorrowMut;

use crate::builder::MarkupBuilder;

impl<B: BorrowMut<String>> MarkupBuilder<B> {
    /// Append `<table>` with no cell attributes.
    pub fn begin_table(&mut self) -> &mut Self {
        self.open_table(None)
    }

    /// Append `<table>` and inject `attributes` into each of its cells.
    ///
    /// `attributes` is raw attribute text such as
    /// `style="border: 1px solid black;"`. It applies until [`end_table`]
    /// and is not escaped. Only one table context exists: opening a table
    /// inside another replaces the outer table's attributes.
    ///
    /// [`end_table`]: Self::end_table
    pub fn begin_table_with_cell_attributes(&mut self, attributes: &str) -> &mut Self {
        self.open_table(Some(attributes.to_owned()))
    }

    fn open_table(&mut self, attributes: Option<String>) -> &mut Self {
        self.table_cell_attributes = attributes;
        self.add_html("<table>")
    }

    /// Append `</table>` and clear the cell attributes.
    pub fn end_table(&mut self) -> &mut Self {
        self.table_cell_attributes = None;
        self.add_html("</table>")
    }

    /// Append `<tr>`.
    pub fn begin_table_row(&mut self) -> &mut Self {
        self.add_html("<tr>")
    }

    /// Append `</tr>`.
    pub fn end_table_row(&mut self) -> &mut Self {
        self.add_html("</tr>")
    }

    /// Append a row holding one cell per column.
    ///
    /// Cells are `<th>` when `is_header` is set, `<td>` otherwise. An empty
    /// `columns` slice writes nothing, not even an empty row.
    pub fn add_table_row<S: AsRef<str>>(&mut self, is_header: bool, columns: &[S]) -> &mut Self {
        if columns.is_empty() {
            return self;
        }
        self.begin_table_row()
            .add_table_cell(is_header, columns)
            .end_table_row()
    }

    /// Append a row of `<td>` cells.
    pub fn add_data_row<S: AsRef<str>>(&mut self, columns: &[S]) -> &mut Self {
        self.add_table_row(false, columns)
    }

    /// Append one cell per column without a surrounding row.
    ///
    /// Column values are written verbatim so they may carry markup; escape
    /// plain text with [`escape_text`](crate::escape_text) first. The current
    /// table's cell attributes are injected into every opening tag.
    pub fn add_table_cell<S: AsRef<str>>(&mut self, is_header: bool, columns: &[S]) -> &mut Self {
        if columns.is_empty() {
            return self;
        }
        let tag = if is_header { "th" } else { "td" };
        let attributes = self.table_cell_attributes.as_deref();
        let out = BorrowMut::<String>::borrow_mut(&mut self.buffer);
        for column in columns {
            out.push('<');
            out.push_str(tag);
            if let Some(attributes) = attributes {
                out.push(' ');
                out.push_str(attributes);
            }
            out.push('>');
            out.push_str(column.as_ref());
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        self
    }

    /// Append `<td>` cells without a surrounding row.
    pub fn add_data_cells<S: AsRef<str>>(&mut self, columns: &[S]) -> &mut Self {
        self.add_table_cell(false, columns)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::MarkupBuilder;

    const NO_COLUMNS: [&str; 0] = [];

    #[test]
    fn test_cells_with_attributes() {
        let mut builder = MarkupBuilder::new();
        builder
            .begin_table_with_cell_attributes("data-x=1")
            .add_table_cell(false, &["a", "b"])
            .end_table();
        assert_eq!(
            builder.as_str(),
            "<table><td data-x=1>a</td><td data-x=1>b</td></table>"
        );
    }

    #[test]
    fn test_end_table_clears_attributes() {
        let mut builder = MarkupBuilder::new();
        builder
            .begin_table_with_cell_attributes("data-x=1")
            .end_table();
        let before = builder.to_markup();
        builder.begin_table().add_table_cell(false, &["c"]).end_table();
        assert_eq!(
            &builder.as_str()[before.len()..],
            "<table><td>c</td></table>"
        );
    }

    #[test]
    fn test_header_row() {
        let mut builder = MarkupBuilder::new();
        builder
            .begin_table()
            .add_table_row(true, &["Name", "Size"])
            .add_data_row(&["a.txt", "3"])
            .end_table();
        assert_eq!(
            builder.as_str(),
            "<table><tr><th>Name</th><th>Size</th></tr><tr><td>a.txt</td><td>3</td></tr></table>"
        );
    }

    #[test]
    fn test_row_with_attributes_and_owned_columns() {
        let columns = vec!["1".to_owned(), "2".to_owned()];
        let mut builder = MarkupBuilder::new();
        builder
            .begin_table_with_cell_attributes(r#"class="c""#)
            .add_data_row(&columns)
            .end_table();
        assert_eq!(
            builder.as_str(),
            r#"<table><tr><td class="c">1</td><td class="c">2</td></tr></table>"#
        );
    }

    #[test]
    fn test_empty_row_is_noop() {
        let mut builder = MarkupBuilder::new();
        builder.begin_table();
        let before = builder.to_markup();
        builder.add_table_row(true, &NO_COLUMNS);
        builder.add_table_row(false, &NO_COLUMNS);
        builder.add_data_row(&NO_COLUMNS);
        assert_eq!(builder.to_markup(), before);
    }

    #[test]
    fn test_empty_cells_is_noop() {
        let mut builder = MarkupBuilder::new();
        builder.add_table_cell(true, &NO_COLUMNS).add_data_cells(&NO_COLUMNS);
        assert!(builder.is_empty());
    }

    #[test]
    fn test_cell_content_is_raw() {
        let mut builder = MarkupBuilder::new();
        builder.add_data_cells(&["<B>x</B> & y"]);
        assert_eq!(builder.as_str(), "<td><B>x</B> & y</td>");
    }

    #[test]
    fn test_nested_table_replaces_attributes() {
        let mut builder = MarkupBuilder::new();
        builder
            .begin_table_with_cell_attributes("outer")
            .begin_table_with_cell_attributes("inner")
            .add_data_cells(&["a"])
            .end_table()
            .add_data_cells(&["b"])
            .end_table();
        assert_eq!(
            builder.as_str(),
            "<table><table><td inner>a</td></table><td>b</td></table>"
        );
    }

    #[test]
    fn test_rows_without_table() {
        let mut builder = MarkupBuilder::new();
        builder.begin_table_row().end_table_row();
        assert_eq!(builder.as_str(), "<tr></tr>");
    }
}
