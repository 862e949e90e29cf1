//! `markup table` command implementation.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use markup_builder::{MarkupBuilder, escape_text};
use markup_config::{CliSettings, Config};

use super::write_markup;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the table command.
#[derive(Args)]
pub(crate) struct TableArgs {
    /// Path to configuration file (default: auto-discover markup.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File with delimited rows (default: stdin).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Column delimiter.
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Treat the first row as data instead of a header.
    #[arg(long)]
    no_header: bool,

    /// Raw attribute text for table cells (overrides config).
    #[arg(long)]
    cell_attributes: Option<String>,

    /// File to write the markup to (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl TableArgs {
    /// Execute the table command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input can't be read, or
    /// the markup can't be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            output: self.output,
            table_cell_attributes: self.cell_attributes,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let input = match &self.input {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let rows = parse_rows(&input, self.delimiter);
        if rows.is_empty() {
            Output::new().warning("Input contains no rows; writing an empty table");
        }
        tracing::info!(rows = rows.len(), "Parsed table input");

        let options = TableOptions {
            header: !self.no_header,
            cell_attributes: config.document.table_cell_attributes.as_deref(),
            capacity: config.builder.capacity,
        };
        let markup = render_table(&rows, &options);
        write_markup(config.output_resolved.path.as_deref(), &markup)
    }
}

/// How rows are turned into a table.
pub(crate) struct TableOptions<'a> {
    /// Render the first row with header cells.
    pub header: bool,
    /// Raw attribute text injected into every cell.
    pub cell_attributes: Option<&'a str>,
    /// Initial buffer capacity.
    pub capacity: usize,
}

/// Split `input` into rows of trimmed cells, skipping blank lines.
pub(crate) fn parse_rows(input: &str, delimiter: char) -> Vec<Vec<&str>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(delimiter).map(str::trim).collect())
        .collect()
}

/// Render `rows` as a table. Cell text is escaped before insertion.
pub(crate) fn render_table(rows: &[Vec<&str>], options: &TableOptions<'_>) -> String {
    let mut builder = MarkupBuilder::with_capacity(options.capacity);
    match options.cell_attributes {
        Some(attributes) => builder.begin_table_with_cell_attributes(attributes),
        None => builder.begin_table(),
    };

    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<_> = row.iter().map(|cell| escape_text(cell)).collect();
        builder.add_table_row(options.header && index == 0, &cells);
    }

    builder.end_table();
    builder.into_inner()
}
