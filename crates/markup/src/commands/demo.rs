//! `markup demo` command implementation.

use std::path::PathBuf;

use clap::Args;
use markup_builder::MarkupBuilder;
use markup_config::{CliSettings, Config};

use super::write_markup;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the demo command.
#[derive(Args)]
pub(crate) struct DemoArgs {
    /// Path to configuration file (default: auto-discover markup.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File to write the markup to (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Initial buffer capacity in bytes (overrides config).
    #[arg(long)]
    capacity: Option<usize>,

    /// Heading color (overrides config).
    #[arg(long)]
    heading_color: Option<String>,

    /// Raw attribute text for table cells (overrides config).
    #[arg(long)]
    cell_attributes: Option<String>,
}

impl DemoArgs {
    /// Execute the demo command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the markup can't be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            capacity: self.capacity,
            output: self.output,
            heading_color: self.heading_color,
            table_cell_attributes: self.cell_attributes,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            Output::new().info(&format!("Using config: {}", path.display()));
        }

        let markup = render_demo(&config);
        tracing::info!(bytes = markup.len(), "Rendered demo document");
        write_markup(config.output_resolved.path.as_deref(), &markup)
    }
}

/// Build the demo document exercising every builder operation family.
pub(crate) fn render_demo(config: &Config) -> String {
    let doc = &config.document;
    let mut builder = MarkupBuilder::with_capacity(config.builder.capacity);

    builder
        .open_html()
        .open_head()
        .add_html("<title>")
        .add(&doc.title)
        .add_html("</title>")
        .close_head()
        .open_body()
        .add("inside body")
        .newline()
        .add_link("This is Sparta!!!", "https://www.stackoverflow.com")
        .newline()
        .add_nbsps(14)
        .add("nbsp example")
        .newline()
        .begin_italic()
        .add_bold("bold and italic")
        .end_italic()
        .newline()
        .begin_ordered_list()
        .list_item()
        .add("item 1")
        .list_item()
        .add("item 2")
        .list_item()
        .add_link("localhost", "http://127.0.0.1")
        .end_ordered_list()
        .add("list end")
        .newline()
        .begin_div_with_style("color : red")
        .add_on_click("Click me", "alert('I am alert');")
        .end_div()
        .newline()
        .add_image(&doc.image_url, doc.image_alt.as_deref())
        .newline()
        .add_heading("I AM HEADER", &doc.heading_color)
        .newline();

    match doc.table_cell_attributes.as_deref() {
        Some(attributes) => builder.begin_table_with_cell_attributes(attributes),
        None => builder.begin_table(),
    };

    builder
        .add_table_row(true, &["row 1", "row 2", "row 3", "row 4"])
        .add_data_row(&["row 5", "row 6", "row 7", "row 8"])
        .end_table()
        .add("end of table")
        .newline_if_necessary()
        .add_icon(doc.icon_url.as_deref())
        .close_body()
        .close_html();

    builder.into_inner()
}
