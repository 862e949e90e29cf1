//! CLI command implementations.

pub(crate) mod demo;
pub(crate) mod table;

pub(crate) use demo::DemoArgs;
pub(crate) use table::TableArgs;

use std::io::Write;
use std::path::Path;

use crate::error::CliError;
use crate::output::Output;

/// Write finished markup as UTF-8 to `path`, or to stdout when `None`.
///
/// Missing parent directories of `path` are created.
pub(crate) fn write_markup(path: Option<&Path>, markup: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, markup)?;
            tracing::info!(path = %path.display(), bytes = markup.len(), "Wrote markup");
            Output::new().success(&format!(
                "Wrote {} bytes to {}",
                markup.len(),
                path.display()
            ));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(markup.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
