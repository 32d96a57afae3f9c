pub mod compare;
pub mod interactive;
pub mod single;

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::io::{self, Write};
use console::style;
use log::debug;

use hexalign::session::{failure_message, Mode};
use hexalign::{RenderStyle, TableFormat, TableRenderer};

/// Options shared by every command that prints tables.
#[derive(Args)]
pub struct OutputOptions {
    #[arg(long, global = true, help = "Disable highlighting of agreeing columns")]
    pub no_color: bool,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = FormatArg::Text,
        help = "Output format for tables"
    )]
    pub format: FormatArg,
}

impl OutputOptions {
    pub fn renderer(&self) -> TableRenderer {
        TableRenderer::new()
            .with_style(RenderStyle::for_terminal(self.no_color))
            .with_format(self.format.into())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Labelled index and value rows
    Text,
    /// Structured table as JSON
    Json,
}

impl From<FormatArg> for TableFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => TableFormat::Text,
            FormatArg::Json => TableFormat::Json,
        }
    }
}

/// Writes rendered output to stdout; a closed stdout is an error, not a panic.
pub fn write_stdout(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Prints the message for an input error. Other errors are returned.
pub fn report_failure(mode: Mode, err: hexalign::Error) -> Result<()> {
    match failure_message(mode, &err) {
        Some(message) => {
            debug!("{:?} failed: {}", mode, err);
            let mut out = io::stdout().lock();
            writeln!(out, "{}", style(message).yellow())?;
            out.flush()?;
            Ok(())
        }
        None => Err(err.into()),
    }
}
