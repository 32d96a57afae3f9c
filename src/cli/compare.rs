use anyhow::Result;
use clap::Args;
use log::info;

use hexalign::session::Mode;
use hexalign::{Table, TableRenderer};

use super::{report_failure, write_stdout};

#[derive(Args)]
pub struct CompareCommand {
    #[arg(help = "Numbers to compare: decimal, 0x-prefixed hex, or bare hex digits")]
    pub numbers: Vec<String>,
}

impl CompareCommand {
    pub fn execute(self, renderer: &TableRenderer) -> Result<()> {
        info!("Comparing {} number(s)", self.numbers.len());

        match Table::compare_lines(&self.numbers) {
            Ok(table) => {
                write_stdout(&renderer.render(&table)?)
            }
            Err(err) => report_failure(Mode::Multiple, err),
        }
    }
}
