use anyhow::Result;
use clap::Args;

use hexalign::session::Mode;
use hexalign::{parse_token, Table, TableRenderer};

use super::{report_failure, write_stdout};

#[derive(Args)]
pub struct SingleCommand {
    #[arg(help = "Number to show: decimal, 0x-prefixed hex, or bare hex digits")]
    pub number: String,
}

impl SingleCommand {
    pub fn execute(self, renderer: &TableRenderer) -> Result<()> {
        match parse_token(&self.number) {
            Ok(digits) => {
                write_stdout(&renderer.render(&Table::single(&digits))?)
            }
            Err(err) => report_failure(Mode::Single, err),
        }
    }
}
