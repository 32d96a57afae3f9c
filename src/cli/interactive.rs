use anyhow::Result;
use clap::Args;
use std::io;

use hexalign::session::Session;
use hexalign::TableRenderer;

#[derive(Args, Default)]
pub struct InteractiveCommand {}

impl InteractiveCommand {
    pub fn execute(self, renderer: &TableRenderer) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(stdin.lock(), stdout.lock(), renderer.clone());
        session.run()?;
        Ok(())
    }
}
