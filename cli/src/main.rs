use std::io;
use std::process::ExitCode;

use macvendor_cli::commands::{CommandLine, lookup};
use macvendor_cli::terminal::logging;
use macvendor_core::vendors::HttpVendorRepo;
use tracing::debug;

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    // logs go to stderr, stdout only carries the result line
    let dispatch = logging::dispatcher(commands.verbose, io::stderr);

    tracing::dispatcher::with_default(&dispatch, || -> anyhow::Result<ExitCode> {
        if commands.verbose {
            debug!("Verbose logging enabled.");
        }

        let repo = HttpVendorRepo::new(&commands.config());
        let mut stdout = io::stdout().lock();
        let outcome = lookup::lookup(&commands.mac_address, &repo, &mut stdout)?;

        Ok(ExitCode::from(outcome.exit_code()))
    })
}
