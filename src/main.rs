use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use ipinfo::app::App;
use ipinfo::cli::Cli;
use ipinfo::config::Config;
use ipinfo::logging;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::from_args();

    // Usage only; nothing is read or resolved.
    let Some(config) = Config::from_cli(&cli).filter(|_| !cli.wants_usage()) else {
        eprint!("{}", Cli::usage(io::stderr().is_terminal()));
        return Ok(ExitCode::SUCCESS);
    };

    logging::init(config.verbosity);
    debug!("{} {} starting: {:?}", ipinfo::NAME, ipinfo::VERSION, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = App::execute(&config, &mut out).await?;
    out.flush()?;

    Ok(ExitCode::from(code as u8))
}
