//! `solmark` - render question/solution JSON files into Markdown

use clap::Parser;
use tracing::{debug, warn};

use solmark::cli::args::Cli;
use solmark::cli::commands;
use solmark::error::ExitCode;
use solmark::observability::init_logging;

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap sees its variables as env defaults.
    let env_file = dotenv::dotenv();

    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match env_file {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "ignoring unreadable .env file"),
    }

    match commands::run(&cli).await {
        Ok(_) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
