// logtab - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing (exactly one positional argument)
// 2. Logging initialisation
// 3. Running the conversion and mapping the outcome to an exit status

use clap::Parser;
use logtab::app::summarise::summarise_file;
use logtab::util::{self, constants};
use std::path::PathBuf;

/// logtab - tabulate GA solver results into summary.csv.
#[derive(Parser, Debug)]
#[command(
    name = "logtab",
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Log file produced by the solver runs. Taken verbatim, even when it
    /// starts with `-`.
    #[arg(allow_hyphen_values = true)]
    log_file_path: PathBuf,
}

/// Print the usage line on stdout and exit with the usage status.
fn usage_exit() -> ! {
    println!("{}", constants::USAGE);
    std::process::exit(constants::EXIT_USAGE);
}

fn main() {
    util::logging::init();

    // Exactly one argument after the program name. Counted before clap sees
    // the line so that `--` or a second token is never swallowed.
    let arg_count = std::env::args_os().len();
    if arg_count != 2 {
        tracing::debug!(arg_count, "Rejected command line");
        usage_exit();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "Rejected command line");
            usage_exit();
        }
    };

    tracing::debug!(
        version = constants::APP_VERSION,
        input = %cli.log_file_path.display(),
        "logtab starting"
    );

    let output = PathBuf::from(constants::OUTPUT_FILE_NAME);
    let result = summarise_file(&cli.log_file_path, &output, &constants::VARIANT_ORDER);

    if let Err(e) = result {
        tracing::error!(error = %e, "Summary failed");
        eprintln!("Error: {e}");
        std::process::exit(constants::EXIT_FAILURE);
    }
}
