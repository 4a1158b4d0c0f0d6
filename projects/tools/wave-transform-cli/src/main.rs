mod commands;
mod error;
mod util;
use argh::FromArgs;
use error::CliError;
use std::process::ExitCode;

#[derive(FromArgs, Debug)]
/// Rearranges integer sequences into repeating wave blocks
struct TopLevel {
    /// print debug logs to stderr (overridden by RUST_LOG)
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Interactive(commands::interactive::InteractiveCmd),
    Transform(commands::transform::TransformCmd),
    Verify(commands::verify::VerifyCmd),
}

fn main() -> ExitCode {
    let cli: TopLevel = argh::from_env();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: TopLevel) -> Result<(), CliError> {
    util::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Interactive(cmd) => commands::interactive::handle_interactive_command(cmd),
        Commands::Transform(cmd) => commands::transform::handle_transform_command(cmd),
        Commands::Verify(cmd) => commands::verify::handle_verify_command(cmd),
    }
}
