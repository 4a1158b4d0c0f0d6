use super::wave_builder;
use crate::error::CliError;
use crate::util::{format_sequence, parse_half_width_arg, parse_sequence, ParseMode};
use argh::FromArgs;
use std::io::{self, Write};
use std::time::Instant;

#[derive(FromArgs, Debug)]
/// Rearrange a single comma separated sequence into wave blocks
#[argh(subcommand, name = "transform")]
pub struct TransformCmd {
    /// comma separated integers, e.g. "3,6,5,8,1,9"
    #[argh(option)]
    pub values: String,

    /// block half width x (blocks hold 2*x+1 values)
    #[argh(option, short = 'x', from_str_fn(parse_half_width_arg))]
    pub half_width: usize,

    /// skip malformed integers instead of rejecting the whole sequence
    #[argh(switch)]
    pub permissive: bool,

    /// process blocks on multiple threads
    #[argh(switch)]
    pub threads: bool,
}

pub fn handle_transform_command(cmd: TransformCmd) -> Result<(), CliError> {
    run_transform(&cmd, &mut io::stdout().lock())
}

/// Transforms `cmd.values` and writes the formatted result to `output`.
pub fn run_transform<W: Write>(cmd: &TransformCmd, output: &mut W) -> Result<(), CliError> {
    let mode = if cmd.permissive {
        ParseMode::Permissive
    } else {
        ParseMode::Strict
    };

    let parsed = parse_sequence(&cmd.values, mode)?;
    for token in &parsed.rejected {
        tracing::warn!(token = %token, "skipping malformed integer");
    }

    let start = Instant::now();
    let waves = wave_builder(cmd.half_width, cmd.threads).transform_allocating(&parsed.values)?;
    tracing::debug!(
        len = waves.len(),
        x = cmd.half_width,
        elapsed = ?start.elapsed(),
        "transformed sequence"
    );

    writeln!(output, "{}", format_sequence(&waves))?;
    Ok(())
}
