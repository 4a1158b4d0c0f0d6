use super::wave_builder;
use crate::error::CliError;
use crate::util::{parse_half_width_arg, parse_sequence, ParseMode};
use argh::FromArgs;
use std::io::{self, Write};

#[derive(FromArgs, Debug)]
/// Check whether a comma separated sequence already consists of wave blocks
#[argh(subcommand, name = "verify")]
pub struct VerifyCmd {
    /// comma separated integers, e.g. "3,6,5,1,9,8"
    #[argh(option)]
    pub values: String,

    /// block half width x (blocks hold 2*x+1 values)
    #[argh(option, short = 'x', from_str_fn(parse_half_width_arg))]
    pub half_width: usize,
}

pub fn handle_verify_command(cmd: VerifyCmd) -> Result<(), CliError> {
    run_verify(&cmd, &mut io::stdout().lock())
}

/// Checks `cmd.values` for the wave shape and writes a confirmation to `output`.
pub fn run_verify<W: Write>(cmd: &VerifyCmd, output: &mut W) -> Result<(), CliError> {
    let parsed = parse_sequence(&cmd.values, ParseMode::Strict)?;
    wave_builder(cmd.half_width, false).verify(&parsed.values)?;

    writeln!(
        output,
        "Sequence of {} values is a wave with x = {}.",
        parsed.values.len(),
        cmd.half_width
    )?;
    Ok(())
}
