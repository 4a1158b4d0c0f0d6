use super::wave_builder;
use crate::error::CliError;
use crate::util::{format_sequence, parse_half_width, parse_sequence, ParseMode};
use argh::FromArgs;
use std::io::{self, BufRead, Write};
use wave_transform_api::WaveError;

#[derive(FromArgs, Debug)]
/// Prompt for sequences and half widths until the quit sentinel is entered
#[argh(subcommand, name = "interactive")]
pub struct InteractiveCmd {
    /// skip malformed integers instead of rejecting the whole sequence
    #[argh(switch)]
    pub permissive: bool,

    /// input that ends the session [default: q]
    #[argh(option, default = "String::from(\"q\")")]
    pub quit: String,

    /// process blocks on multiple threads
    #[argh(switch)]
    pub threads: bool,
}

/// Counts of what happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Sequences that were transformed and printed.
    pub transformed: usize,
    /// Inputs that were reported and re-prompted.
    pub rejected: usize,
}

/// A prompt loop over a line based input source.
///
/// The loop ends when the quit sentinel is entered at either prompt or the
/// input runs out. Bad input is reported and the loop starts over.
pub struct Session<R, W> {
    input: R,
    output: W,
    mode: ParseMode,
    sentinel: String,
    multithreaded: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, mode: ParseMode, sentinel: impl Into<String>) -> Self {
        Self {
            input,
            output,
            mode,
            sentinel: sentinel.into(),
            multithreaded: false,
        }
    }

    pub fn multithreaded(mut self, enabled: bool) -> Self {
        self.multithreaded = enabled;
        self
    }

    pub fn run(&mut self) -> Result<SessionSummary, CliError> {
        let mut summary = SessionSummary::default();

        loop {
            writeln!(
                self.output,
                "Enter array of integers separated by commas (or type '{}' to quit):",
                self.sentinel
            )?;
            let Some(line) = self.next_line()? else {
                break;
            };

            let parsed = match parse_sequence(&line, self.mode) {
                Ok(parsed) => parsed,
                Err(error) => {
                    tracing::debug!(%error, "rejected sequence");
                    writeln!(self.output, "{error}")?;
                    summary.rejected += 1;
                    continue;
                }
            };
            for token in &parsed.rejected {
                tracing::warn!(token = %token, "skipping malformed integer");
                writeln!(self.output, "Invalid integer: {token}")?;
            }

            writeln!(
                self.output,
                "Enter integer x (x >= 1) (or type '{}' to quit):",
                self.sentinel
            )?;
            let Some(line) = self.next_line()? else {
                break;
            };

            let x = match parse_half_width(&line) {
                Ok(x) => x,
                Err(error) => {
                    tracing::debug!(input = %line, "rejected half width");
                    writeln!(self.output, "{error}")?;
                    summary.rejected += 1;
                    continue;
                }
            };

            match wave_builder(x, self.multithreaded).transform_allocating(&parsed.values) {
                Ok(waves) => {
                    tracing::debug!(len = waves.len(), x, "transformed sequence");
                    writeln!(self.output, "Resulting array in wave pattern:")?;
                    writeln!(self.output, "{}", format_sequence(&waves))?;
                    writeln!(self.output)?;
                    summary.transformed += 1;
                }
                Err(WaveError::NonConformantLength { len, block_size }) => {
                    writeln!(
                        self.output,
                        "Error: array length ({len}) is not a multiple of (2*x+1) = {block_size}."
                    )?;
                    summary.rejected += 1;
                }
                Err(error) => {
                    writeln!(self.output, "Error: {error}")?;
                    summary.rejected += 1;
                }
            }
        }

        self.output.flush()?;
        Ok(summary)
    }

    /// Reads the next trimmed line, or [`None`] on end of input or the quit sentinel.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD` so it reaches the parsers as a
    /// malformed token.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line == self.sentinel {
            return Ok(None);
        }
        Ok(Some(line.to_owned()))
    }
}

pub fn handle_interactive_command(cmd: InteractiveCmd) -> Result<(), CliError> {
    let mode = if cmd.permissive {
        ParseMode::Permissive
    } else {
        ParseMode::Strict
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Session::new(stdin.lock(), stdout.lock(), mode, cmd.quit)
        .multithreaded(cmd.threads)
        .run()?;

    tracing::info!(
        transformed = summary.transformed,
        rejected = summary.rejected,
        "session ended"
    );
    Ok(())
}
