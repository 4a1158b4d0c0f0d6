use crate::error::InputError;

/// How malformed tokens in a sequence are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Reject the whole sequence on the first malformed token.
    #[default]
    Strict,
    /// Skip malformed tokens and keep the valid ones.
    Permissive,
}

/// A parsed sequence along with the tokens that were skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSequence {
    /// The integers, in input order.
    pub values: Vec<i64>,
    /// Malformed tokens skipped in [`ParseMode::Permissive`]. Always empty in
    /// [`ParseMode::Strict`].
    pub rejected: Vec<String>,
}

/// Parses a comma separated list of integers.
///
/// Tokens are trimmed before parsing. An empty token (for example from an empty
/// line or a trailing comma) counts as malformed.
pub fn parse_sequence(text: &str, mode: ParseMode) -> Result<ParsedSequence, InputError> {
    let mut parsed = ParsedSequence::default();

    for token in text.split(',').map(str::trim) {
        match token.parse::<i64>() {
            Ok(value) => parsed.values.push(value),
            Err(_) if mode == ParseMode::Permissive => parsed.rejected.push(token.to_owned()),
            Err(_) => return Err(InputError::InvalidInteger(token.to_owned())),
        }
    }

    Ok(parsed)
}

/// Parses the block half width `x`, which must be an integer `>= 1`.
pub fn parse_half_width(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    match text.parse::<i64>() {
        Ok(x) if x >= 1 => {
            usize::try_from(x).map_err(|_| InputError::InvalidHalfWidth(text.to_owned()))
        }
        _ => Err(InputError::InvalidHalfWidth(text.to_owned())),
    }
}

/// [`parse_half_width`] for use with `argh`'s `from_str_fn`.
pub fn parse_half_width_arg(value: &str) -> Result<usize, String> {
    parse_half_width(value).map_err(|e| e.to_string())
}

/// Formats a sequence as `[a b c]`.
pub fn format_sequence(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", items.join(" "))
}
