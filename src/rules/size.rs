use winnow::ascii::{dec_uint, Caseless};
use winnow::combinator::{alt, opt};
use winnow::error::ModalResult;
use winnow::prelude::*;

use crate::types::RuleError;

// -- Size literals ----------------------------------------------------------

/// `"2KB"`, `"10MB"`, `"512"` (bare digits are bytes). Units are
/// case-insensitive, multipliers are binary.
fn size_literal(input: &mut &str) -> ModalResult<u64> {
    let count: u64 = dec_uint.parse_next(input)?;
    let unit = opt(alt((
        Caseless("GB").value(1_u64 << 30),
        Caseless("MB").value(1_u64 << 20),
        Caseless("KB").value(1_u64 << 10),
        Caseless("B").value(1_u64),
    )))
    .parse_next(input)?;
    Ok(count.saturating_mul(unit.unwrap_or(1)))
}

/// Parse a size parameter into bytes, rejecting trailing garbage
/// (`"2KB123"` is malformed, not 2KB).
pub(crate) fn parse_size(rule: &str, raw: &str) -> Result<u64, RuleError> {
    size_literal
        .parse(raw.trim())
        .map_err(|_| RuleError::MalformedSize {
            rule: rule.to_owned(),
            input: raw.trim().to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_digits_are_bytes() {
        assert_eq!(parse_size("min", "512").unwrap(), 512);
    }

    #[test]
    fn unit_multipliers() {
        assert_eq!(parse_size("min", "2KB").unwrap(), 2048);
        assert_eq!(parse_size("min", "3MB").unwrap(), 3 << 20);
        assert_eq!(parse_size("min", "1GB").unwrap(), 1 << 30);
        assert_eq!(parse_size("min", "7B").unwrap(), 7);
    }

    #[test]
    fn units_are_case_insensitive() {
        assert_eq!(parse_size("min", "2kb").unwrap(), 2048);
        assert_eq!(parse_size("min", "2Kb").unwrap(), 2048);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(parse_size("min", " 2KB ").unwrap(), 2048);
    }

    #[test]
    fn trailing_garbage_is_malformed() {
        let err = parse_size("min", "2KB123").unwrap_err();
        assert_eq!(
            err,
            RuleError::MalformedSize {
                rule: "min".into(),
                input: "2KB123".into(),
            }
        );
    }

    #[test]
    fn non_numeric_is_malformed() {
        assert!(parse_size("max", "big").is_err());
        assert!(parse_size("max", "KB2").is_err());
        assert!(parse_size("max", "").is_err());
    }
}
