use winnow::combinator::{opt, preceded};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

use crate::RuleSpec;

// -- Segments ---------------------------------------------------------------

fn rule_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| c != ':' && c != '|').parse_next(input)
}

/// Everything after the FIRST colon up to the next pipe, untouched.
/// Further colons and commas stay inside the raw parameter string;
/// splitting them is the message/callback layer's job.
fn raw_params<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded(':', take_while(0.., |c: char| c != '|')).parse_next(input)
}

fn segment(input: &mut &str) -> ModalResult<Option<RuleSpec>> {
    let name = rule_name.parse_next(input)?;
    let params = opt(raw_params).parse_next(input)?;

    // Names are trimmed; raw parameter strings are not (per-token trim
    // happens on the comma split later). Empty segments are discarded.
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }
    Ok(Some(RuleSpec::new(name, params)))
}

// -- Top-level chain --------------------------------------------------------

pub fn chain(input: &mut &str) -> ModalResult<Vec<RuleSpec>> {
    let mut specs = Vec::new();
    loop {
        if let Some(spec) = segment(input)? {
            specs.push(spec);
        }
        if opt('|').parse_next(input)?.is_none() {
            return Ok(specs);
        }
    }
}
