use winnow::ascii::dec_uint;
use winnow::combinator::{delimited, separated};
use winnow::error::ModalResult;
use winnow::prelude::*;

/// A `{i,j,k}` annotation group: comma-separated zero-based rule
/// positions.
fn brace_group(input: &mut &str) -> ModalResult<Vec<usize>> {
    delimited('{', separated(1.., dec_uint::<_, usize, _>, ','), '}').parse_next(input)
}

/// Expand a caller-supplied custom-message list to one slot per rule.
///
/// A raw message may open with a `{i,j,k}` group meaning "this message
/// also applies to rule positions i, j, k"; the group is copied out and
/// stripped; it is a pure presentation artifact and never reaches the
/// user. Slots no message lands in stay `None` and fall back to the
/// locale catalog.
#[must_use]
pub fn compensate(raw: &[String], rule_count: usize) -> Vec<Option<String>> {
    let mut out: Vec<Option<String>> = vec![None; rule_count];

    for (index, message) in raw.iter().enumerate().take(rule_count) {
        let mut rest = message.as_str();
        if let Ok(targets) = brace_group.parse_next(&mut rest) {
            let text = rest.to_owned();
            out[index] = Some(text.clone());
            for target in targets {
                if target < rule_count {
                    out[target] = Some(text.clone());
                }
            }
        } else {
            out[index] = Some(message.clone());
        }
    }

    out.into_iter()
        .map(|slot| slot.map(|text| strip_brace_groups(&text)))
        .collect()
}

/// Remove every `{int,int,...}` group from a message, wherever it sits.
fn strip_brace_groups(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;
    while let Some(pos) = rest.find('{') {
        let (head, tail) = rest.split_at(pos);
        out.push_str(head);
        let mut probe = tail;
        if brace_group.parse_next(&mut probe).is_ok() {
            rest = probe;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
