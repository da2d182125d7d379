mod grammar;

use crate::RuleSpec;

/// Parse a rule-chain DSL string into ordered [`RuleSpec`]s.
///
/// Segments are separated by `|`; within a segment the first `:` splits
/// the rule name from its raw parameter string. The grammar accepts any
/// input: names are trimmed, empty segments are dropped, and unknown
/// rule names are an execution-pipeline concern, not a parse error.
#[must_use]
pub fn parse(input: &str) -> Vec<RuleSpec> {
    use winnow::Parser;
    // A segment is "everything up to the next pipe", so the grammar has
    // no rejecting path; the fallback keeps the signature honest.
    grammar::chain.parse(input).unwrap_or_default()
}
