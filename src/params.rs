//! Parameter-string utilities shared by the message engine and the rule
//! callbacks.
//!
//! A [`RuleSpec`](crate::RuleSpec)'s raw parameter string stays unsplit
//! until someone actually needs individual values; these helpers do the
//! splitting and the DSL escape decoding at that point.

/// Split a raw parameter string on commas, trimming each token.
///
/// An empty raw string yields no parameters, so `"contains:"` and a bare
/// `"contains"` both trip the same missing-parameter check.
#[must_use]
pub fn split_params(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::trim).collect()
}

/// Decode the chain-DSL escape tokens a parameter value needs in order
/// to contain a literal pipe or significant spaces: `&pip;` → `|`,
/// `&esp;` → space.
///
/// Applied only by callbacks that opt in (`contains`, `one_of`,
/// `start_with`, `end_with`); numeric rules never see escaped input.
#[must_use]
pub fn unescape(token: &str) -> String {
    token.replace("&pip;", "|").replace("&esp;", " ")
}
