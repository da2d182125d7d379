use crate::params::split_params;

/// Render a message template against the validated attribute's display
/// name and a rule's raw parameter string.
///
/// Placeholders: `:field` is the attribute name, `:argN` the Nth
/// comma-separated parameter (zero-based), and the literal token
/// `...arg` expands to every positional parameter joined with `", "`.
#[must_use]
pub fn render(attribute: &str, template: &str, raw_params: Option<&str>) -> String {
    let args: Vec<&str> = raw_params.map(split_params).unwrap_or_default();

    let mut keys: Vec<(String, &str)> = Vec::with_capacity(args.len() + 1);
    keys.push(("field".to_owned(), attribute));
    for (i, arg) in args.iter().enumerate() {
        keys.push((format!("arg{i}"), arg));
    }
    // Longest key first, so `:arg10` is never clobbered by `:arg1`.
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = template.to_owned();
    for (key, value) in &keys {
        out = out.replace(&format!(":{key}"), value);
    }
    out.replace("...arg", &args.join(", "))
}
