use crate::params::{split_params, unescape};
use crate::types::{Outcome, RuleError, TypeHint, Value};

use super::first_param;

pub(crate) fn required(
    value: &Value,
    _params: Option<&str>,
    _hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let passes = match value {
        Value::Str(s) => !s.trim().is_empty(),
        _ => true,
    };
    Ok(Outcome::new(passes, value.clone()))
}

pub(crate) fn contains(
    value: &Value,
    params: Option<&str>,
    _hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let needle = unescape(first_param("contains", params)?);
    let passes = value.as_text().contains(&needle);
    Ok(Outcome::new(passes, value.clone()))
}

pub(crate) fn start_with(
    value: &Value,
    params: Option<&str>,
    _hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let prefix = unescape(first_param("start_with", params)?);
    let passes = value.as_text().starts_with(&prefix);
    Ok(Outcome::new(passes, value.clone()))
}

pub(crate) fn end_with(
    value: &Value,
    params: Option<&str>,
    _hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let suffix = unescape(first_param("end_with", params)?);
    let passes = value.as_text().ends_with(&suffix);
    Ok(Outcome::new(passes, value.clone()))
}

pub(crate) fn one_of(
    value: &Value,
    params: Option<&str>,
    _hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let options: Vec<String> = params
        .map(split_params)
        .unwrap_or_default()
        .into_iter()
        .map(unescape)
        .collect();
    if options.is_empty() {
        return Err(RuleError::MissingParameter {
            rule: "one_of".to_owned(),
        });
    }
    let text = value.as_text();
    let passes = options.iter().any(|option| option.as_str() == text.as_ref());
    Ok(Outcome::new(passes, value.clone()))
}

pub(crate) fn email(
    value: &Value,
    _params: Option<&str>,
    _hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let passes = value.as_str().is_some_and(is_email);
    Ok(Outcome::new(passes, value.clone()))
}

/// Structural local@domain.tld check. Anything stricter belongs in a
/// custom rule; this is a form-level sanity gate, not RFC 5321.
fn is_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    domain.split('.').all(|label| {
        !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
    }) && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}
