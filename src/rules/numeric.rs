use crate::params::split_params;
use crate::types::{Outcome, RuleError, TypeHint, Value};

use super::first_param;
use super::size::parse_size;

pub(crate) fn number(
    value: &Value,
    _params: Option<&str>,
    _hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let outcome = match value {
        Value::Int(_) | Value::Float(_) => {
            Outcome::pass(value.clone()).with_hint(TypeHint::Number)
        }
        Value::Str(s) => match coerce_number(s) {
            Some(coerced) => Outcome::pass(coerced).with_hint(TypeHint::Number),
            None => Outcome::fail(value.clone()),
        },
        Value::Bool(_) => Outcome::fail(value.clone()),
    };
    Ok(outcome)
}

pub(crate) fn integer(
    value: &Value,
    _params: Option<&str>,
    _hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let outcome = match value {
        Value::Int(_) => Outcome::pass(value.clone()).with_hint(TypeHint::Number),
        Value::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Outcome::pass(Value::Int(*f as i64)).with_hint(TypeHint::Number)
        }
        Value::Str(s) => match s.trim().parse::<i64>() {
            Ok(n) => Outcome::pass(Value::Int(n)).with_hint(TypeHint::Number),
            Err(_) => Outcome::fail(value.clone()),
        },
        _ => Outcome::fail(value.clone()),
    };
    Ok(outcome)
}

pub(crate) fn min(
    value: &Value,
    params: Option<&str>,
    hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let raw = first_param("min", params)?;
    if hint == Some(TypeHint::File) {
        let bound = parse_size("min", raw)? as f64;
        let passes = value.to_f64().is_some_and(|bytes| bytes >= bound);
        return Ok(Outcome::new(passes, value.clone()).with_canonical("min_file_size"));
    }
    let bound = numeric_param("min", raw)?;
    let passes = measured(value).is_some_and(|m| m >= bound);
    Ok(Outcome::new(passes, value.clone()))
}

pub(crate) fn max(
    value: &Value,
    params: Option<&str>,
    hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let raw = first_param("max", params)?;
    if hint == Some(TypeHint::File) {
        let bound = parse_size("max", raw)? as f64;
        let passes = value.to_f64().is_some_and(|bytes| bytes <= bound);
        return Ok(Outcome::new(passes, value.clone()).with_canonical("max_file_size"));
    }
    let bound = numeric_param("max", raw)?;
    let passes = measured(value).is_some_and(|m| m <= bound);
    Ok(Outcome::new(passes, value.clone()))
}

pub(crate) fn between(
    value: &Value,
    params: Option<&str>,
    hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let tokens = params.map(split_params).unwrap_or_default();
    let (&lo, &hi) = match (tokens.first(), tokens.get(1)) {
        (Some(lo), Some(hi)) if !lo.is_empty() && !hi.is_empty() => (lo, hi),
        _ => {
            return Err(RuleError::MissingParameter {
                rule: "between".to_owned(),
            })
        }
    };
    let (lo, hi) = if hint == Some(TypeHint::File) {
        (parse_size("between", lo)? as f64, parse_size("between", hi)? as f64)
    } else {
        (numeric_param("between", lo)?, numeric_param("between", hi)?)
    };
    let passes = measured(value).is_some_and(|m| m >= lo && m <= hi);
    Ok(Outcome::new(passes, value.clone()))
}

pub(crate) fn modulo(
    value: &Value,
    params: Option<&str>,
    _hint: Option<TypeHint>,
) -> Result<Outcome, RuleError> {
    let raw = first_param("modulo", params)?;
    let divisor: i64 = raw.trim().parse().map_err(|_| RuleError::MalformedNumber {
        rule: "modulo".to_owned(),
        input: raw.trim().to_owned(),
    })?;
    if divisor == 0 {
        return Err(RuleError::MalformedNumber {
            rule: "modulo".to_owned(),
            input: raw.trim().to_owned(),
        });
    }
    let n = value
        .to_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()));
    let passes = n.is_some_and(|n| n % divisor == 0);
    Ok(Outcome::new(passes, value.clone()))
}

/// What min/max/between compare: the numeric value for numbers, the
/// character length for strings. Booleans measure as nothing and fail.
fn measured(value: &Value) -> Option<f64> {
    value
        .to_f64()
        .or_else(|| value.char_len().map(|len| len as f64))
}

fn coerce_number(s: &str) -> Option<Value> {
    let t = s.trim();
    if let Ok(n) = t.parse::<i64>() {
        return Some(Value::Int(n));
    }
    t.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Value::Float)
}

fn numeric_param(rule: &str, raw: &str) -> Result<f64, RuleError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RuleError::MalformedNumber {
            rule: rule.to_owned(),
            input: raw.trim().to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_coerces_strings() {
        let out = number(&Value::Str("18".into()), None, None).unwrap();
        assert!(out.passes());
        assert_eq!(out.value(), &Value::Int(18));
        assert_eq!(out.hint(), Some(TypeHint::Number));

        let out = number(&Value::Str("1.5".into()), None, None).unwrap();
        assert_eq!(out.value(), &Value::Float(1.5));
    }

    #[test]
    fn number_rejects_non_numeric_text() {
        assert!(!number(&Value::Str("abc".into()), None, None).unwrap().passes());
        assert!(!number(&Value::Str("inf".into()), None, None).unwrap().passes());
        assert!(!number(&Value::Bool(true), None, None).unwrap().passes());
    }

    #[test]
    fn integer_coerces_and_rejects() {
        let out = integer(&Value::Str(" 42 ".into()), None, None).unwrap();
        assert!(out.passes());
        assert_eq!(out.value(), &Value::Int(42));

        assert!(!integer(&Value::Str("1.5".into()), None, None).unwrap().passes());
        assert!(integer(&Value::Float(3.0), None, None).unwrap().passes());
        assert!(!integer(&Value::Bool(true), None, None).unwrap().passes());
    }

    #[test]
    fn min_compares_numbers_numerically() {
        assert!(min(&Value::Int(40), Some("18"), None).unwrap().passes());
        assert!(!min(&Value::Int(10), Some("18"), None).unwrap().passes());
    }

    #[test]
    fn min_measures_string_length() {
        let v = Value::Str("Must bed cool".into()); // 13 chars
        assert!(!min(&v, Some("40"), None).unwrap().passes());
        assert!(min(&v, Some("10"), None).unwrap().passes());
    }

    #[test]
    fn min_without_param_is_fatal() {
        assert!(min(&Value::Int(1), None, None).is_err());
    }

    #[test]
    fn min_under_file_hint_aliases_and_parses_sizes() {
        let out = min(&Value::Int(4096), Some("2KB"), Some(TypeHint::File)).unwrap();
        assert!(out.passes());
        assert_eq!(out.canonical(), Some("min_file_size"));

        let out = min(&Value::Int(1024), Some("2KB"), Some(TypeHint::File)).unwrap();
        assert!(!out.passes());
    }

    #[test]
    fn min_file_rejects_malformed_size() {
        let err = min(&Value::Int(1), Some("2KB123"), Some(TypeHint::File)).unwrap_err();
        assert!(matches!(err, RuleError::MalformedSize { .. }));
    }

    #[test]
    fn max_mirrors_min() {
        assert!(max(&Value::Int(10), Some("18"), None).unwrap().passes());
        assert!(!max(&Value::Int(40), Some("18"), None).unwrap().passes());

        let out = max(&Value::Int(1024), Some("2KB"), Some(TypeHint::File)).unwrap();
        assert!(out.passes());
        assert_eq!(out.canonical(), Some("max_file_size"));
    }

    #[test]
    fn between_needs_two_params() {
        assert!(between(&Value::Int(20), Some("18,40"), None).unwrap().passes());
        assert!(!between(&Value::Int(50), Some("18,40"), None).unwrap().passes());
        assert!(between(&Value::Int(20), Some("18"), None).is_err());
        assert!(between(&Value::Int(20), None, None).is_err());
    }

    #[test]
    fn between_bounds_are_inclusive() {
        assert!(between(&Value::Int(18), Some("18,40"), None).unwrap().passes());
        assert!(between(&Value::Int(40), Some("18,40"), None).unwrap().passes());
    }

    #[test]
    fn malformed_numeric_param_is_fatal() {
        assert!(matches!(
            min(&Value::Int(1), Some("abc"), None).unwrap_err(),
            RuleError::MalformedNumber { .. }
        ));
    }

    #[test]
    fn modulo_divisibility() {
        assert!(modulo(&Value::Int(10), Some("5"), None).unwrap().passes());
        assert!(!modulo(&Value::Int(11), Some("5"), None).unwrap().passes());
        assert!(modulo(&Value::Str("15".into()), Some("5"), None).unwrap().passes());
    }

    #[test]
    fn modulo_zero_divisor_is_fatal() {
        assert!(modulo(&Value::Int(10), Some("0"), None).is_err());
        assert!(modulo(&Value::Int(10), Some("x"), None).is_err());
        assert!(modulo(&Value::Int(10), None, None).is_err());
    }
}
