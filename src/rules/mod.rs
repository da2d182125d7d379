//! Built-in rule callbacks.
//!
//! These are pluggable implementations of the
//! [`RuleCallback`](crate::RuleCallback) contract, not engine logic: the
//! pipeline treats them exactly like caller-registered rules.

mod numeric;
mod size;
mod text;

use std::sync::Arc;

use crate::registry::{RuleCallback, RuleRegistry};
use crate::types::RuleError;

/// Register every built-in rule into `registry`.
pub(crate) fn install(registry: &RuleRegistry) {
    registry.add_rule("required", text::required);
    registry.add_rule("email", text::email);
    registry.add_rule("contains", text::contains);
    registry.add_rule("start_with", text::start_with);
    registry.add_rule("end_with", text::end_with);
    registry.add_rule("one_of", text::one_of);

    registry.add_rule("number", numeric::number);
    registry.add_rule("min", numeric::min);
    registry.add_rule("max", numeric::max);
    registry.add_rule("between", numeric::between);

    // `integer`/`int` and `modulo`/`mod` are independent registry
    // entries sharing one callback.
    let integer: RuleCallback = Arc::new(numeric::integer);
    registry.add_rule_arc("integer", Arc::clone(&integer));
    registry.add_rule_arc("int", integer);

    let modulo: RuleCallback = Arc::new(numeric::modulo);
    registry.add_rule_arc("modulo", Arc::clone(&modulo));
    registry.add_rule_arc("mod", modulo);
}

/// First comma-separated parameter of a rule that declares one
/// mandatory; empty or absent is a configuration error.
pub(crate) fn first_param<'a>(rule: &str, params: Option<&'a str>) -> Result<&'a str, RuleError> {
    params
        .map(crate::params::split_params)
        .and_then(|tokens| tokens.first().copied())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| RuleError::MissingParameter {
            rule: rule.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_registers_all_builtin_names() {
        let registry = RuleRegistry::new();
        install(&registry);
        for name in [
            "required",
            "email",
            "contains",
            "start_with",
            "end_with",
            "one_of",
            "number",
            "integer",
            "int",
            "min",
            "max",
            "between",
            "modulo",
            "mod",
        ] {
            assert!(registry.has_rule(name), "missing builtin {name}");
        }
    }

    #[test]
    fn first_param_picks_leading_token() {
        assert_eq!(first_param("min", Some(" 18 , 40 ")).unwrap(), "18");
    }

    #[test]
    fn first_param_rejects_absent_or_empty() {
        assert!(first_param("min", None).is_err());
        assert!(first_param("min", Some("")).is_err());
        assert!(first_param("min", Some("  ")).is_err());
    }
}
