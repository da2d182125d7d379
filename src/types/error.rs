use thiserror::Error;

/// Configuration errors raised while executing a chain.
///
/// These are developer mistakes, not validation outcomes: they abort
/// the session's `validate()` call and are never downgraded to a failed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("unknown rule '{name}' in chain")]
    UnknownRule { name: String },

    #[error("rule '{rule}' requires a parameter")]
    MissingParameter { rule: String },

    #[error("malformed size literal '{input}' for rule '{rule}'")]
    MalformedSize { rule: String, input: String },

    #[error("rule '{rule}' expected a numeric parameter, got '{input}'")]
    MalformedNumber { rule: String, input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rule_message() {
        let err = RuleError::UnknownRule {
            name: "isFoo".into(),
        };
        assert_eq!(err.to_string(), "unknown rule 'isFoo' in chain");
    }

    #[test]
    fn missing_parameter_message() {
        let err = RuleError::MissingParameter {
            rule: "between".into(),
        };
        assert_eq!(err.to_string(), "rule 'between' requires a parameter");
    }

    #[test]
    fn malformed_size_message() {
        let err = RuleError::MalformedSize {
            rule: "min".into(),
            input: "2KB123".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed size literal '2KB123' for rule 'min'"
        );
    }

    #[test]
    fn malformed_number_message() {
        let err = RuleError::MalformedNumber {
            rule: "modulo".into(),
            input: "abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "rule 'modulo' expected a numeric parameter, got 'abc'"
        );
    }
}
