use super::{TypeHint, Value};

/// Per-session execution state for one distinct rule name.
///
/// A record is re-used, never re-created, when the same rule name comes
/// up again, both for duplicate entries within one chain and across
/// repeated `validate()` calls on the same session. That re-use is what
/// carries the memoization invariant: a record that already ran against
/// an identical value answers from storage instead of re-invoking the
/// callback.
#[derive(Debug, Clone)]
pub(crate) struct Record {
    pub(crate) rule_name: String,
    /// Message-lookup name: the callback's alias when it gave one,
    /// otherwise `rule_name`.
    pub(crate) canonical: String,
    pub(crate) passed: bool,
    /// The value the callback was invoked with.
    pub(crate) tested: Option<Value>,
    /// The value the callback returned; replayed on memo hits so
    /// coercion still propagates to later rules.
    pub(crate) produced: Option<Value>,
    /// Working type hint after this rule ran.
    pub(crate) hint_after: Option<TypeHint>,
    pub(crate) message: Option<String>,
    pub(crate) has_run: bool,
}

impl Record {
    pub(crate) fn new(rule_name: &str) -> Self {
        Self {
            rule_name: rule_name.to_owned(),
            canonical: rule_name.to_owned(),
            passed: false,
            tested: None,
            produced: None,
            hint_after: None,
            message: None,
            has_run: false,
        }
    }

    /// True when the stored verdict can stand in for a fresh callback
    /// invocation against `value`.
    pub(crate) fn memo_hit(&self, value: &Value) -> bool {
        self.has_run && self.tested.as_ref() == Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_record_never_hits() {
        let rec = Record::new("required");
        assert!(!rec.memo_hit(&Value::Str("x".into())));
    }

    #[test]
    fn memo_hit_requires_identical_value() {
        let mut rec = Record::new("required");
        rec.has_run = true;
        rec.tested = Some(Value::Str("x".into()));
        assert!(rec.memo_hit(&Value::Str("x".into())));
        assert!(!rec.memo_hit(&Value::Str("y".into())));
        assert!(!rec.memo_hit(&Value::Int(1)));
    }
}
