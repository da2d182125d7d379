use crate::parse;

/// One parsed segment of a rule chain: a rule name plus its raw,
/// still-unsplit parameter string.
///
/// Produced by [`parse::parse()`](crate::parse::parse) from segments of
/// the form `name` or `name:p1,p2,...`. Splitting `raw_params` on commas
/// is deferred to the message engine and the rule callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub name: String,
    pub raw_params: Option<String>,
}

impl RuleSpec {
    pub fn new(name: impl Into<String>, raw_params: Option<&str>) -> Self {
        Self {
            name: name.into(),
            raw_params: raw_params.map(str::to_owned),
        }
    }
}

/// A rule chain in either of its accepted input forms.
///
/// Callers hand a session either the string DSL
/// (`"required|between:18,40"`) or an explicit list; both converge on
/// the same ordered [`RuleSpec`] list.
#[derive(Debug, Clone, Default)]
pub struct RuleChain {
    specs: Vec<RuleSpec>,
}

impl RuleChain {
    #[must_use]
    pub fn specs(&self) -> &[RuleSpec] {
        &self.specs
    }

    #[must_use]
    pub fn into_specs(self) -> Vec<RuleSpec> {
        self.specs
    }
}

impl From<&str> for RuleChain {
    fn from(input: &str) -> Self {
        Self {
            specs: parse::parse(input),
        }
    }
}

impl From<String> for RuleChain {
    fn from(input: String) -> Self {
        Self::from(input.as_str())
    }
}

impl From<Vec<RuleSpec>> for RuleChain {
    fn from(specs: Vec<RuleSpec>) -> Self {
        Self { specs }
    }
}

/// List form: each element is parsed as a single chain segment, so
/// `["required", "between:18,40"]` and `"required|between:18,40"` are
/// equivalent.
impl From<&[&str]> for RuleChain {
    fn from(segments: &[&str]) -> Self {
        Self {
            specs: segments.iter().flat_map(|s| parse::parse(s)).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for RuleChain {
    fn from(segments: [&str; N]) -> Self {
        Self::from(&segments[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_from_str() {
        let chain = RuleChain::from("required|between:18,40");
        assert_eq!(chain.specs().len(), 2);
        assert_eq!(chain.specs()[0], RuleSpec::new("required", None));
        assert_eq!(chain.specs()[1], RuleSpec::new("between", Some("18,40")));
    }

    #[test]
    fn chain_from_list_matches_string_form() {
        let from_list = RuleChain::from(["required", "between:18,40"]);
        let from_str = RuleChain::from("required|between:18,40");
        assert_eq!(from_list.specs(), from_str.specs());
    }

    #[test]
    fn chain_from_specs_passthrough() {
        let specs = vec![RuleSpec::new("email", None)];
        let chain = RuleChain::from(specs.clone());
        assert_eq!(chain.into_specs(), specs);
    }
}
