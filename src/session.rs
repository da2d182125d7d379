use crate::messages::{compensate, render};
use crate::registry::RuleRegistry;
use crate::types::{Record, RuleChain, RuleError, RuleSpec, TypeHint, Value};

/// Where a session sits in its lifecycle. Terminal states are re-entered
/// only by checking a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Passed,
    Failed,
}

/// Builder for a [`Session`].
///
/// # Example
///
/// ```
/// use veto::Session;
///
/// let mut session = Session::builder("required|number|between:18,40")
///     .attribute("age")
///     .build();
/// assert!(session.check("25").unwrap());
/// assert!(!session.check("17").unwrap());
/// assert_eq!(
///     session.messages(),
///     vec!["The age field must be between 18 and 40"]
/// );
/// ```
#[derive(Debug)]
#[must_use]
pub struct SessionBuilder<'r> {
    registry: &'r RuleRegistry,
    specs: Vec<RuleSpec>,
    raw_messages: Vec<String>,
    attribute: String,
    fail_fast: bool,
    locale: Option<String>,
    initial_hint: Option<TypeHint>,
}

impl SessionBuilder<'static> {
    fn new(chain: impl Into<RuleChain>) -> Self {
        SessionBuilder {
            registry: RuleRegistry::global(),
            specs: chain.into().into_specs(),
            raw_messages: Vec::new(),
            attribute: "input".to_owned(),
            fail_fast: true,
            locale: None,
            initial_hint: None,
        }
    }
}

impl<'r> SessionBuilder<'r> {
    /// Display name substituted for `:field` in rendered messages.
    pub fn attribute(mut self, name: &str) -> Self {
        self.attribute = name.to_owned();
        self
    }

    /// Custom failure messages, positionally matched to the chain.
    /// A message may open with a `{i,j,k}` group to also cover those
    /// rule positions; uncovered positions fall back to the catalog.
    pub fn messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_messages = messages.into_iter().map(Into::into).collect();
        self
    }

    /// `true` (the default) stops the chain at the first failing rule;
    /// `false` evaluates every rule and collects all failures.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Explicit message locale for this session, taking precedence over
    /// the catalog's active locale.
    pub fn locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_owned());
        self
    }

    /// Starting type hint for the chain (e.g. [`TypeHint::File`] when
    /// the value is a file's byte size).
    pub fn hint(mut self, hint: TypeHint) -> Self {
        self.initial_hint = Some(hint);
        self
    }

    /// Validate against a specific registry instead of the process-wide
    /// default.
    pub fn registry<'b>(self, registry: &'b RuleRegistry) -> SessionBuilder<'b> {
        SessionBuilder {
            registry,
            specs: self.specs,
            raw_messages: self.raw_messages,
            attribute: self.attribute,
            fail_fast: self.fail_fast,
            locale: self.locale,
            initial_hint: self.initial_hint,
        }
    }

    pub fn build(self) -> Session<'r> {
        let custom_messages = compensate(&self.raw_messages, self.specs.len());
        Session {
            registry: self.registry,
            specs: self.specs,
            custom_messages,
            attribute: self.attribute,
            fail_fast: self.fail_fast,
            locale: self.locale,
            initial_hint: self.initial_hint,
            state: SessionState::Idle,
            value: None,
            records: Vec::new(),
        }
    }
}

/// One validation run-loop over one value and its rule chain.
///
/// A session owns the parsed chain, the failure policy, and one
/// execution record per distinct rule name. Records persist across
/// repeated [`validate()`](Self::validate) calls, which is what makes
/// re-checking an unchanged value free: a record that already ran
/// against an identical value answers from storage.
#[derive(Debug)]
pub struct Session<'r> {
    registry: &'r RuleRegistry,
    specs: Vec<RuleSpec>,
    custom_messages: Vec<Option<String>>,
    attribute: String,
    fail_fast: bool,
    locale: Option<String>,
    initial_hint: Option<TypeHint>,
    state: SessionState,
    value: Option<Value>,
    records: Vec<Record>,
}

impl Session<'static> {
    /// A session over the global registry with default settings
    /// (fail-fast, attribute `"input"`).
    #[must_use]
    pub fn new(chain: impl Into<RuleChain>) -> Self {
        Session::builder(chain).build()
    }

    pub fn builder(chain: impl Into<RuleChain>) -> SessionBuilder<'static> {
        SessionBuilder::new(chain)
    }
}

impl<'r> Session<'r> {
    /// Assign a value and validate it. This is the engine's primary entry
    /// point. Returns whether the value passed the whole chain.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] on configuration mistakes: an unknown rule
    /// name in the chain, a mandatory parameter missing, or a malformed
    /// parameter literal. These abort the run and are never recorded as
    /// a failed rule.
    pub fn check(&mut self, value: impl Into<Value>) -> Result<bool, RuleError> {
        self.value = Some(value.into());
        self.validate()
    }

    /// Re-run the chain against the current value. A no-op vacuous pass
    /// when no value has been assigned yet.
    ///
    /// # Errors
    ///
    /// Same conditions as [`check()`](Self::check).
    pub fn validate(&mut self) -> Result<bool, RuleError> {
        let Some(initial) = self.value.clone() else {
            return Ok(self.passes());
        };
        self.state = SessionState::Running;
        match self.run(initial) {
            Ok(passed) => {
                self.state = if passed {
                    SessionState::Passed
                } else {
                    SessionState::Failed
                };
                Ok(passed)
            }
            Err(err) => {
                // Configuration errors abort the run; earlier records
                // keep whatever their last completed run stored.
                self.state = SessionState::Idle;
                Err(err)
            }
        }
    }

    fn run(&mut self, initial: Value) -> Result<bool, RuleError> {
        let mut current = initial;
        let mut hint = self.initial_hint;

        for position in 0..self.specs.len() {
            let spec = self.specs[position].clone();

            // Memoized replay: same rule, same value. The stored
            // verdict, coercion, and hint stand, callback untouched.
            if let Some(index) = self.find_record(&spec.name) {
                if self.records[index].memo_hit(&current) {
                    let record = &self.records[index];
                    let passed = record.passed;
                    hint = record.hint_after;
                    if let Some(produced) = record.produced.clone() {
                        current = produced;
                    }
                    if !passed && self.fail_fast {
                        break;
                    }
                    continue;
                }
            }

            // Resolve before touching the records: an unknown rule is
            // fatal and must not leave a record behind.
            let callback =
                self.registry
                    .get_rule(&spec.name)
                    .ok_or_else(|| RuleError::UnknownRule {
                        name: spec.name.clone(),
                    })?;
            let outcome = callback(&current, spec.raw_params.as_deref(), hint)?;

            let passed = outcome.passes();
            let canonical = outcome.canonical().unwrap_or(&spec.name).to_owned();
            let hint_after = outcome.hint().or(hint);
            let produced = outcome.into_value();

            let message = if passed {
                None
            } else {
                Some(self.failure_message(position, &canonical, spec.raw_params.as_deref()))
            };

            let index = self.find_record(&spec.name).unwrap_or_else(|| {
                self.records.push(Record::new(&spec.name));
                self.records.len() - 1
            });
            let record = &mut self.records[index];
            record.canonical = canonical;
            record.passed = passed;
            record.tested = Some(current.clone());
            record.produced = Some(produced.clone());
            record.hint_after = hint_after;
            record.message = message;
            record.has_run = true;

            current = produced;
            hint = hint_after;

            if !passed && self.fail_fast {
                break;
            }
        }

        Ok(!self.records.iter().any(|r| r.has_run && !r.passed))
    }

    fn find_record(&self, rule_name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.rule_name == rule_name)
    }

    fn failure_message(
        &self,
        position: usize,
        canonical: &str,
        raw_params: Option<&str>,
    ) -> String {
        let template = self
            .custom_messages
            .get(position)
            .and_then(Option::as_ref)
            .cloned()
            .unwrap_or_else(|| self.registry.message(canonical, self.locale.as_deref()));
        render(&self.attribute, &template, raw_params)
    }

    /// No stored record failed.
    #[must_use]
    pub fn passes(&self) -> bool {
        !self.records.iter().any(|r| r.has_run && !r.passed)
    }

    #[must_use]
    pub fn fails(&self) -> bool {
        !self.passes()
    }

    /// `(rule name, rendered message)` for every failing record, in
    /// chain order.
    #[must_use]
    pub fn errors(&self) -> Vec<(&str, &str)> {
        self.records
            .iter()
            .filter(|r| r.has_run && !r.passed)
            .filter_map(|r| {
                r.message
                    .as_deref()
                    .map(|message| (r.rule_name.as_str(), message))
            })
            .collect()
    }

    /// The rendered failure messages, in chain order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors().into_iter().map(|(_, message)| message).collect()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The value most recently assigned via [`check()`](Self::check).
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}
