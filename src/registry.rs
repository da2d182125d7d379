use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use crate::messages::{MessageCatalog, GENERIC_MESSAGE};
use crate::types::{Outcome, RuleError, TypeHint, Value};

/// The callback contract every rule implements.
///
/// Callbacks receive the working value, the rule's raw parameter string,
/// and the chain's working type hint. They are pure with respect to
/// global state and return their verdict synchronously; a `Err` is a
/// configuration error (missing mandatory parameter, malformed size
/// literal) and aborts the whole validation, never a failed rule.
pub type RuleCallback =
    Arc<dyn Fn(&Value, Option<&str>, Option<TypeHint>) -> Result<Outcome, RuleError> + Send + Sync>;

/// The bag of rule-name → callback bindings, plus the message catalog
/// their failure templates live in.
///
/// Registration is idempotent-overwrite: re-registering a name replaces
/// the previous binding, last write wins. Lookup never errors; the
/// execution pipeline turns a miss into
/// [`RuleError::UnknownRule`](crate::RuleError::UnknownRule).
///
/// One process-wide instance pre-loaded with the built-in rules is
/// available via [`RuleRegistry::global()`]; tests and embedders that
/// need isolation construct their own and hand it to sessions.
///
/// # Example
///
/// ```
/// use veto::{Outcome, RuleRegistry};
///
/// let registry = RuleRegistry::with_builtins();
/// registry.rule(
///     "is_even",
///     |value, _params, _hint| {
///         let even = value.to_i64().is_some_and(|n| n % 2 == 0);
///         Ok(Outcome::new(even, value.clone()))
///     },
///     Some("The :field field must be even"),
/// );
/// assert!(registry.has_rule("is_even"));
/// assert!(registry.has_rule("required"));
/// ```
pub struct RuleRegistry {
    rules: RwLock<HashMap<String, RuleCallback>>,
    catalog: MessageCatalog,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: LazyLock<RuleRegistry> = LazyLock::new(RuleRegistry::with_builtins);

impl RuleRegistry {
    /// A registry with no rules and the default English templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(HashMap::new()),
            catalog: MessageCatalog::with_defaults(),
        }
    }

    /// A registry pre-loaded with the built-in rules.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        crate::rules::install(&registry);
        registry
    }

    /// The process-wide default registry sessions fall back to.
    #[must_use]
    pub fn global() -> &'static RuleRegistry {
        &GLOBAL
    }

    /// Bind a callback to a rule name, replacing any previous binding.
    pub fn add_rule<F>(&self, name: &str, callback: F)
    where
        F: Fn(&Value, Option<&str>, Option<TypeHint>) -> Result<Outcome, RuleError>
            + Send
            + Sync
            + 'static,
    {
        self.add_rule_arc(name, Arc::new(callback));
    }

    /// [`add_rule`](Self::add_rule) for an already-shared callback, used
    /// when several names point at one implementation (`integer`/`int`).
    pub fn add_rule_arc(&self, name: &str, callback: RuleCallback) {
        self.rules
            .write()
            .expect("registry lock poisoned")
            .insert(name.to_owned(), callback);
    }

    /// Bind a rule's failure template in the catalog.
    pub fn add_message(&self, name: &str, template: &str, locale: Option<&str>) {
        self.catalog.add_message(name, template, locale);
    }

    /// Convenience: register callback and message together. Without a
    /// message the rule reports the generic invalid-input template.
    pub fn rule<F>(&self, name: &str, callback: F, message: Option<&str>)
    where
        F: Fn(&Value, Option<&str>, Option<TypeHint>) -> Result<Outcome, RuleError>
            + Send
            + Sync
            + 'static,
    {
        self.add_rule(name, callback);
        self.add_message(name, message.unwrap_or(GENERIC_MESSAGE), None);
    }

    #[must_use]
    pub fn has_rule(&self, name: &str) -> bool {
        self.rules
            .read()
            .expect("registry lock poisoned")
            .contains_key(name)
    }

    /// Look up a rule's callback. `None` for unknown names; turning
    /// that into a fatal error is the pipeline's responsibility.
    #[must_use]
    pub fn get_rule(&self, name: &str) -> Option<RuleCallback> {
        self.rules
            .read()
            .expect("registry lock poisoned")
            .get(name)
            .cloned()
    }

    /// Resolve a rule's message template through the owned catalog.
    #[must_use]
    pub fn message(&self, name: &str, locale: Option<&str>) -> String {
        self.catalog.message(name, locale)
    }

    /// The locale store backing this registry.
    #[must_use]
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.rules.read().expect("registry lock poisoned").len();
        f.debug_struct("RuleRegistry").field("rules", &count).finish()
    }
}
