use std::collections::HashMap;
use std::sync::RwLock;

/// The compiled-in fallback locale.
pub const DEFAULT_LOCALE: &str = "en";

/// Last-resort template when neither the rule nor the locale's `default`
/// key carries a message.
pub(crate) const GENERIC_MESSAGE: &str = "The input value is not valid";

/// Per-locale store of rule-name → message-template bindings.
///
/// Lookup cascades: requested locale's rule entry, that locale's
/// `"default"` entry, the same two under [`DEFAULT_LOCALE`], then the
/// generic built-in template. Merges are shallow: existing keys absent
/// from an incoming map survive.
///
/// Interior locking makes a shared `&MessageCatalog` usable for both
/// lookup and registration; writers take the lock only for the merge
/// itself.
#[derive(Debug, Default)]
pub struct MessageCatalog {
    locales: RwLock<HashMap<String, HashMap<String, String>>>,
    active: RwLock<Option<String>>,
}

impl MessageCatalog {
    /// An empty catalog with no templates at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog pre-loaded with the English templates for every
    /// built-in rule.
    #[must_use]
    pub fn with_defaults() -> Self {
        let catalog = Self::new();
        catalog.put_messages(default_templates(), None);
        catalog
    }

    /// Resolve the template for `rule`, applying the locale cascade.
    #[must_use]
    pub fn message(&self, rule: &str, locale: Option<&str>) -> String {
        let locales = self.locales.read().expect("catalog lock poisoned");
        let requested = self.resolve_locale(locale);

        for loc in [requested.as_str(), DEFAULT_LOCALE] {
            if let Some(map) = locales.get(loc) {
                if let Some(template) = map.get(rule).or_else(|| map.get("default")) {
                    return template.clone();
                }
            }
            if loc == DEFAULT_LOCALE {
                break;
            }
        }
        GENERIC_MESSAGE.to_owned()
    }

    /// The full template map for a locale, falling back to
    /// [`DEFAULT_LOCALE`] when the requested locale is absent.
    #[must_use]
    pub fn messages(&self, locale: Option<&str>) -> HashMap<String, String> {
        let locales = self.locales.read().expect("catalog lock poisoned");
        let requested = self.resolve_locale(locale);
        locales
            .get(requested.as_str())
            .or_else(|| locales.get(DEFAULT_LOCALE))
            .cloned()
            .unwrap_or_default()
    }

    /// Shallow-merge templates into a locale (the active one when
    /// `locale` is `None`).
    pub fn put_messages<I, K, V>(&self, messages: I, locale: Option<&str>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let target = self.resolve_locale(locale);
        let mut locales = self.locales.write().expect("catalog lock poisoned");
        let map = locales.entry(target).or_default();
        for (rule, template) in messages {
            map.insert(rule.into(), template.into());
        }
    }

    /// Alias of [`put_messages`](Self::put_messages) with the locale
    /// first, matching the wording used when loading a translation pack.
    pub fn translate<I, K, V>(&self, locale: &str, messages: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.put_messages(messages, Some(locale));
    }

    /// Bind a single rule's template in a locale.
    pub fn add_message(&self, rule: &str, template: &str, locale: Option<&str>) {
        self.put_messages([(rule, template)], locale);
    }

    /// Set the process-wide active locale. An explicit locale on a
    /// validation call still takes precedence.
    pub fn set_active_locale(&self, locale: &str) {
        *self.active.write().expect("catalog lock poisoned") = Some(locale.to_owned());
    }

    #[must_use]
    pub fn active_locale(&self) -> String {
        self.active
            .read()
            .expect("catalog lock poisoned")
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE.to_owned())
    }

    fn resolve_locale(&self, explicit: Option<&str>) -> String {
        explicit.map_or_else(|| self.active_locale(), str::to_owned)
    }
}

#[cfg(feature = "serde")]
impl MessageCatalog {
    /// Merge a `{"rule": "template", ...}` JSON object into a locale.
    ///
    /// # Errors
    ///
    /// Returns the underlying decode error when `json` is not a string
    /// map.
    pub fn merge_json(&self, locale: Option<&str>, json: &str) -> Result<(), serde_json::Error> {
        let map: HashMap<String, String> = serde_json::from_str(json)?;
        self.put_messages(map, locale);
        Ok(())
    }
}

/// English templates for the built-in rules.
fn default_templates() -> Vec<(&'static str, &'static str)> {
    vec![
        ("default", "The :field field is not valid"),
        ("required", "The :field field is required"),
        ("number", "The :field field must be a number"),
        ("integer", "The :field field must be an integer"),
        ("int", "The :field field must be an integer"),
        ("min", "The :field field must be at least :arg0"),
        ("max", "The :field field must be less than or equal to :arg0"),
        ("min_file_size", "The :field file must be at least :arg0"),
        ("max_file_size", "The :field file may not be larger than :arg0"),
        ("between", "The :field field must be between :arg0 and :arg1"),
        ("one_of", "The :field field must be one of ...arg"),
        ("contains", "The :field field must contain :arg0"),
        ("start_with", "The :field field must start with :arg0"),
        ("end_with", "The :field field must end with :arg0"),
        ("email", "The :field field must be a valid email address"),
        ("modulo", "The :field field must be a multiple of :arg0"),
        ("mod", "The :field field must be a multiple of :arg0"),
    ]
}
