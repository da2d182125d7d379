use super::Value;

/// The working type hint a coercing rule hands to the rules after it in
/// the same chain.
///
/// `number`/`integer` set [`TypeHint::Number`] after coercing; a caller
/// validating a file's byte size starts its session under
/// [`TypeHint::File`], which makes `min`/`max` parse their parameter as a
/// size literal and report under the `min_file_size`/`max_file_size`
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    Number,
    File,
}

/// What a rule callback returns: the verdict, the (possibly coerced)
/// value every subsequent rule in the chain will see, and optional
/// aliasing/type information.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Outcome {
    passes: bool,
    value: Value,
    canonical: Option<String>,
    hint: Option<TypeHint>,
}

impl Outcome {
    /// A passing outcome that leaves the value untouched.
    pub fn pass(value: Value) -> Self {
        Self::new(true, value)
    }

    /// A failing outcome that leaves the value untouched.
    pub fn fail(value: Value) -> Self {
        Self::new(false, value)
    }

    pub fn new(passes: bool, value: Value) -> Self {
        Self {
            passes,
            value,
            canonical: None,
            hint: None,
        }
    }

    /// Redirect message lookup to a different canonical rule name
    /// (e.g. `min` reporting as `min_file_size` for a file value).
    pub fn with_canonical(mut self, name: impl Into<String>) -> Self {
        self.canonical = Some(name.into());
        self
    }

    /// Update the working type hint for subsequent rules.
    pub fn with_hint(mut self, hint: TypeHint) -> Self {
        self.hint = Some(hint);
        self
    }

    #[must_use]
    pub fn passes(&self) -> bool {
        self.passes
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    #[must_use]
    pub fn canonical(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    #[must_use]
    pub fn hint(&self) -> Option<TypeHint> {
        self.hint
    }
}
