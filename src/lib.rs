//! Rule-chain validation with localized, templated messages.
//!
//! A value is checked against an ordered chain of named rules (the
//! string DSL `"required|between:18,40"` or an explicit list) and each
//! failure renders a locale-aware message with `:field`/`:argN`
//! placeholders. Rules live in a [`RuleRegistry`]; custom rules plug in
//! through the same callback contract the built-ins use.

mod error;
mod messages;
mod params;
mod parse;
mod registry;
mod rules;
mod session;
mod types;

pub use error::VetoError;
pub use messages::{compensate, render, MessageCatalog, DEFAULT_LOCALE};
pub use params::{split_params, unescape};
pub use parse::parse as parse_chain;
pub use registry::{RuleCallback, RuleRegistry};
pub use session::{Session, SessionBuilder, SessionState};
pub use types::{Outcome, RuleChain, RuleError, RuleSpec, TypeHint, Value};

/// One-shot validation of a value against a chain, on the global
/// registry with default session settings.
///
/// # Errors
///
/// Returns [`RuleError`] on configuration mistakes in the chain.
///
/// # Example
///
/// ```
/// assert!(veto::check("25", "required|number|between:18,40").unwrap());
/// assert!(!veto::check("17", "required|number|between:18,40").unwrap());
/// ```
pub fn check(
    value: impl Into<Value>,
    chain: impl Into<RuleChain>,
) -> Result<bool, RuleError> {
    Session::new(chain).check(value)
}
