//! Key binding specifications and their resolution.
//!
//! Responsibilities:
//! - Define the user-facing binding shape (`BindingSpec`, `KeySpec`).
//! - Define per-context binding sets (`ScreenBindings<C>`) and their action
//!   registries (see `registry`).
//! - Resolve a dotted settings path into normalized bindings (see `resolver`).
//!
//! Does NOT handle:
//! - Turning key names into terminal key events (that's in the TUI crate).
//! - Dispatching actions.
//!
//! Invariants:
//! - A binding set is built once at settings-load time and never mutated.
//! - Alternative key sets hold two or three identifiers.

pub mod registry;
pub mod resolver;

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use registry::{
    ActionRegistry, BindingContext, DASHBOARD_ACTIONS, DashboardContext, GLOBAL_ACTIONS,
    GlobalContext, WORKSPACE_ACTIONS, WorkspaceContext,
};
pub use resolver::{resolve_bindings, resolve_set};

/// Errors raised while resolving binding sets.
///
/// These indicate authoring mistakes in settings and abort the whole
/// resolution call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    /// A key part was empty after trimming, e.g. `"q,"`.
    #[error("Can not bind empty string in '{binding}'")]
    EmptyKey {
        /// The joined key string that contained the empty part
        binding: String,
    },

    /// An alternative key set had the wrong number of entries.
    #[error("Binding for '{action}' must list two or three alternative keys, found {count}")]
    AlternativeCount {
        /// The action of the offending binding
        action: String,
        /// Number of keys supplied
        count: usize,
    },
}

/// The key part of a binding: one identifier or a set of alternatives.
///
/// A single identifier may itself contain comma-separated alternates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    /// A single key identifier, e.g. `"q"` or `"q,ctrl+c"`.
    Single(String),
    /// Equivalent alternatives, e.g. `["q", "ctrl+c"]`.
    Alternatives(Vec<String>),
}

impl KeySpec {
    /// Join the key into the comma-separated form.
    pub fn joined(&self, action: &str) -> Result<String, BindingError> {
        match self {
            Self::Single(key) => Ok(key.clone()),
            Self::Alternatives(keys) if (2..=3).contains(&keys.len()) => Ok(keys.join(",")),
            Self::Alternatives(keys) => Err(BindingError::AlternativeCount {
                action: action.to_string(),
                count: keys.len(),
            }),
        }
    }
}

impl From<&str> for KeySpec {
    fn from(key: &str) -> Self {
        Self::Single(key.to_string())
    }
}

impl<const N: usize> From<[&str; N]> for KeySpec {
    fn from(keys: [&str; N]) -> Self {
        Self::Alternatives(keys.iter().map(|k| (*k).to_string()).collect())
    }
}

fn default_show() -> bool {
    true
}

/// One user-authored binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingSpec {
    /// Key identifier(s) that trigger the action.
    pub key: KeySpec,
    /// Action name; empty means unbound.
    #[serde(default)]
    pub action: String,
    /// Whether the binding appears in the footer.
    #[serde(default = "default_show")]
    pub show: bool,
}

impl BindingSpec {
    /// Create a binding.
    pub fn new(key: impl Into<KeySpec>, action: impl Into<String>, show: bool) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            show,
        }
    }
}

/// A binding ready for the UI: one key, one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBinding {
    /// Normalized key identifier, single characters expanded to names.
    pub key: String,
    /// Action name, present in the context's registry.
    pub action: String,
    /// Human-readable description taken from the registry.
    pub description: &'static str,
    /// Whether the binding appears in the footer.
    pub show: bool,
}

/// Object-safe view over a context's bindings and its action registry.
pub trait BindingSet {
    /// The registry describing the actions valid in this context.
    fn registry(&self) -> &'static ActionRegistry;
    /// The bindings in authored order.
    fn specs(&self) -> &[BindingSpec];
}

/// The binding list for one UI context.
///
/// The context type `C` attaches the action registry at compile time.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields, bound = "")]
pub struct ScreenBindings<C: BindingContext> {
    /// Bindings in authored order.
    pub bindings: Vec<BindingSpec>,
    #[serde(skip)]
    context: PhantomData<fn() -> C>,
}

impl<C: BindingContext> ScreenBindings<C> {
    /// Build a binding set for context `C`.
    pub fn new(bindings: Vec<BindingSpec>) -> Self {
        Self {
            bindings,
            context: PhantomData,
        }
    }
}

impl<C: BindingContext> Default for ScreenBindings<C> {
    fn default() -> Self {
        Self::new(C::default_bindings())
    }
}

impl<C: BindingContext> Clone for ScreenBindings<C> {
    fn clone(&self) -> Self {
        Self::new(self.bindings.clone())
    }
}

impl<C: BindingContext> PartialEq for ScreenBindings<C> {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl<C: BindingContext> fmt::Debug for ScreenBindings<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenBindings")
            .field("context", &C::registry().context())
            .field("bindings", &self.bindings)
            .finish()
    }
}

impl<C: BindingContext> BindingSet for ScreenBindings<C> {
    fn registry(&self) -> &'static ActionRegistry {
        C::registry()
    }

    fn specs(&self) -> &[BindingSpec] {
        &self.bindings
    }
}
