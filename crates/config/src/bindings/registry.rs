//! Static action registries, one per UI context.
//!
//! Invariants:
//! - Registries are fixed at compile time and never mutated.
//! - Every description is non-empty.

use super::BindingSpec;

/// Mapping from action name to human-readable description for one context.
#[derive(Debug)]
pub struct ActionRegistry {
    context: &'static str,
    actions: &'static [(&'static str, &'static str)],
}

impl ActionRegistry {
    /// Build a registry from a static table.
    pub const fn new(
        context: &'static str,
        actions: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { context, actions }
    }

    /// Context name, e.g. `"dashboard"`.
    pub fn context(&self) -> &'static str {
        self.context
    }

    /// Description of `action`, or `None` when the action is unknown here.
    pub fn describe(&self, action: &str) -> Option<&'static str> {
        self.actions
            .iter()
            .find(|(name, _)| *name == action)
            .map(|(_, description)| *description)
    }

    /// Whether `action` is registered in this context.
    pub fn contains(&self, action: &str) -> bool {
        self.describe(action).is_some()
    }

    /// Registered action names in declaration order.
    pub fn actions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.actions.iter().map(|(name, _)| *name)
    }
}

/// Global actions, available on every screen.
pub static GLOBAL_ACTIONS: ActionRegistry =
    ActionRegistry::new("global", &[("quit", "Quit the app")]);

/// Dashboard actions.
pub static DASHBOARD_ACTIONS: ActionRegistry = ActionRegistry::new(
    "dashboard",
    &[
        ("open_repo", "Open Repository"),
        ("clone_repo", "Clone Repository"),
        ("create_repo", "Create Repository"),
    ],
);

/// Workspace actions.
pub static WORKSPACE_ACTIONS: ActionRegistry = ActionRegistry::new(
    "workspace",
    &[
        ("amend_commit", "Amend Last Commit"),
        ("commit", "Commit Changes"),
        ("push", "Push Changes"),
        ("pull", "Pull Changes"),
        ("stash", "Stash Changes"),
        ("ignore", "Ignore File"),
        ("open_file", "Open File"),
        ("branch_manager", "Open Branch Manager"),
        ("stash_manager", "Open Stash Manager"),
    ],
);

/// A UI context that owns a binding set.
pub trait BindingContext {
    /// The action registry for this context.
    fn registry() -> &'static ActionRegistry;

    /// Bindings used when settings do not provide any.
    fn default_bindings() -> Vec<BindingSpec>;
}

/// Bindings active on every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalContext;

/// Bindings of the dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardContext;

/// Bindings of the workspace screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceContext;

impl BindingContext for GlobalContext {
    fn registry() -> &'static ActionRegistry {
        &GLOBAL_ACTIONS
    }

    fn default_bindings() -> Vec<BindingSpec> {
        vec![BindingSpec::new(["q", "ctrl+c"], "quit", true)]
    }
}

impl BindingContext for DashboardContext {
    fn registry() -> &'static ActionRegistry {
        &DASHBOARD_ACTIONS
    }

    fn default_bindings() -> Vec<BindingSpec> {
        vec![
            BindingSpec::new("o", "open_repo", true),
            BindingSpec::new("c", "clone_repo", true),
            BindingSpec::new("n", "create_repo", true),
        ]
    }
}

impl BindingContext for WorkspaceContext {
    fn registry() -> &'static ActionRegistry {
        &WORKSPACE_ACTIONS
    }

    fn default_bindings() -> Vec<BindingSpec> {
        [
            ("a", "amend_commit"),
            ("c", "commit"),
            ("p", "push"),
            ("l", "pull"),
            ("s", "stash"),
            ("i", "ignore"),
            ("o", "open_file"),
            ("b", "branch_manager"),
            ("t", "stash_manager"),
        ]
        .into_iter()
        .map(|(key, action)| BindingSpec::new(key, action, false))
        .collect()
    }
}
