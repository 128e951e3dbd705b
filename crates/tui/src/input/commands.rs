//! Typed commands for each binding context.
//!
//! Bindings carry action names as strings; these enums are what the app
//! dispatches on. Every variant's name has an entry in the matching
//! `ActionRegistry`, and every registry entry has a variant.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An action name no command in the context answers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {context} command: '{name}'")]
pub struct UnknownCommand {
    pub context: &'static str,
    pub name: String,
}

macro_rules! commands {
    (
        $(#[$meta:meta])*
        $name:ident, $context:literal {
            $($variant:ident => $action:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every command in this context.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The action name used in bindings.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $action),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownCommand;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($action => Ok(Self::$variant),)+
                    _ => Err(UnknownCommand {
                        context: $context,
                        name: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

commands! {
    /// Commands available on every screen.
    GlobalCommand, "global" {
        Quit => "quit",
    }
}

commands! {
    /// Commands of the dashboard screen.
    DashboardCommand, "dashboard" {
        OpenRepo => "open_repo",
        CloneRepo => "clone_repo",
        CreateRepo => "create_repo",
    }
}

commands! {
    /// Commands of the workspace screen.
    WorkspaceCommand, "workspace" {
        AmendCommit => "amend_commit",
        Commit => "commit",
        Push => "push",
        Pull => "pull",
        Stash => "stash",
        Ignore => "ignore",
        OpenFile => "open_file",
        BranchManager => "branch_manager",
        StashManager => "stash_manager",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thalia_config::bindings::{
        ActionRegistry, DASHBOARD_ACTIONS, GLOBAL_ACTIONS, WORKSPACE_ACTIONS,
    };

    fn assert_matches_registry(names: &[&'static str], registry: &ActionRegistry) {
        for name in names {
            assert!(
                registry.contains(name),
                "{name} missing from {} registry",
                registry.context()
            );
        }
        for action in registry.actions() {
            assert!(
                names.contains(&action),
                "{action} has no {} command",
                registry.context()
            );
        }
    }

    #[test]
    fn test_commands_match_registries() {
        let global: Vec<_> = GlobalCommand::ALL.iter().map(|c| c.name()).collect();
        let dashboard: Vec<_> = DashboardCommand::ALL.iter().map(|c| c.name()).collect();
        let workspace: Vec<_> = WorkspaceCommand::ALL.iter().map(|c| c.name()).collect();
        assert_matches_registry(&global, &GLOBAL_ACTIONS);
        assert_matches_registry(&dashboard, &DASHBOARD_ACTIONS);
        assert_matches_registry(&workspace, &WORKSPACE_ACTIONS);
    }

    #[test]
    fn test_from_str_round_trips_names() {
        for command in WorkspaceCommand::ALL {
            assert_eq!(command.name().parse::<WorkspaceCommand>(), Ok(*command));
        }
    }

    #[test]
    fn test_unknown_command() {
        let err = "quit".parse::<DashboardCommand>().unwrap_err();
        assert_eq!(err.context, "dashboard");
        assert_eq!(err.to_string(), "Unknown dashboard command: 'quit'");
    }
}
