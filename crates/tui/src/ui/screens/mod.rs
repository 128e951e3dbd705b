//! Screen renderers.

pub mod dashboard;
pub mod workspace;

pub use dashboard::{DashboardLayout, DashboardView, render_dashboard};
pub use workspace::{WorkspaceLayout, WorkspacePanel, render_workspace};
