//! Page layouts.

mod dashboard;

pub use dashboard::{DashboardShell, DashboardShellProps};
