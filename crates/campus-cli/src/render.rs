//! Plain-text rendering of capability sets and menus.

use campus_core::navigation::{PORTAL_MENU, visible_entries};
use campus_core::{CapabilitySet, DepartmentCapabilitySet, Role};

fn flag_table(flags: &[(&'static str, bool)]) -> String {
    let width = flags.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    flags
        .iter()
        .map(|(name, granted)| {
            let mark = if *granted { "yes" } else { "no" };
            format!("  {:<width$}  {}", name, mark, width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn role_heading(role: &str) -> String {
    match Role::parse_optional(Some(role)) {
        Some(parsed) if parsed.normalized() != parsed => {
            format!("Role: {} (resolved as {})", role, parsed.normalized())
        }
        Some(_) => format!("Role: {}", role),
        None => format!("Role: {} (unrecognized, everything denied)", role),
    }
}

/// Renders the portal capability table for a raw role identifier.
pub fn capabilities(role: &str, caps: &CapabilitySet) -> String {
    format!("{}\n{}", role_heading(role), flag_table(&caps.flags()))
}

/// Renders the department capability table for a raw membership role.
pub fn department_capabilities(role: &str, caps: &DepartmentCapabilitySet) -> String {
    let heading = if caps.is_empty() {
        format!("Department role: {} (unrecognized, everything denied)", role)
    } else {
        format!("Department role: {}", role)
    };
    format!("{}\n{}", heading, flag_table(&caps.flags()))
}

/// Renders the menu visible to `role`, one entry per line.
pub fn menu(role: Option<&str>) -> String {
    let heading = match role {
        Some(role) => format!("Menu for {}", role),
        None => "Menu for anonymous visitor".to_string(),
    };
    let lines = visible_entries(role, PORTAL_MENU)
        .into_iter()
        .map(|entry| format!("  {:<16} {}", entry.label, entry.path))
        .collect::<Vec<_>>();
    format!("{}\n{}", heading, lines.join("\n"))
}
