//! Static portal menu and the role-based menu filter.
//!
//! An entry without a role tag is shown to everyone. A tagged entry is shown
//! when the caller's role matches one of the tags, either verbatim or after
//! `faculty`/`teacher` normalization on both sides. Filtering keeps the static
//! order and never emits an entry twice.

use serde::Serialize;

use crate::roles::{normalize_role_str, slugs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    /// Roles allowed to see the entry; `None` means everyone.
    pub roles: Option<&'static [&'static str]>,
}

impl MenuEntry {
    const fn open(key: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            key,
            label,
            path,
            roles: None,
        }
    }

    const fn restricted(
        key: &'static str,
        label: &'static str,
        path: &'static str,
        roles: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            path,
            roles: Some(roles),
        }
    }

    /// Whether this entry is visible to the given raw role identifier.
    pub fn is_visible_to(&self, role: Option<&str>) -> bool {
        let Some(tags) = self.roles else {
            return true;
        };
        let Some(role) = role else {
            return false;
        };

        let normalized = normalize_role_str(role);
        tags.iter()
            .any(|tag| *tag == role || *tag == normalized || normalize_role_str(tag) == normalized)
    }
}

/// The portal's side navigation, in display order.
pub static PORTAL_MENU: &[MenuEntry] = &[
    MenuEntry::open("dashboard", "Dashboard", "/dashboard"),
    MenuEntry::restricted(
        "academics",
        "Academics",
        "/academics",
        &[slugs::STUDENT, slugs::TEACHER],
    ),
    MenuEntry::restricted(
        "assignments",
        "Assignments",
        "/assignments",
        &[slugs::STUDENT, slugs::TEACHER],
    ),
    MenuEntry::restricted(
        "attendance",
        "Attendance",
        "/attendance",
        &[slugs::STUDENT, slugs::FACULTY],
    ),
    MenuEntry::restricted(
        "fees",
        "Fees & Payments",
        "/fees",
        &[slugs::STUDENT, slugs::TEACHER, slugs::ADMIN, slugs::SUPER_ADMIN],
    ),
    MenuEntry::restricted("children", "My Children", "/children", &[slugs::PARENT]),
    MenuEntry::restricted("hostel", "Hostel", "/hostel", &[slugs::STUDENT]),
    MenuEntry::restricted(
        "certificates",
        "Certificates",
        "/certificates",
        &[slugs::STUDENT, slugs::TEACHER, slugs::ALUMNI],
    ),
    MenuEntry::restricted(
        "facilities",
        "Facility Requests",
        "/facilities",
        &[slugs::STUDENT, slugs::TEACHER],
    ),
    MenuEntry::restricted(
        "forums",
        "Forums",
        "/forums",
        &[slugs::STUDENT, slugs::TEACHER, slugs::ALUMNI],
    ),
    MenuEntry::open("events", "Events", "/events"),
    MenuEntry::restricted(
        "departments",
        "Departments",
        "/departments",
        &[slugs::FACULTY, slugs::ADMIN, slugs::SUPER_ADMIN],
    ),
    MenuEntry::restricted("alumni", "Alumni Network", "/alumni", &[slugs::ALUMNI]),
    MenuEntry::open("support", "Support", "/support"),
    MenuEntry::restricted(
        "administration",
        "Administration",
        "/admin",
        &[slugs::ADMIN, slugs::SUPER_ADMIN],
    ),
    MenuEntry::open("assistant", "AI Assistant", "/assistant"),
];

/// Returns the entries visible to `role`, preserving their order.
pub fn visible_entries<'a>(role: Option<&str>, entries: &'a [MenuEntry]) -> Vec<&'a MenuEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_visible_to(role))
        .collect()
}
