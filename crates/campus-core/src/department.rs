//! Department role → capability policy table.
//!
//! Independent of the portal-wide [`CapabilitySet`](crate::CapabilitySet):
//! a student-facing teacher can still be a department `hod`.
//!
//! `hod` and `admin` resolve to the same set. Every active member, managers
//! included, can message, view events, upload files and see the member list.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::capabilities::capability_set;
use crate::roles::DepartmentRole;

capability_set! {
    /// Capabilities inside one department, resolved from a [`DepartmentRole`].
    DepartmentCapabilitySet {
        create_events,
        edit_events,
        delete_events,
        /// Pin and unpin channel messages
        pin_messages,
        manage_members,
        moderate_discussions,
        send_messages,
        view_events,
        upload_files,
        view_members,
    }
}

const MEMBER: DepartmentCapabilitySet = DepartmentCapabilitySet {
    send_messages: true,
    view_events: true,
    upload_files: true,
    view_members: true,
    ..DepartmentCapabilitySet::NONE
};

const MANAGER: DepartmentCapabilitySet = DepartmentCapabilitySet {
    create_events: true,
    edit_events: true,
    delete_events: true,
    pin_messages: true,
    manage_members: true,
    moderate_discussions: true,
    ..MEMBER
};

pub const fn department_capabilities_for_role(role: DepartmentRole) -> DepartmentCapabilitySet {
    if role.is_manager() { MANAGER } else { MEMBER }
}

/// Resolves department capabilities for a raw membership role string.
///
/// Absent or unrecognized roles resolve to [`DepartmentCapabilitySet::NONE`].
pub fn department_capabilities_for(role: Option<&str>) -> DepartmentCapabilitySet {
    role.and_then(|r| r.parse::<DepartmentRole>().ok())
        .map(department_capabilities_for_role)
        .unwrap_or(DepartmentCapabilitySet::NONE)
}
