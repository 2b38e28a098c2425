//! Role → capability policy table.
//!
//! A [`CapabilitySet`] is the complete answer to "what may this identity do in
//! the portal". It is derived from the role alone, is always total, and is
//! never patched in place: a new identity gets a freshly resolved set.
//!
//! # Policy
//!
//! | Role | Capabilities beyond baseline |
//! |------|------------------------------|
//! | `student` | assignments (submit), grades, attendance, forums, fees, payments, certificates, hostel, facilities |
//! | `teacher` / `faculty` | assignments (submit + review), grades (view + assign), attendance (mark + view), materials, forums, fees (view + review), certificates, facilities |
//! | `parent` | child grades, child attendance, child fees, child payments |
//! | `alumni` | forums, certificates, contributions, alumni events |
//! | `admin` / `super_admin` | baseline only |
//! | unknown / absent | nothing, not even baseline |
//!
//! Baseline is dashboard, branding and support-ticket creation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::roles::Role;

/// Defines a struct of named boolean flags with default-deny helpers.
macro_rules! capability_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: bool,
            )+
        }

        impl $name {
            /// The default-deny set: every flag false.
            pub const NONE: Self = Self {
                $( $field: false, )+
            };

            /// Flag names in declaration order.
            pub const FLAG_NAMES: &'static [&'static str] = &[$( stringify!($field) ),+];

            /// Every flag with its value, in declaration order.
            pub fn flags(&self) -> Vec<(&'static str, bool)> {
                vec![$( (stringify!($field), self.$field) ),+]
            }

            /// Names of the flags that are granted.
            pub fn granted(&self) -> Vec<&'static str> {
                self.flags()
                    .into_iter()
                    .filter(|(_, granted)| *granted)
                    .map(|(name, _)| name)
                    .collect()
            }

            /// Looks a flag up by name. Unknown names are never granted.
            pub fn get(&self, flag: &str) -> bool {
                match flag {
                    $( stringify!($field) => self.$field, )+
                    _ => false,
                }
            }

            pub fn is_empty(&self) -> bool {
                *self == Self::NONE
            }
        }
    };
}

pub(crate) use capability_set;

capability_set! {
    /// Portal capabilities resolved from a user's primary [`Role`].
    CapabilitySet {
        /// Baseline: dashboard access
        view_dashboard,
        /// Baseline: college branding
        view_branding,
        /// Baseline: raise a support ticket
        create_support_ticket,
        submit_assignments,
        review_assignments,
        view_grades,
        assign_grades,
        mark_attendance,
        view_attendance,
        upload_materials,
        join_forums,
        view_fees,
        review_fees,
        make_payments,
        request_certificates,
        apply_hostel,
        facility_requests,
        view_child_grades,
        view_child_attendance,
        view_child_fees,
        make_child_payments,
        alumni_contributions,
        alumni_events,
    }
}

const BASELINE: CapabilitySet = CapabilitySet {
    view_dashboard: true,
    view_branding: true,
    create_support_ticket: true,
    ..CapabilitySet::NONE
};

const STUDENT: CapabilitySet = CapabilitySet {
    submit_assignments: true,
    view_grades: true,
    view_attendance: true,
    join_forums: true,
    view_fees: true,
    make_payments: true,
    request_certificates: true,
    apply_hostel: true,
    facility_requests: true,
    ..BASELINE
};

const TEACHER: CapabilitySet = CapabilitySet {
    submit_assignments: true,
    review_assignments: true,
    view_grades: true,
    assign_grades: true,
    mark_attendance: true,
    view_attendance: true,
    upload_materials: true,
    join_forums: true,
    view_fees: true,
    review_fees: true,
    request_certificates: true,
    facility_requests: true,
    ..BASELINE
};

const PARENT: CapabilitySet = CapabilitySet {
    view_child_grades: true,
    view_child_attendance: true,
    view_child_fees: true,
    make_child_payments: true,
    ..BASELINE
};

const ALUMNI: CapabilitySet = CapabilitySet {
    join_forums: true,
    request_certificates: true,
    alumni_contributions: true,
    alumni_events: true,
    ..BASELINE
};

/// Resolves the capability set for a known role.
pub const fn capabilities_for_role(role: Role) -> CapabilitySet {
    match role.normalized() {
        Role::Student => STUDENT,
        Role::Teacher => TEACHER,
        Role::Parent => PARENT,
        Role::Alumni => ALUMNI,
        Role::Admin | Role::SuperAdmin | Role::Faculty => BASELINE,
    }
}

/// Resolves the capability set for a raw role identifier.
///
/// Absent or unrecognized identifiers resolve to [`CapabilitySet::NONE`].
pub fn capabilities_for(role: Option<&str>) -> CapabilitySet {
    Role::parse_optional(role)
        .map(capabilities_for_role)
        .unwrap_or(CapabilitySet::NONE)
}
