use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use campus_core::{CapabilitySet, DepartmentCapabilitySet, DepartmentRole, Role};
use campus_models::{
    DepartmentPermissionsResponse, ErrorResponse, HealthResponse, MenuItem, NavigationResponse,
    PermissionsResponse, RoleCapabilitiesResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health_check,
        crate::modules::permissions::controller::get_my_permissions,
        crate::modules::permissions::controller::get_role_capabilities,
        crate::modules::departments::controller::get_my_department_permissions,
        crate::modules::navigation::controller::get_navigation,
    ),
    components(
        schemas(
            CapabilitySet,
            DepartmentCapabilitySet,
            Role,
            DepartmentRole,
            PermissionsResponse,
            RoleCapabilitiesResponse,
            DepartmentPermissionsResponse,
            MenuItem,
            NavigationResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Permissions", description = "Portal capabilities resolved from the caller's role"),
        (name = "Departments", description = "Capabilities inside a department"),
        (name = "Navigation", description = "Role-filtered portal menu")
    ),
    info(
        title = "Campus Access API",
        version = "0.1.0",
        description = "Role-based capability and navigation decisions for the college portal.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
