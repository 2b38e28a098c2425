use campus_core::access::resolve_user_access;
use campus_core::navigation::{PORTAL_MENU, visible_entries};
use campus_models::{MenuItem, NavigationResponse};
use tracing::instrument;
use uuid::Uuid;

use crate::state::Directory;

pub struct NavigationService;

impl NavigationService {
    /// Filters the portal menu by the caller's stored role.
    ///
    /// Callers without a resolvable role see only the untagged entries.
    #[instrument(skip(directory))]
    pub async fn menu_for(directory: &dyn Directory, user_id: Uuid) -> NavigationResponse {
        let access = resolve_user_access(directory, Some(user_id)).await;
        Self::menu_for_role(access.role)
    }

    pub fn menu_for_role(role: Option<String>) -> NavigationResponse {
        let items = visible_entries(role.as_deref(), PORTAL_MENU)
            .into_iter()
            .map(MenuItem::from)
            .collect();

        NavigationResponse { role, items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(response: &NavigationResponse) -> Vec<&str> {
        response.items.iter().map(|item| item.key.as_str()).collect()
    }

    #[test]
    fn test_alumni_menu() {
        let menu = NavigationService::menu_for_role(Some("alumni".to_string()));
        assert_eq!(
            keys(&menu),
            vec![
                "dashboard",
                "certificates",
                "forums",
                "events",
                "alumni",
                "support",
                "assistant"
            ]
        );
    }

    #[test]
    fn test_unknown_role_gets_open_entries() {
        let menu = NavigationService::menu_for_role(Some("janitor".to_string()));
        assert_eq!(keys(&menu), vec!["dashboard", "events", "support", "assistant"]);
        assert_eq!(menu.role.as_deref(), Some("janitor"));
    }
}
