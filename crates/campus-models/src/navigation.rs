use campus_core::MenuEntry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub key: String,
    pub label: String,
    pub path: String,
}

impl From<&MenuEntry> for MenuItem {
    fn from(entry: &MenuEntry) -> Self {
        Self {
            key: entry.key.to_string(),
            label: entry.label.to_string(),
            path: entry.path.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    pub role: Option<String>,
    pub items: Vec<MenuItem>,
}
