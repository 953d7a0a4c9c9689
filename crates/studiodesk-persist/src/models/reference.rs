use serde::{Deserialize, Serialize};
use studiodesk_types::{Category, Priority, Studio};

/// Row of the `categories` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub default_team: Option<String>,
    #[serde(default)]
    pub default_priority: Priority,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl From<&Category> for CategoryRecord {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            code: category.code.to_string(),
            name: category.name.to_string(),
            icon: Some(category.icon.to_string()),
            default_team: Some(category.default_team.to_string()),
            default_priority: category.default_priority,
            subcategories: category.subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Row of the `studios` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
}

impl From<&Studio> for StudioRecord {
    fn from(studio: &Studio) -> Self {
        Self {
            id: studio.id.to_string(),
            name: studio.name.to_string(),
            city: Some(studio.city.to_string()),
        }
    }
}
