use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Government {
    #[serde(rename = "_id")]
    pub id: String,
    pub country: String,
    #[serde(default)]
    pub congress_members: Vec<String>,
    #[serde(default)]
    pub president: Option<String>,
    #[serde(default)]
    pub vice_president: Option<String>,
    #[serde(default)]
    pub min_of_defense: Option<String>,
    #[serde(default)]
    pub min_of_foreign_affairs: Option<String>,
    #[serde(default)]
    pub min_of_economy: Option<String>,
}

impl Government {
    pub fn has_president(&self) -> bool {
        self.president.is_some()
    }

    pub fn has_congress(&self) -> bool {
        !self.congress_members.is_empty()
    }
}
