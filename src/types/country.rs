use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub money: f64,
    #[serde(default)]
    pub taxes: Taxes,
    #[serde(default)]
    pub orgs: Option<serde_json::Value>,
    #[serde(default)]
    pub allies: Vec<String>,
    #[serde(default)]
    pub wars_with: Vec<String>,
    #[serde(default)]
    pub enemy: Option<String>,
    #[serde(default)]
    pub current_battle_order: Option<String>,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub map_accent: Option<String>,
    #[serde(default)]
    pub rankings: Option<serde_json::Value>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(rename = "__v", default)]
    pub version: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxes {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub market: f64,
    #[serde(default)]
    pub self_work: f64,
}

impl Country {
    pub fn is_at_war_with(&self, country_id: &str) -> bool {
        self.wars_with.iter().any(|c| c == country_id)
    }

    pub fn is_allied_with(&self, country_id: &str) -> bool {
        self.allies.iter().any(|c| c == country_id)
    }
}
