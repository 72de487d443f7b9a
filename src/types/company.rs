use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: String,
    /// Owner user id.
    pub user: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub item_code: Option<String>,
    #[serde(default)]
    pub active_upgrade_levels: UpgradeLevels,
    #[serde(default)]
    pub workers: Vec<CompanyWorker>,
    #[serde(default)]
    pub estimated_value: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub moved_up_at: Option<String>,
    #[serde(default)]
    pub dates: Option<CompanyDates>,
    #[serde(rename = "__v", default)]
    pub version: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeLevels {
    #[serde(default)]
    pub storage: u32,
    #[serde(default)]
    pub automated_engine: u32,
    #[serde(default)]
    pub break_room: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyWorker {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    #[serde(default)]
    pub wage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDates {
    #[serde(default)]
    pub last_hires_at: Vec<String>,
}

impl Company {
    pub fn upgrades(&self) -> UpgradeLevels {
        self.active_upgrade_levels
    }

    pub fn last_hires_at(&self) -> &[String] {
        self.dates
            .as_ref()
            .map(|d| d.last_hires_at.as_slice())
            .unwrap_or_default()
    }

    /// Total daily wage bill of all workers.
    pub fn wage_bill(&self) -> f64 {
        self.workers.iter().map(|w| w.wage).sum()
    }
}
