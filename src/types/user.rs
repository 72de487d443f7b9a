//! Player records returned by `user.getUserLite`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Military unit id.
    #[serde(default)]
    pub mu: Option<String>,
    #[serde(default)]
    pub leveling: UserLeveling,
    /// Keyed by the skill name used on the wire (`energy`, `criticalChance`, ...).
    #[serde(default)]
    pub skills: BTreeMap<String, UserSkill>,
    #[serde(default)]
    pub rankings: Option<serde_json::Value>,
    #[serde(default)]
    pub dates: Option<serde_json::Value>,
    #[serde(default)]
    pub infos: UserInfos,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLeveling {
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub total_xp: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkill {
    #[serde(default)]
    pub level: u32,
    pub ammo_percent: Option<f64>,
    pub buffs_percent: Option<f64>,
    pub debuffs_percent: Option<f64>,
    pub value: Option<f64>,
    pub weapon: Option<f64>,
    pub equipment: Option<f64>,
    pub limited: Option<f64>,
    #[serde(default)]
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfos {
    #[serde(default)]
    pub is_banned: bool,
}

impl User {
    pub fn level(&self) -> u32 {
        self.leveling.level
    }

    pub fn is_banned(&self) -> bool {
        self.infos.is_banned
    }

    /// Skill name -> level.
    pub fn skill_levels(&self) -> BTreeMap<&str, u32> {
        self.skills
            .iter()
            .map(|(name, skill)| (name.as_str(), skill.level))
            .collect()
    }

    /// Current value of the `userWealth` ranking, if the user is ranked.
    pub fn wealth(&self) -> Option<f64> {
        self.rankings
            .as_ref()?
            .get("userWealth")?
            .get("value")?
            .as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_minimal_and_full_payloads() {
        let minimal: User = serde_json::from_value(json!({
            "_id": "u1",
            "username": "alice"
        }))
        .unwrap();
        assert_eq!(minimal.level(), 0);
        assert!(!minimal.is_banned());
        assert_eq!(minimal.wealth(), None);

        let full: User = serde_json::from_value(json!({
            "_id": "u2",
            "username": "bob",
            "country": "c1",
            "isActive": true,
            "createdAt": "2025-09-01T00:00:00.000Z",
            "mu": "mu1",
            "leveling": {"level": 17, "totalXp": 1234.0},
            "skills": {
                "attack": {"level": 5, "ammoPercent": null, "buffsPercent": null,
                           "debuffsPercent": null, "value": 120.0, "weapon": 10.0,
                           "equipment": 5.0, "limited": null, "total": 135.0},
                "energy": {"level": 3, "total": 40.0}
            },
            "rankings": {"userWealth": {"value": 9001.5, "rank": 12}},
            "infos": {"isBanned": true}
        }))
        .unwrap();
        assert_eq!(full.level(), 17);
        assert!(full.is_banned());
        assert_eq!(full.wealth(), Some(9001.5));
        let levels = full.skill_levels();
        assert_eq!(levels.get("attack"), Some(&5));
        assert_eq!(levels.get("energy"), Some(&3));
    }
}
