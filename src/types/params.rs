//! Request parameters for the listing and ranking endpoints.
//!
//! Optional filters are skipped when serializing, so an unset filter never
//! reaches the wire (and never changes the cache key).

use serde::{Deserialize, Serialize};

pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Clamp a requested page size into what the service accepts.
pub fn clamp_page_size(size: u32) -> u32 {
    size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BattleDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BattleFilter {
    #[default]
    All,
    YourCountry,
    YourEnemies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingDataType {
    Damage,
    Points,
    Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingSubject {
    User,
    Country,
    Mu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BattleSide {
    Attacker,
    Defender,
}

/// Global leaderboards served by `ranking.getRanking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingType {
    WeeklyCountryDamages,
    WeeklyCountryDamagesPerCitizen,
    CountryRegionDiff,
    CountryDevelopment,
    CountryActivePopulation,
    CountryDamages,
    CountryWealth,
    CountryProductionBonus,
    WeeklyUserDamages,
    UserDamages,
    UserWealth,
    UserLevel,
    UserReferrals,
    UserSubscribers,
    UserTerrain,
    UserPremiumMonths,
    UserPremiumGifts,
    MuWeeklyDamages,
    MuDamages,
    MuTerrain,
    MuWealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArticleFeed {
    Weekly,
    Top,
    My,
    Subscriptions,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeType {
    Bunker,
    Base,
    Storage,
    AutomatedEngine,
    BreakRoom,
    Headquarters,
    Dormitories,
}

/// `company.getCompanies`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    pub per_page: u32,
}

impl Default for CompanyQuery {
    fn default() -> Self {
        Self {
            user_id: None,
            org_id: None,
            cursor: None,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CompanyQuery {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }
}

/// `battle.getBattles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleQuery {
    pub is_active: bool,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    pub direction: BattleDirection,
    pub filter: BattleFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defender_region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub war_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<String>,
}

impl Default for BattleQuery {
    fn default() -> Self {
        Self {
            is_active: true,
            limit: DEFAULT_PAGE_SIZE,
            cursor: None,
            direction: BattleDirection::default(),
            filter: BattleFilter::default(),
            defender_region_id: None,
            war_id: None,
            country_id: None,
        }
    }
}

/// `battleRanking.getRanking`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRankingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub war_id: Option<String>,
    pub data_type: RankingDataType,
    #[serde(rename = "type")]
    pub subject: RankingSubject,
    pub side: BattleSide,
}

impl BattleRankingQuery {
    /// Damage ranking of one side of a battle.
    pub fn battle_damage(battle_id: impl Into<String>, subject: RankingSubject, side: BattleSide) -> Self {
        Self {
            battle_id: Some(battle_id.into()),
            round_id: None,
            war_id: None,
            data_type: RankingDataType::Damage,
            subject,
            side,
        }
    }
}

/// `workOffer.getWorkOffersPaginated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOfferQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    pub limit: u32,
}

impl Default for WorkOfferQuery {
    fn default() -> Self {
        Self {
            user_id: None,
            region_id: None,
            cursor: None,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// `article.getArticlesPaginated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleQuery {
    #[serde(rename = "type")]
    pub feed: ArticleFeed,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

impl ArticleQuery {
    pub fn new(feed: ArticleFeed) -> Self {
        Self {
            feed,
            limit: DEFAULT_PAGE_SIZE,
            cursor: None,
            user_id: None,
            categories: None,
            languages: None,
        }
    }
}

/// `transaction.getPaginatedTransactions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mu_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            cursor: None,
            user_id: None,
            mu_id: None,
            country_id: None,
            item_code: None,
            transaction_type: None,
        }
    }
}

/// `upgrade.getUpgradeByTypeAndEntity`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeQuery {
    pub upgrade_type: UpgradeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mu_id: Option<String>,
}
