//! # Types Module
//!
//! Data records mapped from `result.data` of the API replies, plus the
//! request parameter types of the listing endpoints.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`user`] | Players (`user.getUserLite`) |
//! | [`company`] | Companies and their workers |
//! | [`country`] | Countries and tax rates |
//! | [`government`] | Country governments |
//! | [`battle`] | Battle ranking rows |
//! | [`market`] | Trading order books |
//! | [`page`] | Cursor pagination |
//! | [`params`] | Query parameters and closed string sets |
//!
//! Fields the service may omit are `Option` or defaulted, so a sparse record
//! still maps.

pub mod battle;
pub mod company;
pub mod country;
pub mod government;
pub mod market;
pub mod page;
pub mod params;
pub mod user;

pub use battle::RankingEntry;
pub use company::{Company, CompanyDates, CompanyWorker, UpgradeLevels};
pub use country::{Country, Taxes};
pub use government::Government;
pub use market::TopOrders;
pub use page::{collect_pages, Page};
pub use params::{
    ArticleFeed, ArticleQuery, BattleDirection, BattleFilter, BattleQuery, BattleRankingQuery,
    BattleSide, CompanyQuery, RankingDataType, RankingSubject, RankingType, TransactionQuery,
    UpgradeQuery, UpgradeType, WorkOfferQuery,
};
pub use user::{User, UserInfos, UserLeveling, UserSkill};
