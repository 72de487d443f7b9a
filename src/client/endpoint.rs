//! Endpoint catalogue: remote procedure paths and how long their replies are cached.

/// A remote procedure and the cache lifetime of its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    /// 0 disables caching (live data).
    pub ttl_secs: u64,
}

impl Endpoint {
    pub const fn new(path: &'static str, ttl_secs: u64) -> Self {
        Self { path, ttl_secs }
    }
}

pub const COMPANY_BY_ID: Endpoint = Endpoint::new("/company.getById", 60);
pub const COMPANIES: Endpoint = Endpoint::new("/company.getCompanies", 60);
pub const COUNTRY_BY_ID: Endpoint = Endpoint::new("/country.getCountryById", 60);
pub const ALL_COUNTRIES: Endpoint = Endpoint::new("/country.getAllCountries", 600);
pub const GOVERNMENT_BY_COUNTRY: Endpoint = Endpoint::new("/government.getByCountryId", 60);
pub const REGION_BY_ID: Endpoint = Endpoint::new("/region.getById", 3600);
pub const REGIONS_OBJECT: Endpoint = Endpoint::new("/region.getRegionsObject", 3600);
pub const BATTLE_BY_ID: Endpoint = Endpoint::new("/battle.getById", 60);
pub const LIVE_BATTLE_DATA: Endpoint = Endpoint::new("/battle.getLiveBattleData", 0);
pub const BATTLES: Endpoint = Endpoint::new("/battle.getBattles", 60);
pub const ROUND_BY_ID: Endpoint = Endpoint::new("/round.getById", 60);
pub const ROUND_LAST_HITS: Endpoint = Endpoint::new("/round.getLastHits", 5);
pub const BATTLE_RANKING: Endpoint = Endpoint::new("/battleRanking.getRanking", 60);
pub const ITEM_PRICES: Endpoint = Endpoint::new("/itemTrading.getPrices", 5);
pub const TOP_ORDERS: Endpoint = Endpoint::new("/tradingOrder.getTopOrders", 5);
pub const ITEM_OFFER_BY_ID: Endpoint = Endpoint::new("/itemOffer.getById", 5);
pub const WORK_OFFER_BY_ID: Endpoint = Endpoint::new("/workOffer.getById", 5);
pub const WORK_OFFER_BY_COMPANY: Endpoint = Endpoint::new("/workOffer.getWorkOfferByCompanyId", 5);
pub const WORK_OFFERS: Endpoint = Endpoint::new("/workOffer.getWorkOffersPaginated", 5);
pub const RANKING: Endpoint = Endpoint::new("/ranking.getRanking", 1200);
pub const SEARCH: Endpoint = Endpoint::new("/search.searchText", 600);
pub const GAME_DATES: Endpoint = Endpoint::new("/gameConfig.getDates", 3600);
pub const GAME_CONFIG: Endpoint = Endpoint::new("/gameConfig.getGameConfig", 86400);
pub const USER_LITE: Endpoint = Endpoint::new("/user.getUserLite", 600);
pub const USERS_BY_COUNTRY: Endpoint = Endpoint::new("/user.getUsersByCountry", 600);
pub const ARTICLE_BY_ID: Endpoint = Endpoint::new("/article.getArticleById", 3600);
pub const ARTICLES: Endpoint = Endpoint::new("/article.getArticlesPaginated", 3600);
pub const TRANSACTIONS: Endpoint = Endpoint::new("/transaction.getPaginatedTransactions", 5);
pub const UPGRADE: Endpoint = Endpoint::new("/upgrade.getUpgradeByTypeAndEntity", 600);
