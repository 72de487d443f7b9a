use crate::client::core::{to_payload, WarEraClient};
use crate::client::endpoint::{self, Endpoint};
use crate::types::params::clamp_page_size;
use crate::types::{
    ArticleQuery, BattleQuery, BattleRankingQuery, Company, CompanyQuery, Country, Government,
    Page, RankingEntry, RankingType, TopOrders, TransactionQuery, UpgradeQuery, User,
    WorkOfferQuery,
};
use crate::{Error, Result};
use serde_json::{json, Value};
use std::collections::HashMap;

impl WarEraClient {
    fn by_id(&mut self, endpoint: Endpoint, field: &str, id: &str) -> Result<Value> {
        self.call(endpoint, Some(json!({ field: id })))
    }

    fn page<T: serde::de::DeserializeOwned>(&mut self, endpoint: Endpoint, payload: Value) -> Result<Page<T>> {
        self.call_as(endpoint, Some(payload))
    }

    // --- companies ---

    pub fn get_company(&mut self, company_id: &str) -> Result<Company> {
        self.call_as(endpoint::COMPANY_BY_ID, Some(json!({ "companyId": company_id })))
    }

    /// Queue a company lookup for the next batch flush.
    pub fn queue_company(&mut self, company_id: &str) -> usize {
        self.enqueue(endpoint::COMPANY_BY_ID, Some(json!({ "companyId": company_id })))
    }

    /// One page of company ids.
    pub fn companies_page(&mut self, query: &CompanyQuery) -> Result<Page<String>> {
        let mut query = query.clone();
        query.per_page = clamp_page_size(query.per_page);
        self.page(endpoint::COMPANIES, to_payload(&query)?)
    }

    // --- countries ---

    pub fn get_country(&mut self, country_id: &str) -> Result<Country> {
        self.call_as(endpoint::COUNTRY_BY_ID, Some(json!({ "countryId": country_id })))
    }

    pub fn get_all_countries(&mut self) -> Result<Vec<Country>> {
        self.call_as(endpoint::ALL_COUNTRIES, None)
    }

    pub fn get_government(&mut self, country_id: &str) -> Result<Government> {
        self.call_as(endpoint::GOVERNMENT_BY_COUNTRY, Some(json!({ "countryId": country_id })))
    }

    // --- regions ---

    pub fn get_region(&mut self, region_id: &str) -> Result<Value> {
        self.by_id(endpoint::REGION_BY_ID, "regionId", region_id)
    }

    pub fn get_regions_object(&mut self) -> Result<Value> {
        self.call(endpoint::REGIONS_OBJECT, None)
    }

    // --- battles ---

    pub fn get_battle(&mut self, battle_id: &str) -> Result<Value> {
        self.by_id(endpoint::BATTLE_BY_ID, "battleId", battle_id)
    }

    /// Live state of a battle. Never cached.
    pub fn get_live_battle_data(&mut self, battle_id: &str, round_number: Option<u32>) -> Result<Value> {
        let mut payload = json!({ "battleId": battle_id });
        if let Some(round) = round_number {
            payload["roundNumber"] = json!(round);
        }
        self.call(endpoint::LIVE_BATTLE_DATA, Some(payload))
    }

    pub fn battles_page(&mut self, query: &BattleQuery) -> Result<Page<Value>> {
        let mut query = query.clone();
        query.limit = clamp_page_size(query.limit);
        self.page(endpoint::BATTLES, to_payload(&query)?)
    }

    pub fn get_round(&mut self, round_id: &str) -> Result<Value> {
        self.by_id(endpoint::ROUND_BY_ID, "roundId", round_id)
    }

    pub fn get_round_last_hits(&mut self, round_id: &str) -> Result<Value> {
        self.by_id(endpoint::ROUND_LAST_HITS, "roundId", round_id)
    }

    /// Rows of `battleRanking.getRanking`, taken from `data.rankings`.
    pub fn get_battle_ranking(&mut self, query: &BattleRankingQuery) -> Result<Vec<RankingEntry>> {
        let mut data = self.call(endpoint::BATTLE_RANKING, Some(to_payload(query)?))?;
        let rankings = data
            .get_mut("rankings")
            .map(Value::take)
            .ok_or_else(|| Error::unexpected(endpoint::BATTLE_RANKING.path, "reply has no rankings"))?;
        serde_json::from_value(rankings).map_err(|e| Error::decode(endpoint::BATTLE_RANKING.path, e))
    }

    // --- market ---

    /// Average price per item code.
    pub fn get_item_prices(&mut self) -> Result<HashMap<String, f64>> {
        self.call_as(endpoint::ITEM_PRICES, None)
    }

    pub fn get_top_orders(&mut self, item_code: &str, limit: u32) -> Result<TopOrders> {
        let payload = json!({ "itemCode": item_code, "limit": clamp_page_size(limit) });
        self.call_as(endpoint::TOP_ORDERS, Some(payload))
    }

    pub fn get_item_offer(&mut self, item_offer_id: &str) -> Result<Value> {
        self.by_id(endpoint::ITEM_OFFER_BY_ID, "itemOfferId", item_offer_id)
    }

    // --- work offers ---

    pub fn get_work_offer(&mut self, work_offer_id: &str) -> Result<Value> {
        self.by_id(endpoint::WORK_OFFER_BY_ID, "workOfferId", work_offer_id)
    }

    pub fn get_work_offer_by_company(&mut self, company_id: &str) -> Result<Value> {
        self.by_id(endpoint::WORK_OFFER_BY_COMPANY, "companyId", company_id)
    }

    pub fn work_offers_page(&mut self, query: &WorkOfferQuery) -> Result<Page<Value>> {
        let mut query = query.clone();
        query.limit = clamp_page_size(query.limit);
        self.page(endpoint::WORK_OFFERS, to_payload(&query)?)
    }

    // --- rankings, search, game config ---

    pub fn get_ranking(&mut self, ranking_type: RankingType) -> Result<Value> {
        self.call(endpoint::RANKING, Some(json!({ "rankingType": ranking_type })))
    }

    /// Global search over users, companies, articles and other entities.
    pub fn search(&mut self, text: &str) -> Result<Value> {
        self.call(endpoint::SEARCH, Some(json!({ "searchText": text })))
    }

    pub fn get_game_dates(&mut self) -> Result<Value> {
        self.call(endpoint::GAME_DATES, None)
    }

    pub fn get_game_config(&mut self) -> Result<Value> {
        self.call(endpoint::GAME_CONFIG, None)
    }

    // --- users ---

    pub fn get_user_lite(&mut self, user_id: &str) -> Result<User> {
        self.call_as(endpoint::USER_LITE, Some(json!({ "userId": user_id })))
    }

    /// Queue a user lookup for the next batch flush.
    pub fn queue_user_lite(&mut self, user_id: &str) -> usize {
        self.enqueue(endpoint::USER_LITE, Some(json!({ "userId": user_id })))
    }

    pub fn users_by_country_page(
        &mut self,
        country_id: &str,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<Page<Value>> {
        let mut payload = json!({ "countryId": country_id, "limit": clamp_page_size(limit) });
        if let Some(cursor) = cursor.filter(|c| !c.is_empty()) {
            payload["cursor"] = json!(cursor);
        }
        self.page(endpoint::USERS_BY_COUNTRY, payload)
    }

    // --- articles, transactions, upgrades ---

    pub fn get_article(&mut self, article_id: &str) -> Result<Value> {
        self.by_id(endpoint::ARTICLE_BY_ID, "articleId", article_id)
    }

    pub fn articles_page(&mut self, query: &ArticleQuery) -> Result<Page<Value>> {
        let mut query = query.clone();
        query.limit = clamp_page_size(query.limit);
        self.page(endpoint::ARTICLES, to_payload(&query)?)
    }

    pub fn transactions_page(&mut self, query: &TransactionQuery) -> Result<Page<Value>> {
        let mut query = query.clone();
        query.limit = clamp_page_size(query.limit);
        self.page(endpoint::TRANSACTIONS, to_payload(&query)?)
    }

    pub fn get_upgrade(&mut self, query: &UpgradeQuery) -> Result<Value> {
        self.call(endpoint::UPGRADE, Some(to_payload(query)?))
    }
}
