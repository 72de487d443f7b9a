//! Lookups composed from several calls: batched user fetches, country and
//! citizen listings, company ownership and battle participants.

use crate::client::core::{unwrap_envelope, WarEraClient};
use crate::client::endpoint;
use crate::types::{
    collect_pages, BattleRankingQuery, BattleSide, Company, CompanyQuery, Page, RankingSubject,
    User,
};
use crate::{Error, Result};
use serde_json::{json, Value};
use std::collections::{BTreeSet, HashMap};
use std::time::Duration;
use tracing::debug;

/// How long a username learned from a user record is trusted.
pub const USERNAME_TTL: Duration = Duration::from_secs(24 * 3600);

/// Cache namespace of the username memo. Not a remote path, so it never
/// collides with a cached reply.
const USERNAME_MEMO: &str = "#username";

const CITIZENS_PAGE_SIZE: u32 = 100;
const COMPANIES_PAGE_SIZE: u32 = 12;

impl WarEraClient {
    /// Fetch many users with one batch flush (paged by the batch size).
    ///
    /// Anything already queued is flushed along with them; only the
    /// replies for `user_ids` are returned, in order.
    pub fn get_users(&mut self, user_ids: &[impl AsRef<str>]) -> Result<Vec<User>> {
        let already_queued = self.pending_batch_len();
        for id in user_ids {
            self.queue_user_lite(id.as_ref());
        }
        let replies = self.flush_batch()?;

        let mut users = Vec::with_capacity(user_ids.len());
        for reply in replies.into_iter().skip(already_queued) {
            let data = unwrap_envelope(endpoint::USER_LITE.path, reply)?;
            let user: User = serde_json::from_value(data)
                .map_err(|e| Error::decode(endpoint::USER_LITE.path, e))?;
            self.remember_username(&user);
            users.push(user);
        }
        Ok(users)
    }

    /// Username of `user_id`, from the memo when fresh.
    ///
    /// The memo lives in the cache store, so with the file store it
    /// survives restarts.
    pub fn username(&mut self, user_id: &str) -> Result<String> {
        let memo_key = json!({ "userId": user_id });
        if let Some(Value::String(name)) = self.sender.cached(USERNAME_MEMO, Some(&memo_key)) {
            return Ok(name);
        }
        let user = self.get_user_lite(user_id)?;
        self.remember_username(&user);
        Ok(user.username)
    }

    /// First name learned wins until it expires.
    fn remember_username(&mut self, user: &User) {
        self.sender.cache_reply(
            USERNAME_MEMO,
            Some(&json!({ "userId": user.id })),
            json!(user.username),
            USERNAME_TTL.as_secs(),
        );
    }

    /// Id of the country called `name`. The country list is loaded once
    /// and kept until [`clear_cache`](Self::clear_cache).
    pub fn country_id_by_name(&mut self, name: &str) -> Result<Option<String>> {
        if self.country_ids.is_none() {
            let countries = self.get_all_countries()?;
            debug!("Loaded {} countries", countries.len());
            self.country_ids = Some(countries.into_iter().map(|c| (c.name, c.id)).collect());
        }
        Ok(self
            .country_ids
            .as_ref()
            .and_then(|ids| ids.get(name).cloned()))
    }

    /// Ids of every citizen of `country_id`, following all pages.
    pub fn country_citizen_ids(&mut self, country_id: &str) -> Result<Vec<String>> {
        let items = collect_pages(|cursor| self.users_by_country_page(country_id, CITIZENS_PAGE_SIZE, cursor))?;
        items
            .into_iter()
            .map(|item| {
                item.get("_id")
                    .and_then(|id| id.as_str())
                    .map(str::to_string)
                    .ok_or_else(|| Error::unexpected(endpoint::USERS_BY_COUNTRY.path, "citizen without _id"))
            })
            .collect()
    }

    pub fn country_citizens(&mut self, country_id: &str) -> Result<Vec<User>> {
        let ids = self.country_citizen_ids(country_id)?;
        self.get_users(&ids)
    }

    pub fn country_citizen_ids_by_name(&mut self, country_name: &str) -> Result<Vec<String>> {
        let country_id = self.require_country_id(country_name)?;
        self.country_citizen_ids(&country_id)
    }

    pub fn country_citizens_by_name(&mut self, country_name: &str) -> Result<Vec<User>> {
        let country_id = self.require_country_id(country_name)?;
        self.country_citizens(&country_id)
    }

    fn require_country_id(&mut self, country_name: &str) -> Result<String> {
        self.country_id_by_name(country_name)?
            .ok_or_else(|| Error::not_found("country", country_name))
    }

    /// Ids of every company owned by a citizen of `country_id`.
    pub fn country_citizen_company_ids(&mut self, country_id: &str) -> Result<Vec<String>> {
        let mut company_ids = Vec::new();
        for citizen in self.country_citizen_ids(country_id)? {
            company_ids.extend(self.player_company_ids(&citizen)?);
        }
        Ok(company_ids)
    }

    /// Ids of the companies owned by `user_id`.
    pub fn player_company_ids(&mut self, user_id: &str) -> Result<Vec<String>> {
        collect_pages(|cursor| -> Result<Page<String>> {
            let query = CompanyQuery {
                cursor: cursor.filter(|c| !c.is_empty()).map(str::to_string),
                per_page: COMPANIES_PAGE_SIZE,
                ..CompanyQuery::for_user(user_id)
            };
            self.companies_page(&query)
        })
    }

    pub fn companies(&mut self, company_ids: &[impl AsRef<str>]) -> Result<Vec<Company>> {
        company_ids
            .iter()
            .map(|id| self.get_company(id.as_ref()))
            .collect()
    }

    /// Distinct attackers and defenders that dealt damage in a battle.
    pub fn battle_participants(
        &mut self,
        battle_id: &str,
        subject: RankingSubject,
    ) -> Result<(BTreeSet<String>, BTreeSet<String>)> {
        let mut sides = Vec::with_capacity(2);
        for side in [BattleSide::Attacker, BattleSide::Defender] {
            let query = BattleRankingQuery::battle_damage(battle_id, subject, side);
            let ids: BTreeSet<String> = self
                .get_battle_ranking(&query)?
                .iter()
                .filter_map(|row| row.subject_id(subject).map(str::to_string))
                .collect();
            sides.push(ids);
        }
        let defenders = sides.pop().unwrap_or_default();
        let attackers = sides.pop().unwrap_or_default();
        Ok((attackers, defenders))
    }

    /// Damage per user on `side`, summed over all `battle_ids`.
    pub fn damage_in_battles(
        &mut self,
        battle_ids: &[impl AsRef<str>],
        side: BattleSide,
    ) -> Result<HashMap<String, f64>> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for battle_id in battle_ids {
            let query = BattleRankingQuery::battle_damage(battle_id.as_ref(), RankingSubject::User, side);
            for row in self.get_battle_ranking(&query)? {
                if let Some(user) = row.user {
                    *totals.entry(user).or_insert(0.0) += row.value;
                }
            }
        }
        Ok(totals)
    }
}
