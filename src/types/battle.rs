use serde::{Deserialize, Serialize};

/// One row of `battleRanking.getRanking`.
///
/// Exactly one of `user`, `country`, `mu` is set, matching the requested
/// [`RankingSubject`](super::RankingSubject).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub mu: Option<String>,
    #[serde(default)]
    pub value: f64,
}

impl RankingEntry {
    pub fn subject_id(&self, subject: super::RankingSubject) -> Option<&str> {
        match subject {
            super::RankingSubject::User => self.user.as_deref(),
            super::RankingSubject::Country => self.country.as_deref(),
            super::RankingSubject::Mu => self.mu.as_deref(),
        }
    }
}
