use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hints::chain_hints;
use crate::policy::{FOOD_VENUE_TAGS, RankingPolicy};
use crate::resolve::SearchCandidate;

/// A keyword search with an optional diet or cuisine filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    #[serde(alias = "q")]
    pub keyword: String,
    #[serde(alias = "cuisine", alias = "diet")]
    pub filter: String,
    pub limit: Option<usize>,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            filter: filter.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedResult {
    pub candidate: SearchCandidate,
    pub score: i32,
}

/// Trim, lowercase and strip one plural `s`, so "Burgers" searches as
/// "burger".
pub fn normalize_keyword(keyword: &str) -> String {
    let keyword = keyword.trim().to_lowercase();
    match keyword.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => keyword,
    }
}

/// Rank with the default policy.
pub fn rank(candidates: &[Value], keyword: &str, filter: &str) -> Vec<RankedResult> {
    rank_with(
        candidates,
        &SearchQuery::new(keyword, filter),
        &RankingPolicy::default(),
    )
}

pub fn rank_with(
    candidates: &[Value],
    query: &SearchQuery,
    policy: &RankingPolicy,
) -> Vec<RankedResult> {
    let keyword = normalize_keyword(&query.keyword);
    let filter = query.filter.trim().to_lowercase();
    let selective = !keyword.is_empty() || !filter.is_empty();

    let mut ranked: Vec<RankedResult> = candidates
        .iter()
        .filter_map(SearchCandidate::resolve)
        .filter(|candidate| !policy.restaurants_only || is_food_venue(candidate))
        .map(|candidate| {
            let score = score(&candidate, &keyword, &filter, policy);
            RankedResult { candidate, score }
        })
        .filter(|result| !selective || result.score > 0)
        .collect();

    ranked.sort_by_cached_key(|result| {
        (Reverse(result.score), result.candidate.name.to_lowercase())
    });

    if let Some(limit) = query.limit {
        ranked.truncate(limit);
    }

    tracing::debug!(
        keyword = %keyword,
        filter = %filter,
        candidates = candidates.len(),
        ranked = ranked.len(),
        "Candidates ranked"
    );

    ranked
}

/// Score one candidate against an already normalized keyword and filter.
///
/// Weights are summed with saturating arithmetic, so no policy can make
/// scoring fail.
pub fn score(
    candidate: &SearchCandidate,
    keyword: &str,
    filter: &str,
    policy: &RankingPolicy,
) -> i32 {
    let name = candidate.name.to_lowercase();
    let blob = candidate.blob();
    let mut score: i32 = 0;

    if !keyword.is_empty() {
        if name.contains(keyword) {
            score = score.saturating_add(policy.name_match);
        }
        if blob.contains(keyword) {
            score = score.saturating_add(policy.blob_match);
        }
        for hint in chain_hints(keyword) {
            if blob.contains(hint) {
                score = score.saturating_add(policy.chain_hint);
            }
        }
    }

    if !filter.is_empty() {
        score = score.saturating_add(if blob.contains(filter) {
            policy.filter_match
        } else {
            policy.filter_miss
        });
    }

    if keyword.is_empty() && filter.is_empty() {
        score = policy.baseline;
    }

    score
}

pub fn is_food_venue(candidate: &SearchCandidate) -> bool {
    candidate
        .tags
        .iter()
        .any(|tag| FOOD_VENUE_TAGS.iter().any(|venue| tag.contains(venue)))
}
