use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AppError;
use crate::model::{LeaderboardEntry, PlayerProfile, RankEntry};
use crate::riot::RiotClient;

/// Finds players sharing the brackets (queue, tier, division) of a profile.
#[derive(Debug, Clone)]
pub struct BracketMatcher {
    client: Arc<RiotClient>,
}

impl BracketMatcher {
    pub fn new(client: Arc<RiotClient>) -> Self {
        Self { client }
    }

    /// Peers from the first leaderboard page of each of the profile's brackets.
    ///
    /// Entries are processed in stored order and peers keep leaderboard order.
    /// One failed bracket query fails the whole call: no partial list is returned.
    pub async fn find_peers(&self, profile: &PlayerProfile) -> Result<Vec<PlayerProfile>, AppError> {
        let mut peers = Vec::new();

        for entry in &profile.ranks {
            let rows = self
                .client
                .get_leaderboard(&entry.queue_type, &entry.tier, entry.division.as_deref())
                .await
                .map_err(|e| e.in_stage("bracket query", bracket_label(entry)))?;

            let before = peers.len();
            peers.extend(
                rows.into_iter()
                    .filter(|row| is_peer(entry, row))
                    .map(LeaderboardEntry::into_peer),
            );
            debug!(
                "🎯 {}: {} peer(s) in {}",
                profile.identity.riot_id(),
                peers.len() - before,
                bracket_label(entry)
            );
        }

        info!(
            "🎯 {}: {} peer(s) across {} bracket(s)",
            profile.identity.riot_id(),
            peers.len(),
            profile.ranks.len()
        );
        Ok(peers)
    }
}

/// Same queue, same tier and, below the apex tiers, same division.
pub fn is_peer(entry: &RankEntry, row: &LeaderboardEntry) -> bool {
    if row.queue_type != entry.queue_type || !row.tier.eq_ignore_ascii_case(&entry.tier) {
        return false;
    }
    if entry.is_high_elo() {
        return true;
    }

    match (row.division.as_deref(), entry.division.as_deref()) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

fn bracket_label(entry: &RankEntry) -> String {
    match entry.division.as_deref() {
        Some(division) if !entry.is_high_elo() => {
            format!("{} {} {}", entry.queue_type, entry.tier, division)
        }
        _ => format!("{} {}", entry.queue_type, entry.tier),
    }
}
