use std::sync::Arc;

use tracing::{info, warn};

use crate::error::AppError;
use crate::model::PlayerIdentity;
use crate::riot::RiotClient;

/// Number of recent matches looked up per player.
pub const RECENT_MATCH_COUNT: u32 = 5;

/// A recent match with the identities of the participants that could be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub match_id: String,
    pub participants: Vec<PlayerIdentity>,
}

/// Best-effort match history: failed matches or participants are skipped.
#[derive(Debug, Clone)]
pub struct MatchHistory {
    client: Arc<RiotClient>,
}

impl MatchHistory {
    pub fn new(client: Arc<RiotClient>) -> Self {
        Self { client }
    }

    /// Recent matches of `puuid` with their participants.
    ///
    /// Only the match id listing is fatal. Every match or participant lookup
    /// that fails is logged and left out of the result.
    pub async fn recent_matches(&self, puuid: &str) -> Result<Vec<MatchRecord>, AppError> {
        let match_ids = self
            .client
            .get_match_ids(puuid, RECENT_MATCH_COUNT)
            .await
            .map_err(|e| e.in_stage("match ids lookup", format!("puuid {}", puuid)))?;

        let mut matches = Vec::new();
        for match_id in match_ids.into_iter().take(RECENT_MATCH_COUNT as usize) {
            let match_data = match self.client.get_match(&match_id).await {
                Ok(m) => m,
                Err(e) => {
                    warn!("📜 skipping match {}: {}", match_id, e);
                    continue;
                }
            };

            let mut participants = Vec::with_capacity(match_data.metadata.participants.len());
            for participant in &match_data.metadata.participants {
                match self.client.get_account_by_puuid(participant).await {
                    Ok(identity) => participants.push(identity),
                    Err(e) => warn!(
                        "📜 {}: skipping participant {}: {}",
                        match_id, participant, e
                    ),
                }
            }

            matches.push(MatchRecord {
                match_id: match_data.metadata.match_id,
                participants,
            });
        }

        info!("📜 {} recent match(es) for puuid {}", matches.len(), puuid);
        Ok(matches)
    }
}
