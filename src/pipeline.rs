use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache;
use crate::error::AppError;
use crate::model::PlayerProfile;
use crate::riot::RiotClient;

/// Cache-first player lookup: cache, identity, rank entries, scoring, cache write.
#[derive(Debug, Clone)]
pub struct FetchPipeline {
    client: Arc<RiotClient>,
}

impl FetchPipeline {
    pub fn new(client: Arc<RiotClient>) -> Self {
        Self { client }
    }

    /// Resolve a player by Riot ID, serving `cache_path` when it holds a valid profile.
    ///
    /// Identity and rank entry failures abort the lookup. A corrupt cache file
    /// is a miss, and a failed cache write only produces a warning.
    pub async fn resolve_player(
        &self,
        game_name: &str,
        tag_line: &str,
        cache_path: &Path,
    ) -> Result<PlayerProfile, AppError> {
        let riot_id = format!("{}#{}", game_name, tag_line);

        if cache::exists(cache_path).await {
            match cache::load(cache_path).await {
                Ok(profile) => {
                    debug!("💾 {}: served from {}", riot_id, cache_path.display());
                    return Ok(profile);
                }
                Err(e) => warn!(
                    "💾 {}: unreadable cache file {} ({}), falling back to the API",
                    riot_id,
                    cache_path.display(),
                    e
                ),
            }
        }

        let identity = self
            .client
            .get_account_by_riot_id(game_name, tag_line)
            .await
            .map_err(|e| e.in_stage("identity resolution", riot_id.clone()))?;

        let ranks = self
            .client
            .get_league_entries_by_puuid(&identity.puuid)
            .await
            .map_err(|e| e.in_stage("rank entries lookup", format!("puuid {}", identity.puuid)))?;

        let mut profile = PlayerProfile::new(identity, ranks);
        profile.compute_rank_scores();

        if let Err(e) = cache::save(cache_path, &profile).await {
            warn!(
                "💾 {}: failed to cache profile at {}: {}",
                riot_id,
                cache_path.display(),
                e
            );
        }

        info!(
            "🔎 {} resolved with {} ranked queue(s)",
            riot_id,
            profile.ranks.len()
        );
        Ok(profile)
    }
}
