use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::MatchDto;

impl RiotClient {
    /// Get the most recent match IDs by PUUID
    /// Uses regional routing (americas, europe, asia, sea)
    pub async fn get_match_ids(&self, puuid: &str, count: u32) -> Result<Vec<String>, AppError> {
        tracing::trace!("[RIOT::CLIENT] get_match_ids {} (count {})", puuid, count);
        let url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
            self.regional_url(),
            urlencoding::encode(puuid),
            count
        );

        self.get(&url, "match ids").await
    }

    /// Get match details by match ID
    /// Uses regional routing (americas, europe, asia, sea)
    pub async fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        tracing::trace!("[RIOT::CLIENT] get_match {}", match_id);
        let url = format!(
            "{}/lol/match/v5/matches/{}",
            self.regional_url(),
            urlencoding::encode(match_id)
        );

        self.get(&url, "match").await
    }
}
