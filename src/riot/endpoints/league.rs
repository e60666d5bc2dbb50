use crate::error::AppError;
use crate::model::{LeaderboardEntry, RankEntry};
use crate::riot::client::RiotClient;
use crate::riot::types::{LeagueEntryDto, LeagueListDto};
use crate::score::Tier;

impl RiotClient {
    /// Get league entries (ranked info) for a player by PUUID
    /// Uses platform routing (euw1, na1, kr, etc.)
    pub async fn get_league_entries_by_puuid(
        &self,
        puuid: &str,
    ) -> Result<Vec<RankEntry>, AppError> {
        tracing::trace!("[RIOT::CLIENT] get_league_entries_by_puuid {}", puuid);
        let url = format!(
            "{}/lol/league/v4/entries/by-puuid/{}",
            self.platform_url(),
            urlencoding::encode(puuid)
        );

        let entries: Vec<LeagueEntryDto> = self.get(&url, "league entries").await?;
        Ok(entries.into_iter().map(RankEntry::from).collect())
    }

    /// Get the first leaderboard page of a bracket.
    /// Apex tiers have a single ladder per queue, queried without a division.
    pub async fn get_leaderboard(
        &self,
        queue: &str,
        tier: &str,
        division: Option<&str>,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        tracing::trace!(
            "[RIOT::CLIENT] get_leaderboard {} {} {:?}",
            queue,
            tier,
            division
        );
        let url = bracket_url(self.platform_url(), queue, tier, division);

        match Tier::from_name(tier).filter(Tier::is_apex) {
            Some(_) => {
                let list: LeagueListDto = self.get(&url, "apex league").await?;
                Ok(list.into_leaderboard_entries())
            }
            None => {
                let page: Vec<LeagueEntryDto> = self.get(&url, "league page").await?;
                Ok(page
                    .into_iter()
                    .filter_map(LeagueEntryDto::into_leaderboard_entry)
                    .collect())
            }
        }
    }
}

/// URL of the first leaderboard page for `(queue, tier, division)`.
pub fn bracket_url(base: &str, queue: &str, tier: &str, division: Option<&str>) -> String {
    let queue = urlencoding::encode(queue);

    match Tier::from_name(tier) {
        Some(Tier::Challenger) => format!("{base}/lol/league/v4/challengerleagues/by-queue/{queue}"),
        Some(Tier::Grandmaster) => {
            format!("{base}/lol/league/v4/grandmasterleagues/by-queue/{queue}")
        }
        Some(Tier::Master) => format!("{base}/lol/league/v4/masterleagues/by-queue/{queue}"),
        _ => format!(
            "{base}/lol/league/v4/entries/{queue}/{}/{}?page=1",
            urlencoding::encode(&tier.to_ascii_uppercase()),
            urlencoding::encode(&division.unwrap_or_default().to_ascii_uppercase()),
        ),
    }
}
