use serde::Deserialize;

use crate::model::{LeaderboardEntry, PlayerIdentity, RankEntry};

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

impl From<AccountDto> for PlayerIdentity {
    fn from(value: AccountDto) -> Self {
        Self {
            puuid: value.puuid,
            game_name: value.game_name.unwrap_or_default(),
            tag_line: value.tag_line.unwrap_or_default(),
        }
    }
}

// ============================================================================
// League-v4
// ============================================================================

/// Row of `entries/by-puuid` and of the paged `entries/{queue}/{tier}/{division}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    #[serde(default)]
    pub rank: Option<String>,
    pub league_points: u32,
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub summoner_id: Option<String>,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl From<LeagueEntryDto> for RankEntry {
    fn from(value: LeagueEntryDto) -> Self {
        RankEntry::new(value.queue_type, value.tier, value.rank, value.league_points)
    }
}

impl LeagueEntryDto {
    /// Leaderboard row, `None` when the row names no player at all.
    pub fn into_leaderboard_entry(self) -> Option<LeaderboardEntry> {
        let puuid = self.puuid.or(self.summoner_id)?;

        Some(LeaderboardEntry {
            puuid,
            queue_type: self.queue_type,
            tier: self.tier,
            division: self.rank,
            league_points: self.league_points,
            wins: self.wins,
            losses: self.losses,
        })
    }
}

/// Payload of the apex ladders (`challengerleagues`, `grandmasterleagues`,
/// `masterleagues`): tier and queue are given once for the whole list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueListDto {
    pub tier: String,
    pub queue: String,
    #[serde(default)]
    pub entries: Vec<LeagueItemDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueItemDto {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub summoner_id: Option<String>,
    pub league_points: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl LeagueListDto {
    pub fn into_leaderboard_entries(self) -> Vec<LeaderboardEntry> {
        let Self {
            tier,
            queue,
            entries,
        } = self;

        entries
            .into_iter()
            .filter_map(|item| {
                let puuid = item.puuid.or(item.summoner_id)?;
                Some(LeaderboardEntry {
                    puuid,
                    queue_type: queue.clone(),
                    tier: tier.clone(),
                    division: None,
                    league_points: item.league_points,
                    wins: item.wins,
                    losses: item.losses,
                })
            })
            .collect()
    }
}

// ============================================================================
// Match-v5
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub metadata: MetadataDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDto {
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}
