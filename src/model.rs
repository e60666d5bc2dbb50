use serde::{Deserialize, Serialize};

use crate::score;

/// A resolved Riot account. `puuid` is the stable key, names may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdentity {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

impl PlayerIdentity {
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.game_name, self.tag_line)
    }
}

/// Standing of a player in one ranked queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub queue_type: String,
    pub tier: String,
    /// Absent for the apex tiers.
    #[serde(rename = "rank", default)]
    pub division: Option<String>,
    pub league_points: u32,
    #[serde(default)]
    pub rank_score: u32,
}

impl RankEntry {
    /// Build an entry from raw standing data, dropping the division of apex tiers.
    pub fn new(
        queue_type: impl Into<String>,
        tier: impl Into<String>,
        division: Option<String>,
        league_points: u32,
    ) -> Self {
        let tier = tier.into();
        let division = if score::is_high_elo(&tier) {
            None
        } else {
            division.filter(|d| !d.is_empty())
        };

        Self {
            queue_type: queue_type.into(),
            tier,
            division,
            league_points,
            rank_score: 0,
        }
    }

    pub fn is_high_elo(&self) -> bool {
        score::is_high_elo(&self.tier)
    }

    pub fn is_solo_queue(&self) -> bool {
        self.queue_type == "RANKED_SOLO_5x5"
    }

    pub fn is_flex_queue(&self) -> bool {
        self.queue_type == "RANKED_FLEX_SR"
    }

    /// Human readable queue name, the raw identifier for unknown queues.
    pub fn queue_label(&self) -> &str {
        if self.is_solo_queue() {
            "Ranked Solo/Duo"
        } else if self.is_flex_queue() {
            "Ranked Flex"
        } else {
            &self.queue_type
        }
    }

    pub fn compute_score(&mut self) {
        self.rank_score = score::score(&self.tier, self.division.as_deref(), self.league_points);
    }
}

/// A player with every ranked standing we know about. This is what gets cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    #[serde(flatten)]
    pub identity: PlayerIdentity,
    #[serde(default)]
    pub ranks: Vec<RankEntry>,
}

impl PlayerProfile {
    pub fn new(identity: PlayerIdentity, ranks: Vec<RankEntry>) -> Self {
        Self { identity, ranks }
    }

    /// Recompute the score of every rank entry, replacing previous values.
    pub fn compute_rank_scores(&mut self) {
        self.ranks.iter_mut().for_each(RankEntry::compute_score);
    }
}

/// One row of a leaderboard page. Never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub puuid: String,
    pub queue_type: String,
    pub tier: String,
    pub division: Option<String>,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}

impl LeaderboardEntry {
    pub fn win_rate(&self) -> f64 {
        let games = u64::from(self.wins) + u64::from(self.losses);
        if games == 0 {
            0.0
        } else {
            f64::from(self.wins) / games as f64
        }
    }

    /// Minimal profile of this row: its own identifier and one scored entry.
    pub fn into_peer(self) -> PlayerProfile {
        let mut entry = RankEntry::new(
            self.queue_type,
            self.tier,
            self.division,
            self.league_points,
        );
        entry.compute_score();

        PlayerProfile::new(
            PlayerIdentity {
                puuid: self.puuid,
                game_name: String::new(),
                tag_line: String::new(),
            },
            vec![entry],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PlayerProfile {
        PlayerProfile::new(
            PlayerIdentity {
                puuid: "p-1".into(),
                game_name: "sit ye".into(),
                tag_line: "NA1".into(),
            },
            vec![
                RankEntry::new("RANKED_SOLO_5x5", "GOLD", Some("II".into()), 40),
                RankEntry::new("RANKED_FLEX_SR", "MASTER", Some("I".into()), 12),
            ],
        )
    }

    #[test]
    fn apex_entries_have_no_division() {
        let profile = profile();
        assert_eq!(profile.ranks[0].division.as_deref(), Some("II"));
        assert_eq!(profile.ranks[1].division, None);
        assert!(profile.ranks[1].is_high_elo());
    }

    #[test]
    fn scoring_is_idempotent() {
        let mut profile = profile();
        profile.compute_rank_scores();
        let first = profile.clone();
        profile.compute_rank_scores();

        assert_eq!(profile, first);
        assert_eq!(profile.ranks[0].rank_score, 3 * 400 + 20 * 10 + 40);
        assert_eq!(profile.ranks[1].rank_score, 7 * 400 + 12);
    }

    #[test]
    fn scoring_replaces_stale_scores() {
        let mut profile = profile();
        profile.ranks[0].rank_score = 999_999;
        profile.compute_rank_scores();

        assert_eq!(profile.ranks[0].rank_score, 1440);
    }

    #[test]
    fn serialized_layout() {
        let mut profile = profile();
        profile.compute_rank_scores();
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["puuid"], "p-1");
        assert_eq!(value["gameName"], "sit ye");
        assert_eq!(value["tagLine"], "NA1");
        assert_eq!(value["ranks"][0]["queueType"], "RANKED_SOLO_5x5");
        assert_eq!(value["ranks"][0]["rank"], "II");
        assert_eq!(value["ranks"][0]["leaguePoints"], 40);
        assert_eq!(value["ranks"][0]["rankScore"], 1440);
    }

    #[test]
    fn peer_profile_carries_row_identity_and_score() {
        let row = LeaderboardEntry {
            puuid: "peer".into(),
            queue_type: "RANKED_SOLO_5x5".into(),
            tier: "GOLD".into(),
            division: Some("II".into()),
            league_points: 10,
            wins: 3,
            losses: 1,
        };
        assert_eq!(row.win_rate(), 0.75);

        let peer = row.into_peer();
        assert_eq!(peer.identity.puuid, "peer");
        assert_eq!(peer.ranks.len(), 1);
        assert_eq!(peer.ranks[0].rank_score, 1200 + 200 + 10);
    }

    #[test]
    fn win_rate_handles_maximal_counts() {
        let row = LeaderboardEntry {
            puuid: "grinder".into(),
            queue_type: "RANKED_SOLO_5x5".into(),
            tier: "IRON".into(),
            division: Some("IV".into()),
            league_points: 0,
            wins: u32::MAX,
            losses: u32::MAX,
        };

        assert_eq!(row.win_rate(), 0.5);
    }

    #[test]
    fn queue_labels() {
        let solo = RankEntry::new("RANKED_SOLO_5x5", "GOLD", None, 0);
        let flex = RankEntry::new("RANKED_FLEX_SR", "GOLD", None, 0);
        let other = RankEntry::new("RANKED_TFT", "GOLD", None, 0);

        assert_eq!(solo.queue_label(), "Ranked Solo/Duo");
        assert_eq!(flex.queue_label(), "Ranked Flex");
        assert_eq!(other.queue_label(), "RANKED_TFT");
    }
}
