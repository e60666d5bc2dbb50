//! Rank scoring: maps a (tier, division, league points) standing to a single
//! integer so that standings of different players can be compared directly.
//!
//! `score = tier weight * TIER_MULTIPLIER + division weight * DIVISION_MULTIPLIER + LP`
//!
//! Division weights are 0, 10, 20, 30 for IV to I. With LP below 100 inside a
//! division, every division and tier boundary is strictly ordered. The three
//! apex tiers have no division, whatever the payload says.

use std::fmt;

pub const TIER_MULTIPLIER: u32 = 400;
pub const DIVISION_MULTIPLIER: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub const ALL: [Tier; 10] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    /// Case-insensitive lookup, `None` for names outside the ladder.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iron => "IRON",
            Self::Bronze => "BRONZE",
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Platinum => "PLATINUM",
            Self::Emerald => "EMERALD",
            Self::Diamond => "DIAMOND",
            Self::Master => "MASTER",
            Self::Grandmaster => "GRANDMASTER",
            Self::Challenger => "CHALLENGER",
        }
    }

    pub fn weight(&self) -> u32 {
        *self as u32
    }

    /// Master, Grandmaster and Challenger: no divisions, one ladder per queue.
    pub fn is_apex(&self) -> bool {
        matches!(self, Self::Master | Self::Grandmaster | Self::Challenger)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Division {
    IV,
    III,
    II,
    I,
}

impl Division {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "IV" => Some(Self::IV),
            "III" => Some(Self::III),
            "II" => Some(Self::II),
            "I" => Some(Self::I),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IV => "IV",
            Self::III => "III",
            Self::II => "II",
            Self::I => "I",
        }
    }

    pub fn weight(&self) -> u32 {
        match self {
            Self::IV => 0,
            Self::III => 10,
            Self::II => 20,
            Self::I => 30,
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the tier name designates one of the apex tiers.
pub fn is_high_elo(tier: &str) -> bool {
    Tier::from_name(tier).is_some_and(|t| t.is_apex())
}

/// Score of a standing. Unknown tier or division names contribute nothing
/// instead of failing; validate names upstream when ordering must be exact.
pub fn score(tier: &str, division: Option<&str>, league_points: u32) -> u32 {
    let tier = Tier::from_name(tier);
    let tier_part = tier.map_or(0, |t| t.weight() * TIER_MULTIPLIER);

    let division_part = match tier {
        Some(t) if t.is_apex() => 0,
        _ => division
            .and_then(Division::from_name)
            .map_or(0, |d| d.weight() * DIVISION_MULTIPLIER),
    };

    (tier_part + division_part).saturating_add(league_points)
}
