/// Shared types used across the application
///
/// This module contains the raw record shape read from disk, the canonical
/// player entity derived from it, and the dataset descriptor that selects
/// between the regular-season and tournament leaderboards.
use serde::Deserialize;

use crate::scoring;

/// Per-player stat block as stored in a record file
///
/// All values are per-match averages, so every field is fractional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct RawStats {
    pub kills: f64,
    pub deaths: f64,
    pub last_hits: f64,
    pub denies: f64,
    pub gold_per_min: f64,
    pub tower_kills: f64,
    pub observer_uses: f64,
    pub camps_stacked: f64,
    pub rune_pickups: f64,
    pub roshan_kills: f64,
    /// Fraction in [0, 1]
    pub teamfight_participation: f64,
    /// Seconds of stun applied
    pub stuns: f64,
    pub courier_kills: f64,
    pub smoke_uses: f64,
    pub first_bloods: f64,
}

/// One player record as produced by the record source
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub nickname: String,
    pub team: String,
    #[serde(default)]
    pub position: Option<u8>,
    pub matches_analyzed: u32,
    pub stats: RawStats,
}

/// Which leaderboard a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dataset {
    Regular,
    Tournament,
}

/// Record files known to exist for the regular leaderboard
const KNOWN_REGULAR_RECORDS: &[&str] = &[
    "9Class.json",
    "AMMAR_THE_F.json",
    "Bach.json",
    "Collapse.json",
    "Cr1t-.json",
    "DM.json",
    "Dukalis.json",
    "Larl.json",
    "Malr1ne.json",
    "Miposhka.json",
    "No[o]ne-.json",
    "NothingToSay.json",
    "planet.json",
    "rue.json",
    "Satanic.json",
    "shiro.json",
    "skiter.json",
    "Sneyking.json",
    "y`.json",
    "Yatoro.json",
];

/// Extra names worth probing beyond the known roster
const SPECULATIVE_REGULAR_RECORDS: &[&str] = &[
    "player1.json",
    "player2.json",
    "new_player.json",
    "test_player.json",
    "player_2025.json",
    "ti_player.json",
    "fantasy_player.json",
];

impl Dataset {
    pub fn all() -> [Self; 2] {
        [Self::Regular, Self::Tournament]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Regular => "Regular Season",
            Self::Tournament => "Tournament",
        }
    }

    /// The other dataset (used to cycle focus between the two tables)
    pub fn other(&self) -> Self {
        match self {
            Self::Regular => Self::Tournament,
            Self::Tournament => Self::Regular,
        }
    }

    /// Whether a recorded position of 0 means "not recorded"
    ///
    /// Tournament exports write 0 for players without a role.
    pub fn zero_position_is_missing(&self) -> bool {
        matches!(self, Self::Tournament)
    }

    /// Identifiers to probe when no manifest is available
    pub fn probe_candidates(&self) -> Vec<String> {
        match self {
            Self::Regular => KNOWN_REGULAR_RECORDS
                .iter()
                .chain(SPECULATIVE_REGULAR_RECORDS.iter())
                .map(|s| s.to_string())
                .collect(),
            Self::Tournament => Vec::new(),
        }
    }

    /// Identifiers used when probing itself fails
    pub fn fallback_records(&self) -> Vec<String> {
        match self {
            Self::Regular => KNOWN_REGULAR_RECORDS.iter().map(|s| s.to_string()).collect(),
            Self::Tournament => Vec::new(),
        }
    }
}

/// Canonical player entity
///
/// Built only by [`crate::normalize::normalize`]; the fantasy score is computed
/// from the player's own stats at construction and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub nickname: String,
    pub team: String,
    pub position: u8,
    pub matches: u32,
    pub kills: f64,
    pub deaths: f64,
    pub last_hits: f64,
    pub denies: f64,
    pub gpm: f64,
    pub tower_kills: f64,
    pub observer_uses: f64,
    pub camps_stacked: f64,
    pub rune_pickups: f64,
    pub roshan_kills: f64,
    pub teamfight_participation: f64,
    pub stuns: f64,
    pub courier_kills: f64,
    pub smoke_uses: f64,
    pub first_bloods: f64,
    fantasy_points: i64,
}

impl Player {
    pub(crate) fn from_parts(
        nickname: String,
        team: String,
        position: u8,
        matches: u32,
        stats: &RawStats,
    ) -> Self {
        Self {
            nickname,
            team,
            position,
            matches,
            kills: stats.kills,
            deaths: stats.deaths,
            last_hits: stats.last_hits,
            denies: stats.denies,
            gpm: stats.gold_per_min,
            tower_kills: stats.tower_kills,
            observer_uses: stats.observer_uses,
            camps_stacked: stats.camps_stacked,
            rune_pickups: stats.rune_pickups,
            roshan_kills: stats.roshan_kills,
            teamfight_participation: stats.teamfight_participation,
            stuns: stats.stuns,
            courier_kills: stats.courier_kills,
            smoke_uses: stats.smoke_uses,
            first_bloods: stats.first_bloods,
            fantasy_points: scoring::score(stats),
        }
    }

    pub fn fantasy_points(&self) -> i64 {
        self.fantasy_points
    }

    /// Rebuild the stat block this player was derived from
    pub fn stats(&self) -> RawStats {
        RawStats {
            kills: self.kills,
            deaths: self.deaths,
            last_hits: self.last_hits,
            denies: self.denies,
            gold_per_min: self.gpm,
            tower_kills: self.tower_kills,
            observer_uses: self.observer_uses,
            camps_stacked: self.camps_stacked,
            rune_pickups: self.rune_pickups,
            roshan_kills: self.roshan_kills,
            teamfight_participation: self.teamfight_participation,
            stuns: self.stuns,
            courier_kills: self.courier_kills,
            smoke_uses: self.smoke_uses,
            first_bloods: self.first_bloods,
        }
    }
}
