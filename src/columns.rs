//! Leaderboard column contract.
//!
//! Every column declares its [`ColumnKind`] once; sort keys are taken from the
//! canonical player fields, never from formatted cell text.

use std::cmp::Ordering;

use crate::formatting::{format_percent, format_points, format_stat};
use crate::roster::Metric;
use crate::types::Player;

/// How a column's values compare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    /// Numeric, displayed as a percentage
    Percentage,
    Text,
}

/// Value a row is sorted by
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Numbers compare numerically, text case-insensitively; mixed keys fall
    /// back to comparing their lower-cased string forms
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (a, b) => a.as_lower_string().cmp(&b.as_lower_string()),
        }
    }

    fn as_lower_string(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.to_lowercase(),
        }
    }
}

/// Leaderboard columns in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Position,
    Nickname,
    Team,
    FantasyPoints,
    Kills,
    Deaths,
    LastHits,
    Denies,
    Gpm,
    TowerKills,
    ObserverUses,
    CampsStacked,
    RunePickups,
    RoshanKills,
    TeamfightParticipation,
    Stuns,
    CourierKills,
    SmokeUses,
    FirstBloods,
}

impl Column {
    pub const ALL: [Column; 19] = [
        Column::Position,
        Column::Nickname,
        Column::Team,
        Column::FantasyPoints,
        Column::Kills,
        Column::Deaths,
        Column::LastHits,
        Column::Denies,
        Column::Gpm,
        Column::TowerKills,
        Column::ObserverUses,
        Column::CampsStacked,
        Column::RunePickups,
        Column::RoshanKills,
        Column::TeamfightParticipation,
        Column::Stuns,
        Column::CourierKills,
        Column::SmokeUses,
        Column::FirstBloods,
    ];

    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Look a column up by its CLI name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Column> {
        let name = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name || c.header().to_lowercase() == name)
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Nickname | Self::Team => ColumnKind::Text,
            Self::TeamfightParticipation => ColumnKind::Percentage,
            _ => ColumnKind::Numeric,
        }
    }

    /// Short header shown above the column
    pub fn header(&self) -> &'static str {
        match self {
            Self::Position => "Pos",
            Self::Nickname => "Player",
            Self::Team => "Team",
            Self::FantasyPoints => "FP",
            Self::Kills => "K",
            Self::Deaths => "D",
            Self::LastHits => "LH",
            Self::Denies => "DN",
            Self::Gpm => "GPM",
            Self::TowerKills => "Twr",
            Self::ObserverUses => "Obs",
            Self::CampsStacked => "Stk",
            Self::RunePickups => "Rune",
            Self::RoshanKills => "Rosh",
            Self::TeamfightParticipation => "TF%",
            Self::Stuns => "Stun",
            Self::CourierKills => "Cour",
            Self::SmokeUses => "Smk",
            Self::FirstBloods => "FB",
        }
    }

    /// Name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Nickname => "nickname",
            Self::Team => "team",
            Self::FantasyPoints => "points",
            Self::Kills => "kills",
            Self::Deaths => "deaths",
            Self::LastHits => "last-hits",
            Self::Denies => "denies",
            Self::Gpm => "gpm",
            Self::TowerKills => "towers",
            Self::ObserverUses => "observers",
            Self::CampsStacked => "stacks",
            Self::RunePickups => "runes",
            Self::RoshanKills => "roshans",
            Self::TeamfightParticipation => "teamfights",
            Self::Stuns => "stuns",
            Self::CourierKills => "couriers",
            Self::SmokeUses => "smokes",
            Self::FirstBloods => "first-bloods",
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Self::Position => 3,
            Self::Nickname => 14,
            Self::Team => 12,
            Self::FantasyPoints => 7,
            Self::LastHits | Self::Gpm | Self::TeamfightParticipation => 6,
            Self::Stuns | Self::Kills | Self::Deaths | Self::Denies => 5,
            _ => 4,
        }
    }

    /// Highlighted metric backing this column, if any
    pub fn metric(&self) -> Option<Metric> {
        let metric = match self {
            Self::Position | Self::Nickname | Self::Team => return None,
            Self::FantasyPoints => Metric::FantasyPoints,
            Self::Kills => Metric::Kills,
            Self::Deaths => Metric::Deaths,
            Self::LastHits => Metric::LastHits,
            Self::Denies => Metric::Denies,
            Self::Gpm => Metric::Gpm,
            Self::TowerKills => Metric::TowerKills,
            Self::ObserverUses => Metric::ObserverUses,
            Self::CampsStacked => Metric::CampsStacked,
            Self::RunePickups => Metric::RunePickups,
            Self::RoshanKills => Metric::RoshanKills,
            Self::TeamfightParticipation => Metric::TeamfightParticipation,
            Self::Stuns => Metric::Stuns,
            Self::CourierKills => Metric::CourierKills,
            Self::SmokeUses => Metric::SmokeUses,
            Self::FirstBloods => Metric::FirstBloods,
        };
        Some(metric)
    }

    pub fn sort_key(&self, player: &Player) -> SortKey {
        match self {
            Self::Position => SortKey::Number(player.position as f64),
            Self::Nickname => SortKey::Text(player.nickname.clone()),
            Self::Team => SortKey::Text(player.team.clone()),
            other => SortKey::Number(other.metric().map(|m| m.value(player)).unwrap_or(0.0)),
        }
    }

    /// Display text for a cell
    pub fn format(&self, player: &Player) -> String {
        match self {
            Self::Position => player.position.to_string(),
            Self::Nickname => player.nickname.clone(),
            Self::Team => player.team.clone(),
            Self::FantasyPoints => format_points(player.fantasy_points()),
            Self::TeamfightParticipation => format_percent(player.teamfight_participation),
            Self::LastHits => format_stat(player.last_hits, 1),
            Self::Denies => format_stat(player.denies, 1),
            other => format_stat(other.metric().map(|m| m.value(player)).unwrap_or(0.0), 2),
        }
    }
}
