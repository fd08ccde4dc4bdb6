//! Fantasy point formula.
//!
//! Every term is additive and computed on the per-match averages. Terms are
//! summed as `f64` and rounded once at the very end.

use crate::types::RawStats;

pub const KILL_POINTS: f64 = 121.0;
/// Starting credit that deaths eat into
pub const DEATH_BASELINE: f64 = 1800.0;
pub const DEATH_PENALTY: f64 = 180.0;
pub const CREEP_POINTS: f64 = 3.0;
pub const GPM_MULTIPLIER: f64 = 2.0;
pub const TOWER_POINTS: f64 = 340.0;
pub const OBSERVER_POINTS: f64 = 113.0;
pub const STACK_POINTS: f64 = 170.0;
pub const RUNE_POINTS: f64 = 121.0;
pub const ROSHAN_POINTS: f64 = 850.0;
/// Cap reached at full participation
pub const TEAMFIGHT_POINTS: f64 = 1895.0;
pub const STUN_POINTS_PER_SECOND: f64 = 15.0;
pub const COURIER_POINTS: f64 = 850.0;
pub const FIRST_BLOOD_POINTS: f64 = 1700.0;
pub const SMOKE_POINTS: f64 = 283.0;

/// Individual contribution of each scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub kills: f64,
    pub deaths: f64,
    pub creep_score: f64,
    pub gpm: f64,
    pub towers: f64,
    pub observers: f64,
    pub stacks: f64,
    pub runes: f64,
    pub roshans: f64,
    pub teamfights: f64,
    pub stuns: f64,
    pub couriers: f64,
    pub first_bloods: f64,
    pub smokes: f64,
}

impl ScoreBreakdown {
    /// Labelled terms in rule order
    pub fn terms(&self) -> [(&'static str, f64); 14] {
        [
            ("Kills", self.kills),
            ("Deaths", self.deaths),
            ("Creep score", self.creep_score),
            ("GPM", self.gpm),
            ("Tower kills", self.towers),
            ("Wards placed", self.observers),
            ("Camps stacked", self.stacks),
            ("Runes grabbed", self.runes),
            ("Roshan kills", self.roshans),
            ("Teamfights", self.teamfights),
            ("Stuns", self.stuns),
            ("Courier kills", self.couriers),
            ("First blood", self.first_bloods),
            ("Smokes used", self.smokes),
        ]
    }

    /// Unrounded sum of all terms
    pub fn total(&self) -> f64 {
        self.terms().iter().map(|(_, v)| v).sum()
    }

    /// Final score, rounded half up
    pub fn points(&self) -> i64 {
        (self.total() + 0.5).floor() as i64
    }
}

/// Compute each rule's contribution for one stat block
pub fn score_breakdown(stats: &RawStats) -> ScoreBreakdown {
    let teamfights = if stats.teamfight_participation >= 1.0 {
        TEAMFIGHT_POINTS
    } else {
        stats.teamfight_participation * TEAMFIGHT_POINTS
    };

    ScoreBreakdown {
        kills: stats.kills * KILL_POINTS,
        deaths: DEATH_BASELINE - stats.deaths * DEATH_PENALTY,
        creep_score: (stats.last_hits + stats.denies) * CREEP_POINTS,
        gpm: stats.gold_per_min * GPM_MULTIPLIER,
        towers: stats.tower_kills * TOWER_POINTS,
        observers: stats.observer_uses * OBSERVER_POINTS,
        stacks: stats.camps_stacked * STACK_POINTS,
        runes: stats.rune_pickups * RUNE_POINTS,
        roshans: stats.roshan_kills * ROSHAN_POINTS,
        teamfights,
        stuns: stats.stuns * STUN_POINTS_PER_SECOND,
        couriers: stats.courier_kills * COURIER_POINTS,
        first_bloods: stats.first_bloods * FIRST_BLOOD_POINTS,
        smokes: stats.smoke_uses * SMOKE_POINTS,
    }
}

/// Fantasy score for one stat block
pub fn score(stats: &RawStats) -> i64 {
    score_breakdown(stats).points()
}
