//! Ranked player collections and the per-column statistics used for highlighting.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::normalize::normalize;
use crate::types::{Dataset, Player, RawRecord};

/// Positions a player can be filtered by
pub const ALL_POSITIONS: [u8; 5] = [1, 2, 3, 4, 5];

/// One ranked leaderboard
///
/// The backing sequence is sorted by fantasy points, highest first. Players
/// with equal points keep the order in which they were loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    dataset: Dataset,
    players: Vec<Player>,
}

impl Roster {
    /// Normalize, score and rank a batch of records
    pub fn load(dataset: Dataset, records: &[RawRecord]) -> Self {
        let players = records.iter().map(|r| normalize(r, dataset)).collect();
        Self::from_players(dataset, players)
    }

    pub fn from_players(dataset: Dataset, mut players: Vec<Player>) -> Self {
        // sort_by is stable, so ties keep load order
        players.sort_by(|a, b| b.fantasy_points().cmp(&a.fantasy_points()));
        debug!("ROSTER: {} ranked {} players", dataset.name(), players.len());
        Self { dataset, players }
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players matching the filter, backing order preserved
    pub fn filtered(&self, filter: &PositionFilter) -> Vec<&Player> {
        self.players.iter().filter(|p| filter.accepts(p.position)).collect()
    }
}

/// Set of positions currently selected for display
///
/// A row is shown iff its position is in the active set, so an empty set
/// shows nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionFilter {
    active: BTreeSet<u8>,
}

impl Default for PositionFilter {
    fn default() -> Self {
        Self::new(ALL_POSITIONS)
    }
}

impl PositionFilter {
    pub fn new(positions: impl IntoIterator<Item = u8>) -> Self {
        Self {
            active: positions
                .into_iter()
                .filter(|p| ALL_POSITIONS.contains(p))
                .collect(),
        }
    }

    /// Flip one position in or out of the active set
    ///
    /// Positions outside 1-5 have no control and are ignored.
    pub fn toggle(&mut self, position: u8) -> bool {
        if !ALL_POSITIONS.contains(&position) {
            return false;
        }
        if !self.active.remove(&position) {
            self.active.insert(position);
        }
        true
    }

    pub fn accepts(&self, position: u8) -> bool {
        self.active.contains(&position)
    }

    pub fn is_active(&self, position: u8) -> bool {
        self.active.contains(&position)
    }

    pub fn active(&self) -> impl Iterator<Item = u8> + '_ {
        self.active.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Numeric columns that take part in best/worst highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
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

impl Metric {
    pub const ALL: [Metric; 16] = [
        Metric::FantasyPoints,
        Metric::Kills,
        Metric::Deaths,
        Metric::LastHits,
        Metric::Denies,
        Metric::Gpm,
        Metric::TowerKills,
        Metric::ObserverUses,
        Metric::CampsStacked,
        Metric::RunePickups,
        Metric::RoshanKills,
        Metric::TeamfightParticipation,
        Metric::Stuns,
        Metric::CourierKills,
        Metric::SmokeUses,
        Metric::FirstBloods,
    ];

    /// Raw comparable value; teamfight stays a 0-1 fraction here
    pub fn value(&self, p: &Player) -> f64 {
        match self {
            Self::FantasyPoints => p.fantasy_points() as f64,
            Self::Kills => p.kills,
            Self::Deaths => p.deaths,
            Self::LastHits => p.last_hits,
            Self::Denies => p.denies,
            Self::Gpm => p.gpm,
            Self::TowerKills => p.tower_kills,
            Self::ObserverUses => p.observer_uses,
            Self::CampsStacked => p.camps_stacked,
            Self::RunePickups => p.rune_pickups,
            Self::RoshanKills => p.roshan_kills,
            Self::TeamfightParticipation => p.teamfight_participation,
            Self::Stuns => p.stuns,
            Self::CourierKills => p.courier_kills,
            Self::SmokeUses => p.smoke_uses,
            Self::FirstBloods => p.first_bloods,
        }
    }

    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::Deaths)
    }
}

/// Observed range of one column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

/// Per-metric min/max over a filtered view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnStats {
    ranges: HashMap<Metric, ColumnRange>,
}

impl ColumnStats {
    /// Empty view yields empty stats (nothing highlighted)
    pub fn compute(view: &[&Player]) -> Self {
        if view.is_empty() {
            return Self::default();
        }

        let ranges = Metric::ALL
            .iter()
            .map(|metric| {
                let range = view.iter().map(|p| metric.value(p)).fold(
                    ColumnRange {
                        min: f64::INFINITY,
                        max: f64::NEG_INFINITY,
                    },
                    |acc, v| ColumnRange {
                        min: acc.min.min(v),
                        max: acc.max.max(v),
                    },
                );
                (*metric, range)
            })
            .collect();

        Self { ranges }
    }

    pub fn get(&self, metric: Metric) -> Option<&ColumnRange> {
        self.ranges.get(&metric)
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Classify one player's value in a column
    pub fn highlight(&self, metric: Metric, player: &Player) -> Highlight {
        classify(metric.value(player), self.get(metric), metric.lower_is_better())
    }
}

/// Presentational marker for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Best,
    Worst,
    None,
}

/// Decide whether a value is the column's best, worst or neither
///
/// A column where every value is equal (min == max) highlights nothing.
pub fn classify(value: f64, range: Option<&ColumnRange>, lower_is_better: bool) -> Highlight {
    let Some(range) = range else {
        return Highlight::None;
    };
    if range.min == range.max {
        return Highlight::None;
    }

    let (best, worst) = if lower_is_better {
        (range.min, range.max)
    } else {
        (range.max, range.min)
    };

    if value == best {
        Highlight::Best
    } else if value == worst {
        Highlight::Worst
    } else {
        Highlight::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_record, create_mock_records};

    fn roster() -> Roster {
        Roster::load(Dataset::Regular, &create_mock_records(Dataset::Regular))
    }

    #[test]
    fn test_load_sorts_descending_by_points() {
        let roster = roster();
        assert!(!roster.is_empty());
        for pair in roster.players().windows(2) {
            assert!(pair[0].fantasy_points() >= pair[1].fantasy_points());
        }
    }

    #[test]
    fn test_ties_keep_load_order() {
        let a = create_mock_record("Alpha", "A", 1, 5.0);
        let b = create_mock_record("Bravo", "B", 1, 5.0);
        let c = create_mock_record("Charlie", "C", 1, 9.0);

        let roster = Roster::load(Dataset::Regular, &[a, b, c]);
        let names: Vec<_> = roster.players().iter().map(|p| p.nickname.as_str()).collect();
        assert_eq!(names, vec!["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn test_empty_input_is_empty_roster() {
        let roster = Roster::load(Dataset::Tournament, &[]);
        assert!(roster.is_empty());
        assert_eq!(roster.dataset(), Dataset::Tournament);
    }

    #[test]
    fn test_filtered_keeps_backing_order() {
        let roster = roster();
        let filter = PositionFilter::new([1, 3]);
        let view = roster.filtered(&filter);
        assert!(view.iter().all(|p| p.position == 1 || p.position == 3));
        for pair in view.windows(2) {
            assert!(pair[0].fantasy_points() >= pair[1].fantasy_points());
        }
    }

    #[test]
    fn test_empty_active_set_shows_no_rows() {
        let roster = roster();
        let mut filter = PositionFilter::default();
        for pos in ALL_POSITIONS {
            filter.toggle(pos);
        }
        assert!(filter.is_empty());
        assert!(roster.filtered(&filter).is_empty());
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut filter = PositionFilter::default();
        assert!(filter.is_active(2));
        assert!(filter.toggle(2));
        assert!(!filter.is_active(2));
        assert!(filter.toggle(2));
        assert!(filter.is_active(2));
    }

    #[test]
    fn test_toggle_unknown_position_is_ignored() {
        let mut filter = PositionFilter::default();
        assert!(!filter.toggle(9));
        assert_eq!(filter, PositionFilter::default());
        assert_eq!(PositionFilter::new([0, 2, 7]).active().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_column_stats_empty_view() {
        let stats = ColumnStats::compute(&[]);
        assert!(stats.is_empty());
        assert_eq!(stats.get(Metric::Kills), None);
    }

    #[test]
    fn test_column_stats_cover_all_metrics() {
        let roster = roster();
        let view = roster.filtered(&PositionFilter::default());
        let stats = ColumnStats::compute(&view);
        for metric in Metric::ALL {
            let range = stats.get(metric).unwrap();
            assert!(range.min <= range.max);
        }
        let top = roster.players()[0].fantasy_points() as f64;
        assert_eq!(stats.get(Metric::FantasyPoints).unwrap().max, top);
    }

    #[test]
    fn test_column_stats_follow_filter() {
        let roster = roster();
        let all = ColumnStats::compute(&roster.filtered(&PositionFilter::default()));
        let supports = roster.filtered(&PositionFilter::new([5]));
        let narrowed = ColumnStats::compute(&supports);
        let max_gpm = supports.iter().map(|p| p.gpm).fold(f64::MIN, f64::max);
        assert_eq!(narrowed.get(Metric::Gpm).unwrap().max, max_gpm);
        assert!(narrowed.get(Metric::Gpm).unwrap().max <= all.get(Metric::Gpm).unwrap().max);
    }

    #[test]
    fn test_classify_higher_is_better() {
        let range = ColumnRange { min: 2.0, max: 8.0 };
        assert_eq!(classify(8.0, Some(&range), false), Highlight::Best);
        assert_eq!(classify(2.0, Some(&range), false), Highlight::Worst);
        assert_eq!(classify(5.0, Some(&range), false), Highlight::None);
    }

    #[test]
    fn test_classify_lower_is_better() {
        let range = ColumnRange { min: 2.0, max: 8.0 };
        assert_eq!(classify(2.0, Some(&range), true), Highlight::Best);
        assert_eq!(classify(8.0, Some(&range), true), Highlight::Worst);
    }

    #[test]
    fn test_classify_without_stats() {
        assert_eq!(classify(1.0, None, false), Highlight::None);
    }

    #[test]
    fn test_tie_column_highlights_nothing_consistently() {
        let range = ColumnRange { min: 3.0, max: 3.0 };
        for _ in 0..3 {
            assert_eq!(classify(3.0, Some(&range), false), Highlight::None);
            assert_eq!(classify(3.0, Some(&range), true), Highlight::None);
        }
    }

    #[test]
    fn test_only_deaths_is_lower_better() {
        let lower: Vec<_> = Metric::ALL.iter().filter(|m| m.lower_is_better()).collect();
        assert_eq!(lower, vec![&Metric::Deaths]);
    }

    #[test]
    fn test_highlight_uses_raw_teamfight_fraction() {
        let roster = roster();
        let view = roster.filtered(&PositionFilter::default());
        let stats = ColumnStats::compute(&view);
        let range = stats.get(Metric::TeamfightParticipation).unwrap();
        assert!(range.max <= 1.0);
    }
}
