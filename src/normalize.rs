use crate::types::{Dataset, Player, RawRecord};

/// Position assumed when a record has none
const DEFAULT_POSITION: u8 = 1;

/// Map one raw record into a canonical, scored player
///
/// Records are expected to be shape-checked by the record source already, so
/// this never fails. A missing position becomes position 1.
pub fn normalize(raw: &RawRecord, dataset: Dataset) -> Player {
    let position = match raw.position {
        Some(0) if dataset.zero_position_is_missing() => DEFAULT_POSITION,
        Some(p) => p,
        None => DEFAULT_POSITION,
    };

    Player::from_parts(
        raw.nickname.clone(),
        raw.team.clone(),
        position,
        raw.matches_analyzed,
        &raw.stats,
    )
}
