pub mod explain;
pub mod leaderboard;

use anyhow::{bail, Result};

use crate::roster::{PositionFilter, ALL_POSITIONS};

/// Build a position filter from CLI positions, defaulting to the configured set
///
/// Returns an error if a position is outside 1-5.
pub fn parse_positions(positions: Option<Vec<u8>>, default: &[u8]) -> Result<PositionFilter> {
    let positions = positions.unwrap_or_else(|| default.to_vec());
    if let Some(bad) = positions.iter().find(|p| !ALL_POSITIONS.contains(p)) {
        bail!("Invalid position {}. Positions are 1-5", bad);
    }
    Ok(PositionFilter::new(positions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positions_defaults() {
        let filter = parse_positions(None, &[1, 2]).unwrap();
        assert!(filter.is_active(1));
        assert!(filter.is_active(2));
        assert!(!filter.is_active(3));
    }

    #[test]
    fn test_parse_positions_explicit() {
        let filter = parse_positions(Some(vec![4, 5]), &ALL_POSITIONS).unwrap();
        assert_eq!(filter.active().collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn test_parse_positions_rejects_out_of_range() {
        let err = parse_positions(Some(vec![1, 6]), &ALL_POSITIONS).unwrap_err();
        assert!(err.to_string().contains("Invalid position 6"));
    }
}
