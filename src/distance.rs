//! Distance accumulation by autopilot state
//!
//! Walks the filtered track once. Toggles update the current autopilot state, geo
//! fixes are measured against the previous fix, and every non-zero segment lands in
//! the bucket for the autopilot state in effect at the second fix of the pair.

use crate::conversion::haversine_distance;
use crate::types::{BucketedDistances, DistanceBucket, Point, Record};

/// Walk-local state, created fresh for each track and dropped afterwards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackState {
    /// `None` until the first toggle is seen
    pub current_autopilot: Option<bool>,
    pub previous_point: Option<Point>,
}

impl TrackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one record, returning the measured segment if it produced one
    pub fn advance(&mut self, record: &Record) -> Option<(DistanceBucket, f64)> {
        match record {
            Record::AutopilotToggle(toggle) => {
                self.current_autopilot = Some(toggle.enabled);
                None
            }
            Record::GeoFix(fix) => {
                let previous = self.previous_point.replace(fix.point)?;
                let meters = haversine_distance(&previous, &fix.point);

                // zero means a repeated fix, not movement
                if meters > 0.0 {
                    Some((DistanceBucket::from_state(self.current_autopilot), meters))
                } else {
                    None
                }
            }
        }
    }
}

/// Bucket every consecutive-fix distance of a filtered, chronological track
///
/// No summation happens here; callers total each bucket themselves.
pub fn accumulate_distances<I>(records: I) -> BucketedDistances
where
    I: IntoIterator<Item = Record>,
{
    let mut state = TrackState::new();
    let mut buckets = BucketedDistances::new();

    for record in records {
        if let Some((bucket, meters)) = state.advance(&record) {
            tracing::trace!("{:.3} m at ts {} -> {}", meters, record.timestamp(), bucket.label());
            buckets.push(bucket, meters);
        }
    }

    tracing::debug!(
        "measured {} segments (on: {}, off: {}, unknown: {})",
        buckets.total_segments(),
        buckets.get(DistanceBucket::AutopilotOn).len(),
        buckets.get(DistanceBucket::AutopilotOff).len(),
        buckets.get(DistanceBucket::AutopilotUnknown).len()
    );
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fix(ts: u32, lat: &str, lon: &str) -> Record {
        Record::geo_fix(Decimal::from(ts), dec(lat), dec(lon))
    }

    fn toggle(ts: u32, enabled: bool) -> Record {
        Record::toggle(Decimal::from(ts), enabled)
    }

    #[test]
    fn test_first_fix_sets_baseline_only() {
        let mut state = TrackState::new();
        assert_eq!(state.advance(&fix(1, "10", "10")), None);
        assert_eq!(state.previous_point, Some(Point::new(dec("10"), dec("10"))));
        assert_eq!(state.current_autopilot, None);
    }

    #[test]
    fn test_toggle_leaves_previous_point_alone() {
        let mut state = TrackState::new();
        state.advance(&fix(1, "10", "10"));
        assert_eq!(state.advance(&toggle(2, false)), None);
        assert_eq!(state.current_autopilot, Some(false));
        assert_eq!(state.previous_point, Some(Point::new(dec("10"), dec("10"))));
    }

    #[test]
    fn test_segment_uses_state_at_second_fix() {
        let mut state = TrackState::new();
        state.advance(&fix(1, "10", "10"));
        state.advance(&toggle(2, true));
        let (bucket, meters) = state.advance(&fix(3, "10.001", "10")).unwrap();
        assert_eq!(bucket, DistanceBucket::AutopilotOn);
        assert!(meters > 0.0);
    }

    #[test]
    fn test_repeated_fix_is_discarded_but_still_advances() {
        let mut state = TrackState::new();
        state.advance(&fix(1, "10", "10"));
        assert_eq!(state.advance(&fix(2, "10.0", "10.00")), None);
        assert_eq!(state.previous_point, Some(Point::new(dec("10.0"), dec("10.00"))));
    }

    #[test]
    fn test_fixes_before_any_toggle_are_unknown() {
        let buckets = accumulate_distances(vec![
            fix(1, "10", "10"),
            fix(2, "10.001", "10"),
            fix(3, "10.002", "10"),
            toggle(4, false),
            fix(5, "10.003", "10"),
        ]);
        assert_eq!(buckets.get(DistanceBucket::AutopilotUnknown).len(), 2);
        assert_eq!(buckets.get(DistanceBucket::AutopilotOff).len(), 1);
        assert!(buckets.get(DistanceBucket::AutopilotOn).is_empty());
    }

    #[test]
    fn test_toggles_alone_emit_nothing() {
        let buckets = accumulate_distances(vec![toggle(1, true), toggle(2, false)]);
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_state_switches_between_segments() {
        let buckets = accumulate_distances(vec![
            toggle(1, true),
            fix(2, "10", "10"),
            fix(3, "10.001", "10"),
            toggle(4, false),
            fix(5, "10.002", "10"),
            toggle(6, true),
            fix(7, "10.002", "10"),
            fix(8, "10.003", "10"),
        ]);
        assert_eq!(buckets.get(DistanceBucket::AutopilotOn).len(), 2);
        assert_eq!(buckets.get(DistanceBucket::AutopilotOff).len(), 1);
        assert!(buckets.get(DistanceBucket::AutopilotUnknown).is_empty());
    }

    #[test]
    fn test_every_segment_is_positive() {
        let track = vec![
            fix(1, "10", "10"),
            fix(2, "10", "10"),
            fix(3, "10.001", "10"),
            fix(4, "10.001", "10"),
            toggle(5, true),
            fix(6, "10.001", "10.001"),
        ];
        let buckets = accumulate_distances(track);
        assert_eq!(buckets.total_segments(), 2);
        assert!(buckets.iter().all(|(_, segments)| segments.iter().all(|&m| m > 0.0)));
    }
}
