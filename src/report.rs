//! Per-state distance totals and their text rendering

use crate::types::{BucketedDistances, DistanceBucket};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Total meters travelled in each autopilot state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceSummary {
    pub autopilot_on: f64,
    pub autopilot_off: f64,
    pub autopilot_unknown: f64,
}

impl DistanceSummary {
    /// Sum each bucket independently
    pub fn from_buckets(buckets: &BucketedDistances) -> Self {
        // fold from +0.0: `Sum` for floats starts at -0.0, which prints as "-0"
        let total = |bucket: DistanceBucket| {
            buckets
                .get(bucket)
                .iter()
                .fold(0.0, |acc, meters| acc + meters)
        };
        Self {
            autopilot_on: total(DistanceBucket::AutopilotOn),
            autopilot_off: total(DistanceBucket::AutopilotOff),
            autopilot_unknown: total(DistanceBucket::AutopilotUnknown),
        }
    }

    pub fn total(&self, bucket: DistanceBucket) -> f64 {
        match bucket {
            DistanceBucket::AutopilotOn => self.autopilot_on,
            DistanceBucket::AutopilotOff => self.autopilot_off,
            DistanceBucket::AutopilotUnknown => self.autopilot_unknown,
        }
    }

    /// One `<label>: <meters> m` line per bucket, in report order
    pub fn lines(&self) -> Vec<String> {
        DistanceBucket::ALL
            .iter()
            .map(|bucket| format!("{}: {} m", bucket.label(), self.total(*bucket)))
            .collect()
    }
}

impl fmt::Display for DistanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
