#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Autopilot state a measured segment is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceBucket {
    AutopilotOn,
    AutopilotOff,
    /// No toggle seen yet when the segment was measured
    AutopilotUnknown,
}

impl DistanceBucket {
    /// Report order
    pub const ALL: [DistanceBucket; 3] = [
        DistanceBucket::AutopilotOn,
        DistanceBucket::AutopilotOff,
        DistanceBucket::AutopilotUnknown,
    ];

    pub fn from_state(autopilot: Option<bool>) -> Self {
        match autopilot {
            Some(true) => DistanceBucket::AutopilotOn,
            Some(false) => DistanceBucket::AutopilotOff,
            None => DistanceBucket::AutopilotUnknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DistanceBucket::AutopilotOn => "autopilot on",
            DistanceBucket::AutopilotOff => "autopilot off",
            DistanceBucket::AutopilotUnknown => "autopilot unknown",
        }
    }
}

/// Segment lengths (meters) grouped by autopilot state, in track order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BucketedDistances {
    autopilot_on: Vec<f64>,
    autopilot_off: Vec<f64>,
    autopilot_unknown: Vec<f64>,
}

impl BucketedDistances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bucket: DistanceBucket, meters: f64) {
        self.bucket_mut(bucket).push(meters);
    }

    pub fn get(&self, bucket: DistanceBucket) -> &[f64] {
        match bucket {
            DistanceBucket::AutopilotOn => &self.autopilot_on,
            DistanceBucket::AutopilotOff => &self.autopilot_off,
            DistanceBucket::AutopilotUnknown => &self.autopilot_unknown,
        }
    }

    fn bucket_mut(&mut self, bucket: DistanceBucket) -> &mut Vec<f64> {
        match bucket {
            DistanceBucket::AutopilotOn => &mut self.autopilot_on,
            DistanceBucket::AutopilotOff => &mut self.autopilot_off,
            DistanceBucket::AutopilotUnknown => &mut self.autopilot_unknown,
        }
    }

    /// Number of segments across all three buckets
    pub fn total_segments(&self) -> usize {
        self.autopilot_on.len() + self.autopilot_off.len() + self.autopilot_unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_segments() == 0
    }

    /// Buckets in report order: on, off, unknown
    pub fn iter(&self) -> impl Iterator<Item = (DistanceBucket, &[f64])> + '_ {
        DistanceBucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }
}
