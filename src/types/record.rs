use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees, kept in exact decimal form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub lat: Decimal,
    pub lon: Decimal,
}

impl Point {
    pub fn new(lat: Decimal, lon: Decimal) -> Self {
        Self { lat, lon }
    }

    /// True for the (0.0, 0.0) position the feed reports when it has no GPS lock
    ///
    /// The comparison is decimal-exact: `0`, `0.0` and `0.000` all match, `0.0000001` does not.
    pub fn is_sentinel(&self) -> bool {
        self.lat.is_zero() && self.lon.is_zero()
    }
}

/// Timestamped position report
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoFix {
    pub timestamp: Decimal,
    pub point: Point,
}

/// Timestamped autopilot engage/disengage marker
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AutopilotToggle {
    pub timestamp: Decimal,
    pub enabled: bool,
}

/// One line of the telemetry feed
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Record {
    GeoFix(GeoFix),
    AutopilotToggle(AutopilotToggle),
}

impl Record {
    pub fn geo_fix(timestamp: Decimal, lat: Decimal, lon: Decimal) -> Self {
        Record::GeoFix(GeoFix {
            timestamp,
            point: Point::new(lat, lon),
        })
    }

    pub fn toggle(timestamp: Decimal, enabled: bool) -> Self {
        Record::AutopilotToggle(AutopilotToggle { timestamp, enabled })
    }

    /// The `ts` field shared by both record shapes
    pub fn timestamp(&self) -> Decimal {
        match self {
            Record::GeoFix(fix) => fix.timestamp,
            Record::AutopilotToggle(toggle) => toggle.timestamp,
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self, Record::AutopilotToggle(_))
    }
}
