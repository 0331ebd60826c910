//! Angle conversion and great-circle distance
//!
//! Coordinates stay in `Decimal` through the degree to radian conversion and the
//! coordinate differences. Values only become `f64` at the trigonometric step, so
//! float rounding is confined to `sin`/`cos`/`atan2` themselves.

use crate::types::Point;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Pi to 18 decimal places
pub fn decimal_pi() -> Decimal {
    Decimal::from_i128_with_scale(3_141_592_653_589_793_238, 18)
}

/// Convert decimal degrees to radians without leaving decimal arithmetic
pub fn degrees_to_radians(degrees: Decimal) -> Decimal {
    // dividing first keeps the product in range for any representable input
    degrees / Decimal::from(180) * decimal_pi()
}

fn to_float(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Haversine distance between two points, in meters
///
/// Identical points return exactly `0.0` without touching the trig functions.
pub fn haversine_distance(from: &Point, to: &Point) -> f64 {
    if from == to {
        return 0.0;
    }

    let two = Decimal::from(2);
    let lat1 = degrees_to_radians(from.lat);
    let lon1 = degrees_to_radians(from.lon);
    let lat2 = degrees_to_radians(to.lat);
    let lon2 = degrees_to_radians(to.lon);

    let half_dlat = to_float((lat2 - lat1) / two);
    let half_dlon = to_float((lon2 - lon1) / two);

    let a = half_dlat.sin().powi(2)
        + to_float(lat1).cos() * to_float(lat2).cos() * half_dlon.sin().powi(2);
    // rounding can push `a` a hair past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
