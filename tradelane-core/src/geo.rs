//! Vessel position interpolation along a trade lane.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::thresholds::ROUTE_BOW_DEGREES;

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current vessel position along a lane, by voyage progress.
///
/// Linear interpolation between origin and destination, plus a sinusoidal
/// latitude bow of `ROUTE_BOW_DEGREES` peaking at mid-voyage so lanes do not
/// render as straight lines. The bow is cosmetic, not a great-circle track,
/// and vanishes at both endpoints.
///
/// Progress clamps at 1.0, so a vessel past its scheduled arrival reports
/// the destination rather than sailing off the map. A zero-day voyage is
/// treated as already arrived.
pub fn vessel_position(
    origin: Coordinates,
    destination: Coordinates,
    days_elapsed: u32,
    total_days: u32,
) -> Coordinates {
    let progress = if total_days == 0 {
        1.0
    } else {
        (f64::from(days_elapsed) / f64::from(total_days)).min(1.0)
    };

    Coordinates {
        lat: origin.lat
            + (destination.lat - origin.lat) * progress
            + (progress * PI).sin() * ROUTE_BOW_DEGREES,
        lon: origin.lon + (destination.lon - origin.lon) * progress,
    }
}
