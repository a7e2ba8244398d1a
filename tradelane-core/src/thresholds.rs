//! Centralized weights and thresholds for shipment risk evaluation.
//!
//! Changing a value here affects BOTH the per-shipment evaluation (in
//! `risk.rs` / `status.rs` / `stockout.rs`) and the fleet metrics computed
//! downstream, so every caller sees the same calibration.

/// Weight of the climate risk factor in the composite score.
pub const CLIMATE_WEIGHT: f64 = 0.3;

/// Weight of the port congestion factor in the composite score.
/// Congestion dominates the blend deliberately.
pub const CONGESTION_WEIGHT: f64 = 0.5;

/// Weight of the social instability factor in the composite score.
pub const INSTABILITY_WEIGHT: f64 = 0.2;

/// Maximum risk-induced delay in days, reached only at a score of 100.
pub const MAX_RISK_DELAY_DAYS: f64 = 15.0;

/// Score above which a shipment is classified HIGH RISK (strict comparison).
/// Fixed classification cutoff, NOT the configurable critical-risk
/// threshold used for metric counts.
pub const HIGH_RISK_SCORE: f64 = 70.0;

/// Score above which a shipment is classified MEDIUM RISK (strict comparison).
pub const MEDIUM_RISK_SCORE: f64 = 40.0;

/// Default safety margin, in days, between projected stockout and arrival.
pub const DEFAULT_STOCKOUT_BUFFER_DAYS: u32 = 5;

/// Valid range for the configurable stockout buffer.
pub const MIN_STOCKOUT_BUFFER_DAYS: u32 = 3;
pub const MAX_STOCKOUT_BUFFER_DAYS: u32 = 15;

/// Default critical-risk threshold for metric counts.
pub const DEFAULT_CRITICAL_RISK_THRESHOLD: f64 = 70.0;

/// Valid range for the configurable critical-risk threshold.
pub const MIN_CRITICAL_RISK_THRESHOLD: f64 = 50.0;
pub const MAX_CRITICAL_RISK_THRESHOLD: f64 = 90.0;

/// Amplitude, in degrees of latitude, of the sinusoidal bow applied to
/// interpolated vessel positions so lanes do not render as straight lines.
pub const ROUTE_BOW_DEGREES: f64 = 2.0;
