//! Correctness tests for tradelane-core.
//!
//! Validates that:
//! 1. The composite score is the exact weighted sum over the full domain
//! 2. Delay derivation truncates and caps at 15 days
//! 3. Status classification honors precedence and strict cutoffs
//! 4. The stockout forecast stays independent of the status
//! 5. Vessel positions progress monotonically and clamp at arrival
//! 6. Determinism: same inputs always produce the same outputs

use tradelane_core::{
    classify_status, composite_risk_score, evaluate, predict_stockout, risk_delay_days,
    vessel_position, Coordinates, DomainError, ShipmentInput, ShipmentStatus, StockoutPrediction,
};

// ---------------------------------------------------------------------------
// Helper input builders
// ---------------------------------------------------------------------------

fn input(
    climate: u8,
    congestion: u8,
    instability: u8,
    transit: u32,
    inventory: u32,
    consumption: u32,
) -> ShipmentInput {
    ShipmentInput {
        climate_risk: climate,
        port_congestion: congestion,
        social_instability: instability,
        base_transit_days: transit,
        current_inventory: inventory,
        daily_consumption: consumption,
    }
}

const NINGBO: Coordinates = Coordinates {
    lat: 29.8683,
    lon: 121.5440,
};
const CAUCEDO: Coordinates = Coordinates {
    lat: 18.4264,
    lon: -69.6618,
};

// ---------------------------------------------------------------------------
// Risk score properties
// ---------------------------------------------------------------------------

#[test]
fn score_is_exact_weighted_sum_over_domain() {
    // Sweep a coarse grid of the input cube; every point must match the
    // closed form and land inside [0, 100].
    for climate in (0..=100).step_by(20) {
        for congestion in (0..=100).step_by(20) {
            for instability in (0..=100).step_by(20) {
                let score =
                    composite_risk_score(climate as u8, congestion as u8, instability as u8);
                let expected =
                    climate as f64 * 0.3 + congestion as f64 * 0.5 + instability as f64 * 0.2;
                assert!((score - expected).abs() < 1e-9);
                assert!((0.0..=100.0).contains(&score));
            }
        }
    }
}

#[test]
fn score_corner_cases() {
    assert_eq!(composite_risk_score(100, 100, 100), 100.0);
    assert_eq!(composite_risk_score(0, 0, 0), 0.0);
    assert_eq!(composite_risk_score(50, 50, 50), 50.0);
}

#[test]
fn delay_caps_at_fifteen_days() {
    assert_eq!(risk_delay_days(100.0), 15);
    assert_eq!(risk_delay_days(0.0), 0);
    assert_eq!(risk_delay_days(66.6), 9);
    for score in 0..=100 {
        assert!(risk_delay_days(f64::from(score)) <= 15);
    }
}

// ---------------------------------------------------------------------------
// Status precedence
// ---------------------------------------------------------------------------

#[test]
fn exhaustion_before_arrival_overrides_score() {
    for score in [0.0, 10.0, 41.0, 71.0, 100.0] {
        assert_eq!(
            classify_status(score, 5.0, 30),
            ShipmentStatus::Critical,
            "score {} must not mask exhaustion",
            score
        );
    }
}

#[test]
fn status_cutoff_boundaries() {
    assert_eq!(classify_status(71.0, 100.0, 30), ShipmentStatus::HighRisk);
    assert_eq!(classify_status(41.0, 100.0, 30), ShipmentStatus::MediumRisk);
    assert_eq!(classify_status(40.0, 100.0, 30), ShipmentStatus::Normal);
}

// ---------------------------------------------------------------------------
// Stockout forecast
// ---------------------------------------------------------------------------

#[test]
fn forecast_boundaries() {
    // runway 10, transit 15: buffer -5
    assert_eq!(
        predict_stockout(100, 10, 15, 5),
        Ok(StockoutPrediction::Imminent)
    );
    // runway 20, transit 15: buffer exactly the margin
    assert_eq!(
        predict_stockout(200, 10, 15, 5),
        Ok(StockoutPrediction::Normal)
    );
}

#[test]
fn forecast_and_status_stay_independent() {
    // Same shipment, two buffer settings: the forecast moves, the status
    // does not.
    let shipment = input(20, 30, 10, 30, 400, 10);
    let tight = evaluate(&shipment, 5).unwrap();
    let generous = evaluate(&shipment, 10).unwrap();
    assert_eq!(tight.status, generous.status);
    assert_eq!(tight.stockout, StockoutPrediction::Normal);
    assert_eq!(generous.stockout, StockoutPrediction::HighRisk);
}

#[test]
fn zero_consumption_rejected_everywhere() {
    let bad = input(20, 30, 10, 30, 400, 0);
    assert_eq!(evaluate(&bad, 5), Err(DomainError::NonPositiveConsumption));
    assert_eq!(
        predict_stockout(400, 0, 30, 5),
        Err(DomainError::NonPositiveConsumption)
    );
}

// ---------------------------------------------------------------------------
// Vessel position
// ---------------------------------------------------------------------------

#[test]
fn progress_is_monotone_and_clamped() {
    let total = 40;
    let mut last_lon = vessel_position(NINGBO, CAUCEDO, 0, total).lon;
    for day in 1..=60 {
        let pos = vessel_position(NINGBO, CAUCEDO, day, total);
        assert!(pos.lon <= last_lon, "westbound lon must not regress");
        last_lon = pos.lon;
        if day >= total {
            assert!((pos.lat - CAUCEDO.lat).abs() < 1e-9);
            assert!((pos.lon - CAUCEDO.lon).abs() < 1e-9);
        }
    }
}

#[test]
fn endpoints_are_exact() {
    let start = vessel_position(NINGBO, CAUCEDO, 0, 40);
    assert!((start.lat - NINGBO.lat).abs() < 1e-9);
    assert!((start.lon - NINGBO.lon).abs() < 1e-9);

    let end = vessel_position(NINGBO, CAUCEDO, 40, 40);
    assert!((end.lat - CAUCEDO.lat).abs() < 1e-9);
    assert!((end.lon - CAUCEDO.lon).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn evaluation_has_no_hidden_state() {
    let shipment = input(63, 87, 22, 35, 120, 7);
    let first = evaluate(&shipment, 5).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate(&shipment, 5).unwrap(), first);
    }
    let a = vessel_position(NINGBO, CAUCEDO, 17, 40);
    let b = vessel_position(NINGBO, CAUCEDO, 17, 40);
    assert_eq!(a, b);
}
