//! Composite risk scoring and risk-induced transit delay.

use crate::thresholds::{
    CLIMATE_WEIGHT, CONGESTION_WEIGHT, INSTABILITY_WEIGHT, MAX_RISK_DELAY_DAYS,
};

/// Weighted composite of the three route risk factors.
///
/// Port congestion dominates the blend (50%), climate is secondary (30%),
/// social instability minor (20%). The weights sum to 1.0, so factors in
/// [0, 100] yield a score in [0, 100]. No clamping happens here; callers
/// own range enforcement, and out-of-range factors propagate arithmetically.
pub fn composite_risk_score(climate_risk: u8, port_congestion: u8, social_instability: u8) -> f64 {
    f64::from(climate_risk) * CLIMATE_WEIGHT
        + f64::from(port_congestion) * CONGESTION_WEIGHT
        + f64::from(social_instability) * INSTABILITY_WEIGHT
}

/// Additional transit days induced by the composite risk score.
///
/// Scales linearly with the score and truncates toward zero, so the
/// `MAX_RISK_DELAY_DAYS` ceiling is reached only at a score of exactly 100.
pub fn risk_delay_days(risk_score: f64) -> u32 {
    ((risk_score / 100.0) * MAX_RISK_DELAY_DAYS) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((CLIMATE_WEIGHT + CONGESTION_WEIGHT + INSTABILITY_WEIGHT - 1.0).abs() < 1e-12);
    }

    #[test]
    fn score_spans_full_range() {
        assert_eq!(composite_risk_score(0, 0, 0), 0.0);
        assert_eq!(composite_risk_score(100, 100, 100), 100.0);
        assert_eq!(composite_risk_score(50, 50, 50), 50.0);
    }

    #[test]
    fn congestion_dominates_the_blend() {
        // Same raw magnitude, different factor: congestion must weigh most.
        let by_climate = composite_risk_score(80, 0, 0);
        let by_congestion = composite_risk_score(0, 80, 0);
        let by_instability = composite_risk_score(0, 0, 80);
        assert!(by_congestion > by_climate);
        assert!(by_climate > by_instability);
        assert_eq!(by_climate, 24.0);
        assert_eq!(by_congestion, 40.0);
        assert_eq!(by_instability, 16.0);
    }

    #[test]
    fn delay_truncates_toward_zero() {
        assert_eq!(risk_delay_days(0.0), 0);
        assert_eq!(risk_delay_days(100.0), 15);
        // 66.6 / 100 * 15 = 9.99 (truncation, not rounding)
        assert_eq!(risk_delay_days(66.6), 9);
        assert_eq!(risk_delay_days(99.9), 14);
    }

    #[test]
    fn delay_is_idempotent() {
        assert_eq!(risk_delay_days(73.2), risk_delay_days(73.2));
        assert_eq!(
            composite_risk_score(12, 34, 56),
            composite_risk_score(12, 34, 56)
        );
    }
}
