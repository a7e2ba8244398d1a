use crate::selector::Selector;
use crate::types::{DashboardQuery, ShipmentCandidate};

/// Selects the top K shipments by severity score.
pub struct TopKSelector {
    pub k: usize,
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self { k: 10 }
    }
}

impl Selector<DashboardQuery, ShipmentCandidate> for TopKSelector {
    fn score(&self, candidate: &ShipmentCandidate) -> f64 {
        candidate.severity_score.unwrap_or(f64::NEG_INFINITY)
    }

    fn size(&self) -> Option<usize> {
        Some(self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(id: &str, severity: Option<f64>) -> ShipmentCandidate {
        ShipmentCandidate {
            id: id.into(),
            severity_score: severity,
            ..ShipmentCandidate::default()
        }
    }

    #[test]
    fn picks_highest_severity() {
        let selector = TopKSelector { k: 2 };
        let query = DashboardQuery::new("test-topk");
        let selected = selector.select(
            &query,
            vec![
                scored("low", Some(1.0)),
                scored("high", Some(10.0)),
                scored("mid", Some(5.0)),
            ],
        );
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, "high");
        assert_eq!(selected[1].id, "mid");
    }

    #[test]
    fn nan_severity_never_surfaces_on_top() {
        let selector = TopKSelector { k: 3 };
        let query = DashboardQuery::new("test-nan");
        let selected = selector.select(
            &query,
            vec![
                scored("nan", Some(f64::NAN)),
                scored("real", Some(2.0)),
                scored("unscored", None),
            ],
        );
        assert_eq!(selected[0].id, "real");
        assert_ne!(selected[0].id, "nan");
    }
}
