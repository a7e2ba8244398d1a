use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::scorer::Scorer;
use crate::types::{DashboardQuery, ShipmentCandidate};

/// Attenuates severity for repeated destination ports so the selected
/// snapshot spans lanes instead of stacking every slot with one congested
/// destination. Candidates are walked in current-severity order; each
/// further appearance of the same destination is attenuated by
/// `decay_factor^position`, never below `floor` of its original score.
pub struct LaneDiversityScorer {
    pub decay_factor: f64,
    pub floor: f64,
}

impl Default for LaneDiversityScorer {
    fn default() -> Self {
        Self {
            decay_factor: 0.7,
            floor: 0.1,
        }
    }
}

impl LaneDiversityScorer {
    fn multiplier(&self, position: usize) -> f64 {
        (1.0 - self.floor) * self.decay_factor.powf(position as f64) + self.floor
    }
}

#[async_trait]
impl Scorer<DashboardQuery, ShipmentCandidate> for LaneDiversityScorer {
    async fn score(
        &self,
        _query: &DashboardQuery,
        candidates: &[ShipmentCandidate],
    ) -> Result<Vec<ShipmentCandidate>, String> {
        let mut port_counts: HashMap<String, usize> = HashMap::new();
        let mut scored = vec![ShipmentCandidate::default(); candidates.len()];

        let mut ordered: Vec<(usize, &ShipmentCandidate)> =
            candidates.iter().enumerate().collect();
        ordered.sort_by(|(_, a), (_, b)| {
            let a_score = a.severity_score.unwrap_or(f64::NEG_INFINITY);
            let b_score = b.severity_score.unwrap_or(f64::NEG_INFINITY);
            b_score.partial_cmp(&a_score).unwrap_or(Ordering::Equal)
        });

        for (original_idx, candidate) in ordered {
            let entry = port_counts
                .entry(candidate.destination.name.clone())
                .or_insert(0);
            let position = *entry;
            *entry += 1;

            let multiplier = self.multiplier(position);
            scored[original_idx] = ShipmentCandidate {
                severity_score: candidate.severity_score.map(|s| s * multiplier),
                ..ShipmentCandidate::default()
            };
        }

        Ok(scored)
    }

    fn update(&self, candidate: &mut ShipmentCandidate, scored: ShipmentCandidate) {
        candidate.severity_score = scored.severity_score;
    }
}
