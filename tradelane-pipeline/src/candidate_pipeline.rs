//! The candidate pipeline orchestrator.
//!
//! A pipeline is a fixed sequence of stages over a query `Q` and candidate
//! type `C`: query hydration → sourcing → hydration → filtering → scoring →
//! selection → post-selection hydration/filtering → side effects. Concrete
//! pipelines supply components per stage; `execute` provides the one true
//! traversal so every pipeline logs and degrades the same way.
//!
//! Stage failures are logged and skipped rather than aborting the run.

use async_trait::async_trait;
use std::sync::Arc;

use crate::filter::Filter;
use crate::hydrator::Hydrator;
use crate::query_hydrator::QueryHydrator;
use crate::scorer::Scorer;
use crate::selector::Selector;
use crate::side_effect::{SideEffect, SideEffectInput};
use crate::source::Source;

/// Queries expose a request id so stage logs correlate across a run.
pub trait HasRequestId {
    fn request_id(&self) -> &str;
}

/// Everything a pipeline run produces.
#[derive(Clone)]
pub struct PipelineResult<Q, C> {
    /// The query after hydration: the configuration the run actually used.
    pub query: Q,
    /// All candidates produced by the sources, before filtering.
    pub retrieved_candidates: Vec<C>,
    /// Candidates removed by filters.
    pub filtered_candidates: Vec<C>,
    /// The final ranked selection.
    pub selected_candidates: Vec<C>,
}

#[async_trait]
pub trait CandidatePipeline<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + HasRequestId + 'static,
    C: Clone + Send + Sync + 'static,
{
    fn query_hydrators(&self) -> &[Box<dyn QueryHydrator<Q>>];
    fn sources(&self) -> &[Box<dyn Source<Q, C>>];
    fn hydrators(&self) -> &[Box<dyn Hydrator<Q, C>>];
    fn filters(&self) -> &[Box<dyn Filter<Q, C>>];
    fn scorers(&self) -> &[Box<dyn Scorer<Q, C>>];
    fn selector(&self) -> &dyn Selector<Q, C>;
    fn post_selection_hydrators(&self) -> &[Box<dyn Hydrator<Q, C>>];
    fn post_selection_filters(&self) -> &[Box<dyn Filter<Q, C>>];
    fn side_effects(&self) -> Arc<Vec<Box<dyn SideEffect<Q, C>>>>;
    fn result_size(&self) -> usize;

    /// Run the full stage sequence for one query.
    async fn execute(&self, query: Q) -> PipelineResult<Q, C> {
        let mut query = query;

        for hydrator in self.query_hydrators() {
            if !hydrator.enable(&query) {
                continue;
            }
            match hydrator.hydrate(&query).await {
                Ok(hydrated) => hydrator.update(&mut query, hydrated),
                Err(e) => log::warn!(
                    "request_id={} query hydrator {} failed: {}",
                    query.request_id(),
                    hydrator.name(),
                    e
                ),
            }
        }

        let mut retrieved: Vec<C> = Vec::new();
        for source in self.sources() {
            if !source.enable(&query) {
                continue;
            }
            match source.get_candidates(&query).await {
                Ok(candidates) => {
                    log::info!(
                        "request_id={} source {} produced {} candidates",
                        query.request_id(),
                        source.name(),
                        candidates.len()
                    );
                    retrieved.extend(candidates);
                }
                Err(e) => log::warn!(
                    "request_id={} source {} failed: {}",
                    query.request_id(),
                    source.name(),
                    e
                ),
            }
        }

        let mut candidates = retrieved.clone();
        run_hydrators(self.hydrators(), &query, &mut candidates).await;

        let mut removed_total: Vec<C> = Vec::new();
        run_filters(self.filters(), &query, &mut candidates, &mut removed_total).await;

        for scorer in self.scorers() {
            if !scorer.enable(&query) {
                continue;
            }
            match scorer.score(&query, &candidates).await {
                Ok(scored) => {
                    for (candidate, scored) in candidates.iter_mut().zip(scored) {
                        scorer.update(candidate, scored);
                    }
                }
                Err(e) => log::warn!(
                    "request_id={} scorer {} failed: {}",
                    query.request_id(),
                    scorer.name(),
                    e
                ),
            }
        }

        let mut selected = self.selector().select(&query, candidates);
        selected.truncate(self.result_size());

        run_hydrators(self.post_selection_hydrators(), &query, &mut selected).await;
        run_filters(
            self.post_selection_filters(),
            &query,
            &mut selected,
            &mut removed_total,
        )
        .await;

        let input = Arc::new(SideEffectInput {
            query: Arc::new(query.clone()),
            selected_candidates: selected.clone(),
        });
        for side_effect in self.side_effects().iter() {
            if !side_effect.enable(Arc::clone(&input.query)) {
                continue;
            }
            if let Err(e) = side_effect.run(Arc::clone(&input)).await {
                log::warn!(
                    "request_id={} side effect {} failed: {}",
                    query.request_id(),
                    side_effect.name(),
                    e
                );
            }
        }

        PipelineResult {
            query,
            retrieved_candidates: retrieved,
            filtered_candidates: removed_total,
            selected_candidates: selected,
        }
    }
}

async fn run_hydrators<Q, C>(hydrators: &[Box<dyn Hydrator<Q, C>>], query: &Q, candidates: &mut [C])
where
    Q: Clone + Send + Sync + HasRequestId + 'static,
    C: Clone + Send + Sync + 'static,
{
    for hydrator in hydrators {
        if !hydrator.enable(query) {
            continue;
        }
        match hydrator.hydrate(query, candidates).await {
            Ok(hydrated) => {
                for (candidate, hydrated) in candidates.iter_mut().zip(hydrated) {
                    hydrator.update(candidate, hydrated);
                }
            }
            Err(e) => log::warn!(
                "request_id={} hydrator {} failed: {}",
                query.request_id(),
                hydrator.name(),
                e
            ),
        }
    }
}

async fn run_filters<Q, C>(
    filters: &[Box<dyn Filter<Q, C>>],
    query: &Q,
    candidates: &mut Vec<C>,
    removed_total: &mut Vec<C>,
) where
    Q: Clone + Send + Sync + HasRequestId + 'static,
    C: Clone + Send + Sync + 'static,
{
    for filter in filters {
        if !filter.enable(query) {
            continue;
        }
        match filter.filter(query, candidates.clone()).await {
            Ok(result) => {
                log::info!(
                    "request_id={} filter {} kept {} removed {}",
                    query.request_id(),
                    filter.name(),
                    result.kept.len(),
                    result.removed.len()
                );
                *candidates = result.kept;
                removed_total.extend(result.removed);
            }
            Err(e) => log::warn!(
                "request_id={} filter {} failed: {}",
                query.request_id(),
                filter.name(),
                e
            ),
        }
    }
}
