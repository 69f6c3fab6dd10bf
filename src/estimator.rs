//! Footprint Estimator - coordinator for a single submission
//!
//! Runs the calculator, then the benchmark comparison and recommendation
//! engine on its output. Each call works on its own input snapshot, so batches
//! can be evaluated in parallel.

use crate::benchmark::{category_breakdown, compare, CategoryShare, Comparison};
use crate::input::InputModel;
use crate::metrics::{calculate_footprint, FootprintResult};
use crate::recommendations::{generate_recommendations, Recommendation};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Combined output of one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Input snapshot the results were computed from
    pub input: InputModel,
    pub results: FootprintResult,
    pub comparison: Comparison,
    pub recommendations: Vec<Recommendation>,
    pub breakdown: Vec<CategoryShare>,
}

/// Main estimator
pub struct FootprintEstimator;

impl FootprintEstimator {
    /// Estimate the footprint for one input snapshot
    pub fn estimate(input: &InputModel) -> Assessment {
        let results = calculate_footprint(input);
        let comparison = compare(results.total);
        let recommendations = generate_recommendations(&results.categories);
        let breakdown = category_breakdown(&results);

        tracing::debug!(
            "Estimated footprint: total={} (transportation={}, energy={}, food={}, consumption={}), {} recommendations",
            results.total,
            results.categories.transportation,
            results.categories.energy,
            results.categories.food,
            results.categories.consumption,
            recommendations.len()
        );

        Assessment {
            input: input.clone(),
            results,
            comparison,
            recommendations,
            breakdown,
        }
    }

    /// Estimate many inputs at once (Rayon), preserving input order
    pub fn estimate_batch_parallel(inputs: &[InputModel]) -> Vec<Assessment> {
        let start = Instant::now();
        let assessments: Vec<Assessment> = inputs.par_iter().map(Self::estimate).collect();

        tracing::info!(
            "Estimated {} footprints in {:.2} ms",
            assessments.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        assessments
    }
}
