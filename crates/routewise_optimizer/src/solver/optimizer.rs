use std::sync::{Arc, OnceLock};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info, instrument, warn};

use crate::{
    error::{EstimateError, ensure_non_negative},
    problem::logistics_network::LogisticsNetwork,
};

use super::{
    combination::score_combinations,
    feasibility::{filter_routes, filter_vehicles},
    optimizer_params::OptimizerParams,
    option_analysis::OptionAnalysis,
    outcome::{OptimizationFailure, OptimizationOutcome, OptimizationResult},
    ranking::{RankedOption, rank_combinations},
    recommendation::recommend,
    request::OptimizationRequest,
    trade_off::analyze_trade_offs,
};

/// Entry point of the engine. Holds the reference tables and configuration
/// read-only, so one optimizer can serve concurrent calls.
#[derive(Clone)]
pub struct RouteOptimizer {
    network: Arc<LogisticsNetwork>,
    params: Arc<OptimizerParams>,
    /// Built on the first batch and shared by clones. `None` when building
    /// failed, batches then run on the global pool.
    batch_pool: Arc<OnceLock<Option<rayon::ThreadPool>>>,
}

impl RouteOptimizer {
    pub fn new(network: Arc<LogisticsNetwork>, params: OptimizerParams) -> Self {
        RouteOptimizer {
            network,
            params: Arc::new(params),
            batch_pool: Arc::new(OnceLock::new()),
        }
    }

    pub fn network(&self) -> &LogisticsNetwork {
        &self.network
    }

    pub fn params(&self) -> &OptimizerParams {
        &self.params
    }

    #[instrument(
        skip_all,
        level = "debug",
        fields(origin = %request.origin, destination = %request.destination)
    )]
    pub fn optimize_route(&self, request: &OptimizationRequest) -> OptimizationOutcome {
        info!(
            order_weight_kg = request.order_weight_kg,
            priority = %request.priority,
            "Optimizing route"
        );

        if let Err(error) = ensure_non_negative("order_weight_kg", request.order_weight_kg) {
            warn!(%error, "Rejecting request");
            return OptimizationOutcome::Failure(OptimizationFailure::invalid_input(
                error.to_string(),
            ));
        }

        let routes = filter_routes(self.network.routes(), &request.origin, &request.destination);
        if routes.is_empty() {
            warn!("No routes found");
            return OptimizationOutcome::Failure(OptimizationFailure::no_routes(
                &request.origin,
                &request.destination,
            ));
        }

        let vehicles = filter_vehicles(
            self.network.vehicles(),
            &request.origin,
            request.order_weight_kg,
        );
        if vehicles.is_empty() {
            warn!(
                order_weight_kg = request.order_weight_kg,
                "No vehicles available"
            );
            return OptimizationOutcome::Failure(OptimizationFailure::no_vehicles(
                request.order_weight_kg,
            ));
        }

        let currency = &self.params.cost_rates.currency;
        let combinations = score_combinations(
            &routes,
            &vehicles,
            request.order_weight_kg,
            &self.params.cost_rates,
        );

        let ranked_options = rank_combinations(&combinations, request.top_n);
        let (Some(trade_off_analysis), Some(recommendations)) = (
            analyze_trade_offs(&ranked_options, currency),
            recommend(&ranked_options, request.priority, currency),
        ) else {
            warn!("No combination could be priced");
            return OptimizationOutcome::Failure(OptimizationFailure::no_routes(
                &request.origin,
                &request.destination,
            ));
        };

        let mut configuration_gaps: Vec<_> = combinations
            .iter()
            .flat_map(|combination| combination.configuration_gaps.iter().cloned())
            .collect();
        configuration_gaps.sort();
        configuration_gaps.dedup();

        info!(
            combinations = combinations.len(),
            primary = recommendations.primary.option.as_str(),
            "Optimization complete"
        );

        OptimizationOutcome::Success(OptimizationResult {
            ranked_options,
            trade_off_analysis,
            recommendations,
            total_combinations_evaluated: combinations.len(),
            configuration_gaps,
        })
    }

    /// Optimizes independent requests in parallel. Outcomes are returned in
    /// request order.
    pub fn optimize_batch(&self, requests: &[OptimizationRequest]) -> Vec<OptimizationOutcome> {
        let run = || {
            requests
                .par_iter()
                .map(|request| self.optimize_route(request))
                .collect::<Vec<_>>()
        };

        match self.batch_pool() {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn batch_pool(&self) -> Option<&rayon::ThreadPool> {
        self.batch_pool
            .get_or_init(|| {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(self.params.batch_threads.number_of_threads())
                    .build()
                    .inspect_err(|error| {
                        warn!(%error, "Failed to build batch thread pool, using the global pool")
                    })
                    .ok()
            })
            .as_ref()
    }

    pub fn analyze_option(
        &self,
        option: &RankedOption,
        order_weight_kg: f64,
    ) -> Result<OptionAnalysis, EstimateError> {
        OptionAnalysis::analyze(option, order_weight_kg, &self.params)
    }
}
