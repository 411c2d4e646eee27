//! The estimation seam: providers turn form inputs into a price figure.

mod mock;

pub use mock::{
    AGE_PENALTY_PER_YEAR, BASE_PRICE_MAX, BASE_PRICE_MIN, DEFAULT_LATENCY, MockEstimator,
    PRICE_FLOOR,
};

use async_trait::async_trait;

use crate::models::{EstimateRequest, PriceEstimate};

/// Produces a price figure from form inputs.
///
/// [`MockEstimator`] is the only implementation today; a real valuation model
/// replaces it behind this trait without touching the form controller.
#[async_trait]
pub trait EstimateProvider: Send + Sync {
    /// Produce an estimate for `request`. Providers may suspend (network,
    /// model inference, simulated latency) but cannot fail.
    async fn estimate(
        &self,
        request: &EstimateRequest,
    ) -> PriceEstimate;
}
