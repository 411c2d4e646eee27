use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::{EstimateRequest, PriceEstimate, current_year};

use super::EstimateProvider;

/// Smallest base figure the stub draws, in rupees.
pub const BASE_PRICE_MIN: i64 = 500_000;
/// Largest base figure the stub draws, in rupees.
pub const BASE_PRICE_MAX: i64 = 1_500_000;
/// Deduction per year of vehicle age.
pub const AGE_PENALTY_PER_YEAR: i64 = 50_000;
/// No estimate goes below this.
pub const PRICE_FLOOR: i64 = 100_000;
/// Latency the stub simulates by default.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Stand-in estimation provider.
///
/// Sleeps for a simulated computation window, then draws a uniform base
/// price and deducts [`AGE_PENALTY_PER_YEAR`] per year of vehicle age,
/// clamping the result at [`PRICE_FLOOR`]. The fuel type and odometer
/// reading are carried through but do not influence the figure.
pub struct MockEstimator {
    latency: Duration,
    current_year: i32,
    rng: Mutex<SmallRng>,
}

impl MockEstimator {
    /// Stub with [`DEFAULT_LATENCY`], the real current year, and an
    /// OS-seeded RNG.
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            current_year: current_year(),
            rng: Mutex::new(SmallRng::from_os_rng()),
        }
    }

    /// Replaces the simulated latency. `Duration::ZERO` makes submissions
    /// complete on the first poll, which tests rely on.
    pub fn with_latency(
        mut self,
        latency: Duration,
    ) -> Self {
        self.latency = latency;
        self
    }

    /// Seeds the RNG for reproducible draws.
    pub fn with_seed(
        self,
        seed: u64,
    ) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Pins the year used for the age deduction, decoupling tests from the
    /// wall clock.
    pub fn with_current_year(
        mut self,
        year: i32,
    ) -> Self {
        self.current_year = year;
        self
    }
}

impl Default for MockEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EstimateProvider for MockEstimator {
    async fn estimate(
        &self,
        request: &EstimateRequest,
    ) -> PriceEstimate {
        tokio::time::sleep(self.latency).await;

        let base = self
            .rng
            .lock()
            .unwrap()
            .random_range(BASE_PRICE_MIN..=BASE_PRICE_MAX);
        let age = i64::from(self.current_year - request.year_of_purchase);
        let amount = (base - age * AGE_PENALTY_PER_YEAR).max(PRICE_FLOOR);

        debug!(model = %request.model, base, age, amount, "stub estimate drawn");

        PriceEstimate {
            amount,
            year_of_purchase: request.year_of_purchase,
            kilometers: request.kilometers,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{FuelType, MIN_YEAR};

    use super::*;

    fn request(year_of_purchase: i32) -> EstimateRequest {
        EstimateRequest {
            company: "Hyundai".to_string(),
            model: "Hyundai Grand i10".to_string(),
            fuel_type: FuelType::Petrol,
            kilometers: 0,
            year_of_purchase,
        }
    }

    fn estimator(seed: u64) -> MockEstimator {
        MockEstimator::new()
            .with_latency(Duration::ZERO)
            .with_current_year(2025)
            .with_seed(seed)
    }

    #[tokio::test]
    async fn current_year_estimate_keeps_the_full_base_range() {
        let est = estimator(1);

        let result = est.estimate(&request(2025)).await;

        // Age penalty is zero, so the draw itself is the amount.
        assert!(result.amount >= BASE_PRICE_MIN);
        assert!(result.amount <= BASE_PRICE_MAX);
    }

    #[tokio::test]
    async fn oldest_year_always_clamps_to_the_floor() {
        let est = estimator(2);

        // Age 35 deducts 1,750,000, more than any possible base draw.
        for _ in 0..16 {
            let result = est.estimate(&request(MIN_YEAR)).await;
            assert_eq!(result.amount, PRICE_FLOOR);
        }
    }

    #[tokio::test]
    async fn every_valid_year_stays_at_or_above_the_floor() {
        let est = estimator(3);

        for year in MIN_YEAR..=2025 {
            let result = est.estimate(&request(year)).await;
            assert!(result.amount >= PRICE_FLOOR, "year {year} went below floor");
            assert!(result.amount <= BASE_PRICE_MAX);
        }
    }

    #[tokio::test]
    async fn identical_seeds_draw_identical_estimates() {
        let a = estimator(42).estimate(&request(2020)).await;
        let b = estimator(42).estimate(&request(2020)).await;

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn result_echoes_the_request_basis() {
        let est = estimator(4);
        let mut req = request(2018);
        req.kilometers = 55_000;

        let result = est.estimate(&req).await;

        assert_eq!(result.year_of_purchase, 2018);
        assert_eq!(result.kilometers, 55_000);
    }
}
