use serde::{Deserialize, Serialize};

use crate::models::FuelType;

/// Form inputs handed to an estimation provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub company: String,
    pub model: String,
    pub fuel_type: FuelType,
    pub kilometers: u64,
    pub year_of_purchase: i32,
}

/// A completed price estimate in whole rupees, together with the inputs a
/// surface echoes back alongside the figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub amount: i64,
    pub year_of_purchase: i32,
    pub kilometers: u64,
}
