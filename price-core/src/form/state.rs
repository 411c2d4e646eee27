use serde::{Deserialize, Serialize};

use crate::models::{EstimateRequest, FuelType, current_year};

/// The five user-editable fields of the prediction form.
///
/// `model` is either empty or one of the models derived for the current
/// `company`; the controller re-establishes that at every company change
/// rather than checking it continuously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub company: String,
    pub model: String,
    pub fuel_type: FuelType,
    pub kilometers: u64,
    pub year_of_purchase: i32,
}

impl FormState {
    /// A blank form: no company or model selected, petrol, zero kilometers,
    /// purchased in `year`.
    pub fn new(year: i32) -> Self {
        Self {
            company: String::new(),
            model: String::new(),
            fuel_type: FuelType::default(),
            kilometers: 0,
            year_of_purchase: year,
        }
    }

    /// Snapshot of the form as provider input.
    pub fn to_request(&self) -> EstimateRequest {
        EstimateRequest {
            company: self.company.clone(),
            model: self.model.clone(),
            fuel_type: self.fuel_type,
            kilometers: self.kilometers,
            year_of_purchase: self.year_of_purchase,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(current_year())
    }
}
