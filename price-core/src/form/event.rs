use serde::{Deserialize, Serialize};

use crate::models::FuelType;

/// A field-change event from the presentation surface: which field changed,
/// and its new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormEvent {
    CompanyChanged(String),
    ModelChanged(String),
    FuelTypeChanged(FuelType),
    YearChanged(i32),
    KilometersChanged(u64),
}
