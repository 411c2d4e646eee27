mod catalog;
mod estimate;
mod fuel_type;
mod year;

pub use catalog::{Catalog, CatalogEntry};
pub use estimate::{EstimateRequest, PriceEstimate};
pub use fuel_type::FuelType;
pub use year::{MIN_YEAR, current_year, year_options};
