pub mod estimator;
pub mod form;
pub mod models;

pub use estimator::{EstimateProvider, MockEstimator};
pub use form::{ControllerSnapshot, FormController, FormEvent, FormState};
pub use models::*;
