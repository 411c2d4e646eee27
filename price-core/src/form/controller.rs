//! The form controller: owns all mutable form state, derives the available
//! model list from the selected company, and runs submissions against an
//! estimation provider.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::estimator::EstimateProvider;
use crate::models::{Catalog, EstimateRequest, FuelType, PriceEstimate};

use super::{FormEvent, FormState};

/// Owns the [`FormState`] plus everything derived from it: the per-company
/// model options, the last completed estimate, and the in-flight flag.
///
/// One controller instance belongs to exactly one presentation surface; all
/// mutation goes through the setters and the submit pair below. Submission is
/// split into `begin`/`finish` so a surface with its own event loop can drive
/// the provider itself; [`FormController::submit`] composes the two for
/// everyone else.
pub struct FormController {
    catalog: Catalog,
    provider: Arc<dyn EstimateProvider>,
    form: FormState,
    available_models: Vec<String>,
    estimating: bool,
    estimate: Option<PriceEstimate>,
}

impl FormController {
    pub fn new(
        catalog: Catalog,
        provider: Arc<dyn EstimateProvider>,
    ) -> Self {
        Self {
            catalog,
            provider,
            form: FormState::default(),
            available_models: Vec::new(),
            estimating: false,
            estimate: None,
        }
    }

    // --- read side ---

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Model options for the currently selected company; empty while no
    /// company is selected. Recomputed at every company change.
    pub fn available_models(&self) -> &[String] {
        &self.available_models
    }

    /// The last completed estimate; `None` until the first submission
    /// finishes.
    pub fn estimate(&self) -> Option<&PriceEstimate> {
        self.estimate.as_ref()
    }

    /// Whether a submission is currently in flight. Surfaces disable the
    /// submit action while this is raised.
    pub fn is_estimating(&self) -> bool {
        self.estimating
    }

    /// Everything a surface renders, as one serializable value.
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            form: self.form.clone(),
            available_models: self.available_models.clone(),
            estimating: self.estimating,
            estimate: self.estimate.clone(),
        }
    }

    // --- field transitions ---

    /// Selects a company. Always resets `model` to empty, even when
    /// re-selecting the current company or when the old model would still
    /// match the new one.
    pub fn set_company(
        &mut self,
        company: impl Into<String>,
    ) {
        self.form.company = company.into();
        self.form.model.clear();
        self.available_models = self
            .catalog
            .models_for(&self.form.company)
            .into_iter()
            .map(str::to_owned)
            .collect();
        debug!(
            company = %self.form.company,
            options = self.available_models.len(),
            "company selected"
        );
    }

    /// Selects a model. No cross-validation against the company happens
    /// here; the surface is trusted to offer only entries from
    /// [`Self::available_models`].
    pub fn set_model(
        &mut self,
        model: impl Into<String>,
    ) {
        self.form.model = model.into();
    }

    pub fn set_fuel_type(
        &mut self,
        fuel_type: FuelType,
    ) {
        self.form.fuel_type = fuel_type;
    }

    /// Years reach the controller through the discrete option list
    /// ([`crate::models::year_options`]), so no range check happens here.
    pub fn set_year(
        &mut self,
        year: i32,
    ) {
        self.form.year_of_purchase = year;
    }

    pub fn set_kilometers(
        &mut self,
        kilometers: u64,
    ) {
        self.form.kilometers = kilometers;
    }

    /// Dispatches a surface event to the matching setter.
    pub fn apply(
        &mut self,
        event: FormEvent,
    ) {
        match event {
            FormEvent::CompanyChanged(company) => self.set_company(company),
            FormEvent::ModelChanged(model) => self.set_model(model),
            FormEvent::FuelTypeChanged(fuel_type) => self.set_fuel_type(fuel_type),
            FormEvent::YearChanged(year) => self.set_year(year),
            FormEvent::KilometersChanged(kilometers) => self.set_kilometers(kilometers),
        }
    }

    // --- submission ---

    /// Starts a submission: raises the in-flight flag and returns the form
    /// snapshot to hand to a provider. Returns `None`, changing nothing,
    /// while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<EstimateRequest> {
        if self.estimating {
            debug!("submit ignored, estimation already in flight");
            return None;
        }
        self.estimating = true;
        Some(self.form.to_request())
    }

    /// Completes a submission: stores the estimate, overwriting any earlier
    /// one, and lowers the in-flight flag.
    pub fn finish_submit(
        &mut self,
        estimate: PriceEstimate,
    ) {
        debug!(amount = estimate.amount, "estimate ready");
        self.estimate = Some(estimate);
        self.estimating = false;
    }

    /// Runs one full submission against the configured provider. Returns the
    /// completed estimate, or `None` when another submission was already in
    /// flight.
    pub async fn submit(&mut self) -> Option<PriceEstimate> {
        let request = self.begin_submit()?;
        let provider = Arc::clone(&self.provider);
        let estimate = provider.estimate(&request).await;
        self.finish_submit(estimate.clone());
        Some(estimate)
    }
}

/// One-value render input for surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerSnapshot {
    pub form: FormState,
    pub available_models: Vec<String>,
    pub estimating: bool,
    pub estimate: Option<PriceEstimate>,
}
