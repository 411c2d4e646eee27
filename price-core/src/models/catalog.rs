//! The enumerated option sources behind the form.
//!
//! The catalog holds a fixed company list and a flat model list. Per-company
//! model options are derived by case-insensitive name-prefix match, not by an
//! explicit relation: every model's display name starts with its company's
//! name, and the derivation leans on that.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One (company, model) pair, as produced by catalog extension sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub company: String,
    pub model: String,
}

/// Fixed company and model lists offered to the form surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    companies: Vec<String>,
    models: Vec<String>,
}

impl Catalog {
    /// The built-in catalog shipped with the application.
    pub fn builtin() -> Self {
        Self {
            companies: ["Hyundai", "Mahindra", "Ford"]
                .map(String::from)
                .to_vec(),
            models: [
                "Hyundai Santro Xing",
                "Hyundai Grand i10",
                "Mahindra Jeep CL550",
                "Mahindra Quanto C8",
                "Ford EcoSport Titanium",
                "Ford Figo",
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    /// Companies in option order.
    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    /// Whether `name` is one of the catalog's companies (case-insensitive).
    pub fn contains_company(&self, name: &str) -> bool {
        self.companies.iter().any(|c| c.eq_ignore_ascii_case(name))
    }

    /// Models available for `company`: the subset of the model list whose
    /// name starts with the company's name, case-insensitive. Empty when no
    /// company is selected.
    pub fn models_for(&self, company: &str) -> Vec<&str> {
        if company.is_empty() {
            return Vec::new();
        }
        let prefix = company.to_lowercase();
        self.models
            .iter()
            .filter(|model| model.to_lowercase().starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }

    /// Appends an entry, deduplicating companies and models
    /// case-insensitively.
    pub fn add_entry(
        &mut self,
        entry: CatalogEntry,
    ) {
        if !self.contains_company(&entry.company) {
            debug!(company = %entry.company, "catalog company added");
            self.companies.push(entry.company);
        }
        if !self
            .models
            .iter()
            .any(|m| m.eq_ignore_ascii_case(&entry.model))
        {
            self.models.push(entry.model);
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
