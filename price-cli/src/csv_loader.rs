//! CSV loader for catalog extensions.
//!
//! ## CSV Format
//!
//! Two columns, matched by header name (order does not matter):
//!
//! | Column    | Type   | Notes                                          |
//! |-----------|--------|------------------------------------------------|
//! | `company` | string | e.g. `Maruti`                                  |
//! | `model`   | string | full display name; must start with `company`   |
//!
//! The model-name prefix rule is load-bearing: per-company model options are
//! derived by case-insensitive prefix match, so an entry violating it would
//! never show up under its own company.
//!
//! ### Example
//!
//! ```csv
//! company,model
//! Maruti,Maruti Suzuki Swift
//! Maruti,Maruti Suzuki Alto 800
//! ```

use std::path::Path;

use price_core::models::CatalogEntry;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    company: String,
    model: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading catalog extension data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, wrong column count).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The file could not be read at all.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A `model` cell does not start with its `company` cell, so the derived
    /// model list could never offer it. `row` is 1-based (header = row 0).
    #[error("model '{model}' does not start with company '{company}' on row {row}")]
    ModelCompanyMismatch {
        company: String,
        model: String,
        row: usize,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a CatalogEntry.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<CatalogEntry, CsvLoadError> {
    if !row
        .model
        .to_lowercase()
        .starts_with(&row.company.to_lowercase())
    {
        return Err(CsvLoadError::ModelCompanyMismatch {
            company: row.company,
            model: row.model,
            row: row_number,
        });
    }

    Ok(CatalogEntry {
        company: row.company,
        model: row.model,
    })
}

/// Parse CSV text (the full file contents as a &str) and return catalog
/// entries in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] – the CSV is structurally invalid or a field
///   cannot be deserialised.
/// * [`CsvLoadError::ModelCompanyMismatch`] – a row violates the model-name
///   prefix rule.
pub fn load_from_str(input: &str) -> Result<Vec<CatalogEntry>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1) // 1-based for user-facing messages
        })
        .collect()
}

/// Read `path` and parse it with [`load_from_str`].
///
/// # Errors
///
/// Everything [`load_from_str`] returns, plus [`CsvLoadError::Io`] when the
/// file cannot be read.
pub fn load_from_file(path: &Path) -> Result<Vec<CatalogEntry>, CsvLoadError> {
    let input = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn loads_rows_in_file_order() {
        let input = "company,model\n\
                     Maruti,Maruti Suzuki Swift\n\
                     Tata,Tata Indigo eCS\n";

        let entries = load_from_str(input).expect("valid CSV should load");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Maruti");
        assert_eq!(entries[0].model, "Maruti Suzuki Swift");
        assert_eq!(entries[1].company, "Tata");
    }

    #[test]
    fn header_order_does_not_matter() {
        let input = "model,company\n\
                     Maruti Suzuki Swift,Maruti\n";

        let entries = load_from_str(input).unwrap();

        assert_eq!(entries[0].company, "Maruti");
        assert_eq!(entries[0].model, "Maruti Suzuki Swift");
    }

    #[test]
    fn values_are_trimmed() {
        let input = "company,model\n\
                     \x20 Maruti , Maruti Suzuki Swift \n";

        let entries = load_from_str(input).unwrap();

        assert_eq!(entries[0].company, "Maruti");
        assert_eq!(entries[0].model, "Maruti Suzuki Swift");
    }

    #[test]
    fn prefix_mismatch_reports_the_row_number() {
        let input = "company,model\n\
                     Maruti,Maruti Suzuki Swift\n\
                     Tata,Indigo eCS\n";

        let err = load_from_str(input).unwrap_err();

        match err {
            CsvLoadError::ModelCompanyMismatch { company, model, row } => {
                assert_eq!(company, "Tata");
                assert_eq!(model, "Indigo eCS");
                assert_eq!(row, 2);
            }
            other => panic!("expected ModelCompanyMismatch, got {other:?}"),
        }
    }

    #[test]
    fn prefix_check_is_case_insensitive() {
        let input = "company,model\n\
                     maruti,MARUTI Suzuki Swift\n";

        assert!(load_from_str(input).is_ok());
    }

    #[test]
    fn missing_column_is_a_parse_error() {
        let input = "company\nMaruti\n";

        let err = load_from_str(input).unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn empty_input_yields_no_entries() {
        let entries = load_from_str("company,model\n").unwrap();

        assert!(entries.is_empty());
    }
}
