//! CSV ingestion pipeline.
//!
//! Raw upload bytes are parsed as UTF-8 delimited text (header row defines
//! column names), each data row is normalized into a canonical [`Lead`], and
//! the resulting batch replaces the stored collection in one write.
//!
//! Input-format problems abort before the store is touched, so a rejected
//! upload leaves the prior collection observably unchanged.

use std::collections::HashMap;

use crate::errors::AppError;
use crate::models::Lead;
use crate::normalizer;
use crate::storage::LeadStore;

/// Parses CSV bytes into leads and replaces the stored collection with them.
///
/// Returns the number of leads ingested.
pub async fn ingest_csv(store: &LeadStore, contents: &[u8]) -> Result<usize, AppError> {
    let leads = parse_leads(contents)?;
    store.replace_all(&leads).await?;
    tracing::info!("Ingested {} leads", leads.len());
    Ok(leads.len())
}

/// Parses raw CSV bytes into normalized leads without touching storage.
///
/// Empty input (zero bytes or header-only) and undecodable or unparseable
/// content are input-format errors. Row-level issues are not: short rows and
/// unrecognized columns degrade through the normalizer's defaulting policy.
pub fn parse_leads(contents: &[u8]) -> Result<Vec<Lead>, AppError> {
    let text = std::str::from_utf8(contents)
        .map_err(|_| AppError::BadRequest("Unable to parse the CSV file".to_string()))?;
    if text.trim().is_empty() {
        return Err(AppError::BadRequest("The CSV file is empty".to_string()));
    }

    // flexible: rows shorter or longer than the header are loss-tolerant,
    // never a parse failure.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::BadRequest(format!("Unable to parse the CSV file: {}", e)))?
        .clone();

    let mut leads = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| AppError::BadRequest(format!("Unable to parse the CSV file: {}", e)))?;
        let row: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        leads.push(normalizer::normalize(&row));
    }

    if leads.is_empty() {
        return Err(AppError::BadRequest("The CSV file is empty".to_string()));
    }
    Ok(leads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_under_a_header() {
        let csv = b"company_name,email\nAcme,a@acme.com\nGlobex,g@globex.com\n";
        let leads = parse_leads(csv).unwrap();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].company_name, "Acme");
        assert_eq!(leads[1].email.as_deref(), Some("g@globex.com"));
    }

    #[test]
    fn zero_bytes_is_an_input_format_error() {
        let err = parse_leads(b"").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn header_only_is_an_input_format_error() {
        let err = parse_leads(b"company_name,email\n").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn non_utf8_is_an_input_format_error() {
        let err = parse_leads(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn short_rows_degrade_instead_of_failing() {
        let csv = b"company_name,email,phone\nAcme\n";
        let leads = parse_leads(csv).unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].company_name, "Acme");
        assert_eq!(leads[0].email, None);
        assert_eq!(leads[0].phone, None);
    }

    #[test]
    fn unrecognized_columns_yield_defaulted_leads() {
        let csv = b"foo,bar\n1,2\n";
        let leads = parse_leads(csv).unwrap();
        assert_eq!(leads[0].company_name, "Unknown");
        assert_eq!(leads[0].email, None);
    }
}
