//! Schema normalization for uploaded lead rows.
//!
//! Input CSVs arrive with heterogeneous headers; each canonical field accepts
//! an ordered list of column aliases, resolved by sequential lookup. Rows are
//! never rejected here: missing or blank columns degrade to `None` (or to the
//! `"Unknown"` default for the company name).

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::models::Lead;

/// Accepted column aliases per canonical field; first match wins.
const COMPANY_NAME_ALIASES: &[&str] = &["company_name", "Company Name", "name"];
const EMAIL_ALIASES: &[&str] = &["email", "Email"];
const PHONE_ALIASES: &[&str] = &["phone", "Phone", "contact"];
const INDUSTRY_ALIASES: &[&str] = &["industry", "Industry"];
const LOCATION_ALIASES: &[&str] = &["location", "Location", "address"];
const CAPITAL_ALIASES: &[&str] = &["capital", "Capital"];
const WEBSITE_ALIASES: &[&str] = &["website", "Website"];

/// Company name used when no recognized name column is present.
const DEFAULT_COMPANY_NAME: &str = "Unknown";

/// Status assigned to every freshly ingested lead.
const STATUS_NEW: &str = "new";

/// Converts one row of string-keyed input fields into a canonical [`Lead`].
///
/// Never fails: every field is optional or defaulted. Identity and creation
/// timestamp are generated here; `score` stays unset until a later enrichment
/// stage and `status` is always `"new"`, regardless of input.
pub fn normalize(row: &HashMap<String, String>) -> Lead {
    Lead {
        id: Uuid::new_v4(),
        company_name: resolve(row, COMPANY_NAME_ALIASES)
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string()),
        email: resolve(row, EMAIL_ALIASES),
        phone: resolve(row, PHONE_ALIASES),
        industry: resolve(row, INDUSTRY_ALIASES),
        location: resolve(row, LOCATION_ALIASES),
        capital: resolve(row, CAPITAL_ALIASES),
        website: resolve(row, WEBSITE_ALIASES),
        score: None,
        status: STATUS_NEW.to_string(),
        created_at: Utc::now(),
    }
}

/// Returns the value of the first alias present and non-blank in the row.
///
/// Blank cells count as absent (a CSV row keeps every header as a key even
/// when the cell is empty), but a winning value is returned untrimmed.
fn resolve(row: &HashMap<String, String>, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|alias| row.get(*alias).filter(|v| !v.trim().is_empty()))
        .cloned()
}
