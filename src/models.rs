use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical record for one company contact.
///
/// Leads are created only by the ingestion pipeline, one per input row, and
/// are never individually mutated afterwards. `status` and `score` are never
/// populated from input data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier, generated at ingestion.
    pub id: Uuid,
    /// Company name; `"Unknown"` when the input carried no usable name column.
    pub company_name: String,
    /// Contact email address.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Industry sector.
    pub industry: Option<String>,
    /// Location or address.
    pub location: Option<String>,
    /// Capital (kept as free-form text, as supplied).
    pub capital: Option<String>,
    /// Company website.
    pub website: Option<String>,
    /// Lead score; reserved for a future enrichment stage, always `None` at ingestion.
    pub score: Option<i32>,
    /// Lifecycle status; fixed to `"new"` at ingestion.
    pub status: String,
    /// Timestamp of creation, set exactly once at normalization.
    pub created_at: DateTime<Utc>,
}

/// Response envelope for lead retrieval.
#[derive(Debug, Serialize, Deserialize)]
pub struct LeadList {
    /// Every currently stored lead.
    pub leads: Vec<Lead>,
}

/// Response payload for a successful upload.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Human-readable result message.
    pub message: String,
    /// Number of leads ingested.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_serializes_with_exact_field_names() {
        let lead = Lead {
            id: Uuid::new_v4(),
            company_name: "Acme".to_string(),
            email: Some("a@acme.com".to_string()),
            phone: None,
            industry: None,
            location: None,
            capital: None,
            website: None,
            score: None,
            status: "new".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&lead).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "company_name",
            "email",
            "phone",
            "industry",
            "location",
            "capital",
            "website",
            "score",
            "status",
            "created_at",
        ] {
            assert!(obj.contains_key(key), "missing field {}", key);
        }
        // Unset optionals serialize as explicit nulls, matching the stored layout.
        assert!(obj["score"].is_null());
        assert!(obj["phone"].is_null());
    }

    #[test]
    fn lead_round_trips_through_json() {
        let lead = Lead {
            id: Uuid::new_v4(),
            company_name: "Globex".to_string(),
            email: None,
            phone: Some("555-0100".to_string()),
            industry: None,
            location: None,
            capital: None,
            website: None,
            score: None,
            status: "new".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&lead).unwrap();
        let back: Lead = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, lead.id);
        assert_eq!(back.company_name, lead.company_name);
        assert_eq!(back.phone, lead.phone);
        assert_eq!(back.created_at, lead.created_at);
    }
}
