//! Commission document schema
//!
//! Commissions and divisions of the Kolegium, with their work programmes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::schemas::fields::{self, Violations};

/// Collection name for commissions
pub const COMMISSION_COLLECTION: &str = "commission";

/// Commission document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secretary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub programs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<String>,
    pub related_docs: Vec<String>,
}

impl Commission {
    /// Validate a raw JSON payload into a commission
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let map = fields::as_object(value)?;
        let mut errs = Violations::new();

        let name = fields::required_string(map, "name", &mut errs);
        let slug = fields::required_string(map, "slug", &mut errs);
        let chair = fields::optional_string(map, "chair", &mut errs);
        let secretary = fields::optional_string(map, "secretary", &mut errs);
        let description = fields::optional_string(map, "description", &mut errs);
        let programs = fields::string_list(map, "programs", &mut errs);
        let contacts = fields::optional_string(map, "contacts", &mut errs);
        let related_docs = fields::url_list(map, "relatedDocs", &mut errs);

        errs.finish()?;
        Ok(Self {
            name,
            slug,
            chair,
            secretary,
            description,
            programs,
            contacts,
            related_docs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_and_slug_required() {
        let err = Commission::validate(&json!({ "chair": "dr. Sari" })).unwrap_err();
        assert!(err.cites("name"));
        assert!(err.cites("slug"));
    }

    #[test]
    fn related_docs_must_be_urls() {
        let err = Commission::validate(&json!({
            "name": "Komisi Pendidikan",
            "slug": "komisi-pendidikan",
            "relatedDocs": ["https://docs.example/sk.pdf", "bukan-url"]
        }))
        .unwrap_err();
        assert!(err.cites("relatedDocs"));
    }

    #[test]
    fn lists_default_to_empty() {
        let commission = Commission::validate(&json!({
            "name": "Komisi Ujian",
            "slug": "komisi-ujian"
        }))
        .unwrap();
        assert!(commission.programs.is_empty());
        assert!(commission.related_docs.is_empty());
    }
}
