//! Publication document schema
//!
//! Clinical guidelines, research reports and consensus documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::schemas::fields::{self, Violations};

/// Collection name for publications
pub const PUBLICATION_COLLECTION: &str = "publication";

/// Accepted range for publication years
pub const YEAR_MIN: i64 = 1900;
pub const YEAR_MAX: i64 = 2100;

/// Publication document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    pub year: i64,
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    // `abstract` is a reserved word in Rust; the wire name is kept via rename
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

impl Publication {
    /// Validate a raw JSON payload into a publication
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let map = fields::as_object(value)?;
        let mut errs = Violations::new();

        let title = fields::required_string(map, "title", &mut errs);
        let year = fields::required_int_range(map, "year", YEAR_MIN, YEAR_MAX, &mut errs);
        let authors = fields::string_list(map, "authors", &mut errs);
        let category = fields::optional_string(map, "category", &mut errs);
        let abstract_text = fields::optional_string(map, "abstract", &mut errs);
        let pdf_url = fields::optional_url(map, "pdfUrl", &mut errs);
        let tags = fields::string_list(map, "tags", &mut errs);
        let citation = fields::optional_string(map, "citation", &mut errs);

        errs.finish()?;
        Ok(Self {
            title,
            year,
            authors,
            category,
            abstract_text,
            pdf_url,
            tags,
            citation,
        })
    }
}
