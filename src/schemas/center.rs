//! Education center document schema
//!
//! Teaching institutions with accreditation status, capacity and a PIC
//! (person in charge). Field names mix camelCase and snake_case to stay
//! wire-compatible with the existing collection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::schemas::fields::{self, Violations};
use crate::schemas::publication::{YEAR_MAX, YEAR_MIN};

/// Collection name for education centers
pub const CENTER_COLLECTION: &str = "center";

/// Accreditation grade; `Belum` marks a center not yet accredited
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccreditationStatus {
    A,
    B,
    C,
    Belum,
}

impl AccreditationStatus {
    const LITERALS: [&'static str; 4] = ["A", "B", "C", "Belum"];

    fn from_literal(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "Belum" => Some(Self::Belum),
            _ => None,
        }
    }
}

/// Education center document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Center {
    #[serde(rename = "institutionName")]
    pub institution_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    pub facilities: Vec<String>,
    #[serde(rename = "accreditationStatus", skip_serializing_if = "Option::is_none")]
    pub accreditation_status: Option<AccreditationStatus>,
    #[serde(rename = "accreditationYear", skip_serializing_if = "Option::is_none")]
    pub accreditation_year: Option<i64>,
    pub documents: Vec<String>,
}

impl Center {
    /// Validate a raw JSON payload into a center
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let map = fields::as_object(value)?;
        let mut errs = Violations::new();

        let institution_name = fields::required_string(map, "institutionName", &mut errs);
        let address = fields::optional_string(map, "address", &mut errs);
        let city = fields::optional_string(map, "city", &mut errs);
        let province = fields::optional_string(map, "province", &mut errs);
        let website = fields::optional_url(map, "website", &mut errs);
        let pic_name = fields::optional_string(map, "pic_name", &mut errs);
        let pic_role = fields::optional_string(map, "pic_role", &mut errs);
        let pic_email = fields::optional_email(map, "pic_email", &mut errs);
        let pic_phone = fields::optional_string(map, "pic_phone", &mut errs);
        let capacity = fields::optional_int_min(map, "capacity", 0, &mut errs);
        let facilities = fields::string_list(map, "facilities", &mut errs);
        let accreditation_status = fields::optional_literal(
            map,
            "accreditationStatus",
            &AccreditationStatus::LITERALS,
            &mut errs,
        )
        .and_then(|s| AccreditationStatus::from_literal(&s));
        let accreditation_year =
            fields::optional_int_range(map, "accreditationYear", YEAR_MIN, YEAR_MAX, &mut errs);
        let documents = fields::url_list(map, "documents", &mut errs);

        errs.finish()?;
        Ok(Self {
            institution_name,
            address,
            city,
            province,
            website,
            pic_name,
            pic_role,
            pic_email,
            pic_phone,
            capacity,
            facilities,
            accreditation_status,
            accreditation_year,
            documents,
        })
    }
}
