//! Event document schema
//!
//! Conferences, seminars and workshops announced on the site.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::schemas::fields::{self, Violations};

/// Collection name for events
pub const EVENT_COLLECTION: &str = "event";

/// How an event is held
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventMode {
    Online,
    Offline,
    Hybrid,
}

impl EventMode {
    const LITERALS: [&'static str; 3] = ["online", "offline", "hybrid"];

    fn from_literal(s: &str) -> Option<Self> {
        match s {
            "online" => Some(Self::Online),
            "offline" => Some(Self::Offline),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

/// Event document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub date_start: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_end: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub mode: EventMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub speakers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Event {
    /// Validate a raw JSON payload into an event, reporting every violation
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let map = fields::as_object(value)?;
        let mut errs = Violations::new();

        let title = fields::required_string(map, "title", &mut errs);
        let date_start = fields::required_date(map, "dateStart", &mut errs);
        let date_end = fields::optional_date(map, "dateEnd", &mut errs);
        let location = fields::optional_string(map, "location", &mut errs);
        let mode = fields::defaulted_literal(map, "mode", &EventMode::LITERALS, &mut errs)
            .and_then(|s| EventMode::from_literal(&s))
            .unwrap_or(EventMode::Offline);
        let category = fields::optional_string(map, "category", &mut errs);
        let speakers = fields::string_list(map, "speakers", &mut errs);
        let description = fields::optional_string(map, "description", &mut errs);
        let registration_url = fields::optional_url(map, "registrationUrl", &mut errs);
        let cover_image = fields::optional_url(map, "coverImage", &mut errs);

        errs.finish()?;
        Ok(Self {
            title,
            date_start,
            date_end,
            location,
            mode,
            category,
            speakers,
            description,
            registration_url,
            cover_image,
        })
    }
}
