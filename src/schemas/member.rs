//! Member document schema
//!
//! Registered members (residents, specialists) of the Kolegium.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::schemas::fields::{self, Violations};

/// Collection name for members
pub const MEMBER_COLLECTION: &str = "member";

/// Member document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub str_number: Option<String>,
    pub interests: Vec<String>,
}

impl Member {
    /// Validate a raw JSON payload into a member
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let map = fields::as_object(value)?;
        let mut errs = Violations::new();

        let full_name = fields::required_string(map, "fullName", &mut errs);
        let email = fields::required_email(map, "email", &mut errs);
        let phone = fields::optional_string(map, "phone", &mut errs);
        let institution = fields::optional_string(map, "institution", &mut errs);
        let city = fields::optional_string(map, "city", &mut errs);
        let province = fields::optional_string(map, "province", &mut errs);
        let role = fields::optional_string(map, "role", &mut errs);
        let str_number = fields::optional_string(map, "strNumber", &mut errs);
        let interests = fields::string_list(map, "interests", &mut errs);

        errs.finish()?;
        Ok(Self {
            full_name,
            email,
            phone,
            institution,
            city,
            province,
            role,
            str_number,
            interests,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_email_cited() {
        let err = Member::validate(&json!({
            "fullName": "A. Budi",
            "email": "not-an-email"
        }))
        .unwrap_err();
        assert!(err.cites("email"));
        assert!(!err.cites("fullName"));
    }

    #[test]
    fn valid_member_with_defaults() {
        let member = Member::validate(&json!({
            "fullName": "A. Budi",
            "email": "a.budi@kolegium.or.id"
        }))
        .unwrap();
        assert_eq!(member.full_name, "A. Budi");
        assert!(member.interests.is_empty());
        assert_eq!(member.str_number, None);
    }

    #[test]
    fn str_number_serialized_in_camel_case() {
        let member = Member::validate(&json!({
            "fullName": "dr. Citra",
            "email": "citra@example.com",
            "strNumber": "STR-12345"
        }))
        .unwrap();
        let doc = bson::to_document(&member).unwrap();
        assert_eq!(doc.get_str("strNumber").unwrap(), "STR-12345");
        assert_eq!(doc.get_str("fullName").unwrap(), "dr. Citra");
    }
}
