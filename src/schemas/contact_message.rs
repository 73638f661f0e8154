//! Contact message document schema

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::schemas::fields::{self, Violations};

/// Collection name for contact messages
pub const CONTACT_MESSAGE_COLLECTION: &str = "contactmessage";

/// Contact form submission stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Validate a raw JSON payload into a contact message
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let map = fields::as_object(value)?;
        let mut errs = Violations::new();

        let name = fields::required_string(map, "name", &mut errs);
        let email = fields::required_email(map, "email", &mut errs);
        let subject = fields::required_string(map, "subject", &mut errs);
        let message = fields::required_string(map, "message", &mut errs);

        errs.finish()?;
        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_four_fields_required() {
        let err = ContactMessage::validate(&json!({})).unwrap_err();
        assert_eq!(err.violations.len(), 4);
        for field in ["name", "email", "subject", "message"] {
            assert!(err.cites(field), "{field} should be cited");
        }
    }

    #[test]
    fn valid_message_accepted() {
        let msg = ContactMessage::validate(&json!({
            "name": "Ibu Sari",
            "email": "sari@example.com",
            "subject": "Pertanyaan pendaftaran",
            "message": "Bagaimana cara mendaftar sebagai anggota?"
        }))
        .unwrap();
        assert_eq!(msg.subject, "Pertanyaan pendaftaran");
    }
}
