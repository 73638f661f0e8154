//! Content schemas for the Kolegium API
//!
//! One module per collection. Collection names are an explicit mapping on
//! [`EntityKind`], not derived from type names, so renaming a Rust type can
//! never silently re-target a collection.

mod blog_post;
mod center;
mod commission;
mod contact_message;
mod event;
pub mod fields;
mod member;
mod publication;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

pub use blog_post::{BlogPost, BLOG_POST_COLLECTION};
pub use center::{AccreditationStatus, Center, CENTER_COLLECTION};
pub use commission::{Commission, COMMISSION_COLLECTION};
pub use contact_message::{ContactMessage, CONTACT_MESSAGE_COLLECTION};
pub use event::{Event, EventMode, EVENT_COLLECTION};
pub use member::{Member, MEMBER_COLLECTION};
pub use publication::{Publication, PUBLICATION_COLLECTION, YEAR_MAX, YEAR_MIN};

/// The seven content entity kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Event,
    Publication,
    BlogPost,
    Commission,
    Center,
    Member,
    ContactMessage,
}

impl EntityKind {
    /// Storage collection for this kind
    pub const fn collection_name(self) -> &'static str {
        match self {
            Self::Event => EVENT_COLLECTION,
            Self::Publication => PUBLICATION_COLLECTION,
            Self::BlogPost => BLOG_POST_COLLECTION,
            Self::Commission => COMMISSION_COLLECTION,
            Self::Center => CENTER_COLLECTION,
            Self::Member => MEMBER_COLLECTION,
            Self::ContactMessage => CONTACT_MESSAGE_COLLECTION,
        }
    }

    /// Resolve an `/api/{segment}` route segment to a kind.
    ///
    /// Contact messages are not listed here; they have their own
    /// submission-only route.
    pub fn from_route(segment: &str) -> Option<Self> {
        match segment {
            "events" => Some(Self::Event),
            "publications" => Some(Self::Publication),
            "blogs" => Some(Self::BlogPost),
            "commissions" => Some(Self::Commission),
            "centers" => Some(Self::Center),
            "members" => Some(Self::Member),
            _ => None,
        }
    }

    /// Validate a raw JSON payload for this kind and encode it as a BSON
    /// document ready for insertion
    pub fn validated_document(self, value: &Value) -> Result<bson::Document, ApiError> {
        fn encode<T: Serialize>(entity: &T) -> Result<bson::Document, ApiError> {
            bson::to_document(entity).map_err(|e| ApiError::Storage(format!("BSON encoding failed: {e}")))
        }

        match self {
            Self::Event => encode(&Event::validate(value)?),
            Self::Publication => encode(&Publication::validate(value)?),
            Self::BlogPost => encode(&BlogPost::validate(value)?),
            Self::Commission => encode(&Commission::validate(value)?),
            Self::Center => encode(&Center::validate(value)?),
            Self::Member => encode(&Member::validate(value)?),
            Self::ContactMessage => encode(&ContactMessage::validate(value)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn route_segments_resolve() {
        assert_eq!(EntityKind::from_route("events"), Some(EntityKind::Event));
        assert_eq!(EntityKind::from_route("blogs"), Some(EntityKind::BlogPost));
        assert_eq!(EntityKind::from_route("members"), Some(EntityKind::Member));
        assert_eq!(EntityKind::from_route("contact"), None);
        assert_eq!(EntityKind::from_route("unknown"), None);
    }

    #[test]
    fn collection_names_match_existing_data() {
        assert_eq!(EntityKind::Event.collection_name(), "event");
        assert_eq!(EntityKind::BlogPost.collection_name(), "blogpost");
        assert_eq!(
            EntityKind::ContactMessage.collection_name(),
            "contactmessage"
        );
    }

    #[test]
    fn validated_document_carries_defaults() {
        let doc = EntityKind::Event
            .validated_document(&json!({
                "title": "Derma Summit",
                "dateStart": "2025-05-01"
            }))
            .unwrap();
        assert_eq!(doc.get_str("mode").unwrap(), "offline");
        assert!(doc.get_array("speakers").unwrap().is_empty());
    }

    #[test]
    fn validation_errors_propagate_through_dispatch() {
        let err = EntityKind::Member
            .validated_document(&json!({ "fullName": "A. Budi", "email": "not-an-email" }))
            .unwrap_err();
        match err {
            ApiError::Validation(v) => assert!(v.cites("email")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn non_object_body_rejected() {
        let err = EntityKind::Event.validated_document(&json!([1, 2, 3])).unwrap_err();
        match err {
            ApiError::Validation(v) => assert!(v.cites("body")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
