//! Blog post document schema

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::schemas::fields::{self, Violations};

/// Collection name for blog posts
pub const BLOG_POST_COLLECTION: &str = "blogpost";

/// Blog post document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub published_at: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl BlogPost {
    /// Validate a raw JSON payload into a blog post.
    /// `publishedAt` defaults to today's date when omitted.
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let map = fields::as_object(value)?;
        let mut errs = Violations::new();

        let title = fields::required_string(map, "title", &mut errs);
        let slug = fields::required_string(map, "slug", &mut errs);
        let author = fields::optional_string(map, "author", &mut errs);
        let published_at = fields::optional_date(map, "publishedAt", &mut errs)
            .unwrap_or_else(|| Utc::now().date_naive());
        let category = fields::optional_string(map, "category", &mut errs);
        let excerpt = fields::optional_string(map, "excerpt", &mut errs);
        let content = fields::optional_string(map, "content", &mut errs);
        let cover_image = fields::optional_url(map, "coverImage", &mut errs);

        errs.finish()?;
        Ok(Self {
            title,
            slug,
            author,
            published_at,
            category,
            excerpt,
            content,
            cover_image,
        })
    }
}
