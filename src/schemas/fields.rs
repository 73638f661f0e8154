//! Field-level validators shared by all schemas
//!
//! Every validator records problems into a [`Violations`] collector instead
//! of failing on the first one, so a payload with several bad fields is
//! reported in full. On a recorded violation the validators return a
//! placeholder value; callers must call [`Violations::finish`] before any
//! returned value is used.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use url::Url;

use crate::error::{ValidationError, Violation};

/// Collects field violations across a whole payload
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(Violation {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Ok when nothing was recorded, otherwise the full report
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.0,
            })
        }
    }
}

/// The request body must be a JSON object before any field check makes sense
pub fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::single("body", "request body must be a JSON object"))
}

pub fn required_string(map: &Map<String, Value>, field: &str, errs: &mut Violations) -> String {
    match map.get(field) {
        None | Some(Value::Null) => {
            errs.push(field, "required field is missing");
            String::new()
        }
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            errs.push(field, "must be a string");
            String::new()
        }
    }
}

pub fn optional_string(
    map: &Map<String, Value>,
    field: &str,
    errs: &mut Violations,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errs.push(field, "must be a string");
            None
        }
    }
}

/// Optional list of strings; absent fields become an empty list, never `None`
pub fn string_list(map: &Map<String, Value>, field: &str, errs: &mut Violations) -> Vec<String> {
    match map.get(field) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    _ => {
                        errs.push(field, "must be an array of strings");
                        return Vec::new();
                    }
                }
            }
            out
        }
        Some(_) => {
            errs.push(field, "must be an array of strings");
            Vec::new()
        }
    }
}

pub fn required_date(map: &Map<String, Value>, field: &str, errs: &mut Violations) -> NaiveDate {
    match map.get(field) {
        None | Some(Value::Null) => {
            errs.push(field, "required field is missing");
            NaiveDate::MIN
        }
        Some(Value::String(s)) => parse_date(s).unwrap_or_else(|| {
            errs.push(field, "must be a date in YYYY-MM-DD format");
            NaiveDate::MIN
        }),
        Some(_) => {
            errs.push(field, "must be a date in YYYY-MM-DD format");
            NaiveDate::MIN
        }
    }
}

pub fn optional_date(
    map: &Map<String, Value>,
    field: &str,
    errs: &mut Violations,
) -> Option<NaiveDate> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => match parse_date(s) {
            Some(date) => Some(date),
            None => {
                errs.push(field, "must be a date in YYYY-MM-DD format");
                None
            }
        },
        Some(_) => {
            errs.push(field, "must be a date in YYYY-MM-DD format");
            None
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Optional absolute URL (http or https), kept as the caller supplied it
pub fn optional_url(
    map: &Map<String, Value>,
    field: &str,
    errs: &mut Violations,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if is_well_formed_url(s) => Some(s.clone()),
        Some(_) => {
            errs.push(field, "must be a well-formed absolute URL");
            None
        }
    }
}

/// Optional list of absolute URLs; absent fields become an empty list
pub fn url_list(map: &Map<String, Value>, field: &str, errs: &mut Violations) -> Vec<String> {
    match map.get(field) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) if is_well_formed_url(s) => out.push(s.clone()),
                    _ => {
                        errs.push(field, "must be an array of well-formed absolute URLs");
                        return Vec::new();
                    }
                }
            }
            out
        }
        Some(_) => {
            errs.push(field, "must be an array of well-formed absolute URLs");
            Vec::new()
        }
    }
}

pub fn required_email(map: &Map<String, Value>, field: &str, errs: &mut Violations) -> String {
    match map.get(field) {
        None | Some(Value::Null) => {
            errs.push(field, "required field is missing");
            String::new()
        }
        Some(Value::String(s)) if is_well_formed_email(s) => s.clone(),
        Some(_) => {
            errs.push(field, "must be a well-formed email address");
            String::new()
        }
    }
}

pub fn optional_email(
    map: &Map<String, Value>,
    field: &str,
    errs: &mut Violations,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if is_well_formed_email(s) => Some(s.clone()),
        Some(_) => {
            errs.push(field, "must be a well-formed email address");
            None
        }
    }
}

/// Optional integer bounded to `[min, max]` inclusive
pub fn optional_int_range(
    map: &Map<String, Value>,
    field: &str,
    min: i64,
    max: i64,
    errs: &mut Violations,
) -> Option<i64> {
    match int_value(map.get(field)) {
        IntField::Absent => None,
        IntField::Value(n) if (min..=max).contains(&n) => Some(n),
        _ => {
            errs.push(
                field,
                format!("must be an integer between {min} and {max}"),
            );
            None
        }
    }
}

/// Required integer bounded to `[min, max]` inclusive
pub fn required_int_range(
    map: &Map<String, Value>,
    field: &str,
    min: i64,
    max: i64,
    errs: &mut Violations,
) -> i64 {
    match int_value(map.get(field)) {
        IntField::Absent => {
            errs.push(field, "required field is missing");
            min
        }
        IntField::Value(n) if (min..=max).contains(&n) => n,
        _ => {
            errs.push(
                field,
                format!("must be an integer between {min} and {max}"),
            );
            min
        }
    }
}

/// Optional integer with a lower bound only (e.g. a non-negative capacity)
pub fn optional_int_min(
    map: &Map<String, Value>,
    field: &str,
    min: i64,
    errs: &mut Violations,
) -> Option<i64> {
    match int_value(map.get(field)) {
        IntField::Absent => None,
        IntField::Value(n) if n >= min => Some(n),
        _ => {
            errs.push(field, format!("must be an integer of at least {min}"));
            None
        }
    }
}

enum IntField {
    Absent,
    Value(i64),
    Invalid,
}

fn int_value(value: Option<&Value>) -> IntField {
    match value {
        None | Some(Value::Null) => IntField::Absent,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) => IntField::Value(v),
            None => IntField::Invalid,
        },
        Some(_) => IntField::Invalid,
    }
}

/// Literal field whose default the caller supplies on `None`; the field may
/// be left out but an explicit `null` is rejected
pub fn defaulted_literal(
    map: &Map<String, Value>,
    field: &str,
    allowed: &[&str],
    errs: &mut Violations,
) -> Option<String> {
    match map.get(field) {
        None => None,
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => Some(s.clone()),
        Some(_) => {
            errs.push(field, format!("must be one of: {}", allowed.join(", ")));
            None
        }
    }
}

/// Optional value drawn from an enumerated set of literals
pub fn optional_literal(
    map: &Map<String, Value>,
    field: &str,
    allowed: &[&str],
    errs: &mut Violations,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => Some(s.clone()),
        Some(_) => {
            errs.push(field, format!("must be one of: {}", allowed.join(", ")));
            None
        }
    }
}

fn is_well_formed_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

fn is_well_formed_email(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Domain needs at least one dot with labels on both sides
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && !host.starts_with('.') && !host.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn required_string_reports_missing_field() {
        let map = obj(json!({}));
        let mut errs = Violations::new();
        required_string(&map, "title", &mut errs);
        let err = errs.finish().unwrap_err();
        assert!(err.cites("title"));
    }

    #[test]
    fn absent_list_defaults_to_empty() {
        let map = obj(json!({}));
        let mut errs = Violations::new();
        let list = string_list(&map, "speakers", &mut errs);
        assert!(errs.finish().is_ok());
        assert_eq!(list, Vec::<String>::new());
    }

    #[test]
    fn list_with_non_string_element_rejected() {
        let map = obj(json!({ "tags": ["skin", 7] }));
        let mut errs = Violations::new();
        string_list(&map, "tags", &mut errs);
        assert!(errs.finish().unwrap_err().cites("tags"));
    }

    #[test]
    fn date_parsing() {
        let map = obj(json!({ "ok": "2025-05-01", "bad": "01/05/2025" }));
        let mut errs = Violations::new();
        assert_eq!(
            optional_date(&map, "ok", &mut errs),
            Some(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
        );
        assert_eq!(optional_date(&map, "bad", &mut errs), None);
        assert!(errs.finish().unwrap_err().cites("bad"));
    }

    #[test]
    fn url_must_be_absolute_http() {
        assert!(is_well_formed_url("https://kolegium.example/daftar"));
        assert!(is_well_formed_url("http://localhost:8000/x"));
        assert!(!is_well_formed_url("/relative/path"));
        assert!(!is_well_formed_url("ftp://files.example/pub"));
        assert!(!is_well_formed_url("not a url"));
    }

    #[test]
    fn email_structure() {
        assert!(is_well_formed_email("budi@kolegium.or.id"));
        assert!(is_well_formed_email("a.b+tag@example.com"));
        assert!(!is_well_formed_email("not-an-email"));
        assert!(!is_well_formed_email("@example.com"));
        assert!(!is_well_formed_email("user@nodot"));
        assert!(!is_well_formed_email("user name@example.com"));
    }

    #[test]
    fn int_range_bounds_inclusive() {
        let map = obj(json!({ "year": 1900, "late": 2100, "out": 2200 }));
        let mut errs = Violations::new();
        assert_eq!(required_int_range(&map, "year", 1900, 2100, &mut errs), 1900);
        assert_eq!(required_int_range(&map, "late", 1900, 2100, &mut errs), 2100);
        required_int_range(&map, "out", 1900, 2100, &mut errs);
        assert!(errs.finish().unwrap_err().cites("out"));
    }

    #[test]
    fn defaulted_literal_rejects_explicit_null() {
        let map = obj(json!({ "mode": null }));
        let mut errs = Violations::new();
        assert_eq!(
            defaulted_literal(&map, "mode", &["online", "offline"], &mut errs),
            None
        );
        assert!(errs.finish().unwrap_err().cites("mode"));

        let map = obj(json!({}));
        let mut errs = Violations::new();
        assert_eq!(
            defaulted_literal(&map, "mode", &["online", "offline"], &mut errs),
            None
        );
        assert!(errs.finish().is_ok());
    }

    #[test]
    fn optional_literal_accepts_explicit_null() {
        let map = obj(json!({ "accreditationStatus": null }));
        let mut errs = Violations::new();
        assert_eq!(
            optional_literal(&map, "accreditationStatus", &["A", "B"], &mut errs),
            None
        );
        assert!(errs.finish().is_ok());
    }

    #[test]
    fn violations_accumulate_across_fields() {
        let map = obj(json!({ "year": "nineteen", "pdfUrl": "nope" }));
        let mut errs = Violations::new();
        required_string(&map, "title", &mut errs);
        required_int_range(&map, "year", 1900, 2100, &mut errs);
        optional_url(&map, "pdfUrl", &mut errs);
        let err = errs.finish().unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert!(err.cites("title"));
        assert!(err.cites("year"));
        assert!(err.cites("pdfUrl"));
    }
}
