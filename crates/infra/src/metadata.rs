// crates/infra/src/metadata.rs
use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use poem_site_shared_kernel::{FileStamps, InfrastructureError};
use serde::Deserialize;

/// Resolved document metadata plus the body with the header stripped.
#[derive(Debug, Clone)]
pub struct ExtractedDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub slug: Option<String>,
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
    pub extra: serde_json::Map<String, serde_json::Value>,
    pub body: String,
}

/// Recognized header fields. Anything else lands in `extra` untouched.
#[derive(Debug, Default, Deserialize)]
struct HeaderFields {
    title: Option<String>,
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    slug: Option<String>,
    created: Option<String>,
    modified: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_yaml::Value>,
}

/// Parse a document's embedded header and reconcile it with the
/// filesystem stamps. Explicit header values always win; a document
/// without a header resolves entirely from the filesystem and filename.
///
/// A malformed header is an error so the caller can fall back for that
/// one document without aborting the scan.
pub fn extract(input: &str, stamps: &FileStamps) -> Result<ExtractedDoc, InfrastructureError> {
    let (fields, body) = match split_header(input) {
        Some((yaml, body)) if !yaml.trim().is_empty() => {
            (serde_yaml::from_str::<HeaderFields>(&yaml)?, body)
        }
        Some((_, body)) => (HeaderFields::default(), body),
        None => (HeaderFields::default(), input),
    };

    let created = resolve_date(fields.created.as_deref(), stamps.created);
    let modified = resolve_date(fields.modified.as_deref(), stamps.modified);

    let mut extra = serde_json::Map::new();
    for (key, value) in fields.extra {
        extra.insert(key, serde_json::to_value(value).unwrap_or(serde_json::Value::Null));
    }

    Ok(ExtractedDoc {
        title: fields.title,
        description: fields.description,
        tags: fields.tags,
        slug: fields.slug,
        created,
        modified,
        extra,
        body: body.to_string(),
    })
}

/// Metadata for a document whose header could not be parsed: filesystem
/// stamps only, raw content as the body.
pub fn fallback(body: String, stamps: &FileStamps) -> ExtractedDoc {
    ExtractedDoc {
        title: None,
        description: None,
        tags: Vec::new(),
        slug: None,
        created: stamps.created,
        modified: stamps.modified,
        extra: serde_json::Map::new(),
        body,
    }
}

fn resolve_date(header_value: Option<&str>, stamp: DateTime<Local>) -> DateTime<Local> {
    header_value.and_then(parse_date).unwrap_or(stamp)
}

/// Date-like header values: RFC 3339, `YYYY-MM-DD HH:MM:SS`, or a bare
/// `YYYY-MM-DD` (midnight, local offset).
pub fn parse_date(value: &str) -> Option<DateTime<Local>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Local));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Local.from_local_datetime(&parsed).earliest();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Local.from_local_datetime(&parsed.and_hms_opt(0, 0, 0)?).earliest();
    }
    None
}

/// Split a leading `---` delimited header block from the body. The block
/// closes on a `---` or `...` line; a missing opener or closer means the
/// whole input is body.
fn split_header(input: &str) -> Option<(String, &str)> {
    let mut lines = input.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let mut offset = first.len();
    let mut yaml = String::new();
    for line in lines {
        offset += line.len();
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some((yaml, &input[offset..]));
        }
        yaml.push_str(line);
    }
    None
}
