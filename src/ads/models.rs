//! Response payloads of the ADS API.
use serde::{Deserialize, Deserializer};

/// Fields requested from the big query endpoint.
pub const DOCUMENT_FIELDS: &str =
    "abstract,author,bibcode,bibstem,doi,first_author,issue,page,pub,pubdate,title,volume,year";

/// Rate limit headers returned with every ADS response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub remaining: Option<u64>,
    pub limit: Option<u64>,
}

impl RateLimit {
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok())
        };
        Self {
            remaining: read("X-RateLimit-Remaining"),
            limit: read("X-RateLimit-Limit"),
        }
    }
}

/// A decoded response body together with the rate limit it reported.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub body: T,
    pub rate_limit: RateLimit,
}

#[derive(Debug, Deserialize)]
pub struct LibraryPage {
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BigQueryResponse {
    pub response: BigQueryBody,
}

#[derive(Debug, Deserialize)]
pub struct BigQueryBody {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<Document>,
}

/// A bibliographic record as returned by the search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    pub bibcode: String,
    #[serde(default)]
    pub title: Vec<String>,
    #[serde(default)]
    pub author: Vec<String>,
    #[serde(default)]
    pub first_author: Option<String>,
    #[serde(rename = "pub", default)]
    pub publication: Option<String>,
    #[serde(default)]
    pub pubdate: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default)]
    pub doi: Vec<String>,
    #[serde(default)]
    pub bibstem: Vec<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub volume: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub issue: Option<String>,
    #[serde(default)]
    pub page: Vec<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
}

// ADS is inconsistent about quoting numeric fields.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Debug, Deserialize)]
pub struct BibtexExport {
    pub export: String,
    #[serde(default)]
    pub msg: Option<String>,
}
