//! Thin wrapper around the ADS REST endpoints used by this tool.
use crate::ads::models::{
    BibtexExport, BigQueryBody, BigQueryResponse, DOCUMENT_FIELDS, Fetched, LibraryPage,
    RateLimit,
};
use crate::error::{CrateError, Result};
use log::{debug, info};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::json;
use urlencoding::encode;

pub const USER_AGENT: &str = concat!("ads-library/", env!("CARGO_PKG_VERSION"));

pub struct AdsClient {
    client: reqwest::Client,
    base_url: String,
}

impl AdsClient {
    /// Builds a client that authenticates every request with `token`.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(CrateError::ApiRequestError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches one page of bibcodes from a library.
    pub async fn fetch_library_page(
        &self,
        library: &str,
        start: u32,
        rows: u32,
    ) -> Result<Fetched<Vec<String>>> {
        let url = format!("{}/biblib/libraries/{}", self.base_url, encode(library));
        debug!("GET {} start={} rows={}", url, start, rows);
        let request = self
            .client
            .get(&url)
            .query(&[("start", start.to_string()), ("rows", rows.to_string())]);
        let fetched: Fetched<LibraryPage> = send_json(request, "library").await?;
        Ok(Fetched {
            body: fetched.body.documents,
            rate_limit: fetched.rate_limit,
        })
    }

    /// Retrieves full metadata for `bibcodes` in a single big query.
    pub async fn big_query(&self, bibcodes: &[String]) -> Result<Fetched<BigQueryBody>> {
        let url = format!("{}/search/bigquery", self.base_url);
        info!("Sending big query for {} bibcodes", bibcodes.len());
        let request = self
            .client
            .post(&url)
            .query(&[
                ("q", "*:*".to_string()),
                ("wt", "json".to_string()),
                ("fq", "{!bitset}".to_string()),
                ("fl", DOCUMENT_FIELDS.to_string()),
                ("rows", bibcodes.len().to_string()),
            ])
            .header(CONTENT_TYPE, "big-query/csv")
            .body(big_query_body(bibcodes));
        let fetched: Fetched<BigQueryResponse> = send_json(request, "big query").await?;
        Ok(Fetched {
            body: fetched.body.response,
            rate_limit: fetched.rate_limit,
        })
    }

    /// Exports `bibcodes` as a BibTeX document.
    pub async fn export_bibtex(&self, bibcodes: &[String]) -> Result<Fetched<BibtexExport>> {
        let url = format!("{}/export/bibtex", self.base_url);
        info!("Requesting BibTeX export for {} bibcodes", bibcodes.len());
        let request = self
            .client
            .post(&url)
            .json(&json!({ "bibcode": bibcodes }));
        send_json(request, "BibTeX export").await
    }
}

fn big_query_body(bibcodes: &[String]) -> String {
    format!("bibcode\n{}", bibcodes.join("\n"))
}

async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    endpoint: &str,
) -> Result<Fetched<T>> {
    let response = request.send().await.map_err(CrateError::ApiRequestError)?;

    if !response.status().is_success() {
        return Err(CrateError::ApiStatusError {
            status: response.status(),
            endpoint: endpoint.to_string(),
        });
    }

    let rate_limit = RateLimit::from_headers(response.headers());
    let body = response
        .json::<T>()
        .await
        .map_err(CrateError::ApiJsonDecodeError)?;

    Ok(Fetched { body, rate_limit })
}
