//! Reqwest-backed users API source adapter.
//!
//! This adapter owns transport details only: request construction, the
//! per-call timeout, HTTP error mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::UsersPageDto;
use crate::domain::ports::{UserPage, UserSource, UserSourceError};

const DEFAULT_USER_AGENT: &str = "department-stats/0.1";

/// Users API adapter performing `GET {base}/users?skip=N[&limit=M]`.
pub struct UsersApiSource {
    client: Client,
    users_url: Url,
    page_size: Option<u32>,
}

impl UsersApiSource {
    /// Build an adapter using a reqwest client with an explicit per-call
    /// timeout.
    ///
    /// `base` is the API root (for example `https://dummyjson.com`); the
    /// `users` path segment is appended to it.
    /// ```rust,ignore
    /// let source = UsersApiSource::new(base, Duration::from_millis(5000))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            users_url: users_endpoint(base),
            page_size: None,
        })
    }

    /// Request pages of `page_size` users instead of the upstream default.
    #[must_use]
    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size.filter(|size| *size > 0);
        self
    }

    /// Endpoint the adapter queries.
    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    fn page_url(&self, skip: u64) -> Url {
        let mut url = self.users_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("skip", &skip.to_string());
            if let Some(limit) = self.page_size {
                query.append_pair("limit", &limit.to_string());
            }
        }
        url
    }
}

#[async_trait]
impl UserSource for UsersApiSource {
    async fn fetch_page(&self, skip: u64) -> Result<UserPage, UserSourceError> {
        let response = self
            .client
            .get(self.page_url(skip))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_page(body.as_ref())
    }
}

fn users_endpoint(base: &Url) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("users");
    }
    url
}

fn parse_page(body: &[u8]) -> Result<UserPage, UserSourceError> {
    let decoded: UsersPageDto = serde_json::from_slice(body).map_err(|error| {
        UserSourceError::decode(format!("invalid users JSON payload: {error}"))
    })?;
    Ok(decoded.into_domain_page())
}

fn map_transport_error(error: reqwest::Error) -> UserSourceError {
    if error.is_timeout() {
        UserSourceError::timeout(error.to_string())
    } else if error.is_decode() {
        UserSourceError::decode(error.to_string())
    } else {
        UserSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserSourceError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserSourceError::timeout(format!("status {}", status.as_u16()))
        }
        _ => UserSourceError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.is_empty() {
        return "empty body".to_owned();
    }
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network users API helpers.

    use super::*;
    use crate::domain::Gender;
    use rstest::rstest;

    const PAGE_JSON: &str = r#"{
        "users": [
            {
                "id": 1,
                "firstName": "Emily",
                "lastName": "Johnson",
                "maidenName": "Smith",
                "age": 28,
                "gender": "female",
                "hair": { "color": "Brown", "type": "Curly" },
                "address": { "address": "626 Main Street", "postalCode": "29112" },
                "company": { "department": "Engineering", "name": "Dooley" }
            },
            {
                "id": 2,
                "firstName": "Michael",
                "lastName": "Williams",
                "age": 35,
                "gender": "male",
                "hair": { "color": "Green", "type": "Straight" },
                "address": { "postalCode": "38807" },
                "company": { "department": "Support" }
            }
        ],
        "total": 208,
        "skip": 0,
        "limit": 2
    }"#;

    fn base(text: &str) -> Url {
        Url::parse(text).expect("valid base URL")
    }

    #[rstest]
    #[case("https://dummyjson.com", "https://dummyjson.com/users")]
    #[case("https://dummyjson.com/", "https://dummyjson.com/users")]
    #[case("http://localhost:8080/api", "http://localhost:8080/api/users")]
    #[case("http://localhost:8080/api/?debug=1", "http://localhost:8080/api/users")]
    fn appends_users_segment(#[case] root: &str, #[case] expected: &str) {
        assert_eq!(users_endpoint(&base(root)).as_str(), expected);
    }

    #[test]
    fn page_url_carries_skip_and_optional_limit() {
        let source = UsersApiSource::new(&base("https://dummyjson.com"), Duration::from_secs(5))
            .expect("client");
        assert_eq!(
            source.page_url(30).as_str(),
            "https://dummyjson.com/users?skip=30"
        );

        let sized = source.with_page_size(Some(50));
        assert_eq!(
            sized.page_url(0).as_str(),
            "https://dummyjson.com/users?skip=0&limit=50"
        );
    }

    #[test]
    fn zero_page_size_falls_back_to_upstream_default() {
        let source = UsersApiSource::new(&base("https://dummyjson.com"), Duration::from_secs(5))
            .expect("client")
            .with_page_size(Some(0));
        assert_eq!(
            source.page_url(0).as_str(),
            "https://dummyjson.com/users?skip=0"
        );
    }

    #[test]
    fn parses_users_page_into_domain_records() {
        let page = parse_page(PAGE_JSON.as_bytes()).expect("JSON should decode");
        assert_eq!(page.total, 208);
        assert_eq!(page.limit, 2);
        assert_eq!(page.len(), 2);
        let emily = &page.items[0];
        assert_eq!(emily.department, "Engineering");
        assert_eq!(emily.gender, Gender::Female);
        assert_eq!(emily.age, 28);
        assert_eq!(emily.hair_color, "Brown");
        assert_eq!(emily.postal_code, "29112");
        assert_eq!(
            (emily.first_name.as_str(), emily.last_name.as_str()),
            ("Emily", "Johnson")
        );
        assert_eq!(page.dropped, 0);
        assert_eq!(page.items[1].gender, Gender::Male);
    }

    #[rstest]
    #[case::not_json("<html>oops</html>")]
    #[case::missing_total(r#"{ "users": [] }"#)]
    #[case::missing_department(
        r#"{ "users": [{ "firstName": "A", "lastName": "B", "age": 1, "gender": "male",
             "hair": { "color": "Red" }, "address": { "postalCode": "1" }, "company": {} }],
             "total": 1 }"#
    )]
    fn rejects_undecodable_pages(#[case] body: &str) {
        let error = parse_page(body.as_bytes()).expect_err("decode should fail");
        assert!(
            matches!(error, UserSourceError::Decode { .. }),
            "expected Decode, got {error:?}"
        );
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, "Timeout")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
    #[case::not_found(StatusCode::NOT_FOUND, "Status")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Status")]
    fn maps_http_statuses_to_expected_errors(#[case] status: StatusCode, #[case] expected: &str) {
        let error = map_status_error(status, b"{\"message\":\"backend unavailable\"}");
        match expected {
            "Timeout" => assert!(
                matches!(error, UserSourceError::Timeout { .. }),
                "timeout statuses should map to Timeout",
            ),
            "Status" => assert!(
                matches!(error, UserSourceError::Status { status: code, .. } if code == status.as_u16()),
                "other statuses should keep their code",
            ),
            _ => panic!("unsupported test expectation: {expected}"),
        }
    }

    #[test]
    fn body_preview_is_compacted_and_truncated() {
        let long = format!("error:   {}", "x".repeat(400));
        let preview = body_preview(long.as_bytes());
        assert!(preview.starts_with("error: x"));
        assert!(preview.ends_with("..."));
        assert_eq!(body_preview(b"   "), "empty body");
    }

    #[test]
    fn skips_users_with_unknown_gender_but_counts_them() {
        let body = r#"{ "users": [
            { "id": 9, "firstName": "A", "lastName": "B", "age": 1, "gender": "robot",
              "hair": { "color": "Red" }, "address": { "postalCode": "1" },
              "company": { "department": "R&D" } },
            { "id": 10, "firstName": "C", "lastName": "D", "age": 2, "gender": "female",
              "hair": { "color": "Red" }, "address": { "postalCode": "2" },
              "company": { "department": "R&D" } }
        ], "total": 2, "skip": 0, "limit": 2 }"#;

        let page = parse_page(body.as_bytes()).expect("page should decode");

        assert_eq!(page.len(), 1);
        assert_eq!(page.items[0].first_name, "C");
        assert_eq!(page.dropped, 1);
        assert_eq!(page.offset_delta(), 2);
    }
}
