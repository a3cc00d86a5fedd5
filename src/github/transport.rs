use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;

use crate::error::Result;

pub const API_VERSION: &str = "2022-11-28";

/// Status, `link` header and raw body of a single GET.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub link: Option<String>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// GitHub answers 204 for the contributor list of an empty repository.
    pub fn is_no_content(&self) -> bool {
        self.status == 204
    }

    pub fn has_next_page(&self) -> bool {
        self.link
            .as_deref()
            .map(|v| v.contains("rel=\"next\""))
            .unwrap_or(false)
    }

    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Issues authenticated GET requests against the API.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<ApiResponse>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static(API_VERSION),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("orgharvest/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<ApiResponse> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status().as_u16();
        let link = response
            .headers()
            .get(header::LINK)
            .map(link_header_text);
        let body = response.bytes().await?.to_vec();

        Ok(ApiResponse { status, link, body })
    }
}

/// Header bytes outside ASCII are replaced rather than rejected, so the
/// `rel="next"` marker is still found.
fn link_header_text(value: &header::HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_next_page_requires_next_relation() {
        let mut response = ApiResponse {
            status: 200,
            link: Some("<https://api.github.com/x?page=1>; rel=\"prev\", <https://api.github.com/x?page=1>; rel=\"first\"".to_string()),
            body: b"[]".to_vec(),
        };
        assert!(!response.has_next_page());

        response.link = Some("<https://api.github.com/x?page=3>; rel=\"next\"".to_string());
        assert!(response.has_next_page());

        response.link = None;
        assert!(!response.has_next_page());
    }

    #[test]
    fn test_non_utf8_link_header_keeps_next_relation() {
        let value = header::HeaderValue::from_bytes(
            b"<https://api.github.com/orgs/caf\xe9/repos?page=2>; rel=\"next\"",
        )
        .unwrap();
        assert!(value.to_str().is_err());

        let response = ApiResponse {
            status: 200,
            link: Some(link_header_text(&value)),
            body: b"[]".to_vec(),
        };
        assert!(response.has_next_page());
    }
}
