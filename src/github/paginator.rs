use serde_json::Value;

use crate::config::{FetchConfig, PageFailurePolicy};
use crate::error::{Error, Result};
use crate::github::transport::HttpTransport;

pub struct Paginator<'a> {
    transport: &'a dyn HttpTransport,
    config: &'a FetchConfig,
}

impl<'a> Paginator<'a> {
    pub fn new(transport: &'a dyn HttpTransport, config: &'a FetchConfig) -> Self {
        Self { transport, config }
    }

    /// Fetches every page of a list endpoint and concatenates the records in
    /// request order.
    ///
    /// The cursor advances on every request, and the loop ends only when the
    /// `link` header stops advertising `rel="next"`. Pages that come back with
    /// a non-200 status are handled per [`PageFailurePolicy`]. A body that is
    /// not a JSON array fails the whole fetch.
    pub async fn fetch_all(&self, url: &str, params: &[(&str, &str)]) -> Result<Vec<Value>> {
        let mut all_items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let query = self.build_query(page, params);

            tracing::debug!("Fetching: {} (page {})", url, page);
            let response = self.transport.get(url, &query).await?;

            let has_next = response.has_next_page();
            let current_page = page;
            page += 1;

            if response.is_success() {
                match response.json()? {
                    Value::Array(items) => all_items.extend(items),
                    other => {
                        return Err(Error::NotAList {
                            url: url.to_string(),
                            page: current_page,
                            found: json_type_name(&other),
                        })
                    }
                }
            } else if response.is_no_content() {
                tracing::debug!("No content at {} (page {})", url, current_page);
            } else {
                match self.config.page_failure_policy {
                    PageFailurePolicy::Skip => {
                        tracing::warn!(
                            "Skipping page {} of {}: status {}",
                            current_page,
                            url,
                            response.status
                        );
                    }
                    PageFailurePolicy::Abort => {
                        return Err(Error::PageFailed {
                            url: url.to_string(),
                            page: current_page,
                            status: response.status,
                        });
                    }
                }
            }

            if !has_next {
                break;
            }
        }

        Ok(all_items)
    }

    fn build_query(&self, page: u32, params: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut query = vec![
            ("per_page".to_string(), self.config.per_page.to_string()),
            ("page".to_string(), page.to_string()),
        ];

        for (key, value) in params {
            if matches!(*key, "per_page" | "page") {
                tracing::warn!("Ignoring query parameter '{}': managed by the paginator", key);
                continue;
            }
            query.push((key.to_string(), value.to_string()));
        }

        query
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
