use crate::{normalize, query::Params, Config, Error, Result};
use std::{fmt::Display, sync::Arc};

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn, Span};

pub const HEADER_API_KEY: &str = "x-api-key";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_USER_AGENT: &str = "User-Agent";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(HEADER_CONTENT_TYPE)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type()
            .map(|ct| ct.contains(JSON_CONTENT_TYPE))
            .unwrap_or(false)
    }
}

/// Executes one HTTP exchange.
///
/// Implementations must return non-2xx responses as `Ok`; only a failure to
/// complete the exchange at all is an `Err`.
pub trait HttpClient: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Default transport backed by `reqwest`'s blocking client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    inner: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_client(inner: reqwest::blocking::Client) -> Self {
        Self { inner }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.inner.get(&request.url),
            HttpMethod::Post => self.inner.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .map_err(|err| Error::internal("Failed to send request", err.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .map_err(|err| Error::internal("Failed to read response", err.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Request dispatcher shared by every resource accessor.
///
/// Holds only immutable configuration and a transport handle, so one client
/// can serve concurrent calls from several threads.
#[derive(Clone)]
pub struct Client {
    config: Config,
    http: Arc<dyn HttpClient>,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self::with_http_client(config, ReqwestHttpClient::new())
    }

    pub fn with_http_client<H: HttpClient + 'static>(config: Config, http: H) -> Self {
        Self {
            config,
            http: Arc::new(http),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Call `endpoint` relative to the configured base URL.
    ///
    /// GET requests carry `params` in the query string, POST requests carry
    /// them as a JSON object body.
    pub fn fetch<T>(&self, endpoint: &str, params: &Params, method: HttpMethod) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint, params, method);
        match method {
            HttpMethod::Get => self.fetch_url(&url, method, None),
            HttpMethod::Post => self.fetch_url(&url, method, Some(params)),
        }
    }

    /// Call an absolute URL, e.g. a pagination link returned by the API.
    #[instrument(
        name = "supadata_request",
        skip_all,
        fields(
            http.method = %method,
            http.url = %url,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub fn fetch_url<T>(&self, url: &str, method: HttpMethod, body: Option<&Params>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(url, method, body)?;
        debug!("sending request");

        let response = self.http.execute(&request).map_err(|err| {
            warn!(kind = %err.kind, details = %err.details, "transport failure");
            err
        })?;
        Span::current().record("http.status_code", response.status);
        debug!(
            content_type = response.content_type().unwrap_or_default(),
            "received response"
        );

        normalize::parse_response(&response).map_err(|err| {
            warn!(kind = %err.kind, message = %err.message, "request failed");
            err
        })
    }

    fn endpoint_url(&self, endpoint: &str, params: &Params, method: HttpMethod) -> String {
        let mut url = self.config.base_url().to_string();
        if !endpoint.starts_with('/') {
            url.push('/');
        }
        url.push_str(endpoint);

        if method == HttpMethod::Get {
            let query = params.to_query_string();
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
        }
        url
    }

    fn build_request(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&Params>,
    ) -> Result<HttpRequest> {
        let headers = vec![
            (HEADER_API_KEY.to_string(), self.config.api_key().to_string()),
            (HEADER_CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string()),
            (HEADER_USER_AGENT.to_string(), self.config.user_agent().to_string()),
        ];
        let body = match (method, body) {
            (HttpMethod::Post, Some(params)) => Some(serde_json::to_string(params).map_err(
                |err| Error::internal("Failed to serialize request", err.to_string()),
            )?),
            _ => None,
        };

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").field("config", &self.config).finish()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Transport that records requests and replays a canned response.
    #[derive(Clone)]
    pub struct FakeHttpClient {
        pub requests: Arc<Mutex<Vec<HttpRequest>>>,
        responses: Arc<Mutex<Vec<HttpResponse>>>,
    }

    impl FakeHttpClient {
        pub fn new() -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                responses: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Queue a response; responses are served in the order queued.
        pub fn respond(self, status: u16, content_type: &str, body: &str) -> Self {
            self.responses.lock().unwrap().push(HttpResponse {
                status,
                headers: vec![("content-type".to_string(), content_type.to_string())],
                body: body.to_string(),
            });
            self
        }

        pub fn json(self, body: serde_json::Value) -> Self {
            self.respond(200, "application/json", &body.to_string())
        }

        pub fn recorded(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpClient for FakeHttpClient {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(request.clone());
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(Error::internal("Failed to send request", "no response queued"));
            }
            Ok(responses.remove(0))
        }
    }

    pub fn client(fake: &FakeHttpClient) -> Client {
        Client::with_http_client(
            Config::new("test-api-key").with_base_url("https://api.supadata.ai/v1"),
            fake.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{client, FakeHttpClient};
    use super::*;
    use crate::ErrorKind;
    use serde_json::{json, Value};
    use tracing_test::traced_test;

    #[test]
    fn test_get_builds_url_and_headers() {
        let fake = FakeHttpClient::new().json(json!({"ok": true}));
        let params = Params::new().set("url", "https://example.com");
        let _: Value = client(&fake)
            .fetch("/web/scrape", &params, HttpMethod::Get)
            .unwrap();

        let requests = fake.recorded();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "https://api.supadata.ai/v1/web/scrape?url=https%3A%2F%2Fexample.com"
        );
        assert!(req.body.is_none());
        assert!(req
            .headers
            .contains(&("x-api-key".to_string(), "test-api-key".to_string())));
        assert!(req
            .headers
            .contains(&("Content-Type".to_string(), "application/json".to_string())));
        let ua = req
            .headers
            .iter()
            .find(|(k, _)| k == "User-Agent")
            .map(|(_, v)| v.clone())
            .unwrap();
        assert!(!ua.is_empty());
    }

    #[test]
    fn test_endpoint_without_leading_slash() {
        let fake = FakeHttpClient::new().json(json!({}));
        let _: Value = client(&fake)
            .fetch("youtube/video", &Params::new().set("id", "x"), HttpMethod::Get)
            .unwrap();
        assert_eq!(
            fake.recorded()[0].url,
            "https://api.supadata.ai/v1/youtube/video?id=x"
        );
    }

    #[test]
    fn test_get_without_params_has_no_query() {
        let fake = FakeHttpClient::new().json(json!({}));
        let _: Value = client(&fake)
            .fetch("/youtube/batch/123", &Params::new(), HttpMethod::Get)
            .unwrap();
        assert_eq!(fake.recorded()[0].url, "https://api.supadata.ai/v1/youtube/batch/123");
    }

    #[test]
    fn test_post_sends_json_body_without_query() {
        let fake = FakeHttpClient::new().json(json!({"jobId": "j1"}));
        let params = Params::new()
            .set("url", "https://supadata.ai")
            .set("limit", 3u32);
        let _: Value = client(&fake)
            .fetch("/web/crawl", &params, HttpMethod::Post)
            .unwrap();

        let req = &fake.recorded()[0];
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.supadata.ai/v1/web/crawl");
        assert_eq!(
            req.body.as_deref(),
            Some(r#"{"url":"https://supadata.ai","limit":3}"#)
        );
    }

    #[test]
    fn test_success_body_is_returned_unchanged() {
        let body = json!({
            "url": "https://example.com",
            "content": "# Example",
            "extra": {"nested": [1, 2, 3]}
        });
        let fake = FakeHttpClient::new().json(body.clone());
        let result: Value = client(&fake)
            .fetch(
                "/web/scrape",
                &Params::new().set("url", "https://example.com"),
                HttpMethod::Get,
            )
            .unwrap();
        assert_eq!(result, body);
    }

    #[test]
    fn test_transport_failure_is_normalized() {
        let fake = FakeHttpClient::new();
        let err = client(&fake)
            .fetch::<Value>("/web/map", &Params::new(), HttpMethod::Get)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InternalError);
        assert_eq!(err.message, "Failed to send request");
    }

    #[test]
    fn test_exactly_one_round_trip_on_error() {
        let fake = FakeHttpClient::new()
            .respond(500, "text/plain", "boom")
            .json(json!({}));
        let err = client(&fake)
            .fetch::<Value>("/web/map", &Params::new(), HttpMethod::Get)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InternalError);
        assert_eq!(fake.recorded().len(), 1);
    }

    #[test]
    #[traced_test]
    fn test_logs_never_contain_api_key() {
        let fake = FakeHttpClient::new().respond(429, "text/plain", "");
        let _ = client(&fake).fetch::<Value>(
            "/web/scrape",
            &Params::new().set("url", "https://example.com"),
            HttpMethod::Get,
        );
        assert!(logs_contain("sending request"));
        assert!(logs_contain("/web/scrape"));
        assert!(logs_contain("limit-exceeded"));
        assert!(!logs_contain("test-api-key"));
    }
}
