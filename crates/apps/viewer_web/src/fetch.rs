use gloo_net::http::Request;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Network(String),
    Status { url: String, status: u16 },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "request failed: {msg}"),
            FetchError::Status { url, status } => write!(f, "{url}: HTTP {status}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// GETs `url` as text; non-2xx responses are errors.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    resp.text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}
