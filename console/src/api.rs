use crate::prelude::*;

#[derive(Debug)]
pub enum ApiError {
    Reqwest(reqwest::Error),
    Json(serde_json::Error),
    BadStatus { status: StatusCode, body: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Reqwest(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(e)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Reqwest(e) => write!(f, "ReqwestError: {e}"),
            ApiError::Json(e) => write!(f, "InvalidJson: {e}"),
            ApiError::BadStatus { status, body } if body.is_empty() => write!(f, "BadStatus: {status}"),
            ApiError::BadStatus { status, body } => write!(f, "BadStatus: {status}: {body}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Reqwest(e) => Some(e),
            ApiError::Json(e) => Some(e),
            ApiError::BadStatus { .. } => None,
        }
    }
}

/// Body of the start and stop requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub id: String,
}

/// The backend endpoints the controller talks to.
///
/// Futures are not `Send`: the browser's fetch futures aren't, and the
/// controller only ever runs on a single-threaded event loop.
#[async_trait(?Send)]
pub trait IndexingApi {
    /// `GET /status`, decoded and mapped.
    async fn status(&self) -> Result<IndexingStatus, ApiError>;

    /// `POST` to the endpoint of `action`. Only the response status is looked at.
    async fn toggle(&self, action: IndexingAction, request: &ToggleRequest) -> Result<(), ApiError>;
}

/// [`IndexingApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> HttpApi {
        HttpApi::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> HttpApi {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpApi { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn ensure_success(rep: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = rep.status();
    if status.is_success() {
        return Ok(rep);
    }
    let body = rep.text().await.unwrap_or_default();
    Err(ApiError::BadStatus { status, body })
}

#[async_trait(?Send)]
impl IndexingApi for HttpApi {
    async fn status(&self) -> Result<IndexingStatus, ApiError> {
        let url = self.url("/status");
        trace!("GET {url}");
        let rep = self.client.get(url).send().await?;
        let rep = ensure_success(rep).await?;
        let rep = rep.text().await?;
        let data = serde_json::from_str::<serde_json::Value>(&rep)?;
        Ok(IndexingStatus::from_json(&data))
    }

    async fn toggle(&self, action: IndexingAction, request: &ToggleRequest) -> Result<(), ApiError> {
        let url = self.url(action.path());
        trace!("POST {url} for {}", request.id);
        let rep = self.client.post(url).json(request).send().await?;
        ensure_success(rep).await?;
        Ok(())
    }
}
