use super::*;
use std::net::SocketAddr;
use warp::{Filter, http::{Response, StatusCode}};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// How the mock backend answers.
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub status_code: u16,
    pub status_body: String,
    pub toggle_code: u16,
}

impl MockConfig {
    pub fn with_status(status: &str) -> MockConfig {
        MockConfig {
            status_code: 200,
            status_body: serde_json::json!({ "status": status }).to_string(),
            toggle_code: 200,
        }
    }

    pub fn status_code(mut self, code: u16) -> MockConfig {
        self.status_code = code;
        self
    }

    pub fn status_body(mut self, body: impl Into<String>) -> MockConfig {
        self.status_body = body.into();
        self
    }

    pub fn toggle_code(mut self, code: u16) -> MockConfig {
        self.toggle_code = code;
        self
    }
}

/// Indexing backend served by warp on an ephemeral port, recording every request it gets.
pub struct MockBackend {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `METHOD /path` of each request, in arrival order.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| format!("{} {}", r.method, r.path)).collect()
    }
}

pub async fn serve_mock(config: MockConfig) -> MockBackend {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let config = Arc::new(config);

    let requests2 = Arc::clone(&requests);
    let config2 = Arc::clone(&config);
    let status = warp::get()
        .and(warp::path("status"))
        .and(warp::path::end())
        .map(move || {
            requests2.lock().unwrap().push(RecordedRequest {
                method: "GET",
                path: String::from("/status"),
                content_type: None,
                body: None,
            });
            Response::builder()
                .status(StatusCode::from_u16(config2.status_code).unwrap())
                .header("Content-Type", "application/json")
                .body(config2.status_body.clone())
                .unwrap()
        });

    let requests2 = Arc::clone(&requests);
    let toggle = warp::post()
        .and(warp::path("api"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::json::<serde_json::Value>())
        .map(move |endpoint: String, content_type: Option<String>, body: serde_json::Value| {
            requests2.lock().unwrap().push(RecordedRequest {
                method: "POST",
                path: format!("/api/{endpoint}"),
                content_type,
                body: Some(body),
            });
            Response::builder()
                .status(StatusCode::from_u16(config.toggle_code).unwrap())
                .body(String::new())
                .unwrap()
        });

    let (addr, server) = warp::serve(status.or(toggle)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    MockBackend { addr, requests }
}
