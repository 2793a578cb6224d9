// Shared helpers: an in-process stub of the meal plan server and a recording notifier.
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use meal_plan_client::domain::{MealPlanError, Notifier};
use std::sync::{Arc, Mutex};

// What the stub answers to every request.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn json(status: StatusCode, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

// One request as the stub saw it on the wire.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Bytes,
}

struct StubState {
    reply: Reply,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct StubServer {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .expect("requests mutex poisoned")
            .clone()
    }
}

async fn record(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    state
        .requests
        .lock()
        .expect("requests mutex poisoned")
        .push(RecordedRequest {
            method,
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            body,
        });

    (
        state.reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.reply.body.clone(),
    )
        .into_response()
}

// Start a stub on an ephemeral port; it lives as long as the test runtime.
pub async fn start(reply: Reply) -> StubServer {
    let state = Arc::new(StubState {
        reply,
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .fallback(record)
        .with_state(Arc::clone(&state));

    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    StubServer {
        base_url: format!("http://{addr}"),
        state,
    }
}

// Base URL of a port nothing listens on, for connection-refused cases.
pub fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

// Notifier that keeps alerts and diagnostic lines for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("alerts mutex poisoned").clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().expect("failures mutex poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .expect("alerts mutex poisoned")
            .push(message.to_string());
    }

    fn report_failure(&self, err: &MealPlanError) {
        self.failures
            .lock()
            .expect("failures mutex poisoned")
            .push(err.log_line());
    }
}
