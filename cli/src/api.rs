//! HTTP execution for the core's plain-data requests.
//!
//! # Design
//! The core builds `HttpRequest` values and parses `HttpResponse` values but
//! never touches the network; this module is the host side of that split.
//! `HttpExecute` is the seam: `UreqExecutor` runs requests over a blocking
//! ureq agent in the real binary, and the command tests substitute a scripted
//! executor to simulate the service without sockets.
//!
//! `Api` pairs a `TodoClient` with an executor and exposes one method per
//! CRUD operation, each a single round-trip with no retry.

use todo_client_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoItem};

/// Executes a single `HttpRequest`, returning the response as data.
///
/// Non-2xx statuses are NOT errors at this level; they come back as ordinary
/// `HttpResponse` values and the core's parsers interpret them. `Err` means
/// the round-trip itself failed (connection refused, DNS, timeout).
pub trait HttpExecute {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking executor backed by one long-lived `ureq::Agent`.
pub struct UreqExecutor {
    agent: ureq::Agent,
}

impl UreqExecutor {
    /// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
    /// responses are returned as data rather than `Err`, letting the core
    /// client handle status interpretation.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpExecute for UreqExecutor {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// The five transport operations, each one build-execute-parse round-trip.
pub struct Api<E> {
    client: TodoClient,
    exec: E,
}

impl<E: HttpExecute> Api<E> {
    pub fn new(base_url: &str, exec: E) -> Self {
        Self {
            client: TodoClient::new(base_url),
            exec,
        }
    }

    pub fn list_all(&self) -> Result<Vec<TodoItem>, ApiError> {
        let req = self.client.build_list();
        self.client.parse_list(self.exec.execute(req)?)
    }

    /// Existence probe. Every failure — transport error, non-2xx status,
    /// unreadable body — collapses to `None`; callers only learn whether the
    /// item could be fetched, not why it could not.
    pub fn get_by_id(&self, id: i64) -> Option<TodoItem> {
        let req = self.client.build_get(id);
        let response = self.exec.execute(req).ok()?;
        self.client.parse_get(response).ok()
    }

    pub fn create(&self, item: &TodoItem) -> Result<TodoItem, ApiError> {
        let req = self.client.build_create(item)?;
        self.client.parse_create(self.exec.execute(req)?)
    }

    pub fn update(&self, id: i64, item: &TodoItem) -> Result<(), ApiError> {
        let req = self.client.build_update(id, item)?;
        self.client.parse_update(self.exec.execute(req)?)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        let req = self.client.build_delete(id);
        self.client.parse_delete(self.exec.execute(req)?)
    }
}
