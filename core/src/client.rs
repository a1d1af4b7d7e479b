//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` (the collection URL) and carries no
//! mutable state between calls. Each CRUD operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::TodoItem;

/// Synchronous, stateless client for the todo API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    /// `base_url` is the collection endpoint, e.g. `http://host/todos`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, item: &TodoItem) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(item).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: i64, item: &TodoItem) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(item).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Items come back in whatever order the service stores them; sorting is
    /// the caller's concern.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Fire-and-confirm: the body of a successful update is ignored.
    pub fn parse_update(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }
}

/// Map any non-2xx status to `ApiError::Http`.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000/todos")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_produces_correct_request() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_produces_correct_request() {
        let req = client().build_get(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_produces_correct_request() {
        let item = TodoItem::unsaved("Buy milk", true);
        let req = client().build_create(&item).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Buy milk");
        assert_eq!(body["isComplete"], true);
        assert_eq!(body["id"], 0);
    }

    #[test]
    fn build_update_produces_correct_request() {
        let item = TodoItem {
            id: 9,
            name: "Updated".to_string(),
            is_complete: false,
        };
        let req = client().build_update(9, &item).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/todos/9");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 9);
        assert_eq!(body["name"], "Updated");
        assert_eq!(body["isComplete"], false);
    }

    #[test]
    fn build_delete_produces_correct_request() {
        let req = client().build_delete(5);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/todos/5");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_success_preserves_service_order() {
        let resp = response(
            200,
            r#"[{"id":2,"name":"B","isComplete":true},{"id":1,"name":"A","isComplete":false}]"#,
        );
        let items = client().parse_list(resp).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 2);
        assert_eq!(items[1].id, 1);
    }

    #[test]
    fn parse_list_non_success_is_http_error() {
        let err = client().parse_list(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_get_not_found_is_http_error() {
        let err = client().parse_get(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
    }

    #[test]
    fn parse_create_returns_assigned_id() {
        let resp = response(201, r#"{"id":7,"name":"Buy milk","isComplete":true}"#);
        let item = client().parse_create(resp).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Buy milk");
    }

    #[test]
    fn parse_create_accepts_any_2xx() {
        let resp = response(200, r#"{"id":1,"name":"Ok","isComplete":false}"#);
        assert!(client().parse_create(resp).is_ok());
    }

    #[test]
    fn parse_update_ignores_response_body() {
        assert!(client().parse_update(response(200, "whatever")).is_ok());
        assert!(client().parse_update(response(204, "")).is_ok());
    }

    #[test]
    fn parse_update_non_success_is_http_error() {
        let err = client().parse_update(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
    }

    #[test]
    fn parse_delete_success_and_failure() {
        assert!(client().parse_delete(response(204, "")).is_ok());
        let err = client().parse_delete(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/todos/");
        let req = client.build_list();
        assert_eq!(req.path, "http://localhost:3000/todos");
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client().parse_list(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
