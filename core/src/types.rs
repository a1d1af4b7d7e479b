//! Domain DTO for the todo API.
//!
//! # Design
//! One `TodoItem` type carries all traffic: the service PUTs and returns the
//! full record, and on create the service ignores whatever id the client
//! sends. The wire name of the completion flag is `isComplete`, matching the
//! service's JSON contract.

use serde::{Deserialize, Serialize};

/// A single todo item as exchanged with the service.
///
/// `id` is assigned by the service and is zero on values built locally for a
/// create request (see [`TodoItem::unsaved`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

impl TodoItem {
    /// Build a not-yet-created item. The id is zero and the service assigns
    /// the real one in the create response.
    pub fn unsaved(name: impl Into<String>, is_complete: bool) -> Self {
        Self {
            id: 0,
            name: name.into(),
            is_complete,
        }
    }
}
