//! Host side of the todo client: HTTP execution, command handlers, and the
//! interactive menu loop. The binary in `main.rs` wires these to stdin,
//! stdout, and a real ureq agent; integration tests wire them to scripted
//! input and the mock server.

pub mod api;
pub mod commands;

pub use api::{Api, HttpExecute, UreqExecutor};
