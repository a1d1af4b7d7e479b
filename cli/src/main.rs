//! Interactive console client for the todo service.
//!
//! Prints a numbered menu, reads selections from stdin, and performs one
//! blocking HTTP round-trip per command. The base URL is fixed; run the
//! `mock-server` binary (default port 3000) to have a service to talk to.

use std::io;

use todo_cli::{commands, Api, UreqExecutor};

const BASE_URL: &str = "http://localhost:3000/todos";

fn main() -> io::Result<()> {
    println!("=== Todo API Client ===");

    let api = Api::new(BASE_URL, UreqExecutor::new());

    let stdin = io::stdin();
    let stdout = io::stdout();
    commands::run(&api, &mut stdin.lock(), &mut stdout.lock())
}
