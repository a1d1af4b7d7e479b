//! Command handlers and the interactive menu loop.
//!
//! # Design
//! Each handler translates terminal prompts into at most two `Api` calls and
//! prints the outcome. Handlers and the loop are generic over `BufRead` /
//! `Write` so tests can script stdin and capture stdout. No handler failure
//! is fatal: every error path prints a message and falls back to the menu,
//! which is the error boundary of last resort.

use std::io::{self, BufRead, Write};

use todo_client_core::TodoItem;

use crate::api::{Api, HttpExecute};

/// Read one line, stripping only the trailing newline. `None` means EOF.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}

/// Only the exact token `y`, case-folded, counts as yes. Everything else —
/// `yes`, `true`, empty input — is no.
fn is_yes(answer: &str) -> bool {
    answer.to_lowercase() == "y"
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    read_line(input)
}

fn list(api: &Api<impl HttpExecute>, out: &mut impl Write) -> io::Result<()> {
    match api.list_all() {
        Ok(mut todos) => {
            todos.sort_by_key(|t| t.id);
            writeln!(out, "\nTask list:")?;
            for todo in &todos {
                writeln!(
                    out,
                    "- ID: {}, Name: {}, Complete: {}",
                    todo.id, todo.name, todo.is_complete
                )?;
            }
        }
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

fn create(
    api: &Api<impl HttpExecute>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let Some(name) = prompt(input, out, "Enter task name: ")? else {
        return Ok(());
    };

    let answer = prompt(input, out, "Task complete? (y/n): ")?.unwrap_or_default();
    let new_todo = TodoItem::unsaved(name, is_yes(&answer));

    match api.create(&new_todo) {
        Ok(created) => writeln!(
            out,
            "\nTask created: ID {}, Name: {}",
            created.id, created.name
        )?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

fn update(
    api: &Api<impl HttpExecute>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let answer = prompt(input, out, "Enter task ID to update: ")?.unwrap_or_default();
    let Ok(id) = answer.parse::<i64>() else {
        writeln!(out, "Invalid ID!")?;
        return Ok(());
    };

    // Existence check before prompting for the new values. Absence covers
    // both a true 404 and any other failure to fetch.
    if api.get_by_id(id).is_none() {
        writeln!(out, "Task with ID {id} not found!")?;
        return Ok(());
    }

    let Some(name) = prompt(input, out, "New task name: ")? else {
        return Ok(());
    };
    let answer = prompt(input, out, "Task complete? (y/n): ")?.unwrap_or_default();

    let updated = TodoItem {
        id,
        name,
        is_complete: is_yes(&answer),
    };
    match api.update(id, &updated) {
        Ok(()) => writeln!(out, "\nTask updated!")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

fn delete(
    api: &Api<impl HttpExecute>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let answer = prompt(input, out, "Enter task ID to delete: ")?.unwrap_or_default();
    let Ok(id) = answer.parse::<i64>() else {
        writeln!(out, "Invalid ID!")?;
        return Ok(());
    };

    // No existence pre-check; the service's status is the answer.
    match api.delete(id) {
        Ok(()) => writeln!(out, "\nTask deleted!")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

/// Menu-driven dispatch loop. Runs until the user picks `5` or stdin closes.
pub fn run(
    api: &Api<impl HttpExecute>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        writeln!(out, "\nChoose an action:")?;
        writeln!(out, "1. List all tasks")?;
        writeln!(out, "2. Add a task")?;
        writeln!(out, "3. Update a task")?;
        writeln!(out, "4. Delete a task")?;
        writeln!(out, "5. Exit")?;
        out.flush()?;

        let Some(choice) = read_line(input)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => list(api, out)?,
            "2" => create(api, input, out)?,
            "3" => update(api, input, out)?,
            "4" => delete(api, input, out)?,
            "5" => return Ok(()),
            _ => writeln!(out, "Invalid choice!")?,
        }
    }
}
