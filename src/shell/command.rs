//! External command capture.
//!
//! Only the identity lookup shells out, and only to read one line of
//! output, so this is a thin wrapper over [`std::process::Command`].

use std::process::{Command, Output, Stdio};

use crate::error::{InfraError, Result};

/// Run `program` directly (no shell) and return its trimmed stdout.
///
/// Returns `Ok(None)` when the program succeeds but prints nothing.
///
/// # Errors
///
/// [`InfraError::CommandFailed`] when the program cannot be spawned (no
/// exit code) or exits unsuccessfully (with its exit code).
pub fn capture_stdout(program: &str, args: &[&str]) -> Result<Option<String>> {
    let output = run(program, args)?;

    if !output.status.success() {
        return Err(InfraError::CommandFailed {
            command: command_line(program, args),
            code: output.status.code(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let trimmed = stdout.trim();
    tracing::debug!("`{}` printed {} bytes", command_line(program, args), trimmed.len());

    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

fn run(program: &str, args: &[&str]) -> Result<Output> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| {
            tracing::debug!("Could not spawn `{}`: {}", program, e);
            InfraError::CommandFailed {
                command: command_line(program, args),
                code: None,
            }
        })
}

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
