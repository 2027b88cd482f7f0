//! Transparent delegation to the original command.
//!
//! On ALLOW/PASSTHROUGH the wrapper hands off to the real command with its
//! original arguments and standard streams. On Unix this uses process
//! replacement (`execvp` semantics), so the wrapper contributes no extra
//! process layer to signal handling; elsewhere it spawns, waits, and
//! propagates the exact exit code.

use crate::error::GateError;
use crate::policy::Command;

/// Execute the command, inheriting stdio.
///
/// On Unix this only returns on failure to exec. On other platforms it
/// returns the child's exit code.
pub fn run(command: &Command) -> Result<i32, GateError> {
    let mut child = std::process::Command::new(&command.name);
    child.args(&command.args);
    exec_or_wait(child, &command.name)
}

#[cfg(unix)]
fn exec_or_wait(mut child: std::process::Command, name: &str) -> Result<i32, GateError> {
    use std::os::unix::process::CommandExt;
    // exec replaces the process image; reaching the next line means it failed
    let err = child.exec();
    Err(map_spawn_error(name, err))
}

#[cfg(not(unix))]
fn exec_or_wait(mut child: std::process::Command, name: &str) -> Result<i32, GateError> {
    let status = child.status().map_err(|e| map_spawn_error(name, e))?;
    Ok(status.code().unwrap_or(1))
}

fn map_spawn_error(name: &str, err: std::io::Error) -> GateError {
    if err.kind() == std::io::ErrorKind::NotFound {
        GateError::CommandNotFound(name.to_string())
    } else {
        GateError::Spawn {
            name: name.to_string(),
            source: err,
        }
    }
}
