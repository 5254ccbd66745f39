//! Best-effort clipboard copy through platform helper programs.
//!
//! Candidates are tried in order; the first helper that starts, accepts the
//! text on stdin and exits successfully wins.

use anyhow::{Context, Result, anyhow, bail};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::error::ClipboardError;

/// One external clipboard helper and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub name: &'static str,
    pub args: &'static [&'static str],
}

impl ClipboardCommand {
    pub const fn new(name: &'static str, args: &'static [&'static str]) -> Self {
        Self { name, args }
    }
}

#[cfg(target_os = "macos")]
const CANDIDATES: &[ClipboardCommand] = &[ClipboardCommand::new("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[ClipboardCommand] = &[ClipboardCommand::new("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[ClipboardCommand] = &[
    ClipboardCommand::new("wl-copy", &[]),
    ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
    ClipboardCommand::new("xsel", &["--clipboard", "--input"]),
];

/// Clipboard helpers for the current platform, in priority order
pub fn clipboard_commands() -> &'static [ClipboardCommand] {
    CANDIDATES
}

/// Copy `text` using the platform's clipboard helpers.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    copy_with(text, clipboard_commands())
}

/// Try each candidate in turn until one succeeds.
pub fn copy_with(text: &str, candidates: &[ClipboardCommand]) -> Result<(), ClipboardError> {
    for cmd in candidates {
        match pipe_to_command(text, cmd) {
            Ok(()) => {
                tracing::debug!(command = cmd.name, "copied to clipboard");
                return Ok(());
            }
            Err(err) => tracing::debug!(command = cmd.name, "clipboard helper failed: {:#}", err),
        }
    }
    Err(ClipboardError::NoSupportedCommand)
}

/// Spawn `cmd`, write `input` to its stdin, close stdin and wait for exit.
///
/// The child is always waited on, even when writing fails.
pub fn pipe_to_command(input: &str, cmd: &ClipboardCommand) -> Result<()> {
    let mut child = Command::new(cmd.name)
        .args(cmd.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                anyhow!("{} not found on PATH", cmd.name)
            } else {
                anyhow::Error::new(e).context(format!("failed to start {}", cmd.name))
            }
        })?;

    // Dropping the handle closes the pipe so the helper sees EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input.as_bytes()),
        None => Err(std::io::Error::other("stdin was not captured")),
    };

    let status = child
        .wait()
        .with_context(|| format!("failed waiting for {}", cmd.name))?;
    written.with_context(|| format!("failed writing to {}", cmd.name))?;

    if !status.success() {
        bail!("{} exited with {}", cmd.name, status);
    }
    Ok(())
}
