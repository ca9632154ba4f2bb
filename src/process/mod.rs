// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! CommandRunner::run(program, args, cwd)
//!              |
//!        dry_run? --- yes --> log invocation, synthetic success
//!              |
//!              v
//!     tokio::process::Command
//!     args, cwd, captured stdio
//!              |
//!              v
//!      classify exit status
//!              |
//!              v
//!       CommandOutput
//!    { exit_code, stdout, stderr }
//! ```
//!
//! Every external invocation in the application goes through this runner, so
//! dry-run mode is a single switch rather than a per-call-site concern.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, trace};

use crate::error::ProcessError;

/// Captured output of a completed external command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// First line of stdout, trimmed. Convenient for single-value queries
    /// like `git config --get`.
    #[must_use]
    pub fn stdout_first_line(&self) -> &str {
        self.stdout.lines().next().unwrap_or("").trim_end()
    }
}

/// Executes external commands with captured output.
///
/// In dry-run mode no process is spawned; the would-be invocation is logged
/// and a synthetic success with empty output is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner {
    dry_run: bool,
}

impl CommandRunner {
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Resolve `program` in PATH, failing early with a clear error.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::ExecutableNotFound`] if the lookup fails.
    pub fn require(program: &str) -> Result<std::path::PathBuf, ProcessError> {
        which::which(program).map_err(|_| ProcessError::ExecutableNotFound {
            name: program.to_string(),
        })
    }

    /// Runs `program` with `args`, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::SpawnFailed`] if the process cannot be
    /// launched, or [`ProcessError::NonZeroExit`] (carrying the captured
    /// output) if it exits with a non-zero status.
    pub async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<CommandOutput, ProcessError> {
        self.run_with_env(program, args, cwd, &[]).await
    }

    /// Like [`run`](Self::run), with extra environment variables set on the
    /// child process.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub async fn run_with_env(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
        envs: &[(&str, &str)],
    ) -> Result<CommandOutput, ProcessError> {
        let cmd_line = render_command_line(program, args);

        if self.dry_run {
            info!(cmd = %cmd_line, "dry running command");
            return Ok(CommandOutput::default());
        }

        if let Some(cwd) = cwd {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }

        for (key, value) in envs {
            command.env(key, value);
        }

        let output = command
            .output()
            .await
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let exit_code = output.status.code().unwrap_or(-1);

        if !output.status.success() {
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: exit_code,
                stdout,
                stderr,
            });
        }

        trace!(cmd = %cmd_line, exit_code, "completed");
        Ok(CommandOutput::new(exit_code, stdout, stderr))
    }
}

/// Renders the full command line for logging, quoting args with spaces.
fn render_command_line(program: &str, args: &[&str]) -> String {
    use std::fmt::Write as _;

    let mut cmd = program.to_string();
    for arg in args {
        if arg.contains(' ') {
            let _ = write!(cmd, " \"{arg}\"");
        } else {
            let _ = write!(cmd, " {arg}");
        }
    }
    cmd
}
