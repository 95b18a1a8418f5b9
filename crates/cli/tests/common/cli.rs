//! CLI command execution helpers with automatic timing
//!
//! This module provides a wrapper around the `reflect` binary that runs it
//! against an isolated data directory and config file, measures execution
//! time and provides convenient assertion methods.

use super::TestEnv;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// CLI command builder with timing
pub struct ReflectCommand {
    binary_path: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
    unset: Vec<String>,
    stdin_data: Option<String>,
}

impl ReflectCommand {
    /// Create a new command bound to the given test environment
    pub fn new(test_env: &TestEnv) -> Self {
        let mut env = HashMap::new();
        env.insert(
            "REFLECT_DATA_DIR".to_string(),
            test_env.data_dir().display().to_string(),
        );
        env.insert(
            "REFLECT_CONFIG".to_string(),
            test_env.config_path().display().to_string(),
        );

        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_reflect")),
            args: Vec::new(),
            env,
            unset: Vec::new(),
            stdin_data: None,
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    /// Run without an environment variable
    pub fn env_remove(&mut self, key: &str) -> &mut Self {
        self.env.remove(key);
        self.unset.push(key.to_string());
        self
    }

    /// Provide stdin data
    pub fn stdin(&mut self, data: &str) -> &mut Self {
        self.stdin_data = Some(data.to_string());
        self
    }

    /// Execute command and return result with timing
    pub fn execute(&self) -> Result<CommandResult> {
        let start = Instant::now();

        let mut command = Command::new(&self.binary_path);
        command
            .args(&self.args)
            .envs(&self.env)
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for key in &self.unset {
            command.env_remove(key);
        }

        let output = if let Some(stdin_str) = &self.stdin_data {
            let mut child = command
                .stdin(Stdio::piped())
                .spawn()
                .context("Failed to spawn command")?;

            // Dropping stdin after writing signals end of input.
            if let Some(mut stdin) = child.stdin.take() {
                use std::io::Write;
                stdin.write_all(stdin_str.as_bytes())?;
            }

            child.wait_with_output()
                .context("Failed to wait for command")?
        } else {
            command
                .stdin(Stdio::null())
                .output()
                .context("Failed to execute command")?
        };

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            duration: start.elapsed(),
        })
    }

    /// Execute and assert success
    pub fn assert_success(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if !result.success() {
            anyhow::bail!(
                "Command failed (exit code: {}):\nArgs: {:?}\nStdout: {}\nStderr: {}",
                result.exit_code,
                self.args,
                result.stdout,
                result.stderr
            );
        }

        Ok(result)
    }

    /// Execute and expect failure
    pub fn assert_failure(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if result.success() {
            anyhow::bail!(
                "Command should have failed but succeeded:\nArgs: {:?}\nStdout: {}",
                self.args,
                result.stdout
            );
        }

        Ok(result)
    }
}

/// Command execution result with timing
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration: Duration,
}

impl CommandResult {
    /// Check if command succeeded
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Check if stdout contains text
    pub fn contains_stdout(&self, text: &str) -> bool {
        self.stdout.contains(text)
    }

    /// Check if stderr contains text
    pub fn contains_stderr(&self, text: &str) -> bool {
        self.stderr.contains(text)
    }

    /// Parse the first record ID from output
    pub fn parse_record_id(&self) -> Option<String> {
        self.stdout.lines().find_map(extract_ulid)
    }
}

/// Extract a full ULID (26 Crockford base32 characters) from a line of text
pub fn extract_ulid(line: &str) -> Option<String> {
    line.split(|c: char| !c.is_ascii_alphanumeric())
        .find(|word| {
            word.len() == 26
                && word.starts_with('0')
                && word.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        })
        .map(str::to_string)
}

/// Macro for convenient command construction
///
/// Usage:
/// ```ignore
/// reflect!(&env, "add", "vim", "gd", "-t", "lsp").assert_success()?;
/// reflect!(&env, "search", "vims", "-i").stdin("l\nls\n").assert_success()?;
/// ```
#[macro_export]
macro_rules! reflect {
    ($env:expr, $($arg:expr),*) => {{
        let mut cmd = $crate::common::cli::ReflectCommand::new($env);
        cmd.args(&[$($arg),*]);
        cmd
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulid_extraction() {
        let line = "✓ Added vim 01HXKJ7NVQW3Y2YMZK5VFZX3G8";
        let id = extract_ulid(line);
        assert_eq!(id, Some("01HXKJ7NVQW3Y2YMZK5VFZX3G8".to_string()));
    }

    #[test]
    fn test_ulid_extraction_ignores_short_ids() {
        assert_eq!(extract_ulid("01HXKJ7N gd [lsp]"), None);
    }
}
