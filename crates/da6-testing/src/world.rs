//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Planting catalog files (valid or deliberately broken)
//! - Executing CLI commands with proper context

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use tempfile::TempDir;

use da6_types::Catalog;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use da6_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_catalog(&fixtures::small_catalog());
///
/// let result = world.run(&["blog", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    content_path: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment. Commands run against the
    /// embedded catalog until `with_catalog` plants a file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".da6");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            content_path: None,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.da6).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the planted catalog file, if any.
    pub fn content_path(&self) -> Option<&Path> {
        self.content_path.as_deref()
    }

    /// Serialize a catalog into the environment and route every command
    /// at it via `--content`.
    pub fn with_catalog(mut self, catalog: &Catalog) -> Self {
        let path = self.temp_dir.path().join("catalog.json");
        let json = serde_json::to_string_pretty(catalog).expect("Failed to serialize catalog");
        std::fs::write(&path, json).expect("Failed to write catalog");
        self.content_path = Some(path);
        self
    }

    /// Plant a raw catalog payload, which may be intentionally malformed.
    pub fn with_catalog_file(mut self, name: &str, contents: &str) -> Self {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write catalog file");
        self.content_path = Some(path);
        self
    }

    /// Set an environment variable for commands run in this world.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `Command::cargo_bin("da6")`).
    /// This method configures it with the appropriate data-dir, content file,
    /// cwd, and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        if let Some(content) = &self.content_path {
            cmd.arg("--content").arg(content);
        }

        // The host machine's settings must not leak into tests.
        cmd.env_remove("DA6_PATH");
        cmd.env_remove("DA6_CONTENT");

        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Example
    /// ```no_run
    /// # use da6_testing::TestWorld;
    /// let world = TestWorld::new();
    /// let result = world.run(&["tags"]).unwrap();
    /// assert!(result.success());
    /// ```
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("da6")
            .map_err(|e| anyhow::anyhow!("Failed to find da6 binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Non-empty stdout lines, trimmed. Handy for id listings.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}
