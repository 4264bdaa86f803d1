// src/infrastructure/renderer.rs
use crate::constants::TEMP_DIR_PREFIX;
use crate::domain::DomainError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct ContentRenderer {
    launch_delay: Duration,
    // Keep last temp dir alive to prevent deletion
    _temp_dir: Option<TempDir>,
}

impl ContentRenderer {
    pub fn new(launch_delay: Duration) -> Self {
        Self {
            launch_delay,
            _temp_dir: None,
        }
    }

    pub fn create_temp_file(&mut self, content: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("index.html");

        File::create(&file_path)
            .with_context(|| format!("Failed to create temp file at {}", file_path.display()))?
            .write_all(content.as_bytes())
            .context("Failed to write content to temporary file")?;

        self._temp_dir = Some(temp_dir);

        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        browser_command(path_str)?
            .spawn()
            .context("Failed to open browser")?;

        // Temp dir goes away with self
        debug!(delay = ?self.launch_delay, "Waiting for browser to load page");
        std::thread::sleep(self.launch_delay);

        Ok(())
    }
}

/// Platform command that opens `target` with the default browser
fn browser_command(target: &str) -> Result<Command> {
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg(target);
        Ok(command)
    }
    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", target]);
        Ok(command)
    }
    #[cfg(target_os = "linux")]
    {
        let mut command = Command::new("xdg-open");
        command.arg(target);
        Ok(command)
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        let _ = target;
        Err(anyhow::anyhow!(
            "Opening a browser is not supported on this platform ({}); use `render -o` instead",
            std::env::consts::OS
        ))
    }
}

/// Write rendered output to `path`. The parent directory must already exist.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(DomainError::OutputError(format!(
                "Directory does not exist: {}",
                parent.display()
            ))
            .into());
        }
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output to {}", path.display()))?;
    debug!(?path, bytes = content.len(), "Wrote output");
    Ok(())
}
