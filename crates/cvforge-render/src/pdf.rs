//! PDF generation by shelling out to `wkhtmltopdf`.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use cvforge_core::config::RenderConfig;
use cvforge_core::{AppError, AppResult};
use tokio::process::Command;
use uuid::Uuid;

/// Longest stderr excerpt carried into an error message.
const MAX_STDERR_CHARS: usize = 2000;

/// Converts a rendered HTML page into PDF bytes.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    async fn html_to_pdf(&self, html: &str) -> AppResult<Vec<u8>>;
}

/// Runs the `wkhtmltopdf` binary over temp files.
///
/// Input and output live under the system temp directory with random
/// names, and are removed after the run regardless of outcome.
pub struct WkhtmltopdfEngine {
    binary: String,
    page_size: String,
    timeout: Duration,
}

impl WkhtmltopdfEngine {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            binary: config.wkhtmltopdf_path.clone(),
            page_size: config.page_size.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    fn temp_paths(&self) -> (PathBuf, PathBuf) {
        let id = Uuid::new_v4();
        let dir = std::env::temp_dir();
        (
            dir.join(format!("cvforge-{id}.html")),
            dir.join(format!("cvforge-{id}.pdf")),
        )
    }

    async fn run(&self, input: &PathBuf, output: &PathBuf) -> AppResult<()> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("-q")
            .arg("--page-size")
            .arg(&self.page_size)
            .arg("--enable-local-file-access")
            .arg(input)
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(binary = %self.binary, input = %input.display(), "running pdf generator");

        let result = tokio::time::timeout(self.timeout, cmd.output()).await;
        let output = match result {
            Ok(Ok(out)) => out,
            Ok(Err(err)) => {
                return Err(AppError::render(format!(
                    "failed to spawn '{}': {err}",
                    self.binary
                )))
            }
            Err(_) => {
                return Err(AppError::render(format!(
                    "pdf generation timed out after {}s",
                    self.timeout.as_secs()
                )))
            }
        };

        if !output.status.success() {
            let stderr: String = String::from_utf8_lossy(&output.stderr)
                .chars()
                .take(MAX_STDERR_CHARS)
                .collect();
            return Err(AppError::render(format!(
                "pdf generator exited with status {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PdfEngine for WkhtmltopdfEngine {
    async fn html_to_pdf(&self, html: &str) -> AppResult<Vec<u8>> {
        let (input, output) = self.temp_paths();

        tokio::fs::write(&input, html).await.map_err(|err| {
            AppError::render(format!("failed to write html input: {err}"))
        })?;

        let run = self.run(&input, &output).await;
        let bytes = match run {
            Ok(()) => tokio::fs::read(&output).await.map_err(|err| {
                AppError::render(format!("failed to read generated pdf: {err}"))
            }),
            Err(err) => Err(err),
        };

        let _ = tokio::fs::remove_file(&input).await;
        let _ = tokio::fs::remove_file(&output).await;

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvforge_core::error::ErrorKind;

    fn engine_with_binary(binary: &str) -> WkhtmltopdfEngine {
        WkhtmltopdfEngine::new(&RenderConfig {
            wkhtmltopdf_path: binary.to_string(),
            timeout_seconds: 5,
            page_size: "A4".to_string(),
        })
    }

    #[tokio::test]
    async fn missing_binary_reports_render_error() {
        let engine = engine_with_binary("/nonexistent/wkhtmltopdf");
        let err = engine.html_to_pdf("<html></html>").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Render);
        assert!(err.message.contains("spawn"));
    }

    #[tokio::test]
    async fn failing_binary_reports_exit_status() {
        // `false` exits non-zero without reading its arguments.
        let engine = engine_with_binary("false");
        let err = engine.html_to_pdf("<html></html>").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Render);
        assert!(err.message.contains("exited with status"));
    }
}
