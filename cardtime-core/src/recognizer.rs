//! Text recognition capability.
//!
//! The pipeline only needs `recognize(image, language) -> text`. How that
//! happens is somebody else's business: tests plug in fakes, the CLI uses
//! `OcrEngine`, which runs an external `cardtime-ocr-<name>` binary and
//! speaks the JSON protocol from `crate::protocol` over stdin/stdout.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::error::{CardTimeError, CardTimeResult};
use crate::protocol::{Command as RecognizerCommand, RecognizeParams, Request, Response};

#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Best-effort text for an image. `language` is an OCR code like `eng`.
    async fn recognize(&self, image: &[u8], language: &str) -> CardTimeResult<String>;
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Recognizer backed by a `cardtime-ocr-<name>` executable on `PATH`.
#[derive(Clone, Debug)]
pub struct OcrEngine {
    name: String,
    timeout: Duration,
}

impl OcrEngine {
    pub fn from_name(name: &str) -> Self {
        OcrEngine {
            name: name.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn binary_name(&self) -> String {
        format!("cardtime-ocr-{}", self.name)
    }

    fn binary_path(&self) -> CardTimeResult<PathBuf> {
        which::which(self.binary_name())
            .map_err(|_| CardTimeError::RecognizerNotInstalled(self.name.clone()))
    }

    /// Call a recognizer command, giving up after the configured timeout.
    pub async fn call_with_timeout<R: DeserializeOwned>(
        &self,
        command: RecognizerCommand,
        params: serde_json::Value,
    ) -> CardTimeResult<R> {
        timeout(self.timeout, self.call(command, params))
            .await
            .map_err(|_| CardTimeError::RecognizerTimeout(self.timeout.as_secs()))?
    }

    pub async fn call<R: DeserializeOwned>(
        &self,
        command: RecognizerCommand,
        params: serde_json::Value,
    ) -> CardTimeResult<R> {
        let request = Request { command, params };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| CardTimeError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;
        debug!(binary = %binary_path.display(), ?command, "calling recognizer");

        // Dropping the future (timeout) kills the child.
        let mut child = Command::new(&binary_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                CardTimeError::Recognizer(format!(
                    "Failed to spawn {}: {}",
                    binary_path.display(),
                    e
                ))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| CardTimeError::Recognizer("Recognizer stdin unavailable".into()))?;
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(CardTimeError::Recognizer(format!(
                "Recognizer exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.trim().is_empty() {
            return Err(CardTimeError::Recognizer(
                "Recognizer returned no response".into(),
            ));
        }

        parse_response(&response_str)
    }
}

fn parse_response<R: DeserializeOwned>(raw: &str) -> CardTimeResult<R> {
    let response: Response<R> = serde_json::from_str(raw.trim())
        .map_err(|e| CardTimeError::Recognizer(format!("Failed to parse response: {}", e)))?;

    match response {
        Response::Success { data } => Ok(data),
        Response::Error { error } => Err(CardTimeError::Recognizer(error)),
    }
}

#[async_trait]
impl Recognizer for OcrEngine {
    async fn recognize(&self, image: &[u8], language: &str) -> CardTimeResult<String> {
        let params = RecognizeParams {
            image: BASE64.encode(image),
            language: language.to_string(),
        };
        let params = serde_json::to_value(params)
            .map_err(|e| CardTimeError::Serialization(e.to_string()))?;

        self.call_with_timeout(RecognizerCommand::Recognize, params)
            .await
    }
}
