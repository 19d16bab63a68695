//! cardtime-ocr-tesseract - Tesseract recognizer for cardtime
//!
//! This binary implements the cardtime recognizer protocol, reading JSON
//! requests on stdin and answering on stdout. Recognition is delegated to the
//! `tesseract` command, which must be installed along with the language data
//! for the requested language (`eng`, `bul`).

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use cardtime_core::protocol::{Command, RecognizeParams, Request, Response};
use tokio::process::Command as Process;

/// Treat the card as a single block of text.
const PAGE_SEGMENTATION_MODE: &str = "6";

#[tokio::main]
async fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Failed to read stdin: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => handle_request(request).await,
            Err(e) => Response::error(&format!("Failed to parse request: {}", e)),
        };

        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }

    Ok(())
}

async fn handle_request(request: Request) -> String {
    match request.command {
        Command::Recognize => handle_recognize(&request.params).await,
    }
}

async fn handle_recognize(params: &serde_json::Value) -> String {
    let params: RecognizeParams = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => return Response::error(&format!("Invalid params: {}", e)),
    };

    match recognize(&params).await {
        Ok(text) => Response::success(text),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}

async fn recognize(params: &RecognizeParams) -> Result<String> {
    let image = BASE64
        .decode(params.image.as_bytes())
        .context("Image is not valid base64")?;
    if image.is_empty() {
        bail!("Image is empty");
    }

    let tesseract = which::which("tesseract").context("tesseract is not installed")?;

    let mut file = tempfile::NamedTempFile::new().context("Could not create scratch file")?;
    file.write_all(&image)
        .context("Could not write scratch file")?;
    file.flush()?;

    let output = Process::new(tesseract)
        .arg(file.path())
        .arg("stdout")
        .args(["-l", &params.language])
        .args(["--psm", PAGE_SEGMENTATION_MODE])
        .output()
        .await
        .context("Failed to run tesseract")?;

    if !output.status.success() {
        bail!(
            "tesseract failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn invalid_params_are_reported() {
        let request = Request {
            command: Command::Recognize,
            params: json!({ "language": "eng" }),
        };
        let response = handle_request(request).await;
        assert!(response.contains(r#""status":"error""#));
        assert!(response.contains("Invalid params"));
    }

    #[tokio::test]
    async fn bad_base64_is_an_error_response() {
        let request = Request {
            command: Command::Recognize,
            params: json!({ "image": "not base64!!", "language": "eng" }),
        };
        let response = handle_request(request).await;
        assert!(response.contains("not valid base64"));
    }

    #[tokio::test]
    async fn empty_image_is_rejected() {
        let params = RecognizeParams {
            image: String::new(),
            language: "bul".into(),
        };
        let err = recognize(&params).await.unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
