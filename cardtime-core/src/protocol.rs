//! Recognizer protocol types.
//!
//! Defines the JSON protocol used between cardtime and recognizer binaries
//! (`cardtime-ocr-<name>`) over stdin/stdout: one request line in, one
//! response line out.

use serde::{Deserialize, Serialize};

/// Commands that recognizers must implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Recognize,
}

/// Request sent from cardtime to a recognizer.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Parameters of `recognize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizeParams {
    /// Image bytes, standard base64.
    pub image: String,
    /// OCR language code, e.g. `eng` or `bul`.
    pub language: String,
}

/// Response sent from a recognizer back to cardtime.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data })
            .unwrap_or_else(|e| Response::<()>::error(&format!("Failed to encode response: {e}")))
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap_or_else(|_| r#"{"status":"error","error":"unknown"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wire_format() {
        let request = Request {
            command: Command::Recognize,
            params: serde_json::json!({"image": "aGk=", "language": "bul"}),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""command":"recognize""#));

        let back: Request = serde_json::from_str(&json).unwrap();
        let params: RecognizeParams = serde_json::from_value(back.params).unwrap();
        assert_eq!(params.language, "bul");
    }

    #[test]
    fn response_wire_format() {
        let ok = Response::success("Artist: Ana");
        assert_eq!(ok, r#"{"status":"success","data":"Artist: Ana"}"#);

        let err = Response::error("engine crashed");
        let parsed: Response<String> = serde_json::from_str(&err).unwrap();
        assert!(matches!(parsed, Response::Error { error } if error == "engine crashed"));
    }
}
