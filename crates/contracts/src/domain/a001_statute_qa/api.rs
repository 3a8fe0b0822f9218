use serde::{Deserialize, Serialize};

/// Response of `GET /pdfs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfListResponse {
    /// Filenames known to the server. Informational only: the selector
    /// renders the static catalog, not this list.
    pub pdfs: Vec<String>,
    pub count: u64,
}

/// Response of `GET /process-pdf/{filename}`.
///
/// The UI consumes `text`; the remaining fields ride along from the
/// extraction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPdfResponse {
    /// Full extracted document text
    pub text: String,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default)]
    pub display: Option<String>,

    #[serde(default)]
    pub text_length: Option<u64>,
}

/// Body of `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,

    /// Extracted text of the selected document, sent verbatim
    pub context: String,
}

/// Response of `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,

    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub context_length: Option<u64>,

    /// Set alongside a fallback bullet `answer` when generation failed
    /// upstream but the request itself succeeded (HTTP 200).
    #[serde(default)]
    pub error: Option<String>,
}

/// Optional `{ "error": ... }` payload carried by failure responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best-effort extraction of the `error` field from a failure body.
    /// Returns `None` for non-JSON bodies or bodies without the field,
    /// letting the call site fall back to its generic message.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
    }
}
