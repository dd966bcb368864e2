//! Shared types for the notes backend and its HTTP clients.
//!
//! `Note` is both the wire shape returned by `/api/notes` and the record
//! persisted in the notes JSON file.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A stored note. Field order matches the persisted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub text: String,
    /// Caller-supplied summary, empty when none was given
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /api/notes`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Body of `POST /api/summarize`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Deleted".to_string(),
        }
    }
}

/// Ad hoc error body used by every route that can fail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub notes: usize,
    pub summarizer_configured: bool,
    /// Provider model, present only when the provider is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub uptime_secs: u64,
}
