//! Response envelopes.
//!
//! Every successful response wraps its payload as
//! `{"data": ..., "meta": {"request_id": ..., "pagination": ...}}` and every
//! error response as `{"error": {"code": ..., "detail": ...}}`.

use serde::{Deserialize, Serialize};

use crate::error::CursorError;
use crate::ids::Identified;

/// Cursor metadata attached to paginated listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page size the server used.
    pub per_page: u32,
    /// Whether another page follows this one.
    pub has_more: bool,
    /// Best-effort count of all items. Not authoritative.
    pub estimated_total: u64,
    /// Server-built link to the next page, when provided.
    #[serde(default)]
    pub next: Option<String>,
}

/// Metadata returned with every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Opaque id for support requests.
    pub request_id: String,
    /// Present on paginated endpoints only.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// One page of a listing, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Response metadata.
    pub meta: ResponseMeta,
}

impl<T> Page<T> {
    /// Whether the server reports another page after this one.
    ///
    /// Endpoints without pagination metadata never have more.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.meta.pagination.as_ref().is_some_and(|p| p.has_more)
    }

    /// Page size reported by the server, if the endpoint is paginated.
    #[must_use]
    pub fn per_page(&self) -> Option<u32> {
        self.meta.pagination.as_ref().map(|p| p.per_page)
    }

    /// Request id the server assigned to this page.
    #[must_use]
    pub fn request_id(&self) -> &str {
        &self.meta.request_id
    }
}

impl<T: Identified> Page<T> {
    /// Cursor for the page after this one: the id of the last item.
    ///
    /// Returns `Ok(None)` when this is the final page.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::EmptyPageWithMore`] when the server reports
    /// more results on a page without items.
    pub fn next_cursor(&self) -> Result<Option<&str>, CursorError> {
        if !self.has_more() {
            return Ok(None);
        }
        self.data
            .last()
            .map(|item| Some(item.id()))
            .ok_or_else(|| CursorError::EmptyPageWithMore {
                request_id: self.meta.request_id.clone(),
            })
    }
}

/// Envelope around a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The resource.
    pub data: T,
    /// Response metadata. Some endpoints omit it.
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

impl<T> Envelope<T> {
    /// Request id from the metadata, when the endpoint sends it.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.meta.as_ref().map(|m| m.request_id.as_str())
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    /// Error details.
    pub error: ApiErrorBody,
}

/// Machine-readable error code and human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Error code, e.g. `invalid_field`.
    pub code: String,
    /// Explanation of the error.
    pub detail: String,
    /// Kind of error (`request_error` or `api_error`).
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Link to the documentation for this code.
    #[serde(default)]
    pub documentation_url: Option<String>,
}
