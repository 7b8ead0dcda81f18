// SPDX-License-Identifier: MIT OR Apache-2.0
//! faultline-problem
#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! Transport mapping: classification categories to HTTP status codes, and
//! RFC 9457 problem-details payloads.
//!
//! Everything here is a pure function over an error value. The status table
//! is fixed and keyed by [`Category`] membership — never by slug identity —
//! so custom slugs map through whatever category they declare.
//!
//! ```
//! use faultline_core::{Fault, Slug};
//! use faultline_problem::{ProblemDetails, status_of};
//!
//! let err = Fault::new(Slug::NotFound).with_details("no such order");
//! assert_eq!(status_of(Some(&err)).as_u16(), 404);
//!
//! let payload = ProblemDetails::from_error(&err, "/orders/7");
//! assert_eq!(payload.title, "not-found");
//! assert_eq!(payload.detail.as_deref(), Some("no such order"));
//! ```

use faultline_core::{Category, Params, classification_of, detail_of, params_of};
use http::StatusCode;
use schemars::JsonSchema;
use serde::Serialize;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

// ---------------------------------------------------------------------------
// Status mapping
// ---------------------------------------------------------------------------

/// The fixed status table, keyed by [`Category`].
#[must_use]
pub fn status_for(category: Category) -> StatusCode {
    match category {
        Category::NotFound => StatusCode::NOT_FOUND,
        Category::Invalid => StatusCode::BAD_REQUEST,
        Category::Unauthorized => StatusCode::UNAUTHORIZED,
        Category::Forbidden => StatusCode::FORBIDDEN,
        Category::Duplicate => StatusCode::CONFLICT,
        Category::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        Category::Internal | Category::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// HTTP status for an optional error at the transport boundary.
///
/// `None` means the operation succeeded and yields `200 OK`. Any error
/// value is classified through its source chain (falling back to
/// `Slug::Unknown`, hence 500) and mapped through [`status_for`].
#[must_use]
pub fn status_of(err: Option<&(dyn StdError + 'static)>) -> StatusCode {
    match err {
        None => StatusCode::OK,
        Some(err) => status_for(classification_of(err).category()),
    }
}

// ---------------------------------------------------------------------------
// ProblemType
// ---------------------------------------------------------------------------

/// URI reference identifying an RFC 9457 problem type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ProblemType(Cow<'static, str>);

impl ProblemType {
    /// The generic problem type: the occurrence carries no semantics beyond
    /// its status code.
    pub const BLANK: ProblemType = ProblemType(Cow::Borrowed("about:blank"));

    /// A problem type for the given URI.
    pub fn new(uri: impl Into<Cow<'static, str>>) -> Self {
        Self(uri.into())
    }

    /// The URI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProblemType {
    fn default() -> Self {
        Self::BLANK
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// ProblemDetails
// ---------------------------------------------------------------------------

/// RFC 9457 problem-details payload.
///
/// Field presence is the contract: `detail` and `params` are omitted
/// entirely when empty, never serialized as null. Consumers serialize this
/// (or the [`ProblemDetails::to_map`] view) and set the response status
/// line themselves; this crate owns no transport.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ProblemDetails {
    /// Problem type URI; `about:blank` unless overridden.
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    /// Stable classification token of the underlying error.
    pub title: String,
    /// HTTP status code for this occurrence.
    pub status: u16,
    /// URI identifying this specific occurrence.
    pub instance: String,
    /// Human-readable explanation, omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Structured per-field context, omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl ProblemDetails {
    /// Build the payload for `err` at the given occurrence URI.
    ///
    /// An error with no recoverable fault degrades totally rather than
    /// failing: title `"unknown"`, status 500, detail `"unknown error"`.
    #[must_use]
    pub fn from_error(err: &(dyn StdError + 'static), instance: impl Into<String>) -> Self {
        let slug = classification_of(err);
        let detail = detail_of(err);
        let params = params_of(err);
        Self {
            problem_type: ProblemType::BLANK,
            title: slug.as_str().to_string(),
            status: status_for(slug.category()).as_u16(),
            instance: instance.into(),
            detail: (!detail.is_empty()).then_some(detail),
            params: (!params.is_empty()).then_some(params),
        }
    }

    /// Replace the problem type URI.
    #[must_use]
    pub fn with_type(mut self, problem_type: ProblemType) -> Self {
        self.problem_type = problem_type;
        self
    }

    /// String-keyed mapping view of the payload, for consumers that build
    /// their response body from a generic map.
    #[must_use]
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            // Serialization of this struct cannot fail or produce a
            // non-object; keep the accessor total anyway.
            _ => serde_json::Map::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
