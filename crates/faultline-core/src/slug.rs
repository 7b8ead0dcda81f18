// SPDX-License-Identifier: MIT OR Apache-2.0
//! Classification slugs and their transport-mapping categories.

use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Transport-mapping family that a [`Slug`] belongs to.
///
/// The set is closed: custom slugs declare membership in one of these, the
/// status table is keyed by them, and nothing else ever reaches the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Referenced entity does not exist.
    NotFound,
    /// Caller input failed validation or semantic checks.
    Invalid,
    /// Missing or invalid credentials.
    Unauthorized,
    /// Authenticated but not permitted.
    Forbidden,
    /// Conflicting or already-existing resource.
    Duplicate,
    /// Feature intentionally unsupported.
    NotImplemented,
    /// Server-side failure, cause not attributable to the caller.
    Internal,
    /// Unclassified error from a collaborator outside this model.
    Unknown,
}

impl Category {
    /// Stable `&'static str` representation (e.g. `"not-found"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not-found",
            Self::Invalid => "invalid",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::Duplicate => "duplicate",
            Self::NotImplemented => "not-implemented",
            Self::Internal => "internal",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Slug
// ---------------------------------------------------------------------------

/// Machine-readable, stable error classification.
///
/// Each built-in variant carries a fixed token that doubles as its error
/// message and as the `title` of a problem payload. The token is guaranteed
/// not to change across patch releases. Applications define their own
/// identifiers with [`Slug::custom`], declaring which [`Category`] the new
/// slug maps through at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slug {
    /// Unclassified error, used as the extraction fallback.
    Unknown,
    /// Referenced entity does not exist.
    NotFound,
    /// Caller input failed validation.
    Invalid,
    /// Missing or invalid credentials.
    Unauthorized,
    /// Authenticated but not permitted.
    Forbidden,
    /// Duplicate resource or action.
    Duplicate,
    /// Feature intentionally unsupported.
    NotImplemented,
    /// Server-side failure.
    Internal,
    /// Application-defined identifier mapped onto a closed [`Category`].
    Custom {
        /// Stable machine token, also used as the display message.
        token: Cow<'static, str>,
        /// Transport category the custom slug declares membership in.
        category: Category,
    },
}

/// Built-in slugs in declaration order, for exhaustive iteration.
const BUILTIN: &[Slug] = &[
    Slug::Unknown,
    Slug::NotFound,
    Slug::Invalid,
    Slug::Unauthorized,
    Slug::Forbidden,
    Slug::Duplicate,
    Slug::NotImplemented,
    Slug::Internal,
];

impl Slug {
    /// Define an application-specific slug under one of the closed
    /// transport categories.
    pub fn custom(token: impl Into<Cow<'static, str>>, category: Category) -> Self {
        Self::Custom {
            token: token.into(),
            category,
        }
    }

    /// The stable token (e.g. `"not-found"`, `"request-invalid"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::NotFound => "not-found",
            Self::Invalid => "request-invalid",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::Duplicate => "already-exists",
            Self::NotImplemented => "not-implemented",
            Self::Internal => "internal-error",
            Self::Custom { token, .. } => token,
        }
    }

    /// The transport category this slug maps through.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Unknown => Category::Unknown,
            Self::NotFound => Category::NotFound,
            Self::Invalid => Category::Invalid,
            Self::Unauthorized => Category::Unauthorized,
            Self::Forbidden => Category::Forbidden,
            Self::Duplicate => Category::Duplicate,
            Self::NotImplemented => Category::NotImplemented,
            Self::Internal => Category::Internal,
            Self::Custom { category, .. } => *category,
        }
    }

    /// All built-in slugs, in declaration order.
    #[must_use]
    pub fn builtin() -> &'static [Slug] {
        BUILTIN
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// A slug is usable as a bare error: its message is its token.
impl std::error::Error for Slug {}

// Serialized as the token string. Deserialization is deliberately not
// provided: a custom token cannot recover its category from the wire.
impl Serialize for Slug {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
