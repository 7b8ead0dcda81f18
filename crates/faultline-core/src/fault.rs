// SPDX-License-Identifier: MIT OR Apache-2.0
//! The typed error value and its enrichment builders.

use crate::slug::{Category, Slug};
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Structured key/value context attached to a [`Fault`].
///
/// Keys are unique; ordering is deterministic. The usual content is
/// per-field validation messages keyed by field name.
pub type Params = BTreeMap<String, String>;

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

// ---------------------------------------------------------------------------
// Fault
// ---------------------------------------------------------------------------

/// Typed error value: a [`Slug`] classification, an underlying cause chain,
/// free-text detail, and structured parameters.
///
/// A fault is created where a failure is detected, enriched as it propagates
/// (each `with_*` method consumes the value and returns a new one — a fault
/// handed to another layer is never mutated in place), and consumed once at
/// the transport boundary. Cloning is cheap: the cause chain is shared
/// behind an `Arc`.
///
/// ```
/// use faultline_core::{Fault, Slug};
///
/// let fault = Fault::new(Slug::Duplicate)
///     .with_details("user already registered")
///     .with_param("email", "taken");
/// assert_eq!(fault.to_string(), "already-exists: user already registered");
/// ```
#[derive(Clone)]
pub struct Fault {
    slug: Slug,
    cause: Cause,
    detail: String,
    params: Params,
}

impl Fault {
    /// Create a fault whose cause is the slug itself, so the rendered
    /// message defaults to the slug's token.
    #[must_use]
    pub fn new(slug: Slug) -> Self {
        let cause: Cause = Arc::new(slug.clone());
        Self {
            slug,
            cause,
            detail: String::new(),
            params: Params::new(),
        }
    }

    /// Create a fault classified as `slug` with an explicit underlying
    /// cause. The cause's message becomes the rendered message.
    #[must_use]
    pub fn wrap(slug: Slug, cause: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            slug,
            cause: Arc::new(cause),
            detail: String::new(),
            params: Params::new(),
        }
    }

    /// Normalize an arbitrary error into a fault.
    ///
    /// If a [`Fault`] exists anywhere in `err`'s source chain it is returned
    /// as-is, with classification, detail, and parameters preserved, so the
    /// operation is idempotent. Anything else is wrapped under
    /// [`Slug::Unknown`], keeping the original message on the cause chain.
    #[must_use]
    pub fn from_error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        if let Some(fault) = crate::extract::find_fault(&err) {
            return fault.clone();
        }
        Self::wrap(Slug::Unknown, err)
    }

    /// The classification slug.
    #[must_use]
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Shorthand for `self.slug().category()`.
    #[must_use]
    pub fn category(&self) -> Category {
        self.slug.category()
    }

    /// Accumulated free-text detail; empty when none has been attached.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Structured parameters; empty when none have been attached.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Chain an additional cause beneath the current one.
    ///
    /// The current cause's message stays visible (`"current: new"`) and the
    /// new error is reachable through `source()`, so downcasting to its
    /// concrete type keeps working further up the stack.
    #[must_use]
    pub fn with_error(mut self, err: impl StdError + Send + Sync + 'static) -> Self {
        let outer = self.cause;
        self.cause = Arc::new(ChainedCause {
            outer,
            inner: Box::new(err),
        });
        self
    }

    /// Append to the detail text, separated by `": "` from what is already
    /// there. Appending to an empty detail inserts no separator.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        if self.detail.is_empty() {
            self.detail = details;
        } else {
            self.detail.push_str(": ");
            self.detail.push_str(&details);
        }
        self
    }

    /// Attach a single key/value parameter, overwriting any existing entry
    /// under the same key.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Copy all entries into the fault's own parameter store, overwriting on
    /// key collision. The source is consumed entry by entry; the fault never
    /// aliases a caller-owned map.
    #[must_use]
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in params {
            self.params.insert(key.into(), value.into());
        }
        self
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}", self.cause)
        } else {
            write!(f, "{}: {}", self.cause, self.detail)
        }
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Fault");
        d.field("slug", &self.slug);
        d.field("cause", &self.cause.to_string());
        if !self.detail.is_empty() {
            d.field("detail", &self.detail);
        }
        if !self.params.is_empty() {
            d.field("params", &self.params);
        }
        d.finish()
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref() as &(dyn StdError + 'static))
    }
}

// ---------------------------------------------------------------------------
// ChainedCause
// ---------------------------------------------------------------------------

/// Cause-chain node built by [`Fault::with_error`]: keeps the previous
/// cause's message in the rendered text while exposing the newly attached
/// error through `source()`.
#[derive(Debug)]
struct ChainedCause {
    outer: Cause,
    inner: Box<dyn StdError + Send + Sync + 'static>,
}

impl fmt::Display for ChainedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.outer, self.inner)
    }
}

impl StdError for ChainedCause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.inner.as_ref() as &(dyn StdError + 'static))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
